//! # acscan: first-match multi-pattern scanner
//!
//! An Aho-Corasick automaton over Unicode scalar values that reports the
//! first place in a haystack where any registered pattern completes.
//!
//! Patterns can be registered one at a time and the automaton is searchable
//! after every registration. Haystacks are byte slices decoded leniently as
//! UTF-8, so malformed input never makes a search fail.
//!
//! ## Examples
//!
//! ```
//! use acscan::AcTrie;
//!
//! let mut trie = AcTrie::new(false);
//! trie.add("cat", 1).unwrap();
//! trie.add("dog", 2).unwrap();
//!
//! let m = trie.find("the dog and the cat").unwrap();
//! assert_eq!((4, 7, 2), (m.start(), m.end(), m.pattern_id()));
//! ```
//!
//! The scan stops at the first completed match, not the longest one:
//!
//! ```
//! use acscan::AcTrie;
//!
//! let mut trie = AcTrie::new(false);
//! trie.add("hers", 2).unwrap();
//! trie.add("he", 1).unwrap();
//!
//! let m = trie.find("ahersx").unwrap();
//! assert_eq!((1, 3, 1), (m.start(), m.end(), m.pattern_id()));
//! ```
//!
//! ## Case-insensitive matching
//!
//! Each scalar value is lower-cased on its own; no Unicode case folding or
//! normalization takes place.
//!
//! ```
//! use acscan::AcTrieBuilder;
//!
//! let trie = AcTrieBuilder::new()
//!     .case_insensitive(true)
//!     .build_with_ids([("Größe", 7)])
//!     .unwrap();
//!
//! let m = trie.find("GRÖSSE oder GRÖßE").unwrap();
//! assert_eq!((13, 20, 7), (m.start(), m.end(), m.pattern_id()));
//! ```
//!
//! ## Sharing
//!
//! [`AcTrie::add`] takes `&mut self` and [`AcTrie::find`] takes `&self`, so an
//! automaton cannot be searched while it is being extended. Once built, it is
//! `Send + Sync` and can be shared behind an `Arc` for concurrent searches.

#![warn(missing_docs)]

pub mod arena;
mod builder;
mod config;
pub mod decoder;
pub mod errors;
mod mapper;
mod scanner;
mod trie;


pub use builder::AcTrieBuilder;
pub use config::TrieConfig;
pub use errors::{AcscanError, Result};
pub use trie::AcTrie;

/// Match result.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Match {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) pattern_id: i32,
}

impl Match {
    /// Byte offset at which the match is taken to start.
    ///
    /// See [`AcTrie::find`] for how this offset is tracked.
    #[inline(always)]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the character that completed the match.
    #[inline(always)]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Id of the completed pattern.
    #[inline(always)]
    pub const fn pattern_id(&self) -> i32 {
        self.pattern_id
    }
}

impl From<Match> for (usize, i32) {
    fn from(m: Match) -> Self {
        (m.start, m.pattern_id)
    }
}
