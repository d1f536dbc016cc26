//! The automaton type and its introspection.

use crate::arena::{StateArena, StateId};
use crate::config::TrieConfig;
use crate::mapper::CaseMapper;

/// Multi-pattern automaton reporting the first completed match in a haystack.
///
/// The automaton is an Aho-Corasick trie over Unicode scalar values. Patterns
/// are registered one at a time with [`AcTrie::add`], and the automaton is
/// fully usable after every call. [`AcTrie::find`] scans a haystack once from
/// left to right and stops at the first position where any pattern completes.
///
/// # Build instructions
///
/// - [`AcTrie::new`] creates an empty automaton to which patterns are added
///   incrementally.
///
/// - [`AcTrieBuilder`](crate::AcTrieBuilder) builds an automaton from a whole
///   pattern set, computing failure links once at the end.
///
/// Dropping the automaton releases all of its states at once.
///
/// # Examples
///
/// ```
/// use acscan::AcTrie;
///
/// let mut trie = AcTrie::new(false);
/// trie.add("cat", 1).unwrap();
/// trie.add("dog", 2).unwrap();
///
/// let m = trie.find("the dog and the cat").unwrap();
/// assert_eq!((4, 7, 2), (m.start(), m.end(), m.pattern_id()));
///
/// assert_eq!(None, trie.find("the bird"));
/// ```
#[derive(Clone, Debug)]
pub struct AcTrie {
    pub(crate) arena: StateArena,
    pub(crate) mapper: CaseMapper,
    // depth_lists[d - 1] holds the states at depth d.
    pub(crate) depth_lists: Vec<Vec<StateId>>,
    pub(crate) num_patterns: usize,
}

impl Default for AcTrie {
    fn default() -> Self {
        Self::new(false)
    }
}

impl AcTrie {
    /// Creates an automaton holding only the root state.
    ///
    /// # Arguments
    ///
    /// * `case_insensitive` - Lower-cases every scalar value of patterns and
    ///   haystacks before using it.
    #[must_use]
    pub fn new(case_insensitive: bool) -> Self {
        Self::with_config(TrieConfig::new().case_insensitive(case_insensitive))
    }

    /// Creates an empty automaton from a [`TrieConfig`].
    #[must_use]
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            arena: StateArena::new(),
            mapper: CaseMapper::new(config.case_insensitive),
            depth_lists: vec![],
            num_patterns: 0,
        }
    }

    /// Returns the configuration this automaton was created with.
    #[must_use]
    pub const fn config(&self) -> TrieConfig {
        TrieConfig {
            case_insensitive: self.mapper.is_folding(),
        }
    }

    /// Returns `true` if matching ignores case.
    #[must_use]
    pub const fn is_case_insensitive(&self) -> bool {
        self.mapper.is_folding()
    }

    /// Returns the total number of states, including the root.
    #[must_use]
    pub fn num_states(&self) -> usize {
        self.arena.len()
    }

    /// Returns the number of successful [`AcTrie::add`] calls, counting
    /// re-registrations of the same pattern.
    #[must_use]
    pub const fn num_patterns(&self) -> usize {
        self.num_patterns
    }

    /// Returns the state storage for inspection.
    #[must_use]
    pub const fn arena(&self) -> &StateArena {
        &self.arena
    }

    /// Returns the approximate amount of heap used by this automaton in bytes.
    #[must_use]
    pub fn heap_bytes(&self) -> usize {
        self.arena.heap_bytes()
            + self.depth_lists.capacity() * std::mem::size_of::<Vec<StateId>>()
            + self
                .depth_lists
                .iter()
                .map(|l| l.capacity() * std::mem::size_of::<StateId>())
                .sum::<usize>()
    }
}
