//! Construction options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options applied uniformly when patterns are added and haystacks scanned.
///
/// With the `serde` feature enabled, this struct can be embedded in a larger
/// configuration file; missing fields take their default values.
///
/// # Examples
///
/// ```
/// use acscan::{AcTrie, TrieConfig};
///
/// let config = TrieConfig::default().case_insensitive(true);
/// let mut trie = AcTrie::with_config(config);
/// trie.add("Abc", 1).unwrap();
///
/// let m = trie.find("xyzABCxyz").unwrap();
/// assert_eq!((3, 1), (m.start(), m.pattern_id()));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrieConfig {
    /// Lower-cases every scalar value of patterns and haystacks.
    pub case_insensitive: bool,
}

impl TrieConfig {
    /// Creates the default, case-sensitive configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            case_insensitive: false,
        }
    }

    /// Specifies whether matching ignores case.
    #[must_use]
    pub const fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }
}
