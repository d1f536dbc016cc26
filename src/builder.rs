//! Construction of the automaton.
//!
//! [`AcTrie::add`] extends the trie with one pattern and then recomputes the
//! failure links of every state, so the automaton can be searched between
//! insertions. [`AcTrieBuilder`] inserts a whole pattern set and recomputes
//! once; both produce the same automaton.

use tracing::{debug, trace};

use crate::arena::StateId;
use crate::config::TrieConfig;
use crate::errors::{AcscanError, Result};
use crate::AcTrie;

impl AcTrie {
    /// Registers a pattern.
    ///
    /// Registering a pattern that was already added overwrites its id; the
    /// automaton keeps no record of the earlier one.
    ///
    /// # Arguments
    ///
    /// * `pattern` - Non-empty pattern.
    /// * `pattern_id` - Identifier reported by [`AcTrie::find`].
    ///
    /// # Errors
    ///
    /// [`AcscanError`] is returned when
    ///   - `pattern` is empty,
    ///   - the arena cannot grow, or
    ///   - the number of states exceeds `u32::MAX`.
    ///
    /// On error, states created for a prefix of `pattern` stay in the trie
    /// with valid failure links, and no pattern is registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use acscan::AcTrie;
    ///
    /// let mut trie = AcTrie::new(false);
    /// trie.add("he", 1).unwrap();
    /// trie.add("hers", 2).unwrap();
    ///
    /// let m = trie.find("ahersx").unwrap();
    /// assert_eq!((1, 1), (m.start(), m.pattern_id()));
    ///
    /// assert!(trie.add("", 3).is_err());
    /// ```
    pub fn add<P>(&mut self, pattern: P, pattern_id: i32) -> Result<()>
    where
        P: AsRef<str>,
    {
        let inserted = self.insert(pattern.as_ref(), pattern_id);
        // States linked before a failure need their failure links too.
        self.rebuild_fails();
        inserted?;
        debug!(
            pattern_id,
            num_states = self.arena.len(),
            "added pattern"
        );
        Ok(())
    }

    /// Extends the trie with `pattern` without touching failure links.
    ///
    /// New states fail to the root until [`AcTrie::rebuild_fails`] runs.
    pub(crate) fn insert(&mut self, pattern: &str, pattern_id: i32) -> Result<()> {
        if pattern.is_empty() {
            return Err(AcscanError::invalid_argument("pattern.len()", ">=", 1));
        }

        let mut state_id = StateId::ROOT;
        let mut depth = 0u32;
        for c in pattern.chars() {
            let c = self.mapper.get(c);
            depth = depth
                .checked_add(1)
                .ok_or_else(|| AcscanError::invalid_argument("pattern.len()", "<=", u32::MAX))?;

            if let Some(next_state_id) = self.arena.child(state_id, c) {
                state_id = next_state_id;
                continue;
            }

            // Reserves before allocating so that a failure never leaves an
            // unlinked state behind.
            let list_idx = depth as usize - 1;
            if self.depth_lists.len() == list_idx {
                self.depth_lists.try_reserve(1)?;
                self.depth_lists.push(vec![]);
            }
            self.depth_lists[list_idx].try_reserve(1)?;
            let next_state_id = self.arena.alloc(depth)?;
            self.depth_lists[list_idx].push(next_state_id);
            self.arena.add_edge(state_id, c, next_state_id);
            state_id = next_state_id;
        }

        let terminus = self.arena.get_mut(state_id);
        terminus.final_len = depth;
        terminus.pattern_id = Some(pattern_id);
        terminus.final_id = Some(pattern_id);
        self.num_patterns += 1;
        Ok(())
    }

    /// Recomputes failure links and final lengths of all states.
    ///
    /// States are visited in non-decreasing depth order, so the failure target
    /// of a parent is always final before its children are processed. Depth-1
    /// states keep the root as their failure target.
    pub(crate) fn rebuild_fails(&mut self) {
        trace!(num_states = self.arena.len(), "rebuilding failure links");
        for list_idx in 0..self.depth_lists.len() {
            for i in 0..self.depth_lists[list_idx].len() {
                let state_id = self.depth_lists[list_idx][i];

                // The failure chain of a state only visits shallower states,
                // so its edges can be detached while the chain is walked.
                let edges = std::mem::take(&mut self.arena.get_mut(state_id).edges);
                let fail = self.arena.get(state_id).fail();
                for (&c, &child_id) in &edges {
                    let new_fail_id = self.fail_target(fail, c);
                    let (final_len, final_id) = {
                        let f = self.arena.get(new_fail_id);
                        (f.final_len(), f.final_id())
                    };

                    let child = self.arena.get_mut(child_id);
                    child.fail = Some(new_fail_id);
                    // A terminus is deeper than any pattern it can inherit.
                    if !child.is_terminus() {
                        debug_assert!(final_len >= child.final_len);
                        child.final_len = final_len;
                        child.final_id = final_id;
                    }
                }
                self.arena.get_mut(state_id).edges = edges;
            }
        }
    }

    /// Walks the failure chain from `fail` until a state with a transition on
    /// `c` is found, and returns the target of that transition.
    #[inline(always)]
    fn fail_target(&self, mut fail: Option<StateId>, c: char) -> StateId {
        while let Some(fail_id) = fail {
            if let Some(child_id) = self.arena.child(fail_id, c) {
                return child_id;
            }
            fail = self.arena.get(fail_id).fail();
        }
        StateId::ROOT
    }
}

/// Builder for [`AcTrie`] from a whole pattern set.
///
/// Patterns are inserted in order and failure links are computed once at the
/// end. The result is the same automaton that repeated [`AcTrie::add`] calls
/// would produce.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcTrieBuilder {
    config: TrieConfig,
}

impl AcTrieBuilder {
    /// Creates a new [`AcTrieBuilder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use acscan::AcTrieBuilder;
    ///
    /// let patterns = vec!["全世界", "世界", "に"];
    /// let trie = AcTrieBuilder::new().build(patterns).unwrap();
    ///
    /// let m = trie.find("全世界中に").unwrap();
    /// assert_eq!((0, 9, 0), (m.start(), m.end(), m.pattern_id()));
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            config: TrieConfig::new(),
        }
    }

    /// Specifies whether matching ignores case.
    #[must_use]
    pub const fn case_insensitive(mut self, yes: bool) -> Self {
        self.config = self.config.case_insensitive(yes);
        self
    }

    /// Replaces all options with `config`.
    #[must_use]
    pub const fn config(mut self, config: TrieConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds an automaton, associating the id `i` with `patterns[i]`.
    ///
    /// # Errors
    ///
    /// [`AcscanError`] is returned when
    ///   - `patterns` contains entries of length zero,
    ///   - `patterns` has more than `i32::MAX` entries, or
    ///   - the scale of the resulting automaton exceeds the expected one.
    pub fn build<I, P>(self, patterns: I) -> Result<AcTrie>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut trie = AcTrie::with_config(self.config);
        for (i, pattern) in patterns.into_iter().enumerate() {
            let pattern_id = i32::try_from(i)
                .map_err(|_| AcscanError::invalid_argument("patterns.len()", "<=", i32::MAX))?;
            trie.insert(pattern.as_ref(), pattern_id)?;
        }
        Ok(self.finish(trie))
    }

    /// Builds an automaton from pattern-id pairs.
    ///
    /// Ids need not be unique; a duplicate pattern keeps the id given last.
    ///
    /// # Errors
    ///
    /// [`AcscanError`] is returned when
    ///   - `patids` contains patterns of length zero, or
    ///   - the scale of the resulting automaton exceeds the expected one.
    ///
    /// # Examples
    ///
    /// ```
    /// use acscan::AcTrieBuilder;
    ///
    /// let patids = vec![("Cat", 10), ("dog", 20)];
    /// let trie = AcTrieBuilder::new()
    ///     .case_insensitive(true)
    ///     .build_with_ids(patids)
    ///     .unwrap();
    ///
    /// let m = trie.find("a CAT").unwrap();
    /// assert_eq!((2, 5, 10), (m.start(), m.end(), m.pattern_id()));
    /// ```
    pub fn build_with_ids<I, P>(self, patids: I) -> Result<AcTrie>
    where
        I: IntoIterator<Item = (P, i32)>,
        P: AsRef<str>,
    {
        let mut trie = AcTrie::with_config(self.config);
        for (pattern, pattern_id) in patids {
            trie.insert(pattern.as_ref(), pattern_id)?;
        }
        Ok(self.finish(trie))
    }

    fn finish(self, mut trie: AcTrie) -> AcTrie {
        trie.rebuild_fails();
        debug!(
            num_patterns = trie.num_patterns(),
            num_states = trie.num_states(),
            case_insensitive = self.config.case_insensitive,
            "built automaton"
        );
        trie
    }
}
