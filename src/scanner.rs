//! Single-pass search for the first completed match.

use crate::arena::StateId;
use crate::decoder::decode_next;
use crate::{AcTrie, Match};

impl AcTrie {
    /// Scans `haystack` once and returns the first completed match.
    ///
    /// The scan stops as soon as any registered pattern ends at the current
    /// position, so a short pattern completing early wins over a longer one
    /// that would complete later. Malformed UTF-8 never aborts the scan; bad
    /// bytes are skipped, so a match may span them.
    ///
    /// The start offset is tracked opportunistically: it is moved to the end
    /// of the previous character whenever matching restarts at the root, and
    /// past the current character whenever no pattern can continue through
    /// it. It may therefore include skipped bytes, and when patterns of
    /// different lengths share suffixes, it may point before the start of the
    /// reported pattern.
    ///
    /// # Arguments
    ///
    /// * `haystack` - Bytes to search, decoded as UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use acscan::AcTrie;
    ///
    /// let mut trie = AcTrie::new(true);
    /// trie.add("Abc", 1).unwrap();
    ///
    /// let m = trie.find(b"xyzABCxyz").unwrap();
    /// assert_eq!((3, 6, 1), (m.start(), m.end(), m.pattern_id()));
    /// ```
    pub fn find<P>(&self, haystack: P) -> Option<Match>
    where
        P: AsRef<[u8]>,
    {
        let haystack = haystack.as_ref();
        let mut state_id = StateId::ROOT;
        let mut pattern_start = 0;
        let mut prev = 0;
        let mut pos = 0;

        while let Some(c) = decode_next(haystack, &mut pos) {
            let c = self.mapper.get(c);

            match self.next_state(state_id, c) {
                None => {
                    // No suffix of the text read so far can start a pattern.
                    state_id = StateId::ROOT;
                    pattern_start = pos;
                }
                Some((from_id, next_id)) => {
                    if from_id == StateId::ROOT {
                        pattern_start = prev;
                    }
                    state_id = next_id;
                    let state = self.arena.get(state_id);
                    // final_id is Some exactly when final_len > 0.
                    if let Some(pattern_id) = state.final_id() {
                        return Some(Match {
                            start: pattern_start,
                            end: pos,
                            pattern_id,
                        });
                    }
                }
            }

            prev = pos;
        }
        None
    }

    /// Returns `true` if any registered pattern occurs in `haystack`.
    ///
    /// # Examples
    ///
    /// ```
    /// use acscan::AcTrie;
    ///
    /// let mut trie = AcTrie::new(false);
    /// trie.add("spam", 0).unwrap();
    ///
    /// assert!(trie.is_match("no spam please"));
    /// assert!(!trie.is_match("no SPAM please"));
    /// ```
    #[inline]
    pub fn is_match<P>(&self, haystack: P) -> bool
    where
        P: AsRef<[u8]>,
    {
        self.find(haystack).is_some()
    }

    /// Follows failure links from `state_id` until a state with a transition
    /// on `c` is found.
    ///
    /// Returns that state and the transition target, or [`None`] if the
    /// failure chain ran past the root.
    #[inline(always)]
    fn next_state(&self, state_id: StateId, c: char) -> Option<(StateId, StateId)> {
        let mut q = Some(state_id);
        while let Some(q_id) = q {
            if let Some(next_id) = self.arena.child(q_id, c) {
                return Some((q_id, next_id));
            }
            q = self.arena.get(q_id).fail();
        }
        None
    }
}
