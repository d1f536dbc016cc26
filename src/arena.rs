//! Storage of automaton states.
//!
//! All states live in one vector and refer to each other by [`StateId`], so
//! failure links and transitions are plain indices. Dropping the arena
//! releases every state at once.

use std::collections::BTreeMap;

use crate::errors::{AcscanError, Result};

/// Identifier of a state in a [`StateArena`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct StateId(u32);

impl StateId {
    /// The root state, created together with the arena.
    pub const ROOT: Self = Self(0);

    /// Returns the raw index.
    #[inline(always)]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the raw index as a vector position.
    #[inline(always)]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Mapping edge labels to child ids using `BTreeMap`.
pub type EdgeMap = BTreeMap<char, StateId>;

/// A node of the automaton.
#[derive(Clone, Debug)]
pub struct State {
    pub(crate) edges: EdgeMap,
    pub(crate) fail: Option<StateId>,
    pub(crate) depth: u32,
    pub(crate) final_len: u32,
    pub(crate) pattern_id: Option<i32>,
    pub(crate) final_id: Option<i32>,
}

impl State {
    // Non-root states fail to the root until failure links are recomputed.
    fn new(depth: u32) -> Self {
        Self {
            edges: EdgeMap::new(),
            fail: (depth != 0).then_some(StateId::ROOT),
            depth,
            final_len: 0,
            pattern_id: None,
            final_id: None,
        }
    }

    /// Returns the child reached by `c`, if any.
    #[inline(always)]
    pub fn child(&self, c: char) -> Option<StateId> {
        self.edges.get(&c).copied()
    }

    /// Iterates over the outgoing transitions in label order.
    #[inline]
    pub fn edges(&self) -> impl Iterator<Item = (char, StateId)> + '_ {
        self.edges.iter().map(|(&c, &id)| (c, id))
    }

    /// Failure link. [`None`] only for the root.
    #[inline(always)]
    pub const fn fail(&self) -> Option<StateId> {
        self.fail
    }

    /// Number of scalar values on the path from the root.
    #[inline(always)]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Length of the longest pattern recognized on reaching this state, or 0.
    #[inline(always)]
    pub const fn final_len(&self) -> u32 {
        self.final_len
    }

    /// Id of the pattern ending exactly at this state.
    #[inline(always)]
    pub const fn pattern_id(&self) -> Option<i32> {
        self.pattern_id
    }

    /// Id of the pattern whose length is [`State::final_len`].
    #[inline(always)]
    pub const fn final_id(&self) -> Option<i32> {
        self.final_id
    }

    /// Returns `true` if a pattern ends exactly at this state.
    #[inline(always)]
    pub const fn is_terminus(&self) -> bool {
        self.pattern_id.is_some()
    }
}

/// Owner of every state of an automaton.
#[derive(Clone, Debug)]
pub struct StateArena {
    states: Vec<State>,
    // Number of states after which `alloc` fails as if the allocator refused.
    #[cfg(test)]
    pub(crate) alloc_limit: Option<usize>,
}

impl StateArena {
    /// Creates an arena holding only the root state.
    pub(crate) fn new() -> Self {
        Self {
            states: vec![State::new(0)],
            #[cfg(test)]
            alloc_limit: None,
        }
    }

    /// Allocates a fresh state at the given depth.
    ///
    /// The new state is not reachable until the caller links it with an edge.
    ///
    /// # Errors
    ///
    /// [`AcscanError`] is returned when the arena cannot grow, either because
    /// the allocator refuses or because state ids would exceed `u32`.
    pub(crate) fn alloc(&mut self, depth: u32) -> Result<StateId> {
        let id = u32::try_from(self.states.len())
            .map_err(|_| AcscanError::automaton_scale("state_id", u32::MAX))?;
        #[cfg(test)]
        if self.alloc_limit.is_some_and(|limit| self.states.len() >= limit) {
            return Err(Vec::<State>::new().try_reserve(usize::MAX).unwrap_err().into());
        }
        self.states.try_reserve(1)?;
        self.states.push(State::new(depth));
        Ok(StateId(id))
    }

    /// Adds the transition `parent --c--> child`.
    #[inline]
    pub(crate) fn add_edge(&mut self, parent: StateId, c: char, child: StateId) {
        debug_assert!(self.get(parent).child(c).is_none());
        self.get_mut(parent).edges.insert(c, child);
    }

    /// Returns the state with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this arena.
    #[inline(always)]
    pub fn get(&self, id: StateId) -> &State {
        &self.states[id.as_usize()]
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id.as_usize()]
    }

    /// Returns the root state.
    #[inline(always)]
    pub fn root(&self) -> &State {
        self.get(StateId::ROOT)
    }

    /// Follows the transition on `c` from `id`, if any.
    #[inline(always)]
    pub fn child(&self, id: StateId, c: char) -> Option<StateId> {
        self.get(id).child(c)
    }

    /// Returns the number of states, including the root.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`: the root is allocated on creation.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterates over all states with their ids, in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (StateId(i as u32), s))
    }

    /// Returns the approximate amount of heap used by the arena in bytes.
    ///
    /// `BTreeMap` node overhead is not counted; each edge is charged its key
    /// and value size.
    pub fn heap_bytes(&self) -> usize {
        self.states.capacity() * std::mem::size_of::<State>()
            + self
                .states
                .iter()
                .map(|s| s.edges.len() * std::mem::size_of::<(char, StateId)>())
                .sum::<usize>()
    }
}
