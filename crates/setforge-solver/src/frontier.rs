//! Cost-ordered frontier of unexpanded states.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::state::SearchState;

/// Heap entry ordering states so the cheapest pops first.
///
/// Equal costs are broken by the chosen id sequence, smallest first, which
/// makes the pop order a total order over distinct states.
#[derive(Debug)]
struct FrontierEntry {
    state: SearchState,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reversed so lower cost = higher priority
        other
            .state
            .cost()
            .cmp(&self.state.cost())
            .then_with(|| other.state.chosen_ids().cmp(self.state.chosen_ids()))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of search states keyed by cost.
///
/// # Example
///
/// ```
/// use setforge_solver::{Frontier, SearchState};
///
/// let mut frontier = Frontier::new();
/// assert!(frontier.pop().is_none());
///
/// frontier.push(SearchState::root());
/// assert_eq!(frontier.len(), 1);
/// assert_eq!(frontier.pop(), Some(SearchState::root()));
/// assert!(frontier.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: SearchState) {
        self.heap.push(FrontierEntry { state });
    }

    /// Removes the cheapest state.
    pub fn pop(&mut self) -> Option<SearchState> {
        self.heap.pop().map(|entry| entry.state)
    }

    /// Returns the cheapest state without removing it.
    pub fn peek(&self) -> Option<&SearchState> {
        self.heap.peek().map(|entry| &entry.state)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
