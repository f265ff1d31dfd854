//! Search state representation and expansion.
//!
//! Each state is a partial selection built by taking problems in canonical
//! (ascending id) order. Expanding a state may take any problem at or after
//! its next index, so every subset is reached by exactly one sequence of
//! expansions.

use smallvec::SmallVec;

use setforge_core::{Item, ItemId, Points, ProblemSet, SelectionCost};

/// Ids taken so far, in canonical order.
pub type ChosenIds = SmallVec<[ItemId; 8]>;

/// A node in the selection search graph.
///
/// States are values: expansion builds new states and never mutates the
/// parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Accumulated cost of the chosen problems.
    cost: SelectionCost,

    /// Accumulated points, saturating at `Points::MAX`.
    points: Points,

    /// Canonical index of the first problem this state may still take.
    next_index: usize,

    /// Ids taken to reach this state.
    chosen: ChosenIds,
}

impl SearchState {
    /// Creates the empty selection at the start of canonical order.
    pub fn root() -> Self {
        Self {
            cost: SelectionCost::ZERO,
            points: 0,
            next_index: 0,
            chosen: ChosenIds::new(),
        }
    }

    /// Creates the state reached by taking `item` at canonical `index`.
    pub fn child(&self, index: usize, item: &Item) -> Self {
        let mut chosen = self.chosen.clone();
        chosen.push(item.id());
        Self {
            cost: self.cost + item.cost(),
            points: self.points.saturating_add(item.points()),
            next_index: index + 1,
            chosen,
        }
    }

    #[inline]
    pub fn cost(&self) -> SelectionCost {
        self.cost
    }

    #[inline]
    pub fn points(&self) -> Points {
        self.points
    }

    #[inline]
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Returns the chosen ids in the order they were taken.
    #[inline]
    pub fn chosen_ids(&self) -> &[ItemId] {
        &self.chosen
    }

    /// Returns the number of problems taken.
    #[inline]
    pub fn depth(&self) -> usize {
        self.chosen.len()
    }

    /// Returns whether this state meets the point target.
    #[inline]
    pub fn is_goal(&self, target: Points) -> bool {
        self.points >= target
    }

    /// Returns an iterator over every successor of this state.
    pub fn successors<'a>(&'a self, problems: &'a ProblemSet) -> Successors<'a> {
        Successors {
            parent: self,
            items: problems.items(),
            index: self.next_index,
        }
    }

    /// Consumes the state and returns its chosen ids.
    pub fn into_chosen_ids(self) -> ChosenIds {
        self.chosen
    }
}

/// Successors of a state, one per remaining problem in canonical order.
#[derive(Debug)]
pub struct Successors<'a> {
    parent: &'a SearchState,
    items: &'a [Item],
    index: usize,
}

impl Iterator for Successors<'_> {
    type Item = SearchState;

    fn next(&mut self) -> Option<SearchState> {
        let item = self.items.get(self.index)?;
        let child = self.parent.child(self.index, item);
        self.index += 1;
        Some(child)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Successors<'_> {}
