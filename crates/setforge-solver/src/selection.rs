//! The chosen problem set reported to callers.

use std::fmt;

use setforge_core::{ItemId, Points, SelectionCost};

use crate::state::SearchState;

/// A goal selection: ids in ascending order with its cost and points.
///
/// Displays as the ids separated by single spaces, which is the output
/// format of the command line. The empty selection displays as an empty
/// string.
///
/// # Example
///
/// ```
/// use setforge_core::SelectionCost;
/// use setforge_solver::Selection;
///
/// let selection = Selection::new(vec![4, 1], SelectionCost::of(7, 2, -6, 420), 13);
/// assert_eq!(selection.ids(), &[1, 4]);
/// assert_eq!(selection.to_string(), "1 4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ItemId>,
    cost: SelectionCost,
    points: Points,
}

impl Selection {
    pub fn new(mut ids: Vec<ItemId>, cost: SelectionCost, points: Points) -> Self {
        ids.sort_unstable();
        Self { ids, cost, points }
    }

    /// Builds the selection a goal state represents.
    pub fn from_state(state: SearchState) -> Self {
        let cost = state.cost();
        let points = state.points();
        Self::new(state.into_chosen_ids().into_vec(), cost, points)
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn cost(&self) -> SelectionCost {
        self.cost
    }

    pub fn points(&self) -> Points {
        self.points
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids = self.ids.iter();
        if let Some(first) = ids.next() {
            write!(f, "{}", first)?;
            for id in ids {
                write!(f, " {}", id)?;
            }
        }
        Ok(())
    }
}
