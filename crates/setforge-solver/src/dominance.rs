//! Dominance memo for pruning redundant search states.
//!
//! Two states with the same cost vector look identical to the frontier. The
//! one with fewer points is redundant as long as it cannot take any problem
//! the other one cannot, i.e. its next index is no smaller. The memo records,
//! per cost vector, the Pareto set of `(next_index, points)` pairs seen so far.

use std::collections::HashMap;

use smallvec::SmallVec;

use setforge_config::DominanceMode;
use setforge_core::{Points, SelectionCost};

type Front = SmallVec<[(usize, Points); 2]>;

/// Records the best states seen per cost vector.
///
/// Scoped to one search call. Cost keys are never removed; within a key a
/// newly recorded pair drops the pairs it dominates.
///
/// # Example
///
/// ```
/// use setforge_config::DominanceMode;
/// use setforge_core::SelectionCost;
/// use setforge_solver::DominanceMemo;
///
/// let mut memo = DominanceMemo::new(DominanceMode::Pareto);
/// let cost = SelectionCost::of(4, 2, -3, 100);
///
/// assert!(memo.admit(cost, 3, 10));
/// // Same cost, later index, fewer points: nothing it could still reach
/// assert!(!memo.admit(cost, 4, 8));
/// // Earlier index keeps it alive even with fewer points
/// assert!(memo.admit(cost, 2, 8));
/// ```
#[derive(Debug)]
pub struct DominanceMemo {
    mode: DominanceMode,
    fronts: HashMap<SelectionCost, Front>,
}

impl DominanceMemo {
    pub fn new(mode: DominanceMode) -> Self {
        Self {
            mode,
            fronts: HashMap::new(),
        }
    }

    pub fn mode(&self) -> DominanceMode {
        self.mode
    }

    /// Decides whether a successor is kept, recording it if so.
    ///
    /// Returns false when a recorded state with the same cost dominates it.
    /// In [`DominanceMode::Cost`] the next index is ignored, so the check
    /// reduces to "absent or strictly more points than the best recorded".
    pub fn admit(&mut self, cost: SelectionCost, next_index: usize, points: Points) -> bool {
        let index = match self.mode {
            DominanceMode::Off => return true,
            DominanceMode::Cost => 0,
            DominanceMode::Pareto => next_index,
        };

        let front = self.fronts.entry(cost).or_default();
        if front.iter().any(|&(i, p)| i <= index && p >= points) {
            return false;
        }

        front.retain(|&mut (i, p)| !(index <= i && points >= p));
        front.push((index, points));
        true
    }

    /// Returns the best points recorded for a cost vector.
    pub fn best_points(&self, cost: &SelectionCost) -> Option<Points> {
        self.fronts
            .get(cost)
            .and_then(|front| front.iter().map(|&(_, p)| p).max())
    }

    /// Returns the number of distinct cost vectors recorded.
    pub fn len(&self) -> usize {
        self.fronts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fronts.is_empty()
    }

    /// Returns the total number of recorded `(next_index, points)` pairs.
    pub fn entry_count(&self) -> usize {
        self.fronts.values().map(|front| front.len()).sum()
    }
}
