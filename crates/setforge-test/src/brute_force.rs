//! Exhaustive oracle over all subsets.
//!
//! Enumerates every subset by bitmask, so only usable for small instances.

use setforge_core::{Instance, ItemId, Points, SelectionCost};

/// Largest problem count the oracle accepts.
pub const MAX_PROBLEMS: usize = 20;

/// The minimum cost over all goal subsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optimum {
    pub cost: SelectionCost,
    /// Lexicographically smallest optimal id set, ascending.
    pub ids: Vec<ItemId>,
    /// Every optimal id set, ascending, in lexicographic order.
    pub all: Vec<Vec<ItemId>>,
}

/// Finds the cheapest subset reaching the target, or `None` if none does.
///
/// # Panics
///
/// Panics if the instance has more than [`MAX_PROBLEMS`] problems.
pub fn optimum(instance: &Instance) -> Option<Optimum> {
    let items = instance.problems.items();
    assert!(
        items.len() <= MAX_PROBLEMS,
        "brute force limited to {} problems",
        MAX_PROBLEMS
    );

    let mut best: Option<SelectionCost> = None;
    let mut all: Vec<Vec<ItemId>> = Vec::new();

    for mask in 0u32..(1u32 << items.len()) {
        let mut cost = SelectionCost::ZERO;
        let mut points: Points = 0;
        let mut ids = Vec::new();
        for (index, item) in items.iter().enumerate() {
            if mask & (1 << index) != 0 {
                cost += item.cost();
                points = points.saturating_add(item.points());
                ids.push(item.id());
            }
        }

        if points < instance.target {
            continue;
        }

        match best {
            Some(current) if cost > current => {}
            Some(current) if cost == current => all.push(ids),
            _ => {
                best = Some(cost);
                all = vec![ids];
            }
        }
    }

    let cost = best?;
    all.sort();
    Some(Optimum {
        cost,
        ids: all[0].clone(),
        all,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_example_optimum() {
        let best = optimum(&fixtures::example_instance()).unwrap();
        assert_eq!(best.ids, vec![3, 4]);
        assert_eq!(best.cost, SelectionCost::of(5, 2, -4, 350));
        assert_eq!(best.all.len(), 1);
    }

    #[test]
    fn test_zero_target_is_empty() {
        let best = optimum(&fixtures::zero_target_instance()).unwrap();
        assert!(best.ids.is_empty());
        assert_eq!(best.cost, SelectionCost::ZERO);
    }

    #[test]
    fn test_unreachable_is_none() {
        assert!(optimum(&fixtures::unreachable_instance()).is_none());
    }

    #[test]
    fn test_trap_optimum() {
        let best = optimum(&fixtures::cost_dominance_trap()).unwrap();
        assert_eq!(best.ids, vec![2, 3, 4]);
        assert_eq!(best.cost.count(), 3);
    }

    #[test]
    fn test_ties_collected_in_order() {
        let mut instance = fixtures::uniform_instance(3);
        instance.target = 2;
        let best = optimum(&instance).unwrap();
        assert_eq!(best.all, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
        assert_eq!(best.ids, vec![1, 2]);
    }
}
