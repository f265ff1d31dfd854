//! Hand-built reference instances.

use setforge_core::{Instance, Points, PreferenceList, ProblemRecord, ProblemSet};

/// Builds an instance from `(id, points, difficulty, topic, length)` tuples.
///
/// # Panics
///
/// Panics if the records or topics contain duplicates.
pub fn instance(
    target: Points,
    topics: &[&str],
    records: &[(u64, Points, u32, &str, u32)],
) -> Instance {
    let preferences = PreferenceList::new(topics.iter().copied()).expect("distinct topics");
    let records = records
        .iter()
        .map(|&(id, points, difficulty, topic, length)| {
            ProblemRecord::new(id, points, difficulty, topic, length)
        })
        .collect();
    let problems = ProblemSet::new(records, preferences).expect("distinct ids");
    Instance::new(target, problems)
}

/// Four problems over `dp graphs arrays` with target 10.
///
/// The cheapest selection is `{3, 4}`: difficulty 5, two problems.
pub fn example_instance() -> Instance {
    instance(
        10,
        &["dp", "graphs", "arrays"],
        &[
            (1, 5, 3, "dp", 120),
            (2, 6, 5, "graphs", 200),
            (3, 4, 1, "arrays", 50),
            (4, 8, 4, "dp", 300),
        ],
    )
}

/// The example problems with target 0.
pub fn zero_target_instance() -> Instance {
    let mut instance = example_instance();
    instance.target = 0;
    instance
}

/// The example problems with a target one above their total points.
pub fn unreachable_instance() -> Instance {
    let mut instance = example_instance();
    instance.target = instance.problems.total_points() + 1;
    instance
}

/// Identical-cost problems where best-points-per-cost pruning loses the
/// optimum.
///
/// The only three-problem selection reaching 14 points is `{2, 3, 4}`. State
/// `{2, 3}` has the same cost as `{1, 2}` and `{1, 4}` with fewer points than
/// `{1, 4}`, but `{1, 4}` can take nothing further.
pub fn cost_dominance_trap() -> Instance {
    instance(
        14,
        &["dp"],
        &[
            (1, 1, 1, "dp", 10),
            (2, 2, 1, "dp", 10),
            (3, 2, 1, "dp", 10),
            (4, 10, 1, "dp", 10),
        ],
    )
}

/// `n` identical one-point problems with ids `1..=n`, target `n`.
pub fn uniform_instance(n: usize) -> Instance {
    let records: Vec<(u64, Points, u32, &str, u32)> =
        (1..=n as u64).map(|id| (id, 1, 1, "dp", 10)).collect();
    instance(n as Points, &["dp"], &records)
}

/// Two problems whose points sum past `Points::MAX`.
pub fn saturating_instance() -> Instance {
    instance(
        Points::MAX,
        &["dp"],
        &[
            (1, Points::MAX - 5, 2, "dp", 10),
            (2, 10, 1, "dp", 10),
        ],
    )
}
