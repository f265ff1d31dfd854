//! Seeded random instance generation.
//!
//! Uses `ChaCha8Rng` so a seed produces the same instance on every platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use setforge_core::{Instance, Points, PreferenceList, ProblemRecord, ProblemSet};

const TOPICS: [&str; 6] = ["dp", "graphs", "arrays", "strings", "math", "geometry"];

/// Shape of generated instances.
#[derive(Debug, Clone)]
pub struct RandomInstanceConfig {
    pub problems: usize,
    /// Topics drawn from; the first `preferred` are listed as preferences.
    pub topics: usize,
    pub preferred: usize,
    pub max_points: Points,
    pub max_difficulty: u32,
    pub max_length: u32,
}

impl Default for RandomInstanceConfig {
    fn default() -> Self {
        Self {
            problems: 8,
            topics: 4,
            preferred: 3,
            max_points: 20,
            max_difficulty: 5,
            max_length: 4,
        }
    }
}

impl RandomInstanceConfig {
    pub fn with_problems(mut self, problems: usize) -> Self {
        self.problems = problems;
        self
    }
}

/// Generates a random instance.
///
/// Small ranges make equal cost vectors common. Ids are a shuffled subset of
/// `1..=4n`, so input order differs from canonical order. The target is
/// drawn from `0..=total + total / 4`, so some instances are unreachable.
pub fn random_instance(seed: u64, config: &RandomInstanceConfig) -> Instance {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let topics = config.topics.clamp(1, TOPICS.len());
    let preferred = config.preferred.clamp(1, topics);

    let ids = distinct_ids(&mut rng, config.problems);
    let records: Vec<ProblemRecord> = ids
        .into_iter()
        .map(|id| {
            ProblemRecord::new(
                id,
                rng.random_range(1..=config.max_points.max(1)),
                rng.random_range(0..=config.max_difficulty),
                TOPICS[rng.random_range(0..topics)],
                rng.random_range(0..=config.max_length),
            )
        })
        .collect();

    build(&mut rng, records, &TOPICS[..preferred])
}

/// Generates an instance in which every subset has a distinct cost vector.
///
/// Lengths are distinct powers of two, so the length component alone
/// identifies a subset.
///
/// # Panics
///
/// Panics if `problems > 31`.
pub fn tie_free_instance(seed: u64, problems: usize) -> Instance {
    assert!(problems <= 31, "lengths must fit in u32");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut lengths: Vec<u32> = (0..problems as u32).map(|bit| 1 << bit).collect();
    for i in (1..lengths.len()).rev() {
        let j = rng.random_range(0..=i);
        lengths.swap(i, j);
    }

    let records: Vec<ProblemRecord> = lengths
        .into_iter()
        .enumerate()
        .map(|(index, length)| {
            ProblemRecord::new(
                index as u64 + 1,
                rng.random_range(1..=20),
                rng.random_range(0..=4),
                TOPICS[rng.random_range(0..3)],
                length,
            )
        })
        .collect();

    build(&mut rng, records, &TOPICS[..2])
}

fn distinct_ids(rng: &mut ChaCha8Rng, count: usize) -> Vec<u64> {
    let mut pool: Vec<u64> = (1..=(count as u64 * 4).max(1)).collect();
    for i in 0..count.min(pool.len()) {
        let j = rng.random_range(i..pool.len());
        pool.swap(i, j);
    }
    pool.truncate(count);
    pool
}

fn build(rng: &mut ChaCha8Rng, records: Vec<ProblemRecord>, topics: &[&str]) -> Instance {
    let total: Points = records.iter().map(|r| r.points).sum();
    let target = rng.random_range(0..=total + total / 4);
    let preferences = PreferenceList::new(topics.iter().copied()).expect("distinct topics");
    let problems = ProblemSet::new(records, preferences).expect("distinct ids");
    Instance::new(target, problems)
}
