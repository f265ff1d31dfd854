//! Search statistics.
//!
//! Plain counters updated by the best-first driver and read by termination
//! conditions and the command line.

use std::time::{Duration, Instant};

/// Counters for a single search call.
///
/// # Example
///
/// ```
/// use setforge_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_expansion();
/// stats.record_successor(true);
/// stats.record_successor(false);
///
/// assert_eq!(stats.nodes_explored, 1);
/// assert_eq!(stats.successors_generated, 2);
/// assert_eq!(stats.successors_pruned, 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    start_time: Option<Instant>,
    end_time: Option<Instant>,
    /// States popped from the frontier.
    pub nodes_explored: u64,
    /// Successors built from expanded states.
    pub successors_generated: u64,
    /// Successors rejected by the dominance memo.
    pub successors_pruned: u64,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
    /// Distinct cost vectors in the dominance memo when the search ended.
    pub memo_size: usize,
}

impl SearchStats {
    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Marks the end of the search, freezing [`elapsed`](Self::elapsed).
    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Returns the time from start to finish, or to now while running.
    pub fn elapsed(&self) -> Duration {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    /// Records a state popped for expansion.
    pub fn record_expansion(&mut self) {
        self.nodes_explored += 1;
    }

    /// Records a generated successor and whether the memo admitted it.
    pub fn record_successor(&mut self, admitted: bool) {
        self.successors_generated += 1;
        if !admitted {
            self.successors_pruned += 1;
        }
    }

    /// Updates the peak frontier size.
    pub fn observe_frontier(&mut self, len: usize) {
        self.peak_frontier = self.peak_frontier.max(len);
    }

    /// Returns the fraction of generated successors that were pruned.
    pub fn prune_rate(&self) -> f64 {
        if self.successors_generated == 0 {
            0.0
        } else {
            self.successors_pruned as f64 / self.successors_generated as f64
        }
    }

    /// Returns the expansion rate.
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.nodes_explored as f64 / secs
        } else {
            0.0
        }
    }
}
