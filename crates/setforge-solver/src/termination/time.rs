//! Time-based termination.

use std::time::Duration;

use super::Termination;
use crate::stats::SearchStats;

/// Terminates after a wall-clock limit.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use setforge_solver::termination::TimeTermination;
///
/// let term = TimeTermination::new(Duration::from_secs(30));
///
/// let term = TimeTermination::seconds(30);
/// let term = TimeTermination::millis(500);
/// assert_eq!(term.limit(), Duration::from_millis(500));
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl Termination for TimeTermination {
    fn is_terminated(&self, stats: &SearchStats) -> bool {
        stats.elapsed() >= self.limit
    }
}
