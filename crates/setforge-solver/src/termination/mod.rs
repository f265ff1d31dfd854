//! Termination conditions for the search budget.

mod composite;
mod node_count;
mod time;

use std::fmt::Debug;

use setforge_config::SearchConfig;

use crate::stats::SearchStats;

pub use composite::OrTermination;
pub use node_count::NodeCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to give up searching.
///
/// Checked by the driver before every frontier pop.
pub trait Termination: Send + Debug {
    /// Returns true if the search should stop.
    fn is_terminated(&self, stats: &SearchStats) -> bool;
}

/// Absent conditions never fire.
impl<T: Termination> Termination for Option<T> {
    fn is_terminated(&self, stats: &SearchStats) -> bool {
        self.as_ref().is_some_and(|t| t.is_terminated(stats))
    }
}

/// Never terminates. The search runs until it finds or rules out a selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    fn is_terminated(&self, _stats: &SearchStats) -> bool {
        false
    }
}

/// Budget assembled from a [`SearchConfig`].
pub type ConfiguredTermination =
    OrTermination<(Option<TimeTermination>, Option<NodeCountTermination>)>;

impl ConfiguredTermination {
    /// Builds the time and node-count limits named in the configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use setforge_config::SearchConfig;
    /// use setforge_solver::{ConfiguredTermination, SearchStats, Termination};
    ///
    /// let config = SearchConfig::new().with_node_count_limit(2);
    /// let termination = ConfiguredTermination::from_config(&config);
    ///
    /// let mut stats = SearchStats::default();
    /// stats.record_expansion();
    /// assert!(!termination.is_terminated(&stats));
    /// stats.record_expansion();
    /// assert!(termination.is_terminated(&stats));
    /// ```
    pub fn from_config(config: &SearchConfig) -> Self {
        OrTermination((
            config.time_limit().map(TimeTermination::new),
            config.node_count_limit().map(NodeCountTermination::new),
        ))
    }
}

#[cfg(test)]
mod tests;
