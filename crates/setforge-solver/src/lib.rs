//! SetForge Solver Engine
//!
//! This crate provides the problem-set selection search:
//! - Search states and the canonical expansion rule
//! - Dominance memo for pruning redundant states
//! - Cost-ordered frontier
//! - Best-first driver with budget termination
//! - Search statistics and the formatted selection

pub mod dominance;
pub mod frontier;
pub mod search;
pub mod selection;
pub mod state;
pub mod stats;
pub mod termination;

pub use dominance::DominanceMemo;
pub use frontier::Frontier;
pub use search::{BestFirstSearch, SearchOutcome, SearchResult};
pub use selection::Selection;
pub use state::{ChosenIds, SearchState, Successors};
pub use stats::SearchStats;
pub use termination::{
    ConfiguredTermination, NoTermination, NodeCountTermination, OrTermination, Termination,
    TimeTermination,
};

pub use setforge_config::DominanceMode;
