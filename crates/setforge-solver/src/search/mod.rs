//! Best-first search for the cheapest selection reaching a point target.
//!
//! States are popped in ascending cost order. Every expansion strictly
//! increases the cost vector, so the first goal state popped is optimal.

use tracing::{debug, info, trace};

use setforge_config::{DominanceMode, SearchConfig};
use setforge_core::{Instance, Points, ProblemSet, SelectionCost};

use crate::dominance::DominanceMemo;
use crate::frontier::Frontier;
use crate::selection::Selection;
use crate::state::SearchState;
use crate::stats::SearchStats;
use crate::termination::{ConfiguredTermination, NoTermination, Termination};

/// How a search call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The cheapest selection reaching the target.
    Found(Selection),
    /// No subset reaches the target.
    Infeasible,
    /// The budget ran out before a goal state was popped.
    BudgetExhausted,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, SearchOutcome::Infeasible)
    }

    pub fn selection(&self) -> Option<&Selection> {
        match self {
            SearchOutcome::Found(selection) => Some(selection),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SearchOutcome::Found(_) => "found",
            SearchOutcome::Infeasible => "infeasible",
            SearchOutcome::BudgetExhausted => "budget_exhausted",
        }
    }
}

/// Outcome of a search call together with its statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

/// Best-first search over canonically ordered subsets.
///
/// # Type Parameters
/// * `T` - The budget checked before every frontier pop
///
/// # Example
///
/// ```
/// use setforge_core::parse_instance;
/// use setforge_solver::{BestFirstSearch, SearchOutcome};
///
/// let instance = parse_instance(
///     "10 4\ndp graphs arrays\n1 5 3 dp 120\n2 6 5 graphs 200\n3 4 1 arrays 50\n4 8 4 dp 300\n",
/// )
/// .unwrap();
///
/// let result = BestFirstSearch::new().solve_instance(&instance);
/// match result.outcome {
///     SearchOutcome::Found(selection) => assert_eq!(selection.to_string(), "3 4"),
///     other => panic!("unexpected outcome {:?}", other),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BestFirstSearch<T = NoTermination> {
    dominance: DominanceMode,
    termination: T,
}

impl BestFirstSearch<NoTermination> {
    /// Creates an unbounded search with the default dominance mode.
    pub fn new() -> Self {
        Self {
            dominance: DominanceMode::default(),
            termination: NoTermination,
        }
    }
}

impl Default for BestFirstSearch<NoTermination> {
    fn default() -> Self {
        Self::new()
    }
}

impl BestFirstSearch<ConfiguredTermination> {
    /// Creates a search with the dominance mode and budget of a configuration.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            dominance: config.dominance,
            termination: ConfiguredTermination::from_config(config),
        }
    }
}

impl<T> BestFirstSearch<T> {
    pub fn with_dominance(mut self, mode: DominanceMode) -> Self {
        self.dominance = mode;
        self
    }

    /// Replaces the budget.
    pub fn with_termination<U>(self, termination: U) -> BestFirstSearch<U> {
        BestFirstSearch {
            dominance: self.dominance,
            termination,
        }
    }

    pub fn dominance(&self) -> DominanceMode {
        self.dominance
    }

    pub fn termination(&self) -> &T {
        &self.termination
    }
}

impl<T: Termination> BestFirstSearch<T> {
    /// Searches an instance for its cheapest goal selection.
    pub fn solve_instance(&self, instance: &Instance) -> SearchResult {
        self.solve(&instance.problems, instance.target)
    }

    /// Searches for the cheapest selection of `problems` reaching `target`.
    pub fn solve(&self, problems: &ProblemSet, target: Points) -> SearchResult {
        let mut stats = SearchStats::default();
        stats.start();

        info!(
            event = "search_start",
            problems = problems.len(),
            target = %target,
            dominance = %self.dominance,
        );

        let outcome = self.run(problems, target, &mut stats);
        stats.finish();

        info!(
            event = "search_end",
            outcome = outcome.label(),
            duration_ms = stats.elapsed().as_millis() as u64,
            nodes = stats.nodes_explored,
            generated = stats.successors_generated,
            pruned = stats.successors_pruned,
            peak_frontier = stats.peak_frontier,
            memo_size = stats.memo_size,
        );

        SearchResult { outcome, stats }
    }

    fn run(&self, problems: &ProblemSet, target: Points, stats: &mut SearchStats) -> SearchOutcome {
        if target == 0 {
            debug!(event = "goal", reason = "zero_target");
            return SearchOutcome::Found(Selection::new(Vec::new(), SelectionCost::ZERO, 0));
        }

        let total = problems.total_points();
        if total < target {
            debug!(event = "unreachable", total = %total, target = %target);
            return SearchOutcome::Infeasible;
        }

        let mut memo = DominanceMemo::new(self.dominance);
        let mut frontier = Frontier::new();
        frontier.push(SearchState::root());
        stats.observe_frontier(frontier.len());

        let outcome = loop {
            if !frontier.is_empty() && self.termination.is_terminated(stats) {
                debug!(
                    event = "budget_exhausted",
                    nodes = stats.nodes_explored,
                    frontier = frontier.len(),
                );
                break SearchOutcome::BudgetExhausted;
            }

            let Some(state) = frontier.pop() else {
                break SearchOutcome::Infeasible;
            };
            stats.record_expansion();

            trace!(
                event = "expand",
                cost = %state.cost(),
                points = %state.points(),
                depth = state.depth(),
                frontier = frontier.len(),
            );

            if state.is_goal(target) {
                debug!(
                    event = "goal",
                    cost = %state.cost(),
                    points = %state.points(),
                    nodes = stats.nodes_explored,
                );
                break SearchOutcome::Found(Selection::from_state(state));
            }

            for child in state.successors(problems) {
                let admitted = memo.admit(child.cost(), child.next_index(), child.points());
                stats.record_successor(admitted);
                if admitted {
                    frontier.push(child);
                }
            }
            stats.observe_frontier(frontier.len());
        };

        stats.memo_size = memo.len();
        outcome
    }
}
