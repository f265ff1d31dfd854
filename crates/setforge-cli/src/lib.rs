//! Command line front end for SetForge.
//!
//! Reads one instance, runs the best-first search and prints the chosen ids
//! ascending on one line, or `-1` when no selection reaches the target.
//!
//! # Exit status
//!
//! - `0`: a selection was printed, or `-1` for an infeasible instance
//! - `1`: the input or the configuration could not be read
//! - `2`: the search budget ran out

pub mod logging;

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;
use tracing::debug;

use setforge_config::{ConfigError, DominanceMode, SearchConfig};
use setforge_core::{Instance, SetForgeError};
use setforge_solver::{BestFirstSearch, SearchOutcome, SearchResult};

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "setforge.toml";

pub const EXIT_OK: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_BUDGET_EXHAUSTED: u8 = 2;

/// Output line for an instance no selection can satisfy.
pub const INFEASIBLE_LINE: &str = "-1";

/// Picks the cheapest set of problems reaching a point target.
#[derive(Debug, Parser)]
#[command(name = "setforge")]
#[command(version)]
#[command(about = "Pick the cheapest set of problems reaching a point target")]
pub struct Cli {
    /// Instance file, or `-` for stdin
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Search configuration (TOML, or YAML by .yaml/.yml extension)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dominance pruning mode: pareto, cost or off
    #[arg(long, value_name = "MODE")]
    pub dominance: Option<DominanceMode>,

    /// Maximum number of states to expand
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub node_limit: Option<u64>,

    /// Print the cost vector and search statistics to stderr
    #[arg(long)]
    pub stats: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Failure before the search could run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Input(#[from] SetForgeError),

    #[error("config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write failed: {0}")]
    Output(#[from] io::Error),
}

impl Cli {
    /// Loads the search configuration and applies command line overrides.
    pub fn search_config(&self) -> Result<SearchConfig, CliError> {
        let mut config = match self.config_path() {
            Some(path) => SearchConfig::load(&path).map_err(|source| CliError::Config {
                path: path.clone(),
                source,
            })?,
            None => SearchConfig::default(),
        };

        if let Some(mode) = self.dominance {
            config = config.with_dominance(mode);
        }
        if let Some(limit) = self.node_limit {
            config = config.with_node_count_limit(limit);
        }
        Ok(config)
    }

    fn config_path(&self) -> Option<PathBuf> {
        match &self.config {
            Some(path) => Some(path.clone()),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                default.is_file().then(|| default.to_path_buf())
            }
        }
    }

    /// Reads the instance from the input file or stdin.
    pub fn read_instance(&self) -> Result<Instance, CliError> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                let file = File::open(path).map_err(|source| CliError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Instance::read_from(file)?)
            }
            _ => Ok(Instance::read_from(io::stdin().lock())?),
        }
    }
}

/// Runs the command and returns the process exit status.
pub fn run(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> u8 {
    match execute(cli, out, err) {
        Ok(SearchOutcome::BudgetExhausted) => EXIT_BUDGET_EXHAUSTED,
        Ok(_) => EXIT_OK,
        Err(e) => {
            let _ = writeln!(err, "setforge: {}", e);
            EXIT_ERROR
        }
    }
}

fn execute(
    cli: &Cli,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<SearchOutcome, CliError> {
    let config = cli.search_config()?;
    let instance = cli.read_instance()?;
    let result = solve(&config, &instance);
    report(&result, cli.stats, out, err)?;
    Ok(result.outcome)
}

/// Runs the configured search on an instance.
pub fn solve(config: &SearchConfig, instance: &Instance) -> SearchResult {
    debug!(
        dominance = %config.dominance,
        node_limit = ?config.node_count_limit(),
        time_limit_ms = ?config.time_limit().map(|d| d.as_millis() as u64),
        "resolved configuration"
    );
    BestFirstSearch::from_config(config).solve_instance(instance)
}

/// Writes the outcome to `out` and diagnostics to `err`.
pub fn report(
    result: &SearchResult,
    stats: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match &result.outcome {
        SearchOutcome::Found(selection) => {
            writeln!(out, "{}", selection)?;
            if stats {
                writeln!(err, "cost: {}", selection.cost())?;
                writeln!(err, "points: {}", selection.points())?;
            }
        }
        SearchOutcome::Infeasible => writeln!(out, "{}", INFEASIBLE_LINE)?,
        SearchOutcome::BudgetExhausted => writeln!(
            err,
            "setforge: search budget exhausted after {} expanded states",
            result.stats.nodes_explored
        )?,
    }

    if stats {
        let s = &result.stats;
        writeln!(err, "elapsed: {:.3}s", s.elapsed().as_secs_f64())?;
        writeln!(
            err,
            "nodes expanded: {} ({:.0} nodes/s)",
            s.nodes_explored,
            s.nodes_per_second()
        )?;
        writeln!(err, "successors generated: {}", s.successors_generated)?;
        writeln!(
            err,
            "successors pruned: {} ({:.1}%)",
            s.successors_pruned,
            s.prune_rate() * 100.0
        )?;
        writeln!(err, "peak frontier: {}", s.peak_frontier)?;
        writeln!(err, "memo size: {}", s.memo_size)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
