//! Configuration system for SetForge.
//!
//! Load search configuration from TOML or YAML files to control dominance
//! pruning and the search budget without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use setforge_config::{DominanceMode, SearchConfig};
//! use std::time::Duration;
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     dominance = "cost"
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!     node_count_limit = 1000000
//! "#).unwrap();
//!
//! assert_eq!(config.dominance, DominanceMode::Cost);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.node_count_limit(), Some(1_000_000));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use setforge_config::SearchConfig;
//!
//! let config = SearchConfig::load("setforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main search configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// How successors are checked against previously seen states.
    #[serde(default)]
    pub dominance: DominanceMode,

    /// Search budget.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.yaml` and `.yml` are read as YAML, everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or doesn't parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects budgets that would stop the search before it starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(termination) = &self.termination {
            if termination.node_count_limit == Some(0) {
                return Err(ConfigError::Invalid(
                    "node_count_limit must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Sets the dominance mode.
    pub fn with_dominance(mut self, dominance: DominanceMode) -> Self {
        self.dominance = dominance;
        self
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the node count limit.
    pub fn with_node_count_limit(mut self, limit: u64) -> Self {
        self.termination = Some(TerminationConfig {
            node_count_limit: Some(limit),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the node count limit, if configured.
    pub fn node_count_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.node_count_limit)
    }
}

/// Dominance pruning mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DominanceMode {
    /// Prune a state when another state with the same cost, no later next
    /// index and at least as many points was already seen.
    #[default]
    Pareto,

    /// Prune a state when another state with the same cost and at least as
    /// many points was already seen, ignoring the next index.
    ///
    /// Matches the classic pruning rule. It can discard the only path to an
    /// optimal selection when the pruned state could still take earlier
    /// problems than the state that pruned it.
    Cost,

    /// No pruning.
    Off,
}

impl std::fmt::Display for DominanceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DominanceMode::Pareto => write!(f, "pareto"),
            DominanceMode::Cost => write!(f, "cost"),
            DominanceMode::Off => write!(f, "off"),
        }
    }
}

impl std::str::FromStr for DominanceMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pareto" => Ok(DominanceMode::Pareto),
            "cost" => Ok(DominanceMode::Cost),
            "off" | "none" => Ok(DominanceMode::Off),
            other => Err(ConfigError::Invalid(format!(
                "unknown dominance mode '{}' (expected pareto, cost or off)",
                other
            ))),
        }
    }
}

/// Termination configuration.
///
/// The search itself always runs to a proven answer; these limits are an
/// outer budget that turns a long run into a `BudgetExhausted` outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend searching.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend searching.
    pub millis_spent_limit: Option<u64>,

    /// Maximum number of states popped from the frontier.
    pub node_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    ///
    /// Seconds and milliseconds add up when both are set.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis = self
            .seconds_spent_limit
            .unwrap_or(0)
            .saturating_mul(1000)
            .saturating_add(self.millis_spent_limit.unwrap_or(0));
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests;
