//! Selection cost vector.
//!
//! A selection is ranked by the four-level [`SelectionCost`]. Costs are
//! immutable values that add componentwise and compare lexicographically,
//! lower being better.

#[macro_use]
mod macros;
mod selection;


pub use selection::SelectionCost;

/// Error when parsing a cost from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostParseError {
    pub message: String,
}

impl std::fmt::Display for CostParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cost parse error: {}", self.message)
    }
}

impl std::error::Error for CostParseError {}
