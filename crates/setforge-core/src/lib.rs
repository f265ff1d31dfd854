//! SetForge Core - Core types for problem-set selection
//!
//! This crate provides the fundamental abstractions for SetForge:
//! - The lexicographic selection cost vector
//! - Problem records, preference ranking and the canonically ordered problem set
//! - The line-structured instance reader
//! - The shared error type

pub mod cost;
pub mod domain;
pub mod error;
pub mod input;

#[cfg(test)]
mod input_tests;

pub use cost::{CostParseError, SelectionCost};
pub use domain::{Item, ItemId, Points, PreferenceList, ProblemRecord, ProblemSet};
pub use error::{Result, SetForgeError};
pub use input::{parse_instance, Instance};
