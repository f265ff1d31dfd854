//! Shared test fixtures for SetForge crates.
//!
//! This crate provides instances and pure functions for testing.
//! It depends only on `setforge-core` so the solver can use it as a
//! dev-dependency.
//!
//! - [`fixtures`] - Hand-built reference instances
//! - [`brute_force`] - Exhaustive oracle over all subsets
//! - [`random`] - Seeded random instance generation
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! setforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```
//! use setforge_test::brute_force::optimum;
//! use setforge_test::fixtures::example_instance;
//!
//! let instance = example_instance();
//! let best = optimum(&instance).unwrap();
//! assert_eq!(best.ids, vec![3, 4]);
//! ```

pub mod brute_force;
pub mod fixtures;
pub mod random;

pub use brute_force::{optimum, Optimum};
pub use random::{random_instance, tie_free_instance, RandomInstanceConfig};
