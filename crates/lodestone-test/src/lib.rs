//! Lodestone Test Harness - Fuzzing and stress testing for placement state
//!
//! This crate provides:
//! - Seeded edit fuzzing through `Block`
//! - Registry convergence stress under thread contention
//! - Reusable property predicates
//! - Test logging setup

pub mod edit_fuzzer;
pub mod logging;
pub mod properties;
pub mod stress;

pub use edit_fuzzer::*;
pub use logging::*;
pub use stress::*;
