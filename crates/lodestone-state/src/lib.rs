//! Lodestone State - Canonical block data and placement edits
//!
//! This crate implements the mutable half of block placement state:
//! - Component sets (one value per component kind)
//! - The canonical registry that interns block data
//! - Block data rotation and mirroring through the registry
//! - Blocks, placement transforms and error translation
//! - The built-in block and data-type catalog

pub mod block;
pub mod catalog;
pub mod data;
pub mod registry;
pub mod set;

pub use block::*;
pub use data::*;
pub use registry::*;
pub use set::*;
