//! Lodestone Core - Placement components and orientation algebra
//!
//! This crate defines the leaf types of a block's placement state:
//! - Coordinate axes and mirror planes
//! - Data components (colors, delays, slab textures) and their encoded values
//! - Orientation families with their rotation/mirror group rules
//! - Identifiers (block types, data types) and opaque tile-entity handles

pub mod axis;
pub mod component;
pub mod entity;
pub mod error;
pub mod id;
pub mod orientation;
pub mod palette;

pub use axis::*;
pub use component::*;
pub use entity::*;
pub use error::*;
pub use id::*;
pub use orientation::*;
pub use palette::*;
