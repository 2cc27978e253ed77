//! Orientation families and their rotation/mirror algebra
//!
//! An orientation is a data component whose values form a small cyclic group:
//! - `next(n)` is the pure modulo-N successor, the primitive behind rotation
//! - `rotate(axis, n)` applies n minimal rotations about a legal axis
//! - `rotate_by_degree(axis, degree)` converts degrees to a step count
//! - `mirror(plane)` reflects across a legal plane
//!
//! Each family fixes its own order, minimal step, legal axes and legal planes.

mod compass;
mod facing;
mod fixed;
mod slab;
mod torch;

pub use compass::*;
pub use facing::*;
pub use fixed::*;
pub use slab::*;
pub use torch::*;

use std::fmt;

use crate::{Axis, Component, ComponentKind, DataComponent, LodestoneError, LodestoneResult, Plane};

/// Degrees in one full turn
pub const FULL_TURN: f64 = 360.0;

/// A data component that rotates and mirrors
pub trait Orientation: DataComponent {
    /// Every value, indexed by ordinal
    const VALUES: &'static [Self];

    /// Index of this value in [`Orientation::VALUES`]
    fn ordinal(self) -> i32;

    /// Minimal rotation step in degrees about `axis`, `None` if the axis is illegal
    fn step(axis: Axis) -> Option<f64>;

    /// Can this family be mirrored across `plane`?
    fn legal_plane(plane: Plane) -> bool;

    /// Rotate by `n` minimal steps about an axis already known to be legal
    fn rotate_steps(self, axis: Axis, n: i32) -> Self;

    /// Reflect across a plane already known to be legal
    fn reflect(self, plane: Plane) -> Self;

    /// Group order
    #[inline]
    fn order() -> i32 {
        Self::VALUES.len() as i32
    }

    #[inline]
    fn from_ordinal(ordinal: i32) -> Self {
        Self::VALUES[ordinal.rem_euclid(Self::order()) as usize]
    }

    #[inline]
    fn legal_axis(axis: Axis) -> bool {
        Self::step(axis).is_some()
    }

    /// Cyclic successor; `n` may be negative
    fn next(self, n: i32) -> Self {
        let order = Self::order();
        Self::from_ordinal(self.ordinal() + n.rem_euclid(order))
    }

    fn rotate(self, axis: Axis, n: i32) -> LodestoneResult<Self> {
        if !Self::legal_axis(axis) {
            return Err(LodestoneError::UnsupportedRotation {
                kind: Self::KIND,
                axis,
            });
        }
        Ok(self.rotate_steps(axis, n))
    }

    fn rotate_by_degree(self, axis: Axis, degree: f64) -> LodestoneResult<Self> {
        let step = Self::step(axis).ok_or(LodestoneError::UnsupportedRotation {
            kind: Self::KIND,
            axis,
        })?;
        let n = to_count(axis, degree, step)?;
        Ok(self.rotate_steps(axis, n))
    }

    fn mirror(self, plane: Plane) -> LodestoneResult<Self> {
        if !Self::legal_plane(plane) {
            return Err(LodestoneError::UnsupportedMirror {
                kind: Self::KIND,
                plane,
            });
        }
        Ok(self.reflect(plane))
    }
}

/// Convert a degree amount into a count of `step`-sized rotations
///
/// The count is reduced modulo one full turn, which every family maps to the
/// identity.
pub fn to_count(axis: Axis, degree: f64, step: f64) -> LodestoneResult<i32> {
    if !degree.is_finite() {
        return Err(LodestoneError::NonFiniteDegree(degree));
    }
    if degree % step != 0.0 {
        return Err(LodestoneError::DegreeNotMultiple { axis, degree, step });
    }
    let per_turn = FULL_TURN / step;
    Ok(((degree / step) % per_turn) as i32)
}

/// Object-safe view of an orientation stored inside a [`Component`]
pub trait DynOrientation: fmt::Debug + Send + Sync {
    fn kind(&self) -> ComponentKind;

    fn supports_axis(&self, axis: Axis) -> bool;

    fn supports_plane(&self, plane: Plane) -> bool;

    fn rotate_component(&self, axis: Axis, degree: f64) -> LodestoneResult<Component>;

    fn mirror_component(&self, plane: Plane) -> LodestoneResult<Component>;
}

impl<T: Orientation> DynOrientation for T {
    fn kind(&self) -> ComponentKind {
        T::KIND
    }

    fn supports_axis(&self, axis: Axis) -> bool {
        T::legal_axis(axis)
    }

    fn supports_plane(&self, plane: Plane) -> bool {
        T::legal_plane(plane)
    }

    fn rotate_component(&self, axis: Axis, degree: f64) -> LodestoneResult<Component> {
        self.rotate_by_degree(axis, degree).map(T::into_component)
    }

    fn mirror_component(&self, plane: Plane) -> LodestoneResult<Component> {
        self.mirror(plane).map(T::into_component)
    }
}
