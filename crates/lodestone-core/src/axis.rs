//! Coordinate axes and mirror planes
//!
//! Y is the vertical axis. Rotations are taken clockwise when looking from
//! the positive end of the axis toward the origin.

use std::fmt;

use crate::{LodestoneError, LodestoneResult};

/// One of the three coordinate axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The vertical axis
    pub const VERTICAL: Axis = Axis::Y;

    #[inline]
    pub fn is_vertical(self) -> bool {
        self == Axis::VERTICAL
    }

    /// Build the plane spanned by `self` and `other`
    #[inline]
    pub fn plane_with(self, other: Axis) -> LodestoneResult<Plane> {
        Plane::new(self, other)
    }
}

/// Unordered pair of two distinct axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Plane {
    /// Spanned by X and Y (normal Z)
    XY,
    /// Spanned by X and Z (normal Y), the horizontal plane
    XZ,
    /// Spanned by Y and Z (normal X)
    YZ,
}

impl Plane {
    pub const ALL: [Plane; 3] = [Plane::XY, Plane::XZ, Plane::YZ];

    /// Plane spanned by two axes, in either order
    pub fn new(a: Axis, b: Axis) -> LodestoneResult<Self> {
        match (a.min(b), a.max(b)) {
            (Axis::X, Axis::Y) => Ok(Plane::XY),
            (Axis::X, Axis::Z) => Ok(Plane::XZ),
            (Axis::Y, Axis::Z) => Ok(Plane::YZ),
            _ => Err(LodestoneError::DegeneratePlane(a)),
        }
    }

    /// Validate an axis set; duplicates count once
    pub fn from_axes(axes: &[Axis]) -> LodestoneResult<Self> {
        let mut distinct: Vec<Axis> = axes.to_vec();
        distinct.sort();
        distinct.dedup();

        match distinct.as_slice() {
            [a, b] => Plane::new(*a, *b),
            other => Err(LodestoneError::PlaneArity(other.len())),
        }
    }

    /// The two spanning axes, in ascending order
    pub fn axes(self) -> [Axis; 2] {
        match self {
            Plane::XY => [Axis::X, Axis::Y],
            Plane::XZ => [Axis::X, Axis::Z],
            Plane::YZ => [Axis::Y, Axis::Z],
        }
    }

    /// The axis perpendicular to this plane
    pub fn normal(self) -> Axis {
        match self {
            Plane::XY => Axis::Z,
            Plane::XZ => Axis::Y,
            Plane::YZ => Axis::X,
        }
    }

    #[inline]
    pub fn contains(self, axis: Axis) -> bool {
        self.normal() != axis
    }

    /// Does the plane contain the vertical axis?
    #[inline]
    pub fn is_upright(self) -> bool {
        self.contains(Axis::VERTICAL)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.axes();
        write!(f, "{:?}{:?}", a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_is_unordered() {
        assert_eq!(Plane::new(Axis::Z, Axis::Y).unwrap(), Plane::YZ);
        assert_eq!(Plane::new(Axis::Y, Axis::Z).unwrap(), Plane::YZ);
        assert_eq!(Axis::X.plane_with(Axis::Z).unwrap(), Plane::XZ);
    }

    #[test]
    fn test_plane_rejects_same_axis() {
        let err = Plane::new(Axis::X, Axis::X).unwrap_err();
        assert_eq!(err, LodestoneError::DegeneratePlane(Axis::X));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_plane_from_axes_arity() {
        assert_eq!(Plane::from_axes(&[Axis::Y, Axis::X]).unwrap(), Plane::XY);
        assert_eq!(
            Plane::from_axes(&[Axis::X]).unwrap_err(),
            LodestoneError::PlaneArity(1)
        );
        assert_eq!(
            Plane::from_axes(&Axis::ALL).unwrap_err(),
            LodestoneError::PlaneArity(3)
        );
        assert_eq!(
            Plane::from_axes(&[Axis::Z, Axis::Z]).unwrap_err(),
            LodestoneError::PlaneArity(1)
        );
        assert_eq!(
            Plane::from_axes(&[]).unwrap_err(),
            LodestoneError::PlaneArity(0)
        );
    }

    #[test]
    fn test_plane_geometry() {
        for plane in Plane::ALL {
            let [a, b] = plane.axes();
            assert!(plane.contains(a));
            assert!(plane.contains(b));
            assert!(!plane.contains(plane.normal()));
        }
        assert!(Plane::XY.is_upright());
        assert!(Plane::YZ.is_upright());
        assert!(!Plane::XZ.is_upright());
        assert_eq!(Plane::XZ.to_string(), "XZ");
    }
}
