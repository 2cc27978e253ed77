//! The no-op orientation

use crate::{Axis, Component, ComponentKind, DataComponent, Orientation, Plane};

/// Orientation of a block that looks the same from every side
///
/// Stands in when a block's data carries no orientation: spinning about the
/// vertical axis and mirroring across an upright plane are identities,
/// anything else is unsupported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FixedOrientation;

impl DataComponent for FixedOrientation {
    const KIND: ComponentKind = ComponentKind::Fixed;

    #[inline]
    fn data_value(self) -> u8 {
        0
    }

    fn into_component(self) -> Component {
        Component::Fixed(self)
    }

    fn from_component(component: &Component) -> Option<Self> {
        match component {
            Component::Fixed(v) => Some(*v),
            _ => None,
        }
    }
}

impl Orientation for FixedOrientation {
    const VALUES: &'static [Self] = &[FixedOrientation];

    #[inline]
    fn ordinal(self) -> i32 {
        0
    }

    fn step(axis: Axis) -> Option<f64> {
        axis.is_vertical().then_some(90.0)
    }

    fn legal_plane(plane: Plane) -> bool {
        plane.is_upright()
    }

    fn rotate_steps(self, _axis: Axis, _n: i32) -> Self {
        self
    }

    fn reflect(self, _plane: Plane) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_where_legal() {
        let fixed = FixedOrientation;
        assert_eq!(fixed.rotate_by_degree(Axis::Y, 270.0), Ok(fixed));
        assert_eq!(fixed.mirror(Plane::XY), Ok(fixed));
        assert_eq!(fixed.mirror(Plane::YZ), Ok(fixed));
        assert_eq!(fixed.next(-3), fixed);
    }

    #[test]
    fn test_unsupported_elsewhere() {
        let fixed = FixedOrientation;
        assert!(fixed.rotate(Axis::X, 1).unwrap_err().is_unsupported());
        assert!(fixed.rotate_by_degree(Axis::Z, 90.0).unwrap_err().is_unsupported());
        assert!(fixed.mirror(Plane::XZ).unwrap_err().is_unsupported());
        assert!(fixed.rotate_by_degree(Axis::Y, 30.0).unwrap_err().is_invalid_argument());
    }
}
