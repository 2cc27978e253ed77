//! Torch-style facing: four horizontal directions plus a fixed "up"

use crate::orientation::facing::mirror_cardinal;
use crate::{Axis, Component, ComponentKind, DataComponent, Orientation, Plane};

/// Attachment of a wall-or-floor block
///
/// Ordinals follow the four-way facing (N, E, S, W) with `Up` last. The
/// persisted values are the torch attachment codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum TorchFacing {
    North,
    East,
    South,
    West,
    #[default]
    Up,
}

impl TorchFacing {
    pub fn from_data(value: u8) -> Option<Self> {
        TorchFacing::VALUES
            .iter()
            .copied()
            .find(|v| v.data_value() == value)
    }

    #[inline]
    pub fn is_up(self) -> bool {
        self == TorchFacing::Up
    }
}

impl DataComponent for TorchFacing {
    const KIND: ComponentKind = ComponentKind::TorchFacing;

    fn data_value(self) -> u8 {
        match self {
            TorchFacing::East => 1,
            TorchFacing::West => 2,
            TorchFacing::South => 3,
            TorchFacing::North => 4,
            TorchFacing::Up => 5,
        }
    }

    fn into_component(self) -> Component {
        Component::TorchFacing(self)
    }

    fn from_component(component: &Component) -> Option<Self> {
        match component {
            Component::TorchFacing(v) => Some(*v),
            _ => None,
        }
    }
}

impl Orientation for TorchFacing {
    const VALUES: &'static [Self] = &[
        TorchFacing::North,
        TorchFacing::East,
        TorchFacing::South,
        TorchFacing::West,
        TorchFacing::Up,
    ];

    #[inline]
    fn ordinal(self) -> i32 {
        self as i32
    }

    fn step(axis: Axis) -> Option<f64> {
        axis.is_vertical().then_some(90.0)
    }

    fn legal_plane(plane: Plane) -> bool {
        plane.is_upright()
    }

    /// Four-way successor expressed on the five-slot cycle
    ///
    /// `n + (n + ordinal) / 4` extra slots skip `Up` whenever the walk wraps
    /// past the last horizontal ordinal. The count is first reduced to 0..4.
    fn rotate_steps(self, _axis: Axis, n: i32) -> Self {
        if self.is_up() {
            return self;
        }
        let n = n.rem_euclid(4);
        self.next(n + (n + self.ordinal()) / 4)
    }

    fn reflect(self, plane: Plane) -> Self {
        if self.is_up() {
            return self;
        }
        Self::from_ordinal(mirror_cardinal(self.ordinal(), plane))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Facing;

    #[test]
    fn test_rotation_skips_up() {
        assert_eq!(TorchFacing::West.rotate(Axis::Y, 1), Ok(TorchFacing::North));
        assert_eq!(TorchFacing::South.rotate(Axis::Y, 2), Ok(TorchFacing::North));
        assert_eq!(TorchFacing::North.rotate(Axis::Y, -1), Ok(TorchFacing::West));
        assert_eq!(TorchFacing::East.rotate(Axis::Y, 7), Ok(TorchFacing::North));
    }

    #[test]
    fn test_rotation_tracks_four_way_facing() {
        let pairs = [
            (TorchFacing::North, Facing::North),
            (TorchFacing::East, Facing::East),
            (TorchFacing::South, Facing::South),
            (TorchFacing::West, Facing::West),
        ];
        for n in -9..=9 {
            for (torch, facing) in pairs {
                let rotated = torch.rotate(Axis::Y, n).unwrap();
                let expected = facing.rotate(Axis::Y, n).unwrap();
                assert_eq!(rotated.ordinal(), expected.ordinal());
            }
        }
    }

    #[test]
    fn test_up_is_fixed() {
        for n in -5..=5 {
            assert_eq!(TorchFacing::Up.rotate(Axis::Y, n), Ok(TorchFacing::Up));
        }
        assert_eq!(TorchFacing::Up.mirror(Plane::XY), Ok(TorchFacing::Up));
        assert_eq!(TorchFacing::Up.mirror(Plane::YZ), Ok(TorchFacing::Up));
    }

    #[test]
    fn test_mirror_and_legality() {
        assert_eq!(TorchFacing::North.mirror(Plane::XY), Ok(TorchFacing::South));
        assert_eq!(TorchFacing::West.mirror(Plane::YZ), Ok(TorchFacing::East));
        assert!(TorchFacing::Up.mirror(Plane::XZ).unwrap_err().is_unsupported());
        assert!(TorchFacing::Up.rotate(Axis::X, 1).unwrap_err().is_unsupported());
    }

    #[test]
    fn test_data_values() {
        assert_eq!(TorchFacing::East.data_value(), 1);
        assert_eq!(TorchFacing::Up.data_value(), 5);
        for torch in TorchFacing::VALUES {
            assert_eq!(TorchFacing::from_data(torch.data_value()), Some(*torch));
        }
        assert_eq!(TorchFacing::from_data(0), None);
    }
}
