//! Four-way horizontal facing

use crate::{Axis, Component, ComponentKind, DataComponent, Orientation, Plane};

/// North/East/South/West, clockwise when viewed from above
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Facing {
    #[default]
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Facing {
    /// Persisted value back to a facing
    pub fn from_data(value: u8) -> Option<Self> {
        Facing::VALUES.get(value as usize).copied()
    }

    #[inline]
    pub fn opposite(self) -> Self {
        self.next(2)
    }
}

/// Four-way mirror rule on cardinal ordinals (N=0, E=1, S=2, W=3)
///
/// XY flips the Z component (north/south), YZ flips the X component
/// (east/west). Any other plane leaves the ordinal unchanged.
pub(crate) fn mirror_cardinal(ordinal: i32, plane: Plane) -> i32 {
    match (plane, ordinal) {
        (Plane::XY, 0) => 2,
        (Plane::XY, 2) => 0,
        (Plane::YZ, 1) => 3,
        (Plane::YZ, 3) => 1,
        _ => ordinal,
    }
}

impl DataComponent for Facing {
    const KIND: ComponentKind = ComponentKind::Facing;

    #[inline]
    fn data_value(self) -> u8 {
        self as u8
    }

    fn into_component(self) -> Component {
        Component::Facing(self)
    }

    fn from_component(component: &Component) -> Option<Self> {
        match component {
            Component::Facing(v) => Some(*v),
            _ => None,
        }
    }
}

impl Orientation for Facing {
    const VALUES: &'static [Self] = &[Facing::North, Facing::East, Facing::South, Facing::West];

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

    fn rotate_steps(self, _axis: Axis, n: i32) -> Self {
        self.next(n)
    }

    fn reflect(self, plane: Plane) -> Self {
        Self::from_ordinal(mirror_cardinal(self.ordinal(), plane))
    }
}
