//! Sixteen-way compass rose (signs, banners, skulls)

use crate::{Axis, Component, ComponentKind, DataComponent, Orientation, Plane};

/// Compass points 22.5 degrees apart, clockwise from north
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Compass {
    #[default]
    North = 0,
    NorthNorthEast = 1,
    NorthEast = 2,
    EastNorthEast = 3,
    East = 4,
    EastSouthEast = 5,
    SouthEast = 6,
    SouthSouthEast = 7,
    South = 8,
    SouthSouthWest = 9,
    SouthWest = 10,
    WestSouthWest = 11,
    West = 12,
    WestNorthWest = 13,
    NorthWest = 14,
    NorthNorthWest = 15,
}

impl Compass {
    pub fn from_data(value: u8) -> Option<Self> {
        Compass::VALUES.get(value as usize).copied()
    }

    /// Heading in degrees clockwise from north
    #[inline]
    pub fn heading(self) -> f64 {
        self as u8 as f64 * 22.5
    }
}

impl DataComponent for Compass {
    const KIND: ComponentKind = ComponentKind::Compass;

    #[inline]
    fn data_value(self) -> u8 {
        self as u8
    }

    fn into_component(self) -> Component {
        Component::Compass(self)
    }

    fn from_component(component: &Component) -> Option<Self> {
        match component {
            Component::Compass(v) => Some(*v),
            _ => None,
        }
    }
}

impl Orientation for Compass {
    const VALUES: &'static [Self] = &[
        Compass::North,
        Compass::NorthNorthEast,
        Compass::NorthEast,
        Compass::EastNorthEast,
        Compass::East,
        Compass::EastSouthEast,
        Compass::SouthEast,
        Compass::SouthSouthEast,
        Compass::South,
        Compass::SouthSouthWest,
        Compass::SouthWest,
        Compass::WestSouthWest,
        Compass::West,
        Compass::WestNorthWest,
        Compass::NorthWest,
        Compass::NorthNorthWest,
    ];

    #[inline]
    fn ordinal(self) -> i32 {
        self as i32
    }

    fn step(axis: Axis) -> Option<f64> {
        axis.is_vertical().then_some(22.5)
    }

    fn legal_plane(plane: Plane) -> bool {
        plane.is_upright()
    }

    fn rotate_steps(self, _axis: Axis, n: i32) -> Self {
        self.next(n)
    }

    fn reflect(self, plane: Plane) -> Self {
        let o = self.ordinal();
        let mirrored = match plane {
            // reflect across the east-west line
            Plane::XY if o <= 8 => 8 - o,
            Plane::XY => 24 - o,
            // reflect across the north-south line
            Plane::YZ => (16 - o) % 16,
            Plane::XZ => o,
        };
        Self::from_ordinal(mirrored)
    }
}
