//! Half-block position (bottom or top half)

use crate::{Axis, Component, ComponentKind, DataComponent, Orientation, Plane};

/// Which half of the cell a slab occupies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum SlabPosition {
    #[default]
    Down = 0,
    Up = 8,
}

impl SlabPosition {
    /// The horizontal axis a half-turn may flip the slab about
    pub const FLIP_AXIS: Axis = Axis::X;

    pub fn from_data(value: u8) -> Option<Self> {
        match value {
            0 => Some(SlabPosition::Down),
            8 => Some(SlabPosition::Up),
            _ => None,
        }
    }
}

impl DataComponent for SlabPosition {
    const KIND: ComponentKind = ComponentKind::SlabPosition;

    #[inline]
    fn data_value(self) -> u8 {
        self as u8
    }

    fn into_component(self) -> Component {
        Component::SlabPosition(self)
    }

    fn from_component(component: &Component) -> Option<Self> {
        match component {
            Component::SlabPosition(v) => Some(*v),
            _ => None,
        }
    }
}

impl Orientation for SlabPosition {
    const VALUES: &'static [Self] = &[SlabPosition::Down, SlabPosition::Up];

    #[inline]
    fn ordinal(self) -> i32 {
        match self {
            SlabPosition::Down => 0,
            SlabPosition::Up => 1,
        }
    }

    /// Spinning about the vertical axis never moves a slab; only a half turn
    /// about the flip axis swaps halves.
    fn step(axis: Axis) -> Option<f64> {
        if axis.is_vertical() {
            Some(90.0)
        } else if axis == Self::FLIP_AXIS {
            Some(180.0)
        } else {
            None
        }
    }

    fn legal_plane(_plane: Plane) -> bool {
        true
    }

    fn rotate_steps(self, axis: Axis, n: i32) -> Self {
        if axis.is_vertical() {
            self
        } else {
            self.next(n)
        }
    }

    fn reflect(self, plane: Plane) -> Self {
        if plane.is_upright() {
            self
        } else {
            self.next(1)
        }
    }
}
