//! Non-orientation component families
//!
//! Colors, repeater delays and slab textures. Each is a closed set of named
//! values whose discriminant is the persisted contribution.

use crate::{Component, ComponentKind, DataComponent};

/// Dye color (wool, carpet, stained glass)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Color {
    #[default]
    White = 0,
    Orange = 1,
    Magenta = 2,
    LightBlue = 3,
    Yellow = 4,
    Lime = 5,
    Pink = 6,
    Gray = 7,
    LightGray = 8,
    Cyan = 9,
    Purple = 10,
    Blue = 11,
    Brown = 12,
    Green = 13,
    Red = 14,
    Black = 15,
}

impl Color {
    pub const ALL: [Color; 16] = [
        Color::White,
        Color::Orange,
        Color::Magenta,
        Color::LightBlue,
        Color::Yellow,
        Color::Lime,
        Color::Pink,
        Color::Gray,
        Color::LightGray,
        Color::Cyan,
        Color::Purple,
        Color::Blue,
        Color::Brown,
        Color::Green,
        Color::Red,
        Color::Black,
    ];

    /// Parse from persisted value
    pub fn from_data(value: u8) -> Option<Self> {
        Color::ALL.get(value as usize).copied()
    }
}

impl DataComponent for Color {
    const KIND: ComponentKind = ComponentKind::Color;

    #[inline]
    fn data_value(self) -> u8 {
        self as u8
    }

    fn into_component(self) -> Component {
        Component::Color(self)
    }

    fn from_component(component: &Component) -> Option<Self> {
        match component {
            Component::Color(v) => Some(*v),
            _ => None,
        }
    }
}

/// Repeater delay in redstone ticks
///
/// Stored in bits 2-3 so it can be added to a four-way facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Delay {
    #[default]
    Ticks1 = 0,
    Ticks2 = 4,
    Ticks3 = 8,
    Ticks4 = 12,
}

impl Delay {
    pub const ALL: [Delay; 4] = [Delay::Ticks1, Delay::Ticks2, Delay::Ticks3, Delay::Ticks4];

    /// Delay for a tick count in 1..=4
    pub fn from_ticks(ticks: u8) -> Option<Self> {
        match ticks {
            1 => Some(Delay::Ticks1),
            2 => Some(Delay::Ticks2),
            3 => Some(Delay::Ticks3),
            4 => Some(Delay::Ticks4),
            _ => None,
        }
    }

    #[inline]
    pub fn ticks(self) -> u8 {
        (self as u8 >> 2) + 1
    }
}

impl DataComponent for Delay {
    const KIND: ComponentKind = ComponentKind::Delay;

    #[inline]
    fn data_value(self) -> u8 {
        self as u8
    }

    fn into_component(self) -> Component {
        Component::Delay(self)
    }

    fn from_component(component: &Component) -> Option<Self> {
        match component {
            Component::Delay(v) => Some(*v),
            _ => None,
        }
    }
}

/// Material of a stone-family slab
///
/// Uses the low three bits; the slab position adds the high bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum SlabTexture {
    #[default]
    Stone = 0,
    Sandstone = 1,
    Wood = 2,
    Cobblestone = 3,
    Brick = 4,
    StoneBrick = 5,
    NetherBrick = 6,
    Quartz = 7,
}

impl SlabTexture {
    pub const ALL: [SlabTexture; 8] = [
        SlabTexture::Stone,
        SlabTexture::Sandstone,
        SlabTexture::Wood,
        SlabTexture::Cobblestone,
        SlabTexture::Brick,
        SlabTexture::StoneBrick,
        SlabTexture::NetherBrick,
        SlabTexture::Quartz,
    ];

    pub fn from_data(value: u8) -> Option<Self> {
        SlabTexture::ALL.get(value as usize).copied()
    }
}

impl DataComponent for SlabTexture {
    const KIND: ComponentKind = ComponentKind::SlabTexture;

    #[inline]
    fn data_value(self) -> u8 {
        self as u8
    }

    fn into_component(self) -> Component {
        Component::SlabTexture(self)
    }

    fn from_component(component: &Component) -> Option<Self> {
        match component {
            Component::SlabTexture(v) => Some(*v),
            _ => None,
        }
    }
}
