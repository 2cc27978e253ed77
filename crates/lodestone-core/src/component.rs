//! Data components - orthogonal facets of a block's placement state
//!
//! Every component contributes a non-negative encoded value. The persisted
//! data value of a block is the sum of the values of its components, so the
//! families are laid out on disjoint bit ranges:
//! - Orientations use the low bits (0..=15)
//! - Delay and slab position use the upper two bits of the nibble
//! - Colors and slab textures own the whole nibble and are never combined
//!   with an orientation

use std::fmt;
use std::hash::Hash;

use crate::{
    Color, Compass, Delay, DynOrientation, Facing, FixedOrientation, SlabPosition, SlabTexture,
    TorchFacing,
};

/// Concrete component type tag
///
/// A component set stores at most one value per kind. The declaration order
/// is the iteration order of a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    Facing,
    TorchFacing,
    Compass,
    SlabPosition,
    Fixed,
    Color,
    Delay,
    SlabTexture,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 8] = [
        ComponentKind::Facing,
        ComponentKind::TorchFacing,
        ComponentKind::Compass,
        ComponentKind::SlabPosition,
        ComponentKind::Fixed,
        ComponentKind::Color,
        ComponentKind::Delay,
        ComponentKind::SlabTexture,
    ];

    /// Is this kind an orientation family?
    pub fn is_orientation(self) -> bool {
        matches!(
            self,
            ComponentKind::Facing
                | ComponentKind::TorchFacing
                | ComponentKind::Compass
                | ComponentKind::SlabPosition
                | ComponentKind::Fixed
        )
    }
}

/// Capability a stored component may be queried by
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Every data component
    Component,
    /// Components that rotate and mirror
    Orientation,
}

/// A finite-valued facet with a stable encoded value
pub trait DataComponent: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Type tag shared by every value of the implementing type
    const KIND: ComponentKind;

    /// Contribution to the block's persisted data value
    fn data_value(self) -> u8;

    /// Wrap into the heterogeneous component enum
    fn into_component(self) -> Component;

    /// Unwrap from the heterogeneous component enum
    fn from_component(component: &Component) -> Option<Self>;
}

/// Any concrete data component
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    Facing(Facing),
    TorchFacing(TorchFacing),
    Compass(Compass),
    SlabPosition(SlabPosition),
    Fixed(FixedOrientation),
    Color(Color),
    Delay(Delay),
    SlabTexture(SlabTexture),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Facing(_) => ComponentKind::Facing,
            Component::TorchFacing(_) => ComponentKind::TorchFacing,
            Component::Compass(_) => ComponentKind::Compass,
            Component::SlabPosition(_) => ComponentKind::SlabPosition,
            Component::Fixed(_) => ComponentKind::Fixed,
            Component::Color(_) => ComponentKind::Color,
            Component::Delay(_) => ComponentKind::Delay,
            Component::SlabTexture(_) => ComponentKind::SlabTexture,
        }
    }

    pub fn data_value(&self) -> u8 {
        match *self {
            Component::Facing(v) => v.data_value(),
            Component::TorchFacing(v) => v.data_value(),
            Component::Compass(v) => v.data_value(),
            Component::SlabPosition(v) => v.data_value(),
            Component::Fixed(v) => v.data_value(),
            Component::Color(v) => v.data_value(),
            Component::Delay(v) => v.data_value(),
            Component::SlabTexture(v) => v.data_value(),
        }
    }

    /// View as an orientation, if this component is one
    pub fn as_orientation(&self) -> Option<&dyn DynOrientation> {
        match self {
            Component::Facing(v) => Some(v),
            Component::TorchFacing(v) => Some(v),
            Component::Compass(v) => Some(v),
            Component::SlabPosition(v) => Some(v),
            Component::Fixed(v) => Some(v),
            Component::Color(_) | Component::Delay(_) | Component::SlabTexture(_) => None,
        }
    }

    pub fn satisfies(&self, capability: Capability) -> bool {
        match capability {
            Capability::Component => true,
            Capability::Orientation => self.kind().is_orientation(),
        }
    }

    /// Typed view of the wrapped value
    pub fn downcast<T: DataComponent>(&self) -> Option<T> {
        T::from_component(self)
    }
}

macro_rules! impl_from_component {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Component {
                #[inline]
                fn from(value: $ty) -> Self {
                    Component::$ty(value)
                }
            }
        )*
    };
}

impl_from_component!(
    Facing,
    TorchFacing,
    Compass,
    SlabPosition,
    Color,
    Delay,
    SlabTexture,
);

impl From<FixedOrientation> for Component {
    #[inline]
    fn from(value: FixedOrientation) -> Self {
        Component::Fixed(value)
    }
}
