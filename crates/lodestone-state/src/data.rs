//! Canonical block data
//!
//! A [`BlockData`] is immutable once built. Every edit yields the canonical
//! instance for the edited configuration, obtained from the registry that
//! built the original.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};

use lodestone_core::{
    Axis, Component, DataComponent, DataTypeId, DynOrientation, EntityRef, FixedOrientation,
    LodestoneResult, Orientation, Plane,
};

use crate::registry::{DataKey, RegistryShared};
use crate::{CanonicalRegistry, ComponentSet, DataTypeDef};

/// An immutable, interned block configuration
///
/// Equality and hashing are structural over (data type, components, entity).
/// Within one registry, equal instances are the same allocation.
pub struct BlockData {
    key: DataKey,
    def: DataTypeDef,
    home: Weak<RegistryShared>,
}

impl BlockData {
    pub(crate) fn new(key: DataKey, def: DataTypeDef, home: Weak<RegistryShared>) -> Self {
        BlockData { key, def, home }
    }

    #[inline]
    pub fn data_type(&self) -> DataTypeId {
        self.key.data_type
    }

    #[inline]
    pub fn components(&self) -> &ComponentSet {
        &self.key.components
    }

    #[inline]
    pub fn entity(&self) -> Option<&EntityRef> {
        self.key.entity.as_ref()
    }

    pub fn key(&self) -> &DataKey {
        &self.key
    }

    pub fn component<T: DataComponent>(&self) -> Option<T> {
        self.key.components.get::<T>()
    }

    /// The stored orientation, or the fixed orientation when there is none
    pub fn orientation(&self) -> &dyn DynOrientation {
        match self.key.components.orientation() {
            Some(orientation) => orientation,
            None => &FixedOrientation,
        }
    }

    /// Persisted metadata value: the sum of every component's code
    pub fn encoded_value(&self) -> u32 {
        self.key.components.encoded_value()
    }

    /// Registry that built this instance
    ///
    /// Falls back to the global registry once the home registry is gone; the
    /// global registry adopts this instance's data type if it lacks it.
    pub fn registry(&self) -> CanonicalRegistry {
        match self.home.upgrade() {
            Some(shared) => CanonicalRegistry::from_shared(shared),
            None => {
                let global = CanonicalRegistry::global();
                global.ensure_type(self.def);
                global.clone()
            }
        }
    }

    /// Construction contract this instance was built from
    pub fn definition(&self) -> DataTypeDef {
        self.def
    }

    /// Canonical instance with the orientation rotated by `degree` about `axis`
    ///
    /// Data without an orientation behaves as [`FixedOrientation`]: legal
    /// rotations return this same instance.
    pub fn rotate(self: &Arc<Self>, axis: Axis, degree: f64) -> LodestoneResult<Arc<BlockData>> {
        match self.key.components.orientation() {
            Some(orientation) => {
                let rotated = orientation.rotate_component(axis, degree)?;
                Ok(self.with_component(rotated))
            }
            None => {
                FixedOrientation.rotate_by_degree(axis, degree)?;
                Ok(Arc::clone(self))
            }
        }
    }

    /// Canonical instance with the orientation mirrored across `plane`
    pub fn mirror(self: &Arc<Self>, plane: Plane) -> LodestoneResult<Arc<BlockData>> {
        match self.key.components.orientation() {
            Some(orientation) => {
                let mirrored = orientation.mirror_component(plane)?;
                Ok(self.with_component(mirrored))
            }
            None => {
                FixedOrientation.mirror(plane)?;
                Ok(Arc::clone(self))
            }
        }
    }

    /// Canonical instance with `component` replacing its kind
    pub fn with_component(self: &Arc<Self>, component: impl Into<Component>) -> Arc<BlockData> {
        let component = component.into();
        if self.key.components.get_kind(component.kind()) == Some(&component) {
            return Arc::clone(self);
        }
        self.registry().get(
            self.key.data_type,
            self.key.components.with(component),
            self.key.entity.clone(),
        )
    }

    /// Canonical instance with `entity` attached (or detached)
    pub fn with_entity(self: &Arc<Self>, entity: Option<EntityRef>) -> Arc<BlockData> {
        if self.key.entity == entity {
            return Arc::clone(self);
        }
        self.registry()
            .get(self.key.data_type, self.key.components.clone(), entity)
    }

    /// Total order consistent with equality
    ///
    /// Components compare by their (kind, code) sequence, entities by identity.
    pub fn cmp_state(&self, other: &BlockData) -> Ordering {
        let codes = |data: &BlockData| {
            data.key
                .components
                .iter()
                .map(|c| (c.kind(), c.data_value()))
                .collect::<Vec<_>>()
        };
        self.key
            .data_type
            .cmp(&other.key.data_type)
            .then_with(|| codes(self).cmp(&codes(other)))
            .then_with(|| self.key.entity.cmp(&other.key.entity))
    }
}

impl Drop for BlockData {
    fn drop(&mut self) {
        if let Some(shared) = self.home.upgrade() {
            shared.evict(&self.key);
        }
    }
}

impl PartialEq for BlockData {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for BlockData {}

impl Hash for BlockData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for BlockData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("BlockData");
        s.field("type", &self.key.data_type)
            .field("components", &self.key.components.iter().collect::<Vec<_>>());
        if let Some(entity) = &self.key.entity {
            s.field("entity", entity);
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodestone_core::{Color, Compass, Delay, Facing, SlabPosition, SlabTexture, TileEntity, TorchFacing};

    #[derive(Debug)]
    struct Chest;

    impl TileEntity for Chest {
        fn entity_kind(&self) -> &'static str {
            "chest"
        }
    }

    fn registry() -> CanonicalRegistry {
        CanonicalRegistry::default()
    }

    #[test]
    fn test_rotate_returns_canonical_instance() {
        let registry = registry();
        let north = registry.default_instance(DataTypeId::REPEATER);
        let east = north.rotate(Axis::Y, 90.0).unwrap();

        assert_eq!(east.component::<Facing>(), Some(Facing::East));
        assert_eq!(east.component::<Delay>(), Some(Delay::Ticks1));

        let direct = registry.get(
            DataTypeId::REPEATER,
            ComponentSet::of([Component::from(Facing::East), Component::from(Delay::Ticks1)]),
            None,
        );
        assert!(Arc::ptr_eq(&east, &direct));
    }

    #[test]
    fn test_full_turn_is_same_instance() {
        let registry = registry();
        let sign = registry.default_instance(DataTypeId::SIGN);
        let back = sign.rotate(Axis::Y, 360.0).unwrap();
        assert!(Arc::ptr_eq(&sign, &back));

        let around = sign
            .rotate(Axis::Y, 22.5)
            .and_then(|d| d.rotate(Axis::Y, 337.5))
            .unwrap();
        assert!(Arc::ptr_eq(&sign, &around));
    }

    #[test]
    fn test_rotation_preserves_entity() {
        let registry = registry();
        let chest = EntityRef::new(Chest);
        let data = registry.get(
            DataTypeId::CONTAINER,
            ComponentSet::of([Facing::North]),
            Some(chest.clone()),
        );

        let rotated = data.rotate(Axis::Y, -90.0).unwrap();
        assert_eq!(rotated.component::<Facing>(), Some(Facing::West));
        assert_eq!(rotated.entity(), Some(&chest));
    }

    #[test]
    fn test_torch_rotation_uses_orientation() {
        let registry = registry();
        let torch = registry.get(DataTypeId::TORCH, ComponentSet::of([TorchFacing::North]), None);
        let rotated = torch.rotate(Axis::Y, 90.0).unwrap();
        assert_eq!(rotated.component::<TorchFacing>(), Some(TorchFacing::East));
        assert_eq!(rotated.encoded_value(), 1);
    }

    #[test]
    fn test_slab_flip_keeps_texture() {
        let registry = registry();
        let slab = registry.get(
            DataTypeId::SLAB,
            ComponentSet::of([Component::from(SlabPosition::Down), Component::from(SlabTexture::Brick)]),
            None,
        );
        let flipped = slab.rotate(Axis::X, 180.0).unwrap();
        assert_eq!(flipped.component::<SlabPosition>(), Some(SlabPosition::Up));
        assert_eq!(flipped.component::<SlabTexture>(), Some(SlabTexture::Brick));
        assert_eq!(flipped.encoded_value(), 8 + SlabTexture::Brick.data_value() as u32);
    }

    #[test]
    fn test_no_orientation_acts_fixed() {
        let registry = registry();
        let wool = registry.get(DataTypeId::WOOL, ComponentSet::of([Color::Orange]), None);

        assert!(Arc::ptr_eq(&wool.rotate(Axis::Y, 270.0).unwrap(), &wool));
        assert!(Arc::ptr_eq(&wool.mirror(Plane::YZ).unwrap(), &wool));
        assert!(wool.rotate(Axis::X, 90.0).unwrap_err().is_unsupported());
        assert!(wool.mirror(Plane::XZ).unwrap_err().is_unsupported());
        assert!(wool.rotate(Axis::Y, 45.0).unwrap_err().is_invalid_argument());
        assert_eq!(wool.orientation().kind(), lodestone_core::ComponentKind::Fixed);
    }

    #[test]
    fn test_mirror_sign() {
        let registry = registry();
        let sign = registry.get(DataTypeId::SIGN, ComponentSet::of([Compass::NorthEast]), None);
        let mirrored = sign.mirror(Plane::XY).unwrap();
        assert_eq!(mirrored.component::<Compass>(), Some(Compass::SouthEast));
        assert!(Arc::ptr_eq(&mirrored.mirror(Plane::XY).unwrap(), &sign));
    }

    #[test]
    fn test_with_component_noop_is_identity() {
        let registry = registry();
        let wool = registry.default_instance(DataTypeId::WOOL);
        assert!(Arc::ptr_eq(&wool.with_component(Color::White), &wool));

        let red = wool.with_component(Color::Red);
        assert_eq!(red.encoded_value(), Color::Red.data_value() as u32);
        assert_eq!(wool.component::<Color>(), Some(Color::White));
    }

    #[test]
    fn test_with_entity() {
        let registry = registry();
        let plain = registry.default_instance(DataTypeId::CONTAINER);
        let entity = EntityRef::new(Chest);
        let attached = plain.with_entity(Some(entity.clone()));

        assert_eq!(attached.entity(), Some(&entity));
        assert!(Arc::ptr_eq(&attached.with_entity(None), &plain));
    }

    #[test]
    fn test_cmp_state_consistent_with_eq() {
        let registry = registry();
        let a = registry.get(DataTypeId::WOOL, ComponentSet::of([Color::Red]), None);
        let b = registry.get(DataTypeId::WOOL, ComponentSet::of([Color::Blue]), None);

        assert_eq!(a.cmp_state(&a), Ordering::Equal);
        assert_ne!(a.cmp_state(&b), Ordering::Equal);
        assert_eq!(a.cmp_state(&b), b.cmp_state(&a).reverse());
    }

    #[test]
    fn test_edits_stay_in_home_registry() {
        let registry = registry();
        let north = registry.default_instance(DataTypeId::DIRECTIONAL);
        let south = north.rotate(Axis::Y, 180.0).unwrap();

        assert!(south.registry().same_as(&registry));
        assert!(registry.contains(DataTypeId::DIRECTIONAL, south.components(), None));
    }
}
