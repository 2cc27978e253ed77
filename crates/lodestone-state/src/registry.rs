//! Canonical block-data registry
//!
//! Interns block data so that value-equal configurations share one instance:
//! - Entries are keyed by (data type, component set, entity)
//! - The map holds `Weak` handles; an instance lives as long as some caller
//!   holds its `Arc`, and removes its own entry when the last one drops
//! - Lookups take a read lock; construction re-checks under the write lock,
//!   so concurrent requests for one key converge on a single instance
//! - Each data type's default instance is built at most once, under a mutex

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, Weak};

use lodestone_core::{DataTypeId, EntityRef};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, trace, warn};

use crate::{catalog, BlockData, ComponentSet};

/// Construction contract of a block-data subtype
#[derive(Clone, Copy, Debug)]
pub struct DataTypeDef {
    pub id: DataTypeId,
    /// Components of the subtype's default instance
    pub defaults: fn() -> ComponentSet,
}

impl DataTypeDef {
    pub const fn new(id: DataTypeId, defaults: fn() -> ComponentSet) -> Self {
        DataTypeDef { id, defaults }
    }
}

/// Identity of a canonical instance
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DataKey {
    pub data_type: DataTypeId,
    pub components: ComponentSet,
    pub entity: Option<EntityRef>,
}

/// Registry configuration
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// Initial capacity of the entry map
    pub initial_capacity: usize,
    /// Register the built-in data types on creation
    pub install_builtins: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            initial_capacity: 256,
            install_builtins: true,
        }
    }
}

impl RegistryConfig {
    /// No built-in data types; callers register their own
    pub fn bare() -> Self {
        RegistryConfig {
            initial_capacity: 16,
            install_builtins: false,
        }
    }
}

/// Point-in-time registry counters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that constructed a new instance
    pub misses: u64,
    /// Entries removed after their instance was dropped
    pub evictions: u64,
    /// Entries whose instance is still alive
    pub live_entries: usize,
    /// Data types with a registered default instance
    pub defaults: usize,
}

pub(crate) struct RegistryShared {
    types: RwLock<HashMap<DataTypeId, DataTypeDef>>,
    entries: RwLock<HashMap<DataKey, Weak<BlockData>>>,
    defaults: RwLock<HashMap<DataTypeId, Arc<BlockData>>>,
    default_init: Mutex<()>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl RegistryShared {
    /// Drop the entry for `key` if its instance is gone
    ///
    /// Called from `BlockData::drop`. A live entry means the key was rebuilt
    /// concurrently and stays.
    pub(crate) fn evict(&self, key: &DataKey) {
        let mut entries = self.entries.write();
        if entries.get(key).is_some_and(|weak| weak.strong_count() == 0) {
            entries.remove(key);
            self.evictions.fetch_add(1, Ordering::Relaxed);
            debug!(data_type = %key.data_type, remaining = entries.len(), "evicted block data");
        }
    }
}

/// Flyweight cache of canonical block-data instances
#[derive(Clone)]
pub struct CanonicalRegistry {
    shared: Arc<RegistryShared>,
}

static GLOBAL: OnceLock<CanonicalRegistry> = OnceLock::new();

impl CanonicalRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        let registry = CanonicalRegistry {
            shared: Arc::new(RegistryShared {
                types: RwLock::new(HashMap::new()),
                entries: RwLock::new(HashMap::with_capacity(config.initial_capacity)),
                defaults: RwLock::new(HashMap::new()),
                default_init: Mutex::new(()),
                hits: AtomicU64::new(0),
                misses: AtomicU64::new(0),
                evictions: AtomicU64::new(0),
            }),
        };

        if config.install_builtins {
            for def in catalog::builtin_data_types() {
                registry.register_type(def);
            }
        }

        registry
    }

    /// Process-wide registry with the built-in data types
    pub fn global() -> &'static CanonicalRegistry {
        GLOBAL.get_or_init(|| {
            info!("initializing global block data registry");
            CanonicalRegistry::new(RegistryConfig::default())
        })
    }

    pub(crate) fn from_shared(shared: Arc<RegistryShared>) -> Self {
        CanonicalRegistry { shared }
    }

    /// Add or replace a data type's construction contract
    pub fn register_type(&self, def: DataTypeDef) {
        if self.shared.types.write().insert(def.id, def).is_some() {
            warn!(data_type = %def.id, "block data type re-registered");
        }
    }

    /// Register `def` unless its id is already known; returns whether it was added
    pub fn ensure_type(&self, def: DataTypeDef) -> bool {
        match self.shared.types.write().entry(def.id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(def);
                debug!(data_type = %def.id, "adopted block data type");
                true
            }
        }
    }

    pub fn is_registered(&self, data_type: DataTypeId) -> bool {
        self.shared.types.read().contains_key(&data_type)
    }

    /// Construction contract for `data_type`
    ///
    /// # Panics
    /// If the type was never registered. Every block type must name a
    /// registered data type; reaching this is a wiring bug.
    pub fn definition(&self, data_type: DataTypeId) -> DataTypeDef {
        match self.shared.types.read().get(&data_type) {
            Some(def) => *def,
            None => panic!("block data type `{data_type}` is not registered"),
        }
    }

    /// Canonical instance for an explicit component combination
    pub fn get(
        &self,
        data_type: DataTypeId,
        components: ComponentSet,
        entity: Option<EntityRef>,
    ) -> Arc<BlockData> {
        // Fail fast on unknown types before touching the cache
        let def = self.definition(data_type);

        let key = DataKey {
            data_type,
            components,
            entity,
        };

        let cached = self.shared.entries.read().get(&key).and_then(Weak::upgrade);
        if let Some(existing) = cached {
            self.shared.hits.fetch_add(1, Ordering::Relaxed);
            trace!(%data_type, "block data cache hit");
            return existing;
        }

        let mut entries = self.shared.entries.write();
        match entries.entry(key.clone()) {
            Entry::Occupied(mut slot) => {
                if let Some(existing) = slot.get().upgrade() {
                    // Another thread built it between our read and write locks
                    self.shared.hits.fetch_add(1, Ordering::Relaxed);
                    return existing;
                }
                let fresh = self.construct(key, def);
                slot.insert(Arc::downgrade(&fresh));
                fresh
            }
            Entry::Vacant(slot) => {
                let fresh = self.construct(key, def);
                slot.insert(Arc::downgrade(&fresh));
                fresh
            }
        }
    }

    /// Canonical instance for an existing key
    pub fn intern(&self, key: DataKey) -> Arc<BlockData> {
        self.get(key.data_type, key.components, key.entity)
    }

    fn construct(&self, key: DataKey, def: DataTypeDef) -> Arc<BlockData> {
        self.shared.misses.fetch_add(1, Ordering::Relaxed);
        debug!(
            data_type = %key.data_type,
            encoded = key.components.encoded_value(),
            has_entity = key.entity.is_some(),
            "constructed canonical block data"
        );
        Arc::new(BlockData::new(key, def, Arc::downgrade(&self.shared)))
    }

    /// Make the canonical instance for these components the type's default
    ///
    /// If an equal instance is already cached, that instance becomes the
    /// default and is returned. Serialized with lazy default construction, so
    /// the last registration always wins.
    pub fn register_default(
        &self,
        data_type: DataTypeId,
        components: ComponentSet,
        entity: Option<EntityRef>,
    ) -> Arc<BlockData> {
        let _guard = self.shared.default_init.lock();
        let canonical = self.get(data_type, components, entity);
        let previous = self
            .shared
            .defaults
            .write()
            .insert(data_type, Arc::clone(&canonical));
        debug!(%data_type, replaced = previous.is_some(), "registered default block data");
        drop(previous);
        canonical
    }

    /// The type's default instance, built from its contract on first use
    pub fn default_instance(&self, data_type: DataTypeId) -> Arc<BlockData> {
        if let Some(existing) = self.cached_default(data_type) {
            return existing;
        }

        let _guard = self.shared.default_init.lock();
        if let Some(existing) = self.cached_default(data_type) {
            return existing;
        }

        let def = self.definition(data_type);
        let built = self.get(data_type, (def.defaults)(), None);
        let winner = Arc::clone(
            self.shared
                .defaults
                .write()
                .entry(data_type)
                .or_insert_with(|| Arc::clone(&built)),
        );
        debug!(%data_type, "built default block data");
        winner
    }

    fn cached_default(&self, data_type: DataTypeId) -> Option<Arc<BlockData>> {
        self.shared.defaults.read().get(&data_type).cloned()
    }

    /// Is a live canonical instance cached for this key?
    pub fn contains(
        &self,
        data_type: DataTypeId,
        components: &ComponentSet,
        entity: Option<&EntityRef>,
    ) -> bool {
        let key = DataKey {
            data_type,
            components: components.clone(),
            entity: entity.cloned(),
        };
        self.shared
            .entries
            .read()
            .get(&key)
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Drop entries whose instance is gone
    ///
    /// Instances normally evict themselves; this catches entries left behind
    /// when a drop raced with a rebuild.
    pub fn purge(&self) -> usize {
        let mut entries = self.shared.entries.write();
        let before = entries.len();
        entries.retain(|_, weak| weak.strong_count() > 0);
        let purged = before - entries.len();
        if purged > 0 {
            self.shared
                .evictions
                .fetch_add(purged as u64, Ordering::Relaxed);
            debug!(purged, "purged dead block data entries");
        }
        purged
    }

    pub fn stats(&self) -> RegistryStats {
        let live_entries = self
            .shared
            .entries
            .read()
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count();
        RegistryStats {
            hits: self.shared.hits.load(Ordering::Relaxed),
            misses: self.shared.misses.load(Ordering::Relaxed),
            evictions: self.shared.evictions.load(Ordering::Relaxed),
            live_entries,
            defaults: self.shared.defaults.read().len(),
        }
    }

    /// Do both handles refer to the same registry?
    pub fn same_as(&self, other: &CanonicalRegistry) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl Default for CanonicalRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl std::fmt::Debug for CanonicalRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanonicalRegistry")
            .field("stats", &self.stats())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodestone_core::{Axis, Color, Delay, Facing, Plane, TileEntity};
    use std::sync::Barrier;
    use std::thread;

    #[derive(Debug)]
    struct Beacon;

    impl TileEntity for Beacon {
        fn entity_kind(&self) -> &'static str {
            "beacon"
        }
    }

    fn repeater(facing: Facing, delay: Delay) -> ComponentSet {
        ComponentSet::of([facing.into(), lodestone_core::Component::from(delay)])
    }

    #[test]
    fn test_equal_keys_share_instance() {
        let registry = CanonicalRegistry::default();
        let a = registry.get(DataTypeId::REPEATER, repeater(Facing::East, Delay::Ticks2), None);
        let b = registry.get(DataTypeId::REPEATER, repeater(Facing::East, Delay::Ticks2), None);

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.encoded_value(), 5);

        let stats = registry.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.live_entries, 1);
    }

    #[test]
    fn test_key_parts_are_distinct() {
        let registry = CanonicalRegistry::default();
        let components = ComponentSet::of([Facing::North]);

        let directional = registry.get(DataTypeId::DIRECTIONAL, components.clone(), None);
        let container = registry.get(DataTypeId::CONTAINER, components.clone(), None);
        let with_entity = registry.get(
            DataTypeId::CONTAINER,
            components,
            Some(EntityRef::new(Beacon)),
        );

        assert!(!Arc::ptr_eq(&directional, &container));
        assert!(!Arc::ptr_eq(&container, &with_entity));
        assert_ne!(*container, *with_entity);
    }

    #[test]
    fn test_eviction_and_rebuild() {
        let registry = CanonicalRegistry::default();
        let components = ComponentSet::of([Color::Lime]);

        let first = registry.get(DataTypeId::WOOL, components.clone(), None);
        assert!(registry.contains(DataTypeId::WOOL, &components, None));
        drop(first);

        assert!(!registry.contains(DataTypeId::WOOL, &components, None));
        assert_eq!(registry.stats().evictions, 1);
        assert_eq!(registry.stats().live_entries, 0);

        let rebuilt = registry.get(DataTypeId::WOOL, components.clone(), None);
        assert_eq!(rebuilt.components(), &components);
        assert_eq!(registry.stats().misses, 2);
    }

    #[test]
    fn test_register_default_converges_with_explicit_get() {
        let registry = CanonicalRegistry::default();
        let explicit = registry.get(DataTypeId::WOOL, ComponentSet::of([Color::Red]), None);
        let default =
            registry.register_default(DataTypeId::WOOL, ComponentSet::of([Color::Red]), None);

        assert!(Arc::ptr_eq(&explicit, &default));
        assert!(Arc::ptr_eq(&registry.default_instance(DataTypeId::WOOL), &explicit));
    }

    #[test]
    fn test_default_instance_is_lazy_and_shared() {
        let registry = CanonicalRegistry::default();
        assert_eq!(registry.stats().defaults, 0);

        let a = registry.default_instance(DataTypeId::REPEATER);
        let b = registry.default_instance(DataTypeId::REPEATER);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.component::<Facing>(), Some(Facing::North));
        assert_eq!(a.component::<Delay>(), Some(Delay::Ticks1));

        // Defaults are held by the registry and survive their callers
        drop(a);
        drop(b);
        assert!(registry.contains(DataTypeId::REPEATER, &repeater(Facing::North, Delay::Ticks1), None));
        assert_eq!(registry.stats().defaults, 1);
    }

    #[test]
    fn test_concurrent_get_converges() {
        let registry = CanonicalRegistry::default();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                thread::spawn(move || {
                    registry.get(DataTypeId::REPEATER, repeater(Facing::West, Delay::Ticks4), None)
                })
            })
            .collect();

        let results: Vec<Arc<BlockData>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for other in &results[1..] {
            assert!(Arc::ptr_eq(&results[0], other));
        }
        assert_eq!(registry.stats().misses, 1);
    }

    #[test]
    fn test_concurrent_default_converges() {
        let registry = CanonicalRegistry::default();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                thread::spawn(move || registry.default_instance(DataTypeId::SIGN))
            })
            .collect();

        let results: Vec<Arc<BlockData>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for other in &results[1..] {
            assert!(Arc::ptr_eq(&results[0], other));
        }
    }

    #[test]
    fn test_register_default_races_lazy_default() {
        for _ in 0..200 {
            let registry = CanonicalRegistry::default();
            let barrier = Arc::new(Barrier::new(2));

            let lazy = {
                let registry = registry.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    registry.default_instance(DataTypeId::WOOL)
                })
            };
            let explicit = {
                let registry = registry.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    registry.register_default(DataTypeId::WOOL, ComponentSet::of([Color::Red]), None)
                })
            };

            let _lazy = lazy.join().unwrap();
            let registered = explicit.join().unwrap();

            // The explicit registration must never be overwritten by the lazy build
            let current = registry.default_instance(DataTypeId::WOOL);
            assert!(Arc::ptr_eq(&current, &registered));
            assert_eq!(current.component::<Color>(), Some(Color::Red));
        }
    }

    #[test]
    fn test_edit_after_registry_dropped() {
        let lamp = DataTypeId::new("orphaned_lamp");
        let registry = CanonicalRegistry::new(RegistryConfig::bare());
        registry.register_type(DataTypeDef::new(lamp, || ComponentSet::of([Facing::North])));
        let data = registry.get(lamp, ComponentSet::of([Facing::North]), None);
        drop(registry);

        let rotated = data.rotate(Axis::Y, 90.0).unwrap();
        assert_eq!(rotated.data_type(), lamp);
        assert_eq!(rotated.component::<Facing>(), Some(Facing::East));
        assert!(rotated.registry().same_as(CanonicalRegistry::global()));
        assert!(CanonicalRegistry::global().is_registered(lamp));

        let mirrored = data.mirror(Plane::YZ).unwrap();
        assert!(Arc::ptr_eq(&mirrored, &data));
        let back = rotated.rotate(Axis::Y, -90.0).unwrap();
        assert_eq!(back.component::<Facing>(), Some(Facing::North));
    }

    #[test]
    fn test_register_custom_type() {
        let registry = CanonicalRegistry::new(RegistryConfig::bare());
        let custom = DataTypeId::new("lamp");
        assert!(!registry.is_registered(custom));

        registry.register_type(DataTypeDef::new(custom, || ComponentSet::of([Facing::South])));
        let lamp = registry.default_instance(custom);
        assert_eq!(lamp.data_type(), custom);
        assert_eq!(lamp.encoded_value(), 2);
    }

    #[test]
    #[should_panic(expected = "not registered")]
    fn test_unregistered_type_is_fatal() {
        let registry = CanonicalRegistry::new(RegistryConfig::bare());
        registry.get(DataTypeId::WOOL, ComponentSet::new(), None);
    }

    #[test]
    fn test_purge_is_noop_when_clean() {
        let registry = CanonicalRegistry::default();
        let held = registry.get(DataTypeId::PLAIN, ComponentSet::new(), None);
        assert_eq!(registry.purge(), 0);
        assert_eq!(registry.stats().live_entries, 1);
        drop(held);
        assert_eq!(registry.stats().live_entries, 0);
    }
}
