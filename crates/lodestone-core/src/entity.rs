//! Opaque auxiliary per-block entities
//!
//! Signs, beacons and containers carry an extra entity next to their block
//! data. Placement state never looks inside it: an [`EntityRef`] compares and
//! hashes by the identity of the entity it points to.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Marker for any auxiliary entity type owned by another subsystem
pub trait TileEntity: fmt::Debug + Send + Sync + 'static {
    /// Short kind name used in logs
    fn entity_kind(&self) -> &'static str;
}

/// Shared handle to an auxiliary entity, compared by identity
#[derive(Clone)]
pub struct EntityRef(Arc<dyn TileEntity>);

impl EntityRef {
    pub fn new<E: TileEntity>(entity: E) -> Self {
        EntityRef(Arc::new(entity))
    }

    pub fn from_arc(entity: Arc<dyn TileEntity>) -> Self {
        EntityRef(entity)
    }

    #[inline]
    pub fn kind(&self) -> &'static str {
        self.0.entity_kind()
    }

    #[inline]
    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0) as *const ()
    }
}

impl PartialEq for EntityRef {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for EntityRef {}

impl Hash for EntityRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

/// Address order; stable for the lifetime of the entities, not across runs
impl PartialOrd for EntityRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EntityRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.addr().cmp(&other.addr())
    }
}

impl fmt::Debug for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({}@{:p})", self.kind(), self.addr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct SignText(String);

    impl TileEntity for SignText {
        fn entity_kind(&self) -> &'static str {
            "sign"
        }
    }

    #[test]
    fn test_identity_equality() {
        let a = EntityRef::new(SignText("hello".into()));
        let b = EntityRef::new(SignText("hello".into()));
        let a2 = a.clone();

        assert_eq!(a, a2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_shared_arc_is_same_entity() {
        let shared: Arc<dyn TileEntity> = Arc::new(SignText("hi".into()));
        let a = EntityRef::from_arc(shared.clone());
        let b = EntityRef::from_arc(shared);

        assert_eq!(a, b);
        assert_eq!(a.kind(), "sign");
    }
}
