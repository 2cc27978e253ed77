//! Component set - at most one component per concrete kind

use std::collections::BTreeMap;

use lodestone_core::{Capability, Component, ComponentKind, DataComponent, DynOrientation};

/// The full configuration of a block, one value per component kind
///
/// Storage is ordered by kind, so equality and hashing do not depend on the
/// order components were added in. Cloning copies the storage; a set held by a
/// canonical block-data instance can never be reached mutably from outside.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ComponentSet {
    components: BTreeMap<ComponentKind, Component>,
}

impl ComponentSet {
    pub fn new() -> Self {
        ComponentSet::default()
    }

    /// Build from components; a later value replaces an earlier one of the same kind
    pub fn of<I, C>(components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Component>,
    {
        let mut set = ComponentSet::new();
        for component in components {
            set.add(component);
        }
        set
    }

    /// Insert a component, returning whether one of the same kind was replaced
    pub fn add(&mut self, component: impl Into<Component>) -> bool {
        let component = component.into();
        self.components.insert(component.kind(), component).is_some()
    }

    /// Copy of this set with `component` inserted
    pub fn with(&self, component: impl Into<Component>) -> Self {
        let mut set = self.clone();
        set.add(component);
        set
    }

    /// Remove the component of the given kind
    pub fn remove(&mut self, kind: ComponentKind) -> Option<Component> {
        self.components.remove(&kind)
    }

    pub fn contains(&self, kind: ComponentKind) -> bool {
        self.components.contains_key(&kind)
    }

    pub fn get_kind(&self, kind: ComponentKind) -> Option<&Component> {
        self.components.get(&kind)
    }

    /// Typed lookup
    pub fn get<T: DataComponent>(&self) -> Option<T> {
        self.components.get(&T::KIND).and_then(T::from_component)
    }

    /// All stored components satisfying `capability`, in kind order
    pub fn instances_of(&self, capability: Capability) -> impl Iterator<Item = &Component> {
        self.components
            .values()
            .filter(move |c| c.satisfies(capability))
    }

    /// The orientation among the stored components, if any
    ///
    /// Orientation kinds sort before the other kinds, so this is the first
    /// stored value.
    pub fn orientation(&self) -> Option<&dyn DynOrientation> {
        self.instances_of(Capability::Orientation)
            .find_map(Component::as_orientation)
    }

    /// Sum of every stored component's encoded value
    pub fn encoded_value(&self) -> u32 {
        self.components
            .values()
            .map(|c| u32::from(c.data_value()))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.components.keys().copied()
    }
}

impl<C: Into<Component>> FromIterator<C> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        ComponentSet::of(iter)
    }
}

impl<C: Into<Component>> Extend<C> for ComponentSet {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        for component in iter {
            self.add(component);
        }
    }
}
