//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An inventory item keeps its identity (its name) while its quantity changes.
pub trait Entity {
    /// Identifier the entity is keyed by.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
