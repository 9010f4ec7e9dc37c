//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Stores look records up through this trait, so two records with the same
/// identifier are the same entity even when every other field differs.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
