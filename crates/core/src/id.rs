//! Product identifiers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque product identifier.
///
/// Seed records use short numeric strings ("1".."5"); generated identifiers are
/// hyphenated UUIDv7 strings. Callers must not rely on either shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Generate a fresh identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Wrap an identifier received from a caller without checking its shape.
    ///
    /// Any string is a valid lookup key; one that names no product simply
    /// matches nothing.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct_and_non_empty() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert!(!a.as_str().is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn generated_id_is_a_uuid() {
        let id = ProductId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn caller_ids_are_kept_verbatim() {
        let id = ProductId::new("2");
        assert_eq!(id.as_str(), "2");
        assert_eq!(id.to_string(), "2");
    }

    #[test]
    fn serializes_transparently() {
        let id = ProductId::new("42");
        // serde transparent: the id is a bare string on the wire
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"42\"");
    }
}
