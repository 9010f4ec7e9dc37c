//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog crates.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// A lookup that matches nothing is *not* an error: operations return `None`
/// for that case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A writer panicked while holding the store lock.
    #[error("store lock poisoned")]
    LockPoisoned,

    /// The summed quantity does not fit a 32-bit signed integer.
    #[error("total quantity does not fit a 32-bit signed integer")]
    QuantityOverflow,
}
