//! Products domain module.
//!
//! This crate contains the product record and the in-memory product store,
//! implemented as plain domain logic (no HTTP, no GraphQL, no persistence).

pub mod product;
pub mod seed;
pub mod store;

pub use product::{NewProduct, Product};
pub use store::ProductStore;
