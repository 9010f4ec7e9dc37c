//! GraphQL schema for the product catalog.
//!
//! - [`QueryRoot`]: read operations (list, lookup, totals)
//! - [`MutationRoot`]: write operations (add, update, delete)
//!
//! Resolvers are thin: they turn nullable arguments into store calls and map
//! store records onto the `Product` object type. A lookup that matches nothing
//! resolves to `null`, never to an error.

mod mutation;
mod query;
mod types;

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Schema, SchemaBuilder, ID};

use catalog_core::ProductId;
use catalog_products::ProductStore;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::ProductNode;

/// The executable catalog schema.
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema_builder() -> SchemaBuilder<QueryRoot, MutationRoot, EmptySubscription> {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
}

/// Build the schema with `store` injected as resolver context.
pub fn build_schema(store: Arc<ProductStore>) -> CatalogSchema {
    schema_builder().data(store).finish()
}

/// Schema document (SDL) of the API.
pub fn sdl() -> String {
    schema_builder().finish().sdl()
}

fn product_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a ProductStore> {
    ctx.data::<Arc<ProductStore>>().map(Arc::as_ref)
}

fn product_id(id: ID) -> ProductId {
    ProductId::new(id.0)
}
