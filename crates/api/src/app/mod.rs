//! HTTP application wiring (Axum router + GraphQL schema).
//!
//! - `routes/`: HTTP handlers (GraphQL endpoint, GraphiQL page, SDL, health)
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use catalog_products::ProductStore;

use crate::{graphql, middleware};

pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(store: Arc<ProductStore>) -> Router {
    let schema = graphql::build_schema(store);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .fallback(routes::system::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(CorsLayer::permissive())
                .layer(Extension(schema)),
        )
}
