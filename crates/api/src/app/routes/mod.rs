use axum::{Router, routing::get};

pub mod graphql;
pub mod system;

/// Router for the GraphQL endpoint, served on the root path.
pub fn router() -> Router {
    Router::new()
        .route("/", get(graphql::graphql_get).post(graphql::graphql_handler))
        .route("/schema.graphql", get(graphql::schema_sdl))
}
