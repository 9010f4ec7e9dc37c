//! GraphQL API over the in-memory product catalog: schema, routing, runtime config.

pub mod app;
pub mod config;
pub mod graphql;
pub mod middleware;
