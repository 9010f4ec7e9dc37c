use std::sync::Arc;

use anyhow::Context;

use catalog_api::config::ApiConfig;
use catalog_products::ProductStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = ApiConfig::from_env()?;

    let store = Arc::new(ProductStore::seeded());
    let app = catalog_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    let addr = listener.local_addr()?;
    tracing::info!("Server ready at: http://{addr}/");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
