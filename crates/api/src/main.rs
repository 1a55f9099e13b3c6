use std::sync::Arc;

use unipos_auth::AuthConfig;
use unipos_store::{MemoryStore, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    unipos_observability::init();

    // Misconfiguration is a startup failure; there is no fallback secret.
    let config = AuthConfig::from_env()?;

    let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
    let app = unipos_api::app::build_app(config, store);

    let addr = std::env::var("UNIPOS_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
