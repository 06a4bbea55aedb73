use anyhow::Context;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use mergington::config::ServerConfig;
use mergington::database::ActivityStore;
use mergington::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let store = ActivityStore::seeded();
    tracing::info!(activities = store.snapshot().len(), "activity store seeded");

    let app = web::router(store, &config.static_dir);

    let addr = config.addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            tracing::warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind {} or {}", addr, fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    tracing::info!("serving on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
