use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use job_automation_api::config::Config;
use job_automation_api::documents::MockDocumentGenerator;
use job_automation_api::routes::{build_router, ALLOWED_ORIGINS};
use job_automation_api::state::AppState;
use job_automation_api::store::Store;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "job_automation_api={},tower_http={}",
                &config.rust_log, &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Job Automation API v{} ({})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    let store = Store::with_seed_data()?;
    info!(
        "Store seeded with {} jobs and {} applications",
        store.job_count().await,
        store.application_count().await
    );

    let state = AppState::new(store, Arc::new(MockDocumentGenerator), config.clone());

    let app = build_router(state).layer(TraceLayer::new_for_http());
    info!("CORS origins: {}", ALLOWED_ORIGINS.join(", "));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
