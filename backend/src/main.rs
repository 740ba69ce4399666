use dotenvy::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use truerise_backend::{build_router, config::server_config::ServerConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let server_config = ServerConfig::from_env()?;

    let _guard = server_config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = Arc::new(AppState::from_env()?);
    if state.airtable.is_none() {
        tracing::warn!("AIRTABLE_TOKEN, AIRTABLE_BASE_ID or AIRTABLE_TABLE_NAME missing; lead relay answers 501");
    }

    let app = build_router(state);

    let listener = TcpListener::bind(server_config.bind_address()).await?;
    tracing::info!("Lead relay listening on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
