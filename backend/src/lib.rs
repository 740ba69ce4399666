use axum::{
    http::{header, HeaderValue},
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config {
    pub mod airtable_config;
    pub mod server_config;
}
pub mod api {
    pub mod airtable;
}
pub mod handlers {
    pub mod lead_handlers;
}
pub mod error;

use api::airtable::AirtableClient;
use config::airtable_config::AirtableConfig;
use handlers::lead_handlers;

const AIRTABLE_TIMEOUT: Duration = Duration::from_secs(15);

pub struct AppState {
    /// `None` when the Airtable credentials are not set.
    pub airtable: Option<AirtableClient>,
}

impl AppState {
    pub fn from_env() -> anyhow::Result<Self> {
        let airtable = match AirtableConfig::from_env() {
            Some(config) => {
                let http = reqwest::Client::builder().timeout(AIRTABLE_TIMEOUT).build()?;
                Some(AirtableClient::new(http, config))
            }
            None => None,
        };
        Ok(Self { airtable })
    }
}

async fn health_check() -> &'static str {
    "OK"
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let lead_routes = Router::new()
        .route("/api/airtable-lead", any(lead_handlers::airtable_lead))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ));

    Router::new()
        .route("/api/health", get(health_check))
        .merge(lead_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
