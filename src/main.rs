//! Wisest backend entrypoint.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wisest::adapters::ai::{GeminiConfig, GeminiFeedbackProvider, MockFeedbackProvider};
use wisest::adapters::http::{api_routes, AppState};
use wisest::adapters::storage::InMemoryDecisionRepository;
use wisest::config::AppConfig;
use wisest::ports::FeedbackProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let repository = Arc::new(InMemoryDecisionRepository::new());
    let provider = feedback_provider(&config)?;

    let state = AppState::new(repository, provider);
    let router = api_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config));

    let addr = config.server.socket_addr()?;
    info!(%addr, "starting wisest backend");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.server.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Wires the Gemini provider when a key is configured; otherwise a
/// provider that always fails, which routes every feedback request to the
/// application-level placeholder.
fn feedback_provider(config: &AppConfig) -> Result<Arc<dyn FeedbackProvider>, Box<dyn Error>> {
    match config.feedback.api_key() {
        Some(key) => {
            let gemini = GeminiFeedbackProvider::new(
                GeminiConfig::new(key)
                    .with_model(config.feedback.model.clone())
                    .with_timeout(config.feedback.timeout()),
            )?;
            Ok(Arc::new(gemini))
        }
        None => {
            warn!("no Gemini API key configured, feedback requests will use the placeholder");
            Ok(Arc::new(MockFeedbackProvider::unavailable()))
        }
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to install shutdown signal handler");
    }
}
