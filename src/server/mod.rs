pub mod handlers;
pub mod types;
pub mod upload;

use crate::{
    Error, Result,
    config::{Config, GeminiConfig},
    gemini::{BillExtractor, GeminiClient},
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use handlers::AppState;

/// Builds the application state. A missing API key is not fatal: the server
/// still starts and reports the problem on every analysis request.
pub fn build_state(config: GeminiConfig) -> Result<AppState> {
    let extractor = match GeminiClient::new(config) {
        Ok(client) => Some(Arc::new(client) as Arc<dyn BillExtractor>),
        Err(Error::MissingCredential) => {
            warn!("GEMINI_API_KEY is not set; bill analysis requests will fail");
            None
        }
        Err(e) => return Err(e),
    };

    Ok(AppState { extractor })
}

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    info!("Accepting bill uploads up to {} bytes", max_upload_bytes);
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/analyze-bill", post(handlers::analyze_bill))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let app_state = build_state(config.gemini.clone())?;
    let app = router(app_state, config.server.max_upload_bytes);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}
