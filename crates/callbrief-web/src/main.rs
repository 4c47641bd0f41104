use std::sync::Arc;

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing_subscriber::EnvFilter;

mod handlers;
mod models;
mod state;
mod upload;

use callbrief_core::{AnalyzerConfig, GroqClient};
use callbrief_pdf::PdfExtractBackend;
use state::AppState;

/// Upload body limit. PDFs past this size are rejected by the framework
/// before the handler runs.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let api_key = std::env::var("GROQ_API_KEY")
        .map_err(|_| anyhow::anyhow!("GROQ_API_KEY is not set in environment variables"))?;

    let config = AnalyzerConfig::load();
    let addr = config.bind_addr;
    let provider = GroqClient::new(api_key, &config)?;

    let state = Arc::new(AppState {
        provider: Arc::new(provider),
        pdf_backend: Arc::new(PdfExtractBackend::new()),
        config,
    });

    // Browser clients upload from arbitrary origins; mirror the request so
    // credentialed CORS stays valid.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let app = axum::Router::new()
        .route("/", axum::routing::get(handlers::index::index))
        .route("/upload", axum::routing::post(handlers::upload::upload))
        .layer(axum::extract::DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .with_state(state);

    tracing::info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
