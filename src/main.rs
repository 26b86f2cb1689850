//! Ezhuthu Server
//!
//! A small self-hosted OCR server for Tamil text. Accepts an uploaded image,
//! runs it through Tesseract with a local `tam.traineddata`, and returns the
//! recognized text as JSON.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod ocr;
mod routes;
mod state;
mod upload;

use config::Config;
use ocr::{TesseractEngine, TextRecognizer};
use state::AppState;
use upload::UploadStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ezhuthu_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    tracing::info!("Starting Ezhuthu Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("OCR engine: {}", config.ocr.engine_path.display());
    tracing::info!(
        "Tessdata dir: {} (language: {}, psm: {})",
        config.ocr.tessdata_dir.display(),
        config.ocr.language,
        config.ocr.page_seg_mode
    );

    let uploads = UploadStore::new(&config.upload.dir)?;

    let recognizer: Arc<dyn TextRecognizer> = Arc::new(TesseractEngine::new(config.ocr.clone()));
    if !recognizer.is_available().await {
        tracing::warn!(
            "Tesseract not found at '{}'. Uploads will fail until it is installed \
             or TESSERACT_PATH points at the binary",
            config.ocr.engine_path.display()
        );
    }

    let app_state = AppState::new(uploads, recognizer);

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .merge(routes::pages::router())
        .nest("/health", routes::health::router())
        .nest("/upload", routes::upload::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    // Start server with graceful shutdown
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Ezhuthu Server listening on {}", addr);
    tracing::info!(
        "Ensure '{}.traineddata' is present in {}",
        config.ocr.language,
        config.ocr.tessdata_dir.display()
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
