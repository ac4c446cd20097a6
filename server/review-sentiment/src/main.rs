//! Binary entrypoint for the review sentiment service.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

use review_sentiment::{telemetry, AppState, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let settings = Settings::from_env()?;
  let addr = SocketAddr::new(settings.bind_addr, settings.port);
  let state = Arc::new(AppState::new(settings));
  let app = review_sentiment::router(state);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  info!("review-sentiment listening on http://{}", listener.local_addr()?);
  info!("  - GET  /              (upload page)");
  info!("  - POST /              (multipart upload, HTML results)");
  info!("  - POST /api/analyze   (raw upload, JSON report)");
  info!("  - POST /api/annotate  (raw upload, annotated file)");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  info!("server shutdown complete");
  Ok(())
}

/// Wait for SIGTERM or Ctrl+C.
async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      warn!("failed to install Ctrl+C handler: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut s) => {
        s.recv().await;
      }
      Err(e) => {
        warn!("failed to install SIGTERM handler: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => info!("received SIGINT, shutting down"),
    () = terminate => info!("received SIGTERM, shutting down"),
  }
}
