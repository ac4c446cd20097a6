//! Review Sentiment Service
//!
//! HTTP front end for `sentiment-engine`: a browser upload page with rendered
//! results, plus JSON and file-download endpoints. Every request is
//! independent; nothing is stored between requests.

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod state;
pub mod telemetry;
pub mod types;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, Settings};
pub use error::ApiError;
pub use state::AppState;

/// Build the service router. Upload size is capped by `settings.max_upload_bytes`.
pub fn router(state: Arc<AppState>) -> Router {
  let limit = state.settings.max_upload_bytes;
  Router::new()
    .route("/", get(handlers::index).post(handlers::upload))
    .route("/health", get(handlers::health))
    .route("/api/analyze", post(handlers::analyze))
    .route("/api/annotate", post(handlers::annotate))
    .layer(DefaultBodyLimit::max(limit))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}
