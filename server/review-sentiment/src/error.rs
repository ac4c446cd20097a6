//! Service errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sentiment_engine::AnalysisError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Analysis(#[from] AnalysisError),

  #[error("upload: {0}")]
  Upload(String),

  #[error("upload too large: {0}")]
  TooLarge(String),

  #[error("internal: {0}")]
  Internal(String),
}

impl ApiError {
  pub fn upload(msg: impl Into<String>) -> Self {
    Self::Upload(msg.into())
  }

  pub fn status(&self) -> StatusCode {
    match self {
      Self::Analysis(AnalysisError::UnreadableFile(_)) => StatusCode::BAD_REQUEST,
      Self::Analysis(AnalysisError::MissingReviewColumn) => StatusCode::UNPROCESSABLE_ENTITY,
      Self::Analysis(AnalysisError::UnsupportedFormat(_)) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
      Self::Analysis(AnalysisError::Export(_)) => StatusCode::INTERNAL_SERVER_ERROR,
      Self::Upload(_) => StatusCode::BAD_REQUEST,
      Self::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
      Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  pub fn kind(&self) -> &'static str {
    match self {
      Self::Analysis(e) => e.kind(),
      Self::Upload(_) => "upload",
      Self::TooLarge(_) => "too_large",
      Self::Internal(_) => "internal",
    }
  }
}

/// JSON body for failed API calls.
#[derive(Debug, Serialize)]
pub struct ErrorOutput {
  pub error: String,
  pub kind: &'static str,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let body = ErrorOutput {
      error: self.to_string(),
      kind: self.kind(),
    };
    (self.status(), Json(body)).into_response()
  }
}
