//! HTTP handlers for the sentiment service.

use axum::body::Bytes;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use sentiment_engine::{Analysis, AnalysisError, TableFormat};
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument, Span};
use uuid::Uuid;

use crate::error::ApiError;
use crate::render;
use crate::state::AppState;
use crate::types::{AnalysisResponse, UploadQuery};

/// Multipart field carrying the uploaded file.
const FILE_FIELD: &str = "file";

pub async fn health() -> &'static str {
  "ok"
}

pub async fn index() -> Html<String> {
  Html(render::upload_page())
}

/// Browser upload: analyse the file and render the results page.
pub async fn upload(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
  let result = async {
    let (file_name, content_type, bytes) = read_file_field(multipart).await?;
    let format = resolve_format(file_name.as_deref(), content_type.as_deref())?;
    let name = file_name.unwrap_or_default();
    let analysis = run_analysis(&state, Uuid::new_v4(), bytes, format, &name).await?;
    let download = analysis.export()?;
    Ok::<_, ApiError>(render::result_page(&analysis.report(), &download))
  }
  .await;

  match result {
    Ok(page) => Html(page).into_response(),
    Err(e) => {
      warn!(kind = e.kind(), error = %e, "upload rejected");
      (e.status(), Html(render::error_page(&e.to_string()))).into_response()
    }
  }
}

/// Raw-body upload: JSON report.
pub async fn analyze(
  State(state): State<Arc<AppState>>,
  Query(query): Query<UploadQuery>,
  headers: HeaderMap,
  body: Bytes,
) -> Result<Json<AnalysisResponse>, ApiError> {
  let content_type = content_type(&headers);
  let format = resolve_format(query.filename.as_deref(), content_type.as_deref())
    .inspect_err(|e| warn!(kind = e.kind(), "upload rejected"))?;
  let file_name = query.filename.unwrap_or_default();
  let id = Uuid::new_v4();
  let analysis = run_analysis(&state, id, body, format, &file_name).await?;

  Ok(Json(AnalysisResponse::new(id, file_name, &analysis)))
}

/// Raw-body upload: annotated file as an attachment.
pub async fn annotate(
  State(state): State<Arc<AppState>>,
  Query(query): Query<UploadQuery>,
  headers: HeaderMap,
  body: Bytes,
) -> Result<Response, ApiError> {
  let content_type = content_type(&headers);
  let format = resolve_format(query.filename.as_deref(), content_type.as_deref())?;
  let file_name = query.filename.unwrap_or_default();
  let analysis = run_analysis(&state, Uuid::new_v4(), body, format, &file_name).await?;
  let bytes = analysis.export()?;

  let disposition = format!("attachment; filename=\"{}\"", format.results_file_name());
  Ok(
    (
      StatusCode::OK,
      [
        (header::CONTENT_TYPE, format.mime_type().to_string()),
        (header::CONTENT_DISPOSITION, disposition),
      ],
      bytes,
    )
      .into_response(),
  )
}

/// Pick the format from the file name, falling back to the MIME type.
pub fn resolve_format(
  file_name: Option<&str>,
  content_type: Option<&str>,
) -> Result<TableFormat, AnalysisError> {
  let by_name = TableFormat::from_file_name(file_name.unwrap_or_default());
  match (by_name, content_type.and_then(TableFormat::from_mime)) {
    (Ok(format), _) => Ok(format),
    (Err(_), Some(format)) => Ok(format),
    (Err(e), None) => Err(e),
  }
}

fn content_type(headers: &HeaderMap) -> Option<String> {
  headers
    .get(header::CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .map(str::to_string)
}

async fn read_file_field(
  mut multipart: Multipart,
) -> Result<(Option<String>, Option<String>, Bytes), ApiError> {
  while let Some(field) = multipart
    .next_field()
    .await
    .map_err(multipart_error)?
  {
    if field.name() != Some(FILE_FIELD) {
      continue;
    }
    let file_name = field.file_name().map(str::to_string);
    let content_type = field.content_type().map(str::to_string);
    let bytes = field.bytes().await.map_err(multipart_error)?;
    return Ok((file_name, content_type, bytes));
  }
  Err(ApiError::upload("no file was uploaded"))
}

/// Body limit hits become 413; any other multipart failure is a bad upload.
fn multipart_error(e: MultipartError) -> ApiError {
  if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
    ApiError::TooLarge(e.body_text())
  } else {
    ApiError::upload(e.body_text())
  }
}

/// Run the pipeline off the async workers; it is CPU-bound and synchronous.
/// Every event is recorded inside an `analysis` span carrying `id`.
async fn run_analysis(
  state: &Arc<AppState>,
  id: Uuid,
  bytes: Bytes,
  format: TableFormat,
  file_name: &str,
) -> Result<Analysis, ApiError> {
  let span = info_span!("analysis", analysis_id = %id);
  analyse_blocking(state, bytes, format, file_name)
    .instrument(span)
    .await
}

async fn analyse_blocking(
  state: &Arc<AppState>,
  bytes: Bytes,
  format: TableFormat,
  file_name: &str,
) -> Result<Analysis, ApiError> {
  let size = bytes.len();
  let worker = Arc::clone(state);
  // Engine events from the blocking thread stay inside the analysis span.
  let span = Span::current();
  let analysis = tokio::task::spawn_blocking(move || {
    span.in_scope(|| worker.engine.analyze_bytes(&bytes, format))
  })
    .await
    .map_err(|e| ApiError::Internal(format!("analysis task failed: {}", e)))?
    .inspect_err(|e| warn!(file_name, kind = e.kind(), error = %e, "analysis failed"))?;

  info!(
    file_name,
    bytes = size,
    ?format,
    review_column = %analysis.review_column,
    rows = analysis.table.row_count(),
    positive = analysis.distribution.positive,
    negative = analysis.distribution.negative,
    neutral = analysis.distribution.neutral,
    insight = ?analysis.insight,
    "upload analysed"
  );
  Ok(analysis)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn name_wins_over_mime() {
    assert_eq!(
      resolve_format(Some("r.xlsx"), Some("text/csv")).unwrap(),
      TableFormat::Xlsx
    );
  }

  #[test]
  fn mime_is_the_fallback() {
    assert_eq!(resolve_format(None, Some("text/csv")).unwrap(), TableFormat::Csv);
    assert_eq!(resolve_format(Some("upload"), Some("text/csv")).unwrap(), TableFormat::Csv);
  }

  #[test]
  fn unknown_upload_is_unsupported() {
    let err = resolve_format(Some("notes.txt"), Some("text/plain")).unwrap_err();
    assert!(matches!(err, AnalysisError::UnsupportedFormat(_)));
    assert!(resolve_format(None, None).is_err());
  }
}
