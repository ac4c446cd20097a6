//! Request/response types for the service.

use sentiment_engine::{Analysis, Report};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Query for raw-body API uploads: the uploaded file name picks the format.
#[derive(Debug, Deserialize)]
pub struct UploadQuery {
  #[serde(default)]
  pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
  pub analysis_id: Uuid,
  pub file_name: String,
  #[serde(flatten)]
  pub report: Report,
}

impl AnalysisResponse {
  pub fn new(analysis_id: Uuid, file_name: String, analysis: &Analysis) -> Self {
    Self {
      analysis_id,
      file_name,
      report: analysis.report(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use sentiment_engine::{Engine, TableFormat};

  #[test]
  fn response_carries_the_given_id() {
    let analysis = Engine::with_defaults()
      .analyze_bytes(b"review\ngreat\n", TableFormat::Csv)
      .unwrap();
    let id = Uuid::new_v4();
    let response = AnalysisResponse::new(id, "r.csv".into(), &analysis);

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["analysis_id"], id.to_string());
    assert_eq!(json["file_name"], "r.csv");
    assert_eq!(json["row_count"], 1);
  }
}
