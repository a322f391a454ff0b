//! Pipeline-run listing returned by `GET /status`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::StatusResult;

/// One pipeline run as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineRun {
    pub experiment_id: String,
    /// Sequence id derived from the uploaded file name.
    pub sequence: String,
    /// Final word of the pipeline state, e.g. `RUNNING`, `SUCCEEDED`.
    pub status: String,
    /// `"1h12m"` once finished; the backend sends `0` otherwise.
    #[serde(default, deserialize_with = "deserialize_duration")]
    pub duration: Option<String>,
    pub url_link: String,
    pub user: String,
}

impl PipelineRun {
    pub fn is_finished(&self) -> bool {
        self.duration.is_some()
    }

    pub fn duration_label(&self) -> &str {
        self.duration.as_deref().unwrap_or("-")
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// Parse a `/status` response body.
pub fn parse_runs(body: &str) -> StatusResult<Vec<PipelineRun>> {
    Ok(serde_json::from_str(body)?)
}
