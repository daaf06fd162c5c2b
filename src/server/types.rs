use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope returned by `/api/analyze-bill`. Exactly one of `data` and
/// `error` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillAnalysisResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BillAnalysisResponse {
    pub fn success(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
