use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub image: String,
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub code: String,
    #[serde(rename = "isMock")]
    pub is_mock: bool,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub code: String,
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub srcdoc: String,
    pub sandbox: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            details: None,
        }
    }

    pub fn with_details(error: &str, details: Value) -> Self {
        Self {
            error: error.to_string(),
            details: Some(details),
        }
    }
}
