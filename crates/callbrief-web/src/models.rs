use serde::Serialize;

/// Successful analysis (or negative classification) response.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub filename: String,
    pub analysis: String,
}

/// Uniform error payload. Domain failures are reported in the body with
/// HTTP 200; only malformed requests get a non-200 status.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Status payload for the root route.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}
