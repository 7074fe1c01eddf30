use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Raw draft text, sent untrimmed.
    pub email_content: String,
}

/// Successful response body. Any other shape is rejected at decode time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}

impl GenerateRequest {
    pub fn new(email_content: impl Into<String>) -> Self {
        Self {
            email_content: email_content.into(),
        }
    }
}
