//! Error kinds for a dispatch.

use thiserror::Error;

/// Shown when the draft is blank.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter an email to process";

/// Shown for every failure past the empty check.
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to generate response. Please try again.";

/// Longest slice of an error body kept for diagnostics.
const MAX_BODY_DETAIL: usize = 200;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// Draft was empty or whitespace-only. Raised before any network activity.
    #[error("email content is empty")]
    EmptyInput,

    /// Request never completed (refused, DNS, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("endpoint returned HTTP {status}")]
    Status { status: u16, body: String },

    /// Success status but the body is not `{ "response": <string> }`.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The dispatch ended without producing an outcome.
    #[error("request was interrupted before completion")]
    Interrupted,
}

impl GenerateError {
    /// User-facing text. Every cause past the empty check collapses into one message.
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerateError::EmptyInput => EMPTY_INPUT_MESSAGE,
            GenerateError::Transport(_)
            | GenerateError::Status { .. }
            | GenerateError::Decode(_)
            | GenerateError::Interrupted => REQUEST_FAILED_MESSAGE,
        }
    }

    /// Technical details for logs.
    pub fn details(&self) -> String {
        match self {
            GenerateError::Status { status, body } if !body.is_empty() => {
                format!("HTTP {}: {}", status, truncate(body, MAX_BODY_DETAIL))
            }
            other => other.to_string(),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}
