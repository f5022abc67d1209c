use pipeline::ClassificationError;
use thiserror::Error;

/// Longest response body kept in an error message.
const MAX_BODY_CHARS: usize = 512;

/// Failures of the LLM HTTP adapter.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The HTTP client could not be constructed (e.g. TLS backend failure).
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request did not complete: connection refused, DNS, or timeout.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status.
    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body is not a Responses API payload.
    #[error("Could not decode provider response: {message}")]
    Decode { message: String },
}

impl LlmError {
    pub(crate) fn status(status: reqwest::StatusCode, body: &str) -> Self {
        let body = if body.chars().count() > MAX_BODY_CHARS {
            let truncated: String = body.chars().take(MAX_BODY_CHARS).collect();
            format!("{truncated}…")
        } else {
            body.to_string()
        };
        Self::Status {
            status: status.as_u16(),
            body,
        }
    }
}

impl From<LlmError> for ClassificationError {
    fn from(error: LlmError) -> Self {
        match error {
            LlmError::Status { status, body } => ClassificationError::Service { status, body },
            LlmError::Decode { message } => ClassificationError::MalformedResponse { message },
            other @ (LlmError::Client(_) | LlmError::Transport { .. }) => {
                ClassificationError::Transport {
                    message: other.to_string(),
                }
            }
        }
    }
}
