//! OpenAI Responses API client.
//!
//! Sends `{"model": ..., "input": <prompt>}` to `POST {base_url}/responses`
//! and returns the reply text: the top-level `output_text` field when the
//! provider supplies it, otherwise every `output_text` content part of every
//! output item, concatenated in order.

use std::time::Duration;

use async_trait::async_trait;
use pipeline::{ClassificationError, ClassificationService};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::LlmError;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-5.2";

/// Public OpenAI API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for [`OpenAiProvider`].
#[derive(Clone)]
pub struct OpenAiConfig {
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl OpenAiConfig {
    /// Creates settings with the default model, base URL and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the model name sent with every request.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the API root (proxies, compatible gateways, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the per-request timeout (connect through body).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the API root requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct ResponsesReply {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Option<Vec<OutputItem>>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl ResponsesReply {
    fn into_text(self) -> Result<String, LlmError> {
        if let Some(text) = self.output_text {
            return Ok(text);
        }
        let output = self.output.ok_or_else(|| LlmError::Decode {
            message: "response has neither 'output_text' nor 'output'".to_string(),
        })?;
        Ok(output
            .into_iter()
            .flat_map(|item| item.content)
            .filter(|part| part.kind == "output_text")
            .filter_map(|part| part.text)
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// [`ClassificationService`] backed by the OpenAI Responses API.
///
/// One HTTP request per call; the client is shared and cheap to clone.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiProvider {
    /// Builds the HTTP client with the configured timeout.
    pub fn new(config: OpenAiConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(LlmError::Client)?;
        Ok(Self { client, config })
    }

    /// Returns the settings this provider was built with.
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// Sends `prompt` and returns the raw reply text.
    #[instrument(skip_all, fields(model = %self.config.model))]
    pub async fn respond(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/responses", self.config.base_url.trim_end_matches('/'));
        let body = ResponsesRequest {
            model: &self.config.model,
            input: prompt,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|source| LlmError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::status(status, &body));
        }

        let reply: ResponsesReply = response.json().await.map_err(|e| LlmError::Decode {
            message: e.to_string(),
        })?;
        let text = reply.into_text()?;
        debug!(reply_len = text.len(), "Provider replied");
        Ok(text)
    }
}

#[async_trait]
impl ClassificationService for OpenAiProvider {
    async fn request(&self, prompt: &str) -> Result<String, ClassificationError> {
        Ok(self.respond(prompt).await?)
    }
}

#[cfg(test)]
#[path = "openai_tests.rs"]
mod tests;
