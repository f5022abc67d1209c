//! Port traits implemented by infrastructure crates.

use async_trait::async_trait;

use crate::ClassificationError;

/// An external text-classification engine.
///
/// Receives a complete instructional prompt and returns the engine's raw
/// free-text reply. Implementations do not trim, validate or retry; the
/// [`crate::TitleClassifier`] owns all interpretation of the reply.
///
/// Implemented by `llm::OpenAiProvider`. Tests supply scripted doubles.
#[async_trait]
pub trait ClassificationService: Send + Sync {
    /// Sends one prompt and returns the reply text.
    async fn request(&self, prompt: &str) -> Result<String, ClassificationError>;
}
