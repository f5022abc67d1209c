//! Patent sorter LLM provider infrastructure adapter.
//!
//! Implements the [`pipeline::ClassificationService`] trait for OpenAI's
//! Responses API. Additional providers are added as new `impl` blocks in this
//! crate without any changes to the `pipeline` crate.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** All HTTP transport, request formatting, response parsing
//! and timeouts live here. The [`pipeline`] crate sees only
//! [`pipeline::ClassificationService`] and [`pipeline::ClassificationError`].
//!
//! There is no retry or back-off: a failed call is reported once
//! and the classifier turns it into `Unknown`.

pub mod error;
pub mod openai;

pub use error::LlmError;
pub use openai::{OpenAiConfig, OpenAiProvider, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};
