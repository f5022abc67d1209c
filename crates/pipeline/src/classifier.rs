//! Title classification.
//!
//! [`TitleClassifier`] is a total function from a title to a [`Category`]:
//! every failure mode of the external service collapses into
//! [`Category::Unknown`].

use std::sync::Arc;

use tracing::{debug, warn};

use crate::taxonomy::label_list;
use crate::{Category, ClassificationService};

/// Classifies patent titles through an injected [`ClassificationService`].
#[derive(Clone)]
pub struct TitleClassifier {
    service: Arc<dyn ClassificationService>,
}

impl TitleClassifier {
    /// Creates a classifier that sends every prompt to `service`.
    pub fn new(service: Arc<dyn ClassificationService>) -> Self {
        Self { service }
    }

    /// Assigns a category to one title.
    ///
    /// Whitespace-only titles return [`Category::Unknown`] without a service
    /// call. Otherwise exactly one request is made and the trimmed reply must
    /// match a valid label exactly.
    pub async fn classify(&self, title: &str) -> Category {
        let title = title.trim();
        if title.is_empty() {
            return Category::Unknown;
        }

        let reply = match self.service.request(&build_prompt(title)).await {
            Ok(reply) => reply,
            Err(error) => {
                warn!(%error, title, "Classification request failed; using Unknown");
                return Category::Unknown;
            }
        };

        let label = reply.trim();
        match Category::from_label(label) {
            Some(category) => category,
            None => {
                debug!(reply = label, title, "Reply is not a valid category; using Unknown");
                Category::Unknown
            }
        }
    }
}

impl std::fmt::Debug for TitleClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleClassifier").finish_non_exhaustive()
    }
}

/// Builds the instruction sent for one (already trimmed) title.
pub fn build_prompt(title: &str) -> String {
    format!(
        "You are a strict classifier.\n\
         Classify the patent title into exactly ONE of: {}.\n\
         Return ONLY the category name.\n\n\
         Title: {title}",
        label_list()
    )
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
