//! Scripted [`ClassificationService`] double shared by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{ClassificationError, ClassificationService};

/// Replies are keyed by the title embedded in the prompt, so results do not
/// depend on call order.
#[derive(Default)]
pub(crate) struct ScriptedService {
    replies: HashMap<String, Result<String, ClassificationError>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedService {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(mut self, title: &str, reply: &str) -> Self {
        self.replies
            .insert(title.to_string(), Ok(reply.to_string()));
        self
    }

    pub(crate) fn fail(mut self, title: &str, error: ClassificationError) -> Self {
        self.replies.insert(title.to_string(), Err(error));
        self
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl ClassificationService for ScriptedService {
    async fn request(&self, prompt: &str) -> Result<String, ClassificationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let title = prompt.rsplit("Title: ").next().unwrap_or_default();
        self.replies
            .get(title)
            .cloned()
            .unwrap_or_else(|| {
                Err(ClassificationError::Transport {
                    message: format!("no scripted reply for '{title}'"),
                })
            })
    }
}
