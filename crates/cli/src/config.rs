//! Classifier settings.
//!
//! Settings are layered: built-in defaults, then the optional TOML file, then
//! command-line flags and environment variables. The API key is never read
//! from the file.
//!
//! ```toml
//! [classifier]
//! model = "gpt-5.2"
//! base_url = "https://api.openai.com/v1"
//! timeout_secs = 60
//! concurrency = 1
//! ```

use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use llm::{OpenAiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    classifier: ClassifierSettings,
}

/// Effective settings for the classification adapter and pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierSettings {
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub concurrency: usize,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            concurrency: 1,
        }
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub concurrency: Option<usize>,
    pub timeout_secs: Option<u64>,
}

impl ClassifierSettings {
    /// Parses the `[classifier]` table of a settings document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).context("Invalid settings file")?;
        Ok(file.classifier)
    }

    /// Loads the settings file if one is given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read settings file {}", path.display()))?;
                Self::from_toml_str(&content)
                    .with_context(|| format!("Failed to load settings from {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Applies overrides, then validates the result.
    pub fn resolve(mut self, overrides: &SettingsOverrides) -> Result<Self> {
        if let Some(model) = &overrides.model {
            self.model = model.clone();
        }
        if let Some(base_url) = &overrides.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(concurrency) = overrides.concurrency {
            self.concurrency = concurrency;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            bail!("Model name must not be empty");
        }
        if self.base_url.trim().is_empty() {
            bail!("Base URL must not be empty");
        }
        if self.timeout_secs == 0 {
            bail!("Timeout must be at least one second");
        }
        if self.concurrency == 0 {
            bail!("Concurrency must be at least 1");
        }
        Ok(())
    }

    pub fn concurrency(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.concurrency).unwrap_or(NonZeroUsize::MIN)
    }

    /// Builds the adapter configuration for the given API key.
    pub fn openai_config(&self, api_key: String) -> OpenAiConfig {
        OpenAiConfig::new(api_key)
            .with_model(self.model.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
