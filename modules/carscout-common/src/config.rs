use std::env;

use tracing::info;

/// Default zero-shot classification model on the Hugging Face hub.
pub const DEFAULT_HF_MODEL: &str = "facebook/bart-large-mnli";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Hugging Face API token (bearer auth for the Inference API).
    pub hf_token: String,
    /// Model id used for zero-shot classification.
    pub hf_model: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            hf_token: required_env("HF_TOKEN"),
            hf_model: env::var("HF_MODEL").unwrap_or_else(|_| DEFAULT_HF_MODEL.to_string()),
        }
    }

    /// Log the loaded config with secrets redacted.
    pub fn log_redacted(&self) {
        info!(
            hf_model = self.hf_model.as_str(),
            hf_token = if self.hf_token.is_empty() { "unset" } else { "set" },
            "Config loaded"
        );
    }
}

fn required_env(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| panic!("{name} environment variable is required"))
}
