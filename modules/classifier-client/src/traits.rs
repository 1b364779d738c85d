use anyhow::Result;
use async_trait::async_trait;

/// One label's independent confidence score, in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

impl LabelScore {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// A pretrained multi-label zero-shot classifier: scores free text against
/// each candidate label independently. Scores need not sum to 1 and labels
/// are not mutually exclusive.
///
/// The underlying model is an external stateful resource (weights loaded
/// once); implementations are constructed once and injected, never rebuilt
/// per call. The call blocks for the duration of model inference — callers
/// wanting responsiveness should apply their own timeout.
#[async_trait]
pub trait ZeroShotClassifier: Send + Sync {
    async fn classify(&self, text: &str, labels: &[&str]) -> Result<Vec<LabelScore>>;
}
