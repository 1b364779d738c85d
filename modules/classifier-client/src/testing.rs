// Test mocks for the classifier boundary.
//
// Two mocks for the one trait seam:
// - ScriptedClassifier — fixed label→score map, echoes the submitted labels
// - CannedClassifier — returns a verbatim response regardless of input
//   (for exercising unknown-label and case-normalization handling)

use std::collections::HashMap;

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::traits::{LabelScore, ZeroShotClassifier};

/// Scripted classifier: scores each submitted label from a fixed map.
/// Labels with no scripted score come back as 0.0. `failing()` builds one
/// that errors on every call, for the classification failure path.
pub struct ScriptedClassifier {
    scores: HashMap<String, f64>,
    fail: bool,
}

impl ScriptedClassifier {
    pub fn new() -> Self {
        Self {
            scores: HashMap::new(),
            fail: false,
        }
    }

    pub fn with_score(mut self, label: &str, score: f64) -> Self {
        self.scores.insert(label.to_string(), score);
        self
    }

    pub fn failing() -> Self {
        Self {
            scores: HashMap::new(),
            fail: true,
        }
    }
}

impl Default for ScriptedClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ZeroShotClassifier for ScriptedClassifier {
    async fn classify(&self, _text: &str, labels: &[&str]) -> Result<Vec<LabelScore>> {
        if self.fail {
            bail!("scripted classifier failure");
        }
        Ok(labels
            .iter()
            .map(|label| LabelScore {
                label: (*label).to_string(),
                score: self.scores.get(*label).copied().unwrap_or(0.0),
            })
            .collect())
    }
}

/// Returns a fixed response verbatim, ignoring the submitted text and
/// labels. Lets tests feed the extractor labels the real model might
/// produce (mixed case, labels outside the candidate set).
pub struct CannedClassifier {
    response: Vec<LabelScore>,
}

impl CannedClassifier {
    pub fn new(response: Vec<LabelScore>) -> Self {
        Self { response }
    }
}

#[async_trait]
impl ZeroShotClassifier for CannedClassifier {
    async fn classify(&self, _text: &str, _labels: &[&str]) -> Result<Vec<LabelScore>> {
        Ok(self.response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_scores_default_to_zero() {
        let classifier = ScriptedClassifier::new().with_score("luxury", 0.9);
        let scores = classifier
            .classify("a fancy car", &["luxury", "compact"])
            .await
            .unwrap();
        assert_eq!(scores[0], LabelScore::new("luxury", 0.9));
        assert_eq!(scores[1], LabelScore::new("compact", 0.0));
    }

    #[tokio::test]
    async fn failing_classifier_errors_on_every_call() {
        let classifier = ScriptedClassifier::failing();
        assert!(classifier.classify("anything", &["luxury"]).await.is_err());
    }
}
