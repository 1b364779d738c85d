mod types;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use crate::traits::{LabelScore, ZeroShotClassifier};
use types::*;

const HF_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";

/// Zero-shot classification via the Hugging Face Inference API.
///
/// One POST per call: the text plus the candidate label set, with
/// `multi_label` enabled so each label is scored independently.
pub struct HfClassifier {
    api_token: String,
    model: String,
    http: reqwest::Client,
    base_url: String,
}

impl HfClassifier {
    pub fn new(api_token: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            model: model.into(),
            http: reqwest::Client::new(),
            base_url: HF_INFERENCE_URL.to_string(),
        }
    }

    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_token = std::env::var("HF_TOKEN")
            .map_err(|_| anyhow!("HF_TOKEN environment variable not set"))?;
        Ok(Self::new(api_token, model))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_token))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

#[async_trait]
impl ZeroShotClassifier for HfClassifier {
    async fn classify(&self, text: &str, labels: &[&str]) -> Result<Vec<LabelScore>> {
        let url = format!("{}/{}", self.base_url, self.model);
        let request = ZeroShotRequest {
            inputs: text,
            parameters: ZeroShotParameters {
                candidate_labels: labels,
                multi_label: true,
            },
        };

        debug!(model = %self.model, labels = labels.len(), "zero-shot classification request");

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow!(
                "Hugging Face API error ({}): {}",
                status,
                error_text
            ));
        }

        let body: ZeroShotResponse = response.json().await?;
        if body.labels.len() != body.scores.len() {
            return Err(anyhow!(
                "malformed zero-shot response: {} labels but {} scores",
                body.labels.len(),
                body.scores.len()
            ));
        }

        Ok(body
            .labels
            .into_iter()
            .zip(body.scores)
            .map(|(label, score)| LabelScore { label, score })
            .collect())
    }
}
