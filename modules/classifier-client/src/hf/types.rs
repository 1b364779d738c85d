use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct ZeroShotRequest<'a> {
    pub inputs: &'a str,
    pub parameters: ZeroShotParameters<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ZeroShotParameters<'a> {
    pub candidate_labels: &'a [&'a str],
    pub multi_label: bool,
}

/// Zero-shot pipeline response: parallel `labels`/`scores` arrays,
/// sorted by descending score.
#[derive(Debug, Deserialize)]
pub(crate) struct ZeroShotResponse {
    pub labels: Vec<String>,
    pub scores: Vec<f64>,
}
