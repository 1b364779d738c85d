use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarScoutError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The classifier call failed or returned malformed output. Terminal
    /// for the current turn; no retry, no filtering.
    #[error("Classification error: {0:#}")]
    Classification(anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
