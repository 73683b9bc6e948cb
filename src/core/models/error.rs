//! Errors from listing models.

/// Why the model list could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// The endpoint answered with something other than 200.
    #[error("{code} - {body}")]
    HttpStatus { code: u16, body: String },
    /// Connection, DNS, timeout, or request construction failure.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// A 200 response whose body is not the expected JSON.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}
