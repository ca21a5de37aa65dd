use thiserror::Error;

/// Failure modes of the listings backend
///
/// `NotFound` is kept separate from the transport variants so a missing
/// listing can render as "not found" instead of a generic load failure.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("no such listing")]
    NotFound,

    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}
