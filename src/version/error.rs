use std::error::Error as _;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Crate not found: {0}")]
    NotFound(String),

    #[error("HTTP error {status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("No versions found for crate: {0}")]
    EmptyVersionList(String),

    #[error("No non-yanked versions found for crate: {0}")]
    AllYanked(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Unexpected(err.to_string());
        }

        // reqwest's own message only names the URL; the cause is further down
        let mut reason = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            reason.push_str(": ");
            reason.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Network(reason)
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Unexpected(err.to_string())
    }
}
