//! Error types for numclass

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid number '{raw}': {reason}")]
    InvalidNumber { raw: String, reason: String },

    #[error("Upstream unavailable: {0}")]
    Upstream(String),

    #[error("Malformed upstream body: {0}")]
    MalformedUpstreamBody(String),

    #[error("Upstream response has no fact")]
    MissingFact,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    pub fn invalid_number(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidNumber {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Error::Upstream(msg.into())
    }
}
