use thiserror::Error;

// Domain-level errors for media asset workflows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MediaLakeError {
    #[error("only one of payload or sourceUrl/sourceUrlValidUntil may be set")]
    InvalidMedia,
    #[error("{0}")]
    InvalidAsset(String),
    #[error("media asset with gtin {0} already exists")]
    DuplicateGtin(String),
    #[error("at least one delete criterion is required")]
    MissingCriteria,
    #[error("media asset not found")]
    NotFound,
    #[error("more than one media asset matches")]
    AmbiguousMatch,
    #[error("storage error")]
    StorageFailure,
}

// Errors raised by the API key check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Not authenticated")]
    MissingApiKey,
    #[error("Invalid API Key")]
    InvalidApiKey,
}

// A stored or submitted value outside one of the closed enumerations.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
