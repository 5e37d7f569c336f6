use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures are split by cause so they can be logged; callers at
/// the request boundary collapse them into a single unauthorized outcome.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}
