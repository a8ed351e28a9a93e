use thiserror::Error;

/// Error type for token operations.
///
/// The distinctions exist for server-side logging; the HTTP layer collapses
/// every verification failure into a single unauthenticated response.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token subject is not a valid user id")]
    InvalidSubject,
}
