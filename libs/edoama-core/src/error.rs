//! Error types for edoama-core.

use thiserror::Error;

/// Result type alias using SourceError.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Failures while acquiring or decoding a dictionary snapshot.
///
/// These are distinct from [`crate::resolver::MatchResult::NotFound`]: a query
/// absent from a healthy dictionary and a dictionary that could not be
/// obtained must surface as different outcomes.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The page text contains no embedded dictionary payload.
    #[error("no dictionary payload found in page text")]
    PayloadNotFound,

    /// The embedded payload is not a valid JSON object of entries.
    #[error("invalid dictionary payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// The collaborator fetching the page reported a transport failure.
    #[error("dictionary unavailable: {0}")]
    Unavailable(String),
}
