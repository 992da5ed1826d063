//! Error types for rs-wiktionary.
//!
//! This module defines the error types returned by extraction and retrieval
//! operations. A landmark that is missing from an article is never an error;
//! the corresponding record field is simply left empty.

/// Error type for extraction and retrieval operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The language tag is not one of the supported codes.
    #[error("invalid language: {0:?}")]
    InvalidLanguage(String),

    /// The article markup could not be parsed into a document.
    #[error("HTML parsing failed: {0}")]
    DocumentParseFailure(String),

    /// A search was attempted with an empty query.
    #[error("empty query")]
    EmptyQuery,

    /// The search endpoint returned no usable suggestions.
    #[error("no valid suggestions found")]
    NoSuggestions,

    /// The HTTP request failed or returned an unexpected status.
    #[error("request failed: {0}")]
    Request(String),

    /// The API answered with an error envelope.
    #[error("API error ({code}): {info}")]
    Api {
        /// Machine-readable error code, e.g. `missingtitle`.
        code: String,
        /// Human-readable description.
        info: String,
    },

    /// The API response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Result type alias for rs-wiktionary operations.
pub type Result<T> = std::result::Result<T, Error>;
