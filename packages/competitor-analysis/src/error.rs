//! Typed errors for the analysis library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can branch
//! on the failure kind.

use thiserror::Error;

/// Errors surfaced by an analysis run.
///
/// Transport failures and classifier failures never appear here: the former
/// are absorbed into empty results, the latter are reported through
/// [`crate::types::AnalysisReport::ClassifierUnavailable`].
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The analysis target URL does not parse or has no host
    #[error("base URL has no host: {0}")]
    InvalidBaseUrl(String),

    /// Cache file could not be read, written, or decoded
    #[error("cache error: {0}")]
    Cache(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Embedding call failed while building the index; no partial index
    /// is published
    #[error("indexing failed: {0}")]
    Indexing(#[from] ModelError),
}

/// Failure fetching a single page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// Transport-level failure (connection, DNS, timeout)
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    /// Non-success status code
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Failure from a remote model call (chat, completion, or embedding).
#[derive(Debug, Error)]
#[error("model call failed: {0}")]
pub struct ModelError(pub String);

impl From<openai_client::OpenAIError> for ModelError {
    fn from(e: openai_client::OpenAIError) -> Self {
        ModelError(e.to_string())
    }
}
