//! Error types for the result-grid client.

use thiserror::Error;

use crate::models::ExecutionResponse;

/// Result type for result-grid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while executing queries and paging their results.
#[derive(Error, Debug)]
pub enum Error {
    /// The result URI or execution declares an unsupported number of dimensions.
    #[error("{0} dimensions are not allowed, only 1 or 2 dimensions are supported")]
    InvalidDimensions(i64),

    /// The result URI carries no usable `dimensions` query parameter.
    #[error("result uri is missing a numeric dimensions parameter: {uri}")]
    MissingDimensions { uri: String },

    /// The server returned a page with no rows or columns while more data
    /// was still expected; re-requesting the same window would never finish.
    #[error("server returned an empty page at offset {offset:?} before reaching total {total:?}")]
    StalledPaging { offset: Vec<i64>, total: Vec<i64> },

    /// The API answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never produced an HTTP response.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// A response body could not be decoded.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Fetching the execution result failed after the execution itself was
    /// accepted; the already-known response is kept for diagnostics.
    #[error("execution result fetch failed: {source}")]
    ResultFetch {
        response: Box<ExecutionResponse>,
        #[source]
        source: Box<Error>,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
