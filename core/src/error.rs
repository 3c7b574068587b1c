//! Error types for the book catalog client.
//!
//! # Design
//! Only the delete path interprets status codes, so `Rejected` is the one
//! application-level failure. Everything else is either the wire failing
//! (`Transport`) or a body that does not decode into the expected shape
//! (`Deserialization`), which is also how a 404 or 500 surfaces for list,
//! get, create, and update.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response: connection refused, DNS, I/O.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status where one was checked.
    #[error("server rejected request with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response body (HTTP {status}): {source}")]
    Deserialization {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The request payload could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Serialization(#[from] serde_json::Error),
}
