//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the todo does not exist" from other refusals. Refusals that carry the
//! server's `{message}` body land in `Rejected`; anything else non-2xx keeps
//! the raw status code and body in `Http`.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The title was blank after trimming; no request was built.
    #[error("Todo title cannot be empty!")]
    EmptyTitle,

    /// The server returned 404.
    #[error("{0}")]
    NotFound(String),

    /// The server refused the request and explained why.
    #[error("HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The server returned an unexpected status without a message body.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
