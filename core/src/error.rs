//! Error types for the account API client.
//!
//! # Design
//! Local validation failures (`InvalidEnum`, `InvalidArgument`) are raised
//! before any request leaves the process and are distinct from `Api`, which
//! carries a message produced by the remote service. Response-side contract
//! violations (wrong record type, missing version) are deliberately not
//! represented here — they panic in the envelope mapper, because a server
//! that breaks the resource contract leaves nothing meaningful to return.

use thiserror::Error;

/// Errors returned by `AccountClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A decoded text value does not match any member of a controlled or
    /// external vocabulary.
    #[error("invalid enum value '{value}'")]
    InvalidEnum { value: String },

    /// A caller-supplied pagination parameter is numeric but out of the
    /// accepted range. Raised before any network call; names the offending
    /// field and value.
    #[error("invalid argument: {argument}")]
    InvalidArgument { argument: String },

    /// The server answered with a non-2xx status and an `error_message` body.
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The HTTP round trip itself failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected shape.
    /// Vocabulary failures during envelope decoding surface here with the
    /// offending value named in the message.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
