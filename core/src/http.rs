//! HTTP types and the transport collaborator contract.
//!
//! # Design
//! Requests and responses are plain data: the client builds `HttpRequest`
//! values and parses `HttpResponse` values without touching the network,
//! and a `Transport` implementation executes the round trip in between.
//! This keeps request construction and response mapping deterministic and
//! testable, and lets any conforming HTTP stack — thread-pooled, async
//! bridge, single-threaded — stand in for the default one.
//!
//! All fields use owned types (`String`, `Vec`) so values carry no
//! lifetime concerns across the boundary.

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// An HTTP request described as plain data. `path` is the absolute URL.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data, handed to the `parse_*`
/// methods for status interpretation and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The narrow transport collaborator: one blocking round trip.
///
/// Implementations must return non-2xx responses as data rather than
/// errors — status interpretation belongs to the client — and are
/// responsible for their own safety under concurrent use, connection
/// pooling and deadlines. `ApiError::Transport` is reserved for failures
/// of the round trip itself.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}
