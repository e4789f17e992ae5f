//! HTTP client port for sending requests to the deletion endpoint.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use super::PortError;

/// Content type of JSON request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Boxed future type alias used by [`HttpClient`] to keep the trait dyn-compatible.
pub type HttpFuture<'a> = Pin<Box<dyn Future<Output = Result<HttpResponse, PortError>> + Send + 'a>>;

/// An outgoing POST request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    /// Path on the server, resolved against the client's base URL.
    pub path: String,
    /// Value of the `Content-Type` header.
    pub content_type: String,
    /// The already-serialized body, sent verbatim.
    pub body: String,
}

impl HttpRequest {
    /// Builds a request carrying a JSON body.
    pub fn json(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self { path: path.into(), content_type: JSON_CONTENT_TYPE.to_string(), body: body.into() }
    }
}

/// A response whose body has been read as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, unparsed.
    pub body: String,
}

impl HttpResponse {
    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends POST requests to a remote service.
pub trait HttpClient: Send + Sync {
    /// Sends the request and reads the whole response body as text.
    ///
    /// Non-2xx statuses are returned as ordinary responses.
    ///
    /// # Errors
    ///
    /// Returns an error only when no response could be obtained or its body
    /// could not be read (connection refused, DNS, reset, ...).
    fn post(&self, request: &HttpRequest) -> HttpFuture<'_>;
}
