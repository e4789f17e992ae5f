//! Port traits defining external boundaries.
//!
//! The delete handler talks to the outside world through two ports: an HTTP
//! client that sends the request and a notifier that shows the reply.
//! Implementations live in `src/adapters/`.

pub mod http;
pub mod notifier;

pub use http::{HttpClient, HttpFuture, HttpRequest, HttpResponse};
pub use notifier::Notifier;

/// Error type returned by port implementations.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
