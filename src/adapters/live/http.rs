//! Live adapter for the `HttpClient` port using reqwest.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};

use crate::ports::http::{HttpClient, HttpFuture, HttpRequest, HttpResponse};
use crate::ports::PortError;

/// Live HTTP client that sends requests relative to a base URL.
///
/// No timeout is configured: a request that never answers stays pending.
pub struct LiveHttpClient {
    client: Client,
    base_url: Url,
}

impl LiveHttpClient {
    /// Creates a client sending requests to paths under `base_url`.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client around an already-configured reqwest client.
    #[must_use]
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// The base URL request paths are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl LiveHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, PortError> {
        // An absolute path replaces the base path, like a relative fetch in a page.
        let url = self.base_url.join(&request.path).map_err(|e| -> PortError {
            format!("Invalid request path {:?}: {e}", request.path).into()
        })?;
        tracing::debug!(%url, "sending POST");

        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, &request.content_type)
            .body(request.body)
            .send()
            .await
            .map_err(|e| -> PortError { format!("POST {url} failed: {e}").into() })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| -> PortError {
            format!("Failed to read response body from {url}: {e}").into()
        })?;
        tracing::debug!(%url, status, bytes = body.len(), "received response");

        Ok(HttpResponse { status, body })
    }
}

impl HttpClient for LiveHttpClient {
    fn post(&self, request: &HttpRequest) -> HttpFuture<'_> {
        Box::pin(self.send(request.clone()))
    }
}
