//! Replaying adapter for the `HttpClient` port.

use std::path::Path;
use std::sync::Mutex;

use super::replay_result;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::http::{HttpClient, HttpFuture, HttpRequest, HttpResponse};
use crate::ports::PortError;

/// Serves recorded HTTP exchanges from a cassette without touching the network.
pub struct ReplayingHttpClient {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingHttpClient {
    /// Create a replaying client backed by the given replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    /// Load a cassette file and replay its HTTP interactions.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self::new(CassetteReplayer::new(&cassette)))
    }

    fn next_output(&self, request: &HttpRequest) -> Result<serde_json::Value, PortError> {
        let input = serde_json::to_value(request)?;
        let mut replayer =
            self.replayer.lock().map_err(|_| -> PortError { "replayer lock poisoned".into() })?;
        let interaction = replayer.next_interaction("http", "post", &input)?;
        Ok(interaction.output)
    }
}

impl HttpClient for ReplayingHttpClient {
    fn post(&self, request: &HttpRequest) -> HttpFuture<'_> {
        // Claim the interaction now so replay order follows call order.
        let output = self.next_output(request);
        Box::pin(async move { replay_result::<HttpResponse>(output?) })
    }
}
