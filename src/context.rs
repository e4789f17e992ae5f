//! Service context bundling the port trait objects.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::live::{LiveHttpClient, TerminalNotifier};
use crate::adapters::recording::RecordingHttpClient;
use crate::adapters::replaying::ReplayingHttpClient;
use crate::cassette::recorder::CassetteRecorder;
use crate::config::{Config, Transport};
use crate::ports::http::HttpClient;
use crate::ports::notifier::Notifier;

/// Bundles the ports the delete handler needs.
///
/// Constructors wire up different adapter implementations (live, recording,
/// replaying). A recording context writes its cassette in [`ServiceContext::finish`],
/// or when dropped if `finish` was never called.
pub struct ServiceContext {
    /// HTTP client for the deletion endpoint.
    pub http: Box<dyn HttpClient>,
    /// Notifier that shows the server's reply.
    pub notifier: Box<dyn Notifier>,
    /// Optional cassette recorder; written to disk on drop.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a context from explicit port implementations.
    #[must_use]
    pub fn new(http: Box<dyn HttpClient>, notifier: Box<dyn Notifier>) -> Self {
        Self { http, notifier, recorder: None }
    }

    /// Creates a live context sending requests under `config.base_url`.
    #[must_use]
    pub fn live(config: &Config) -> Self {
        Self::new(
            Box::new(LiveHttpClient::new(config.base_url.clone())),
            Box::new(TerminalNotifier::new(config.acknowledge)),
        )
    }

    /// Creates a live context that also records every exchange to `path`.
    ///
    /// The cassette is written by [`ServiceContext::finish`].
    #[must_use]
    pub fn recording(config: &Config, path: &Path) -> Self {
        let name = path
            .file_stem()
            .map_or_else(|| "songdel-session".to_string(), |s| s.to_string_lossy().into_owned());
        let recorder =
            Arc::new(Mutex::new(CassetteRecorder::new(path, name, config.base_url.as_str())));
        let live = Box::new(LiveHttpClient::new(config.base_url.clone()));

        Self {
            http: Box::new(RecordingHttpClient::new(live, Arc::clone(&recorder))),
            notifier: Box::new(TerminalNotifier::new(config.acknowledge)),
            recorder: Some(recorder),
        }
    }

    /// Creates a context whose HTTP port is served from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(config: &Config, path: &Path) -> Result<Self, String> {
        Ok(Self::new(
            Box::new(ReplayingHttpClient::from_path(path)?),
            Box::new(TerminalNotifier::new(config.acknowledge)),
        ))
    }

    /// Creates the context selected by `config.transport`.
    ///
    /// # Errors
    ///
    /// Returns an error if a replay cassette cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self, String> {
        match &config.transport {
            Transport::Live => Ok(Self::live(config)),
            Transport::Record(path) => Ok(Self::recording(config, path)),
            Transport::Replay(path) => Self::replaying(config, path),
        }
    }

    /// Writes the cassette of a recording context. Does nothing otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(mut self) -> Result<(), String> {
        match self.recorder.take() {
            Some(recorder) => save_cassette(&recorder),
            None => Ok(()),
        }
    }
}

fn save_cassette(recorder: &Mutex<CassetteRecorder>) -> Result<(), String> {
    let recorder =
        recorder.lock().map_err(|_| "Recorder lock poisoned, cassette not written".to_string())?;
    let path = recorder.save().map_err(|e| {
        format!("Failed to write cassette {}: {e}", recorder.path().display())
    })?;
    tracing::info!(path = %path.display(), "cassette written");
    Ok(())
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        if let Some(recorder) = self.recorder.take() {
            if let Err(e) = save_cassette(&recorder) {
                tracing::warn!(error = %e, "cassette not written on drop");
            }
        }
    }
}
