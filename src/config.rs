//! Runtime configuration resolved from flags, environment, and `.env`.

use std::path::PathBuf;

use reqwest::Url;

/// Base URL used when neither `--base-url` nor `SONGDEL_BASE_URL` is set.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "SONGDEL_BASE_URL";
/// Environment variable naming a cassette to record into.
pub const RECORD_ENV: &str = "SONGDEL_RECORD";
/// Environment variable naming a cassette to replay from.
pub const REPLAY_ENV: &str = "SONGDEL_REPLAY";

/// Where requests go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// Send requests over the network.
    Live,
    /// Send requests over the network and record them into a cassette.
    Record(PathBuf),
    /// Serve responses from a cassette; nothing is sent.
    Replay(PathBuf),
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Origin the delete path is resolved against.
    pub base_url: Url,
    /// Live, recording, or replaying transport.
    pub transport: Transport,
    /// Wait for Enter after each notification.
    pub acknowledge: bool,
}

/// Settings given on the command line, before environment fallback.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--base-url`.
    pub base_url: Option<String>,
    /// `--record`.
    pub record: Option<PathBuf>,
    /// `--replay`.
    pub replay: Option<PathBuf>,
    /// `--wait`.
    pub acknowledge: bool,
}

impl Config {
    /// Resolves configuration from the process environment, loading `.env` first.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or both record and replay are set.
    pub fn load(overrides: Overrides) -> Result<Self, String> {
        // A missing .env file is normal.
        let _ = dotenvy::dotenv();
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    /// Resolves configuration with an explicit environment lookup.
    ///
    /// Command-line values win over environment values.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or both record and replay are set.
    pub fn resolve<F>(overrides: Overrides, env: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_base = overrides
            .base_url
            .or_else(|| env(BASE_URL_ENV))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url =
            Url::parse(&raw_base).map_err(|e| format!("Invalid base URL {raw_base:?}: {e}"))?;
        if base_url.cannot_be_a_base() {
            return Err(format!("Invalid base URL {raw_base:?}: not a hierarchical URL"));
        }

        let record = overrides.record.or_else(|| env(RECORD_ENV).map(PathBuf::from));
        let replay = overrides.replay.or_else(|| env(REPLAY_ENV).map(PathBuf::from));
        let transport = match (record, replay) {
            (Some(_), Some(_)) => return Err("Cannot record and replay at the same time".into()),
            (Some(path), None) => Transport::Record(path),
            (None, Some(path)) => Transport::Replay(path),
            (None, None) => Transport::Live,
        };

        Ok(Self { base_url, transport, acknowledge: overrides.acknowledge })
    }
}
