//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;

/// Top-level CLI parser for `songdel`.
#[derive(Debug, Parser)]
#[command(name = "songdel", version, about = "Delete songs by identifier and show the server's reply")]
pub struct Cli {
    /// Settings shared by every command.
    #[command(flatten)]
    pub global: GlobalArgs,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Flags accepted before the subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Server origin the delete path is resolved against [env: SONGDEL_BASE_URL].
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,
    /// Record every exchange into this cassette file [env: SONGDEL_RECORD].
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "replay")]
    pub record: Option<PathBuf>,
    /// Serve replies from this cassette file instead of the network [env: SONGDEL_REPLAY].
    #[arg(long, global = true, value_name = "PATH")]
    pub replay: Option<PathBuf>,
    /// Wait for Enter after each reply is shown.
    #[arg(long, global = true)]
    pub wait: bool,
}

impl GlobalArgs {
    /// Converts the flags into configuration overrides.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            record: self.record.clone(),
            replay: self.replay.clone(),
            acknowledge: self.wait,
        }
    }
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a delete request per identifier and show each reply.
    Delete {
        /// Percent-encoded identifiers, as carried in a `data-id` attribute.
        #[arg(value_name = "ENCODED_ID", required = true)]
        ids: Vec<String>,
    },
    /// Percent-encode an identifier for use in a `data-id` attribute.
    Encode {
        /// The identifier in plain form.
        id: String,
    },
    /// Decode a percent-encoded identifier.
    Decode {
        /// The encoded identifier.
        #[arg(value_name = "ENCODED_ID")]
        id: String,
    },
}
