//! Command dispatch and handlers.

pub mod codec;
pub mod delete;

use crate::cli::{Command, GlobalArgs};
use crate::config::Config;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if configuration is invalid or the command fails.
pub fn dispatch(global: &GlobalArgs, command: &Command) -> Result<(), String> {
    match command {
        Command::Delete { ids } => delete::run(&Config::load(global.overrides())?, ids),
        Command::Encode { id } => {
            println!("{}", codec::encode(id));
            Ok(())
        }
        Command::Decode { id } => {
            println!("{}", codec::decode(id)?);
            Ok(())
        }
    }
}
