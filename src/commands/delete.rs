//! `songdel delete` command.

use std::sync::Arc;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::handler::song_delete_all;
use crate::trigger::TriggerElement;

/// Execute the `delete` command.
///
/// Each identifier becomes one trigger; all triggers run concurrently on a
/// single-threaded runtime. Replies are shown as they arrive.
///
/// # Errors
///
/// Returns an error string if the runtime cannot start, the context cannot be
/// built, any trigger failed locally (decode, transport, notification), or a
/// requested cassette could not be written.
pub fn run(config: &Config, ids: &[String]) -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;

    let ctx = Arc::new(ServiceContext::from_config(config)?);
    let elements = ids.iter().map(|id| TriggerElement::with_id(id.as_str())).collect();

    let results = runtime.block_on(song_delete_all(Arc::clone(&ctx), elements));

    let mut failures: Vec<String> =
        results.into_iter().filter_map(Result::err).map(|e| e.to_string()).collect();

    let finished = Arc::try_unwrap(ctx)
        .map_err(|_| "Service context still shared after all triggers finished".to_string())
        .and_then(ServiceContext::finish);
    if let Err(e) = finished {
        failures.push(e);
    }
    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures.join("\n"))
    }
}
