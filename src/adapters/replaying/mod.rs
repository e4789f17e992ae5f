//! Replaying adapters that serve recorded interactions.

pub mod http;

pub use http::ReplayingHttpClient;

use serde::de::DeserializeOwned;

use crate::ports::PortError;

/// Turn a recorded `{"Ok": v}` / `{"Err": msg}` output back into a `Result`.
///
/// Mirror of `recording::record_result`.
pub(crate) fn replay_result<T>(output: serde_json::Value) -> Result<T, PortError>
where
    T: DeserializeOwned,
{
    if let Some(ok) = output.get("Ok") {
        return serde_json::from_value(ok.clone())
            .map_err(|e| format!("Malformed recorded Ok value: {e}").into());
    }
    if let Some(err) = output.get("Err") {
        let message = err.as_str().map_or_else(|| err.to_string(), str::to_owned);
        return Err(message.into());
    }
    Err(format!("Recorded output is neither Ok nor Err: {output}").into())
}
