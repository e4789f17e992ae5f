//! Errors raised by the delete handler before or around the request.

use thiserror::Error;

use crate::identifier::DecodeError;
use crate::ports::PortError;

/// A local failure of one delete trigger.
///
/// Server-side failures are not represented here: whatever text the server
/// answers with is shown to the user, regardless of status.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// The trigger element has no `data-id` attribute.
    #[error("trigger element has no data-{0} attribute")]
    MissingAttribute(&'static str),
    /// The identifier attribute could not be percent-decoded.
    #[error("cannot decode identifier {raw:?}: {source}")]
    Decode {
        /// The attribute value as found on the element.
        raw: String,
        /// Why decoding failed.
        #[source]
        source: DecodeError,
    },
    /// The request body could not be serialized.
    #[error("cannot serialize delete request: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The request never produced a response (connection, DNS, body read).
    #[error("delete request for {id:?} failed: {source}")]
    Transport {
        /// The decoded identifier.
        id: String,
        /// Underlying transport error.
        source: PortError,
    },
    /// The notification could not be shown.
    #[error("cannot show notification: {0}")]
    Notify(PortError),
    /// The spawned trigger task panicked or was cancelled.
    #[error("delete task aborted: {0}")]
    Aborted(String),
}
