//! The delete trigger handler.
//!
//! One trigger is one linear exchange: decode the element's `data-id`, POST
//! `{"id": ...}` to the deletion endpoint, read the reply as text, and show
//! it to the user. The reply is shown whatever the status code; the server's
//! text is the outcome message.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinSet;

use crate::context::ServiceContext;
use crate::error::DeleteError;
use crate::identifier::Identifier;
use crate::ports::http::HttpRequest;
use crate::trigger::{TriggerElement, ID_ATTRIBUTE};

/// Path of the deletion endpoint.
pub const DELETE_PATH: &str = "/api/delete";

/// JSON body of a delete request.
#[derive(Debug, Serialize)]
struct DeletePayload<'a> {
    id: &'a str,
}

/// What one completed trigger produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// The decoded identifier that was sent.
    pub id: String,
    /// HTTP status of the reply.
    pub status: u16,
    /// Reply text, as shown to the user.
    pub message: String,
}

/// Decodes the element's identifier.
///
/// # Errors
///
/// Returns [`DeleteError::MissingAttribute`] or [`DeleteError::Decode`].
pub fn decode_identifier(element: &TriggerElement) -> Result<Identifier, DeleteError> {
    let raw = element.data(ID_ATTRIBUTE).ok_or(DeleteError::MissingAttribute(ID_ATTRIBUTE))?;
    Identifier::decode(raw).map_err(|source| DeleteError::Decode { raw: raw.to_string(), source })
}

/// Builds the request for a decoded identifier.
///
/// # Errors
///
/// Returns [`DeleteError::Serialize`] if the body cannot be serialized.
pub fn request_for(id: &Identifier) -> Result<HttpRequest, DeleteError> {
    let body = serde_json::to_string(&DeletePayload { id: id.as_str() })?;
    Ok(HttpRequest::json(DELETE_PATH, body))
}

/// Decodes the element's identifier and builds the delete request for it.
///
/// Nothing is sent; a malformed identifier fails here.
///
/// # Errors
///
/// Returns an error if the element has no `data-id` or it cannot be decoded.
pub fn build_request(element: &TriggerElement) -> Result<HttpRequest, DeleteError> {
    request_for(&decode_identifier(element)?)
}

/// Runs one delete trigger against the ports in `ctx`.
///
/// Any reply, including a non-2xx one, is shown through the notifier
/// before this returns.
///
/// # Errors
///
/// Returns an error if decoding fails (no request is sent), if no reply
/// arrives (nothing is shown), or if the notifier fails.
pub async fn song_delete(
    ctx: &ServiceContext,
    element: &TriggerElement,
) -> Result<DeleteOutcome, DeleteError> {
    let id = decode_identifier(element)?;
    let request = request_for(&id)?;
    tracing::debug!(id = %id, "sending delete request");

    let response = ctx.http.post(&request).await.map_err(|source| {
        tracing::error!(id = %id, error = %source, "delete request failed");
        DeleteError::Transport { id: id.to_string(), source }
    })?;

    if response.is_success() {
        tracing::info!(id = %id, status = response.status, "delete request answered");
    } else {
        tracing::warn!(
            id = %id,
            status = response.status,
            "delete request answered with error status"
        );
    }

    ctx.notifier.notify(&response.body).map_err(DeleteError::Notify)?;

    Ok(DeleteOutcome { id: id.into_string(), status: response.status, message: response.body })
}

/// Fires one trigger per element without waiting between them.
///
/// Every request is in flight at once; results come back in completion
/// order, not element order. One failing trigger does not affect the others.
pub async fn song_delete_all(
    ctx: Arc<ServiceContext>,
    elements: Vec<TriggerElement>,
) -> Vec<Result<DeleteOutcome, DeleteError>> {
    let mut set = JoinSet::new();
    for element in elements {
        let ctx = Arc::clone(&ctx);
        set.spawn(async move { song_delete(&ctx, &element).await });
    }

    let mut results = Vec::with_capacity(set.len());
    while let Some(joined) = set.join_next().await {
        results.push(joined.unwrap_or_else(|e| Err(DeleteError::Aborted(e.to_string()))));
    }
    results
}
