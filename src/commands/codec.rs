//! `songdel encode` and `songdel decode`.

use crate::identifier::Identifier;

/// Percent-encodes a plain identifier.
#[must_use]
pub fn encode(id: &str) -> String {
    Identifier::new(id).encode()
}

/// Decodes a percent-encoded identifier.
///
/// # Errors
///
/// Returns an error string if the encoding is malformed.
pub fn decode(encoded: &str) -> Result<String, String> {
    Identifier::decode(encoded)
        .map(Identifier::into_string)
        .map_err(|e| format!("Cannot decode {encoded:?}: {e}"))
}
