//! Percent-encoded identifiers carried on trigger elements.
//!
//! Decoding follows URI component rules: every `%` must start a two-digit
//! hex escape, the decoded bytes must be UTF-8, and `+` stays a literal plus.

use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

/// Bytes left unescaped when encoding a URI component.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Reasons an encoded identifier cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A `%` appears with fewer than two characters after it.
    #[error("malformed percent-encoding: truncated escape at byte {position}")]
    TruncatedEscape {
        /// Byte offset of the `%`.
        position: usize,
    },
    /// A `%` is followed by something other than two hex digits.
    #[error("malformed percent-encoding: invalid escape {sequence:?} at byte {position}")]
    InvalidEscape {
        /// Byte offset of the `%`.
        position: usize,
        /// The offending three-character sequence.
        sequence: String,
    },
    /// The escapes decode to bytes that are not valid UTF-8.
    #[error("malformed percent-encoding: escapes do not form valid UTF-8")]
    InvalidUtf8,
}

/// A decoded identifier naming the resource to delete.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Wraps an already-decoded identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Decodes a percent-encoded identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when an escape is truncated or not hex, or
    /// when the decoded bytes are not UTF-8.
    pub fn decode(encoded: &str) -> Result<Self, DecodeError> {
        validate_escapes(encoded)?;
        let decoded =
            percent_decode_str(encoded).decode_utf8().map_err(|_| DecodeError::InvalidUtf8)?;
        Ok(Self(decoded.into_owned()))
    }

    /// Percent-encodes the identifier with URI component rules.
    #[must_use]
    pub fn encode(&self) -> String {
        utf8_percent_encode(&self.0, COMPONENT).to_string()
    }

    /// Returns the decoded identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the decoded string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// percent_decode_str passes bad escapes through untouched, so check first.
fn validate_escapes(encoded: &str) -> Result<(), DecodeError> {
    let bytes = encoded.as_bytes();
    let mut position = 0;
    while position < bytes.len() {
        if bytes[position] != b'%' {
            position += 1;
            continue;
        }
        let Some(pair) = bytes.get(position + 1..position + 3) else {
            return Err(DecodeError::TruncatedEscape { position });
        };
        if !pair.iter().all(u8::is_ascii_hexdigit) {
            let sequence = String::from_utf8_lossy(&bytes[position..position + 3]).into_owned();
            return Err(DecodeError::InvalidEscape { position, sequence });
        }
        position += 3;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_space_escape() {
        let id = Identifier::decode("a%20b").unwrap();
        assert_eq!(id.as_str(), "a b");
    }

    #[test]
    fn decodes_multibyte_utf8() {
        let id = Identifier::decode("%E5%A4%AA%E9%BC%93").unwrap();
        assert_eq!(id.as_str(), "太鼓");
    }

    #[test]
    fn plus_is_literal() {
        let id = Identifier::decode("a+b").unwrap();
        assert_eq!(id.as_str(), "a+b");
    }

    #[test]
    fn lowercase_hex_is_accepted() {
        let id = Identifier::decode("%2f").unwrap();
        assert_eq!(id.as_str(), "/");
    }

    #[test]
    fn canonical_encodings_round_trip() {
        for encoded in [
            "",
            "1",
            "a%20b",
            "song-01_(remix)",
            "%E5%A4%AA%E9%BC%93%E3%81%AE%E9%81%94%E4%BA%BA",
            "100%25",
            "a%2Bb%26c%3Dd",
            "~user!*'",
        ] {
            let decoded = Identifier::decode(encoded).unwrap();
            assert_eq!(decoded.encode(), encoded, "round trip of {encoded:?}");
        }
    }

    #[test]
    fn every_char_round_trips_through_its_encoding() {
        let ranges = [
            0x00..0x80,       // ASCII, controls included
            0x80..0x250,      // Latin-1 and Latin Extended
            0x3040..0x3100,   // hiragana, katakana
            0x4E00..0x4F00,   // CJK ideographs
            0xFF00..0xFFF0,   // fullwidth forms
            0x1F300..0x1F700, // emoji (four-byte UTF-8)
        ];
        for c in ranges.into_iter().flatten().filter_map(char::from_u32) {
            let plain = c.to_string();
            let encoded = Identifier::new(plain.as_str()).encode();
            let decoded = Identifier::decode(&encoded)
                .unwrap_or_else(|e| panic!("decode of {encoded:?} for {c:?} failed: {e}"));
            assert_eq!(decoded.as_str(), plain, "decoded value of {encoded:?}");
            assert_eq!(decoded.encode(), encoded, "re-encoding of {c:?}");
        }
    }

    #[test]
    fn encode_escapes_reserved_characters() {
        let id = Identifier::new("a b/c?d");
        assert_eq!(id.encode(), "a%20b%2Fc%3Fd");
    }

    #[test]
    fn truncated_escape_is_rejected() {
        assert_eq!(Identifier::decode("abc%2"), Err(DecodeError::TruncatedEscape { position: 3 }));
        assert_eq!(Identifier::decode("%"), Err(DecodeError::TruncatedEscape { position: 0 }));
        assert_eq!(
            Identifier::decode("%E0%A4%A"),
            Err(DecodeError::TruncatedEscape { position: 6 })
        );
    }

    #[test]
    fn non_hex_escape_is_rejected() {
        let err = Identifier::decode("a%zzb").unwrap_err();
        assert_eq!(err, DecodeError::InvalidEscape { position: 1, sequence: "%zz".into() });
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        assert_eq!(Identifier::decode("%FF"), Err(DecodeError::InvalidUtf8));
        assert_eq!(Identifier::decode("%E5%A4"), Err(DecodeError::InvalidUtf8));
    }

    #[test]
    fn error_messages_mention_malformed_encoding() {
        let err = Identifier::decode("%zz").unwrap_err();
        assert!(err.to_string().contains("malformed percent-encoding"));
    }
}
