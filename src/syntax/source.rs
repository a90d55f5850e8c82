//! Permissive decoding of unit bytes.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    /// Fallback: every byte maps to the code point of the same value.
    Latin1,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => f.write_str("utf-8"),
            Encoding::Latin1 => f.write_str("latin-1"),
        }
    }
}

/// Decoded unit text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceText {
    pub text: String,
    pub encoding: Encoding,
}

/// Decode strictly as UTF-8, falling back to Latin-1. Never fails.
///
/// A leading UTF-8 byte order mark is dropped.
pub fn decode(bytes: &[u8]) -> SourceText {
    match std::str::from_utf8(bytes) {
        Ok(text) => SourceText {
            text: text.strip_prefix('\u{feff}').unwrap_or(text).to_string(),
            encoding: Encoding::Utf8,
        },
        Err(err) => {
            tracing::debug!(
                "invalid UTF-8 at byte {}, decoding as latin-1",
                err.valid_up_to()
            );
            SourceText {
                text: bytes.iter().map(|&b| char::from(b)).collect(),
                encoding: Encoding::Latin1,
            }
        }
    }
}
