//! Error types for the codec.
//!
//! All operations return structured errors rather than panicking.
//! Every failure is synchronous and local: a call either fully succeeds or
//! fully fails with no partial state left behind.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// The variants are the failure kinds callers must tell apart:
/// - Empty input / empty key: rejected before the pipeline runs
/// - Malformed envelope: the decode-side payload cannot be consumed
/// - Inconsistent table: the decode-side code table is unusable
#[derive(Debug, Error)]
pub enum Error {
    /// Input text is empty; there is nothing to compress. The caller
    /// decides what an empty message means, not the codec.
    #[error("empty input: nothing to encode")]
    EmptyInput,

    /// Cipher key is empty; a repeating-key XOR has no defined cycle.
    #[error("empty cipher key")]
    EmptyKey,

    /// Decode-only: transport decoding failed, the padding count is out of
    /// range, or the bit stream cannot be fully consumed against the table.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(#[from] EnvelopeError),

    /// Decode-only: the supplied code table is not usable for greedy
    /// prefix matching (empty, non-binary, duplicated, or not prefix-free).
    #[error("inconsistent code table: {0}")]
    InconsistentTable(#[from] TableError),
}

/// Envelope payload errors surfaced while decoding.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The transport-encoded payload is not valid base64.
    #[error("transport decode failed: {0}")]
    Transport(#[from] base64::DecodeError),

    /// Padding count is outside the valid 0-7 range.
    #[error("padding {0} is outside 0-7")]
    InvalidPadding(u8),

    /// Padding claims more bits than the payload contains.
    #[error("padding {padding} exceeds payload of {available} bits")]
    PaddingExceedsPayload { padding: u8, available: usize },

    /// A bit prefix grew past the longest code without matching any entry.
    #[error("no code matches bit stream at bit {position}")]
    UnmatchedCode { position: usize },

    /// Bits remained after the last completely matched symbol.
    #[error("{count} dangling bits after final symbol")]
    DanglingBits { count: usize },
}

/// Code table validation errors.
#[derive(Debug, Error)]
pub enum TableError {
    /// The table has no entries.
    #[error("code table is empty")]
    EmptyTable,

    /// A symbol is mapped to an empty code.
    #[error("empty code for symbol {symbol:?}")]
    EmptyCode { symbol: char },

    /// A code contains characters other than '0' and '1'.
    #[error("code for symbol {symbol:?} contains non-binary character {found:?}")]
    NonBinaryCode { symbol: char, found: char },

    /// Two symbols share the same code.
    #[error("symbols {first:?} and {second:?} share code {code:?}")]
    DuplicateCode {
        first: char,
        second: char,
        code: String,
    },

    /// One code is a prefix of another, making greedy decoding ambiguous.
    #[error("code {prefix:?} ({prefix_symbol:?}) is a prefix of {code:?} ({symbol:?})")]
    NotPrefixFree {
        prefix_symbol: char,
        prefix: String,
        symbol: char,
        code: String,
    },

    /// Encode-only: the text contains a symbol the table has no code for.
    #[error("no code for symbol {symbol:?}")]
    MissingSymbol { symbol: char },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_error_converts_to_top_level() {
        let err: Error = EnvelopeError::InvalidPadding(9).into();
        assert!(matches!(err, Error::MalformedEnvelope(_)));
    }

    #[test]
    fn test_table_error_converts_to_top_level() {
        let err: Error = TableError::EmptyTable.into();
        assert!(matches!(err, Error::InconsistentTable(_)));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        assert_eq!(
            Error::EmptyInput.to_string(),
            "empty input: nothing to encode"
        );
        assert_eq!(Error::EmptyKey.to_string(), "empty cipher key");

        let err = Error::MalformedEnvelope(EnvelopeError::DanglingBits { count: 3 });
        assert!(err.to_string().contains("3 dangling bits"));
    }
}
