//! Transport-safe text encoding at the pipeline boundary.
//!
//! The encrypted payload is arbitrary bytes; base64 (standard alphabet,
//! with padding) makes it printable so it can travel inside JSON-like
//! payloads. Used only at the outermost pipeline stage.

use crate::error::{EnvelopeError, Result};
use base64::{engine::general_purpose::STANDARD, Engine};

/// Encode a byte buffer as base64 text.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode base64 text back into bytes.
///
/// # Errors
/// Returns `EnvelopeError::Transport` (as `Error::MalformedEnvelope`) if
/// the input is not valid base64.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text).map_err(EnvelopeError::Transport)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_round_trip() {
        let data = vec![0u8, 1, 2, 0xFE, 0xFF, 0x80];
        let encoded = encode(&data);

        assert!(encoded.is_ascii());
        assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_empty_buffer() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_known_value() {
        assert_eq!(encode(b"hello"), "aGVsbG8=");
        assert_eq!(decode("aGVsbG8=").unwrap(), b"hello".to_vec());
    }

    #[test]
    fn test_invalid_input_rejected() {
        let result = decode("not valid base64!!!");
        assert!(matches!(
            result,
            Err(Error::MalformedEnvelope(EnvelopeError::Transport(_)))
        ));
    }
}
