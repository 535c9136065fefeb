//! Pipeline facade: the only externally-callable surface of the codec.
//!
//! [`encode`] composes the stages in order (frequency model, tree, code
//! table, bit packing, XOR, transport encoding) and [`decode`] runs them in
//! reverse. Everything an external layer (API handler, task worker,
//! websocket session) needs to ship is the [`Envelope`]: plain serializable
//! data with no binary framing beyond the base64 payload string.
//!
//! Decoding requires all four envelope fields together; the code table is
//! not derivable from the ciphertext (this is not a canonical-code scheme).

use crate::error::{Error, Result};
use crate::huffman::{self, CodeTable, FrequencyTable};
use crate::{bitio, cipher, transport};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Everything needed to reconstruct the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Transport-encoded ciphertext.
    pub encoded_data: String,

    /// The cipher key the payload was XORed with.
    pub key: String,

    /// Symbol-to-bitstring code table used for packing.
    pub huffman_codes: CodeTable,

    /// Number of filler bits (0-7) at the end of the packed payload.
    pub padding: u8,
}

impl Envelope {
    /// Decode this envelope with its own embedded key.
    pub fn open(&self) -> Result<String> {
        decode(&self.encoded_data, &self.key, &self.huffman_codes, self.padding)
    }
}

/// Compress and obfuscate `text` with `key`.
///
/// Pipeline: frequency model -> Huffman tree -> code table -> bit packing
/// -> XOR -> base64.
///
/// # Errors
/// - `Error::EmptyInput` if `text` is empty
/// - `Error::EmptyKey` if `key` is empty
pub fn encode(text: &str, key: &str) -> Result<Envelope> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }

    let freqs = FrequencyTable::from_text(text);
    let tree = huffman::build_tree(&freqs)?;
    let huffman_codes = huffman::generate_codes(&tree);
    trace!(distinct_symbols = huffman_codes.len(), "built code table");

    let (packed, padding) = bitio::pack(text, &huffman_codes)?;
    let ciphered = cipher::xor_cipher(&packed, key.as_bytes())?;
    let encoded_data = transport::encode(&ciphered);

    debug!(
        input_bytes = text.len(),
        packed_bytes = packed.len(),
        padding,
        ratio = packed.len() as f64 / text.len() as f64,
        "encoded text"
    );

    Ok(Envelope {
        encoded_data,
        key: key.to_string(),
        huffman_codes,
        padding,
    })
}

/// Reconstruct the original text from envelope fields.
///
/// Pipeline: base64 decode -> XOR -> greedy prefix unpacking. The table is
/// validated up front so a hand-built or tampered table fails cleanly
/// instead of making the greedy matcher misbehave.
///
/// # Errors
/// - `Error::EmptyKey` if `key` is empty
/// - `Error::InconsistentTable` if the table fails validation
/// - `Error::MalformedEnvelope` if the payload, padding, or bit stream is bad
pub fn decode(
    encoded_data: &str,
    key: &str,
    huffman_codes: &CodeTable,
    padding: u8,
) -> Result<String> {
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }
    huffman::validate_code_table(huffman_codes)?;

    let ciphered = transport::decode(encoded_data)?;
    let packed = cipher::xor_cipher(&ciphered, key.as_bytes())?;
    let text = bitio::unpack(&packed, padding, huffman_codes)?;

    debug!(
        payload_bytes = packed.len(),
        output_bytes = text.len(),
        "decoded envelope"
    );

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_rejects_empty_text() {
        assert!(matches!(encode("", "key"), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_encode_rejects_empty_key() {
        assert!(matches!(encode("text", ""), Err(Error::EmptyKey)));
    }

    #[test]
    fn test_decode_rejects_empty_key() {
        let envelope = encode("text", "key").unwrap();
        let result = decode(&envelope.encoded_data, "", &envelope.huffman_codes, envelope.padding);
        assert!(matches!(result, Err(Error::EmptyKey)));
    }

    #[test]
    fn test_validation_order_text_before_key() {
        // Both empty: the input check fires first.
        assert!(matches!(encode("", ""), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_open_uses_embedded_key() {
        let envelope = encode("open sesame", "k3y").unwrap();
        assert_eq!(envelope.open().unwrap(), "open sesame");
    }

    #[test]
    fn test_envelope_carries_key_verbatim() {
        let envelope = encode("text", "my-key").unwrap();
        assert_eq!(envelope.key, "my-key");
    }

    #[test]
    fn test_decode_rejects_bad_padding() {
        let envelope = encode("hello world", "k").unwrap();
        let result = decode(&envelope.encoded_data, "k", &envelope.huffman_codes, 8);
        assert!(matches!(result, Err(Error::MalformedEnvelope(_))));
    }
}
