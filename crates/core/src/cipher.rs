//! Repeating-key XOR stream cipher.
//!
//! Every byte is XORed with `key[i % key.len()]`, so applying the same key
//! twice returns the original buffer. This is obfuscation, not security:
//! there is no authentication and no integrity guarantee, and the effective
//! strength is bounded by the key length relative to the payload. That
//! limitation is a deliberate scope boundary of the codec.

use crate::error::{Error, Result};

/// XOR `data` against a cyclically repeated `key`.
///
/// Involutive: `xor_cipher(&xor_cipher(data, key)?, key)? == data`.
///
/// # Errors
/// Returns `Error::EmptyKey` if the key is empty; the cycle index would be
/// undefined, so this is rejected before the loop runs.
pub fn xor_cipher(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }

    Ok(data
        .iter()
        .enumerate()
        .map(|(i, &byte)| byte ^ key[i % key.len()])
        .collect())
}
