//! Bit-level I/O and code packing/unpacking.
//!
//! `BitWriter` and `BitReader` operate MSB-first, which is standard for
//! Huffman bit streams. On top of them sit [`pack`] and [`unpack`], which
//! translate between text and a byte-aligned buffer using a code table.
//!
//! # Padding Rules
//!
//! A packed bit stream is right-padded with zero bits to the next byte
//! boundary. The number of padding bits (0-7) is returned by the writer and
//! must be carried alongside the bytes: the reader needs it to know where
//! real data ends, since padding is indistinguishable from data.
//!
//! # Example
//! ```
//! use huffcrypt_core::bitio::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.push_code("101");
//! writer.push_code("11");
//! // Bits 10111 -> padded to 10111000, 3 padding bits
//!
//! let (bytes, padding) = writer.finish();
//! assert_eq!(bytes, vec![0b1011_1000]);
//! assert_eq!(padding, 3);
//!
//! let mut reader = BitReader::new(&bytes, padding).unwrap();
//! assert_eq!(reader.next_bit(), Some(true));
//! assert_eq!(reader.bits_remaining(), 4);
//! ```

use crate::error::{EnvelopeError, Result, TableError};
use crate::huffman::CodeTable;
use std::collections::HashMap;

/// Accumulates bits MSB-first into a byte buffer.
///
/// # Invariants
/// - `bit_count` is always < 8; a full accumulator is flushed immediately
/// - `bit_buffer` holds the pending bits in its low `bit_count` positions
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    /// Completed bytes
    bytes: Vec<u8>,
    /// Pending bits, low-aligned until flushed
    bit_buffer: u8,
    /// Number of pending bits (0-7)
    bit_count: u8,
}

impl BitWriter {
    /// Create a new BitWriter with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single bit.
    pub fn push_bit(&mut self, bit: bool) {
        self.bit_buffer = (self.bit_buffer << 1) | bit as u8;
        self.bit_count += 1;

        if self.bit_count == 8 {
            self.bytes.push(self.bit_buffer);
            self.bit_buffer = 0;
            self.bit_count = 0;
        }
    }

    /// Append a code string, one bit per character.
    ///
    /// Any character other than `'0'` is treated as a one bit; callers are
    /// expected to pass validated binary code strings.
    pub fn push_code(&mut self, code: &str) {
        for c in code.chars() {
            self.push_bit(c != '0');
        }
    }

    /// Total number of bits appended so far.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.bit_count as usize
    }

    /// Zero-pad the final partial byte and return `(bytes, padding)`.
    ///
    /// `padding` is the number of filler bits added (0-7); it is 0 when the
    /// stream was already byte-aligned. Consumes the writer.
    pub fn finish(mut self) -> (Vec<u8>, u8) {
        if self.bit_count == 0 {
            return (self.bytes, 0);
        }
        let padding = 8 - self.bit_count;
        self.bytes.push(self.bit_buffer << padding);
        (self.bytes, padding)
    }
}

/// Reads bits MSB-first from a byte buffer, stopping before the padding.
///
/// # Invariants
/// - `position` never exceeds `limit`
/// - `limit` is the number of data bits: `data.len() * 8 - padding`
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Source data
    data: &'a [u8],
    /// Current bit position (0 = MSB of first byte)
    position: usize,
    /// First padding bit position; reads stop here
    limit: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `data`, excluding `padding` trailing filler bits.
    ///
    /// # Errors
    /// - `EnvelopeError::InvalidPadding` if `padding` > 7
    /// - `EnvelopeError::PaddingExceedsPayload` if `padding` is larger than
    ///   the entire bit stream
    pub fn new(data: &'a [u8], padding: u8) -> Result<Self> {
        if padding > 7 {
            return Err(EnvelopeError::InvalidPadding(padding).into());
        }

        let total_bits = data.len() * 8;
        if padding as usize > total_bits {
            return Err(EnvelopeError::PaddingExceedsPayload {
                padding,
                available: total_bits,
            }
            .into());
        }

        Ok(Self {
            data,
            position: 0,
            limit: total_bits - padding as usize,
        })
    }

    /// Read the next data bit, or `None` once all data bits are consumed.
    pub fn next_bit(&mut self) -> Option<bool> {
        if self.position >= self.limit {
            return None;
        }

        let byte = self.data[self.position / 8];
        let bit = (byte >> (7 - self.position % 8)) & 1 == 1;
        self.position += 1;
        Some(bit)
    }

    /// Number of data bits not yet read.
    pub fn bits_remaining(&self) -> usize {
        self.limit - self.position
    }

    /// Current bit position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True once every data bit has been read.
    pub fn is_empty(&self) -> bool {
        self.position >= self.limit
    }
}

/// Pack text into a byte buffer by concatenating each symbol's code.
///
/// Codes are emitted in input-text order and the final byte is zero-padded;
/// the returned padding count must travel with the bytes.
///
/// # Errors
/// Returns `TableError::MissingSymbol` if the text contains a symbol the
/// table has no code for.
pub fn pack(text: &str, table: &CodeTable) -> Result<(Vec<u8>, u8)> {
    let mut writer = BitWriter::new();

    for symbol in text.chars() {
        let code = table
            .get(&symbol)
            .ok_or(TableError::MissingSymbol { symbol })?;
        writer.push_code(code);
    }

    Ok(writer.finish())
}

/// Unpack a byte buffer back into text via greedy prefix matching.
///
/// Grows a bit prefix one bit at a time and emits a symbol whenever the
/// prefix equals a code. Prefix-freedom of the table guarantees this is
/// unambiguous; [`crate::huffman::validate_code_table`] is expected to have
/// run on untrusted tables first.
///
/// # Errors
/// - `EnvelopeError::InvalidPadding` / `PaddingExceedsPayload` from the reader
/// - `EnvelopeError::UnmatchedCode` if the prefix grows past the longest
///   code without matching (table mismatch or corrupted payload)
/// - `EnvelopeError::DanglingBits` if data bits remain after the last
///   complete symbol
pub fn unpack(bytes: &[u8], padding: u8, table: &CodeTable) -> Result<String> {
    let reverse: HashMap<&str, char> = table.iter().map(|(&s, c)| (c.as_str(), s)).collect();
    let longest = table.values().map(String::len).max().unwrap_or(0);

    let mut reader = BitReader::new(bytes, padding)?;
    let mut text = String::new();
    let mut prefix = String::new();

    while let Some(bit) = reader.next_bit() {
        prefix.push(if bit { '1' } else { '0' });

        if let Some(&symbol) = reverse.get(prefix.as_str()) {
            text.push(symbol);
            prefix.clear();
        } else if prefix.len() >= longest {
            // No code is longer than `longest`, so this prefix can never
            // match; fail instead of silently dropping bits.
            return Err(EnvelopeError::UnmatchedCode {
                position: reader.position() - prefix.len(),
            }
            .into());
        }
    }

    if !prefix.is_empty() {
        return Err(EnvelopeError::DanglingBits {
            count: prefix.len(),
        }
        .into());
    }

    Ok(text)
}
