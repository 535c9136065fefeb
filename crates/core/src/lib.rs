//! huffcrypt-core: Huffman compression with repeating-key XOR obfuscation
//! for text payloads.
//!
//! This library is the codec at the center of a larger messaging system.
//! It turns plain text into a transport-safe envelope and back:
//! - Builds a Huffman tree over the text's symbol frequencies
//! - Derives a prefix-free code table from the tree
//! - Packs the variable-length codes into a byte buffer, tracking padding
//! - XORs the buffer against a repeating key
//! - Base64-encodes the result so it can travel as text
//!
//! The surrounding system (HTTP API, websocket sessions, task workers) calls
//! [`encode`] and [`decode`] with plain data and relays the output unchanged;
//! none of that glue lives here.
//!
//! # Architecture
//!
//! - `huffman`: frequency model, tree construction, code table generation
//! - `bitio`: bit-level writing/reading and code packing/unpacking
//! - `cipher`: repeating-key XOR
//! - `transport`: base64 boundary encoding
//! - `envelope`: the pipeline facade composing the stages
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and returned to the caller
//! - **Pure**: no I/O, no shared state; every call allocates and discards
//!   its own tree, table, and buffers, so concurrent use needs no locking
//! - **Deterministic**: a fixed tie-break rule makes the code table and
//!   ciphertext identical across runs and implementations
//!
//! # Example
//!
//! ```
//! use huffcrypt_core::{decode, encode};
//!
//! let envelope = encode("abracadabra", "x").unwrap();
//! let text = decode(
//!     &envelope.encoded_data,
//!     &envelope.key,
//!     &envelope.huffman_codes,
//!     envelope.padding,
//! )
//! .unwrap();
//! assert_eq!(text, "abracadabra");
//! ```

pub mod bitio;
pub mod cipher;
pub mod envelope;
pub mod error;
pub mod huffman;
pub mod transport;

// Re-export commonly used types
pub use envelope::{decode, encode, Envelope};
pub use error::{Error, Result};
pub use huffman::CodeTable;
