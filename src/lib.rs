//! # statichuff
//!
//! Lossless file compression with static Huffman coding.
//!
//! Encoding counts every byte value of the input, builds an optimal
//! prefix-code tree from those counts, and writes two artifacts: the
//! bit-packed stream of codes, and a small text side file holding the
//! frequency table. Decoding rebuilds the identical tree from the side file
//! alone and walks it bit by bit to reproduce the original bytes.
//!
//! ## Design
//!
//! - **Deterministic trees** - ties between equal counts are broken by node
//!   creation order, so the same input always yields the same bytes
//! - **Safe Rust** - `#![forbid(unsafe_code)]`
//! - **No headers** - the stream carries no length field; the side file's
//!   total count says how many symbols to decode, and the zero padding of
//!   the last byte is never read as data
//!
//! ## API Overview
//!
//! ### High-Level Functions
//!
//! - [`encode()`] / [`decode()`] - File to file, with the side file
//! - [`compress()`] / [`decompress()`] - In-memory buffers
//!
//! ### Components
//!
//! - [`FrequencyTable`] - Byte counts and the side file format
//! - [`CodeTree`] - Greedy-merge tree construction
//! - [`CodeTable`] / [`Code`] - Root-to-leaf path codes
//! - [`encode_stream`] / [`decode_stream`] - Bit stream transcoders
//! - [`BitBuffer`] / [`BitReader`] - MSB-first bit packing
//!
//! ## Usage
//!
//! ```rust
//! use statichuff::{compress, decompress};
//!
//! let data = b"AAAAABBBBCCD";
//! let encoded = compress(data)?;
//!
//! assert_eq!(encoded.frequencies.serialize(), "01000001:5 01000010:4 01000011:2 01000100:1 ");
//! assert_eq!(encoded.bit_len, 22);
//!
//! let decoded = decompress(&encoded.stream, &encoded.frequencies)?;
//! assert_eq!(decoded, data);
//! # Ok::<(), statichuff::HuffmanError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod bitbuffer;
mod bitreader;
mod codetable;
mod compress;
mod decode;
mod decompress;
mod encode;
mod error;
mod frequency;
mod tree;

pub use bitbuffer::BitBuffer;
pub use bitreader::BitReader;
pub use codetable::{Code, CodeTable, MAX_CODE_LEN};
pub use compress::{compress, encode, Encoded, Summary};
pub use decode::decode_stream;
pub use decompress::{decode, decompress};
pub use encode::encode_stream;
pub use error::{HuffmanError, Result};
pub use frequency::{FrequencyEntry, FrequencyTable, ALPHABET_SIZE};
pub use tree::{CodeTree, Node};
