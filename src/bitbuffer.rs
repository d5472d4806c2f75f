//! Variable-length bit buffer for building the encoded stream.
//!
//! This is the bit-level writer of the encoder. Bits are appended
//! sequentially and packed MSB-first into bytes; the last byte is padded
//! with zero bits when the stream length is not a multiple of eight.
//!
//! ## Bit Ordering
//! Bits are appended MSB-first within each byte:
//! - First bit appended goes to bit position 7
//! - Second bit goes to position 6, etc.

#![allow(clippy::cast_possible_truncation)]

use crate::codetable::Code;

/// Largest chunk accepted by [`BitBuffer::append_value`].
const MAX_CHUNK_BITS: usize = 56;

/// Variable-length bit buffer for building compressed output.
///
/// Uses a 64-bit accumulator for bit packing.
#[derive(Clone, Debug, Default)]
pub struct BitBuffer {
    /// Byte storage for flushed bits.
    data: Vec<u8>,
    /// Total number of bits in the buffer.
    num_bits: usize,
    /// 64-bit accumulator for pending bits.
    acc: u64,
    /// Number of bits in the accumulator.
    acc_len: usize,
}

impl BitBuffer {
    /// Create a new empty bit buffer.
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create an empty bit buffer with room for `bytes` packed bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            data: Vec::with_capacity(bytes),
            num_bits: 0,
            acc: 0,
            acc_len: 0,
        }
    }

    /// Clear the buffer, resetting to empty state.
    pub fn clear(&mut self) {
        self.data.clear();
        self.num_bits = 0;
        self.acc = 0;
        self.acc_len = 0;
    }

    /// Get the total number of bits in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_bits
    }

    /// Check if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_bits == 0
    }

    /// Flush complete bytes from accumulator to data buffer.
    fn flush_acc(&mut self) {
        while self.acc_len >= 8 {
            self.acc_len -= 8;
            let byte = (self.acc >> self.acc_len) as u8;
            self.data.push(byte);
            self.acc &= (1u64 << self.acc_len) - 1;
        }
    }

    /// Append a single bit (0, or non-zero for 1).
    pub fn append_bit(&mut self, bit: u8) {
        let bit_val = u64::from(bit != 0);
        self.acc = (self.acc << 1) | bit_val;
        self.acc_len += 1;
        self.num_bits += 1;

        if self.acc_len >= 8 {
            self.flush_acc();
        }
    }

    /// Append the low `num_bits` bits of `value`, most significant first.
    ///
    /// # Arguments
    /// * `value` - Value containing bits (right-justified)
    /// * `num_bits` - Number of bits to append (0-56)
    pub fn append_value(&mut self, value: u64, num_bits: usize) {
        debug_assert!(num_bits <= MAX_CHUNK_BITS);
        if num_bits == 0 {
            return;
        }

        let mask = (1u64 << num_bits) - 1;
        self.acc = (self.acc << num_bits) | (value & mask);
        self.acc_len += num_bits;
        self.num_bits += num_bits;

        self.flush_acc();
    }

    /// Append every bit of a Huffman code, first bit first.
    pub fn append_code(&mut self, code: Code) {
        let bits = code.bits();
        let mut remaining = code.len();

        // Codes can be longer than the accumulator takes in one go.
        while remaining > 0 {
            let take = remaining.min(MAX_CHUNK_BITS);
            remaining -= take;
            let chunk = (bits >> remaining) as u64;
            self.append_value(chunk, take);
        }
    }

    /// Convert buffer to bytes, zero-padding the final partial byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        let num_bytes = self.num_bits.div_ceil(8);
        let mut result = Vec::with_capacity(num_bytes);

        result.extend_from_slice(&self.data);

        if self.acc_len > 0 {
            // Shift accumulator bits to MSB position
            let last_byte = (self.acc << (8 - self.acc_len)) as u8;
            result.push(last_byte);
        }

        result
    }
}
