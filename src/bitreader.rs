//! Sequential bit reader for the encoded stream.
//!
//! Bits are read MSB-first, matching the packing of
//! [`BitBuffer`](crate::BitBuffer).
//!
//! ## Bit Ordering
//! - Bit position 0 in a byte is bit 7 (MSB)
//! - Bit position 7 in a byte is bit 0 (LSB)

use crate::error::{HuffmanError, Result};

/// Sequential bit reader over a byte slice.
#[derive(Clone, Debug)]
pub struct BitReader<'a> {
    /// Source data.
    data: &'a [u8],
    /// Total number of bits available.
    num_bits: usize,
    /// Current bit position.
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader over every bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_len(data, data.len() * 8)
    }

    /// Create a reader limited to the first `num_bits` bits of `data`.
    pub fn with_len(data: &'a [u8], num_bits: usize) -> Self {
        Self {
            data,
            num_bits: num_bits.min(data.len() * 8),
            bit_pos: 0,
        }
    }

    /// Get current bit position.
    #[inline]
    pub fn position(&self) -> usize {
        self.bit_pos
    }

    /// Get number of remaining bits.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.num_bits.saturating_sub(self.bit_pos)
    }

    /// Check if there are more bits to read.
    #[inline]
    pub fn has_bits(&self) -> bool {
        self.bit_pos < self.num_bits
    }

    /// Read a single bit.
    ///
    /// # Returns
    /// The bit value (0 or 1), or [`HuffmanError::Underflow`] if no bits remain.
    #[inline]
    pub fn read_bit(&mut self) -> Result<u8> {
        if self.bit_pos >= self.num_bits {
            return Err(HuffmanError::Underflow);
        }

        let byte_index = self.bit_pos >> 3;
        let bit_index = self.bit_pos & 7;

        // MSB-first: bit 0 of byte is at position 7
        let bit = (self.data[byte_index] >> (7 - bit_index)) & 1;

        self.bit_pos += 1;

        Ok(bit)
    }
}
