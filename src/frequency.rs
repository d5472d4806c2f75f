//! Per-byte frequency table and its text side file.
//!
//! The table is the single piece of state shared between the encoder and
//! the decoder: the code tree is always rebuilt from it.
//!
//! ## Side File Format
//! One record per distinct byte, in first-occurrence order:
//!
//! ```text
//! bbbbbbbb:count<space>
//! ```
//!
//! where `bbbbbbbb` is the byte value as eight binary digits (MSB first) and
//! `count` is its decimal occurrence count. There are no line breaks and the
//! last record keeps its trailing space, e.g. `01000001:3 01000010:1 `.

use crate::error::{HuffmanError, Result};

/// Number of distinct byte values.
pub const ALPHABET_SIZE: usize = 256;

/// Width of the binary symbol field in the side file.
const SYMBOL_DIGITS: usize = 8;

/// One `(symbol, count)` record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrequencyEntry {
    /// Byte value.
    pub symbol: u8,
    /// Number of occurrences (always at least 1).
    pub count: u64,
}

/// Occurrence counts of every byte value present in an input.
///
/// Counts are stored densely by byte value; the order in which symbols were
/// first seen is kept separately because it fixes the tie-break order of the
/// tree builder.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
    order: Vec<u8>,
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
            order: Vec::new(),
            total: 0,
        }
    }

    /// Count every byte of `data` in a single pass.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in data {
            let slot = &mut table.counts[usize::from(byte)];
            if *slot == 0 {
                table.order.push(byte);
            }
            *slot += 1;
        }
        table.total = data.len() as u64;
        table
    }

    /// Add a new symbol with its count.
    ///
    /// # Errors
    /// Fails if the symbol is already present, the count is zero, or the
    /// total would overflow.
    pub fn insert(&mut self, symbol: u8, count: u64) -> Result<()> {
        if count == 0 {
            return Err(HuffmanError::ZeroCount(symbol));
        }
        if self.counts[usize::from(symbol)] != 0 {
            return Err(HuffmanError::DuplicateSymbol(symbol));
        }
        self.total = self
            .total
            .checked_add(count)
            .ok_or(HuffmanError::CountOverflow)?;
        self.counts[usize::from(symbol)] = count;
        self.order.push(symbol);
        Ok(())
    }

    /// Occurrence count of `symbol` (0 if absent).
    #[inline]
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[usize::from(symbol)]
    }

    /// Number of distinct symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no symbol has been counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts, i.e. the length of the original input.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Entries in first-occurrence order.
    pub fn entries(&self) -> impl Iterator<Item = FrequencyEntry> + '_ {
        self.order.iter().map(|&symbol| FrequencyEntry {
            symbol,
            count: self.counts[usize::from(symbol)],
        })
    }

    /// Render the side file text.
    pub fn serialize(&self) -> String {
        self.entries()
            .map(|entry| format!("{:08b}:{} ", entry.symbol, entry.count))
            .collect()
    }

    /// Parse side file text back into a table, keeping record order.
    ///
    /// # Errors
    /// Returns [`HuffmanError::MalformedFrequencyTable`] with the byte offset
    /// of the offending record for anything that is not a well-formed record
    /// sequence, and the [`insert`](Self::insert) errors for invalid content.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            HuffmanError::malformed(e.valid_up_to(), "side file is not ASCII text")
        })?;

        let mut table = Self::new();
        let mut rest = text;
        let mut offset = 0;

        while !rest.is_empty() {
            let (record, tail) = rest
                .split_once(' ')
                .ok_or_else(|| HuffmanError::malformed(offset, "record has no trailing space"))?;
            let (symbol, count) = record
                .split_once(':')
                .ok_or_else(|| HuffmanError::malformed(offset, "record has no ':' separator"))?;

            let symbol = parse_symbol(symbol)
                .ok_or_else(|| HuffmanError::malformed(offset, "symbol is not 8 binary digits"))?;
            let count = parse_count(count).ok_or_else(|| {
                HuffmanError::malformed(offset + SYMBOL_DIGITS + 1, "count is not a decimal number")
            })?;

            table.insert(symbol, count)?;

            offset += record.len() + 1;
            rest = tail;
        }

        Ok(table)
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries().map(|e| (e.symbol, e.count)))
            .finish()
    }
}

fn parse_symbol(field: &str) -> Option<u8> {
    if field.len() != SYMBOL_DIGITS || !field.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u8::from_str_radix(field, 2).ok()
}

fn parse_count(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
