//! Code table derivation from a code tree.
//!
//! Codes are the root-to-leaf paths of the tree, `0` for a left edge and
//! `1` for a right edge. A tree that is a single leaf has no edges, so its
//! symbol is given the one-bit code `0`.

use std::fmt;

use crate::frequency::{FrequencyTable, ALPHABET_SIZE};
use crate::tree::{CodeTree, Node};

/// Longest code a [`Code`] can hold.
///
/// A leaf at depth `d` needs a total count of at least `Fib(d + 2)`, so a
/// tree built from 64-bit counts never goes deeper than 92.
pub const MAX_CODE_LEN: usize = 128;

/// A Huffman code: up to [`MAX_CODE_LEN`] bits, first bit most significant.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bits: u128,
    len: u8,
}

impl Code {
    /// Build a code from the low `len` bits of `bits`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_bits(bits: u128, len: usize) -> Self {
        debug_assert!(len <= MAX_CODE_LEN);
        let bits = if len >= MAX_CODE_LEN {
            bits
        } else {
            bits & ((1u128 << len) - 1)
        };
        Self {
            bits,
            len: len as u8,
        }
    }

    /// Code bits, right-justified.
    #[inline]
    pub fn bits(self) -> u128 {
        self.bits
    }

    /// Number of bits.
    #[inline]
    pub fn len(self) -> usize {
        usize::from(self.len)
    }

    /// True for the zero-length code.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Bit at `index`, counting from the first bit of the code.
    pub fn bit(self, index: usize) -> u8 {
        debug_assert!(index < self.len());
        u8::from((self.bits >> (self.len() - 1 - index)) & 1 == 1)
    }

    /// True if `self` is a prefix of (or equal to) `other`.
    pub fn is_prefix_of(self, other: Code) -> bool {
        self.len <= other.len && other.bits >> (other.len - self.len) == self.bits
    }

    fn push(self, bit: u8) -> Self {
        debug_assert!(self.len() < MAX_CODE_LEN);
        Self {
            bits: (self.bits << 1) | u128::from(bit & 1),
            len: self.len + 1,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len() {
            f.write_str(if self.bit(i) == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({self})")
    }
}

/// Mapping from byte value to its code.
#[derive(Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; ALPHABET_SIZE],
}

impl CodeTable {
    /// Derive the codes of every leaf of `tree`.
    pub fn from_tree(tree: &CodeTree) -> Self {
        let mut codes = [None; ALPHABET_SIZE];
        match tree.root() {
            Node::Leaf { symbol, .. } => {
                codes[usize::from(*symbol)] = Some(Code::from_bits(0, 1));
            }
            root @ Node::Internal { .. } => assign(root, Code::default(), &mut codes),
        }
        Self { codes }
    }

    /// Code of `symbol`, if it occurred.
    #[inline]
    pub fn get(&self, symbol: u8) -> Option<Code> {
        self.codes[usize::from(symbol)]
    }

    /// `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        (0..=u8::MAX).filter_map(|symbol| self.get(symbol).map(|code| (symbol, code)))
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    /// True if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(Option::is_none)
    }

    /// True if every code is non-empty and none is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<Code> = self.iter().map(|(_, code)| code).collect();
        codes.iter().enumerate().all(|(i, a)| {
            !a.is_empty()
                && codes
                    .iter()
                    .enumerate()
                    .all(|(j, b)| i == j || !a.is_prefix_of(*b))
        })
    }

    /// Sum of `count * code length` over `frequencies`, i.e. the encoded
    /// stream length in bits.
    pub fn weighted_length(&self, frequencies: &FrequencyTable) -> u128 {
        frequencies
            .entries()
            .map(|e| {
                let len = self.get(e.symbol).map_or(0, Code::len);
                u128::from(e.count) * len as u128
            })
            .sum()
    }
}

impl fmt::Debug for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

fn assign(node: &Node, prefix: Code, codes: &mut [Option<Code>; ALPHABET_SIZE]) {
    match node {
        Node::Leaf { symbol, .. } => codes[usize::from(*symbol)] = Some(prefix),
        Node::Internal { left, right, .. } => {
            assign(left, prefix.push(0), codes);
            assign(right, prefix.push(1), codes);
        }
    }
}
