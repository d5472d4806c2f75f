//! Stream decoder: packed code bits back to bytes.
//!
//! Decoding walks the code tree one bit at a time: `0` descends left, `1`
//! descends right, and reaching a leaf emits its symbol and restarts at the
//! root. The number of symbols to produce comes from the frequency table
//! (its total count), so the bits padding the final byte are never
//! interpreted as codes. They must all be zero.

use tracing::debug;

use crate::bitreader::BitReader;
use crate::error::{HuffmanError, Result};
use crate::tree::{CodeTree, Node};

/// Unused bits tolerated after the last symbol: the padding of one byte.
const MAX_PADDING_BITS: usize = 7;

/// Decode exactly `symbols` symbols from `reader`.
///
/// # Errors
/// - [`HuffmanError::TruncatedStream`] if the bits run out first, including
///   in the middle of a code.
/// - [`HuffmanError::InvalidCode`] if a single-symbol stream holds a `1`.
/// - [`HuffmanError::TrailingBits`] if a whole byte or more is left over.
/// - [`HuffmanError::NonZeroPadding`] if a leftover bit is set.
pub fn decode_stream(
    reader: &mut BitReader<'_>,
    tree: &CodeTree,
    symbols: u64,
) -> Result<Vec<u8>> {
    // Every symbol takes at least one bit, which bounds the allocation
    // even when the count comes from a corrupted side file.
    let capacity = usize::try_from(symbols)
        .map_or(reader.remaining(), |n| n.min(reader.remaining()));
    let mut out = Vec::with_capacity(capacity);

    let truncated = |decoded: usize| HuffmanError::TruncatedStream {
        decoded: decoded as u64,
        expected: symbols,
    };

    match tree.root() {
        Node::Leaf { symbol, .. } => {
            while (out.len() as u64) < symbols {
                let position = reader.position();
                let bit = reader.read_bit().map_err(|_| truncated(out.len()))?;
                if bit != 0 {
                    return Err(HuffmanError::InvalidCode { position });
                }
                out.push(*symbol);
            }
        }
        root @ Node::Internal { .. } => {
            while (out.len() as u64) < symbols {
                let mut node = root;
                loop {
                    match node {
                        Node::Leaf { symbol, .. } => {
                            out.push(*symbol);
                            break;
                        }
                        Node::Internal { left, right, .. } => {
                            let bit = reader.read_bit().map_err(|_| truncated(out.len()))?;
                            node = if bit == 0 { &**left } else { &**right };
                        }
                    }
                }
            }
        }
    }

    let bits = reader.position();
    let leftover = reader.remaining();
    if leftover > MAX_PADDING_BITS {
        return Err(HuffmanError::TrailingBits(leftover));
    }
    // The writer zero-pads, so a set bit means the stream and the table
    // do not belong together.
    while reader.has_bits() {
        let position = reader.position();
        if reader.read_bit()? != 0 {
            return Err(HuffmanError::NonZeroPadding { position });
        }
    }

    debug!(
        symbols = out.len(),
        bits,
        padding = leftover,
        "decoded stream"
    );
    Ok(out)
}
