//! Stream encoder: bytes to packed code bits.

use tracing::debug;

use crate::bitbuffer::BitBuffer;
use crate::codetable::CodeTable;
use crate::error::{HuffmanError, Result};

/// Concatenate the code of every byte of `data`, in input order.
///
/// # Errors
/// Returns [`HuffmanError::MissingCode`] for a byte the table has no code
/// for. This cannot happen when the table was derived from `data` itself.
pub fn encode_stream(data: &[u8], table: &CodeTable) -> Result<BitBuffer> {
    let mut out = BitBuffer::with_capacity(data.len() / 2 + 1);

    for &byte in data {
        let code = table.get(byte).ok_or(HuffmanError::MissingCode(byte))?;
        out.append_code(code);
    }

    debug!(
        input_bytes = data.len(),
        output_bits = out.len(),
        "encoded stream"
    );
    Ok(out)
}
