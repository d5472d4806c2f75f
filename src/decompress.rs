//! Decoding pipeline.
//!
//! The code tree is rebuilt from the side file on every call, never taken
//! from a preceding encode, so a stream can be decoded by another process
//! from nothing but the two files.

use std::path::Path;

use tracing::info;

use crate::bitreader::BitReader;
use crate::compress::{read_file, write_file, Summary};
use crate::decode::decode_stream;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::tree::CodeTree;

/// Decompress a packed `stream` using its frequency table.
///
/// # Errors
/// Returns a decode error if `stream` does not hold exactly the symbols the
/// table accounts for (see [`decode_stream`](crate::decode_stream)).
pub fn decompress(stream: &[u8], frequencies: &FrequencyTable) -> Result<Vec<u8>> {
    let Some(tree) = CodeTree::build(frequencies) else {
        // Nothing was encoded, so nothing may follow.
        if !stream.is_empty() {
            return Err(HuffmanError::TrailingBits(stream.len() * 8));
        }
        return Ok(Vec::new());
    };

    let mut reader = BitReader::new(stream);
    decode_stream(&mut reader, &tree, frequencies.total())
}

/// Decode the packed `input` file with the `freq_file` side file into
/// `output`.
///
/// The output file is only created once decoding has succeeded.
///
/// # Errors
/// I/O failures, a malformed side file, or a stream that does not match it.
pub fn decode(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    freq_file: impl AsRef<Path>,
) -> Result<Summary> {
    let (input, output, freq_file) = (input.as_ref(), output.as_ref(), freq_file.as_ref());

    let side_file = read_file(freq_file)?;
    let frequencies = FrequencyTable::parse(&side_file)?;
    let stream = read_file(input)?;

    let data = decompress(&stream, &frequencies)?;
    write_file(output, &data)?;

    let summary = Summary {
        input_bytes: stream.len() as u64,
        output_bytes: data.len() as u64,
        side_file_bytes: side_file.len() as u64,
        symbols: frequencies.len(),
    };
    info!(
        input = %input.display(),
        output = %output.display(),
        ?summary,
        "decoded file"
    );
    Ok(summary)
}
