//! Encoding pipeline.
//!
//! input bytes -> frequency table -> code tree -> code table -> packed bits,
//! with the frequency table written out as the side file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::codetable::CodeTable;
use crate::encode::encode_stream;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::tree::CodeTree;

/// Result of compressing an in-memory buffer.
#[derive(Clone, Debug)]
pub struct Encoded {
    /// Packed code bits, zero-padded to a whole byte.
    pub stream: Vec<u8>,
    /// Number of meaningful bits in `stream`.
    pub bit_len: usize,
    /// Frequency table needed to decode `stream`.
    pub frequencies: FrequencyTable,
}

/// Sizes of the files touched by [`encode`] or [`decode`](crate::decode).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Bytes read from the input file.
    pub input_bytes: u64,
    /// Bytes written to the output file.
    pub output_bytes: u64,
    /// Size of the frequency side file.
    pub side_file_bytes: u64,
    /// Number of distinct symbols.
    pub symbols: usize,
}

/// Compress `data` with a static Huffman code.
///
/// Empty input gives an empty stream and an empty table.
///
/// # Errors
/// Only fails on an internal consistency violation
/// ([`HuffmanError::MissingCode`]).
pub fn compress(data: &[u8]) -> Result<Encoded> {
    let frequencies = FrequencyTable::from_bytes(data);
    debug!(
        input_bytes = data.len(),
        symbols = frequencies.len(),
        "counted frequencies"
    );

    let Some(tree) = CodeTree::build(&frequencies) else {
        return Ok(Encoded {
            stream: Vec::new(),
            bit_len: 0,
            frequencies,
        });
    };

    let table = CodeTable::from_tree(&tree);
    let bits = encode_stream(data, &table)?;

    Ok(Encoded {
        stream: bits.to_bytes(),
        bit_len: bits.len(),
        frequencies,
    })
}

/// Encode `input` into the packed `output` file and the `freq_file` side file.
///
/// The stream is written first. If the side file then cannot be written,
/// the stream is removed again so no half-encoded pair is left behind.
///
/// # Errors
/// Any I/O failure on the three files is returned as [`HuffmanError::Io`].
pub fn encode(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    freq_file: impl AsRef<Path>,
) -> Result<Summary> {
    let (input, output, freq_file) = (input.as_ref(), output.as_ref(), freq_file.as_ref());

    let data = read_file(input)?;
    let encoded = compress(&data)?;
    let side_file = encoded.frequencies.serialize();

    write_file(output, &encoded.stream)?;
    if let Err(e) = write_file(freq_file, side_file.as_bytes()) {
        if let Err(cleanup) = fs::remove_file(output) {
            warn!(output = %output.display(), error = %cleanup, "could not remove stream");
        }
        return Err(e);
    }

    let summary = Summary {
        input_bytes: data.len() as u64,
        output_bytes: encoded.stream.len() as u64,
        side_file_bytes: side_file.len() as u64,
        symbols: encoded.frequencies.len(),
    };
    info!(
        input = %input.display(),
        output = %output.display(),
        bits = encoded.bit_len,
        ?summary,
        "encoded file"
    );
    Ok(summary)
}

/// Read a whole file.
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| HuffmanError::io(path, e))
}

/// Create (or truncate) `path`, write `data` and flush it.
pub(crate) fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    let file = File::create(path).map_err(|e| HuffmanError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(data)
        .and_then(|()| writer.flush())
        .map_err(|e| HuffmanError::io(path, e))
}
