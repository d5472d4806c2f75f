//! statichuff Command Line Interface
//!
//! Usage:
//!   statichuff encode <input> <output> <freq>
//!   statichuff decode <input> <output> <freq>
//!   statichuff codes <freq>
//!   statichuff --version
//!   statichuff --help

#![allow(clippy::cast_precision_loss)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use statichuff::{CodeTable, CodeTree, FrequencyTable, HuffmanError, Summary};

#[derive(Parser, Debug)]
#[command(name = "statichuff")]
#[command(version)]
#[command(about = "Static Huffman file compressor", long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file into a packed stream and a frequency side file
    Encode {
        /// File to compress
        input: PathBuf,
        /// Packed bit stream to write
        output: PathBuf,
        /// Frequency side file to write
        freq: PathBuf,
    },
    /// Rebuild the original file from a packed stream and its side file
    Decode {
        /// Packed bit stream
        input: PathBuf,
        /// Reconstructed file to write
        output: PathBuf,
        /// Frequency side file written by `encode`
        freq: PathBuf,
    },
    /// Print the code table derived from a frequency side file
    Codes {
        /// Frequency side file
        freq: PathBuf,
    },
}

fn init_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    // Only fails if a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn do_encode(input: &Path, output: &Path, freq: &Path) -> Result<(), HuffmanError> {
    let summary: Summary = statichuff::encode(input, output, freq)?;

    let stored = summary.output_bytes + summary.side_file_bytes;
    println!("Input:       {} ({} bytes)", input.display(), summary.input_bytes);
    println!("Output:      {} ({} bytes)", output.display(), summary.output_bytes);
    println!(
        "Side file:   {} ({} bytes, {} symbols)",
        freq.display(),
        summary.side_file_bytes,
        summary.symbols
    );
    println!("Ratio:       {:.2}x", ratio(summary.input_bytes, stored));

    Ok(())
}

fn do_decode(input: &Path, output: &Path, freq: &Path) -> Result<(), HuffmanError> {
    let summary = statichuff::decode(input, output, freq)?;

    println!("Input:       {} ({} bytes)", input.display(), summary.input_bytes);
    println!("Side file:   {} ({} bytes)", freq.display(), summary.side_file_bytes);
    println!("Output:      {} ({} bytes)", output.display(), summary.output_bytes);
    println!(
        "Expansion:   {:.2}x",
        ratio(summary.output_bytes, summary.input_bytes)
    );

    Ok(())
}

fn do_codes(freq: &Path) -> Result<(), HuffmanError> {
    let text = fs::read(freq).map_err(|e| HuffmanError::io(freq, e))?;
    let frequencies = FrequencyTable::parse(&text)?;

    let Some(tree) = CodeTree::build(&frequencies) else {
        println!("(empty frequency table)");
        return Ok(());
    };
    let table = CodeTable::from_tree(&tree);

    println!("{:<6} {:<6} {:>12}  code", "symbol", "char", "count");
    for (symbol, code) in table.iter() {
        let shown = if symbol.is_ascii_graphic() {
            char::from(symbol).to_string()
        } else {
            String::from("-")
        };
        println!(
            "0x{symbol:02x}   {shown:<6} {:>12}  {code}",
            frequencies.count(symbol)
        );
    }
    println!(
        "Encoded length: {} bits, tree depth {}",
        table.weighted_length(&frequencies),
        tree.depth()
    );

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(&args.log_level);

    let result = match &args.command {
        Command::Encode {
            input,
            output,
            freq,
        } => do_encode(input, output, freq),
        Command::Decode {
            input,
            output,
            freq,
        } => do_decode(input, output, freq),
        Command::Codes { freq } => do_codes(freq),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
