//! Throughput benchmarks for statichuff.
//!
//! Runs compression and decompression over built-in synthetic datasets and
//! checks every round-trip. Use for relative comparisons between builds.
//!
//! Usage:
//!   cargo run --release --bin bench          # Run with default 100 iterations
//!   cargo run --release --bin bench -- 1000  # Run with custom iteration count

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

use std::env;
use std::hint::black_box;
use std::time::Instant;

use statichuff::{compress, decompress};

const DEFAULT_ITERATIONS: usize = 100;
const DATASET_BYTES: usize = 64 * 1024;

const PANGRAM: &[u8] = b"The quick brown fox jumps over the lazy dog. ";

struct BenchConfig {
    name: &'static str,
    generate: fn() -> Vec<u8>,
}

const BENCHMARKS: &[BenchConfig] = &[
    BenchConfig {
        name: "text",
        generate: text,
    },
    BenchConfig {
        name: "skewed-90",
        generate: skewed,
    },
    BenchConfig {
        name: "byte-ramp",
        generate: ramp,
    },
    BenchConfig {
        name: "single-byte",
        generate: single,
    },
];

fn text() -> Vec<u8> {
    PANGRAM.iter().copied().cycle().take(DATASET_BYTES).collect()
}

/// Nine in ten bytes are `0x00`, the rest walk through the alphabet.
fn skewed() -> Vec<u8> {
    (0..DATASET_BYTES)
        .map(|i| if i % 10 == 9 { (i / 10) as u8 } else { 0 })
        .collect()
}

fn ramp() -> Vec<u8> {
    (0..DATASET_BYTES).map(|i| i as u8).collect()
}

fn single() -> Vec<u8> {
    vec![b'x'; DATASET_BYTES]
}

fn report(name: &str, bytes: usize, per_iter_us: f64, extra: &str) {
    let throughput_mbps = bytes as f64 / per_iter_us;
    println!("{name:<20} {per_iter_us:>10.2} µs/iter  {throughput_mbps:>8.1} MB/s  {extra}");
}

fn bench_compress(config: &BenchConfig, iterations: usize) {
    let input = (config.generate)();

    // Warmup run
    let Ok(encoded) = compress(&input) else {
        println!("{:<20} SKIP (compression failed)", config.name);
        return;
    };

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(compress(black_box(&input)));
    }
    let per_iter_us = start.elapsed().as_secs_f64() * 1_000_000.0 / iterations as f64;

    let ratio = input.len() as f64 / encoded.stream.len().max(1) as f64;
    report(
        config.name,
        input.len(),
        per_iter_us,
        &format!("({ratio:.2}x, {} symbols)", encoded.frequencies.len()),
    );
}

fn bench_decompress(config: &BenchConfig, iterations: usize) {
    let input = (config.generate)();

    let encoded = match compress(&input) {
        Ok(encoded) => encoded,
        Err(e) => {
            println!("{:<20} SKIP (compression failed: {e})", config.name);
            return;
        }
    };

    // Warmup run doubles as the round-trip check
    match decompress(&encoded.stream, &encoded.frequencies) {
        Ok(decoded) if decoded == input => {}
        Ok(_) => {
            println!("{:<20} FAIL (round-trip mismatch)", config.name);
            return;
        }
        Err(e) => {
            println!("{:<20} FAIL ({e})", config.name);
            return;
        }
    }

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(decompress(
            black_box(&encoded.stream),
            &encoded.frequencies,
        ));
    }
    let per_iter_us = start.elapsed().as_secs_f64() * 1_000_000.0 / iterations as f64;

    report(
        config.name,
        input.len(),
        per_iter_us,
        &format!("({} bits)", encoded.bit_len),
    );
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let iterations = if args.len() >= 2 {
        args[1].parse().unwrap_or(DEFAULT_ITERATIONS)
    } else {
        DEFAULT_ITERATIONS
    }
    .max(1);

    println!("statichuff Benchmarks");
    println!("=====================");
    println!("Iterations: {iterations}");
    println!("Dataset size: {DATASET_BYTES} bytes\n");

    println!("{:<20} {:>18}  {:>13}", "Test", "Time", "Throughput");
    println!("{:<20} {:>18}  {:>13}", "----", "----", "----------");

    println!("\nCompression:");
    for config in BENCHMARKS {
        bench_compress(config, iterations);
    }

    println!("\nDecompression:");
    for config in BENCHMARKS {
        bench_decompress(config, iterations);
    }
}
