//! Reference vector tests.
//!
//! Each vector pins the exact side file, code table and (where short enough
//! to write out) packed stream for a small input, then runs the input
//! through the file-level `encode`/`decode` pair and checks the round-trip.

use std::fs;
use std::path::Path;

use statichuff::{compress, decode, encode, CodeTable, CodeTree, FrequencyTable, HuffmanError};

/// Test vector configuration.
struct TestVector {
    name: &'static str,
    input: fn() -> Vec<u8>,
    side_file: &'static str,
    codes: &'static [(u8, &'static str)],
    bit_len: usize,
    stream: Option<&'static [u8]>,
}

fn repeat(runs: &[(u8, usize)]) -> Vec<u8> {
    runs.iter()
        .flat_map(|&(byte, n)| std::iter::repeat(byte).take(n))
        .collect()
}

const TEST_VECTORS: &[TestVector] = &[
    TestVector {
        // A=5 B=4 C=2 D=1
        //
        //        (12)
        //       0/  \1
        //       A   (7)
        //          0/ \1
        //         (3)  B
        //        0/ \1
        //        D   C
        name: "worked-example",
        input: || b"AAAAABBBBCCD".to_vec(),
        side_file: "01000001:5 01000010:4 01000011:2 01000100:1 ",
        codes: &[(b'A', "0"), (b'B', "11"), (b'C', "101"), (b'D', "100")],
        bit_len: 22,
        stream: Some(&[0x07, 0xFD, 0xB0]),
    },
    TestVector {
        // Merges: a+b=14, c+d=25, 14+e=30, 25+30=55, f+55=100
        name: "textbook",
        input: || {
            repeat(&[
                (b'a', 5),
                (b'b', 9),
                (b'c', 12),
                (b'd', 13),
                (b'e', 16),
                (b'f', 45),
            ])
        },
        side_file: "01100001:5 01100010:9 01100011:12 01100100:13 01100101:16 01100110:45 ",
        codes: &[
            (b'a', "1100"),
            (b'b', "1101"),
            (b'c', "100"),
            (b'd', "101"),
            (b'e', "111"),
            (b'f', "0"),
        ],
        bit_len: 224,
        stream: None,
    },
    TestVector {
        // z is created before the x+y node of equal weight, so it goes left
        name: "tie-break",
        input: || b"xyzz".to_vec(),
        side_file: "01111000:1 01111001:1 01111010:2 ",
        codes: &[(b'x', "10"), (b'y', "11"), (b'z', "0")],
        bit_len: 6,
        stream: Some(&[0b1011_0000]),
    },
    TestVector {
        name: "single-symbol",
        input: || vec![b'z'; 10],
        side_file: "01111010:10 ",
        codes: &[(b'z', "0")],
        bit_len: 10,
        stream: Some(&[0x00, 0x00]),
    },
    TestVector {
        name: "empty",
        input: Vec::new,
        side_file: "",
        codes: &[],
        bit_len: 0,
        stream: Some(&[]),
    },
];

/// Check the in-memory encoding against the pinned values.
fn check_encoding(vector: &TestVector) {
    let input = (vector.input)();
    let encoded = compress(&input)
        .unwrap_or_else(|e| panic!("Compression failed for {}: {e}", vector.name));

    assert_eq!(
        encoded.frequencies.serialize(),
        vector.side_file,
        "{}: side file differs",
        vector.name
    );
    assert_eq!(encoded.bit_len, vector.bit_len, "{}: bit length", vector.name);
    if let Some(stream) = vector.stream {
        assert_eq!(encoded.stream, stream, "{}: packed stream", vector.name);
    }

    if let Some(tree) = CodeTree::build(&encoded.frequencies) {
        let table = CodeTable::from_tree(&tree);
        let actual: Vec<(u8, String)> = table.iter().map(|(s, c)| (s, c.to_string())).collect();
        let mut expected: Vec<(u8, String)> = vector
            .codes
            .iter()
            .map(|&(s, c)| (s, c.to_string()))
            .collect();
        expected.sort();
        assert_eq!(actual, expected, "{}: code table", vector.name);
        assert_eq!(
            table.weighted_length(&encoded.frequencies),
            vector.bit_len as u128
        );
    } else {
        assert!(vector.codes.is_empty());
    }
}

/// Encode and decode through real files.
fn check_file_round_trip(vector: &TestVector, dir: &Path) {
    let input = (vector.input)();
    let input_path = dir.join(format!("{}.bin", vector.name));
    let encoded_path = dir.join(format!("{}.huf", vector.name));
    let freq_path = dir.join(format!("{}.freq", vector.name));
    let decoded_path = dir.join(format!("{}.out", vector.name));

    fs::write(&input_path, &input).unwrap();

    let summary = encode(&input_path, &encoded_path, &freq_path)
        .unwrap_or_else(|e| panic!("encode failed for {}: {e}", vector.name));
    assert_eq!(summary.input_bytes, input.len() as u64);
    assert_eq!(summary.output_bytes, vector.bit_len.div_ceil(8) as u64);

    assert_eq!(fs::read_to_string(&freq_path).unwrap(), vector.side_file);
    if let Some(stream) = vector.stream {
        assert_eq!(fs::read(&encoded_path).unwrap(), stream);
    }

    decode(&encoded_path, &decoded_path, &freq_path)
        .unwrap_or_else(|e| panic!("decode failed for {}: {e}", vector.name));
    assert_eq!(
        fs::read(&decoded_path).unwrap(),
        input,
        "{}: decoded file differs from original",
        vector.name
    );
}

#[test]
fn test_vector_encodings() {
    for vector in TEST_VECTORS {
        check_encoding(vector);
    }
}

#[test]
fn test_vector_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    for vector in TEST_VECTORS {
        check_file_round_trip(vector, dir.path());
    }
}

#[test]
fn test_binary_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input: Vec<u8> = (0..4096u32)
        .map(|i| (i.wrapping_mul(2_654_435_761) >> 13) as u8)
        .collect();

    let input_path = dir.path().join("binary.bin");
    let encoded_path = dir.path().join("binary.huf");
    let freq_path = dir.path().join("binary.freq");
    let decoded_path = dir.path().join("binary.out");
    fs::write(&input_path, &input).unwrap();

    encode(&input_path, &encoded_path, &freq_path).unwrap();
    decode(&encoded_path, &decoded_path, &freq_path).unwrap();
    assert_eq!(fs::read(&decoded_path).unwrap(), input);
}

#[test]
fn test_dominant_byte_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input: Vec<u8> = (0..10_000usize)
        .map(|i| if i % 10 == 3 { (i % 251) as u8 } else { 0xEE })
        .collect();

    let input_path = dir.path().join("skewed.bin");
    let encoded_path = dir.path().join("skewed.huf");
    let freq_path = dir.path().join("skewed.freq");
    let decoded_path = dir.path().join("skewed.out");
    fs::write(&input_path, &input).unwrap();

    let summary = encode(&input_path, &encoded_path, &freq_path).unwrap();
    assert!(summary.output_bytes < summary.input_bytes / 3);

    decode(&encoded_path, &decoded_path, &freq_path).unwrap();
    assert_eq!(fs::read(&decoded_path).unwrap(), input);
}

#[test]
fn test_decode_truncated_file() {
    let dir = tempfile::tempdir().unwrap();
    let encoded_path = dir.path().join("cut.huf");
    let freq_path = dir.path().join("cut.freq");
    fs::write(&encoded_path, [0x07, 0xFD]).unwrap();
    fs::write(&freq_path, "01000001:5 01000010:4 01000011:2 01000100:1 ").unwrap();

    let err = decode(&encoded_path, dir.path().join("cut.out"), &freq_path).unwrap_err();
    assert!(matches!(
        err,
        HuffmanError::TruncatedStream {
            decoded: 10,
            expected: 12
        }
    ));
}

#[test]
fn test_decode_side_file_from_elsewhere() {
    // A side file written by hand decodes a stream produced by `encode`.
    let dir = tempfile::tempdir().unwrap();
    let encoded_path = dir.path().join("hand.huf");
    let freq_path = dir.path().join("hand.freq");
    let decoded_path = dir.path().join("hand.out");
    fs::write(&encoded_path, [0x07, 0xFD, 0xB0]).unwrap();
    fs::write(&freq_path, "01000001:5 01000010:4 01000011:2 01000100:1 ").unwrap();

    decode(&encoded_path, &decoded_path, &freq_path).unwrap();
    assert_eq!(fs::read(&decoded_path).unwrap(), b"AAAAABBBBCCD");
}

#[test]
fn test_side_file_parse_matches_table() {
    let table = FrequencyTable::parse(TEST_VECTORS[1].side_file.as_bytes()).unwrap();
    assert_eq!(table.total(), 100);
    assert_eq!(table.count(b'f'), 45);
}

#[test]
fn test_decode_mismatched_side_file() {
    // One C short: decoding finishes inside the last byte with set bits left.
    let dir = tempfile::tempdir().unwrap();
    let encoded_path = dir.path().join("mismatch.huf");
    let freq_path = dir.path().join("mismatch.freq");
    let decoded_path = dir.path().join("mismatch.out");
    fs::write(&encoded_path, [0x07, 0xFD, 0xB0]).unwrap();
    fs::write(&freq_path, "01000001:5 01000010:4 01000011:1 01000100:1 ").unwrap();

    let err = decode(&encoded_path, &decoded_path, &freq_path).unwrap_err();
    assert!(matches!(err, HuffmanError::NonZeroPadding { position: 19 }));
    assert!(!decoded_path.exists());
}
