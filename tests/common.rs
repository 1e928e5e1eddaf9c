#![cfg(feature = "std")]

use std::path::Path;

use csv::ReaderBuilder;
use rece232::sans::{Checksum, Dnp, Encoder, Fletcher};

#[test]
fn encode_fletcher_vectors() {
    encode_vectors::<Fletcher>("fixtures/fletcher.csv");
}

#[test]
fn encode_dnp_vectors() {
    encode_vectors::<Dnp>("fixtures/dnp.csv");
}

#[test]
fn encode_fletcher_reference_trace() {
    let mut out = Vec::new();

    let mut encoder = Encoder::<Fletcher>::init(0);
    encoder.encode_word(0, &mut out).unwrap();
    encoder.finish(&mut out).unwrap();

    assert_eq!(out, b" @ @ @ \x7F%u)");
}

#[test]
fn encode_dnp_reference_trace() {
    let mut out = Vec::new();

    let mut encoder = Encoder::<Dnp>::init(0);
    encoder.encode_word(0, &mut out).unwrap();
    encoder.finish(&mut out).unwrap();

    assert_eq!(out, b" @ @ @ \x7F2E2");
}

/// Encode every fixture row and compare against its recorded stream.
///
/// Rows hold the header, the hyphen-separated word sequence, and the
/// expected stream, all in hexadecimal.
fn encode_vectors<C: Checksum>(path: impl AsRef<Path>) {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();

    for record in reader.records() {
        let record = record.unwrap();

        let header = u8::from_str_radix(&record[0], 16).unwrap();
        let words: Vec<u32> = record[1]
            .split('-')
            .map(|w| u32::from_str_radix(w, 16).unwrap())
            .collect();
        let expected = hex::decode(&record[2]).unwrap();

        let mut out = Vec::new();
        let mut encoder = Encoder::<C>::init(header);
        for &word in &words {
            encoder.encode_word(word, &mut out).unwrap();
        }
        encoder.finish(&mut out).unwrap();

        assert_eq!(out, expected, "header {header:#04x}, words {words:08x?}");
    }
}
