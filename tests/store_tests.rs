mod common;

use std::fs;

use anyhow::Result;
use tempfile::tempdir;

use huffman_text::huffman::frequency::TokenMode;
use huffman_text::huffman::HuffmanError;
use huffman_text::store::{
    compress_file, decompress_file, frequencies_path, load_frequencies, CompressOptions,
};

use crate::common::*;

#[test]
fn compress_then_decompress_restores_the_file() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("sample.txt");
    let text = zipfian_text(42, 1.1);
    fs::write(&input, &text)?;

    let written = compress_file(&input, dir.path(), CompressOptions::default())?;

    assert_eq!(written.blob, dir.path().join("sample.txt.huff"));
    assert_eq!(written.frequencies, dir.path().join("sample.txt.huff.freq.json"));
    assert!(written.report.as_ref().unwrap().is_file());
    assert!(written.tree.as_ref().unwrap().is_file());
    assert_eq!(fs::read(&written.blob)?[0] as usize, (8 - written.stats.compressed_bits % 8) % 8);

    let output = decompress_file(&written.blob, dir.path(), TokenMode::Char)?;

    assert_eq!(output, dir.path().join("uncompressed_sample.txt.txt"));
    assert_eq!(fs::read_to_string(output)?, text);
    Ok(())
}

#[test]
fn word_mode_files_round_trip_up_to_spacing() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("words.txt");
    fs::write(&input, "hello  how are\nyou\n\thello how")?;

    let options = CompressOptions {
        mode: TokenMode::Word,
        report: false,
        tree: false,
    };
    let written = compress_file(&input, dir.path(), options)?;
    assert!(written.report.is_none());
    assert!(written.tree.is_none());

    let output = decompress_file(&written.blob, dir.path(), TokenMode::Word)?;
    assert_eq!(fs::read_to_string(output)?, "hello how are you hello how");
    Ok(())
}

#[test]
fn empty_file_round_trips() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("empty.txt");
    fs::write(&input, "")?;

    let written = compress_file(&input, dir.path(), CompressOptions::default())?;
    assert_eq!(fs::read(&written.blob)?, vec![0]);
    assert!(written.tree.is_none());
    assert!(load_frequencies(&written.frequencies)?.is_empty());

    let output = decompress_file(&written.blob, dir.path(), TokenMode::Char)?;
    assert_eq!(fs::read_to_string(output)?, "");
    Ok(())
}

#[test]
fn frequency_table_is_plain_json() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("ws.txt");
    fs::write(&input, "a a\n")?;

    let written = compress_file(&input, dir.path(), CompressOptions::default())?;
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&written.frequencies)?)?;

    assert_eq!(json, serde_json::json!({"a": 2, " ": 1, "\n": 1}));
    Ok(())
}

#[test]
fn missing_input_is_reported() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    let err = compress_file(&missing, dir.path(), CompressOptions::default()).unwrap_err();
    assert!(err.to_string().contains("not found"));

    let err = decompress_file(&missing, dir.path(), TokenMode::Char).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn corrupted_frequency_table_is_fatal() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("doc.txt");
    fs::write(&input, CHAR_SAMPLES[1])?;

    let written = compress_file(&input, dir.path(), CompressOptions::default())?;
    fs::write(frequencies_path(&written.blob), r#"{"a": 0}"#)?;

    let err = decompress_file(&written.blob, dir.path(), TokenMode::Char).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<HuffmanError>(),
        Some(HuffmanError::MalformedFrequencyTable(_))
    ));
    assert!(!dir.path().join("uncompressed_doc.txt.txt").exists());
    Ok(())
}

#[test]
fn invalid_padding_byte_is_fatal() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("doc.txt");
    fs::write(&input, CHAR_SAMPLES[0])?;

    let written = compress_file(&input, dir.path(), CompressOptions::default())?;
    let mut data = fs::read(&written.blob)?;
    data[0] = 8;
    fs::write(&written.blob, data)?;

    let err = decompress_file(&written.blob, dir.path(), TokenMode::Char).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<HuffmanError>(),
        Some(HuffmanError::InvalidPadding { padding: 8, .. })
    ));
    Ok(())
}
