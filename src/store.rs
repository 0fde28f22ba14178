//! Reading and writing compressed files.
//!
//! Compressing `<dir>/<name>` writes, in the output directory:
//! - `<name>.huff`: the [packed blob](crate::huffman::packer::PackedBlob);
//! - `<name>.huff.freq.json`: the frequency table needed to rebuild the tree;
//! - `<name>_codes.txt`: the [report](crate::report), unless disabled;
//! - `<name>_tree.dot`: the [tree diagram](crate::dot), unless disabled.
//!
//! Decompressing `<name>.huff` reads the blob and its frequency table and writes
//! `uncompressed_<name>.txt`.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::info;

use crate::dot::to_dot;
use crate::huffman::frequency::{FrequencyTable, TokenMode};
use crate::huffman::packer::PackedBlob;
use crate::huffman::{compress, decompress, CompressionStats};
use crate::report::write_report;

/// Extension of the compressed blob.
pub const BLOB_EXTENSION: &str = "huff";

/// Suffix appended to the blob path to name its frequency table.
pub const FREQUENCIES_SUFFIX: &str = ".freq.json";

/// Suffix appended to the input file name to name the report.
pub const REPORT_SUFFIX: &str = "_codes.txt";

/// Suffix appended to the input file name to name the tree diagram.
pub const TREE_SUFFIX: &str = "_tree.dot";

/// Prefix of the files written by [`decompress_file`].
pub const UNCOMPRESSED_PREFIX: &str = "uncompressed_";

/// Which artifacts, besides the blob and the frequency table, [`compress_file`] writes.
#[derive(Clone, Copy, Debug)]
pub struct CompressOptions {
    pub mode: TokenMode,
    pub report: bool,
    pub tree: bool,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            mode: TokenMode::Char,
            report: true,
            tree: true,
        }
    }
}

/// The files written by [`compress_file`].
#[derive(Clone, Debug)]
pub struct CompressedFiles {
    pub blob: PathBuf,
    pub frequencies: PathBuf,
    pub report: Option<PathBuf>,
    pub tree: Option<PathBuf>,
    pub stats: CompressionStats,
}

/// The path of the frequency table that goes with the blob at `blob_path`.
pub fn frequencies_path(blob_path: &Path) -> PathBuf {
    let mut path = blob_path.as_os_str().to_owned();
    path.push(FREQUENCIES_SUFFIX);
    PathBuf::from(path)
}

fn file_name(path: &Path) -> Result<String> {
    match path.file_name() {
        Some(name) => Ok(name.to_string_lossy().into_owned()),
        None => bail!("'{}' does not name a file", path.display()),
    }
}

/// Persists `frequencies` as JSON at `path`.
pub fn store_frequencies(frequencies: &FrequencyTable, path: &Path) -> Result<()> {
    let json = frequencies.to_json()?;
    fs::write(path, json)
        .with_context(|| format!("Could not write the frequency table to '{}'", path.display()))
}

/// Loads a frequency table persisted by [`store_frequencies`].
pub fn load_frequencies(path: &Path) -> Result<FrequencyTable> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Could not read the frequency table '{}'", path.display()))?;
    FrequencyTable::from_json(&json)
        .with_context(|| format!("Could not load the frequency table '{}'", path.display()))
}

/// Compresses the text file at `path`, writing the results into `output_dir`.
pub fn compress_file(path: &Path, output_dir: &Path, options: CompressOptions) -> Result<CompressedFiles> {
    if !path.is_file() {
        bail!("File '{}' not found", path.display());
    }
    let name = file_name(path)?;
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read '{}' as UTF-8 text", path.display()))?;

    let compressed = compress(&text, options.mode)
        .with_context(|| format!("Could not compress '{}'", path.display()))?;

    let blob_path = output_dir.join(format!("{}.{}", name, BLOB_EXTENSION));
    fs::write(&blob_path, compressed.blob.to_bytes())
        .with_context(|| format!("Could not write '{}'", blob_path.display()))?;

    let freq_path = frequencies_path(&blob_path);
    store_frequencies(&compressed.frequencies, &freq_path)?;

    let report_path = if options.report {
        let report_path = output_dir.join(format!("{}{}", name, REPORT_SUFFIX));
        let file = File::create(&report_path)
            .with_context(|| format!("Could not create '{}'", report_path.display()))?;
        let mut writer = BufWriter::new(file);
        write_report(&compressed.stats, &mut writer)
            .and_then(|_| writer.flush())
            .with_context(|| format!("Could not write '{}'", report_path.display()))?;
        Some(report_path)
    } else {
        None
    };

    let tree_path = match (&compressed.tree, options.tree) {
        (Some(tree), true) => {
            let tree_path = output_dir.join(format!("{}{}", name, TREE_SUFFIX));
            fs::write(&tree_path, to_dot(tree))
                .with_context(|| format!("Could not write '{}'", tree_path.display()))?;
            Some(tree_path)
        }
        _ => None,
    };

    info!(
        "Compressed '{}' using {}-level Huffman coding into '{}'",
        path.display(),
        options.mode,
        blob_path.display()
    );

    Ok(CompressedFiles {
        blob: blob_path,
        frequencies: freq_path,
        report: report_path,
        tree: tree_path,
        stats: compressed.stats,
    })
}

/// Decompresses the blob at `path`, whose frequency table must sit next to it, writing the text
/// into `output_dir`. Returns the path of the written file.
pub fn decompress_file(path: &Path, output_dir: &Path, mode: TokenMode) -> Result<PathBuf> {
    if !path.is_file() {
        bail!("File '{}' not found", path.display());
    }
    let name = file_name(path)?;

    let data = fs::read(path).with_context(|| format!("Could not read '{}'", path.display()))?;
    let blob = PackedBlob::from_bytes(&data)
        .with_context(|| format!("Could not parse '{}'", path.display()))?;
    let frequencies = load_frequencies(&frequencies_path(path))?;

    let text = decompress(&blob, &frequencies, mode)
        .with_context(|| format!("Could not decompress '{}'", path.display()))?;

    let stem = name
        .strip_suffix(&format!(".{}", BLOB_EXTENSION))
        .unwrap_or(&name);
    let output_path = output_dir.join(format!("{}{}.txt", UNCOMPRESSED_PREFIX, stem));
    fs::write(&output_path, text)
        .with_context(|| format!("Could not write '{}'", output_path.display()))?;

    info!(
        "Decompressed '{}' using {} mode into '{}'",
        path.display(),
        mode,
        output_path.display()
    );

    Ok(output_path)
}
