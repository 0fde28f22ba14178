pub mod code_table;
pub mod codec;
pub mod frequency;
pub mod packer;
pub mod tree;

use log::info;
use thiserror::Error;

use crate::huffman::code_table::{code_to_string, CodeTable};
use crate::huffman::frequency::{count, tokenize, FrequencyTable, TokenMode};
use crate::huffman::packer::{pack, PackedBlob};
use crate::huffman::tree::HuffmanTree;
use crate::{Freq, Symbol};

/// The ways a single compression or decompression can fail. None of them is recovered from.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// The encoder met a symbol the code table doesn't know, so the table was derived from a
    /// different token stream.
    #[error("symbol {0:?} has no code in the code table")]
    UnknownSymbol(Symbol),

    #[error("invalid padding count {padding} for a stream of {available} bits")]
    InvalidPadding { padding: u8, available: usize },

    #[error("malformed frequency table: {0}")]
    MalformedFrequencyTable(String),

    #[error("the compressed blob has no padding byte")]
    EmptyBlob,
}

pub type Result<T> = std::result::Result<T, HuffmanError>;

/// One row of the symbol table of a [`CompressionStats`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolStats {
    pub symbol: Symbol,
    pub frequency: Freq,
    /// The code rendered as a string of `0` and `1`.
    pub code: String,
    /// Frequency times code length.
    pub bits_used: usize,
}

/// Read-only figures describing a compression.
#[derive(Clone, Debug, PartialEq)]
pub struct CompressionStats {
    pub mode: TokenMode,
    /// One entry per distinct symbol, sorted by code length, then by code.
    pub entries: Vec<SymbolStats>,
    pub token_count: usize,
    pub unique_symbols: usize,
    /// The estimated size of the uncompressed text: a fixed number of bits per token.
    pub original_bits: usize,
    pub compressed_bits: usize,
    pub most_frequent: Option<(Symbol, Freq)>,
    pub least_frequent: Option<(Symbol, Freq)>,
}

impl CompressionStats {
    pub fn new(mode: TokenMode, frequencies: &FrequencyTable, table: &CodeTable) -> Self {
        let entries = table
            .iter()
            .map(|(symbol, code)| {
                let frequency = frequencies.get(symbol).unwrap_or(0);
                SymbolStats {
                    symbol: symbol.clone(),
                    frequency,
                    code: code_to_string(code),
                    bits_used: frequency * code.len(),
                }
            })
            .collect::<Vec<_>>();

        Self {
            mode,
            token_count: frequencies.total(),
            unique_symbols: frequencies.len(),
            original_bits: frequencies.total() * mode.original_bits_per_token(),
            compressed_bits: entries.iter().map(|entry| entry.bits_used).sum(),
            most_frequent: frequencies
                .most_frequent()
                .map(|(symbol, freq)| (symbol.clone(), freq)),
            least_frequent: frequencies
                .least_frequent()
                .map(|(symbol, freq)| (symbol.clone(), freq)),
            entries,
        }
    }

    /// The percentage of bits saved with respect to the original size. Zero for empty input.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_bits == 0 {
            return 0.0;
        }
        (1.0 - self.compressed_bits as f64 / self.original_bits as f64) * 100.0
    }
}

/// Everything produced by [`compress`]: the blob and the frequency table are what must be
/// persisted to decompress later on.
#[derive(Clone, Debug)]
pub struct Compressed {
    pub blob: PackedBlob,
    pub frequencies: FrequencyTable,
    pub stats: CompressionStats,
    /// The tree the codes were derived from. `None` for empty input.
    pub tree: Option<HuffmanTree>,
}

/// Compresses `text` with codes derived from its own symbol frequencies.
pub fn compress(text: &str, mode: TokenMode) -> Result<Compressed> {
    let tokens = tokenize(text, mode);
    let frequencies = count(&tokens);

    let (tree, table) = if frequencies.is_empty() {
        (None, CodeTable::default())
    } else {
        let tree = HuffmanTree::build(&frequencies)?;
        let table = CodeTable::generate(&tree);
        (Some(tree), table)
    };

    let bits = codec::encode(&tokens, &table)?;
    let blob = pack(&bits);
    let stats = CompressionStats::new(mode, &frequencies, &table);

    info!(
        "Compressed {} tokens ({} distinct) into {} bits, ratio {:.2}%",
        stats.token_count,
        stats.unique_symbols,
        bits.len(),
        stats.compression_ratio()
    );

    Ok(Compressed {
        blob,
        frequencies,
        stats,
        tree,
    })
}

/// Recovers the text compressed in `blob`, rebuilding the tree from `frequencies`.
///
/// In [word](TokenMode::Word) mode the words are joined by a single space.
pub fn decompress(blob: &PackedBlob, frequencies: &FrequencyTable, mode: TokenMode) -> Result<String> {
    let bits = blob.unpack()?;

    if frequencies.is_empty() {
        if bits.is_empty() {
            return Ok(String::new());
        }
        return Err(HuffmanError::MalformedFrequencyTable(format!(
            "an empty table cannot decode {} bits",
            bits.len()
        )));
    }

    let tree = HuffmanTree::build(frequencies)?;
    let symbols = codec::decode(&bits, &tree);

    Ok(match mode {
        TokenMode::Char => symbols.concat(),
        TokenMode::Word => symbols.join(" "),
    })
}
