use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::huffman::{HuffmanError, Result};
use crate::utils::entropy;
use crate::{Freq, Symbol, CHAR_ORIGINAL_BITS, WORD_ORIGINAL_BITS};

/// The granularity at which the text is split into [symbols](Symbol).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TokenMode {
    /// One symbol per code point.
    #[default]
    Char,
    /// One symbol per whitespace-delimited word. Separators are not retained.
    Word,
}

impl TokenMode {
    /// Bits per token assumed for the uncompressed text when computing the compression ratio.
    pub fn original_bits_per_token(&self) -> usize {
        match self {
            TokenMode::Char => CHAR_ORIGINAL_BITS,
            TokenMode::Word => WORD_ORIGINAL_BITS,
        }
    }

    pub fn level_name(&self) -> &'static str {
        match self {
            TokenMode::Char => "Character-Level",
            TokenMode::Word => "Word-Level",
        }
    }
}

impl fmt::Display for TokenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenMode::Char => write!(f, "char"),
            TokenMode::Word => write!(f, "word"),
        }
    }
}

impl FromStr for TokenMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "char" => Ok(TokenMode::Char),
            "word" => Ok(TokenMode::Word),
            other => Err(format!("invalid encoding mode '{}', use 'char' or 'word'", other)),
        }
    }
}

/// Splits `text` into the sequence of symbols to encode, in their original order.
///
/// In [word](TokenMode::Word) mode runs of whitespace act as a single separator and empty tokens
/// are discarded, so the original spacing can't be recovered.
pub fn tokenize(text: &str, mode: TokenMode) -> Vec<Symbol> {
    match mode {
        TokenMode::Char => text.chars().map(Symbol::from).collect(),
        TokenMode::Word => text.split_whitespace().map(Symbol::from).collect(),
    }
}

/// Counts the occurrences of every distinct symbol in `tokens`. Empty input yields an empty table.
pub fn count(tokens: &[Symbol]) -> FrequencyTable {
    let mut builder = FrequencyTableBuilder::default();
    for token in tokens {
        builder.push_symbol(token);
    }
    builder.build()
}

/// Accumulates the frequencies of the symbols pushed into it, one at a time.
#[derive(Default)]
pub struct FrequencyTableBuilder {
    counts: BTreeMap<Symbol, Freq>,
}

impl FrequencyTableBuilder {
    pub fn push_symbol(&mut self, symbol: &str) {
        match self.counts.get_mut(symbol) {
            Some(freq) => *freq += 1,
            None => {
                self.counts.insert(symbol.to_owned(), 1);
            }
        }
    }

    pub fn build(self) -> FrequencyTable {
        FrequencyTable {
            counts: self.counts,
        }
    }
}

/// Maps every distinct [`Symbol`] of a token stream to its number of occurrences.
///
/// Every stored count is at least 1 and their sum equals the length of the token stream. Symbols
/// are kept sorted, which is what makes the tree built from this table reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, Freq>,
}

impl FrequencyTable {
    /// Creates a table from raw counts, rejecting any count lower than 1.
    pub fn from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Symbol, i64)>,
    {
        let mut table = BTreeMap::new();
        for (symbol, freq) in counts {
            if freq < 1 {
                return Err(HuffmanError::MalformedFrequencyTable(format!(
                    "symbol {:?} has non-positive count {}",
                    symbol, freq
                )));
            }
            table.insert(symbol, freq as Freq);
        }
        Ok(Self { counts: table })
    }

    pub fn get(&self, symbol: &str) -> Option<Freq> {
        self.counts.get(symbol).copied()
    }

    /// The number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The sum of all the counts, i.e. the length of the token stream the table was built from.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterates over `(symbol, frequency)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, Freq)> + '_ {
        self.counts.iter().map(|(symbol, freq)| (symbol, *freq))
    }

    /// The symbol with the highest count. Ties go to the smallest symbol.
    pub fn most_frequent(&self) -> Option<(&Symbol, Freq)> {
        self.iter()
            .fold(None, |best, (symbol, freq)| match best {
                Some((_, best_freq)) if best_freq >= freq => best,
                _ => Some((symbol, freq)),
            })
    }

    /// The symbol with the lowest count. Ties go to the smallest symbol.
    pub fn least_frequent(&self) -> Option<(&Symbol, Freq)> {
        self.iter()
            .fold(None, |best, (symbol, freq)| match best {
                Some((_, best_freq)) if best_freq <= freq => best,
                _ => Some((symbol, freq)),
            })
    }

    /// The Shannon entropy of the distribution, in bits per symbol. Zero for an empty table.
    pub fn entropy(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let distr = self.counts.values().copied().collect::<Vec<_>>();
        entropy(&distr, self.total() as f64)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| HuffmanError::MalformedFrequencyTable(e.to_string()))
    }

    /// Parses a table persisted with [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<Symbol, i64> = serde_json::from_str(json)
            .map_err(|e| HuffmanError::MalformedFrequencyTable(e.to_string()))?;
        Self::from_counts(raw)
    }
}
