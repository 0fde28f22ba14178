use bitvec::prelude::*;

use crate::huffman::code_table::CodeTable;
use crate::huffman::tree::{HuffNode, HuffmanTree};
use crate::huffman::{HuffmanError, Result};
use crate::{Bitstring, Symbol};

/// Appends the codes of the symbols it is fed with to a [`Bitstring`], in the same order.
pub struct HuffmanEncoder<'a> {
    table: &'a CodeTable,

    /// The bits written so far.
    bits: Bitstring,
}

impl<'a> HuffmanEncoder<'a> {
    pub fn new(table: &'a CodeTable) -> Self {
        Self {
            table,
            bits: Bitstring::new(),
        }
    }

    /// Encodes a single symbol.
    ///
    /// Fails with [`UnknownSymbol`](HuffmanError::UnknownSymbol) if the symbol has no code, which
    /// means the table was not derived from the stream being encoded.
    pub fn encode(&mut self, symbol: &str) -> Result<()> {
        let code = self
            .table
            .get(symbol)
            .ok_or_else(|| HuffmanError::UnknownSymbol(symbol.to_owned()))?;
        self.bits.extend_from_bitslice(code);
        Ok(())
    }

    pub fn encode_all(&mut self, symbols: &[Symbol]) -> Result<()> {
        for symbol in symbols {
            self.encode(symbol)?;
        }
        Ok(())
    }

    /// The number of bits written so far.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn into_bits(self) -> Bitstring {
        self.bits
    }
}

/// Walks a [`HuffmanTree`] bit by bit to recover the symbols of a [`Bitstring`].
pub struct HuffmanDecoder<'a> {
    tree: &'a HuffmanTree,
}

impl<'a> HuffmanDecoder<'a> {
    pub fn new(tree: &'a HuffmanTree) -> Self {
        Self { tree }
    }

    /// Decodes the whole bitstring.
    ///
    /// Starting from the root, a `0` moves to the left child and a `1` to the right one; every
    /// time a leaf is reached its symbol is emitted and the walk restarts from the root. Trailing
    /// bits that don't reach a leaf are dropped.
    ///
    /// A single-leaf tree has no branches: its symbol is emitted once per bit.
    pub fn decode_all(&self, bits: &BitSlice<u8, Msb0>) -> Vec<Symbol> {
        let root = self.tree.root();

        if let HuffNode::Leaf { symbol, .. } = self.tree.node(root) {
            return vec![symbol.clone(); bits.len()];
        }

        let mut decoded = Vec::new();
        let mut cursor = root;

        for bit in bits.iter().by_vals() {
            cursor = match self.tree.node(cursor) {
                HuffNode::Internal { left, right, .. } => {
                    if bit {
                        *right
                    } else {
                        *left
                    }
                }
                HuffNode::Leaf { .. } => unreachable!("the cursor is reset on every leaf"),
            };

            if let HuffNode::Leaf { symbol, .. } = self.tree.node(cursor) {
                decoded.push(symbol.clone());
                cursor = root;
            }
        }

        decoded
    }
}

/// Concatenates the codes of `tokens` in their original order.
pub fn encode(tokens: &[Symbol], table: &CodeTable) -> Result<Bitstring> {
    let mut encoder = HuffmanEncoder::new(table);
    encoder.encode_all(tokens)?;
    Ok(encoder.into_bits())
}

/// Recovers the symbols encoded in `bits` by walking `tree`.
pub fn decode(bits: &BitSlice<u8, Msb0>, tree: &HuffmanTree) -> Vec<Symbol> {
    HuffmanDecoder::new(tree).decode_all(bits)
}
