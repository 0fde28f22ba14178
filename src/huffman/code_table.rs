use std::collections::HashMap;

use bitvec::prelude::*;
use itertools::Itertools;

use crate::huffman::frequency::FrequencyTable;
use crate::huffman::tree::{HuffNode, HuffmanTree};
use crate::{Bitstring, NodeId, Symbol};

/// Maps every symbol of a [`HuffmanTree`] to its code, i.e. the path from the root to its leaf
/// where a left turn is a `0` and a right turn is a `1`.
///
/// Codes are leaf paths of a strict binary tree, hence the table is prefix-free.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<Symbol, Bitstring>,
}

impl CodeTable {
    /// Assigns a code to every leaf of `tree`.
    ///
    /// When the root itself is a leaf its natural path is empty, so the sole symbol gets the
    /// one-bit code `0`.
    pub fn generate(tree: &HuffmanTree) -> Self {
        let mut codes = HashMap::with_capacity(tree.leaf_count());

        if let HuffNode::Leaf { symbol, .. } = tree.node(tree.root()) {
            codes.insert(symbol.clone(), bitvec![u8, Msb0; 0]);
            return Self { codes };
        }

        let mut stack: Vec<(NodeId, Bitstring)> = vec![(tree.root(), Bitstring::new())];

        while let Some((id, path)) = stack.pop() {
            match tree.node(id) {
                HuffNode::Leaf { symbol, .. } => {
                    codes.insert(symbol.clone(), path);
                }
                HuffNode::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    stack.push((*right, right_path));

                    let mut left_path = path;
                    left_path.push(false);
                    stack.push((*left, left_path));
                }
            }
        }

        Self { codes }
    }

    pub fn get(&self, symbol: &str) -> Option<&BitSlice<u8, Msb0>> {
        self.codes.get(symbol).map(|code| code.as_bitslice())
    }

    pub fn code_length(&self, symbol: &str) -> Option<usize> {
        self.codes.get(symbol).map(|code| code.len())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates over `(symbol, code)` pairs sorted by code length, then by code.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &BitSlice<u8, Msb0>)> + '_ {
        self.codes
            .iter()
            .sorted_unstable_by(|(_, a), (_, b)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
            .map(|(symbol, code)| (symbol, code.as_bitslice()))
    }

    /// The length of the bitstring obtained by encoding the token stream `frequencies` was built
    /// from, that is the sum over all symbols of frequency times code length.
    pub fn encoded_bits(&self, frequencies: &FrequencyTable) -> usize {
        frequencies
            .iter()
            .map(|(symbol, freq)| freq * self.code_length(symbol).unwrap_or(0))
            .sum()
    }

    /// Checks that no code is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        // once sorted, a code that is a prefix of others is immediately followed by one of them.
        self.codes
            .values()
            .sorted_unstable()
            .tuple_windows()
            .all(|(a, b)| !b.starts_with(a.as_bitslice()))
    }
}

/// Renders a code as a string of `0` and `1`.
pub fn code_to_string(code: &BitSlice<u8, Msb0>) -> String {
    code.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}
