//! Static Huffman compression of text, at character or whitespace-delimited word granularity.
//!
//! The [core](huffman) turns text into a frequency table, the table into a prefix tree, the tree
//! into a code table and the token stream into a byte-aligned [blob](huffman::packer::PackedBlob).
//! Decompression only needs the blob and the frequency table, since the tree is rebuilt from the
//! table deterministically.

use bitvec::prelude::*;

pub mod huffman;

pub mod dot;
pub mod report;
pub mod store;
pub mod utils;

/// The atomic unit being compressed: one code point in char mode, one word in word mode.
pub type Symbol = String;

/// The type representing the number of occurrences of a [`Symbol`].
pub type Freq = usize;

/// Index of a node inside the arena of a [`HuffmanTree`](huffman::tree::HuffmanTree).
pub type NodeId = usize;

/// An ordered sequence of bits, the first bit being the most significant one of the first byte.
pub type Bitstring = BitVec<u8, Msb0>;

/// How many bits a character is assumed to take in the uncompressed text.
pub const CHAR_ORIGINAL_BITS: usize = 8;

/// How many bits a word is assumed to take in the uncompressed text.
pub const WORD_ORIGINAL_BITS: usize = 16;

/// The biggest number of zero bits that can be appended to align a bitstring to a byte.
pub const MAX_PADDING: u8 = 7;
