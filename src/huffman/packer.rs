use bitvec::prelude::*;

use crate::huffman::{HuffmanError, Result};
use crate::{Bitstring, MAX_PADDING};

/// A bitstring packed into bytes, together with the number of zero bits appended to its end to
/// reach a byte boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackedBlob {
    /// How many trailing bits of the last byte are padding, in `[0, 7]`.
    pub padding: u8,

    /// The packed bits, most significant bit first.
    pub bytes: Vec<u8>,
}

impl PackedBlob {
    /// The number of bits of the original bitstring.
    pub fn bit_len(&self) -> usize {
        (self.bytes.len() * 8).saturating_sub(self.padding as usize)
    }

    /// Serializes the blob: the padding count in the first byte, followed by the packed bits.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.bytes.len() + 1);
        out.push(self.padding);
        out.extend_from_slice(&self.bytes);
        out
    }

    /// Parses a blob written by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let (&padding, bytes) = data.split_first().ok_or(HuffmanError::EmptyBlob)?;
        check_padding(padding, bytes.len() * 8)?;

        Ok(Self {
            padding,
            bytes: bytes.to_vec(),
        })
    }

    pub fn unpack(&self) -> Result<Bitstring> {
        unpack(&self.bytes, self.padding)
    }
}

/// Packs `bits` into bytes, most significant bit first, appending zero bits up to the next
/// multiple of 8. An already aligned bitstring gets no padding at all.
pub fn pack(bits: &BitSlice<u8, Msb0>) -> PackedBlob {
    let padding = ((8 - bits.len() % 8) % 8) as u8;
    let bytes = bits
        .chunks(8)
        .map(|chunk| {
            let byte = chunk
                .iter()
                .by_vals()
                .fold(0_u8, |byte, bit| (byte << 1) | bit as u8);
            byte << (8 - chunk.len())
        })
        .collect();

    PackedBlob { padding, bytes }
}

/// Expands `bytes` to bits, most significant bit first, then drops the last `padding` bits.
pub fn unpack(bytes: &[u8], padding: u8) -> Result<Bitstring> {
    check_padding(padding, bytes.len() * 8)?;

    let mut bits = Bitstring::from_slice(bytes);
    bits.truncate(bits.len() - padding as usize);
    Ok(bits)
}

fn check_padding(padding: u8, available: usize) -> Result<()> {
    if padding > MAX_PADDING || padding as usize > available {
        return Err(HuffmanError::InvalidPadding { padding, available });
    }
    Ok(())
}
