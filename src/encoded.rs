use std::fmt;

use crate::bit_vec::BitVec;

/// Output of one encode call: the concatenated code bits plus enough about
/// the source to compare against plain 8-bit characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedText {
    pub(crate) bits: BitVec,
    pub(crate) source_len: usize,
}

impl EncodedText {
    pub fn bits(&self) -> &BitVec {
        &self.bits
    }

    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Byte length of the text that was encoded, skipped characters included.
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Bits the source would take at one byte per character.
    pub fn baseline_bits(&self) -> usize {
        self.source_len * 8
    }

    /// Percentage saved against the 8-bit baseline. Zero for empty input.
    pub fn compression_ratio(&self) -> f64 {
        if self.source_len == 0 {
            return 0.0;
        }
        (1.0 - self.bit_len() as f64 / self.baseline_bits() as f64) * 100.0
    }
}

impl fmt::Display for EncodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.bits.fmt(f)
    }
}
