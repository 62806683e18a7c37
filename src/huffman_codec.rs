use std::fs;
use std::path::Path;

use log::debug;

use crate::bit_vec::BitVec;
use crate::code_table::CodeTable;
use crate::encoded::EncodedText;
use crate::frequency::{fold_symbol, FrequencyTable};
use crate::hufftree::{HuffmanError, HuffmanTree};

/// Tuning knobs for tree and code construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Bit used as the one-bit code when the table holds a single symbol.
    pub single_symbol_bit: bool,
    /// Initial capacity requested for each code's bit storage.
    pub code_capacity_bits: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            single_symbol_bit: false,
            code_capacity_bits: 8,
        }
    }
}

pub struct HuffmanCodec {
    frequencies: FrequencyTable,
    tree: HuffmanTree,
    encode_table: CodeTable,
}

impl HuffmanCodec {
    pub fn new(frequencies: FrequencyTable) -> Result<Self, HuffmanError> {
        Self::with_config(frequencies, CodecConfig::default())
    }

    pub fn with_config(
        frequencies: FrequencyTable,
        config: CodecConfig,
    ) -> Result<Self, HuffmanError> {
        let tree = HuffmanTree::build_with(&frequencies, &config)?;
        let encode_table = tree.generate_table();
        Ok(HuffmanCodec {
            frequencies,
            tree,
            encode_table,
        })
    }

    /// Counts the letters of `text` and builds codes from them.
    pub fn from_text(text: &str) -> Result<Self, HuffmanError> {
        Self::new(FrequencyTable::from_text(text))
    }

    pub fn from_file(path: &Path) -> Result<Self, HuffmanError> {
        let text = fs::read_to_string(path)?;
        debug!("read {} bytes of corpus from {}", text.len(), path.display());
        Self::from_text(&text)
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn table(&self) -> &CodeTable {
        &self.encode_table
    }

    /// Printable code for `c` after case-folding; empty if `c` has no code.
    pub fn code(&self, c: char) -> String {
        fold_symbol(c)
            .map(|symbol| self.encode_table.code_string(symbol))
            .unwrap_or_default()
    }

    /// Concatenates the code of every letter in `text`.
    ///
    /// Non-letters and letters outside the table contribute nothing.
    pub fn encode(&self, text: &str) -> EncodedText {
        let mut bit_vec = BitVec::new();
        for symbol in text.chars().filter_map(fold_symbol) {
            if let Some(code) = self.encode_table.get(symbol) {
                bit_vec.extend_from(code.bits());
            }
        }
        EncodedText {
            bits: bit_vec,
            source_len: text.len(),
        }
    }

    /// Inverse of `encode`, yielding lowercase letters only.
    pub fn decode(&self, bits: &BitVec) -> Result<String, HuffmanError> {
        if self.tree.is_empty() {
            return if bits.is_empty() {
                Ok(String::new())
            } else {
                Err(HuffmanError::NoTree)
            };
        }

        let mut result = String::new();
        let mut bit_index = 0;
        while bit_index < bits.len() {
            let (symbol, next) = self.tree.decode_symbol(bits, bit_index)?;
            result.push(symbol as char);
            bit_index = next;
        }
        Ok(result)
    }
}
