//! # letter_huffman
//!
//! Huffman prefix codes over case-folded ASCII letters.
//!
//! ## Quick Start
//!
//! ```rust
//! use letter_huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec::from_text("I have a dream")?;
//! let encoded = codec.encode("dream");
//!
//! println!("{} ({} bits)", encoded, encoded.bit_len());
//! assert_eq!(codec.decode(encoded.bits())?, "dream");
//! # Ok::<(), letter_huffman::HuffmanError>(())
//! ```

pub mod bit_vec;
pub mod code_table;
pub mod encoded;
pub mod frequency;
pub mod huffman_codec;
pub mod hufftree;
pub mod prefix_code;
pub mod report;

// Internal modules - not part of public API
mod min_heap;

// Re-export main types for convenience
pub use bit_vec::BitVec;
pub use code_table::CodeTable;
pub use encoded::EncodedText;
pub use frequency::{fold_symbol, FrequencyTable};
pub use huffman_codec::{CodecConfig, HuffmanCodec};
pub use hufftree::{HuffNode, HuffmanError, HuffmanTree};
pub use prefix_code::PrefixCode;
pub use report::{CodeReport, FrequencyReport};
