use std::cmp::Ordering;
use std::fmt::Write;

use log::{debug, trace};
use thiserror::Error;

use crate::bit_vec::BitVec;
use crate::code_table::CodeTable;
use crate::frequency::FrequencyTable;
use crate::huffman_codec::CodecConfig;
use crate::min_heap::{HeapErr, MinHeap};
use crate::prefix_code::PrefixCode;

#[derive(Debug, Error)]
pub enum HuffmanError {
    #[error("priority queue failure: {0}")]
    HeapError(#[from] HeapErr),
    #[error("no tree was built: the frequency table is empty")]
    NoTree,
    #[error("bit stream ended inside a code after {consumed} bits")]
    TruncatedCode { consumed: usize },
    #[error("bit {offset} does not match the single-symbol code")]
    InvalidCode { offset: usize },
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        weight: usize,
        symbol: u8,
    },
    Internal {
        weight: usize,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn new(symbol: u8, weight: usize) -> Self {
        HuffNode::Leaf { weight, symbol }
    }

    pub fn weight(&self) -> usize {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    /// `a` becomes the left child, `b` the right.
    pub fn merge(a: Self, b: Self) -> Self {
        let weight = a.weight() + b.weight();
        HuffNode::Internal {
            weight,
            left: Box::new(a),
            right: Box::new(b),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    pub fn internal_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => {
                1 + left.internal_count() + right.internal_count()
            }
        }
    }

    fn generate_table(&self, code_table: &mut CodeTable, code: PrefixCode) {
        match self {
            HuffNode::Leaf { symbol, .. } => {
                code_table.insert(*symbol, code);
            }
            HuffNode::Internal { left, right, .. } => {
                // Left = 0, Right = 1
                left.generate_table(code_table, code.child(false));
                right.generate_table(code_table, code.child(true));
            }
        }
    }

    fn render(&self, out: &mut String, depth: usize, label: &str) {
        let indent = "  ".repeat(depth);
        match self {
            HuffNode::Leaf { symbol, weight } => {
                let _ = writeln!(
                    out,
                    "{}{}-> Leaf: '{}' [weight: {}]",
                    indent, label, *symbol as char, weight
                );
            }
            HuffNode::Internal {
                weight,
                left,
                right,
            } => {
                let _ = writeln!(out, "{}{}-> Internal [weight: {}]", indent, label, weight);
                left.render(out, depth + 1, "L");
                right.render(out, depth + 1, "R");
            }
        }
    }
}

/// Heap slot: ordered by weight, ties broken by insertion sequence.
#[derive(Debug)]
struct HeapEntry {
    weight: usize,
    seq: usize,
    node: HuffNode,
}

impl HeapEntry {
    fn key(&self) -> (usize, usize) {
        (self.weight, self.seq)
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Option<HuffNode>,
    config: CodecConfig,
}

impl HuffmanTree {
    pub fn build(table: &FrequencyTable) -> Result<Self, HuffmanError> {
        Self::build_with(table, &CodecConfig::default())
    }

    /// Greedy construction. Leaves are seeded in ascending symbol order, so
    /// equal weights resolve to whichever node entered the heap first.
    pub fn build_with(table: &FrequencyTable, config: &CodecConfig) -> Result<Self, HuffmanError> {
        if table.is_empty() {
            debug!("empty frequency table, no tree built");
            return Ok(HuffmanTree {
                root: None,
                config: *config,
            });
        }

        let seeds: Vec<HeapEntry> = table
            .iter()
            .enumerate()
            .map(|(seq, (symbol, count))| HeapEntry {
                weight: count,
                seq,
                node: HuffNode::new(symbol, count),
            })
            .collect();
        let mut next_seq = seeds.len();
        let mut heap = MinHeap::build(seeds);

        while heap.heap_size() > 1 {
            let x = heap.extract_min()?;
            let y = heap.extract_min()?;
            trace!("merge {} + {} (seq {}, {})", x.weight, y.weight, x.seq, y.seq);

            let node = HuffNode::merge(x.node, y.node);
            heap.insert(HeapEntry {
                weight: node.weight(),
                seq: next_seq,
                node,
            });
            next_seq += 1;
        }

        let root = heap.extract_min()?.node;
        debug!(
            "built huffman tree: {} symbols, root weight {}",
            table.len(),
            root.weight()
        );
        Ok(HuffmanTree {
            root: Some(root),
            config: *config,
        })
    }

    pub fn root(&self) -> Option<&HuffNode> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.as_ref().map_or(0, HuffNode::leaf_count)
    }

    pub fn internal_count(&self) -> usize {
        self.root.as_ref().map_or(0, HuffNode::internal_count)
    }

    pub fn generate_table(&self) -> CodeTable {
        let mut table = CodeTable::default();
        let empty = PrefixCode::with_capacity(self.config.code_capacity_bits);
        match &self.root {
            None => {}
            // a lone leaf still needs one bit so encoded output has length
            Some(HuffNode::Leaf { symbol, .. }) => {
                table.insert(*symbol, empty.child(self.config.single_symbol_bit));
            }
            Some(root) => root.generate_table(&mut table, empty),
        }
        table
    }

    /// Walks from the root starting at bit `start` of `bits`.
    ///
    /// Returns the decoded symbol and the index just past its code.
    pub fn decode_symbol(&self, bits: &BitVec, start: usize) -> Result<(u8, usize), HuffmanError> {
        let root = self.root.as_ref().ok_or(HuffmanError::NoTree)?;
        let mut bit_index = start;

        if let HuffNode::Leaf { symbol, .. } = root {
            if bit_index >= bits.len() {
                return Err(HuffmanError::TruncatedCode { consumed: 0 });
            }
            if bits.test(bit_index) != self.config.single_symbol_bit {
                return Err(HuffmanError::InvalidCode { offset: bit_index });
            }
            return Ok((*symbol, bit_index + 1));
        }

        let mut current_node = root;
        loop {
            match current_node {
                HuffNode::Leaf { symbol, .. } => return Ok((*symbol, bit_index)),
                HuffNode::Internal { left, right, .. } => {
                    if bit_index >= bits.len() {
                        return Err(HuffmanError::TruncatedCode {
                            consumed: bit_index - start,
                        });
                    }
                    let bit = bits.test(bit_index);
                    bit_index += 1;
                    current_node = if bit { right } else { left };
                }
            }
        }
    }

    /// Indented dump of the tree, one node per line.
    pub fn render_structure(&self) -> String {
        let mut out = String::from("Huffman Tree Structure:\n");
        match &self.root {
            Some(root) => root.render(&mut out, 0, "root"),
            None => out.push_str("(empty)\n"),
        }
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn table(counts: &[(u8, usize)]) -> FrequencyTable {
        counts.iter().copied().collect()
    }

    fn bits(s: &str) -> BitVec {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_textbook_merge_order() {
        let tree = HuffmanTree::build(&table(&[(b'a', 5), (b'b', 2), (b'c', 1), (b'd', 1)])).unwrap();

        // (c,d)->2, then (b,(c,d))->4, then ((b,(c,d)),a)->9
        let cd = HuffNode::merge(HuffNode::new(b'c', 1), HuffNode::new(b'd', 1));
        let bcd = HuffNode::merge(HuffNode::new(b'b', 2), cd);
        let expected = HuffNode::merge(bcd, HuffNode::new(b'a', 5));
        assert_eq!(tree.root(), Some(&expected));

        let codes = tree.generate_table();
        assert_eq!(codes.code_string(b'a'), "1");
        assert_eq!(codes.code_string(b'b'), "00");
        assert_eq!(codes.code_string(b'c'), "010");
        assert_eq!(codes.code_string(b'd'), "011");
    }

    #[test]
    fn test_node_counts() {
        let tree = HuffmanTree::build(&FrequencyTable::from_text("the quick brown fox")).unwrap();
        let k = FrequencyTable::from_text("the quick brown fox").len();
        assert_eq!(tree.leaf_count(), k);
        assert_eq!(tree.internal_count(), k - 1);
        assert_eq!(tree.root().map(HuffNode::weight), Some(16));
    }

    #[test]
    fn test_empty_table_has_no_tree() {
        let tree = HuffmanTree::build(&FrequencyTable::default()).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.leaf_count(), 0);
        assert!(tree.generate_table().is_empty());
        assert!(matches!(
            tree.decode_symbol(&bits("0"), 0),
            Err(HuffmanError::NoTree)
        ));
        assert!(tree.render_structure().contains("(empty)"));
    }

    #[test]
    fn test_single_symbol_gets_one_bit() {
        let tree = HuffmanTree::build(&table(&[(b'q', 7)])).unwrap();
        assert_eq!(tree.internal_count(), 0);
        assert_eq!(tree.generate_table().code_string(b'q'), "0");
        assert_eq!(tree.decode_symbol(&bits("00"), 1).unwrap(), (b'q', 2));
        assert!(matches!(
            tree.decode_symbol(&bits("1"), 0),
            Err(HuffmanError::InvalidCode { offset: 0 })
        ));

        let config = CodecConfig {
            single_symbol_bit: true,
            ..CodecConfig::default()
        };
        let tree = HuffmanTree::build_with(&table(&[(b'q', 7)]), &config).unwrap();
        assert_eq!(tree.generate_table().code_string(b'q'), "1");
    }

    #[test]
    fn test_ties_resolve_by_symbol_order() {
        let tree = HuffmanTree::build(&table(&[(b'x', 1), (b'y', 1), (b'z', 1)])).unwrap();
        let codes = tree.generate_table();
        // x and y merge first, then z (weight 1) is lighter than (x,y)
        assert_eq!(codes.code_string(b'z'), "0");
        assert_eq!(codes.code_string(b'x'), "10");
        assert_eq!(codes.code_string(b'y'), "11");
    }

    #[test]
    fn test_decode_symbol_walks_and_reports_truncation() {
        let tree = HuffmanTree::build(&table(&[(b'a', 5), (b'b', 2), (b'c', 1), (b'd', 1)])).unwrap();
        let stream = bits("011100");
        assert_eq!(tree.decode_symbol(&stream, 0).unwrap(), (b'd', 3));
        assert_eq!(tree.decode_symbol(&stream, 3).unwrap(), (b'a', 4));
        assert_eq!(tree.decode_symbol(&stream, 4).unwrap(), (b'b', 6));

        assert!(matches!(
            tree.decode_symbol(&bits("01"), 0),
            Err(HuffmanError::TruncatedCode { consumed: 2 })
        ));
    }

    #[test]
    fn test_render_structure() {
        let tree = HuffmanTree::build(&table(&[(b'a', 2), (b'b', 1)])).unwrap();
        let dump = tree.render_structure();
        assert!(dump.contains("root-> Internal [weight: 3]"));
        assert!(dump.contains("  L-> Leaf: 'b' [weight: 1]"));
        assert!(dump.contains("  R-> Leaf: 'a' [weight: 2]"));
    }
}
