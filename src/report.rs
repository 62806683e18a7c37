//! Read-only summaries of a frequency table and a code table, for display.

use std::fmt;

use crate::code_table::CodeTable;
use crate::frequency::FrequencyTable;

#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyRow {
    pub symbol: u8,
    pub count: usize,
    pub percentage: f64,
}

/// Symbols by descending count, ties in symbol order.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyReport {
    pub total: usize,
    pub rows: Vec<FrequencyRow>,
}

impl FrequencyReport {
    pub fn new(table: &FrequencyTable) -> Self {
        let total = table.total();
        let mut rows: Vec<FrequencyRow> = table
            .iter()
            .map(|(symbol, count)| FrequencyRow {
                symbol,
                count,
                percentage: count as f64 / total as f64 * 100.0,
            })
            .collect();
        // stable sort keeps ascending symbol order among equal counts
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        FrequencyReport { total, rows }
    }
}

impl fmt::Display for FrequencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Letter frequencies ({} letters):", self.total)?;
        for row in &self.rows {
            writeln!(
                f,
                "{}: {} ({:.2}%)",
                row.symbol as char, row.count, row.percentage
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRow {
    pub symbol: u8,
    pub code: String,
}

/// Codes ordered by length, then lexicographically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeReport {
    pub rows: Vec<CodeRow>,
}

impl CodeReport {
    pub fn new(table: &CodeTable) -> Self {
        let rows = table
            .sorted_by_length()
            .into_iter()
            .map(|(symbol, code)| CodeRow { symbol, code })
            .collect();
        CodeReport { rows }
    }
}

impl fmt::Display for CodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Huffman code table:")?;
        for row in &self.rows {
            writeln!(
                f,
                "{}: {} (length: {})",
                row.symbol as char,
                row.code,
                row.code.len()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::hufftree::HuffmanTree;

    #[test]
    fn test_frequency_report_orders_by_count() {
        let report = FrequencyReport::new(&FrequencyTable::from_text("abbcccdd"));
        let order: Vec<u8> = report.rows.iter().map(|r| r.symbol).collect();
        assert_eq!(order, b"cbda".to_vec());
        assert_eq!(report.total, 8);
        assert!((report.rows[0].percentage - 37.5).abs() < 1e-9);
        assert!(report.to_string().contains("c: 3 (37.50%)"));
    }

    #[test]
    fn test_empty_frequency_report() {
        let report = FrequencyReport::new(&FrequencyTable::default());
        assert!(report.rows.is_empty());
        assert_eq!(report.total, 0);
    }

    #[test]
    fn test_code_report_rows() {
        let table: FrequencyTable = [(b'a', 5), (b'b', 2), (b'c', 1), (b'd', 1)]
            .into_iter()
            .collect();
        let codes = HuffmanTree::build(&table).unwrap().generate_table();
        let report = CodeReport::new(&codes);

        let rendered: Vec<(char, &str)> = report
            .rows
            .iter()
            .map(|r| (r.symbol as char, r.code.as_str()))
            .collect();
        assert_eq!(
            rendered,
            vec![('a', "1"), ('b', "00"), ('c', "010"), ('d', "011")]
        );
        assert!(report.to_string().contains("d: 011 (length: 3)"));
    }
}
