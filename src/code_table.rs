use std::collections::BTreeMap;

use crate::prefix_code::PrefixCode;

/// Symbol to prefix code mapping, derived once from a built tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, PrefixCode>,
}

impl CodeTable {
    pub(crate) fn insert(&mut self, symbol: u8, code: PrefixCode) {
        self.codes.insert(symbol, code);
    }

    pub fn get(&self, symbol: u8) -> Option<&PrefixCode> {
        self.codes.get(&symbol)
    }

    /// Printable code for `symbol`, empty if it has none.
    pub fn code_string(&self, symbol: u8) -> String {
        self.get(symbol).map(PrefixCode::to_string).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &PrefixCode)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Entries ordered by code length, then by code string.
    pub fn sorted_by_length(&self) -> Vec<(u8, String)> {
        let mut rows: Vec<(u8, String)> = self
            .iter()
            .map(|(symbol, code)| (symbol, code.to_string()))
            .collect();
        rows.sort_by(|(_, a), (_, b)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        rows
    }
}
