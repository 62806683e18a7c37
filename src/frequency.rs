use std::collections::BTreeMap;

/// Case-folds `c` to a lowercase ASCII letter, or `None` for anything else.
///
/// Counting and encoding both filter through this so they agree on which
/// characters are symbols.
pub fn fold_symbol(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_lowercase() as u8)
    } else {
        None
    }
}

/// Occurrence count per case-folded letter in a text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, usize>,
}

impl FrequencyTable {
    pub fn from_text(text: &str) -> Self {
        let counts = text
            .chars()
            .filter_map(fold_symbol)
            .fold(BTreeMap::new(), |mut acc, symbol| {
                *acc.entry(symbol).or_insert(0) += 1;
                acc
            });
        FrequencyTable { counts }
    }

    pub fn get(&self, symbol: u8) -> Option<usize> {
        self.counts.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    pub fn symbols(&self) -> impl Iterator<Item = u8> + '_ {
        self.counts.keys().copied()
    }
}

impl FromIterator<(u8, usize)> for FrequencyTable {
    /// Builds a table from explicit counts. Zero counts are dropped and
    /// symbols are not case-folded.
    fn from_iter<I: IntoIterator<Item = (u8, usize)>>(iter: I) -> Self {
        let counts = iter.into_iter().filter(|&(_, count)| count > 0).collect();
        FrequencyTable { counts }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_counts_case_folded_letters_only() {
        let table = FrequencyTable::from_text("Aa, b! 42 B?");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(b'a'), Some(2));
        assert_eq!(table.get(b'b'), Some(2));
        assert_eq!(table.get(b'A'), None);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn test_no_letters_yields_empty_table() {
        assert!(FrequencyTable::from_text("").is_empty());
        assert!(FrequencyTable::from_text("123 ... \n\t!").is_empty());
    }

    #[test]
    fn test_non_ascii_letters_are_inert() {
        let table = FrequencyTable::from_text("éxé ßx");
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![(b'x', 2)]);
    }

    #[test]
    fn test_iter_is_symbol_ordered() {
        let table = FrequencyTable::from_text("cabbage");
        let symbols: Vec<u8> = table.symbols().collect();
        assert_eq!(symbols, b"abceg".to_vec());
    }

    #[test]
    fn test_from_counts_drops_zeroes() {
        let table: FrequencyTable = [(b'a', 3), (b'b', 0)].into_iter().collect();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(b'b'), None);
    }
}
