use std::collections::btree_map::{self, BTreeMap};

/// Symbol occurrence counts for one input
///
/// Built in a single pass and immutable afterwards. Iteration is in symbol order, which is what
/// makes tree construction deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
}

impl FrequencyTable {
    /// Count every symbol of `text`
    pub fn from_text(text: &str) -> Self {
        Self::from_symbols(text.chars())
    }

    /// Count every symbol produced by `symbols`
    pub fn from_symbols<I: IntoIterator<Item = char>>(symbols: I) -> Self {
        let mut counts = BTreeMap::new();
        for symbol in symbols {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `symbol` (0 if absent)
    pub fn get(&self, symbol: char) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total symbols counted
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// `(symbol, count)` pairs in symbol order
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a char, &'a u64);
    type IntoIter = btree_map::Iter<'a, char, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
