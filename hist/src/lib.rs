use std::collections::HashMap;

use common::Symbol;
use log::log_enabled;
use log::Level::Trace;
use log::*;

/// Occurrence counts per symbol.
///
/// Iteration order is the order in which symbols were first seen. The tree builder relies on this
/// order to break ties between symbols with equal counts, which keeps the generated codes
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    entries: Vec<(S, u64)>,
    /// symbol to position in `entries`
    index: HashMap<S, usize>,
}

impl<S: Symbol> Default for FrequencyTable<S> {
    fn default() -> Self {
        FrequencyTable {
            entries: vec![],
            index: HashMap::new(),
        }
    }
}

impl<S: Symbol> FrequencyTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// builds a table from explicit counts. Zero counts are dropped, repeated symbols are summed.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let mut table = Self::new();
        for (symbol, count) in counts {
            if count != 0 {
                table.add(symbol, count);
            }
        }
        table
    }

    fn add(&mut self, symbol: S, count: u64) {
        if let Some(&pos) = self.index.get(&symbol) {
            self.entries[pos].1 += count;
        } else {
            self.index.insert(symbol, self.entries.len());
            self.entries.push((symbol, count));
        }
    }

    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.index.get(symbol).map(|&pos| self.entries[pos].1)
    }

    /// number of distinct symbols
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// sum of all counts, which is the length of the counted input
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// iterates in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (S, u64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn symbols(&self) -> impl Iterator<Item = S> + '_ {
        self.entries.iter().map(|(symbol, _)| *symbol)
    }

    /// returns the share of `symbol` in the counted input, 0.0 for unknown symbols
    pub fn probability(&self, symbol: &S) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(symbol).unwrap_or(0) as f64 / total as f64
    }

    pub fn probabilities(&self) -> Vec<(S, f64)> {
        let total = self.total() as f64;
        self.entries
            .iter()
            .map(|(symbol, count)| (*symbol, *count as f64 / total))
            .collect()
    }

    pub fn max_count(&self) -> Option<u64> {
        self.entries.iter().map(|(_, count)| *count).max()
    }
}

/// creates a table with the counts of each symbol
#[inline]
pub fn count_symbols<S: Symbol>(input: &[S]) -> FrequencyTable<S> {
    let mut table = FrequencyTable::new();
    for symbol in input {
        table.add(*symbol, 1);
    }
    debug!(
        "counted {} symbols, {} distinct",
        input.len(),
        table.len()
    );
    if log_enabled!(Trace) {
        for (symbol, count) in table.iter() {
            trace!("{:?}: {}", symbol, count);
        }
    }
    table
}
