//! Static symbol statistics.
//!
//! A [`StatisticsTable`] partitions the integer range `[1, total)` into one
//! half-open sub-range per symbol, laid out in the order the frequencies were
//! supplied. The value `0` is never part of any range: `total` starts at `1`,
//! so every cumulative offset is at least `1` and `total` is strictly greater
//! than any single frequency. The coder relies on both facts.
//!
//! ```text
//! {'a': 1, 'b': 1}      total = 3
//!
//!   0   1   2   3
//!   |   [ a )[ b )
//!   reserved
//! ```
//!
//! The same mapping, in the same order, must be used on both sides of a
//! session: reordering symbols moves the range boundaries.

use std::hash::Hash;

use ahash::AHashMap as HashMap;

use crate::counter::naive_frequencies;
use crate::error::{ConfigurationError, Error, Result};

/// One symbol's slot in the cumulative distribution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolStat<S> {
    symbol: S,
    frequency: u64,
    cumulative: u64,
}

impl<S> SymbolStat<S> {
    /// The symbol this entry describes.
    pub fn symbol(&self) -> &S {
        &self.symbol
    }

    /// Weight of the symbol; always at least 1.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Start of the symbol's range; always at least 1.
    pub fn cumulative(&self) -> u64 {
        self.cumulative
    }

    /// Whether `value` lies in `[cumulative, cumulative + frequency)`.
    pub fn contains(&self, value: u64) -> bool {
        value >= self.cumulative && value - self.cumulative < self.frequency
    }
}

/// Immutable cumulative-frequency model over a finite alphabet.
#[derive(Clone, Debug)]
pub struct StatisticsTable<S> {
    stats: Box<[SymbolStat<S>]>,
    // Parallel to `stats`; strictly increasing.
    boundaries: Box<[u64]>,
    index: HashMap<S, usize>,
    total: u64,
}

impl<S: Clone + Eq + Hash> StatisticsTable<S> {
    /// Build a table from an ordered symbol → frequency mapping.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] if the mapping is empty, a frequency
    /// is zero, a symbol repeats, or the total overflows `u64`.
    pub fn new<I>(frequencies: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let frequencies = frequencies.into_iter();
        let (lower, _) = frequencies.size_hint();
        let mut stats = Vec::with_capacity(lower);
        let mut boundaries = Vec::with_capacity(lower);
        let mut index = HashMap::with_capacity(lower);
        let mut total = 1u64;

        for (position, (symbol, frequency)) in frequencies.enumerate() {
            if frequency == 0 {
                return Err(ConfigurationError::ZeroFrequency { position }.into());
            }
            if index.insert(symbol.clone(), position).is_some() {
                return Err(ConfigurationError::DuplicateSymbol { position }.into());
            }
            let cumulative = total;
            total = total
                .checked_add(frequency)
                .ok_or(ConfigurationError::TotalOverflow)?;
            boundaries.push(cumulative);
            stats.push(SymbolStat {
                symbol,
                frequency,
                cumulative,
            });
        }

        if stats.is_empty() {
            return Err(ConfigurationError::EmptyAlphabet.into());
        }

        tracing::debug!(symbols = stats.len(), total, "built statistics table");

        Ok(Self {
            stats: stats.into_boxed_slice(),
            boundaries: boundaries.into_boxed_slice(),
            index,
            total,
        })
    }

    /// Build a table from the symbol counts of `symbols`, in first-seen order.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] if `symbols` is empty.
    pub fn from_sequence<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
    {
        Self::new(naive_frequencies(symbols))
    }

    /// Entry for `symbol`, if it belongs to the alphabet.
    pub fn get(&self, symbol: &S) -> Option<&SymbolStat<S>> {
        self.index.get(symbol).map(|&i| &self.stats[i])
    }

    /// Insertion index of `symbol`.
    pub fn position(&self, symbol: &S) -> Option<usize> {
        self.index.get(symbol).copied()
    }

    /// `(frequency, cumulative)` for `symbol`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownSymbol`] (position 0) if `symbol` is not in the
    /// alphabet. The coder rewrites the position to the sequence index.
    pub fn frequency_and_cdf(&self, symbol: &S) -> Result<(u64, u64)> {
        self.get(symbol)
            .map(|stat| (stat.frequency, stat.cumulative))
            .ok_or(Error::UnknownSymbol { position: 0 })
    }

    /// Model probability of `symbol`, `frequency / total`.
    pub fn probability(&self, symbol: &S) -> Option<f64> {
        self.get(symbol)
            .map(|stat| stat.frequency as f64 / self.total as f64)
    }
}

impl<S> StatisticsTable<S> {
    /// Entry whose range contains `value`.
    ///
    /// Binary search for the rightmost boundary `<= value`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCode`] if `value` is `0` or `>= total`.
    pub fn find(&self, value: u64) -> Result<&SymbolStat<S>> {
        if value >= self.total {
            return Err(Error::InvalidCode { remainder: value });
        }
        let idx = self.boundaries.partition_point(|&c| c <= value);
        if idx == 0 {
            return Err(Error::InvalidCode { remainder: value });
        }
        Ok(&self.stats[idx - 1])
    }

    /// `1 + sum(frequencies)`; the modulus of the encoding.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Always `false`; construction rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, SymbolStat<S>> {
        self.stats.iter()
    }

    /// Entries in insertion order, as a slice.
    pub fn as_slice(&self) -> &[SymbolStat<S>] {
        &self.stats
    }

    /// Symbols in insertion order.
    pub fn symbols(&self) -> impl Iterator<Item = &S> + '_ {
        self.stats.iter().map(SymbolStat::symbol)
    }
}

impl<'a, S> IntoIterator for &'a StatisticsTable<S> {
    type Item = &'a SymbolStat<S>;
    type IntoIter = std::slice::Iter<'a, SymbolStat<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_two_symbol_layout() {
        let table = StatisticsTable::new([('a', 1), ('b', 1)]).unwrap();
        assert_eq!(table.total(), 3);
        assert_eq!(table.frequency_and_cdf(&'a').unwrap(), (1, 1));
        assert_eq!(table.frequency_and_cdf(&'b').unwrap(), (1, 2));
        assert_eq!(*table.find(1).unwrap().symbol(), 'a');
        assert_eq!(*table.find(2).unwrap().symbol(), 'b');
    }

    #[test]
    fn test_insertion_order_preserved() {
        let table = StatisticsTable::new([('z', 5), ('a', 2), ('m', 1)]).unwrap();
        let symbols: Vec<char> = table.symbols().copied().collect();
        assert_eq!(symbols, vec!['z', 'a', 'm']);
        assert_eq!(table.frequency_and_cdf(&'a').unwrap(), (2, 6));
        assert_eq!(table.frequency_and_cdf(&'m').unwrap(), (1, 8));
        assert_eq!(table.total(), 9);
    }

    #[test]
    fn test_find_out_of_range() {
        let table = StatisticsTable::new([(0u8, 4), (1u8, 2)]).unwrap();
        assert_eq!(
            table.find(0).unwrap_err(),
            Error::InvalidCode { remainder: 0 }
        );
        assert!(table.find(7).unwrap_err().is_invalid_code());
        assert!(table.find(u64::MAX).unwrap_err().is_invalid_code());
        assert_eq!(*table.find(4).unwrap().symbol(), 0);
        assert_eq!(*table.find(5).unwrap().symbol(), 1);
        assert_eq!(*table.find(6).unwrap().symbol(), 1);
    }

    #[test]
    fn test_configuration_errors() {
        let empty: [(char, u64); 0] = [];
        assert_eq!(
            StatisticsTable::new(empty).unwrap_err(),
            Error::Configuration(ConfigurationError::EmptyAlphabet)
        );
        assert_eq!(
            StatisticsTable::new([('a', 3), ('b', 0)]).unwrap_err(),
            Error::Configuration(ConfigurationError::ZeroFrequency { position: 1 })
        );
        assert_eq!(
            StatisticsTable::new([('a', 3), ('b', 1), ('a', 2)]).unwrap_err(),
            Error::Configuration(ConfigurationError::DuplicateSymbol { position: 2 })
        );
        assert_eq!(
            StatisticsTable::new([('a', u64::MAX)]).unwrap_err(),
            Error::Configuration(ConfigurationError::TotalOverflow)
        );
    }

    #[test]
    fn test_largest_representable_total() {
        let table = StatisticsTable::new([('a', u64::MAX - 1)]).unwrap();
        assert_eq!(table.total(), u64::MAX);
        assert_eq!(*table.find(u64::MAX - 1).unwrap().symbol(), 'a');
    }

    #[test]
    fn test_unknown_symbol_lookup() {
        let table = StatisticsTable::new([("the", 3), ("cat", 1)]).unwrap();
        assert!(table.get(&"dog").is_none());
        assert_eq!(table.position(&"cat"), Some(1));
        assert!(table.frequency_and_cdf(&"dog").unwrap_err().is_unknown_symbol());
        assert_eq!(table.probability(&"the"), Some(0.6));
    }

    #[test]
    fn test_from_sequence() {
        let table = StatisticsTable::from_sequence("abracadabra".chars()).unwrap();
        let stats: Vec<(char, u64, u64)> = table
            .iter()
            .map(|s| (*s.symbol(), s.frequency(), s.cumulative()))
            .collect();
        assert_eq!(
            stats,
            vec![
                ('a', 5, 1),
                ('b', 2, 6),
                ('r', 2, 8),
                ('c', 1, 10),
                ('d', 1, 11),
            ]
        );
        assert_eq!(table.total(), 12);
    }

    proptest! {
        #[test]
        fn prop_ranges_partition(freqs in prop::collection::vec(1u64..200, 1..40)) {
            let table = StatisticsTable::new(freqs.iter().copied().enumerate()).unwrap();
            let mut expected = 1u64;
            for stat in &table {
                prop_assert!(stat.cumulative() >= 1);
                prop_assert_eq!(stat.cumulative(), expected);
                expected += stat.frequency();
            }
            prop_assert_eq!(expected, table.total());

            for value in 1..table.total() {
                let stat = table.find(value).unwrap();
                prop_assert!(stat.contains(value));
            }
        }
    }
}
