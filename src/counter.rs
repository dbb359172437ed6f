//! Frequency counting.
//!
//! The coder accepts any positive frequency mapping. This module provides the
//! simplest source of one: a tally of how often each symbol occurs, keyed in
//! first-seen order so that two parties counting the same input build
//! identical tables.

use std::hash::Hash;

use ahash::AHashMap as HashMap;

/// Count occurrences of each symbol, ordered by first appearance.
///
/// Returns an empty mapping for an empty input, which
/// [`StatisticsTable::new`](crate::StatisticsTable::new) rejects.
pub fn naive_frequencies<S, I>(symbols: I) -> Vec<(S, u64)>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = S>,
{
    let mut slots: HashMap<S, usize> = HashMap::new();
    let mut counts: Vec<(S, u64)> = Vec::new();
    for symbol in symbols {
        match slots.get(&symbol) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(symbol.clone(), counts.len());
                counts.push((symbol, 1));
            }
        }
    }
    counts
}
