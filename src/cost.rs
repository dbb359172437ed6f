//! Coding cost under a static model.
//!
//! Helpers for comparing an encoding's length with the information content
//! the table assigns to the input. The bound uses the table's own `total`,
//! reserved base included, so it is the exact rate the coder approaches.

use std::borrow::Borrow;
use std::hash::Hash;

use num::BigUint;

use crate::error::{Error, Result};
use crate::stats::StatisticsTable;

/// `-log2(frequency / total)` for `symbol`.
///
/// # Errors
/// Returns [`Error::UnknownSymbol`] if `symbol` is not in the alphabet.
pub fn information_bits<S>(table: &StatisticsTable<S>, symbol: &S) -> Result<f64>
where
    S: Clone + Eq + Hash,
{
    let (frequency, _) = table.frequency_and_cdf(symbol)?;
    Ok((table.total() as f64).log2() - (frequency as f64).log2())
}

/// Sum of [`information_bits`] over `symbols`.
///
/// # Errors
/// Returns [`Error::UnknownSymbol`] with the index of the first symbol outside
/// the alphabet.
pub fn ideal_bits<S, I>(table: &StatisticsTable<S>, symbols: I) -> Result<f64>
where
    S: Clone + Eq + Hash,
    I: IntoIterator,
    I::Item: Borrow<S>,
{
    symbols
        .into_iter()
        .enumerate()
        .try_fold(0.0, |acc, (position, symbol)| {
            information_bits(table, symbol.borrow())
                .map(|bits| acc + bits)
                .map_err(|_| Error::UnknownSymbol { position })
        })
}

/// Bit length of an encoding; `0` for the empty encoding.
pub fn code_bits(code: &BigUint) -> u64 {
    code.bits()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EntropyCoder;

    #[test]
    fn test_uniform_information() {
        // total = 4, so each of three symbols carries log2(4) = 2 bits.
        let table = StatisticsTable::new([('a', 1), ('b', 1), ('c', 1)]).unwrap();
        assert!((information_bits(&table, &'b').unwrap() - 2.0).abs() < 1e-12);
        assert!((ideal_bits(&table, "abcabc".chars()).unwrap() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_symbol_position() {
        let table = StatisticsTable::new([('a', 1)]).unwrap();
        assert_eq!(
            ideal_bits(&table, "aaz".chars()).unwrap_err(),
            Error::UnknownSymbol { position: 2 }
        );
    }

    #[test]
    fn test_encoding_tracks_ideal_bits() {
        let text = "Huffman coding is limited to 1 bit per symbol. FSE can a symbol as a fraction of a bit.";
        let table = StatisticsTable::from_sequence(text.chars()).unwrap();
        let ideal = ideal_bits(&table, text.chars()).unwrap();
        let slack = (table.total() as f64).log2() + text.chars().count() as f64 + 1.0;
        let coder = EntropyCoder::new(table);
        let bits = code_bits(&coder.encode(text.chars()).unwrap()) as f64;
        // At most one bit of rounding per step, plus the first step's offset.
        assert!(bits <= ideal + slack);
        assert!(bits >= ideal * 0.5);
    }

    #[test]
    fn test_code_bits() {
        assert_eq!(code_bits(&BigUint::from(0u32)), 0);
        assert_eq!(code_bits(&BigUint::from(5u32)), 3);
    }
}
