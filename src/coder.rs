//! Big-integer finite state entropy coder.
//!
//! The whole message lives in one unbounded integer. Encoding a symbol with
//! frequency `f` and cumulative offset `c` re-bases the accumulator from
//! radix `f` to radix `total`:
//!
//! ```text
//! encode:  (q, r) = divmod(x, f)       x' = total * q + r + c
//! decode:  (q, r) = divmod(x', total)  x  = f * q + (r - c)
//! ```
//!
//! Decoding is the exact inverse of one encoding step, so symbols come back
//! last-in-first-out. The accumulator grows by roughly `log2(total / f)` bits
//! per symbol, which is the symbol's information content under the model.
//!
//! # Precision
//!
//! The accumulator is a [`BigUint`]. Any fixed-width integer silently wraps
//! once the encoding exceeds its width, which for realistic inputs happens
//! after a handful of symbols.
//!
//! # Integrity
//!
//! An encoding carries no checksum and no length. Decoding an integer that
//! was not produced by [`EntropyCoder::encode`] with an identical table
//! returns some sequence (or [`Error::InvalidCode`]) but cannot be detected
//! as wrong. Callers that move encodings across a process or storage boundary
//! must ship or pin the table themselves.

use std::borrow::Borrow;
use std::hash::Hash;

use num::{BigUint, Integer, ToPrimitive, Zero};

use crate::error::{Error, Result};
use crate::stats::{StatisticsTable, SymbolStat};

/// Encoder and decoder over one fixed [`StatisticsTable`].
///
/// Stateless between calls; share it freely across threads.
#[derive(Clone, Debug)]
pub struct EntropyCoder<S> {
    table: StatisticsTable<S>,
    total: BigUint,
}

impl<S> EntropyCoder<S> {
    /// Create a coder that owns `table`.
    pub fn new(table: StatisticsTable<S>) -> Self {
        let total = BigUint::from(table.total());
        Self { table, total }
    }

    /// The table this coder was built with.
    pub fn table(&self) -> &StatisticsTable<S> {
        &self.table
    }

    /// Give the table back.
    pub fn into_table(self) -> StatisticsTable<S> {
        self.table
    }

    fn push(&self, code: &BigUint, frequency: u64, cumulative: u64) -> BigUint {
        let (quotient, remainder) = code.div_rem(&BigUint::from(frequency));
        quotient * self.table.total() + remainder + cumulative
    }

    fn pop(&self, code: &BigUint) -> Result<(&SymbolStat<S>, BigUint)> {
        let (quotient, remainder) = code.div_rem(&self.total);
        // remainder < total <= u64::MAX; find() rejects the fallback anyway.
        let remainder = remainder.to_u64().unwrap_or(u64::MAX);
        let stat = self.table.find(remainder)?;
        let code = quotient * stat.frequency() + (remainder - stat.cumulative());
        Ok((stat, code))
    }

    /// Undo the most recent encoding step of `code`.
    ///
    /// Returns the symbol that step encoded and the accumulator before it.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCode`] if `code mod total` lies in no symbol's
    /// range. This always happens for `code == 0`.
    pub fn decode_step(&self, code: &BigUint) -> Result<(&S, BigUint)> {
        let (stat, code) = self.pop(code)?;
        Ok((stat.symbol(), code))
    }

    /// Decode `code` back into the sequence that produced it.
    ///
    /// `0` decodes to the empty sequence.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCode`] if some intermediate remainder falls
    /// outside every symbol's range. Integers produced by [`encode`] on the
    /// same table never do.
    ///
    /// [`encode`]: EntropyCoder::encode
    pub fn decode(&self, code: &BigUint) -> Result<Vec<S>>
    where
        S: Clone,
    {
        let mut code = code.clone();
        let mut symbols = Vec::new();
        while !code.is_zero() {
            let (stat, next) = self.pop(&code)?;
            symbols.push(stat.symbol().clone());
            code = next;
        }
        symbols.reverse();
        tracing::debug!(symbols = symbols.len(), "decoded sequence");
        Ok(symbols)
    }
}

impl<S: Clone + Eq + Hash> EntropyCoder<S> {
    /// Apply one encoding step for `symbol` to `code`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownSymbol`] if `symbol` is not in the alphabet.
    pub fn encode_step(&self, code: &BigUint, symbol: &S) -> Result<BigUint> {
        let (frequency, cumulative) = self.table.frequency_and_cdf(symbol)?;
        Ok(self.push(code, frequency, cumulative))
    }

    /// Encode `symbols` into a single integer.
    ///
    /// The empty sequence encodes to `0`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownSymbol`] with the index of the first symbol
    /// outside the alphabet. No partial encoding is returned.
    pub fn encode<I>(&self, symbols: I) -> Result<BigUint>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        let mut code = BigUint::zero();
        let mut count = 0usize;
        for (position, symbol) in symbols.into_iter().enumerate() {
            let (frequency, cumulative) = self
                .table
                .frequency_and_cdf(symbol.borrow())
                .map_err(|_| Error::UnknownSymbol { position })?;
            code = self.push(&code, frequency, cumulative);
            count = position + 1;
        }
        tracing::debug!(symbols = count, bits = code.bits(), "encoded sequence");
        Ok(code)
    }
}
