//! # Finite State Entropy over Big Integers
//!
//! *Fractional-bit entropy coding with a single unbounded integer as state.*
//!
//! ## Intuition First
//!
//! Write a number in base 10 and every digit costs the same: `log2(10)` bits.
//! Now let each "digit" have its own radix. A symbol that is very likely gets
//! a radix close to 1 and costs almost nothing; a rare symbol gets a large
//! radix and costs more. Pushing a symbol onto the integer swaps radix
//! `frequency` for radix `total`, so the integer grows by a factor of about
//! `total / frequency`, which is exactly `1 / p(symbol)`.
//!
//! ## The Problem
//!
//! - **Huffman coding** gives every symbol a whole number of bits. A symbol
//!   with probability 0.99 still costs one full bit.
//! - **Arithmetic coding** reaches the entropy but tracks an interval with
//!   careful renormalisation.
//!
//! Keeping the whole state in one arbitrary-precision integer removes the
//! renormalisation entirely: the coder below is a few lines of `divmod`.
//!
//! ## Mathematical Formulation
//!
//! With frequencies `f_s`, cumulative offsets `c_s` and `total = 1 + Σ f_s`:
//!
//! ```text
//! C(x, s) = total * floor(x / f_s) + (x mod f_s) + c_s
//! D(x)    = (s, f_s * floor(x / total) + (x mod total) - c_s)
//!           where c_s <= x mod total < c_s + f_s
//! ```
//!
//! `D` inverts `C`, so decoding yields symbols in reverse order.
//!
//! ## Complexity Analysis
//!
//! - **Time**: one big-integer division and multiplication per symbol; the
//!   integer grows linearly, so a whole message costs `O(n^2)` word operations.
//! - **Space**: `O(n)` bits for the encoding, `O(k)` for a `k`-symbol table.
//!
//! ## Failure Modes
//!
//! 1. **No integrity check**: an integer decoded with the wrong table yields a
//!    wrong sequence, not an error.
//! 2. **Quadratic cost**: this is a reference coder, not a streaming one.
//!
//! ## Usage
//!
//! ```
//! use fse::{naive_frequencies, EntropyCoder, StatisticsTable};
//!
//! let text = "Hello, world!";
//! let table = StatisticsTable::new(naive_frequencies(text.chars())).unwrap();
//! let coder = EntropyCoder::new(table);
//!
//! let code = coder.encode(text.chars()).unwrap();
//! let decoded: String = coder.decode(&code).unwrap().into_iter().collect();
//! assert_eq!(decoded, text);
//! ```
//!
//! ## References
//!
//! - Duda, J. (2013). "Asymmetric numeral systems: entropy coding combining speed of Huffman coding with compression rate of arithmetic coding." arXiv:1311.2540.
//! - Collet, Y. (2013). "Finite State Entropy: a new breed of entropy coder."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coder;
pub mod cost;
pub mod counter;
pub mod error;
pub mod huffman;
pub mod stats;

pub use coder::EntropyCoder;
pub use counter::naive_frequencies;
pub use error::{ConfigurationError, Error, Result};
pub use huffman::HuffmanCode;
pub use num::BigUint;
pub use stats::{StatisticsTable, SymbolStat};
