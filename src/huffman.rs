//! Huffman coding baseline.
//!
//! A classic prefix code built from the same [`StatisticsTable`] the entropy
//! coder uses, so the two can be compared on equal terms. Huffman spends a
//! whole number of bits on every symbol; for skewed distributions that
//! overhead is what the big-integer coder avoids.
//!
//! # Historical Context
//!
//! David Huffman (1952) developed this algorithm as a term paper at MIT.
//! It was the first practical algorithm for constructing optimal prefix codes.

use std::borrow::Borrow;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::stats::StatisticsTable;

/// Huffman tree node. Leaves hold insertion indices into the table.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Leaf(usize),
    Internal { left: Box<Node>, right: Box<Node> },
}

/// Heap entry: lightest weight first, earliest creation first on ties.
#[derive(Debug, PartialEq, Eq)]
struct Weighted {
    weight: Reverse<u64>,
    seq: Reverse<usize>,
    node: Node,
}

impl Ord for Weighted {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weight, self.seq).cmp(&(other.weight, other.seq))
    }
}

impl PartialOrd for Weighted {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Prefix code over a table's alphabet.
#[derive(Debug, Clone)]
pub struct HuffmanCode<S> {
    codes: Vec<Vec<u8>>,
    root: Node,
    table: StatisticsTable<S>,
}

impl<S: Clone + Eq + Hash> HuffmanCode<S> {
    /// Build the code from `table`'s frequencies.
    pub fn new(table: &StatisticsTable<S>) -> Self {
        let mut heap: BinaryHeap<Weighted> = table
            .iter()
            .enumerate()
            .map(|(i, stat)| Weighted {
                weight: Reverse(stat.frequency()),
                seq: Reverse(i),
                node: Node::Leaf(i),
            })
            .collect();

        let mut seq = table.len();
        let root = loop {
            let first = match heap.pop() {
                Some(entry) => entry,
                // Tables are never empty.
                None => break Node::Leaf(0),
            };
            let second = match heap.pop() {
                Some(entry) => entry,
                None => break first.node,
            };
            heap.push(Weighted {
                weight: Reverse(first.weight.0.saturating_add(second.weight.0)),
                seq: Reverse(seq),
                node: Node::Internal {
                    left: Box::new(first.node),
                    right: Box::new(second.node),
                },
            });
            seq += 1;
        };

        let mut codes = vec![Vec::new(); table.len()];
        Self::build_codes(&root, Vec::new(), &mut codes);

        Self {
            codes,
            root,
            table: table.clone(),
        }
    }

    fn build_codes(node: &Node, prefix: Vec<u8>, codes: &mut [Vec<u8>]) {
        match node {
            Node::Leaf(i) => {
                codes[*i] = if prefix.is_empty() { vec![0] } else { prefix };
            }
            Node::Internal { left, right } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push(0);
                Self::build_codes(left, left_prefix, codes);

                let mut right_prefix = prefix;
                right_prefix.push(1);
                Self::build_codes(right, right_prefix, codes);
            }
        }
    }

    /// Codeword length of `symbol` in bits.
    pub fn code_len(&self, symbol: &S) -> Option<usize> {
        self.table.position(symbol).map(|i| self.codes[i].len())
    }

    /// Encode a symbol sequence into a bit stream (one `0`/`1` per byte).
    ///
    /// # Errors
    /// Returns [`Error::UnknownSymbol`] for a symbol outside the alphabet.
    pub fn encode<I>(&self, symbols: I) -> Result<Vec<u8>>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        let mut bits = Vec::new();
        for (position, symbol) in symbols.into_iter().enumerate() {
            let i = self
                .table
                .position(symbol.borrow())
                .ok_or(Error::UnknownSymbol { position })?;
            bits.extend_from_slice(&self.codes[i]);
        }
        Ok(bits)
    }

    /// Total encoded length of `symbols` in bits.
    ///
    /// # Errors
    /// Returns [`Error::UnknownSymbol`] for a symbol outside the alphabet.
    pub fn encoded_bits<I>(&self, symbols: I) -> Result<u64>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        symbols
            .into_iter()
            .enumerate()
            .try_fold(0u64, |acc, (position, symbol)| {
                self.code_len(symbol.borrow())
                    .map(|len| acc + len as u64)
                    .ok_or(Error::UnknownSymbol { position })
            })
    }

    /// Decode a bit stream into a symbol sequence.
    ///
    /// A trailing incomplete codeword is dropped.
    pub fn decode(&self, bits: &[u8]) -> Vec<S> {
        let stats = self.table.as_slice();
        let mut out = Vec::new();
        if let Node::Leaf(i) = self.root {
            out.resize(bits.len(), stats[i].symbol().clone());
            return out;
        }

        let mut curr = &self.root;
        for &bit in bits {
            if let Node::Internal { left, right } = curr {
                curr = if bit == 0 { left } else { right };
            }
            if let Node::Leaf(i) = curr {
                out.push(stats[*i].symbol().clone());
                curr = &self.root;
            }
        }
        out
    }
}
