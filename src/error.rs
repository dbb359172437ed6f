//! Error types for big-integer entropy coding.

use thiserror::Error;

/// Reasons a frequency mapping cannot become a statistics table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The mapping contained no symbols.
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// A symbol was given a frequency of zero.
    #[error("symbol at position {position} has zero frequency")]
    ZeroFrequency {
        /// Index of the offending entry in the input mapping.
        position: usize,
    },

    /// The same symbol appeared twice in the mapping.
    #[error("symbol at position {position} was already defined")]
    DuplicateSymbol {
        /// Index of the repeated entry in the input mapping.
        position: usize,
    },

    /// `1 + sum(frequencies)` does not fit in a `u64`.
    #[error("total frequency overflows u64")]
    TotalOverflow,
}

/// Error variants for table construction, encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The statistics table could not be built.
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The input sequence contains a symbol outside the table's alphabet.
    #[error("unknown symbol at position {position}")]
    UnknownSymbol {
        /// Index of the first unknown symbol in the input sequence.
        position: usize,
    },

    /// A cumulative value fell outside every symbol's range.
    #[error("invalid code: no symbol range contains {remainder}")]
    InvalidCode {
        /// The value that could not be placed.
        remainder: u64,
    },
}

impl Error {
    /// Whether this error came from table construction.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    /// Whether this error came from encoding an unknown symbol.
    pub fn is_unknown_symbol(&self) -> bool {
        matches!(self, Error::UnknownSymbol { .. })
    }

    /// Whether this error came from an unplaceable decode lookup.
    pub fn is_invalid_code(&self) -> bool {
        matches!(self, Error::InvalidCode { .. })
    }
}

/// A specialized Result type for entropy coding operations.
pub type Result<T> = std::result::Result<T, Error>;
