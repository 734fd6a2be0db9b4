//! Errors reported by the melting engine.

use thiserror::Error;

use crate::strand::Alphabet;

pub type MeltResult<T> = Result<T, ThermoError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThermoError {
    /// The window does not fit inside the strand, or is empty.
    #[error("window (shift {shift}, length {length}) does not fit a strand of {strand_len} bases")]
    InvalidWindow {
        shift: usize,
        length: usize,
        strand_len: usize,
    },

    /// A symbol outside the IUPAC nucleotide alphabet, on a strict strand or lookup.
    #[error("unsupported symbol '{symbol}' at position {position}")]
    UnsupportedSymbol { symbol: char, position: usize },

    #[error("{name} concentration must be positive, got {value}")]
    InvalidConcentration { name: &'static str, value: f64 },

    /// The cache was sized for fewer positions than the window reaches.
    #[error("cache holds {capacity} positions but the window reaches position {requested}")]
    CacheSizeMismatch { capacity: usize, requested: usize },

    #[error("cache used before initialization or after exit")]
    UninitializedCache,

    #[error("cache was initialized for {expected} but the strand is {found}")]
    AlphabetMismatch { expected: Alphabet, found: Alphabet },

    /// Residue letters that only occur in protein sequences.
    #[error("sequence looks like protein: residue '{residue}' at position {position}")]
    ProteinSequence { residue: char, position: usize },

    /// Both T and U in sequence. Provide one or the other for DNA OR RNA.
    #[error("both T and U in sequence, provide one or the other for DNA or RNA")]
    MixedAlphabet,

    #[error("comparison needs {length} bases but the sequences have {len_a} and {len_b}")]
    LengthMismatch {
        length: usize,
        len_a: usize,
        len_b: usize,
    },

    /// The window's parameters give no Tm above absolute zero, e.g. a
    /// single base or a window of unrecognised symbols.
    #[error("no stable duplex: dH {enthalpy} kcal/mol and dS {entropy} cal/(mol K) give no Tm")]
    NoStableDuplex { enthalpy: f64, entropy: f64 },

    #[error("GC fraction must lie in [0, 1], got {0}")]
    InvalidGcFraction(f64),

    #[error("product length must be at least one base")]
    EmptyProduct,
}
