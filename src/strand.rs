//! Strands, windows and nucleotide base codes.

use std::fmt::Display;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::error::{MeltResult, ThermoError};

/// Bit set of the canonical bases a symbol may stand for.
pub type BaseCode = u8;

pub const A: BaseCode = 0b0001;
pub const C: BaseCode = 0b0010;
pub const G: BaseCode = 0b0100;
pub const T: BaseCode = 0b1000;

/// Canonical bases in table order.
pub const CANONICAL: [BaseCode; 4] = [A, C, G, T];

/// Residues that only occur in protein sequences.
const PROTEIN_ONLY: &[u8] = b"EFIJLOPQZ";

/// Map an IUPAC nucleotide symbol to its base code. U reads as T.
///
/// Unrecognised symbols map to 0, which matches no base.
pub const fn base_code(b: u8) -> BaseCode {
    match b.to_ascii_uppercase() {
        b'A' => A,
        b'C' => C,
        b'G' => G,
        b'T' | b'U' => T,
        b'R' => A | G,
        b'Y' => C | T,
        b'M' => A | C,
        b'K' => G | T,
        b'S' => C | G,
        b'W' => A | T,
        b'H' => A | C | T,
        b'B' => C | G | T,
        b'V' => A | C | G,
        b'D' => A | G | T,
        b'N' => A | C | G | T,
        _ => 0,
    }
}

/// Complement of a base code: A<->T and C<->G, bit by bit.
pub const fn complement_code(code: BaseCode) -> BaseCode {
    ((code & A) << 3) | ((code & T) >> 3) | ((code & C) << 1) | ((code & G) >> 1)
}

pub const fn is_canonical(code: BaseCode) -> bool {
    code.count_ones() == 1
}

/// Probability that a base drawn from `code` is also allowed by `of`.
pub fn fraction_of(code: BaseCode, of: BaseCode) -> f64 {
    if code == 0 {
        return 0.0;
    }
    (code & of).count_ones() as f64 / code.count_ones() as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    Dna,
    Rna,
}

impl Alphabet {
    pub const fn from_is_dna(is_dna: bool) -> Self {
        if is_dna { Self::Dna } else { Self::Rna }
    }

    pub const fn is_dna(self) -> bool {
        matches!(self, Self::Dna)
    }

    /// Figure out whether a sequence is DNA or RNA.
    ///
    /// A sequence with U and no T is RNA, anything else is DNA.
    pub fn detect(seq: &[u8]) -> MeltResult<Self> {
        let has = |b: u8| seq.iter().any(|s| s.eq_ignore_ascii_case(&b));

        match (has(b'T'), has(b'U')) {
            (true, true) => Err(ThermoError::MixedAlphabet),
            (false, true) => Ok(Self::Rna),
            _ => Ok(Self::Dna),
        }
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dna => write!(f, "DNA"),
            Self::Rna => write!(f, "RNA"),
        }
    }
}

/// A contiguous sub-range of a strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub shift: usize,
    pub length: usize,
}

impl Window {
    pub const fn new(shift: usize, length: usize) -> Self {
        Self { shift, length }
    }

    /// The whole of a strand of `len` bases.
    pub const fn full(len: usize) -> Self {
        Self::new(0, len)
    }

    /// One past the last position covered.
    pub const fn end(&self) -> usize {
        self.shift + self.length
    }

    /// Check `length >= 1` and `shift + length <= strand_len`.
    pub fn check(&self, strand_len: usize) -> MeltResult<()> {
        let fits = self
            .shift
            .checked_add(self.length)
            .is_some_and(|end| end <= strand_len);

        if self.length == 0 || !fits {
            return Err(ThermoError::InvalidWindow {
                shift: self.shift,
                length: self.length,
                strand_len,
            });
        }
        Ok(())
    }
}

/// An immutable, validated view over a nucleotide sequence.
#[derive(Debug, Clone)]
pub struct Strand<'a> {
    raw: &'a [u8],
    codes: Box<[BaseCode]>,
    alphabet: Alphabet,
    fingerprint: u64,
}

impl<'a> Strand<'a> {
    /// Wrap a sequence, tolerating unrecognised symbols.
    ///
    /// Symbols outside the IUPAC nucleotide alphabet are kept and contribute
    /// nothing to any energy sum. Protein sequences are still rejected.
    pub fn new(raw: &'a [u8], alphabet: Alphabet) -> MeltResult<Self> {
        guard_protein(raw)?;

        let codes: Box<[BaseCode]> = raw.iter().map(|&b| base_code(b)).collect();
        let mut hasher = FxHasher::default();
        alphabet.hash(&mut hasher);
        codes.hash(&mut hasher);

        Ok(Self {
            raw,
            codes,
            alphabet,
            fingerprint: hasher.finish(),
        })
    }

    /// Wrap a sequence, rejecting any symbol outside the IUPAC nucleotide alphabet.
    pub fn strict(raw: &'a [u8], alphabet: Alphabet) -> MeltResult<Self> {
        let strand = Self::new(raw, alphabet)?;
        if let Some(position) = strand.codes.iter().position(|&c| c == 0) {
            return Err(ThermoError::UnsupportedSymbol {
                symbol: raw[position] as char,
                position,
            });
        }
        Ok(strand)
    }

    /// Wrap a sequence, detecting DNA or RNA from its content.
    pub fn detect(raw: &'a [u8]) -> MeltResult<Self> {
        Self::new(raw, Alphabet::detect(raw)?)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }

    pub fn codes(&self) -> &[BaseCode] {
        &self.codes
    }

    /// Identifies the strand contents and alphabet for cache invalidation.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// The base codes covered by `window`.
    pub fn window(&self, window: Window) -> MeltResult<&[BaseCode]> {
        window.check(self.len())?;
        Ok(&self.codes[window.shift..window.end()])
    }
}

fn guard_protein(raw: &[u8]) -> MeltResult<()> {
    match raw
        .iter()
        .position(|b| PROTEIN_ONLY.contains(&b.to_ascii_uppercase()))
    {
        Some(position) => Err(ThermoError::ProteinSequence {
            residue: raw[position] as char,
            position,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod test;
