//! Nearest-neighbor parameter tables over IUPAC base codes.

use std::fmt::Display;

use crate::{
    BpEnergy, Comp,
    energy::ThermoResult,
    error::{MeltResult, ThermoError},
    strand::{A, Alphabet, BaseCode, C, CANONICAL, G, T, base_code, fraction_of},
    util::ByteStr,
};

/// IUPAC symbol for each base code. Code 0 matches nothing.
const SYMBOLS: [u8; 16] = *b"?ACMGRSVTWYHKDBN";

const RAW_BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// One dinucleotide step and its contribution to a duplex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeltRecord {
    pub label: [u8; 2],
    pub thermo: ThermoResult,
}

impl MeltRecord {
    pub fn enthalpy(&self) -> f64 {
        self.thermo.enthalpy
    }

    pub fn entropy(&self) -> f64 {
        self.thermo.entropy
    }

    pub fn energy(&self) -> f64 {
        self.thermo.energy
    }
}

impl Display for MeltRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: dH {:.2} dS {:.2} dG {:.2}",
            ByteStr(self.label),
            self.thermo.enthalpy,
            self.thermo.entropy,
            self.thermo.energy
        )
    }
}

/// Step records for every pair of base codes plus the duplex end terms.
#[derive(Debug)]
pub struct NearestNeighborTable {
    alphabet: Alphabet,
    records: Box<[MeltRecord]>,
    init: ThermoResult,
    terminal_at: ThermoResult,
    terminal_gc: ThermoResult,
    symmetry: ThermoResult,
}

impl NearestNeighborTable {
    /// The shared table for an alphabet.
    pub fn get(alphabet: Alphabet) -> &'static Self {
        match alphabet {
            Alphabet::Dna => crate::dna::dna(),
            Alphabet::Rna => crate::rna::rna(),
        }
    }

    /// Expand raw `XY/X'Y'` parameters into a dense table over base codes.
    ///
    /// A degenerate step is the probability-weighted mean of the canonical
    /// steps it can stand for. Steps involving code 0 stay at zero.
    pub fn build(alphabet: Alphabet, raw: &BpEnergy, complement: &Comp) -> Self {
        let mut canonical = [[ThermoResult::ZERO; 4]; 4];
        for (i, &x) in RAW_BASES.iter().enumerate() {
            for (j, &y) in RAW_BASES.iter().enumerate() {
                let (dh, ds) = raw[[x, y, b'/', complement[x], complement[y]]];
                canonical[i][j] = ThermoResult::new(dh, ds);
            }
        }

        let records = (0..256usize)
            .map(|idx| {
                let (a, b) = ((idx >> 4) as BaseCode, (idx & 0xf) as BaseCode);
                let mut thermo = ThermoResult::ZERO;
                for (i, &x) in CANONICAL.iter().enumerate() {
                    for (j, &y) in CANONICAL.iter().enumerate() {
                        let w = match_probability(a, x) * match_probability(b, y);
                        if w > 0.0 {
                            thermo += canonical[i][j] * w;
                        }
                    }
                }
                MeltRecord {
                    label: [SYMBOLS[a as usize], SYMBOLS[b as usize]],
                    thermo,
                }
            })
            .collect();

        let term = |label: &[u8]| {
            let (dh, ds) = raw.get_label(label).unwrap_or_default();
            ThermoResult::new(dh, ds)
        };

        Self {
            alphabet,
            records,
            init: term(b"init"),
            terminal_at: term(b"init_A/T"),
            terminal_gc: term(b"init_G/C"),
            symmetry: term(b"sym"),
        }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Lenient lookup by base code. Unrecognised codes give a zero record.
    #[inline]
    pub fn record(&self, a: BaseCode, b: BaseCode) -> &MeltRecord {
        &self.records[((a as usize & 0xf) << 4) | (b as usize & 0xf)]
    }

    /// Strict lookup by symbol.
    pub fn step(&self, a: u8, b: u8) -> MeltResult<&MeltRecord> {
        for (position, s) in [a, b].into_iter().enumerate() {
            if base_code(s) == 0 {
                return Err(ThermoError::UnsupportedSymbol {
                    symbol: s as char,
                    position,
                });
            }
        }
        Ok(self.record(base_code(a), base_code(b)))
    }

    /// Initiation plus the terminal corrections for the two end bases.
    ///
    /// A degenerate end base is split between the A/T and G/C terms by the
    /// fraction of its bases in each.
    pub fn initiation(&self, first: BaseCode, last: BaseCode) -> ThermoResult {
        let mut thermo = self.init;
        for end in [first, last] {
            thermo += self.terminal_at * fraction_of(end, A | T);
            thermo += self.terminal_gc * fraction_of(end, C | G);
        }
        thermo
    }

    /// Correction for self-complementary duplexes.
    pub fn symmetry(&self) -> ThermoResult {
        self.symmetry
    }
}

/// Probability that random realisations of `x` and `y` are the same base.
pub fn match_probability(x: BaseCode, y: BaseCode) -> f64 {
    if x == 0 || y == 0 {
        return 0.0;
    }
    (x & y).count_ones() as f64 / (x.count_ones() * y.count_ones()) as f64
}

/// Score how well `seq_a` and `seq_b` agree over their first `length` positions.
///
/// The score is the probability that both denote the same sequence when
/// every degenerate symbol is resolved uniformly at random: 1 for identical
/// unambiguous sequences, 0 as soon as one position cannot match.
///
/// # Args
///
/// - seq_a: The first sequence, e.g. a primer
/// - seq_b: The sequence compared against, e.g. a binding site
/// - length: How many leading positions to compare
///
/// # Returns
///
/// - [`f64`]: The score in [0, 1]
pub fn pair_score(seq_a: &[u8], seq_b: &[u8], length: usize) -> MeltResult<f64> {
    if seq_a.len() < length || seq_b.len() < length {
        return Err(ThermoError::LengthMismatch {
            length,
            len_a: seq_a.len(),
            len_b: seq_b.len(),
        });
    }

    let mut score = 1.0;
    for (&a, &b) in seq_a.iter().zip(seq_b).take(length) {
        score *= match_probability(base_code(a), base_code(b));
        if score == 0.0 {
            break;
        }
    }
    Ok(score)
}
