//! Calculate the tm and GC content of a window of a strand

use tracing::trace;

use crate::{
    NearestNeighborTable, ThermoContext,
    energy::{KELVIN, ThermoResult, compute_energy},
    error::{MeltResult, ThermoError},
    strand::{BaseCode, C, G, Strand, Window, complement_code, is_canonical},
};

/// Gas constant in cal / (K x mol).
pub const R: f64 = 1.9872;

/// Reaction conditions for a Tm calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    /// Monovalent salt concentration in mM.
    pub salt: f64,
    /// Strand concentration in nM.
    pub dna: f64,
}

impl Default for Conditions {
    fn default() -> Self {
        Self {
            salt: 50.0,
            dna: 50.0,
        }
    }
}

impl Conditions {
    pub fn new(salt: f64, dna: f64) -> MeltResult<Self> {
        let conditions = Self { salt, dna };
        conditions.validate()?;
        Ok(conditions)
    }

    /// Both concentrations must be positive.
    pub fn validate(&self) -> MeltResult<()> {
        positive("salt", self.salt)?;
        positive("DNA", self.dna)?;
        Ok(())
    }

    pub fn salt_correction(&self) -> f64 {
        salt_correction(self.salt)
    }
}

/// Logarithmic monovalent salt correction in degrees, for `salt` in mM.
pub fn salt_correction(salt: f64) -> f64 {
    16.6 * (salt / 1000.0).log10()
}

/// NaN fails too.
pub(crate) fn positive(name: &'static str, value: f64) -> MeltResult<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ThermoError::InvalidConcentration { name, value })
    }
}

/// Calculate the melting temperature of a window of a strand.
///
/// Uses the two-state duplex equation on the window's nearest-neighbor
/// enthalpy and entropy:
///
/// Tm = 1000 x dH / (dS + R x ln(Ct / x)) - 273.15 + 16.6 x log10([Na+])
///
/// where Ct is the strand concentration in M and x is 4, or 1 for a
/// self-complementary window (which also gets the symmetry correction).
///
/// # Args
///
/// - strand: The strand whose window is melted
/// - window: The window to melt
/// - conditions: Salt (mM) and strand (nM) concentrations
/// - ctx: An optional cache context, see [`compute_energy`]
///
/// # Returns
///
/// - [`f64`]: The estimated tm in Celsius
pub fn melting_temperature(
    strand: &Strand<'_>,
    window: Window,
    conditions: &Conditions,
    ctx: Option<&mut ThermoContext>,
) -> MeltResult<f64> {
    conditions.validate()?;

    let thermo = compute_energy(strand, window, ctx)?;
    let self_comp = is_self_complementary(strand.window(window)?);
    let table = NearestNeighborTable::get(strand.alphabet());

    tm_from_thermo(table, thermo, self_comp, conditions)
}

/// Apply the two-state equation and salt correction to summed parameters.
///
/// # Args
///
/// - table: The table whose symmetry correction applies
/// - thermo: Summed enthalpy and entropy of the duplex
/// - self_comp: Whether the duplex is self-complementary
/// - conditions: Salt and strand concentrations
///
/// # Returns
///
/// - [`f64`]: The estimated tm in Celsius, or [`ThermoError::NoStableDuplex`]
///   when the parameters give no temperature above absolute zero
pub fn tm_from_thermo(
    table: &NearestNeighborTable,
    thermo: ThermoResult,
    self_comp: bool,
    conditions: &Conditions,
) -> MeltResult<f64> {
    conditions.validate()?;

    let (thermo, x) = if self_comp {
        (thermo + table.symmetry(), 1.0)
    } else {
        (thermo, 4.0)
    };

    let ct = conditions.dna * 1e-9; // molar
    let est = (thermo.enthalpy * 1000.0) / (thermo.entropy + R * (ct / x).ln()) - KELVIN;
    trace!(
        dh = thermo.enthalpy,
        ds = thermo.entropy,
        self_comp,
        est,
        "two-state tm"
    );

    let tm = est + conditions.salt_correction();
    if !tm.is_finite() || tm <= -KELVIN {
        return Err(ThermoError::NoStableDuplex {
            enthalpy: thermo.enthalpy,
            entropy: thermo.entropy,
        });
    }
    Ok(tm)
}

/// Whether a run of base codes equals its own reverse complement.
///
/// Only unambiguous bases count; a run containing degenerate or
/// unrecognised symbols is never self-complementary.
pub fn is_self_complementary(codes: &[BaseCode]) -> bool {
    !codes.is_empty()
        && codes.iter().all(|&c| is_canonical(c))
        && codes
            .iter()
            .zip(codes.iter().rev())
            .all(|(&a, &b)| a == complement_code(b))
}

/// Return the GC ratio of a window of a strand.
pub fn gc_fraction(strand: &Strand<'_>, window: Window) -> MeltResult<f64> {
    let codes = strand.window(window)?;
    let [g, c] = counts(codes, [G, C]);
    Ok(((g + c) as f64) / (codes.len() as f64))
}

fn counts<const N: usize>(seq: &[u8], symbols: [u8; N]) -> [usize; N] {
    let mut indices = [0; 256];
    let mut counts = [0; N];

    for (i, s) in symbols.into_iter().enumerate() {
        indices[s as usize] = i + 1;
    }

    for &b in seq {
        if indices[b as usize] != 0 {
            counts[indices[b as usize] - 1] += 1;
        }
    }

    counts
}
