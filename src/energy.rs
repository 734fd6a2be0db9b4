//! Sum nearest-neighbor enthalpy and entropy over a window of a strand.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::{
    NearestNeighborTable, ThermoContext,
    error::MeltResult,
    strand::{Strand, Window},
};

/// Kelvin offset of the Celsius scale.
pub const KELVIN: f64 = 273.15;

/// Temperature the tabulated free energies refer to, in Celsius.
pub const REFERENCE_TEMP: f64 = 37.0;

/// Enthalpy (kcal/mol), entropy (cal/(mol x K)) and free energy at 37 C (kcal/mol).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThermoResult {
    pub enthalpy: f64,
    pub entropy: f64,
    pub energy: f64,
}

impl ThermoResult {
    pub const ZERO: Self = Self {
        enthalpy: 0.0,
        entropy: 0.0,
        energy: 0.0,
    };

    /// Derive the free energy at the reference temperature.
    pub fn new(enthalpy: f64, entropy: f64) -> Self {
        Self {
            enthalpy,
            entropy,
            energy: calc_d_g(enthalpy, entropy, REFERENCE_TEMP + KELVIN),
        }
    }

    /// Free energy at `temp` Celsius.
    pub fn energy_at(&self, temp: f64) -> f64 {
        calc_d_g(self.enthalpy, self.entropy, temp + KELVIN)
    }
}

impl Add for ThermoResult {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            enthalpy: self.enthalpy + rhs.enthalpy,
            entropy: self.entropy + rhs.entropy,
            energy: self.energy + rhs.energy,
        }
    }
}

impl AddAssign for ThermoResult {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for ThermoResult {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            enthalpy: self.enthalpy - rhs.enthalpy,
            entropy: self.entropy - rhs.entropy,
            energy: self.energy - rhs.energy,
        }
    }
}

impl Mul<f64> for ThermoResult {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            enthalpy: self.enthalpy * rhs,
            entropy: self.entropy * rhs,
            energy: self.energy * rhs,
        }
    }
}

impl Sum for ThermoResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Find the free energy given delta h, s and temp
///
/// # Args
///
/// - d_h: The enthalpy increment in kcal / mol
/// - d_s: The entropy increment in cal / mol
/// - temp: The temperature in Kelvin
///
/// # Returns
///
/// - [`f64`]: The free energy increment in kcal / mol
pub fn calc_d_g(d_h: f64, d_s: f64, temp: f64) -> f64 {
    d_h - temp * (d_s / 1000.0)
}

/// Calculate enthalpy, entropy and free energy of a window of a strand.
///
/// Each dinucleotide step in the window adds its table record, then the
/// initiation term and the terminal corrections for the first and last base
/// are added once. Self-complementary symmetry is left to the Tm calculation.
///
/// With a context, the step sums are read from (and written to) its cache,
/// which only changes the cost, never the result.
///
/// # Args
///
/// - strand: The strand to read
/// - window: The window of the strand to sum
/// - ctx: An optional cache context, sized to at least `window.end()`
///
/// # Returns
///
/// - [`ThermoResult`]: Enthalpy, entropy and free energy at 37 C
pub fn compute_energy(
    strand: &Strand<'_>,
    window: Window,
    ctx: Option<&mut ThermoContext>,
) -> MeltResult<ThermoResult> {
    let codes = strand.window(window)?;
    let table = NearestNeighborTable::get(strand.alphabet());

    let steps = match ctx {
        Some(ctx) => ctx.step_sum(strand, window)?,
        None => sum_steps(table, codes),
    };

    Ok(steps + table.initiation(codes[0], codes[codes.len() - 1]))
}

/// Sum the step records over a run of base codes.
pub(crate) fn sum_steps(table: &NearestNeighborTable, codes: &[u8]) -> ThermoResult {
    codes
        .windows(2)
        .map(|pair| table.record(pair[0], pair[1]).thermo)
        .sum()
}

#[cfg(test)]
mod test;
