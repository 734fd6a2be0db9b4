//! Empirical PCR product and annealing temperatures.
//!
//! Rychlik, Spencer and Rhoads (1990), Nucl Acids Res 18: 6409-6412

use crate::{
    error::{MeltResult, ThermoError},
    tm::{positive, salt_correction},
};

/// Estimate the Tm of a long PCR product from its composition.
///
/// Tm = 81.5 + 16.6 x log10([Na+]) + 0.41 x (%GC) - 675 / length
///
/// No nearest-neighbor summation is done, so this stays cheap for
/// amplicons of any length.
///
/// # Args
///
/// - gc_fraction: The GC fraction of the product, in [0, 1]
/// - salt: Monovalent salt concentration in mM
/// - length: Product length in bases
///
/// # Returns
///
/// - [`f64`]: The estimated product tm in Celsius
pub fn product_tm(gc_fraction: f64, salt: f64, length: usize) -> MeltResult<f64> {
    let salt = positive("salt", salt)?;

    if !(0.0..=1.0).contains(&gc_fraction) {
        return Err(ThermoError::InvalidGcFraction(gc_fraction));
    }
    if length == 0 {
        return Err(ThermoError::EmptyProduct);
    }

    Ok(81.5 + salt_correction(salt) + 0.41 * (gc_fraction * 100.0) - 675.0 / length as f64)
}

/// Optimal annealing temperature for a primer and its product.
///
/// Ta = 0.3 x Tm(primer) + 0.7 x Tm(product) - 14.9
///
/// capped at the lower of the two melting temperatures, so a primer that
/// melts well below its product is never annealed above its own Tm.
pub fn anneal_temp(tm_primer: f64, tm_product: f64) -> f64 {
    let ta = 0.3 * tm_primer + 0.7 * tm_product - 14.9;
    ta.min(tm_primer.min(tm_product))
}
