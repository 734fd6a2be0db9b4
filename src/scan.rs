//! Slide a window along a strand and melt every position.

use tracing::debug;

use crate::{
    Conditions, NearestNeighborTable, ThermoContext, ThermoResult,
    energy::compute_energy,
    error::{MeltResult, ThermoError},
    strand::{Strand, Window},
    tm::{gc_fraction, is_self_complementary, tm_from_thermo},
};

/// Thermodynamics of one window of a scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanRecord {
    pub window: Window,
    pub thermo: ThermoResult,
    /// Melting temperature in Celsius.
    pub tm: f64,
    /// GC fraction in [0, 1].
    pub gc: f64,
}

/// Melt every `window_len` window of a strand, moving `step` bases at a time.
///
/// Windows start at 0, step, 2 x step, ... for as long as they fit. With a
/// context the scan does one pass over the strand in total, without one it
/// re-sums every window.
///
/// # Args
///
/// - strand: The strand to scan
/// - window_len: Bases per window
/// - step: Bases between window starts
/// - conditions: Salt and strand concentrations
/// - ctx: An optional cache context, sized to at least the strand length
///
/// # Returns
///
/// - [`Vec<ScanRecord>`]: One record per window, in strand order
pub fn scan(
    strand: &Strand<'_>,
    window_len: usize,
    step: usize,
    conditions: &Conditions,
    mut ctx: Option<&mut ThermoContext>,
) -> MeltResult<Vec<ScanRecord>> {
    conditions.validate()?;
    Window::new(0, window_len).check(strand.len())?;
    if step == 0 {
        return Err(ThermoError::InvalidWindow {
            shift: 0,
            length: window_len,
            strand_len: strand.len(),
        });
    }

    let table = NearestNeighborTable::get(strand.alphabet());
    let count = (strand.len() - window_len) / step + 1;
    debug!(
        len = strand.len(),
        window_len,
        step,
        count,
        cached = ctx.is_some(),
        "scanning strand"
    );

    (0..count)
        .map(|i| {
            let window = Window::new(i * step, window_len);
            let thermo = compute_energy(strand, window, ctx.as_deref_mut())?;
            let self_comp = is_self_complementary(strand.window(window)?);
            Ok(ScanRecord {
                window,
                thermo,
                tm: tm_from_thermo(table, thermo, self_comp, conditions)?,
                gc: gc_fraction(strand, window)?,
            })
        })
        .collect()
}
