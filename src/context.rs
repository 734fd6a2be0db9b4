//! Position-indexed cache for sliding-window energy sums.
//!
//! The cache holds running sums of the step records from the start of the
//! strand, so the steps of any window are the difference of two entries and
//! a scan over every shift of a strand costs one pass over the strand.

use tracing::{debug, trace};

use crate::{
    NearestNeighborTable, ThermoResult,
    error::{MeltResult, ThermoError},
    strand::{Alphabet, BaseCode, Strand, Window},
};

/// Caller-owned cache state for energy and Tm calculations.
///
/// Create one per strand scan (or per thread) and pass it by `&mut` to
/// [`crate::compute_energy`] and [`crate::melting_temperature`].
#[derive(Debug)]
pub struct ThermoContext {
    alphabet: Alphabet,
    cache: Option<Cache>,
}

/// Three parallel arrays indexed by absolute strand position.
///
/// Entry `i` holds the sum of the steps starting before position `i`.
#[derive(Debug)]
struct Cache {
    enthalpy: Vec<f64>,
    entropy: Vec<f64>,
    energy: Vec<f64>,
    /// Entries `0..filled` are valid for the bound strand.
    filled: usize,
    /// Fingerprint and length of the strand the entries were computed from.
    strand: Option<(u64, usize)>,
}

impl Cache {
    fn new(savesize: usize) -> Self {
        Self {
            enthalpy: vec![0.0; savesize],
            entropy: vec![0.0; savesize],
            energy: vec![0.0; savesize],
            filled: 0,
            strand: None,
        }
    }

    fn len(&self) -> usize {
        self.enthalpy.len()
    }

    fn get(&self, i: usize) -> ThermoResult {
        ThermoResult {
            enthalpy: self.enthalpy[i],
            entropy: self.entropy[i],
            energy: self.energy[i],
        }
    }

    fn set(&mut self, i: usize, v: ThermoResult) {
        self.enthalpy[i] = v.enthalpy;
        self.entropy[i] = v.entropy;
        self.energy[i] = v.energy;
    }

    /// Drop every entry if the cache was filled from a different strand.
    ///
    /// Strands are told apart by a 64-bit hash and their length, so two
    /// distinct strands of equal length only share entries on a hash
    /// collision.
    fn bind(&mut self, key: (u64, usize)) {
        if self.strand != Some(key) {
            if self.strand.is_some() {
                debug!(filled = self.filled, "strand changed, invalidating melt cache");
            }
            self.strand = Some(key);
            self.filled = 0;
        }
    }

    /// Make entries `0..=last` valid.
    fn fill_to(&mut self, last: usize, codes: &[BaseCode], table: &NearestNeighborTable) {
        if last < self.filled {
            return;
        }
        trace!(from = self.filled, to = last, "extending melt cache");

        for i in self.filled..=last {
            let v = if i == 0 {
                ThermoResult::ZERO
            } else {
                self.get(i - 1) + table.record(codes[i - 1], codes[i]).thermo
            };
            self.set(i, v);
        }
        self.filled = last + 1;
    }
}

impl ThermoContext {
    /// Allocate a cache of `savesize` positions for strands of `alphabet`.
    pub fn new(alphabet: Alphabet, savesize: usize) -> Self {
        let mut ctx = Self {
            alphabet,
            cache: None,
        };
        ctx.init(alphabet, savesize);
        ctx
    }

    /// (Re)allocate the cache, releasing any previous one first.
    pub fn init(&mut self, alphabet: Alphabet, savesize: usize) {
        self.exit();
        debug!(%alphabet, savesize, "allocating melt cache");
        self.alphabet = alphabet;
        self.cache = Some(Cache::new(savesize));
    }

    /// Release the cache. Does nothing if it is not allocated.
    pub fn exit(&mut self) {
        if let Some(cache) = self.cache.take() {
            debug!(savesize = cache.len(), "releasing melt cache");
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.cache.is_some()
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Number of positions the cache was sized for, if allocated.
    pub fn savesize(&self) -> Option<usize> {
        self.cache.as_ref().map(Cache::len)
    }

    /// Number of leading positions currently holding valid sums.
    pub fn filled(&self) -> usize {
        self.cache.as_ref().map_or(0, |c| c.filled)
    }

    /// Sum of the step records inside `window`, through the cache.
    pub(crate) fn step_sum(
        &mut self,
        strand: &Strand<'_>,
        window: Window,
    ) -> MeltResult<ThermoResult> {
        let cache = self.cache.as_mut().ok_or(ThermoError::UninitializedCache)?;

        if strand.alphabet() != self.alphabet {
            return Err(ThermoError::AlphabetMismatch {
                expected: self.alphabet,
                found: strand.alphabet(),
            });
        }
        window.check(strand.len())?;

        let last = window.end() - 1;
        if last >= cache.len() {
            return Err(ThermoError::CacheSizeMismatch {
                capacity: cache.len(),
                requested: last,
            });
        }

        cache.bind((strand.fingerprint(), strand.len()));
        cache.fill_to(last, strand.codes(), NearestNeighborTable::get(self.alphabet));

        Ok(cache.get(last) - cache.get(window.shift))
    }
}
