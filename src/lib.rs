#![doc = include_str!("../README.md")]
#![deny(future_incompatible)]
// #![deny(
//     clippy::all,
//     clippy::pedantic,
//     clippy::nursery,
//     missing_docs,
// )]
// #![allow(clippy::cast_precision_loss)]

mod util;

pub mod context;
pub mod dna;
pub mod energy;
pub mod error;
pub mod pcr;
pub mod rna;
pub mod scan;
pub mod strand;
pub mod table;
pub mod tm;

use std::ops::Index;

pub use context::ThermoContext;
pub use energy::{ThermoResult, compute_energy};
pub use error::{MeltResult, ThermoError};
pub use pcr::{anneal_temp, product_tm};
pub use scan::{ScanRecord, scan};
pub use strand::{Alphabet, Strand, Window};
pub use table::{MeltRecord, NearestNeighborTable, pair_score};
pub use tm::{Conditions, gc_fraction, melting_temperature};
pub use util::{round1, round2};

use rustc_hash::FxHashMap as HashMap;

/// Watson-Crick complement of each canonical base, as raw bytes.
#[derive(Debug)]
pub struct Comp([Option<u8>; 256]);

impl FromIterator<(u8, u8)> for Comp {
    fn from_iter<T: IntoIterator<Item = (u8, u8)>>(iter: T) -> Self {
        let mut this = Self([None; 256]);
        for (i, b) in iter {
            this.0[i as usize] = Some(b);
        }
        this
    }
}

impl Index<u8> for Comp {
    type Output = u8;

    fn index(&self, index: u8) -> &Self::Output {
        self.0[index as usize]
            .as_ref()
            .expect("no complement for base")
    }
}

/// Raw (delta H, delta S) parameters keyed by a short byte label such as `b"AA/TT"`.
#[derive(Debug, Default)]
pub struct BpEnergy {
    values: HashMap<u64, (f64, f64)>,
}

pub fn interpret_bytes<'a>(mut b: impl Iterator<Item = &'a u8>) -> u64 {
    u64::from_be_bytes(std::array::from_fn(|_| b.next().copied().unwrap_or(0)))
}

impl BpEnergy {
    /// Build the map, also inserting each label read backwards.
    ///
    /// `AA/TT` read backwards is `TT/AA`, the same stack seen from the other
    /// strand, so ten labels cover all sixteen steps. With `replace` unset an
    /// explicit label always wins over a reversed one.
    pub fn build<'a, I>(replace: bool, iter: I) -> Self
    where
        I: IntoIterator<Item = (&'a [u8], (f64, f64))>,
    {
        let mut values = HashMap::default();

        for (b, v) in iter {
            assert!(b.len() <= 8);
            let forward = interpret_bytes(b.iter());
            let backward = interpret_bytes(b.iter().rev());

            values.insert(forward, v);
            if replace || !values.contains_key(&backward) {
                values.insert(backward, v);
            }
        }

        Self { values }
    }

    pub fn get_ref<const N: usize>(&self, b: [u8; N]) -> Option<&(f64, f64)> {
        self.values.get(&interpret_bytes(b.iter()))
    }

    /// Lookup by a label of any length, e.g. `b"init_A/T"`.
    pub fn get_label(&self, label: &[u8]) -> Option<(f64, f64)> {
        self.values.get(&interpret_bytes(label.iter())).copied()
    }
}

impl<const N: usize> Index<[u8; N]> for BpEnergy {
    type Output = (f64, f64);

    fn index(&self, i: [u8; N]) -> &Self::Output {
        self.get_ref(i).expect("no parameters for label")
    }
}
