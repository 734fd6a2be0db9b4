//! RNA enthalpy and entropy change parameters.
//!
//! Labels are written with T so the raw keys line up with the DNA table;
//! a U in a strand is read as T before any lookup.

use crate::{BpEnergy, Comp, NearestNeighborTable, strand::Alphabet};

use std::sync::LazyLock;

pub fn complement() -> Comp {
    pub static RAW_COMPLEMENT: [(u8, u8); 5] = [
        (b'A', b'T'),
        (b'T', b'A'),
        (b'U', b'A'),
        (b'G', b'C'),
        (b'C', b'G'),
    ];

    Comp::from_iter(RAW_COMPLEMENT)
}

/// Watson-Crick RNA/RNA nearest neighbors
///
/// Xia et al. (1998), Biochemistry 37: 14719-14735
pub fn nn() -> BpEnergy {
    pub static RAW_NN: [(&[u8], (f64, f64)); 14] = [
        (b"init", (3.61, -1.5)),
        (b"init_G/C", (0.0, 0.0)),
        (b"init_A/T", (3.72, 10.5)),
        (b"sym", (0.0, -1.4)),
        (b"AA/TT", (-6.82, -19.0)),
        (b"AT/TA", (-9.38, -26.7)),
        (b"TA/AT", (-7.69, -20.5)),
        (b"CA/GT", (-10.44, -26.9)),
        (b"GT/CA", (-11.40, -29.5)),
        (b"CT/GA", (-10.48, -27.1)),
        (b"GA/CT", (-12.44, -32.5)),
        (b"CG/GC", (-10.64, -26.7)),
        (b"GC/CG", (-14.88, -36.9)),
        (b"GG/CC", (-13.39, -32.7)),
    ];

    BpEnergy::build(false, RAW_NN)
}

pub fn rna() -> &'static NearestNeighborTable {
    pub static RNA: LazyLock<NearestNeighborTable> =
        LazyLock::new(|| NearestNeighborTable::build(Alphabet::Rna, &nn(), &complement()));
    &RNA
}
