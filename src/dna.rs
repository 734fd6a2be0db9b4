//! DNA enthalpy and entropy change parameters.

use crate::{BpEnergy, Comp, NearestNeighborTable, strand::Alphabet};

use std::sync::LazyLock;

pub fn complement() -> Comp {
    pub static RAW_COMPLEMENT: [(u8, u8); 4] =
        [(b'A', b'T'), (b'T', b'A'), (b'G', b'C'), (b'C', b'G')];

    Comp::from_iter(RAW_COMPLEMENT)
}

/// Unified nearest-neighbor parameters, delta H in kcal/mol and
/// delta S in cal/(K x mol).
///
/// The Thermodynamics of DNA Structural Motifs
/// SantaLucia and Hicks, 2004
/// doi: 10.1146/annurev.biophys.32.110601.141800
pub fn nn() -> BpEnergy {
    pub static RAW_NN: [(&[u8], (f64, f64)); 14] = [
        (b"init", (0.2, -5.7)),
        (b"init_G/C", (0.0, 0.0)),
        (b"init_A/T", (2.2, 6.9)),
        (b"sym", (0.0, -1.4)),
        (b"AA/TT", (-7.6, -21.3)),
        (b"AT/TA", (-7.2, -20.4)),
        (b"TA/AT", (-7.2, -21.3)),
        (b"CA/GT", (-8.5, -22.7)),
        (b"GT/CA", (-8.4, -22.4)),
        (b"CT/GA", (-7.8, -21.0)),
        (b"GA/CT", (-8.2, -22.2)),
        (b"CG/GC", (-10.6, -27.2)),
        (b"GC/CG", (-9.8, -24.4)),
        (b"GG/CC", (-8.0, -19.9)),
    ];

    BpEnergy::build(false, RAW_NN)
}

pub fn dna() -> &'static NearestNeighborTable {
    pub static DNA: LazyLock<NearestNeighborTable> =
        LazyLock::new(|| NearestNeighborTable::build(Alphabet::Dna, &nn(), &complement()));
    &DNA
}
