//! Test window energy sums.

use approx::assert_relative_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{ThermoResult, calc_d_g, compute_energy};
use crate::{
    NearestNeighborTable, ThermoContext, ThermoError,
    strand::{Alphabet, Strand, Window},
};

fn random_seq(rng: &mut StdRng, len: usize, bases: &[u8]) -> Vec<u8> {
    (0..len)
        .map(|_| bases[rng.gen_range(0..bases.len())])
        .collect()
}

#[test]
fn test_calc_d_g() {
    assert_relative_eq!(calc_d_g(-7.6, -21.3, 310.15), -0.993805, epsilon = 1e-9);
    let t = ThermoResult::new(-7.6, -21.3);
    assert_relative_eq!(t.energy, t.energy_at(37.0));
    assert!(t.energy_at(60.0) > t.energy);
}

#[test]
fn test_known_windows() {
    // hand summed from SantaLucia & Hicks (2004)
    let cases = [
        ("GGGACCGCCT", -74.4, -195.6),
        ("ACGTACGTAC", -75.2, -207.8),
        ("CCATTGCTACC", -80.8, -221.7),
        ("AAAAAAAAAAAAAAAAAAAA", -139.8, -396.6),
    ];

    for (seq, dh, ds) in cases {
        let strand = Strand::new(seq.as_bytes(), Alphabet::Dna).unwrap();
        let t = compute_energy(&strand, Window::full(strand.len()), None).unwrap();
        assert_relative_eq!(t.enthalpy, dh, epsilon = 1e-9);
        assert_relative_eq!(t.entropy, ds, epsilon = 1e-9);
        assert_relative_eq!(t.energy, calc_d_g(dh, ds, 310.15), epsilon = 1e-9);
    }
}

#[test]
fn test_window_inside_strand() {
    let strand = Strand::new(b"TTTTGGGACCGCCTTTTT", Alphabet::Dna).unwrap();
    let t = compute_energy(&strand, Window::new(4, 10), None).unwrap();
    assert_relative_eq!(t.enthalpy, -74.4, epsilon = 1e-9);
    assert_relative_eq!(t.entropy, -195.6, epsilon = 1e-9);
}

#[test]
fn test_single_base_window() {
    let dna = NearestNeighborTable::get(Alphabet::Dna);
    let strand = Strand::new(b"ACGT", Alphabet::Dna).unwrap();

    // no steps, just the ends, which are the same base
    let t = compute_energy(&strand, Window::new(1, 1), None).unwrap();
    assert_eq!(t, dna.initiation(strand.codes()[1], strand.codes()[1]));
}

#[test]
fn test_invalid_window() {
    let strand = Strand::new(b"ACGT", Alphabet::Dna).unwrap();
    assert_eq!(
        compute_energy(&strand, Window::new(2, 3), None),
        Err(ThermoError::InvalidWindow {
            shift: 2,
            length: 3,
            strand_len: 4
        })
    );
    assert!(compute_energy(&strand, Window::new(0, 0), None).is_err());
}

#[test]
fn test_unknown_symbols_contribute_nothing() {
    let dna = NearestNeighborTable::get(Alphabet::Dna);
    let strand = Strand::new(b"AC*GT", Alphabet::Dna).unwrap();
    let t = compute_energy(&strand, Window::full(5), None).unwrap();

    let expected = dna.step(b'A', b'C').unwrap().thermo
        + dna.step(b'G', b'T').unwrap().thermo
        + dna.initiation(strand.codes()[0], strand.codes()[4]);
    assert_relative_eq!(t.enthalpy, expected.enthalpy, epsilon = 1e-9);
    assert_relative_eq!(t.entropy, expected.entropy, epsilon = 1e-9);
}

#[test]
fn test_rna_energy() {
    let rna = Strand::new(b"GCAUGC", Alphabet::Rna).unwrap();
    let dna = Strand::new(b"GCATGC", Alphabet::Dna).unwrap();

    let r = compute_energy(&rna, Window::full(6), None).unwrap();
    let d = compute_energy(&dna, Window::full(6), None).unwrap();
    // GC CA AU UG GC, Xia et al. (1998) plus initiation
    let dh = -14.88 - 10.44 - 9.38 - 10.44 - 14.88 + 3.61;
    assert_relative_eq!(r.enthalpy, dh, epsilon = 1e-9);
    assert!(r.enthalpy < d.enthalpy);
}

#[test]
fn test_cache_matches_uncached() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let seq = random_seq(&mut rng, 200, b"ACGT");
    let strand = Strand::new(&seq, Alphabet::Dna).unwrap();
    let mut ctx = ThermoContext::new(Alphabet::Dna, strand.len());

    for _ in 0..50 {
        let length = rng.gen_range(1..=40);
        let shift = rng.gen_range(0..=strand.len() - length);
        let window = Window::new(shift, length);

        let plain = compute_energy(&strand, window, None).unwrap();
        let cached = compute_energy(&strand, window, Some(&mut ctx)).unwrap();

        assert_relative_eq!(plain.enthalpy, cached.enthalpy, epsilon = 1e-4);
        assert_relative_eq!(plain.entropy, cached.entropy, epsilon = 1e-4);
        assert_relative_eq!(plain.energy, cached.energy, epsilon = 1e-4);
    }
}

#[test]
fn test_cache_matches_uncached_degenerate() {
    let mut rng = StdRng::seed_from_u64(7);
    let seq = random_seq(&mut rng, 200, b"ACGUNRYacgu-");
    let strand = Strand::new(&seq, Alphabet::Rna).unwrap();
    let mut ctx = ThermoContext::new(Alphabet::Rna, 256);

    for shift in 0..=strand.len() - 20 {
        let window = Window::new(shift, 20);
        let plain = compute_energy(&strand, window, None).unwrap();
        let cached = compute_energy(&strand, window, Some(&mut ctx)).unwrap();
        assert_relative_eq!(plain.enthalpy, cached.enthalpy, epsilon = 1e-4);
        assert_relative_eq!(plain.entropy, cached.entropy, epsilon = 1e-4);
    }
}
