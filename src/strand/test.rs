//! Test strands, windows and base codes.

use super::{A, Alphabet, C, G, Strand, T, Window, base_code, complement_code};
use crate::ThermoError;

#[test]
fn test_base_codes() {
    assert_eq!(base_code(b'a'), A);
    assert_eq!(base_code(b'U'), T);
    assert_eq!(base_code(b'u'), base_code(b'T'));
    assert_eq!(base_code(b'N'), A | C | G | T);
    assert_eq!(base_code(b'S'), C | G);
    assert_eq!(base_code(b'-'), 0);
    assert_eq!(base_code(b'*'), 0);
}

#[test]
fn test_complement_code() {
    assert_eq!(complement_code(A), T);
    assert_eq!(complement_code(T), A);
    assert_eq!(complement_code(C), G);
    assert_eq!(complement_code(G), C);
    // R (A/G) pairs with Y (C/T)
    assert_eq!(complement_code(base_code(b'R')), base_code(b'Y'));
    assert_eq!(complement_code(base_code(b'N')), base_code(b'N'));
    assert_eq!(complement_code(0), 0);
}

#[test]
fn test_detect_alphabet() {
    assert_eq!(Alphabet::detect(b"ACGT").unwrap(), Alphabet::Dna);
    assert_eq!(Alphabet::detect(b"acgu").unwrap(), Alphabet::Rna);
    assert_eq!(Alphabet::detect(b"GGCC").unwrap(), Alphabet::Dna);
    assert_eq!(
        Alphabet::detect(b"ATGCATGACGATUU"),
        Err(ThermoError::MixedAlphabet)
    );
    assert_eq!(Alphabet::from_is_dna(false), Alphabet::Rna);
    assert!(Alphabet::from_is_dna(true).is_dna());
}

#[test]
fn test_window_check() {
    assert!(Window::new(0, 4).check(4).is_ok());
    assert!(Window::new(3, 1).check(4).is_ok());
    assert_eq!(
        Window::new(2, 3).check(4),
        Err(ThermoError::InvalidWindow {
            shift: 2,
            length: 3,
            strand_len: 4
        })
    );
    assert!(Window::new(0, 0).check(4).is_err());
    assert!(Window::new(usize::MAX, 2).check(4).is_err());
    assert_eq!(Window::new(5, 20).end(), 25);
}

#[test]
fn test_protein_rejected() {
    let err = Strand::new(b"MEEPLISKQ", Alphabet::Dna).unwrap_err();
    assert_eq!(
        err,
        ThermoError::ProteinSequence {
            residue: 'E',
            position: 1
        }
    );
    assert!(Strand::strict(b"easfeasfast", Alphabet::Rna).is_err());
    assert!(Strand::detect(b"EASFEASFAST").is_err());
}

#[test]
fn test_symbol_policy() {
    // lenient strands keep unknown symbols as code 0
    let strand = Strand::new(b"ACG*TA", Alphabet::Dna).unwrap();
    assert_eq!(strand.len(), 6);
    assert_eq!(strand.codes()[3], 0);

    let err = Strand::strict(b"ACG*TA", Alphabet::Dna).unwrap_err();
    assert_eq!(
        err,
        ThermoError::UnsupportedSymbol {
            symbol: '*',
            position: 3
        }
    );

    // degenerate codes are fine for strict strands
    assert!(Strand::strict(b"ACGNRYTA", Alphabet::Dna).is_ok());
}

#[test]
fn test_fingerprint() {
    let a = Strand::new(b"ACGTACGT", Alphabet::Dna).unwrap();
    let b = Strand::new(b"acgtacgt", Alphabet::Dna).unwrap();
    let c = Strand::new(b"ACGTACGA", Alphabet::Dna).unwrap();
    let d = Strand::new(b"ACGTACGT", Alphabet::Rna).unwrap();

    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_ne!(a.fingerprint(), c.fingerprint());
    assert_ne!(a.fingerprint(), d.fingerprint());
}

#[test]
fn test_strand_window() {
    let strand = Strand::new(b"GGATTACA", Alphabet::Dna).unwrap();
    assert_eq!(strand.window(Window::new(2, 3)).unwrap(), &[A, T, T]);
    assert!(strand.window(Window::new(6, 3)).is_err());
    assert_eq!(strand.as_bytes(), b"GGATTACA");
}
