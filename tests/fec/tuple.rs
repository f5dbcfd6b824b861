//! Tuple generation golden values
//!
//! Encoders and decoders built independently must agree on every tuple, so
//! these values are fixed.

use fastfec::tuple::{degree, positions, rand, Tuple};
use fastfec::derive_parameters;

#[test]
fn tuple_golden_values() {
    let cases = [
        // (J, W, P, P1, X), tuple, positions
        (
            (5, 101, 17, 17, 1234),
            Tuple { d: 3, a: 8, b: 51, d1: 2, a1: 10, b1: 5 },
            vec![51, 59, 67, 106, 116],
        ),
        (
            (3, 257, 29, 29, 77),
            Tuple { d: 3, a: 129, b: 223, d1: 3, a1: 28, b1: 20 },
            vec![223, 95, 224, 277, 276, 275],
        ),
        (
            (7, 503, 31, 31, 999),
            Tuple { d: 6, a: 12, b: 398, d1: 2, a1: 8, b1: 4 },
            vec![398, 410, 422, 434, 446, 458, 507, 515],
        ),
    ];

    for ((j, w, p, p1, x), expected, expected_positions) in cases {
        let tuple = Tuple::from_constants(j, w, p1, x);
        assert_eq!(tuple, expected, "J={} W={} X={}", j, w, x);
        assert_eq!(tuple.positions(w, p, p1).as_slice(), &expected_positions[..]);
    }
}

#[test]
fn rand_golden_values() {
    // V0[0] ^ V1[0] ^ V2[0] ^ V3[0]
    assert_eq!(rand(0, 0, u32::MAX), 415_381_529);
    // one byte of y per table: V0[4] ^ V1[3] ^ V2[2] ^ V3[1]
    assert_eq!(rand(0x0102_0304, 0, u32::MAX), 0xc035_5f6b);
    assert_eq!(rand(0xdead_beef, 3, 17), 12);
}

#[test]
fn degree_is_capped_by_w() {
    assert_eq!(degree(0, 100), 1);
    assert_eq!(degree(5243, 100), 2);
    assert_eq!(degree(529_531, 100), 3);
    assert_eq!(degree((1 << 20) - 1, 100), 30);
    assert_eq!(degree((1 << 20) - 1, 17), 15);
}

#[test]
fn positions_stay_in_range() {
    for k in [4, 10, 57, 250, 1000] {
        let p = derive_parameters(k, 4).unwrap();
        for isi in (0..p.k_prime() as u32).chain([5_000, 1 << 20, u32::MAX]) {
            let pos = positions(&p, isi);
            let tuple = Tuple::new(&p, isi);
            assert_eq!(pos.len(), tuple.d + tuple.d1);
            assert!(tuple.d >= 1 && tuple.d <= p.w() - 2);
            assert!(tuple.d1 == 2 || tuple.d1 == 3);
            assert!(pos[..tuple.d].iter().all(|&c| c < p.w()));
            assert!(pos[tuple.d..].iter().all(|&c| c >= p.w() && c < p.l()));
        }
    }
}

#[test]
fn tuples_are_deterministic() {
    let p = derive_parameters(321, 8).unwrap();
    for isi in [0u32, 7, 330, 99_999] {
        assert_eq!(Tuple::new(&p, isi), Tuple::new(&p, isi));
        assert_eq!(positions(&p, isi), positions(&p, isi));
    }
}
