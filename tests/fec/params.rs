//! Parameter derivation against the systematic index table

use fastfec::params::{lookup, SYSTEMATIC_INDICES};
use fastfec::{derive_parameters, FastFec, FecError, HeapAllocator, MAX_SOURCE_SYMBOLS};

#[test]
fn table_is_sorted_and_complete() {
    assert_eq!(SYSTEMATIC_INDICES.len(), 125);
    assert_eq!(SYSTEMATIC_INDICES[0].k_prime, 10);
    assert_eq!(
        SYSTEMATIC_INDICES[124].k_prime as usize,
        MAX_SOURCE_SYMBOLS
    );
    for pair in SYSTEMATIC_INDICES.windows(2) {
        assert!(pair[0].k_prime < pair[1].k_prime);
    }
}

#[test]
fn lookup_picks_smallest_covering_row() {
    assert_eq!(lookup(1).unwrap().k_prime, 10);
    assert_eq!(lookup(10).unwrap().k_prime, 10);
    assert_eq!(lookup(11).unwrap().k_prime, 12);
    assert_eq!(lookup(50).unwrap().k_prime, 55);
    assert_eq!(lookup(100).unwrap().k_prime, 101);
    assert!(lookup(MAX_SOURCE_SYMBOLS + 1).is_none());
}

#[test]
fn derived_values_follow_table_row() {
    let p = derive_parameters(100, 64).unwrap();
    assert_eq!(p.k_prime(), 101);
    assert_eq!(p.j(), 562);
    assert_eq!((p.s(), p.h(), p.w()), (17, 10, 113));
    assert_eq!(p.l(), 128);
    assert_eq!(p.p(), 15);
    assert_eq!(p.p1(), 17);
    assert_eq!(p.u(), 5);
    assert_eq!(p.b(), 96);
    assert_eq!(p.source_block_len(), 6400);
}

#[test]
fn out_of_range_parameters() {
    assert!(matches!(
        derive_parameters(0, 16),
        Err(FecError::ParamOutOfRange { k: 0, .. })
    ));
    assert!(matches!(
        derive_parameters(16, 0),
        Err(FecError::ParamOutOfRange { t: 0, .. })
    ));
    assert!(matches!(
        derive_parameters(MAX_SOURCE_SYMBOLS + 1, 16),
        Err(FecError::ParamOutOfRange { .. })
    ));
}

#[test]
fn esi_mapping_skips_padding() {
    let p = derive_parameters(50, 4).unwrap();
    assert_eq!(p.padding_symbols(), 5);
    assert_eq!(p.esi_to_isi(49).unwrap(), 49);
    assert_eq!(p.esi_to_isi(50).unwrap(), 55);
    for isi in 50..55 {
        assert_eq!(p.isi_to_esi(isi), None);
    }
    for esi in [0u32, 49, 50, 1000, 1 << 20, p.max_esi()] {
        let isi = p.esi_to_isi(esi).unwrap();
        assert_eq!(p.isi_to_esi(isi), Some(esi));
    }
    assert_eq!(p.max_esi(), u32::MAX - 5);
    assert!(p.esi_to_isi(u32::MAX).is_err());
}

#[test]
fn every_table_row_encodes() {
    let heap = HeapAllocator::new();
    let fec = FastFec::default();
    for entry in SYSTEMATIC_INDICES.iter() {
        let k = entry.k_prime as usize;
        let params = derive_parameters(k, 2).unwrap();
        let block: Vec<u8> = (0..params.source_block_len())
            .map(|i| (i % 251) as u8)
            .collect();

        let symbols = fec
            .generate_intermediate_from_buffer(&params, &block, &heap)
            .unwrap_or_else(|e| panic!("K'={} failed to encode: {}", k, e));

        let mut out = [0u8; 2];
        for esi in [0, k - 1] {
            fec.recover_symbol(&symbols, esi as u32, &mut out).unwrap();
            assert_eq!(&out[..], &block[esi * 2..esi * 2 + 2], "K'={}", k);
        }
        symbols.release(&heap);
    }
}
