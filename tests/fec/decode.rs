//! Decoding from partial symbol sets

use crate::common::{
    encode_symbols, init_logging, recovered_block, source_block, TrackingAllocator,
};
use fastfec::{
    derive_parameters, try_decode, try_decode_sparse, DecodeFailure, FecError, HeapAllocator,
    InvalidInput, Origin, Purpose, Symbol,
};

fn as_symbols(received: &[(u32, Vec<u8>)]) -> Vec<Symbol<'_>> {
    received
        .iter()
        .map(|(esi, data)| Symbol::new(*esi, data))
        .collect()
}

#[test]
fn one_lost_source_symbol() {
    init_logging();
    let heap = HeapAllocator::new();
    let params = derive_parameters(4, 8).unwrap();
    let block = source_block(&params, 11);
    let received = encode_symbols(&params, &block, &[0, 1, 3, 4, 5]);

    let decoded = try_decode(&params, &as_symbols(&received), &heap).unwrap();
    assert_eq!(decoded.origin(), Origin::Decoded);
    let mut out = [0u8; 8];
    decoded.recover_symbol(2, &mut out).unwrap();
    assert_eq!(&out[..], &block[16..24]);
    assert_eq!(recovered_block(&decoded), block);
}

#[test]
fn too_few_symbols_fail_cleanly() {
    init_logging();
    let alloc = TrackingAllocator::new();
    let params = derive_parameters(10, 16).unwrap();
    let block = source_block(&params, 12);
    let esis: Vec<u32> = (0..9).collect();
    let received = encode_symbols(&params, &block, &esis);

    let err = try_decode(&params, &as_symbols(&received), &alloc).unwrap_err();
    assert!(err.is_decode_failure());
    assert!(matches!(
        err,
        FecError::DecodeFailed(DecodeFailure::InsufficientSymbols { rows: 26, required: 27 })
    ));
    assert_eq!(alloc.outstanding(Purpose::Intermediate), 0);
    assert_eq!(alloc.outstanding(Purpose::Scratch), 0);
}

#[test]
fn retry_with_more_symbols() {
    let heap = HeapAllocator::new();
    let params = derive_parameters(4, 8).unwrap();
    let block = source_block(&params, 13);
    let all = encode_symbols(&params, &block, &[0, 1, 2, 4]);

    assert!(try_decode(&params, &as_symbols(&all[..3]), &heap)
        .unwrap_err()
        .is_decode_failure());
    let decoded = try_decode(&params, &as_symbols(&all), &heap).unwrap();
    assert_eq!(recovered_block(&decoded), block);
}

#[test]
fn repair_symbols_only() {
    let heap = HeapAllocator::new();
    let params = derive_parameters(4, 8).unwrap();
    let block = source_block(&params, 14);
    let received = encode_symbols(&params, &block, &[4, 5, 6, 7]);

    let decoded = try_decode(&params, &as_symbols(&received), &heap).unwrap();
    assert_eq!(recovered_block(&decoded), block);
}

#[test]
fn repair_symbols_only_larger_block() {
    let heap = HeapAllocator::new();
    let params = derive_parameters(100, 32).unwrap();
    let block = source_block(&params, 15);
    let esis: Vec<u32> = (100..203).collect();
    let received = encode_symbols(&params, &block, &esis);

    let decoded = try_decode(&params, &as_symbols(&received), &heap).unwrap();
    assert_eq!(recovered_block(&decoded), block);
}

#[test]
fn mixed_source_and_repair() {
    let heap = HeapAllocator::new();
    let params = derive_parameters(50, 10).unwrap();
    let block = source_block(&params, 16);
    let esis: Vec<u32> = (0..50).step_by(2).chain(60..88).collect();
    let received = encode_symbols(&params, &block, &esis);

    let decoded = try_decode(&params, &as_symbols(&received), &heap).unwrap();
    assert_eq!(recovered_block(&decoded), block);
}

#[test]
fn fountain_symbols_far_out() {
    let heap = HeapAllocator::new();
    let params = derive_parameters(10, 16).unwrap();
    let block = source_block(&params, 17);
    let esis: Vec<u32> = (1 << 20..(1 << 20) + 12).collect();
    let received = encode_symbols(&params, &block, &esis);

    let decoded = try_decode(&params, &as_symbols(&received), &heap).unwrap();
    assert_eq!(recovered_block(&decoded), block);

    // Decoded symbols regenerate the same repair symbols
    for (esi, data) in &received {
        assert_eq!(&decoded.synthesizer().recover_symbol_to_vec(*esi).unwrap(), data);
    }
}

#[test]
fn duplicate_esi_rejected() {
    let heap = HeapAllocator::new();
    let params = derive_parameters(4, 8).unwrap();
    let data = [0u8; 8];
    let symbols = [Symbol::new(0, &data), Symbol::new(0, &data)];
    assert!(matches!(
        try_decode(&params, &symbols, &heap),
        Err(FecError::InvalidInput(InvalidInput::UnsortedEsi { previous: 0, esi: 0 }))
    ));
}

#[test]
fn short_symbol_rejected() {
    let heap = HeapAllocator::new();
    let params = derive_parameters(4, 8).unwrap();
    let data = [0u8; 8];
    let short = [0u8; 5];
    let symbols = [Symbol::new(0, &data), Symbol::new(6, &short)];
    assert!(matches!(
        try_decode(&params, &symbols, &heap),
        Err(FecError::InvalidInput(InvalidInput::SymbolTooShort { esi: 6, actual: 5, expected: 8 }))
    ));
}

#[test]
fn sparse_slots_decode() {
    let heap = HeapAllocator::new();
    let params = derive_parameters(10, 16).unwrap();
    let block = source_block(&params, 18);
    let esis = [0u32, 1, 2, 4, 5, 6, 8, 9, 10, 11, 12, 13];
    let received = encode_symbols(&params, &block, &esis);

    let mut slots: Vec<Option<&[u8]>> = vec![None; 14];
    for (esi, data) in &received {
        slots[*esi as usize] = Some(data);
    }
    let decoded = try_decode_sparse(&params, &slots, received.len(), &heap).unwrap();
    assert_eq!(recovered_block(&decoded), block);

    assert!(matches!(
        try_decode_sparse(&params, &slots, 11, &heap),
        Err(FecError::InvalidInput(InvalidInput::ValidSymbolCount { declared: 11, actual: 12 }))
    ));
}

#[test]
fn decode_releases_scratch() {
    let alloc = TrackingAllocator::new();
    let params = derive_parameters(10, 16).unwrap();
    let block = source_block(&params, 19);
    let esis: Vec<u32> = (10..22).collect();
    let received = encode_symbols(&params, &block, &esis);

    let decoded = try_decode(&params, &as_symbols(&received), &alloc).unwrap();
    assert_eq!(alloc.outstanding(Purpose::Scratch), 0);
    assert_eq!(alloc.outstanding(Purpose::Intermediate), 1);
    // S + H + (K' - K) + N rows
    assert_eq!(decoded.row_count(), 7 + 10 + 12);
    assert_eq!(recovered_block(&decoded), block);
    decoded.release(&alloc);
    assert_eq!(alloc.outstanding(Purpose::Intermediate), 0);
}
