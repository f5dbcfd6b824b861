//! Encode, synthesize and read back

use crate::common::{source_block, source_symbol, TrackingAllocator};
use fastfec::{
    derive_parameters, generate_intermediate_from_buffer, generate_intermediate_from_symbols,
    get_intermediate_row, recover_symbol, CodecConfig, FastFec, FecError, HeapAllocator,
    InvalidInput, Origin, Parameters, Purpose,
};

#[test]
fn systematic_symbols_reproduce_source() {
    let heap = HeapAllocator::new();
    for (k, t) in [(1, 1), (4, 8), (10, 16), (11, 3), (57, 64), (300, 5)] {
        let params = derive_parameters(k, t).unwrap();
        let block = source_block(&params, k as u8);
        let symbols = generate_intermediate_from_buffer(&params, &block, &heap).unwrap();

        let mut out = vec![0u8; t];
        for esi in 0..k {
            recover_symbol(&symbols, esi as u32, &mut out).unwrap();
            assert_eq!(out, source_symbol(&params, &block, esi), "K={} esi={}", k, esi);
        }
    }
}

#[test]
fn separate_symbols_match_contiguous_block() {
    let heap = HeapAllocator::new();
    let params = derive_parameters(23, 12).unwrap();
    let block = source_block(&params, 9);
    // Longer inputs are fine; only T bytes are read
    let owned: Vec<Vec<u8>> = block
        .chunks(12)
        .map(|c| {
            let mut v = c.to_vec();
            v.extend_from_slice(&[0xEE; 4]);
            v
        })
        .collect();
    let sources: Vec<&[u8]> = owned.iter().map(Vec::as_slice).collect();

    let a = generate_intermediate_from_buffer(&params, &block, &heap).unwrap();
    let b = generate_intermediate_from_symbols(&params, &sources, &heap).unwrap();
    for i in 0..params.l() {
        assert_eq!(a.row(i).unwrap(), b.row(i).unwrap());
    }
}

#[test]
fn intermediate_rows_are_t_bytes() {
    let heap = HeapAllocator::new();
    let params = derive_parameters(4, 8).unwrap();
    let block = source_block(&params, 1);
    let symbols = generate_intermediate_from_buffer(&params, &block, &heap).unwrap();

    assert_eq!(symbols.index_table().len(), params.l());
    for i in 0..params.l() {
        assert_eq!(get_intermediate_row(&symbols, i).unwrap().len(), 8);
        let aligned = symbols.aligned_row(i).unwrap();
        assert_eq!(aligned.len(), 16);
        assert!(aligned[8..].iter().all(|&b| b == 0));
    }
    assert!(matches!(
        symbols.row(params.l()),
        Err(FecError::InvalidInput(InvalidInput::RowOutOfRange { index: 27, rows: 27 }))
    ));
}

#[test]
fn unaligned_rows_give_same_symbols() {
    let heap = HeapAllocator::new();
    let params = derive_parameters(30, 7).unwrap();
    let block = source_block(&params, 2);

    let packed = FastFec::new(CodecConfig::default().with_aligned_rows(false));
    let a = packed
        .generate_intermediate_from_buffer(&params, &block, &heap)
        .unwrap();
    let b = FastFec::default()
        .generate_intermediate_from_buffer(&params, &block, &heap)
        .unwrap();
    assert_eq!(a.stride(), 7);
    assert_eq!(b.stride(), 16);

    for esi in [0u32, 29, 30, 31, 500, 1 << 20] {
        assert_eq!(
            a.synthesizer().recover_symbol_to_vec(esi).unwrap(),
            b.synthesizer().recover_symbol_to_vec(esi).unwrap()
        );
    }
}

#[test]
fn repair_symbols_are_deterministic() {
    let heap = HeapAllocator::new();
    let params = derive_parameters(10, 16).unwrap();
    let block = source_block(&params, 4);
    let first = generate_intermediate_from_buffer(&params, &block, &heap).unwrap();
    let second = generate_intermediate_from_buffer(&params, &block, &heap).unwrap();

    for esi in [10u32, 11, 1000, 1 << 20, params.max_esi()] {
        let a = first.synthesizer().recover_symbol_to_vec(esi).unwrap();
        let b = second.synthesizer().recover_symbol_to_vec(esi).unwrap();
        assert_eq!(a, b, "esi {}", esi);
        assert_eq!(a, first.synthesizer().recover_symbol_to_vec(esi).unwrap());
    }
}

#[test]
fn recover_symbol_zeroes_tail() {
    let heap = HeapAllocator::new();
    let params = derive_parameters(4, 8).unwrap();
    let block = source_block(&params, 5);
    let symbols = generate_intermediate_from_buffer(&params, &block, &heap).unwrap();

    let mut out = [0xFFu8; 13];
    recover_symbol(&symbols, 1, &mut out).unwrap();
    assert_eq!(&out[..8], &block[8..16]);
    assert_eq!(&out[8..], &[0u8; 5]);

    let mut short = [0u8; 7];
    assert!(matches!(
        recover_symbol(&symbols, 1, &mut short),
        Err(FecError::InvalidInput(InvalidInput::OutputTooShort { required: 8, actual: 7 }))
    ));
    assert!(matches!(
        recover_symbol(&symbols, u32::MAX, &mut out),
        Err(FecError::InvalidInput(InvalidInput::EsiOutOfRange { .. }))
    ));
}

#[repr(C, align(16))]
struct Aligned([u8; 48]);

#[test]
fn aligned_recovery_checks_output() {
    let heap = HeapAllocator::new();
    let fec = FastFec::default();
    let params = derive_parameters(6, 20).unwrap();
    let block = source_block(&params, 6);
    let symbols = fec
        .generate_intermediate_from_buffer(&params, &block, &heap)
        .unwrap();

    let mut buf = Aligned([0xAA; 48]);
    fec.recover_symbol_aligned(&symbols, 3, &mut buf.0[..32]).unwrap();
    assert_eq!(&buf.0[..20], &block[60..80]);
    assert!(buf.0[20..32].iter().all(|&b| b == 0));
    assert!(buf.0[32..].iter().all(|&b| b == 0xAA));

    let repair = fec.synthesizer(&symbols).recover_symbol_to_vec(77).unwrap();
    fec.recover_symbol_aligned(&symbols, 77, &mut buf.0).unwrap();
    assert_eq!(&buf.0[..20], &repair[..]);
    assert!(buf.0[20..].iter().all(|&b| b == 0));

    assert!(matches!(
        fec.recover_symbol_aligned(&symbols, 0, &mut buf.0[..16]),
        Err(FecError::InvalidInput(InvalidInput::OutputTooShort { .. }))
    ));
    assert!(matches!(
        fec.recover_symbol_aligned(&symbols, 0, &mut buf.0[..24]),
        Err(FecError::InvalidInput(InvalidInput::OutputLengthNotVectorMultiple { len: 24 }))
    ));
    assert!(matches!(
        fec.recover_symbol_aligned(&symbols, 0, &mut buf.0[1..33]),
        Err(FecError::InvalidInput(InvalidInput::OutputMisaligned))
    ));
}

#[test]
fn encode_length_checks() {
    let heap = HeapAllocator::new();
    let params = derive_parameters(4, 8).unwrap();
    assert!(matches!(
        generate_intermediate_from_buffer(&params, &[0u8; 33], &heap),
        Err(FecError::InvalidInput(InvalidInput::SourceLength { expected: 32, actual: 33 }))
    ));
    let one = [0u8; 8];
    assert!(matches!(
        generate_intermediate_from_symbols(&params, &[&one[..]; 3], &heap),
        Err(FecError::InvalidInput(InvalidInput::SourceSymbolCount { expected: 4, actual: 3 }))
    ));
}

#[test]
fn object_padding_round_trip() {
    let heap = HeapAllocator::new();
    let object: Vec<u8> = (0..1000u32).map(|i| (i * 7) as u8).collect();
    let params = Parameters::for_object(object.len(), 48).unwrap();
    assert_eq!(params.k(), 21);

    let block = params.pad_source_block(&object).unwrap();
    let symbols = generate_intermediate_from_buffer(&params, &block, &heap).unwrap();
    let recovered: Vec<u8> = (0..params.k() as u32)
        .flat_map(|esi| symbols.synthesizer().recover_symbol_to_vec(esi).unwrap())
        .collect();
    assert_eq!(&recovered[..object.len()], &object[..]);
}

#[test]
fn encode_allocates_intermediate_first() {
    let alloc = TrackingAllocator::new();
    let params = derive_parameters(12, 8).unwrap();
    let block = source_block(&params, 7);
    let symbols = generate_intermediate_from_buffer(&params, &block, &alloc).unwrap();

    let requests = alloc.requests();
    assert_eq!(requests[0], Purpose::Intermediate);
    assert!(requests[1..].iter().all(|&p| p == Purpose::Scratch));
    assert_eq!(alloc.outstanding(Purpose::Scratch), 0);
    assert_eq!(alloc.outstanding(Purpose::Intermediate), 1);
    assert_eq!(symbols.origin(), Origin::Encoded);
    assert_eq!(symbols.stats().pivots + symbols.stats().dense_dimension, params.l());

    symbols.release(&alloc);
    assert_eq!(alloc.outstanding(Purpose::Intermediate), 0);
}
