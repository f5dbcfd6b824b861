use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fastfec::octet::SymbolOps;
use fastfec::{derive_parameters, FastFec, HeapAllocator, Octet, PoolAllocator, SimdLevel, Symbol};
use std::hint::black_box;

const SYMBOL_SIZE: usize = 1280;

fn block(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 131 + 7) as u8).collect()
}

/// Intermediate symbol generation for growing source blocks
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let pool = PoolAllocator::new();
    let fec = FastFec::default();

    for k in [10, 100, 500, 1000] {
        let params = derive_parameters(k, SYMBOL_SIZE).unwrap();
        let data = block(params.source_block_len());
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(k), &data, |b, data| {
            b.iter(|| {
                let symbols = fec
                    .generate_intermediate_from_buffer(&params, black_box(data), &pool)
                    .unwrap();
                symbols.release(&pool);
            });
        });
    }
    group.finish();
}

/// Decoding with every other source symbol lost
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let heap = HeapAllocator::new();
    let pool = PoolAllocator::new();
    let fec = FastFec::default();

    for k in [10, 100, 500, 1000] {
        let params = derive_parameters(k, SYMBOL_SIZE).unwrap();
        let data = block(params.source_block_len());
        let encoded = fec
            .generate_intermediate_from_buffer(&params, &data, &heap)
            .unwrap();

        let esis: Vec<u32> = (0..k as u32)
            .step_by(2)
            .chain(k as u32..(k + k / 2 + 5) as u32)
            .collect();
        let received: Vec<(u32, Vec<u8>)> = esis
            .iter()
            .map(|&esi| (esi, encoded.synthesizer().recover_symbol_to_vec(esi).unwrap()))
            .collect();
        let symbols: Vec<Symbol> = received.iter().map(|(e, d)| Symbol::new(*e, d)).collect();

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(k), &symbols, |b, symbols| {
            b.iter(|| {
                let decoded = fec.try_decode(&params, black_box(symbols), &pool).unwrap();
                decoded.release(&pool);
            });
        });
    }
    group.finish();
}

/// Repair symbol synthesis, single and batched
fn bench_recover_symbol(c: &mut Criterion) {
    let mut group = c.benchmark_group("recover_symbol");
    let heap = HeapAllocator::new();
    let fec = FastFec::default();
    let params = derive_parameters(500, SYMBOL_SIZE).unwrap();
    let data = block(params.source_block_len());
    let encoded = fec
        .generate_intermediate_from_buffer(&params, &data, &heap)
        .unwrap();

    group.throughput(Throughput::Bytes(SYMBOL_SIZE as u64));
    group.bench_function("single", |b| {
        let mut out = vec![0u8; SYMBOL_SIZE];
        let mut esi = 500u32;
        b.iter(|| {
            fec.recover_symbol(&encoded, black_box(esi), &mut out).unwrap();
            esi = esi.wrapping_add(1).max(500);
        });
    });

    let esis: Vec<u32> = (500..756).collect();
    group.throughput(Throughput::Bytes((SYMBOL_SIZE * esis.len()) as u64));
    group.bench_function("batch_256", |b| {
        b.iter(|| fec.synthesizer(&encoded).recover_symbols(black_box(&esis)).unwrap());
    });
    group.finish();
}

/// Payload multiply-add at each kernel level
fn bench_mul_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul_add");
    let input = vec![0xAAu8; SYMBOL_SIZE];
    group.throughput(Throughput::Bytes(SYMBOL_SIZE as u64));

    for level in [SimdLevel::None, SimdLevel::Ssse3, SimdLevel::Avx2] {
        let ops = SymbolOps::new(Some(level));
        if ops.level() != level {
            continue;
        }
        group.bench_function(format!("{:?}", level), |b| {
            let mut output = vec![0x55u8; SYMBOL_SIZE];
            b.iter(|| ops.mul_add(black_box(&input), black_box(&mut output), Octet::new(0x53)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_recover_symbol,
    bench_mul_add
);
criterion_main!(benches);
