//! Shared helpers for the integration tests

#![allow(dead_code)]

use fastfec::{
    Alignment, FastFec, FecAllocator, FecBuffer, HeapAllocator, IntermediateSymbols, Parameters,
    Purpose,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Route library logs to the test harness (`RUST_LOG=fastfec=debug`)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic source block of K*T bytes
pub fn source_block(params: &Parameters, seed: u8) -> Vec<u8> {
    (0..params.source_block_len())
        .map(|i| (i as u32).wrapping_mul(31).wrapping_add(seed as u32 * 7 + 3) as u8)
        .collect()
}

/// Source symbol `esi` of a block produced by [`source_block`]
pub fn source_symbol(params: &Parameters, block: &[u8], esi: usize) -> Vec<u8> {
    let t = params.t();
    block[esi * t..(esi + 1) * t].to_vec()
}

/// Encode `block` and synthesize the symbols for `esis`
pub fn encode_symbols(params: &Parameters, block: &[u8], esis: &[u32]) -> Vec<(u32, Vec<u8>)> {
    let heap = HeapAllocator::new();
    let encoded = FastFec::default()
        .generate_intermediate_from_buffer(params, block, &heap)
        .expect("encode");
    let synth = encoded.synthesizer();
    esis.iter()
        .map(|&esi| (esi, synth.recover_symbol_to_vec(esi).expect("synthesize")))
        .collect()
}

/// Every source symbol synthesized from `symbols`
pub fn recovered_block(symbols: &IntermediateSymbols) -> Vec<u8> {
    let synth = symbols.synthesizer();
    (0..symbols.params().k() as u32)
        .flat_map(|esi| synth.recover_symbol_to_vec(esi).expect("synthesize"))
        .collect()
}

/// Heap allocator that records every call
#[derive(Debug, Default)]
pub struct TrackingAllocator {
    pub log: Mutex<Vec<(Purpose, usize)>>,
    allocated: [AtomicUsize; 2],
    released: [AtomicUsize; 2],
}

fn slot(purpose: Purpose) -> usize {
    match purpose {
        Purpose::Intermediate => 0,
        _ => 1,
    }
}

impl TrackingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocated(&self, purpose: Purpose) -> usize {
        self.allocated[slot(purpose)].load(Ordering::SeqCst)
    }

    pub fn released(&self, purpose: Purpose) -> usize {
        self.released[slot(purpose)].load(Ordering::SeqCst)
    }

    pub fn outstanding(&self, purpose: Purpose) -> usize {
        self.allocated(purpose) - self.released(purpose)
    }

    /// Purposes in the order they were requested
    pub fn requests(&self) -> Vec<Purpose> {
        self.log.lock().unwrap().iter().map(|(p, _)| *p).collect()
    }
}

impl FecAllocator for TrackingAllocator {
    fn allocate(&self, size: usize, alignment: Alignment, purpose: Purpose) -> Option<FecBuffer> {
        self.log.lock().unwrap().push((purpose, size));
        self.allocated[slot(purpose)].fetch_add(1, Ordering::SeqCst);
        Some(FecBuffer::zeroed(size, alignment))
    }

    fn release(&self, _buffer: FecBuffer, purpose: Purpose) {
        self.released[slot(purpose)].fetch_add(1, Ordering::SeqCst);
    }
}

/// Tracking allocator that refuses the `fail_at`-th request (1-based)
#[derive(Debug)]
pub struct FailingAllocator {
    pub inner: TrackingAllocator,
    fail_at: usize,
    calls: AtomicUsize,
}

impl FailingAllocator {
    pub fn fail_at(fail_at: usize) -> Self {
        Self {
            inner: TrackingAllocator::new(),
            fail_at,
            calls: AtomicUsize::new(0),
        }
    }
}

impl FecAllocator for FailingAllocator {
    fn allocate(&self, size: usize, alignment: Alignment, purpose: Purpose) -> Option<FecBuffer> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call == self.fail_at {
            return None;
        }
        self.inner.allocate(size, alignment, purpose)
    }

    fn release(&self, buffer: FecBuffer, purpose: Purpose) {
        self.inner.release(buffer, purpose)
    }
}

/// Allocator whose buffers are shorter than requested
#[derive(Debug, Default)]
pub struct ShortAllocator;

impl FecAllocator for ShortAllocator {
    fn allocate(&self, size: usize, alignment: Alignment, _purpose: Purpose) -> Option<FecBuffer> {
        Some(FecBuffer::zeroed(size.saturating_sub(1), alignment))
    }

    fn release(&self, _buffer: FecBuffer, _purpose: Purpose) {}
}
