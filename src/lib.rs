//! Systematic fountain code engine over GF(256)
//!
//! Given K source symbols of T bytes, [`FastFec`] solves for L intermediate
//! symbols from which any number of encoding symbols can be synthesized.
//! Symbols `0..K` reproduce the source; every ESI from K up is a repair
//! symbol. A receiver holding about K symbols of any kind decodes with
//! [`FastFec::try_decode`] and regenerates whatever is missing.
//!
//! ```
//! use fastfec::{derive_parameters, FastFec, HeapAllocator, Symbol};
//!
//! let heap = HeapAllocator::new();
//! let fec = FastFec::default();
//! let params = derive_parameters(4, 8).unwrap();
//! let data: Vec<u8> = (0..32).collect();
//!
//! let encoded = fec.generate_intermediate_from_buffer(&params, &data, &heap).unwrap();
//! let repair: Vec<Vec<u8>> = (4..10)
//!     .map(|esi| encoded.synthesizer().recover_symbol_to_vec(esi).unwrap())
//!     .collect();
//!
//! // Only repair symbols arrive
//! let received: Vec<Symbol> = repair
//!     .iter()
//!     .enumerate()
//!     .map(|(i, d)| Symbol::new(4 + i as u32, d))
//!     .collect();
//! let decoded = fec.try_decode(&params, &received, &heap).unwrap();
//!
//! let mut out = [0u8; 8];
//! fec.recover_symbol(&decoded, 2, &mut out).unwrap();
//! assert_eq!(&out[..], &data[16..24]);
//! ```

pub mod buffer;
pub mod codec;
pub mod config;
pub mod error;
pub mod intermediate;
mod matrix;
pub mod octet;
pub mod params;
pub mod solver;
pub mod synth;
pub mod tuple;
pub mod typestate;

pub use buffer::{Alignment, FecAllocator, FecBuffer, HeapAllocator, PoolAllocator, Purpose};
pub use codec::{FastFec, Symbol};
pub use config::CodecConfig;
pub use error::{DecodeFailure, FecError, InvalidInput, Result, SolvePhase};
pub use intermediate::{IntermediateSymbols, Origin};
pub use octet::{Octet, SimdLevel};
pub use params::{derive_parameters, Parameters, MAX_SOURCE_SYMBOLS};
pub use solver::SolveStats;
pub use synth::SymbolSynthesizer;
pub use typestate::Codec;

/// [`FastFec::generate_intermediate_from_buffer`] with the default configuration
pub fn generate_intermediate_from_buffer<A: FecAllocator + ?Sized>(
    params: &Parameters,
    padded: &[u8],
    allocator: &A,
) -> Result<IntermediateSymbols> {
    FastFec::default().generate_intermediate_from_buffer(params, padded, allocator)
}

/// [`FastFec::generate_intermediate_from_symbols`] with the default configuration
pub fn generate_intermediate_from_symbols<A: FecAllocator + ?Sized>(
    params: &Parameters,
    sources: &[&[u8]],
    allocator: &A,
) -> Result<IntermediateSymbols> {
    FastFec::default().generate_intermediate_from_symbols(params, sources, allocator)
}

/// Read-only view of intermediate symbol `index` (T bytes)
pub fn get_intermediate_row(symbols: &IntermediateSymbols, index: usize) -> Result<&[u8]> {
    symbols.row(index)
}

/// [`FastFec::try_decode`] with the default configuration
pub fn try_decode<A: FecAllocator + ?Sized>(
    params: &Parameters,
    symbols: &[Symbol<'_>],
    allocator: &A,
) -> Result<IntermediateSymbols> {
    FastFec::default().try_decode(params, symbols, allocator)
}

/// [`FastFec::try_decode_sparse`] with the default configuration
pub fn try_decode_sparse<A: FecAllocator + ?Sized>(
    params: &Parameters,
    slots: &[Option<&[u8]>],
    valid_symbol_num: usize,
    allocator: &A,
) -> Result<IntermediateSymbols> {
    FastFec::default().try_decode_sparse(params, slots, valid_symbol_num, allocator)
}

/// [`FastFec::recover_symbol`] with the default configuration
pub fn recover_symbol(symbols: &IntermediateSymbols, esi: u32, out: &mut [u8]) -> Result<()> {
    FastFec::default().recover_symbol(symbols, esi, out)
}
