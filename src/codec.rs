//! Encode and decode entry points
//!
//! Both directions reduce to the same step: build constraint rows for a list
//! of ISIs, copy the known payloads next to them and solve for the L
//! intermediate symbols.
//!
//! ```text
//! encode: ISIs 0..K'                      payloads: source symbols, zero padding
//! decode: ISIs K..K', then received ISIs  payloads: zero padding, received symbols
//! ```

use crate::buffer::{Alignment, FecAllocator, Lease, Purpose};
use crate::config::CodecConfig;
use crate::error::{DecodeFailure, FecError, InvalidInput, Result};
use crate::intermediate::{IntermediateSymbols, Layout, Origin};
use crate::matrix::ConstraintMatrix;
use crate::octet::SymbolOps;
use crate::params::Parameters;
use crate::solver::{self, PayloadRows};
use crate::synth::SymbolSynthesizer;
use log::{debug, trace};
use rayon::ThreadPool;
use std::sync::Arc;

/// One received encoding symbol, borrowed for the duration of a call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol<'a> {
    pub esi: u32,
    /// At least T bytes; only the first T are read
    pub data: &'a [u8],
}

impl<'a> Symbol<'a> {
    pub fn new(esi: u32, data: &'a [u8]) -> Self {
        Self { esi, data }
    }
}

/// Fountain code engine
///
/// Stateless apart from its configuration: every call takes the parameters
/// and allocator it works with, so one engine can serve any number of blocks
/// and threads.
#[derive(Debug, Clone)]
pub struct FastFec {
    config: CodecConfig,
    ops: SymbolOps,
    pool: Option<Arc<ThreadPool>>,
}

impl Default for FastFec {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

impl FastFec {
    pub fn new(config: CodecConfig) -> Self {
        let ops = config.symbol_ops();
        let pool = config.batch_pool();
        Self { config, ops, pool }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Intermediate symbols from a zero-padded K*T source block
    pub fn generate_intermediate_from_buffer<A: FecAllocator + ?Sized>(
        &self,
        params: &Parameters,
        padded: &[u8],
        allocator: &A,
    ) -> Result<IntermediateSymbols> {
        let expected = params.source_block_len();
        if padded.len() != expected {
            return Err(InvalidInput::SourceLength {
                expected,
                actual: padded.len(),
            }
            .into());
        }

        let t = params.t();
        let sources = padded.chunks_exact(t);
        self.encode_rows(params, sources, allocator)
    }

    /// Intermediate symbols from K separate source symbols
    pub fn generate_intermediate_from_symbols<A: FecAllocator + ?Sized>(
        &self,
        params: &Parameters,
        sources: &[&[u8]],
        allocator: &A,
    ) -> Result<IntermediateSymbols> {
        if sources.len() != params.k() {
            return Err(InvalidInput::SourceSymbolCount {
                expected: params.k(),
                actual: sources.len(),
            }
            .into());
        }
        if let Some((esi, data)) = sources
            .iter()
            .enumerate()
            .find(|(_, data)| data.len() < params.t())
        {
            return Err(InvalidInput::SymbolTooShort {
                esi: esi as u32,
                actual: data.len(),
                expected: params.t(),
            }
            .into());
        }
        self.encode_rows(params, sources.iter().copied(), allocator)
    }

    fn encode_rows<'d, A, I>(
        &self,
        params: &Parameters,
        sources: I,
        allocator: &A,
    ) -> Result<IntermediateSymbols>
    where
        A: FecAllocator + ?Sized,
        I: Iterator<Item = &'d [u8]>,
    {
        let isis: Vec<u32> = (0..params.k_prime() as u32).collect();
        let t = params.t();
        self.solve_rows(params, &isis, Origin::Encoded, allocator, |payload, first| {
            for (i, data) in sources.enumerate() {
                payload.row_mut(first + i)[..t].copy_from_slice(&data[..t]);
            }
        })
    }

    /// Decode from symbols sorted by strictly increasing ESI
    ///
    /// The final source symbol must already be zero-padded to T bytes.
    /// `DecodeFailed` means the set is insufficient or singular; collect more
    /// symbols and call again.
    pub fn try_decode<A: FecAllocator + ?Sized>(
        &self,
        params: &Parameters,
        symbols: &[Symbol<'_>],
        allocator: &A,
    ) -> Result<IntermediateSymbols> {
        let t = params.t();
        let mut previous: Option<u32> = None;
        for symbol in symbols {
            if let Some(prev) = previous {
                if symbol.esi <= prev {
                    return Err(InvalidInput::UnsortedEsi {
                        previous: prev,
                        esi: symbol.esi,
                    }
                    .into());
                }
            }
            if symbol.data.len() < t {
                return Err(InvalidInput::SymbolTooShort {
                    esi: symbol.esi,
                    actual: symbol.data.len(),
                    expected: t,
                }
                .into());
            }
            previous = Some(symbol.esi);
        }

        let mut isis: Vec<u32> = (params.k() as u32..params.k_prime() as u32).collect();
        isis.reserve(symbols.len());
        for symbol in symbols {
            isis.push(params.esi_to_isi(symbol.esi)?);
        }

        let padding = params.padding_symbols();
        self.solve_rows(params, &isis, Origin::Decoded, allocator, |payload, first| {
            for (i, symbol) in symbols.iter().enumerate() {
                payload.row_mut(first + padding + i)[..t].copy_from_slice(&symbol.data[..t]);
            }
        })
    }

    /// Decode from a slot array indexed by ESI (`None` = not received)
    ///
    /// `valid_symbol_num` must equal the number of present slots.
    pub fn try_decode_sparse<A: FecAllocator + ?Sized>(
        &self,
        params: &Parameters,
        slots: &[Option<&[u8]>],
        valid_symbol_num: usize,
        allocator: &A,
    ) -> Result<IntermediateSymbols> {
        let present = slots.iter().flatten().count();
        if present != valid_symbol_num {
            return Err(InvalidInput::ValidSymbolCount {
                declared: valid_symbol_num,
                actual: present,
            }
            .into());
        }

        let max_esi = params.max_esi();
        let mut symbols = Vec::with_capacity(present);
        for (idx, slot) in slots.iter().enumerate() {
            let Some(data) = slot else { continue };
            let esi = u32::try_from(idx)
                .ok()
                .filter(|&esi| esi <= max_esi)
                .ok_or(InvalidInput::EsiOutOfRange {
                    esi: idx as u64,
                    max: max_esi,
                })?;
            symbols.push(Symbol::new(esi, data));
        }
        self.try_decode(params, &symbols, allocator)
    }

    /// Build, fill and solve; owns every allocation of one operation
    fn solve_rows<A, F>(
        &self,
        params: &Parameters,
        isis: &[u32],
        origin: Origin,
        allocator: &A,
        fill: F,
    ) -> Result<IntermediateSymbols>
    where
        A: FecAllocator + ?Sized,
        F: FnOnce(&mut PayloadRows<'_>, usize),
    {
        let first_lt = params.s() + params.h();
        let rows = first_lt + isis.len();
        if rows < params.l() {
            debug!(
                "decode K={} with {} rows cannot succeed (L={})",
                params.k(),
                rows,
                params.l()
            );
            return Err(DecodeFailure::InsufficientSymbols {
                rows,
                required: params.l(),
            }
            .into());
        }

        let stride = self.config.row_stride(params.t());
        let layout = Layout::new(params, rows, stride).ok_or(FecError::AllocationFailure {
            size: usize::MAX,
            purpose: Purpose::Intermediate,
        })?;
        let mut lease = Lease::acquire(
            allocator,
            layout.total,
            Alignment::Vector16,
            Purpose::Intermediate,
        )?;
        let mut matrix = ConstraintMatrix::build(params, isis, allocator)?;
        trace!(
            "{:?} K={} T={}: {}x{} constraint matrix, stride {}",
            origin,
            params.k(),
            params.t(),
            rows,
            params.l(),
            stride
        );

        let (index_bytes, data) = lease.as_mut_slice().split_at_mut(layout.data_offset);
        let mut payload = PayloadRows::new(data, stride);
        fill(&mut payload, first_lt);

        let solved = solver::solve(&mut matrix, &mut payload, params, &self.ops, allocator);
        let solution = match solved {
            Ok(solution) => solution,
            Err(e) => {
                // Expected outcome for short or unlucky symbol sets
                debug!("{:?} K={} failed: {}", origin, params.k(), e);
                return Err(e);
            }
        };
        drop(matrix);

        let table: &mut [u32] = bytemuck::cast_slice_mut(&mut index_bytes[..params.l() * 4]);
        table.copy_from_slice(&solution.column_rows);

        Ok(IntermediateSymbols::new(
            *params,
            lease.into_inner(),
            layout,
            origin,
            solution.stats,
        ))
    }

    /// Synthesizer bound to this engine's configuration
    pub fn synthesizer<'s>(&self, symbols: &'s IntermediateSymbols) -> SymbolSynthesizer<'s> {
        SymbolSynthesizer::with_pool(
            symbols,
            self.ops,
            self.config.parallel,
            self.pool.clone(),
        )
    }

    /// Write encoding symbol `esi` into `out` (`out.len() >= T`)
    pub fn recover_symbol(
        &self,
        symbols: &IntermediateSymbols,
        esi: u32,
        out: &mut [u8],
    ) -> Result<()> {
        self.synthesizer(symbols).recover_symbol(esi, out)
    }

    /// Vectorised variant: `out` 16-byte aligned, length a multiple of 16
    pub fn recover_symbol_aligned(
        &self,
        symbols: &IntermediateSymbols,
        esi: u32,
        out: &mut [u8],
    ) -> Result<()> {
        self.synthesizer(symbols).recover_symbol_aligned(esi, out)
    }
}
