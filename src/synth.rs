//! Encoding symbol synthesis
//!
//! An encoding symbol is the XOR of the intermediate symbols its tuple
//! selects, the same relation its constraint row encodes. Any ESI up to
//! [`Parameters::max_esi`](crate::Parameters::max_esi) can be produced, any
//! number of times, always with the same bytes.

use crate::config::CodecConfig;
use crate::error::{InvalidInput, Result};
use crate::intermediate::IntermediateSymbols;
use crate::octet::SymbolOps;
use crate::tuple;
use log::trace;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::sync::Arc;

/// Produces encoding symbols from solved intermediate symbols
#[derive(Debug, Clone)]
pub struct SymbolSynthesizer<'s> {
    symbols: &'s IntermediateSymbols,
    ops: SymbolOps,
    parallel: bool,
    pool: Option<Arc<ThreadPool>>,
}

impl<'s> SymbolSynthesizer<'s> {
    pub fn new(symbols: &'s IntermediateSymbols) -> Self {
        Self::with_config(symbols, &CodecConfig::default())
    }

    /// Synthesizer following `config`; builds its own batch pool when
    /// `config.threads` is set
    pub fn with_config(symbols: &'s IntermediateSymbols, config: &CodecConfig) -> Self {
        Self::with_pool(symbols, config.symbol_ops(), config.parallel, config.batch_pool())
    }

    pub(crate) fn with_pool(
        symbols: &'s IntermediateSymbols,
        ops: SymbolOps,
        parallel: bool,
        pool: Option<Arc<ThreadPool>>,
    ) -> Self {
        Self {
            symbols,
            ops,
            parallel,
            pool,
        }
    }

    /// Write symbol `esi` into `out[..T]` and zero the rest of `out`
    pub fn recover_symbol(&self, esi: u32, out: &mut [u8]) -> Result<()> {
        let t = self.symbols.params().t();
        if out.len() < t {
            return Err(InvalidInput::OutputTooShort {
                required: t,
                actual: out.len(),
            }
            .into());
        }
        let isi = self.symbols.params().esi_to_isi(esi)?;
        let (symbol, tail) = out.split_at_mut(t);
        self.combine(isi, symbol);
        tail.fill(0);
        Ok(())
    }

    /// Vector variant: `out` must be 16-byte aligned, at least T bytes and a
    /// multiple of 16 bytes long
    pub fn recover_symbol_aligned(&self, esi: u32, out: &mut [u8]) -> Result<()> {
        let t = self.symbols.params().t();
        if out.len() < t {
            return Err(InvalidInput::OutputTooShort {
                required: t,
                actual: out.len(),
            }
            .into());
        }
        if out.len() % 16 != 0 {
            return Err(InvalidInput::OutputLengthNotVectorMultiple { len: out.len() }.into());
        }
        if (out.as_ptr() as usize) % 16 != 0 {
            return Err(InvalidInput::OutputMisaligned.into());
        }

        let isi = self.symbols.params().esi_to_isi(esi)?;
        // Stored rows are zero past T, so whole strides can be combined
        let n = out.len().min(self.symbols.stride());
        let (symbol, tail) = out.split_at_mut(n);
        self.combine(isi, symbol);
        tail.fill(0);
        Ok(())
    }

    /// Symbol `esi` as a fresh T-byte vector
    pub fn recover_symbol_to_vec(&self, esi: u32) -> Result<Vec<u8>> {
        let mut out = vec![0u8; self.symbols.params().t()];
        self.recover_symbol(esi, &mut out)?;
        Ok(out)
    }

    /// Symbols for every ESI in `esis`, in order
    ///
    /// Runs on rayon when the configuration allows it: the global pool when
    /// `threads` is 0, the dedicated pool otherwise.
    pub fn recover_symbols(&self, esis: &[u32]) -> Result<Vec<Vec<u8>>> {
        if !self.parallel || esis.len() < 2 {
            return esis.iter().map(|&esi| self.recover_symbol_to_vec(esi)).collect();
        }

        let run = || {
            esis.par_iter()
                .map(|&esi| self.recover_symbol_to_vec(esi))
                .collect::<Result<Vec<_>>>()
        };
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> Option<&Arc<ThreadPool>> {
        self.pool.as_ref()
    }

    /// XOR the tuple rows of `isi` into `out` (at most one stride)
    fn combine(&self, isi: u32, out: &mut [u8]) {
        let params = self.symbols.params();
        let positions = tuple::positions(params, isi);
        trace!("synthesize isi {} from {} rows", isi, positions.len());

        let n = out.len();
        let mut rows = positions.iter().map(|&c| &self.symbols.stored_row(c)[..n]);
        match rows.next() {
            Some(first) => out.copy_from_slice(first),
            None => out.fill(0),
        }
        for row in rows {
            self.ops.xor(row, out);
        }
    }
}
