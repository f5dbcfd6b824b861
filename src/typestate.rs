//! Type-state wrapper for the symbol generation life cycle
//!
//! ## State Transitions
//!
//! ```text
//! Codec<Uninitialized>
//!   ↓ (derive)
//! Codec<ParametersDerived>
//!   ↓ (encode_buffer | encode_symbols | try_decode | try_decode_sparse)
//! Codec<Ready>            origin Encoded or Decoded
//!   → (recover_symbol) - can be called any number of times
//!   ↓ (release)
//! released (terminal)
//! ```
//!
//! Synthesis only exists on `Codec<Ready>`, so asking for symbols before a
//! successful encode or decode does not compile. Decode attempts borrow the
//! derived state: a `DecodeFailed` leaves it usable for another attempt with
//! more symbols.

use crate::buffer::FecAllocator;
use crate::codec::{FastFec, Symbol};
use crate::config::CodecConfig;
use crate::error::Result;
use crate::intermediate::{IntermediateSymbols, Origin};
use crate::params::Parameters;

// ============================================================================
// State Types
// ============================================================================

/// Initial state - nothing derived yet
pub struct Uninitialized;

/// Parameters derived for one source block
pub struct ParametersDerived {
    params: Parameters,
}

/// Intermediate symbols available
pub struct Ready {
    symbols: IntermediateSymbols,
}

// ============================================================================
// Type-Safe Codec with State Enforcement
// ============================================================================

/// Fountain codec bound to one allocator, with its state in the type
pub struct Codec<'a, A: FecAllocator + ?Sized, State = Uninitialized> {
    engine: FastFec,
    allocator: &'a A,
    state: State,
}

impl<'a, A: FecAllocator + ?Sized> Codec<'a, A, Uninitialized> {
    pub fn new(allocator: &'a A) -> Self {
        Self::with_config(CodecConfig::default(), allocator)
    }

    pub fn with_config(config: CodecConfig, allocator: &'a A) -> Self {
        Self {
            engine: FastFec::new(config),
            allocator,
            state: Uninitialized,
        }
    }

    /// Derive parameters for `k` symbols of `t` bytes
    pub fn derive(self, k: usize, t: usize) -> Result<Codec<'a, A, ParametersDerived>> {
        let params = Parameters::derive(k, t)?;
        Ok(Codec {
            engine: self.engine,
            allocator: self.allocator,
            state: ParametersDerived { params },
        })
    }
}

impl<'a, A: FecAllocator + ?Sized> Codec<'a, A, ParametersDerived> {
    pub fn params(&self) -> &Parameters {
        &self.state.params
    }

    /// Encode a zero-padded K*T source block
    pub fn encode_buffer(self, padded: &[u8]) -> Result<Codec<'a, A, Ready>> {
        let symbols = self.engine.generate_intermediate_from_buffer(
            &self.state.params,
            padded,
            self.allocator,
        )?;
        Ok(self.ready(symbols))
    }

    /// Encode K separate source symbols
    pub fn encode_symbols(self, sources: &[&[u8]]) -> Result<Codec<'a, A, Ready>> {
        let symbols = self.engine.generate_intermediate_from_symbols(
            &self.state.params,
            sources,
            self.allocator,
        )?;
        Ok(self.ready(symbols))
    }

    /// Decode from symbols sorted by ESI; on failure `self` stays usable
    pub fn try_decode(&self, symbols: &[Symbol<'_>]) -> Result<Codec<'a, A, Ready>> {
        let solved = self
            .engine
            .try_decode(&self.state.params, symbols, self.allocator)?;
        Ok(self.clone_ready(solved))
    }

    /// Decode from a slot array indexed by ESI; on failure `self` stays usable
    pub fn try_decode_sparse(
        &self,
        slots: &[Option<&[u8]>],
        valid_symbol_num: usize,
    ) -> Result<Codec<'a, A, Ready>> {
        let solved = self.engine.try_decode_sparse(
            &self.state.params,
            slots,
            valid_symbol_num,
            self.allocator,
        )?;
        Ok(self.clone_ready(solved))
    }

    fn ready(self, symbols: IntermediateSymbols) -> Codec<'a, A, Ready> {
        Codec {
            engine: self.engine,
            allocator: self.allocator,
            state: Ready { symbols },
        }
    }

    fn clone_ready(&self, symbols: IntermediateSymbols) -> Codec<'a, A, Ready> {
        Codec {
            engine: self.engine.clone(),
            allocator: self.allocator,
            state: Ready { symbols },
        }
    }
}

impl<'a, A: FecAllocator + ?Sized> Codec<'a, A, Ready> {
    pub fn params(&self) -> &Parameters {
        self.state.symbols.params()
    }

    pub fn origin(&self) -> Origin {
        self.state.symbols.origin()
    }

    pub fn symbols(&self) -> &IntermediateSymbols {
        &self.state.symbols
    }

    /// Write encoding symbol `esi` into `out` (`out.len() >= T`)
    pub fn recover_symbol(&self, esi: u32, out: &mut [u8]) -> Result<()> {
        self.engine.recover_symbol(&self.state.symbols, esi, out)
    }

    /// Encoding symbol `esi` as a T-byte vector
    pub fn symbol(&self, esi: u32) -> Result<Vec<u8>> {
        self.engine
            .synthesizer(&self.state.symbols)
            .recover_symbol_to_vec(esi)
    }

    /// Encoding symbols for every ESI in `esis`
    pub fn symbols_for(&self, esis: &[u32]) -> Result<Vec<Vec<u8>>> {
        self.engine
            .synthesizer(&self.state.symbols)
            .recover_symbols(esis)
    }

    /// Return the intermediate buffer to the allocator; terminal
    pub fn release(self) {
        self.state.symbols.release(self.allocator);
    }
}
