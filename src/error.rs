//! Error types for fountain code operations
//!
//! Decode failures are an expected outcome (the caller collects more symbols
//! and tries again), so they live in their own [`DecodeFailure`] type and are
//! reported as values rather than logged as anomalies.

use crate::buffer::Purpose;
use std::fmt;
use thiserror::Error;

/// Errors returned by the fountain code engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FecError {
    /// K or T outside the supported systematic-index range
    #[error("Parameters out of range: K={k}, T={t}")]
    ParamOutOfRange { k: usize, t: usize },

    /// Allocator returned no (usable) buffer
    #[error("Allocation of {size} bytes for {purpose:?} buffer failed")]
    AllocationFailure { size: usize, purpose: Purpose },

    /// Symbol set is insufficient or singular
    #[error("Decode failed: {0}")]
    DecodeFailed(DecodeFailure),

    /// Caller violated an operation precondition
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

impl FecError {
    /// True when more symbols might make the decode succeed
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, FecError::DecodeFailed(_))
    }
}

impl From<DecodeFailure> for FecError {
    fn from(failure: DecodeFailure) -> Self {
        FecError::DecodeFailed(failure)
    }
}

/// Why a decode could not determine every intermediate symbol
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeFailure {
    /// Fewer constraint rows than intermediate symbols
    #[error("{rows} constraint rows cannot determine {required} intermediate symbols")]
    InsufficientSymbols { rows: usize, required: usize },

    /// No nonzero pivot was available for a column
    #[error("singular system: no pivot for column {column} during {phase}")]
    Singular { phase: SolvePhase, column: usize },
}

/// Solver phase that detected a singular system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolvePhase {
    Sparse,
    Dense,
}

impl fmt::Display for SolvePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolvePhase::Sparse => write!(f, "sparse elimination"),
            SolvePhase::Dense => write!(f, "dense elimination"),
        }
    }
}

/// Caller contract violations, validated up front
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("source block is {actual} bytes, expected K*T = {expected}")]
    SourceLength { expected: usize, actual: usize },

    #[error("expected {expected} source symbols, got {actual}")]
    SourceSymbolCount { expected: usize, actual: usize },

    #[error("symbol {esi} is {actual} bytes, shorter than symbol size {expected}")]
    SymbolTooShort {
        esi: u32,
        actual: usize,
        expected: usize,
    },

    #[error("ESI {esi} follows ESI {previous}; symbols must be strictly increasing by ESI")]
    UnsortedEsi { previous: u32, esi: u32 },

    #[error("ESI {esi} is beyond the largest addressable ESI {max}")]
    EsiOutOfRange { esi: u64, max: u32 },

    #[error("{actual} symbols present but {declared} declared valid")]
    ValidSymbolCount { declared: usize, actual: usize },

    #[error("output buffer is {actual} bytes, need at least {required}")]
    OutputTooShort { required: usize, actual: usize },

    #[error("output buffer is not aligned to 16 bytes")]
    OutputMisaligned,

    #[error("output length {len} is not a multiple of 16")]
    OutputLengthNotVectorMultiple { len: usize },

    #[error("intermediate row {index} out of range (L = {rows})")]
    RowOutOfRange { index: usize, rows: usize },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FecError>;
