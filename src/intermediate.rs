//! Solved intermediate symbols
//!
//! ## Layout
//!
//! ```text
//! | index table: L x u32, padded to 16 bytes | row 0 | row 1 | ... | row M-1 |
//!                                             <stride>
//! ```
//!
//! Entry `i` of the index table is the physical row holding intermediate
//! symbol `i`. Rows are `stride` bytes (T, or T rounded up to 16); bytes past T
//! are always zero. The layout is process-local and only reachable through
//! [`IntermediateSymbols::row`] and [`IntermediateSymbols::aligned_row`].

use crate::buffer::{FecAllocator, FecBuffer, Purpose};
use crate::config::CodecConfig;
use crate::error::{InvalidInput, Result};
use crate::params::Parameters;
use crate::solver::SolveStats;
use crate::synth::SymbolSynthesizer;

/// How the intermediate symbols were obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// From the full source block
    Encoded,
    /// From received encoding symbols
    Decoded,
}

/// Byte offsets of one intermediate buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout {
    pub data_offset: usize,
    pub stride: usize,
    pub rows: usize,
    pub total: usize,
}

impl Layout {
    /// `None` when the size does not fit in `usize`
    pub fn new(params: &Parameters, rows: usize, stride: usize) -> Option<Self> {
        let data_offset = params.l().checked_mul(4)?.div_ceil(16) * 16;
        let total = rows.checked_mul(stride)?.checked_add(data_offset)?;
        Some(Self {
            data_offset,
            stride,
            rows,
            total,
        })
    }
}

/// The L solved intermediate symbols of one source block
///
/// Immutable once created; any number of threads may synthesize from it at
/// once. Hand it back with [`IntermediateSymbols::release`] to return the
/// buffer to the allocator that produced it.
pub struct IntermediateSymbols {
    params: Parameters,
    buffer: FecBuffer,
    layout: Layout,
    origin: Origin,
    stats: SolveStats,
}

impl IntermediateSymbols {
    pub(crate) fn new(
        params: Parameters,
        buffer: FecBuffer,
        layout: Layout,
        origin: Origin,
        stats: SolveStats,
    ) -> Self {
        debug_assert!(buffer.len() >= layout.total);
        Self {
            params,
            buffer,
            layout,
            origin,
            stats,
        }
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Physical rows stored: L after encoding, the constraint row count after decoding
    pub fn row_count(&self) -> usize {
        self.layout.rows
    }

    /// Distance between rows in bytes
    pub fn stride(&self) -> usize {
        self.layout.stride
    }

    /// Total bytes of the backing buffer in use
    pub fn byte_len(&self) -> usize {
        self.layout.total
    }

    /// Intermediate symbol index → physical row
    pub fn index_table(&self) -> &[u32] {
        let bytes = &self.buffer.as_slice()[..self.params.l() * 4];
        bytemuck::cast_slice(bytes)
    }

    /// Intermediate symbol `index` (T bytes)
    pub fn row(&self, index: usize) -> Result<&[u8]> {
        Ok(&self.aligned_row(index)?[..self.params.t()])
    }

    /// Intermediate symbol `index` including stride padding
    pub fn aligned_row(&self, index: usize) -> Result<&[u8]> {
        if index >= self.params.l() {
            return Err(InvalidInput::RowOutOfRange {
                index,
                rows: self.params.l(),
            }
            .into());
        }
        Ok(self.stored_row(index))
    }

    #[inline]
    pub(crate) fn stored_row(&self, index: usize) -> &[u8] {
        let physical = self.index_table()[index] as usize;
        let start = self.layout.data_offset + physical * self.layout.stride;
        &self.buffer.as_slice()[start..start + self.layout.stride]
    }

    /// Synthesizer with the default configuration
    pub fn synthesizer(&self) -> SymbolSynthesizer<'_> {
        SymbolSynthesizer::new(self)
    }

    /// Synthesizer following `config`
    pub fn synthesizer_with_config(&self, config: &CodecConfig) -> SymbolSynthesizer<'_> {
        SymbolSynthesizer::with_config(self, config)
    }

    /// Write encoding symbol `esi` into `out` (see [`SymbolSynthesizer::recover_symbol`])
    pub fn recover_symbol(&self, esi: u32, out: &mut [u8]) -> Result<()> {
        self.synthesizer().recover_symbol(esi, out)
    }

    /// Return the backing buffer to the allocator that produced it
    pub fn release<A: FecAllocator + ?Sized>(self, allocator: &A) {
        allocator.release(self.buffer, Purpose::Intermediate);
    }

    /// Take the backing buffer without going through an allocator
    pub fn into_buffer(self) -> FecBuffer {
        self.buffer
    }
}

impl std::fmt::Debug for IntermediateSymbols {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntermediateSymbols")
            .field("k", &self.params.k())
            .field("t", &self.params.t())
            .field("l", &self.params.l())
            .field("rows", &self.layout.rows)
            .field("stride", &self.layout.stride)
            .field("origin", &self.origin)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_offsets() {
        let params = Parameters::derive(4, 8).unwrap();
        // 27 * 4 = 108 bytes of index table, padded to 112
        let layout = Layout::new(&params, 27, 16).unwrap();
        assert_eq!(layout.data_offset, 112);
        assert_eq!(layout.total, 112 + 27 * 16);
        assert!(Layout::new(&params, usize::MAX, 16).is_none());
    }
}
