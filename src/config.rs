//! Configuration for encode, decode and synthesis operations

use crate::octet::{SimdLevel, SymbolOps};
use log::warn;
use rayon::ThreadPool;
use std::sync::Arc;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Number of threads for batch synthesis (0 = auto-detect)
    pub threads: usize,
    /// Whether batch synthesis may run in parallel (false = single-threaded everything)
    pub parallel: bool,
    /// Kernel level override (None = best detected); clamped to CPU support
    pub simd: Option<SimdLevel>,
    /// Pad intermediate rows to a multiple of 16 bytes
    pub aligned_rows: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            threads: 0, // Auto-detect CPU cores
            parallel: true,
            simd: None,
            aligned_rows: true,
        }
    }
}

impl CodecConfig {
    pub fn new(threads: usize, parallel: bool) -> Self {
        Self {
            threads,
            parallel,
            ..Self::default()
        }
    }

    pub fn with_simd(mut self, level: SimdLevel) -> Self {
        self.simd = Some(level);
        self
    }

    pub fn with_aligned_rows(mut self, aligned: bool) -> Self {
        self.aligned_rows = aligned;
        self
    }

    /// Get effective thread count (auto-detect if 0)
    pub fn effective_threads(&self) -> usize {
        match (self.parallel, self.threads) {
            (false, _) => 1, // Sequential mode always uses single thread
            (true, 0) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4), // Auto-detect CPU cores
            (true, n) => n, // Use specified thread count
        }
    }

    /// Dedicated rayon pool for batch synthesis
    ///
    /// `None` means run on the global pool (auto-detect) or not in parallel
    /// at all.
    pub(crate) fn batch_pool(&self) -> Option<Arc<ThreadPool>> {
        if !self.parallel || self.threads == 0 {
            return None;
        }
        let threads = self.effective_threads();
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => Some(Arc::new(pool)),
            Err(e) => {
                warn!(
                    "Could not build a {}-thread pool ({}), using the global pool",
                    threads, e
                );
                None
            }
        }
    }

    /// Payload kernels selected by this configuration
    pub fn symbol_ops(&self) -> SymbolOps {
        SymbolOps::new(self.simd)
    }

    /// Row stride for `symbol_size`-byte symbols
    pub fn row_stride(&self, symbol_size: usize) -> usize {
        if self.aligned_rows {
            symbol_size.div_ceil(16) * 16
        } else {
            symbol_size
        }
    }
}
