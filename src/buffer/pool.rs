//! Recycling allocator
//!
//! Keeps released buffers in per-(purpose, capacity) free lists so a stream of
//! same-shaped encode/decode calls stops touching the global heap after the
//! first round. Internally synchronised; one pool may be shared by threads.

use super::{Alignment, FecAllocator, FecBuffer, Purpose};
use log::trace;
use rustc_hash::FxHashMap as HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Default cap on cached buffers per free list
const DEFAULT_MAX_CACHED: usize = 8;

const PURPOSES: [Purpose; 3] = [Purpose::Unknown, Purpose::Intermediate, Purpose::Scratch];

fn purpose_slot(purpose: Purpose) -> usize {
    match purpose {
        Purpose::Unknown => 0,
        Purpose::Intermediate => 1,
        Purpose::Scratch => 2,
    }
}

/// Counters maintained by [`PoolAllocator`]
#[derive(Debug, Default)]
pub struct PoolStats {
    allocations: [AtomicUsize; 3],
    releases: [AtomicUsize; 3],
    reused: AtomicUsize,
}

impl PoolStats {
    /// Buffers handed out for `purpose`
    pub fn allocations(&self, purpose: Purpose) -> usize {
        self.allocations[purpose_slot(purpose)].load(Ordering::Relaxed)
    }

    /// Buffers returned for `purpose`
    pub fn releases(&self, purpose: Purpose) -> usize {
        self.releases[purpose_slot(purpose)].load(Ordering::Relaxed)
    }

    /// Buffers of `purpose` not yet returned
    pub fn outstanding(&self, purpose: Purpose) -> usize {
        self.allocations(purpose)
            .saturating_sub(self.releases(purpose))
    }

    /// Buffers of any purpose not yet returned
    pub fn total_outstanding(&self) -> usize {
        PURPOSES.iter().map(|&p| self.outstanding(p)).sum()
    }

    /// Requests served from a free list
    pub fn reused(&self) -> usize {
        self.reused.load(Ordering::Relaxed)
    }
}

/// Allocator that recycles released buffers
#[derive(Debug)]
pub struct PoolAllocator {
    free: Mutex<HashMap<(Purpose, usize), Vec<FecBuffer>>>,
    max_cached: usize,
    stats: PoolStats,
}

impl Default for PoolAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl PoolAllocator {
    pub fn new() -> Self {
        Self::with_max_cached(DEFAULT_MAX_CACHED)
    }

    /// Keep at most `max_cached` buffers per (purpose, capacity)
    pub fn with_max_cached(max_cached: usize) -> Self {
        Self {
            free: Mutex::new(HashMap::default()),
            max_cached,
            stats: PoolStats::default(),
        }
    }

    pub fn stats(&self) -> &PoolStats {
        &self.stats
    }

    /// Buffers currently cached across all free lists
    pub fn cached(&self) -> usize {
        self.free
            .lock()
            .map(|free| free.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Drop every cached buffer
    pub fn clear(&self) {
        if let Ok(mut free) = self.free.lock() {
            free.clear();
        }
    }

    fn capacity_for(size: usize) -> usize {
        size.div_ceil(16) * 16
    }
}

impl FecAllocator for PoolAllocator {
    fn allocate(&self, size: usize, alignment: Alignment, purpose: Purpose) -> Option<FecBuffer> {
        let key = (purpose, Self::capacity_for(size));
        let recycled = self
            .free
            .lock()
            .ok()
            .and_then(|mut free| free.get_mut(&key).and_then(Vec::pop));

        let buffer = match recycled {
            Some(mut buffer) => {
                buffer.set_len(size);
                buffer.set_alignment(alignment);
                self.stats.reused.fetch_add(1, Ordering::Relaxed);
                trace!("pool reuse {} bytes for {:?}", size, purpose);
                buffer
            }
            None => FecBuffer::try_zeroed(size, alignment)?,
        };

        self.stats.allocations[purpose_slot(purpose)].fetch_add(1, Ordering::Relaxed);
        Some(buffer)
    }

    fn release(&self, buffer: FecBuffer, purpose: Purpose) {
        self.stats.releases[purpose_slot(purpose)].fetch_add(1, Ordering::Relaxed);

        let key = (purpose, buffer.capacity());
        if let Ok(mut free) = self.free.lock() {
            let list = free.entry(key).or_default();
            if list.len() < self.max_cached {
                list.push(buffer);
            }
        }
    }
}
