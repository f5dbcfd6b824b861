//! Plain heap allocator

use super::{Alignment, FecAllocator, FecBuffer, Purpose};
use log::trace;

/// Allocates every buffer fresh from the global heap and drops it on release
///
/// Returns `None` instead of aborting when the heap cannot satisfy a request.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapAllocator;

impl HeapAllocator {
    pub fn new() -> Self {
        HeapAllocator
    }
}

impl FecAllocator for HeapAllocator {
    fn allocate(&self, size: usize, alignment: Alignment, purpose: Purpose) -> Option<FecBuffer> {
        trace!("heap allocate {} bytes for {:?}", size, purpose);
        FecBuffer::try_zeroed(size, alignment)
    }

    fn release(&self, buffer: FecBuffer, purpose: Purpose) {
        trace!("heap release {} bytes for {:?}", buffer.len(), purpose);
        drop(buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_allocates_requested_size() {
        let heap = HeapAllocator::new();
        let buf = heap
            .allocate(123, Alignment::Vector16, Purpose::Intermediate)
            .unwrap();
        assert_eq!(buf.len(), 123);
        assert_eq!(buf.alignment(), Alignment::Vector16);
        heap.release(buf, Purpose::Intermediate);
    }

    #[test]
    fn test_heap_reports_exhaustion() {
        let heap = HeapAllocator::new();
        assert!(heap
            .allocate(usize::MAX / 2, Alignment::None, Purpose::Scratch)
            .is_none());
    }
}
