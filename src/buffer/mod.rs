//! Typed buffers and the injected allocator capability
//!
//! The engine never allocates its large working sets directly: the solved
//! intermediate symbols and the scratch matrices are requested from a caller
//! supplied [`FecAllocator`], tagged with a [`Purpose`], and handed back
//! through the same allocator. Buffers are [`FecBuffer`] values that carry
//! their own length and alignment, so a purpose/alignment mismatch cannot
//! slip through as a raw pointer.

mod heap;
mod pool;

pub use heap::HeapAllocator;
pub use pool::{PoolAllocator, PoolStats};

use crate::error::{FecError, Result};
use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::sync::Arc;

/// What a buffer is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    Unknown,
    /// Solved intermediate symbols, owned by the caller until released
    Intermediate,
    /// Call-scoped solver matrices
    Scratch,
}

/// Alignment hint for a requested buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// No alignment needed (hint 0)
    #[default]
    None,
    /// 16-byte alignment for vector kernels (hint 16)
    Vector16,
}

impl Alignment {
    /// Required address alignment in bytes
    pub const fn bytes(self) -> usize {
        match self {
            Alignment::None => 1,
            Alignment::Vector16 => 16,
        }
    }

    /// Parse a numeric hint (0 or 16)
    pub const fn from_hint(hint: usize) -> Option<Self> {
        match hint {
            0 => Some(Alignment::None),
            16 => Some(Alignment::Vector16),
            _ => None,
        }
    }
}

/// Storage unit: always 16-byte aligned
#[derive(Clone, Copy, Default)]
#[repr(C, align(16))]
struct Block([u8; 16]);

// SAFETY: repr(C) wrapper of [u8; 16] with size == align == 16: no padding,
// every bit pattern valid
unsafe impl Zeroable for Block {}
unsafe impl Pod for Block {}

const BLOCK: usize = std::mem::size_of::<Block>();

/// Owned byte buffer with a length and alignment guarantee
///
/// Backed by 16-byte blocks, so every buffer satisfies [`Alignment::Vector16`]
/// whatever was requested.
#[derive(Clone)]
pub struct FecBuffer {
    blocks: Vec<Block>,
    len: usize,
    alignment: Alignment,
}

impl FecBuffer {
    /// Zero-filled buffer, panics like `vec!` if memory is exhausted
    pub fn zeroed(len: usize, alignment: Alignment) -> Self {
        Self {
            blocks: vec![Block::default(); len.div_ceil(BLOCK)],
            len,
            alignment,
        }
    }

    /// Zero-filled buffer, `None` if memory cannot be reserved
    pub fn try_zeroed(len: usize, alignment: Alignment) -> Option<Self> {
        let count = len.div_ceil(BLOCK);
        let mut blocks = Vec::new();
        blocks.try_reserve_exact(count).ok()?;
        blocks.resize(count, Block::default());
        Some(Self {
            blocks,
            len,
            alignment,
        })
    }

    /// Logical length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Alignment that was requested for this buffer
    #[inline]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Bytes reserved, a multiple of 16
    #[inline]
    pub fn capacity(&self) -> usize {
        self.blocks.len() * BLOCK
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &bytemuck::cast_slice::<Block, u8>(&self.blocks)[..self.len]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut::<Block, u8>(&mut self.blocks)[..self.len]
    }

    /// True when the start address satisfies `alignment`
    pub fn satisfies(&self, alignment: Alignment) -> bool {
        (self.as_slice().as_ptr() as usize) % alignment.bytes() == 0
    }

    /// Change the logical length within the reserved capacity (pool reuse)
    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        self.len = len.min(self.capacity());
    }

    pub(crate) fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }
}

impl fmt::Debug for FecBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FecBuffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("alignment", &self.alignment)
            .finish()
    }
}

/// Purpose-tagged buffer acquisition and release
///
/// `allocate` returns `None` when no buffer can be provided; the engine turns
/// that into [`FecError::AllocationFailure`] without retrying. Buffers handed
/// out may hold stale contents; the engine initialises what it reads.
/// Implementations shared between threads must be `Sync`; the engine does no
/// locking of its own.
pub trait FecAllocator {
    fn allocate(&self, size: usize, alignment: Alignment, purpose: Purpose) -> Option<FecBuffer>;
    fn release(&self, buffer: FecBuffer, purpose: Purpose);
}

impl<A: FecAllocator + ?Sized> FecAllocator for &A {
    fn allocate(&self, size: usize, alignment: Alignment, purpose: Purpose) -> Option<FecBuffer> {
        (**self).allocate(size, alignment, purpose)
    }

    fn release(&self, buffer: FecBuffer, purpose: Purpose) {
        (**self).release(buffer, purpose)
    }
}

impl<A: FecAllocator + ?Sized> FecAllocator for Box<A> {
    fn allocate(&self, size: usize, alignment: Alignment, purpose: Purpose) -> Option<FecBuffer> {
        (**self).allocate(size, alignment, purpose)
    }

    fn release(&self, buffer: FecBuffer, purpose: Purpose) {
        (**self).release(buffer, purpose)
    }
}

impl<A: FecAllocator + ?Sized> FecAllocator for Arc<A> {
    fn allocate(&self, size: usize, alignment: Alignment, purpose: Purpose) -> Option<FecBuffer> {
        (**self).allocate(size, alignment, purpose)
    }

    fn release(&self, buffer: FecBuffer, purpose: Purpose) {
        (**self).release(buffer, purpose)
    }
}

/// A buffer borrowed from an allocator for the duration of one operation
///
/// Released back to the allocator on drop unless [`Lease::into_inner`] takes
/// ownership, so every early return releases what was acquired.
pub(crate) struct Lease<'a, A: FecAllocator + ?Sized> {
    allocator: &'a A,
    purpose: Purpose,
    // Some until into_inner or drop
    buffer: Option<FecBuffer>,
}

impl<'a, A: FecAllocator + ?Sized> Lease<'a, A> {
    /// Acquire `size` zeroed bytes
    pub fn acquire(
        allocator: &'a A,
        size: usize,
        alignment: Alignment,
        purpose: Purpose,
    ) -> Result<Self> {
        let failure = FecError::AllocationFailure { size, purpose };
        let mut buffer = allocator
            .allocate(size, alignment, purpose)
            .ok_or(failure.clone())?;

        if buffer.len() < size || !buffer.satisfies(alignment) {
            allocator.release(buffer, purpose);
            return Err(failure);
        }
        buffer.set_len(size);
        buffer.as_mut_slice().fill(0);

        Ok(Self {
            allocator,
            purpose,
            buffer: Some(buffer),
        })
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        match self.buffer.as_ref() {
            Some(b) => b.as_slice(),
            None => &[],
        }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        match self.buffer.as_mut() {
            Some(b) => b.as_mut_slice(),
            None => &mut [],
        }
    }

    /// Keep the buffer past this operation
    pub fn into_inner(mut self) -> FecBuffer {
        match self.buffer.take() {
            Some(buffer) => buffer,
            None => unreachable!("lease buffer taken twice"),
        }
    }
}

impl<A: FecAllocator + ?Sized> Drop for Lease<'_, A> {
    fn drop(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            self.allocator.release(buffer, self.purpose);
        }
    }
}
