//! SIMD GF(2^8) slice kernels with runtime dispatch
//!
//! x86_64 uses the PSHUFB nibble-table technique from "Screaming Fast Galois
//! Field Arithmetic" (Plank et al.): a byte `x` is split into its low and high
//! nibble and `c * x = lo[x & 0xF] ^ hi[x >> 4]`, two 16-entry lookups that fit
//! one vector register each.
//!
//! - **Avx2**: 32 bytes per iteration
//! - **Ssse3**: 16 bytes per iteration
//! - **None**: scalar kernels from [`super::scalar`]
//!
//! Callers go through [`SymbolOps`], which pins a level once and never picks a
//! level the running CPU does not support.

use super::scalar::{self, WriteOp};
use super::{mul_table, Octet};
use std::sync::OnceLock;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// SIMD implementation to use for the current platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SimdLevel {
    /// No SIMD available, use scalar fallback
    None,
    /// x86_64 SSSE3 (128-bit PSHUFB)
    Ssse3,
    /// x86_64 AVX2 (256-bit PSHUFB)
    Avx2,
}

/// Detect best available SIMD implementation for current platform
pub fn detect_simd_support() -> SimdLevel {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") && is_x86_feature_detected!("ssse3") {
            return SimdLevel::Avx2;
        }
        if is_x86_feature_detected!("ssse3") {
            return SimdLevel::Ssse3;
        }
        SimdLevel::None
    }

    #[cfg(not(target_arch = "x86_64"))]
    {
        SimdLevel::None
    }
}

/// Detected level, cached for the life of the process
pub fn detected_simd_level() -> SimdLevel {
    static SIMD_LEVEL: OnceLock<SimdLevel> = OnceLock::new();
    *SIMD_LEVEL.get_or_init(detect_simd_support)
}

/// Nibble lookup tables for one coefficient
#[derive(Debug, Clone)]
pub struct NibbleTables {
    /// Low nibble (0x0N) → product
    pub lo: [u8; 16],
    /// High nibble (0xN0) → product
    pub hi: [u8; 16],
}

/// Build nibble lookup tables from the 256-entry product row of `coefficient`
pub fn build_nibble_tables(coefficient: Octet) -> NibbleTables {
    let table = mul_table(coefficient);
    let mut lo = [0u8; 16];
    let mut hi = [0u8; 16];
    for nib in 0..16 {
        lo[nib] = table[nib];
        hi[nib] = table[nib << 4];
    }
    NibbleTables { lo, hi }
}

/// SSSE3 multiply over `len` bytes, returns the number of bytes processed
///
/// # Safety
/// - CPU must support SSSE3
/// - `input` must be valid for `len` reads and `output` for `len` writes;
///   they may be the same pointer (each vector is loaded before it is stored)
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "ssse3")]
unsafe fn multiply_ssse3(
    input: *const u8,
    output: *mut u8,
    len: usize,
    tables: &NibbleTables,
    mode: WriteOp,
) -> usize {
    let chunks = len / 16;
    let lo = _mm_loadu_si128(tables.lo.as_ptr() as *const __m128i);
    let hi = _mm_loadu_si128(tables.hi.as_ptr() as *const __m128i);
    let mask = _mm_set1_epi8(0x0f);

    for i in 0..chunks {
        let offset = i * 16;
        let x = _mm_loadu_si128(input.add(offset) as *const __m128i);
        let lo_nib = _mm_and_si128(x, mask);
        let hi_nib = _mm_and_si128(_mm_srli_epi64(x, 4), mask);
        let mut product = _mm_xor_si128(_mm_shuffle_epi8(lo, lo_nib), _mm_shuffle_epi8(hi, hi_nib));
        if mode == WriteOp::Add {
            product = _mm_xor_si128(
                product,
                _mm_loadu_si128(output.add(offset) as *const __m128i),
            );
        }
        _mm_storeu_si128(output.add(offset) as *mut __m128i, product);
    }
    chunks * 16
}

/// AVX2 multiply over `len` bytes, returns the number of bytes processed
///
/// # Safety
/// - CPU must support AVX2 and SSSE3
/// - same pointer requirements as [`multiply_ssse3`]
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2", enable = "ssse3")]
unsafe fn multiply_avx2(
    input: *const u8,
    output: *mut u8,
    len: usize,
    tables: &NibbleTables,
    mode: WriteOp,
) -> usize {
    let chunks = len / 32;
    // Same 16-byte table in both lanes: PSHUFB looks up within each lane
    let lo = _mm256_broadcastsi128_si256(_mm_loadu_si128(tables.lo.as_ptr() as *const __m128i));
    let hi = _mm256_broadcastsi128_si256(_mm_loadu_si128(tables.hi.as_ptr() as *const __m128i));
    let mask = _mm256_set1_epi8(0x0f);

    for i in 0..chunks {
        let offset = i * 32;
        let x = _mm256_loadu_si256(input.add(offset) as *const __m256i);
        let lo_nib = _mm256_and_si256(x, mask);
        let hi_nib = _mm256_and_si256(_mm256_srli_epi64(x, 4), mask);
        let mut product = _mm256_xor_si256(
            _mm256_shuffle_epi8(lo, lo_nib),
            _mm256_shuffle_epi8(hi, hi_nib),
        );
        if mode == WriteOp::Add {
            product = _mm256_xor_si256(
                product,
                _mm256_loadu_si256(output.add(offset) as *const __m256i),
            );
        }
        _mm256_storeu_si256(output.add(offset) as *mut __m256i, product);
    }
    chunks * 32
}

/// Payload kernels pinned to one SIMD level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolOps {
    level: SimdLevel,
}

impl Default for SymbolOps {
    fn default() -> Self {
        Self::detected()
    }
}

impl SymbolOps {
    /// Use `requested` if given, clamped to what this CPU supports
    pub fn new(requested: Option<SimdLevel>) -> Self {
        let detected = detected_simd_level();
        Self {
            level: requested.map_or(detected, |level| level.min(detected)),
        }
    }

    /// Best level for this CPU
    pub fn detected() -> Self {
        Self {
            level: detected_simd_level(),
        }
    }

    /// Scalar kernels only
    pub fn scalar() -> Self {
        Self {
            level: SimdLevel::None,
        }
    }

    pub fn level(&self) -> SimdLevel {
        self.level
    }

    /// `output ^= input`
    #[inline]
    pub fn xor(&self, input: &[u8], output: &mut [u8]) {
        scalar::xor_slice(input, output);
    }

    /// `output ^= coefficient * input`
    #[inline]
    pub fn mul_add(&self, input: &[u8], output: &mut [u8], coefficient: Octet) {
        self.multiply(input, output, coefficient, WriteOp::Add);
    }

    /// Multiply with configurable write mode over `min(len)` bytes
    pub fn multiply(&self, input: &[u8], output: &mut [u8], coefficient: Octet, mode: WriteOp) {
        let len = input.len().min(output.len());
        if coefficient.value() <= 1 || self.level == SimdLevel::None {
            scalar::process_slice_multiply_mode(input, output, coefficient, mode);
            return;
        }

        let tables = build_nibble_tables(coefficient);
        // SAFETY: level never exceeds the detected CPU support, and both
        // slices are valid for `len` bytes
        let done = unsafe {
            self.multiply_raw(input.as_ptr(), output.as_mut_ptr(), len, &tables, mode)
        };
        scalar::process_slice_multiply_mode(
            &input[done..len],
            &mut output[done..len],
            coefficient,
            mode,
        );
    }

    /// `buf = coefficient * buf`
    pub fn scale(&self, buf: &mut [u8], coefficient: Octet) {
        if coefficient.value() <= 1 || self.level == SimdLevel::None {
            scalar::scale_slice(buf, coefficient);
            return;
        }

        let tables = build_nibble_tables(coefficient);
        let len = buf.len();
        let ptr = buf.as_mut_ptr();
        // SAFETY: in-place use is allowed by the kernels
        let done =
            unsafe { self.multiply_raw(ptr as *const u8, ptr, len, &tables, WriteOp::Direct) };
        scalar::scale_slice(&mut buf[done..], coefficient);
    }

    /// # Safety
    /// `self.level` must be supported by the CPU; pointers valid for `len` bytes
    #[allow(unused_variables)]
    unsafe fn multiply_raw(
        &self,
        input: *const u8,
        output: *mut u8,
        len: usize,
        tables: &NibbleTables,
        mode: WriteOp,
    ) -> usize {
        match self.level {
            #[cfg(target_arch = "x86_64")]
            SimdLevel::Avx2 => multiply_avx2(input, output, len, tables, mode),
            #[cfg(target_arch = "x86_64")]
            SimdLevel::Ssse3 => multiply_ssse3(input, output, len, tables, mode),
            _ => 0,
        }
    }
}
