//! Constraint matrix construction
//!
//! One dense GF(256) row per constraint, L columns (one per intermediate
//! symbol), stored row-major in a scratch buffer:
//!
//! ```text
//!   rows 0..S          LDPC   (sparse, fixed for K')
//!   rows S..S+H        HDPC   (dense, fixed for K')
//!   rows S+H..         LT     (one per ISI, from the tuple generator)
//! ```
//!
//! Entries are accumulated with XOR, so an index the tuple visits twice
//! cancels exactly as it does during synthesis.

use crate::buffer::{Alignment, FecAllocator, Lease, Purpose};
use crate::error::{FecError, Result};
use crate::octet::{Octet, SymbolOps};
use crate::params::Parameters;
use crate::tuple::{self, rand};
use std::ops::Range;

/// Dense coefficient matrix in a call-scoped scratch buffer
pub(crate) struct ConstraintMatrix<'a, A: FecAllocator + ?Sized> {
    lease: Lease<'a, A>,
    rows: usize,
    cols: usize,
    stride: usize,
    ldpc: Range<usize>,
    hdpc: Range<usize>,
}

impl<'a, A: FecAllocator + ?Sized> ConstraintMatrix<'a, A> {
    /// Build the S + H + `isis.len()` constraint rows for `params`
    pub fn build(params: &Parameters, isis: &[u32], allocator: &'a A) -> Result<Self> {
        let rows = params.s() + params.h() + isis.len();
        let cols = params.l();
        let stride = cols.div_ceil(16) * 16;
        let size = rows.checked_mul(stride).ok_or(FecError::AllocationFailure {
            size: usize::MAX,
            purpose: Purpose::Scratch,
        })?;

        let lease = Lease::acquire(allocator, size, Alignment::Vector16, Purpose::Scratch)?;
        let mut matrix = Self {
            lease,
            rows,
            cols,
            stride,
            ldpc: 0..params.s(),
            hdpc: params.s()..params.s() + params.h(),
        };

        matrix.fill_ldpc(params);
        matrix.fill_hdpc(params);
        let first_lt = matrix.hdpc.end;
        for (offset, &isi) in isis.iter().enumerate() {
            let row = first_lt + offset;
            for col in tuple::positions(params, isi) {
                matrix.add(row, col, Octet::ONE);
            }
        }
        Ok(matrix)
    }

    fn fill_ldpc(&mut self, params: &Parameters) {
        let (s, b, w, p) = (params.s(), params.b(), params.w(), params.p());
        let base = self.ldpc.start;

        // Circulant part over the first B columns: three ones per column
        for i in 0..b {
            let a = 1 + i / s;
            let mut row = i % s;
            self.add(base + row, i, Octet::ONE);
            row = (row + a) % s;
            self.add(base + row, i, Octet::ONE);
            row = (row + a) % s;
            self.add(base + row, i, Octet::ONE);
        }
        // Identity over the LDPC columns
        for i in 0..s {
            self.add(base + i, b + i, Octet::ONE);
        }
        // Two PI columns per row
        for i in 0..s {
            self.add(base + i, w + i % p, Octet::ONE);
            self.add(base + i, w + (i + 1) % p, Octet::ONE);
        }
    }

    fn fill_hdpc(&mut self, params: &Parameters) {
        let h = params.h();
        let ks = params.k_prime() + params.s();
        let base = self.hdpc.start;

        // MT: two ones per column, alpha^i in the last column
        for j in 0..ks - 1 {
            let seed = (j + 1) as u32;
            let i1 = rand(seed, 6, h as u32) as usize;
            let i2 = (i1 + rand(seed, 7, h as u32 - 1) as usize + 1) % h;
            self.add(base + i1, j, Octet::ONE);
            self.add(base + i2, j, Octet::ONE);
        }
        for i in 0..h {
            self.set(base + i, ks - 1, Octet::alpha_pow(i));
        }

        // MT * GAMMA with GAMMA[i][j] = alpha^(i-j) for i >= j:
        // entry j is sum over i >= j of MT[r][i] * alpha^(i-j)
        for i in 0..h {
            let row = self.row_mut(base + i);
            let mut acc = Octet::ZERO;
            for entry in row[..ks].iter_mut().rev() {
                acc = acc * Octet::ALPHA + Octet::new(*entry);
                *entry = acc.value();
            }
        }

        // I_H over the HDPC columns
        for i in 0..h {
            self.set(base + i, ks + i, Octet::ONE);
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn is_hdpc(&self, row: usize) -> bool {
        self.hdpc.contains(&row)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Octet {
        Octet::new(self.lease.as_slice()[row * self.stride + col])
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Octet) {
        let stride = self.stride;
        self.lease.as_mut_slice()[row * stride + col] = value.value();
    }

    #[inline]
    fn add(&mut self, row: usize, col: usize, value: Octet) {
        let stride = self.stride;
        self.lease.as_mut_slice()[row * stride + col] ^= value.value();
    }

    /// Coefficients of `row` (L entries)
    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.stride;
        &self.lease.as_slice()[start..start + self.cols]
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [u8] {
        let (start, cols) = (row * self.stride, self.cols);
        &mut self.lease.as_mut_slice()[start..start + cols]
    }

    /// `row[dst] += factor * row[src]`
    pub fn mul_add_row(&mut self, src: usize, dst: usize, factor: Octet, ops: &SymbolOps) {
        debug_assert_ne!(src, dst);
        let stride = self.stride;
        let (src_row, dst_row) = split_rows(self.lease.as_mut_slice(), stride, src, dst);
        ops.mul_add(src_row, dst_row, factor);
    }
}

/// Borrow row `src` shared and row `dst` mutably from a row-major buffer
pub(crate) fn split_rows(
    data: &mut [u8],
    stride: usize,
    src: usize,
    dst: usize,
) -> (&[u8], &mut [u8]) {
    if src < dst {
        let (head, tail) = data.split_at_mut(dst * stride);
        (&head[src * stride..(src + 1) * stride], &mut tail[..stride])
    } else {
        let (head, tail) = data.split_at_mut(src * stride);
        (&tail[..stride], &mut head[dst * stride..(dst + 1) * stride])
    }
}
