//! Three-phase inactivation decoding
//!
//! Solves `A * C = D` for the L intermediate symbols `C`, where `A` is the
//! M x L constraint matrix and `D` the M payload rows.
//!
//! ## Phases
//!
//! 1. **Sparse elimination**: the P PI columns start inactive. Rows are
//!    chosen by smallest weight over the still-active columns (HDPC rows
//!    last); the chosen row pivots on one active column and every other
//!    active column it touches is inactivated. The pivot column is then
//!    eliminated from every unused row.
//! 2. **Dense elimination**: the unused rows restricted to the inactive
//!    columns form a small dense system, solved by Gauss-Jordan elimination
//!    with row pivoting.
//! 3. **Back-substitution**: each phase-1 pivot row removes its inactive
//!    column terms and is scaled by its pivot inverse.
//!
//! Rows never move. The result maps every column to the physical payload row
//! that ends up holding its value.

use crate::buffer::{Alignment, FecAllocator, Lease, Purpose};
use crate::error::{DecodeFailure, Result, SolvePhase};
use crate::matrix::{split_rows, ConstraintMatrix};
use crate::octet::{Octet, SymbolOps};
use crate::params::Parameters;
use log::{debug, trace};

/// Counters describing one solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Columns solved in the sparse phase
    pub pivots: usize,
    /// PI columns, inactive from the start
    pub permanently_inactive: usize,
    /// Columns inactivated during the sparse phase
    pub dynamically_inactive: usize,
    /// Size of the dense system
    pub dense_dimension: usize,
    /// Rows that were redundant
    pub unused_rows: usize,
}

impl SolveStats {
    /// Total inactivated columns
    pub fn inactivated(&self) -> usize {
        self.permanently_inactive + self.dynamically_inactive
    }
}

/// Column → physical row map plus statistics
#[derive(Debug)]
pub(crate) struct Solution {
    pub column_rows: Vec<u32>,
    pub stats: SolveStats,
}

/// Payload rows addressed by physical row index
pub(crate) struct PayloadRows<'b> {
    data: &'b mut [u8],
    stride: usize,
}

impl<'b> PayloadRows<'b> {
    pub fn new(data: &'b mut [u8], stride: usize) -> Self {
        Self { data, stride }
    }

    #[cfg(test)]
    pub fn row(&self, row: usize) -> &[u8] {
        &self.data[row * self.stride..(row + 1) * self.stride]
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [u8] {
        &mut self.data[row * self.stride..(row + 1) * self.stride]
    }

    /// `row[dst] += factor * row[src]`
    #[inline]
    pub fn mul_add(&mut self, src: usize, dst: usize, factor: Octet, ops: &SymbolOps) {
        let (src_row, dst_row) = split_rows(self.data, self.stride, src, dst);
        ops.mul_add(src_row, dst_row, factor);
    }

    #[inline]
    pub fn scale(&mut self, row: usize, factor: Octet, ops: &SymbolOps) {
        ops.scale(self.row_mut(row), factor);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Active,
    Inactive,
    Pivot,
}

/// Solve the system in place
///
/// On success every column's value sits in the payload row named by
/// `Solution::column_rows`. On failure the payload rows hold partial
/// eliminations and must be discarded.
pub(crate) fn solve<A: FecAllocator + ?Sized>(
    matrix: &mut ConstraintMatrix<'_, A>,
    payload: &mut PayloadRows<'_>,
    params: &Parameters,
    ops: &SymbolOps,
    allocator: &A,
) -> Result<Solution> {
    let (m, l, w) = (matrix.rows(), matrix.cols(), params.w());
    if m < l {
        return Err(DecodeFailure::InsufficientSymbols {
            rows: m,
            required: l,
        }
        .into());
    }

    // ========================================================================
    // Phase 1: sparse elimination with inactivation
    // ========================================================================

    let mut state = vec![Column::Active; l];
    state[w..].fill(Column::Inactive);
    let mut inactive: Vec<usize> = (w..l).collect();
    let mut used = vec![false; m];
    let mut weight: Vec<usize> = (0..m)
        .map(|r| matrix.row(r)[..w].iter().filter(|&&v| v != 0).count())
        .collect();
    let mut pivots: Vec<(usize, usize)> = Vec::with_capacity(w);
    let mut active_left = w;
    let mut dynamic = 0;

    while active_left > 0 {
        let Some(row) = select_row(matrix, &used, &weight) else {
            // No unused row touches an active column
            for (col, s) in state[..w].iter_mut().enumerate() {
                if *s == Column::Active {
                    *s = Column::Inactive;
                    inactive.push(col);
                }
            }
            dynamic += active_left;
            break;
        };

        // A stale weight drops the row from selection
        let Some(col) =
            (0..w).find(|&c| state[c] == Column::Active && !matrix.get(row, c).is_zero())
        else {
            weight[row] = 0;
            continue;
        };

        // Every other active column of the pivot row is deferred
        for other in col + 1..w {
            if state[other] != Column::Active || matrix.get(row, other).is_zero() {
                continue;
            }
            state[other] = Column::Inactive;
            inactive.push(other);
            dynamic += 1;
            active_left -= 1;
            for r in 0..m {
                if !used[r] && r != row && !matrix.get(r, other).is_zero() {
                    weight[r] -= 1;
                }
            }
        }

        state[col] = Column::Pivot;
        active_left -= 1;
        used[row] = true;
        pivots.push((row, col));

        let pivot_inv = matrix
            .get(row, col)
            .inverse()
            .ok_or(DecodeFailure::Singular {
                phase: SolvePhase::Sparse,
                column: col,
            })?;
        for r in 0..m {
            if used[r] {
                continue;
            }
            let coeff = matrix.get(r, col);
            if coeff.is_zero() {
                continue;
            }
            let factor = coeff * pivot_inv;
            matrix.mul_add_row(row, r, factor, ops);
            payload.mul_add(row, r, factor, ops);
            weight[r] -= 1;
        }
    }

    trace!(
        "sparse phase: {} pivots, {} inactive ({} dynamic)",
        pivots.len(),
        inactive.len(),
        dynamic
    );

    // ========================================================================
    // Phase 2: dense elimination over the inactive columns
    // ========================================================================

    let rest: Vec<usize> = (0..m).filter(|&r| !used[r]).collect();
    let u = inactive.len();
    if rest.len() < u {
        return Err(DecodeFailure::InsufficientSymbols {
            rows: m,
            required: l,
        }
        .into());
    }

    let dense_stride = u.div_ceil(16) * 16;
    let mut dense = Lease::acquire(
        allocator,
        rest.len() * dense_stride,
        Alignment::Vector16,
        Purpose::Scratch,
    )?;
    {
        let block = dense.as_mut_slice();
        for (q, &r) in rest.iter().enumerate() {
            let dst = &mut block[q * dense_stride..q * dense_stride + u];
            for (k, &col) in inactive.iter().enumerate() {
                dst[k] = matrix.get(r, col).value();
            }
        }
    }

    // perm[q] is the dense row in position q
    let mut perm: Vec<usize> = (0..rest.len()).collect();
    for k in 0..u {
        let found =
            (k..perm.len()).find(|&q| dense.as_slice()[perm[q] * dense_stride + k] != 0);
        let Some(q) = found else {
            return Err(DecodeFailure::Singular {
                phase: SolvePhase::Dense,
                column: inactive[k],
            }
            .into());
        };
        perm.swap(k, q);
        let pr = perm[k];

        let inv = Octet::new(dense.as_slice()[pr * dense_stride + k])
            .inverse()
            .ok_or(DecodeFailure::Singular {
                phase: SolvePhase::Dense,
                column: inactive[k],
            })?;
        ops.scale(&mut dense.as_mut_slice()[pr * dense_stride..(pr + 1) * dense_stride], inv);
        payload.scale(rest[pr], inv, ops);

        for q in 0..perm.len() {
            if q == k {
                continue;
            }
            let dr = perm[q];
            let factor = Octet::new(dense.as_slice()[dr * dense_stride + k]);
            if factor.is_zero() {
                continue;
            }
            let (src, dst) = split_rows(dense.as_mut_slice(), dense_stride, pr, dr);
            ops.mul_add(src, dst, factor);
            payload.mul_add(rest[pr], rest[dr], factor, ops);
        }
    }
    drop(dense);

    // ========================================================================
    // Phase 3: back-substitution into the sparse pivot rows
    // ========================================================================

    let mut column_rows = vec![0u32; l];
    for (k, &col) in inactive.iter().enumerate() {
        column_rows[col] = rest[perm[k]] as u32;
    }
    for &(row, col) in &pivots {
        for (k, &icol) in inactive.iter().enumerate() {
            let coeff = matrix.get(row, icol);
            if !coeff.is_zero() {
                payload.mul_add(rest[perm[k]], row, coeff, ops);
            }
        }
        let inv = matrix.get(row, col).inverse().ok_or(DecodeFailure::Singular {
            phase: SolvePhase::Sparse,
            column: col,
        })?;
        payload.scale(row, inv, ops);
        column_rows[col] = row as u32;
    }

    let stats = SolveStats {
        pivots: pivots.len(),
        permanently_inactive: params.p(),
        dynamically_inactive: dynamic,
        dense_dimension: u,
        unused_rows: rest.len() - u,
    };
    debug!(
        "solved L={} from {} rows: {} pivots, {} inactivated ({} dynamic)",
        l,
        m,
        stats.pivots,
        stats.inactivated(),
        stats.dynamically_inactive
    );

    Ok(Solution { column_rows, stats })
}

/// Unused row with the smallest nonzero active weight, HDPC rows last
fn select_row<A: FecAllocator + ?Sized>(
    matrix: &ConstraintMatrix<'_, A>,
    used: &[bool],
    weight: &[usize],
) -> Option<usize> {
    let mut best: Option<((bool, usize), usize)> = None;
    for (r, (&is_used, &wt)) in used.iter().zip(weight).enumerate() {
        if is_used || wt == 0 {
            continue;
        }
        let key = (matrix.is_hdpc(r), wt);
        if best.map_or(true, |(best_key, _)| key < best_key) {
            best = Some((key, r));
            if key == (false, 1) {
                break;
            }
        }
    }
    best.map(|(_, r)| r)
}
