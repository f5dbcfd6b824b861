//! Tuple generation (RFC 6330 section 5.3.5)
//!
//! Maps an internal symbol ID to the set of intermediate symbols whose XOR is
//! the encoding symbol with that ISI. The same function drives constraint
//! matrix rows and on-demand synthesis, so it must be bit-exact and stable:
//! all arithmetic is 32-bit wrapping, all tables are constant data.

mod tables;

use crate::params::Parameters;
use smallvec::SmallVec;
use tables::{V0, V1, V2, V3};

/// Largest LT degree plus largest PI degree
const MAX_POSITIONS: usize = 33;

/// Intermediate symbol indices of one encoding symbol, LT part first
pub type Positions = SmallVec<[usize; MAX_POSITIONS]>;

/// Degree distribution thresholds: degree `d` is chosen for `v < DEGREE_TABLE[d]`
#[rustfmt::skip]
const DEGREE_TABLE: [u32; 31] = [
    0, 5243, 529531, 704294, 791675, 844104, 879057, 904023, 922747, 937311,
    948962, 958494, 966438, 973160, 978921, 983914, 988283, 992138, 995565, 998631,
    1001391, 1003887, 1006157, 1008229, 1010129, 1011876, 1013490, 1014983, 1016370, 1017662,
    1048576,
];

/// `Rand[y, i, m]`, a value in `[0, m)`
#[inline]
pub fn rand(y: u32, i: u8, m: u32) -> u32 {
    debug_assert!(m > 0, "modulus must be positive");
    let i = u32::from(i);
    let x0 = (y.wrapping_add(i) & 0xFF) as usize;
    let x1 = ((y >> 8).wrapping_add(i) & 0xFF) as usize;
    let x2 = ((y >> 16).wrapping_add(i) & 0xFF) as usize;
    let x3 = ((y >> 24).wrapping_add(i) & 0xFF) as usize;
    (V0[x0] ^ V1[x1] ^ V2[x2] ^ V3[x3]) % m
}

/// LT degree for `v` in `[0, 2^20)`, capped at `W - 2`
pub fn degree(v: u32, w: usize) -> usize {
    let d = DEGREE_TABLE[1..]
        .iter()
        .position(|&threshold| v < threshold)
        .map_or(DEGREE_TABLE.len() - 1, |idx| idx + 1);
    d.min(w - 2)
}

/// LT and PI walk parameters of one encoding symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tuple {
    /// LT degree
    pub d: usize,
    /// LT step
    pub a: usize,
    /// LT start over W
    pub b: usize,
    /// PI degree
    pub d1: usize,
    /// PI step
    pub a1: usize,
    /// PI start over P1
    pub b1: usize,
}

impl Tuple {
    /// Tuple of the symbol with internal ID `isi`
    pub fn new(params: &Parameters, isi: u32) -> Self {
        Self::from_constants(params.j(), params.w(), params.p1(), isi)
    }

    /// Tuple from the raw structural constants `(J, W, P1)`
    pub fn from_constants(j: u32, w: usize, p1: usize, x: u32) -> Self {
        let mut a = 53591u32.wrapping_add(997u32.wrapping_mul(j));
        if a % 2 == 0 {
            a = a.wrapping_add(1);
        }
        let b = 10267u32.wrapping_mul(j.wrapping_add(1));
        let y = b.wrapping_add(x.wrapping_mul(a));

        let d = degree(rand(y, 0, 1 << 20), w);
        Tuple {
            d,
            a: 1 + rand(y, 1, w as u32 - 1) as usize,
            b: rand(y, 2, w as u32) as usize,
            d1: if d < 4 { 2 + rand(x, 3, 2) as usize } else { 2 },
            a1: 1 + rand(x, 4, p1 as u32 - 1) as usize,
            b1: rand(x, 5, p1 as u32) as usize,
        }
    }

    /// Expand into intermediate symbol indices in `[0, W + P)`
    ///
    /// LT indices walk `b, b+a, ...` over W; PI indices walk over P1 skipping
    /// values `>= P` and are offset by W. Repeats are kept: coefficients
    /// accumulate by XOR, so a repeated index cancels.
    pub fn positions(&self, w: usize, p: usize, p1: usize) -> Positions {
        let mut out = Positions::new();

        let mut b = self.b;
        out.push(b);
        for _ in 1..self.d {
            b = (b + self.a) % w;
            out.push(b);
        }

        let mut b1 = self.b1;
        while b1 >= p {
            b1 = (b1 + self.a1) % p1;
        }
        out.push(w + b1);
        for _ in 1..self.d1 {
            b1 = (b1 + self.a1) % p1;
            while b1 >= p {
                b1 = (b1 + self.a1) % p1;
            }
            out.push(w + b1);
        }
        out
    }
}

/// Intermediate symbol indices of the symbol with internal ID `isi`
pub fn positions(params: &Parameters, isi: u32) -> Positions {
    Tuple::new(params, isi).positions(params.w(), params.p(), params.p1())
}
