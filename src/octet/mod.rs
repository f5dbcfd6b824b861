//! GF(2^8) arithmetic for constraint matrices and symbol payloads
//!
//! The field is generated by the polynomial **0x11D** (x⁸ + x⁴ + x³ + x² + 1)
//! with α = 2, as used by RFC 6330. Addition is XOR; multiplication uses
//! log/antilog tables for single elements and a full 256x256 product table
//! for slice kernels (see [`scalar`] and [`simd`]).
//!
//! Tables are built once on first use and shared read-only by every thread.

pub mod scalar;
pub mod simd;

pub use scalar::WriteOp;
pub use simd::{detect_simd_support, SimdLevel, SymbolOps};

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign};
use std::sync::OnceLock;

/// GF(2^8) field generator: 0x11D (x⁸ + x⁴ + x³ + x² + 1)
const GF8_GENERATOR: u32 = 0x11D;

const COUNT: usize = 256;
const LIMIT: usize = COUNT - 1;

/// Lookup tables for GF(2^8)
pub struct OctetTables {
    pub log: [u8; COUNT],
    /// Doubled so `exp[log a + log b]` needs no reduction
    pub exp: [u8; 2 * LIMIT],
    /// `mul[a][b] = a * b`
    pub mul: [[u8; COUNT]; COUNT],
}

impl OctetTables {
    fn build() -> Box<Self> {
        let mut tables = Box::new(OctetTables {
            log: [0; COUNT],
            exp: [0; 2 * LIMIT],
            mul: [[0; COUNT]; COUNT],
        });

        let mut b = 1u32;
        for l in 0..LIMIT {
            tables.log[b as usize] = l as u8;
            tables.exp[l] = b as u8;
            tables.exp[l + LIMIT] = b as u8;

            b <<= 1;
            if b & COUNT as u32 != 0 {
                b ^= GF8_GENERATOR;
            }
        }

        for a in 1..COUNT {
            let log_a = tables.log[a] as usize;
            for c in 1..COUNT {
                tables.mul[a][c] = tables.exp[log_a + tables.log[c] as usize];
            }
        }
        tables
    }
}

/// Shared field tables
pub fn tables() -> &'static OctetTables {
    static TABLES: OnceLock<Box<OctetTables>> = OnceLock::new();
    TABLES.get_or_init(OctetTables::build)
}

/// Product row for a fixed multiplier: `mul_table(c)[x] = c * x`
#[inline]
pub fn mul_table(coefficient: Octet) -> &'static [u8; COUNT] {
    &tables().mul[coefficient.0 as usize]
}

/// GF(2^8) element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Octet(u8);

impl Octet {
    pub const ZERO: Octet = Octet(0);
    pub const ONE: Octet = Octet(1);
    /// Primitive element α
    pub const ALPHA: Octet = Octet(2);

    #[inline]
    pub const fn new(value: u8) -> Self {
        Octet(value)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// α^exponent
    pub fn alpha_pow(exponent: usize) -> Self {
        Octet(tables().exp[exponent % LIMIT])
    }

    /// Power operation
    pub fn pow(self, exponent: u32) -> Self {
        if exponent == 0 {
            return Octet::ONE;
        }
        if self.0 == 0 {
            return Octet::ZERO;
        }
        let log = tables().log[self.0 as usize] as u64;
        Octet(tables().exp[((log * exponent as u64) % LIMIT as u64) as usize])
    }

    /// Multiplicative inverse, `None` for zero
    pub fn inverse(self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }
        let t = tables();
        Some(Octet(t.exp[LIMIT - t.log[self.0 as usize] as usize]))
    }

    /// Division that reports a zero divisor instead of panicking
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        rhs.inverse().map(|inv| self * inv)
    }
}

impl From<u8> for Octet {
    fn from(value: u8) -> Self {
        Octet(value)
    }
}

impl From<Octet> for u8 {
    fn from(value: Octet) -> Self {
        value.0
    }
}

// Addition (XOR in Galois fields)
impl Add for Octet {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Octet(self.0 ^ rhs.0)
    }
}

impl AddAssign for Octet {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

// Subtraction (same as addition in GF(2^n))
impl Sub for Octet {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Octet(self.0 ^ rhs.0)
    }
}

impl SubAssign for Octet {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Mul for Octet {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Octet(tables().mul[self.0 as usize][rhs.0 as usize])
    }
}

impl MulAssign for Octet {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for Octet {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        match self.checked_div(rhs) {
            Some(q) => q,
            None => panic!("Division by zero in GF(256)"),
        }
    }
}
