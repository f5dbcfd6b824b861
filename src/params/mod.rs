//! Parameter derivation
//!
//! Everything the encoder and decoder need to agree on is a pure function of
//! `(K, T)`: the systematic index row for K' and the derived block sizes.
//!
//! ```text
//!   columns:  0 ........ B ....... W ............ L
//!             |  LT (B)  | LDPC(S) |  PI (P = L-W) |
//!                                  | U     | HDPC(H)|
//! ```

pub mod table;

pub use table::{lookup, SystematicEntry, MAX_SOURCE_SYMBOLS, SYSTEMATIC_INDICES};

use crate::error::{FecError, InvalidInput, Result};

/// Derived parameter set for one source block
///
/// Computed once per `(K, T)` and never mutated; cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameters {
    k: usize,
    t: usize,
    k_prime: usize,
    s: usize,
    h: usize,
    w: usize,
    l: usize,
    p: usize,
    p1: usize,
    u: usize,
    b: usize,
    j: u32,
}

impl Parameters {
    /// Derive the parameter set for `k` source symbols of `t` bytes
    pub fn derive(k: usize, t: usize) -> Result<Self> {
        let out_of_range = FecError::ParamOutOfRange { k, t };
        if k == 0 || t == 0 {
            return Err(out_of_range);
        }
        let entry = lookup(k).ok_or(out_of_range.clone())?;

        let k_prime = entry.k_prime as usize;
        let s = entry.s as usize;
        let h = entry.h as usize;
        let w = entry.w as usize;
        let l = k_prime + s + h;
        let p = l - w;

        // Every buffer size the engine computes is bounded by L*T
        if l.checked_mul(t).is_none() {
            return Err(out_of_range);
        }

        Ok(Self {
            k,
            t,
            k_prime,
            s,
            h,
            w,
            l,
            p,
            p1: next_prime_ge(p),
            u: p - h,
            b: w - s,
            j: entry.j as u32,
        })
    }

    /// Parameters for an object of `len` bytes split into `t`-byte symbols
    pub fn for_object(len: usize, t: usize) -> Result<Self> {
        if len == 0 || t == 0 {
            return Err(FecError::ParamOutOfRange { k: 0, t });
        }
        Self::derive(len.div_ceil(t), t)
    }

    /// Copy `data` into a zero-padded K*T source block
    pub fn pad_source_block(&self, data: &[u8]) -> Result<Vec<u8>> {
        let expected = self.source_block_len();
        if data.len() > expected {
            return Err(InvalidInput::SourceLength {
                expected,
                actual: data.len(),
            }
            .into());
        }
        let mut block = vec![0u8; expected];
        block[..data.len()].copy_from_slice(data);
        Ok(block)
    }

    /// Source symbol count K
    #[inline]
    pub const fn k(&self) -> usize {
        self.k
    }

    /// Symbol size T in bytes
    #[inline]
    pub const fn t(&self) -> usize {
        self.t
    }

    /// Padded source symbol count K'
    #[inline]
    pub const fn k_prime(&self) -> usize {
        self.k_prime
    }

    /// LDPC symbol count
    #[inline]
    pub const fn s(&self) -> usize {
        self.s
    }

    /// HDPC symbol count
    #[inline]
    pub const fn h(&self) -> usize {
        self.h
    }

    /// LT symbol count
    #[inline]
    pub const fn w(&self) -> usize {
        self.w
    }

    /// Intermediate symbol count
    #[inline]
    pub const fn l(&self) -> usize {
        self.l
    }

    /// Permanently inactivated symbol count
    #[inline]
    pub const fn p(&self) -> usize {
        self.p
    }

    /// Smallest prime >= P
    #[inline]
    pub const fn p1(&self) -> usize {
        self.p1
    }

    #[inline]
    pub const fn u(&self) -> usize {
        self.u
    }

    #[inline]
    pub const fn b(&self) -> usize {
        self.b
    }

    /// Systematic index J(K')
    #[inline]
    pub const fn j(&self) -> u32 {
        self.j
    }

    /// Number of zero padding symbols K' - K
    #[inline]
    pub const fn padding_symbols(&self) -> usize {
        self.k_prime - self.k
    }

    /// K*T
    #[inline]
    pub const fn source_block_len(&self) -> usize {
        self.k * self.t
    }

    /// Largest ESI whose ISI still fits in a u32
    #[inline]
    pub const fn max_esi(&self) -> u32 {
        u32::MAX - self.padding_symbols() as u32
    }

    /// Map an encoding symbol ID to its internal symbol ID
    pub fn esi_to_isi(&self, esi: u32) -> Result<u32> {
        if (esi as usize) < self.k {
            return Ok(esi);
        }
        esi.checked_add(self.padding_symbols() as u32).ok_or_else(|| {
            InvalidInput::EsiOutOfRange {
                esi: esi as u64,
                max: self.max_esi(),
            }
            .into()
        })
    }

    /// Map an internal symbol ID back to its ESI; padding ISIs have none
    pub fn isi_to_esi(&self, isi: u32) -> Option<u32> {
        match isi as usize {
            i if i < self.k => Some(isi),
            i if i < self.k_prime => None,
            _ => Some(isi - self.padding_symbols() as u32),
        }
    }
}

/// Derive parameters for `k` symbols of `t` bytes
pub fn derive_parameters(k: usize, t: usize) -> Result<Parameters> {
    Parameters::derive(k, t)
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

fn next_prime_ge(n: usize) -> usize {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}
