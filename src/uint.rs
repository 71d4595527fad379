//! Fixed-width unsigned integers
//!
//! `Uint<LIMBS>` is a plain value type made of 64-bit limbs stored least
//! significant first. Only the operations the account and balance codecs
//! need are exposed: big-endian load/store, logical shifts, low-bit access
//! and division by a small divisor.

use std::fmt;
use std::ops::{Shl, Shr};

use crate::decimal;
use crate::error::{CodecError, Result};

const LIMB_BITS: u32 = 64;
const LIMB_BYTES: usize = 8;

/// Unsigned integer of `LIMBS * 64` bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Uint<const LIMBS: usize> {
    limbs: [u64; LIMBS],
}

/// 256-bit integer holding a public key.
pub type U256 = Uint<4>;

/// 128-bit integer holding a raw balance.
pub type U128 = Uint<2>;

impl<const LIMBS: usize> Uint<LIMBS> {
    pub const BITS: u32 = LIMBS as u32 * LIMB_BITS;
    pub const BYTES: usize = LIMBS * LIMB_BYTES;
    pub const ZERO: Self = Self { limbs: [0; LIMBS] };
    pub const MAX: Self = Self { limbs: [u64::MAX; LIMBS] };

    /// Load a big-endian buffer of exactly `BYTES` bytes.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::BYTES {
            return Err(CodecError::InvalidLength {
                expected: Self::BYTES,
                actual: bytes.len(),
            });
        }

        let mut limbs = [0u64; LIMBS];
        // rchunks walks from the least significant end of the buffer
        for (limb, chunk) in limbs.iter_mut().zip(bytes.rchunks_exact(LIMB_BYTES)) {
            let mut word = [0u8; LIMB_BYTES];
            word.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(word);
        }
        Ok(Self { limbs })
    }

    /// Load a fixed-size big-endian array.
    ///
    /// # Panics
    /// Panics if `N` is not `BYTES`. That is a mismatch between the caller's
    /// buffer type and the integer width, never a user input problem.
    pub fn from_be_array<const N: usize>(bytes: &[u8; N]) -> Self {
        assert_eq!(N, Self::BYTES, "buffer width does not match integer width");
        match Self::from_be_slice(bytes) {
            Ok(value) => value,
            Err(e) => unreachable!("length checked above: {}", e),
        }
    }

    /// Write the value into `out` as big-endian bytes.
    ///
    /// # Panics
    /// Panics if `out` is not exactly `BYTES` long.
    pub fn write_be_bytes(&self, out: &mut [u8]) {
        assert_eq!(out.len(), Self::BYTES, "output buffer does not match integer width");
        for (limb, chunk) in self.limbs.iter().zip(out.rchunks_exact_mut(LIMB_BYTES)) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
    }

    /// Store the value as a big-endian array of `BYTES` bytes.
    pub fn to_be_bytes<const N: usize>(&self) -> [u8; N] {
        let mut out = [0u8; N];
        self.write_be_bytes(&mut out);
        out
    }

    pub fn clear(&mut self) {
        self.limbs = [0; LIMBS];
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&limb| limb == 0)
    }

    /// Logical left shift. Bits pushed past the top are dropped.
    pub fn shift_left(&self, n: u32) -> Self {
        if n >= Self::BITS {
            return Self::ZERO;
        }
        let limb_shift = (n / LIMB_BITS) as usize;
        let bit_shift = n % LIMB_BITS;

        let mut limbs = [0u64; LIMBS];
        for i in limb_shift..LIMBS {
            let src = i - limb_shift;
            let mut word = self.limbs[src] << bit_shift;
            if bit_shift > 0 && src > 0 {
                word |= self.limbs[src - 1] >> (LIMB_BITS - bit_shift);
            }
            limbs[i] = word;
        }
        Self { limbs }
    }

    /// Logical right shift. Zeros are shifted in at the top.
    pub fn shift_right(&self, n: u32) -> Self {
        if n >= Self::BITS {
            return Self::ZERO;
        }
        let limb_shift = (n / LIMB_BITS) as usize;
        let bit_shift = n % LIMB_BITS;

        let mut limbs = [0u64; LIMBS];
        for i in 0..LIMBS - limb_shift {
            let src = i + limb_shift;
            let mut word = self.limbs[src] >> bit_shift;
            if bit_shift > 0 && src + 1 < LIMBS {
                word |= self.limbs[src + 1] << (LIMB_BITS - bit_shift);
            }
            limbs[i] = word;
        }
        Self { limbs }
    }

    /// OR `value` into the lowest limb. The caller clears those bits first,
    /// normally with a preceding `shift_left`.
    pub fn or_low_bits(&mut self, value: u64) {
        if let Some(low) = self.limbs.first_mut() {
            *low |= value;
        }
    }

    /// `self mod 32`, leaving the value untouched.
    pub fn low_five_bits(&self) -> u8 {
        self.limbs.first().map_or(0, |&low| (low & 0x1f) as u8)
    }

    /// Schoolbook division by a single-word divisor.
    ///
    /// # Panics
    /// Panics if `divisor` is zero.
    pub fn div_rem_small(&self, divisor: u64) -> (Self, u64) {
        assert!(divisor != 0, "division by zero");
        let divisor = u128::from(divisor);

        let mut quotient = [0u64; LIMBS];
        let mut remainder: u128 = 0;
        for i in (0..LIMBS).rev() {
            let current = (remainder << LIMB_BITS) | u128::from(self.limbs[i]);
            quotient[i] = (current / divisor) as u64;
            remainder = current % divisor;
        }
        (Self { limbs: quotient }, remainder as u64)
    }
}

impl<const LIMBS: usize> Default for Uint<LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const LIMBS: usize> From<u64> for Uint<LIMBS> {
    fn from(value: u64) -> Self {
        let mut out = Self::ZERO;
        out.or_low_bits(value);
        out
    }
}

impl<const LIMBS: usize> Shl<u32> for Uint<LIMBS> {
    type Output = Self;

    fn shl(self, n: u32) -> Self {
        self.shift_left(n)
    }
}

impl<const LIMBS: usize> Shr<u32> for Uint<LIMBS> {
    type Output = Self;

    fn shr(self, n: u32) -> Self {
        self.shift_right(n)
    }
}

impl<const LIMBS: usize> fmt::Display for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&decimal::to_decimal_string(self))
    }
}
