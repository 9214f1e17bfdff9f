//! Prime field arithmetic, backed by 64-bit words.

use crate::{Error, Result};
use num_bigint_dig::prime::probably_prime;
use num_bigint_dig::BigUint;
use rand::{CryptoRng, RngCore};

/// Structure encapsulating an integer modulus up to 62 bits, and operations
/// over the prime field `Z_p` it defines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modulus {
    p: u64,
    leading_zeros: u32,
}

impl Modulus {
    /// Create a modulus from a prime integer in `[2, 2^62)`.
    ///
    /// The bound guarantees that sums of two reduced elements fit in a u64
    /// and products fit in a u128, so every operation below is exact.
    pub fn new(p: u64) -> Result<Self> {
        if p < 2 || p >= (1 << 62) {
            return Err(Error::InvalidModulus(format!(
                "{p} is not in the interval [2, 2^62)"
            )));
        }
        if !probably_prime(&BigUint::from(p), 20) {
            return Err(Error::InvalidModulus(format!("{p} is not prime")));
        }
        Ok(Self {
            p,
            leading_zeros: p.leading_zeros(),
        })
    }

    /// Returns the value of the modulus.
    pub const fn modulus(&self) -> u64 {
        self.p
    }

    /// Modular addition of a and b in constant time.
    pub fn add(&self, a: u64, b: u64) -> u64 {
        debug_assert!(a < self.p && b < self.p);
        Self::reduce1(a + b, self.p)
    }

    /// Modular subtraction of b from a in constant time.
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        debug_assert!(a < self.p && b < self.p);
        Self::reduce1(a + self.p - b, self.p)
    }

    /// Modular negation of a in constant time.
    pub fn neg(&self, a: u64) -> u64 {
        debug_assert!(a < self.p);
        Self::reduce1(self.p - a, self.p)
    }

    /// Modular multiplication of a and b.
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        debug_assert!(a < self.p && b < self.p);
        self.reduce_u128((a as u128) * (b as u128))
    }

    /// Modular exponentiation by squaring.
    pub fn pow(&self, base: u64, exponent: u64) -> u64 {
        debug_assert!(base < self.p);
        let mut result = 1u64;
        let mut base = base;
        let mut e = exponent;
        while e > 0 {
            if e & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            e >>= 1;
        }
        result
    }

    /// Multiplicative inverse of a, computed with the extended Euclidean
    /// algorithm. Returns None if a is zero modulo p; every nonzero element
    /// of a prime field is invertible.
    pub fn inv(&self, a: u64) -> Option<u64> {
        let a = self.reduce(a);
        if a == 0 {
            return None;
        }
        let (mut t, mut new_t) = (0i128, 1i128);
        let (mut r, mut new_r) = (self.p as i128, a as i128);
        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }
        if r != 1 {
            return None;
        }
        if t < 0 {
            t += self.p as i128;
        }
        Some(t as u64)
    }

    /// Modular division `a * b^-1 mod p`.
    ///
    /// Fails with [`Error::DivisionByZero`] when b is zero modulo p.
    pub fn div(&self, a: u64, b: u64) -> Result<u64> {
        let b_inv = self.inv(b).ok_or(Error::DivisionByZero(self.p))?;
        Ok(self.mul(self.reduce(a), b_inv))
    }

    /// Reduce a modulo p.
    pub fn reduce(&self, a: u64) -> u64 {
        a % self.p
    }

    /// Reduce a 128-bit value modulo p.
    pub fn reduce_u128(&self, a: u128) -> u64 {
        (a % (self.p as u128)) as u64
    }

    /// Draw a uniformly random field element by rejection sampling over the
    /// smallest power-of-two range covering `[0, p)`.
    ///
    /// Each accepted element consumes exactly one `next_u64` draw.
    pub fn random<R: RngCore + CryptoRng>(&self, rng: &mut R) -> u64 {
        let mask = u64::MAX >> self.leading_zeros;
        loop {
            let candidate = rng.next_u64() & mask;
            if candidate < self.p {
                return candidate;
            }
        }
    }

    /// Draw a vector of uniformly random field elements.
    pub fn random_vec<R: RngCore + CryptoRng>(&self, size: usize, rng: &mut R) -> Vec<u64> {
        (0..size).map(|_| self.random(rng)).collect()
    }

    /// Reduce a modulo p, assuming a < 2p.
    const fn reduce1(a: u64, p: u64) -> u64 {
        debug_assert!(a < 2 * p);
        if a >= p {
            a - p
        } else {
            a
        }
    }
}
