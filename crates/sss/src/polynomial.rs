//! The dealer polynomial: secret as constant term, random higher
//! coefficients.

use crate::{Error, Result};
use rand::{CryptoRng, RngCore};
use sss_math::zp::Modulus;
use zeroize::Zeroizing;

/// A polynomial over `Z_p` with `f(0)` equal to the shared secret.
///
/// Instances are scoped to a single share-generation call and never escape
/// it; the coefficients are wiped when the value drops. Anyone holding the
/// coefficients can recompute the secret without any shares.
pub(crate) struct SecretPolynomial {
    coefficients: Zeroizing<Vec<u64>>,
    field: Modulus,
}

impl SecretPolynomial {
    /// Build a polynomial of degree `threshold - 1` whose constant term is
    /// `secret` and whose remaining coefficients are drawn independently and
    /// uniformly from the field.
    pub(crate) fn random<R: RngCore + CryptoRng>(
        secret: u64,
        threshold: usize,
        field: &Modulus,
        rng: &mut R,
    ) -> Result<Self> {
        if threshold < 1 {
            return Err(Error::InvalidDegree(threshold));
        }
        debug_assert!(secret < field.modulus());

        let mut coefficients = Vec::with_capacity(threshold);
        coefficients.push(secret);
        coefficients.extend(field.random_vec(threshold - 1, rng));
        Ok(Self {
            coefficients: Zeroizing::new(coefficients),
            field: field.clone(),
        })
    }

    /// Build a polynomial from explicit reduced coefficients.
    #[cfg(test)]
    pub(crate) fn from_coefficients(coefficients: Vec<u64>, field: &Modulus) -> Self {
        debug_assert!(coefficients.iter().all(|c| *c < field.modulus()));
        Self {
            coefficients: Zeroizing::new(coefficients),
            field: field.clone(),
        }
    }

    /// Evaluate the polynomial at x with Horner's rule.
    pub(crate) fn evaluate(&self, x: u64) -> u64 {
        debug_assert!(x < self.field.modulus());
        self.coefficients
            .iter()
            .rev()
            .fold(0, |acc, &c| self.field.add(self.field.mul(acc, x), c))
    }
}
