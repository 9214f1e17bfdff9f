//! Shamir secret sharing: dealer-side share generation and Lagrange
//! reconstruction over a prime field.

use crate::config::validate_threshold_config;
use crate::polynomial::SecretPolynomial;
use crate::share::{ReconstructionSet, Share};
use crate::traits::SecretSharer;
use crate::{Error, Result};
use itertools::Itertools;
use rand::{CryptoRng, RngCore};
use sss_math::zp::Modulus;

/// The default field modulus: the Mersenne prime `2^61 - 1`.
///
/// This is the largest prime below the 62-bit modulus bound, leaving the
/// whole 61-bit range available for secrets.
pub const DEFAULT_MODULUS: u64 = (1 << 61) - 1;

/// A (threshold, parties) Shamir secret sharing scheme over a prime field.
///
/// The dealer splits a secret into `parties` shares by evaluating a random
/// polynomial with the secret as constant term at x = 1..=parties; any
/// `threshold` shares recover the secret exactly, and fewer reveal nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShamirSecretSharing {
    parties: usize,
    threshold: usize,
    field: Modulus,
}

impl ShamirSecretSharing {
    /// Create a scheme over the default field.
    pub fn new(parties: usize, threshold: usize) -> Result<Self> {
        Self::with_modulus(parties, threshold, DEFAULT_MODULUS)
    }

    /// Create a scheme over the prime field defined by `modulus`.
    ///
    /// `parties` must be smaller than the modulus so that the x-coordinates
    /// 1..=parties are distinct nonzero field elements.
    pub fn with_modulus(parties: usize, threshold: usize, modulus: u64) -> Result<Self> {
        validate_threshold_config(parties, threshold)?;
        let field = Modulus::new(modulus)?;
        if parties as u64 >= field.modulus() {
            return Err(Error::TooManyParties { parties, modulus });
        }
        Ok(Self {
            parties,
            threshold,
            field,
        })
    }

    /// Number of parties shares are dealt to.
    pub fn parties(&self) -> usize {
        self.parties
    }

    /// Number of shares required for reconstruction.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// The field modulus all scheme arithmetic is performed under.
    pub fn modulus(&self) -> u64 {
        self.field.modulus()
    }

    /// Lagrange basis evaluated at zero:
    /// `l_i(0) = prod_{j != i} (0 - x_j) / (x_i - x_j)`.
    fn lagrange_basis_at_zero(&self, xs: &[u64], i: usize) -> Result<u64> {
        let mut numerator = 1u64;
        let mut denominator = 1u64;
        for (j, &xj) in xs.iter().enumerate() {
            if j != i {
                numerator = self.field.mul(numerator, self.field.neg(xj));
                denominator = self.field.mul(denominator, self.field.sub(xs[i], xj));
            }
        }
        // The reconstruction set excludes equal x-coordinates, so the
        // denominator is a product of nonzero factors; a division failure
        // here is a logic defect and surfaces as such.
        self.field.div(numerator, denominator).map_err(Error::from)
    }
}

impl SecretSharer for ShamirSecretSharing {
    /// Split `secret` into one share per party.
    ///
    /// A fresh polynomial of degree `threshold - 1` is built with `secret`
    /// as constant term and `threshold - 1` coefficients drawn from `rng`,
    /// evaluated at x = 1..=parties, and discarded before returning. The
    /// emitted x-coordinates are pairwise distinct and never zero.
    fn generate_shares<R: RngCore + CryptoRng>(
        &self,
        secret: u64,
        rng: &mut R,
    ) -> Result<Vec<Share>> {
        if secret >= self.field.modulus() {
            return Err(Error::SecretOutOfField(self.field.modulus()));
        }
        let polynomial = SecretPolynomial::random(secret, self.threshold, &self.field, rng)?;
        Ok((1..=self.parties as u64)
            .map(|x| Share::new(x, polynomial.evaluate(x)))
            .collect_vec())
    }

    /// Recover the secret from at least `threshold` shares by Lagrange
    /// interpolation at x = 0.
    ///
    /// Exact duplicates among `shares` are tolerated; two shares disagreeing
    /// on y at the same x fail with [`Error::DuplicateXCoordinate`]. When
    /// more than `threshold` distinct shares are supplied, the first
    /// `threshold` in supply order are interpolated; any size-`threshold`
    /// subset of an authentic share set recovers the same secret.
    ///
    /// A forged share at an x-coordinate that also appears authentically is
    /// detected by the duplicate check. A forged share at an otherwise
    /// unused x is structurally indistinguishable from an authentic one and
    /// yields a wrong secret rather than an error.
    fn reconstruct(&self, shares: &[Share]) -> Result<u64> {
        for share in shares {
            if share.x >= self.field.modulus() || share.y >= self.field.modulus() {
                return Err(Error::ShareOutOfField {
                    x: share.x,
                    modulus: self.field.modulus(),
                });
            }
        }
        let set = ReconstructionSet::new(shares, self.threshold)?;
        let points = set.interpolation_subset();
        let xs = points.iter().map(|share| share.x).collect_vec();

        let mut secret = 0u64;
        for (i, share) in points.iter().enumerate() {
            let basis = self.lagrange_basis_at_zero(&xs, i)?;
            secret = self.field.add(secret, self.field.mul(share.y, basis));
        }
        Ok(secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// RNG stub returning a fixed word, for pinning dealer coefficients.
    struct FixedRng(u64);

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.0.to_le_bytes();
            for chunk in dest.chunks_mut(8) {
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl rand::CryptoRng for FixedRng {}

    #[test]
    fn test_known_coefficient_scenario() {
        // With the single random coefficient pinned to 17, the dealer
        // polynomial is f(x) = 1234 + 17x.
        let scheme = ShamirSecretSharing::new(5, 2).unwrap();
        let shares = scheme.generate_shares(1234, &mut FixedRng(17)).unwrap();
        assert_eq!(
            shares,
            vec![
                Share::new(1, 1251),
                Share::new(2, 1268),
                Share::new(3, 1285),
                Share::new(4, 1302),
                Share::new(5, 1319),
            ]
        );

        let secret = scheme.reconstruct(&[shares[0], shares[2]]).unwrap();
        assert_eq!(secret, 1234);
    }

    #[test]
    fn test_roundtrip() {
        let scheme = ShamirSecretSharing::new(5, 3).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let shares = scheme.generate_shares(1234, &mut rng).unwrap();
        assert_eq!(shares.len(), 5);

        // Exactly threshold shares suffice.
        assert_eq!(scheme.reconstruct(&shares[..3]).unwrap(), 1234);
        // Extra authentic shares are harmless.
        assert_eq!(scheme.reconstruct(&shares).unwrap(), 1234);
        // Order does not matter.
        let reversed = shares.iter().rev().copied().collect_vec();
        assert_eq!(scheme.reconstruct(&reversed).unwrap(), 1234);
    }

    #[test]
    fn test_every_threshold_subset_agrees() {
        let scheme = ShamirSecretSharing::new(6, 3).unwrap();
        let mut rng = thread_rng();
        let shares = scheme.generate_shares(987654321, &mut rng).unwrap();

        for subset in shares.iter().copied().combinations(3) {
            assert_eq!(scheme.reconstruct(&subset).unwrap(), 987654321);
        }
    }

    #[test]
    fn test_threshold_is_necessary() {
        let scheme = ShamirSecretSharing::new(5, 2).unwrap();
        let shares = scheme.generate_shares(1234, &mut thread_rng()).unwrap();

        assert_eq!(
            scheme.reconstruct(&shares[..1]),
            Err(Error::InsufficientShares {
                provided: 1,
                required: 2
            })
        );
        assert_eq!(
            scheme.reconstruct(&[]),
            Err(Error::InsufficientShares {
                provided: 0,
                required: 2
            })
        );
    }

    #[test]
    fn test_share_coordinates_are_distinct_and_nonzero() {
        let scheme = ShamirSecretSharing::new(32, 8).unwrap();
        let shares = scheme.generate_shares(42, &mut thread_rng()).unwrap();
        assert!(shares.iter().map(|share| share.x).all_unique());
        assert!(shares.iter().all(|share| share.x != 0));
    }

    #[test]
    fn test_forged_share_at_known_x_is_detected() {
        let scheme = ShamirSecretSharing::new(5, 2).unwrap();
        let shares = scheme.generate_shares(1234, &mut thread_rng()).unwrap();

        let forged = Share::new(shares[2].x, scheme.field.add(shares[2].y, 1));
        assert_eq!(
            scheme.reconstruct(&[shares[0], shares[2], forged]),
            Err(Error::DuplicateXCoordinate { x: shares[2].x })
        );
    }

    #[test]
    fn test_forged_share_at_fresh_x_corrupts_the_result() {
        // A forged y at an x no authentic share uses cannot be told apart
        // from a real share; interpolation then yields a wrong value.
        let scheme = ShamirSecretSharing::new(5, 2).unwrap();
        let shares = scheme.generate_shares(1234, &mut FixedRng(17)).unwrap();

        let forged = Share::new(4, scheme.field.add(shares[3].y, 1));
        let recovered = scheme.reconstruct(&[shares[0], forged]).unwrap();
        assert_ne!(recovered, 1234);
    }

    #[test]
    fn test_exact_duplicates_are_tolerated() {
        let scheme = ShamirSecretSharing::new(5, 2).unwrap();
        let shares = scheme.generate_shares(1234, &mut thread_rng()).unwrap();

        let supplied = [shares[0], shares[0], shares[1]];
        assert_eq!(scheme.reconstruct(&supplied).unwrap(), 1234);

        // A duplicate does not count towards the threshold.
        assert_eq!(
            scheme.reconstruct(&[shares[0], shares[0]]),
            Err(Error::InsufficientShares {
                provided: 1,
                required: 2
            })
        );
    }

    #[test]
    fn test_field_boundary_secrets() {
        let scheme = ShamirSecretSharing::with_modulus(5, 3, 17).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for secret in [0, 16] {
            let shares = scheme.generate_shares(secret, &mut rng).unwrap();
            assert_eq!(scheme.reconstruct(&shares[..3]).unwrap(), secret);
        }

        assert_eq!(
            scheme.generate_shares(17, &mut rng),
            Err(Error::SecretOutOfField(17))
        );
    }

    #[test]
    fn test_one_of_one_scheme() {
        let scheme = ShamirSecretSharing::new(1, 1).unwrap();
        let shares = scheme.generate_shares(99, &mut thread_rng()).unwrap();
        // Degree zero: the single share carries the secret itself.
        assert_eq!(shares, vec![Share::new(1, 99)]);
        assert_eq!(scheme.reconstruct(&shares).unwrap(), 99);
    }

    #[test]
    fn test_invalid_configurations() {
        assert!(matches!(
            ShamirSecretSharing::new(5, 0),
            Err(Error::InvalidThreshold { .. })
        ));
        assert!(matches!(
            ShamirSecretSharing::new(5, 6),
            Err(Error::InvalidThreshold { .. })
        ));
        assert!(matches!(
            ShamirSecretSharing::new(0, 1),
            Err(Error::InvalidThreshold { .. })
        ));

        // The field must have enough distinct nonzero x-coordinates.
        assert_eq!(
            ShamirSecretSharing::with_modulus(17, 3, 17),
            Err(Error::TooManyParties {
                parties: 17,
                modulus: 17
            })
        );
        assert!(ShamirSecretSharing::with_modulus(16, 3, 17).is_ok());

        // Composite moduli do not define a field.
        assert!(matches!(
            ShamirSecretSharing::with_modulus(5, 3, 15),
            Err(Error::Math(sss_math::Error::InvalidModulus(_)))
        ));
    }

    #[test]
    fn test_unreduced_share_rejected() {
        let scheme = ShamirSecretSharing::with_modulus(5, 2, 17).unwrap();
        let shares = [Share::new(18, 3), Share::new(2, 5)];
        assert_eq!(
            scheme.reconstruct(&shares),
            Err(Error::ShareOutOfField { x: 18, modulus: 17 })
        );
    }
}
