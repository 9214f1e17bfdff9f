//! Traits for secret sharing operations.

use crate::share::Share;
use crate::Result;
use rand::{CryptoRng, RngCore};

/// The two operations a threshold secret sharing scheme exposes to its
/// collaborators: dealing shares out and putting them back together.
pub trait SecretSharer {
    /// Split a secret into shares for distribution to the parties.
    ///
    /// Randomness is injected by the caller; concurrent generations must use
    /// disjoint or externally synchronized generators.
    fn generate_shares<R: RngCore + CryptoRng>(
        &self,
        secret: u64,
        rng: &mut R,
    ) -> Result<Vec<Share>>;

    /// Recover the secret from at least threshold-many shares.
    fn reconstruct(&self, shares: &[Share]) -> Result<u64>;
}
