//! Share data model: the immutable value objects handed to parties, and the
//! validated set of shares admitted to a reconstruction attempt.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One share of a split secret: a point `(x, f(x))` on the dealer polynomial.
///
/// Shares are independent, immutable values; they may be freely copied and
/// read concurrently. The x-coordinate is always nonzero, x = 0 being the
/// evaluation point of the secret itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    /// The x-coordinate the polynomial was evaluated at
    pub x: u64,
    /// The evaluation `f(x)` in the field
    pub y: u64,
}

impl Share {
    /// Create a share from its coordinates.
    pub fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    /// Serialize to the wire form: x then y, little endian.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.x.to_le_bytes());
        bytes[8..].copy_from_slice(&self.y.to_le_bytes());
        bytes
    }

    /// Deserialize from the wire form produced by [`Share::to_bytes`].
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 16 {
            return Err(Error::Serialization(format!(
                "invalid share encoding: expected 16 bytes, got {}",
                bytes.len()
            )));
        }
        let x = u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]);
        let y = u64::from_le_bytes([
            bytes[8], bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
        ]);
        Ok(Self { x, y })
    }
}

/// The shares admitted to one reconstruction attempt.
///
/// Construction validates the supplied shares: exact repeats are dropped as
/// redundant, two shares disagreeing on y at the same x are rejected as a
/// tamper signal, x = 0 never enters interpolation, and at least `threshold`
/// distinct shares must remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructionSet {
    shares: Vec<Share>,
    threshold: usize,
}

impl ReconstructionSet {
    /// Validate `shares` against `threshold` and build the set.
    pub fn new(shares: &[Share], threshold: usize) -> Result<Self> {
        let mut seen: HashMap<u64, u64> = HashMap::with_capacity(shares.len());
        let mut distinct = Vec::with_capacity(shares.len());
        for share in shares {
            if share.x == 0 {
                return Err(Error::ReservedXCoordinate);
            }
            match seen.get(&share.x) {
                Some(&y) if y == share.y => {} // redundant copy of a known share
                Some(_) => return Err(Error::DuplicateXCoordinate { x: share.x }),
                None => {
                    seen.insert(share.x, share.y);
                    distinct.push(*share);
                }
            }
        }
        if distinct.len() < threshold {
            return Err(Error::InsufficientShares {
                provided: distinct.len(),
                required: threshold,
            });
        }
        Ok(Self {
            shares: distinct,
            threshold,
        })
    }

    /// All distinct shares, in supply order.
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// The first `threshold` distinct shares, the subset interpolated during
    /// reconstruction. Any other size-threshold subset of a consistent set
    /// would recover the same secret.
    pub fn interpolation_subset(&self) -> &[Share] {
        &self.shares[..self.threshold]
    }
}
