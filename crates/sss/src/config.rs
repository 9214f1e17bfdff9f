//! Configuration and validation for threshold sharing.

use crate::share::{ReconstructionSet, Share};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A validated (threshold, parties) configuration.
///
/// Callers moving shares across a boundary should transport this alongside
/// the field modulus so the receiving side can validate independently; the
/// shares themselves carry no metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdParams {
    /// Total number of parties receiving shares
    pub parties: usize,
    /// Minimum number of shares required for reconstruction
    pub threshold: usize,
}

impl ThresholdParams {
    /// Create a validated configuration.
    pub fn new(parties: usize, threshold: usize) -> Result<Self> {
        validate_threshold_config(parties, threshold)?;
        Ok(Self { parties, threshold })
    }
}

/// Validates threshold configuration parameters: `1 <= threshold <= parties`.
pub fn validate_threshold_config(parties: usize, threshold: usize) -> Result<()> {
    if threshold < 1 || threshold > parties {
        return Err(Error::InvalidThreshold { threshold, parties });
    }
    Ok(())
}

/// Validates that `shares` contains at least `threshold` pairwise-distinct
/// x-coordinates, rejecting conflicting claims for the same x.
pub fn validate_reconstruction(shares: &[Share], threshold: usize) -> Result<()> {
    ReconstructionSet::new(shares, threshold).map(|_| ())
}
