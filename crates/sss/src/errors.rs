//! Error types for secret sharing operations.

use thiserror::Error;

/// The errors that can arise when splitting or reconstructing a secret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The (threshold, parties) pair does not describe a valid scheme.
    #[error("invalid threshold: need 1 <= threshold <= parties, got {threshold} of {parties}")]
    InvalidThreshold {
        /// Number of shares required for reconstruction
        threshold: usize,
        /// Total number of parties
        parties: usize,
    },

    /// Fewer distinct shares than the threshold were supplied.
    #[error("insufficient shares: {provided} distinct shares provided, {required} required")]
    InsufficientShares {
        /// Number of distinct shares supplied
        provided: usize,
        /// The reconstruction threshold
        required: usize,
    },

    /// Two shares claim the same x-coordinate with different values. This is
    /// a tamper or corruption signal and is never resolved by picking one.
    #[error("conflicting shares at x = {x}")]
    DuplicateXCoordinate {
        /// The contested x-coordinate
        x: u64,
    },

    /// A polynomial of fewer than one coefficient was requested.
    #[error("invalid polynomial degree: threshold {0} must be at least 1")]
    InvalidDegree(usize),

    /// The secret is not a reduced element of the field.
    #[error("secret is not an element of the field with modulus {0}")]
    SecretOutOfField(u64),

    /// A supplied share has coordinates outside the field.
    #[error("share at x = {x} is not over the field with modulus {modulus}")]
    ShareOutOfField {
        /// The x-coordinate of the offending share
        x: u64,
        /// The scheme's field modulus
        modulus: u64,
    },

    /// More parties than the field has distinct nonzero x-coordinates.
    #[error("party count {parties} must be smaller than the field modulus {modulus}")]
    TooManyParties {
        /// Requested number of parties
        parties: usize,
        /// The scheme's field modulus
        modulus: u64,
    },

    /// A share claimed x = 0, the evaluation point reserved for the secret.
    #[error("x = 0 is reserved for the secret and cannot appear in a share")]
    ReservedXCoordinate,

    /// A share could not be decoded from its byte representation.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// An error surfaced by the underlying field arithmetic.
    #[error("{0}")]
    Math(#[from] sss_math::Error),
}

/// The Result type for secret sharing operations.
pub type Result<T> = std::result::Result<T, Error>;
