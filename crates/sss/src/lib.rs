#![crate_name = "sss"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Shamir secret sharing over a prime field.
//!
//! A secret field element is split into `n` shares such that any `threshold`
//! of them reconstruct it exactly by Lagrange interpolation, while fewer
//! reveal nothing about it. All arithmetic is performed in `Z_p` for a prime
//! `p`, so reconstruction is exact and share values carry no magnitude
//! information.
//!
//! # Example
//!
//! ```rust
//! use rand::thread_rng;
//! use sss::{SecretSharer, ShamirSecretSharing};
//!
//! let scheme = ShamirSecretSharing::new(5, 3)?;
//! let shares = scheme.generate_shares(1234, &mut thread_rng())?;
//!
//! // Any three of the five shares recover the secret.
//! assert_eq!(scheme.reconstruct(&shares[1..4])?, 1234);
//! # Ok::<(), sss::Error>(())
//! ```

/// Configuration and validation for threshold sharing
pub mod config;
/// Error types for secret sharing operations
mod errors;
/// The dealer polynomial
mod polynomial;
/// Share generation and reconstruction
mod shamir;
/// Share data model
pub mod share;
/// Traits for secret sharing operations
mod traits;

pub use config::ThresholdParams;
pub use errors::{Error, Result};
pub use shamir::{ShamirSecretSharing, DEFAULT_MODULUS};
pub use share::{ReconstructionSet, Share};
pub use traits::SecretSharer;
