//! Error types for the math crate.

use thiserror::Error;

/// The errors that can arise in sss-math.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A modulus rejected by [`crate::zp::Modulus::new`].
    #[error("invalid modulus: {0}")]
    InvalidModulus(String),

    /// A division whose divisor reduces to zero. Reaching this from a caller
    /// that already validated its inputs indicates a logic defect, not bad
    /// data; it must be surfaced, never swallowed.
    #[error("division by zero modulo {0}")]
    DivisionByZero(u64),
}

/// The Result type for the math crate.
pub type Result<T> = std::result::Result<T, Error>;
