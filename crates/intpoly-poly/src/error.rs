//! Errors raised by polynomial construction and checked arithmetic.

use thiserror::Error;

/// Errors that can occur when building or combining polynomials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A term was inserted with a negative exponent.
    #[error("exponent must be non-negative, got {power}")]
    InvalidExponent {
        /// The rejected exponent.
        power: i64,
    },

    /// An exponent does not fit in the stored exponent width.
    #[error("exponent {power} exceeds the maximum of {max}", max = u32::MAX)]
    ExponentOverflow {
        /// The exponent that could not be represented.
        power: i64,
    },

    /// Coefficient arithmetic overflowed `i64`.
    #[error("coefficient overflow at x^{power}")]
    CoefficientOverflow {
        /// The exponent of the term whose coefficient overflowed.
        power: u32,
    },
}

/// Result alias for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;
