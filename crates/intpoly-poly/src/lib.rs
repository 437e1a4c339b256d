//! # intpoly-poly
//!
//! Sparse univariate polynomials with `i64` coefficients.
//!
//! This crate provides:
//! - [`Polynomial`], a sparse map from exponent to non-zero coefficient
//!   with a cached degree
//! - In-place term insertion and value-returning add, multiply and
//!   derivative
//! - Checked variants of every arithmetic operation
//! - A canonical rendering, e.g. `12x^1 + 10`, that also defines equality
//!
//! ## Conventions
//!
//! - The zero polynomial renders as `0` and has degree 0.
//! - Coefficient magnitudes are always printed, so `x` renders as `1x^1`.
//! - Overflow is checked: the `checked_*` methods return
//!   [`PolyError`], the plain methods and operators panic.
//!
//! ```
//! use intpoly_poly::Polynomial;
//!
//! let p = Polynomial::from_terms([(10, 0), (2, 1), (-5, 2)])?;
//! assert_eq!(p.to_string(), "-5x^2 + 2x^1 + 10");
//! assert_eq!(p.derivative().to_string(), "-10x^1 + 2");
//! # Ok::<(), intpoly_poly::PolyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ops;
pub mod sparse;
pub mod term;

#[cfg(test)]
mod proptests;

pub use error::{PolyError, Result};
pub use sparse::Polynomial;
pub use term::{Term, VARIABLE};
