//! # intpoly
//!
//! Univariate polynomial algebra over the integers.
//!
//! ## Quick Start
//!
//! ```rust
//! use intpoly::prelude::*;
//!
//! let mut p = Polynomial::new();
//! p.add_term(5, 2)?;
//! p.add_term(4, 1)?;
//! p.add_term(-2, 0)?;
//!
//! let q = Polynomial::from_terms([(4, 2), (4, 1)])?;
//! assert_eq!(p.multiply(&q).to_string(), "20x^4 + 36x^3 + 8x^2 - 8x^1");
//! assert_eq!(p.evaluate(1.0), 7.0);
//! # Ok::<(), PolyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use intpoly_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use intpoly_poly::{PolyError, Polynomial, Term};
}
