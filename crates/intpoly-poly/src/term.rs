//! Single terms of a polynomial.

use std::fmt;

/// The symbol used when rendering polynomials.
pub const VARIABLE: char = 'x';

/// A term `coefficient * x^power` of a polynomial.
///
/// Terms are read-only views produced by [`crate::Polynomial::terms`];
/// the coefficient of a yielded term is never zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Term {
    /// The integer coefficient.
    pub coefficient: i64,
    /// The exponent of the variable.
    pub power: u32,
}

impl Term {
    /// Creates a new term.
    #[must_use]
    pub const fn new(coefficient: i64, power: u32) -> Self {
        Self { coefficient, power }
    }

    /// Returns true if the coefficient is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.coefficient < 0
    }

    /// Evaluates the term at `x` in floating point, as
    /// `coefficient * x.powf(power)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficient as f64 * x.powf(f64::from(self.power))
    }

    /// Writes the term without its sign, e.g. `3x^2` or `7`.
    pub(crate) fn fmt_magnitude(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coefficient.unsigned_abs())?;
        if self.power != 0 {
            write!(f, "{VARIABLE}^{}", self.power)?;
        }
        Ok(())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        self.fmt_magnitude(f)
    }
}
