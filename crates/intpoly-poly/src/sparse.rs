//! Sparse univariate polynomials with integer coefficients.
//!
//! Only non-zero terms are stored, keyed by exponent. The degree is cached
//! and kept in sync by the single mutator, [`Polynomial::add_term`].

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::{debug, trace};

use crate::error::{PolyError, Result};
use crate::term::Term;

/// A sparse univariate polynomial over the integers.
///
/// The zero polynomial has no stored terms and, by convention, degree 0.
#[derive(Clone, Debug, Default)]
pub struct Polynomial {
    /// Non-zero coefficients keyed by exponent.
    terms: BTreeMap<u32, i64>,
    /// Largest key of `terms`, or 0 when empty.
    degree: u32,
}

impl Polynomial {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: i64) -> Self {
        let mut poly = Self::new();
        if c != 0 {
            poly.terms.insert(0, c);
        }
        poly
    }

    /// Creates the monomial `c * x^power`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidExponent`] if `power` is negative and
    /// [`PolyError::ExponentOverflow`] if it does not fit in a `u32`.
    pub fn monomial(c: i64, power: i64) -> Result<Self> {
        let mut poly = Self::new();
        poly.add_term(c, power)?;
        Ok(poly)
    }

    /// Creates a polynomial from `(coefficient, power)` pairs.
    ///
    /// Pairs sharing a power are accumulated exactly as repeated calls to
    /// [`Polynomial::add_term`] would.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Polynomial::add_term`].
    pub fn from_terms<I>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut poly = Self::new();
        for (coefficient, power) in terms {
            poly.add_term(coefficient, power)?;
        }
        Ok(poly)
    }

    /// Adds `coefficient * x^power` to this polynomial in place.
    ///
    /// A zero coefficient never materializes a term, and a term whose
    /// accumulated coefficient reaches zero is removed.
    ///
    /// # Errors
    ///
    /// - [`PolyError::InvalidExponent`] if `power` is negative.
    /// - [`PolyError::ExponentOverflow`] if `power` exceeds `u32::MAX`.
    /// - [`PolyError::CoefficientOverflow`] if the accumulated coefficient
    ///   does not fit in an `i64`.
    ///
    /// On error the polynomial is left unchanged.
    pub fn add_term(&mut self, coefficient: i64, power: i64) -> Result<()> {
        let result = to_exponent(power).and_then(|p| self.insert(coefficient, p));
        if let Err(err) = &result {
            debug!(power, coefficient, %err, "rejected term insertion");
        }
        result
    }

    /// Returns the coefficient of `x^power`, or 0 if there is no such term.
    #[must_use]
    pub fn coefficient(&self, power: i64) -> i64 {
        u32::try_from(power).map_or(0, |p| self.coeff_at(p))
    }

    /// Returns the degree. The zero polynomial has degree 0.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Returns true if this is the zero polynomial.
    ///
    /// Same as [`Polynomial::is_empty`]: the zero polynomial stores no terms.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of non-zero terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    ///
    /// Pairs with [`Polynomial::len`]; see [`Polynomial::is_zero`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over the non-zero terms, highest power first.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = Term> + ExactSizeIterator + '_ {
        self.terms
            .iter()
            .rev()
            .map(|(&power, &coefficient)| Term::new(coefficient, power))
    }

    /// Returns the term of highest power, if any.
    #[must_use]
    pub fn leading_term(&self) -> Option<Term> {
        self.terms().next()
    }

    /// Evaluates the polynomial at `x` in floating point.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms().map(|t| t.evaluate(x)).sum()
    }

    /// Adds two polynomials.
    ///
    /// # Panics
    ///
    /// Panics if a coefficient overflows; see [`Polynomial::checked_add`].
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.checked_add(other)
            .unwrap_or_else(|err| panic!("polynomial addition failed: {err}"))
    }

    /// Adds two polynomials, reporting coefficient overflow.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CoefficientOverflow`] if a summed coefficient
    /// does not fit in an `i64`.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let mut sum = self.clone();
        for term in other.terms() {
            sum.insert(term.coefficient, term.power)?;
        }
        Ok(sum)
    }

    /// Negates a polynomial.
    ///
    /// # Panics
    ///
    /// Panics if a coefficient is `i64::MIN`.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.checked_neg()
            .unwrap_or_else(|err| panic!("polynomial negation failed: {err}"))
    }

    /// Negates a polynomial, reporting coefficient overflow.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CoefficientOverflow`] if a coefficient is
    /// `i64::MIN`.
    pub fn checked_neg(&self) -> Result<Self> {
        let terms = self
            .terms
            .iter()
            .map(|(&power, &c)| {
                c.checked_neg()
                    .map(|n| (power, n))
                    .ok_or(PolyError::CoefficientOverflow { power })
            })
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(Self {
            terms,
            degree: self.degree,
        })
    }

    /// Subtracts two polynomials.
    ///
    /// # Panics
    ///
    /// Panics if a coefficient overflows; see [`Polynomial::checked_sub`].
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.checked_sub(other)
            .unwrap_or_else(|err| panic!("polynomial subtraction failed: {err}"))
    }

    /// Subtracts two polynomials, reporting coefficient overflow.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CoefficientOverflow`] if `other` cannot be
    /// negated or a difference does not fit in an `i64`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.checked_add(&other.checked_neg()?)
    }

    /// Multiplies two polynomials by full distribution.
    ///
    /// # Panics
    ///
    /// Panics on coefficient or exponent overflow; see
    /// [`Polynomial::checked_multiply`].
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        self.checked_multiply(other)
            .unwrap_or_else(|err| panic!("polynomial multiplication failed: {err}"))
    }

    /// Multiplies two polynomials, reporting overflow.
    ///
    /// # Errors
    ///
    /// - [`PolyError::ExponentOverflow`] if a product exponent exceeds
    ///   `u32::MAX`.
    /// - [`PolyError::CoefficientOverflow`] if a coefficient of the product
    ///   does not fit in an `i64`.
    ///
    /// Partial products are accumulated in `i128`, so only the final
    /// coefficient at each power is range-checked and the result does not
    /// depend on operand order.
    pub fn checked_multiply(&self, other: &Self) -> Result<Self> {
        let mut sums: BTreeMap<u32, i128> = BTreeMap::new();

        for rhs in other.terms() {
            for (&power, &coefficient) in &self.terms {
                let p = power
                    .checked_add(rhs.power)
                    .ok_or(PolyError::ExponentOverflow {
                        power: i64::from(power) + i64::from(rhs.power),
                    })?;
                let partial = i128::from(coefficient) * i128::from(rhs.coefficient);
                let sum = sums.entry(p).or_insert(0);
                *sum = sum
                    .checked_add(partial)
                    .ok_or(PolyError::CoefficientOverflow { power: p })?;
            }
        }

        let mut product = Self::new();
        for (power, sum) in sums.into_iter().rev() {
            let c = i64::try_from(sum).map_err(|_| PolyError::CoefficientOverflow { power })?;
            product.insert(c, power)?;
        }

        Ok(product)
    }

    /// Computes the formal derivative.
    ///
    /// # Panics
    ///
    /// Panics if a coefficient overflows; see
    /// [`Polynomial::checked_derivative`].
    #[must_use]
    pub fn derivative(&self) -> Self {
        self.checked_derivative()
            .unwrap_or_else(|err| panic!("polynomial differentiation failed: {err}"))
    }

    /// Computes the formal derivative, reporting coefficient overflow.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CoefficientOverflow`] if `coefficient * power`
    /// does not fit in an `i64`.
    pub fn checked_derivative(&self) -> Result<Self> {
        let mut result = Self::new();

        // The constant term vanishes.
        for (&power, &coefficient) in self.terms.range(1..) {
            let p = power - 1;
            let c = coefficient
                .checked_mul(i64::from(power))
                .ok_or(PolyError::CoefficientOverflow { power: p })?;
            result.insert(c, p)?;
        }

        Ok(result)
    }

    /// Returns the stored coefficient of `x^power`, or 0.
    fn coeff_at(&self, power: u32) -> i64 {
        self.terms.get(&power).copied().unwrap_or(0)
    }

    /// Merges `coefficient` into the term at `power`, keeping the
    /// no-zero-terms and degree invariants.
    fn insert(&mut self, coefficient: i64, power: u32) -> Result<()> {
        if coefficient == 0 {
            return Ok(());
        }

        let merged = self
            .coeff_at(power)
            .checked_add(coefficient)
            .ok_or(PolyError::CoefficientOverflow { power })?;

        if merged == 0 {
            self.terms.remove(&power);
            if power == self.degree {
                let old = self.degree;
                self.degree = self.terms.keys().next_back().copied().unwrap_or(0);
                trace!(old, new = self.degree, "leading term cancelled");
            }
        } else {
            self.terms.insert(power, merged);
            if power > self.degree {
                self.degree = power;
            }
        }

        Ok(())
    }
}

/// Validates a caller-supplied exponent.
fn to_exponent(power: i64) -> Result<u32> {
    if power < 0 {
        return Err(PolyError::InvalidExponent { power });
    }
    u32::try_from(power).map_err(|_| PolyError::ExponentOverflow { power })
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        // The degree is derived from the terms.
        self.terms == other.terms
    }
}

impl Eq for Polynomial {}

impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.terms.hash(state);
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut terms = self.terms();
        if let Some(lead) = terms.next() {
            write!(f, "{lead}")?;
        }
        for term in terms {
            f.write_str(if term.is_negative() { " - " } else { " + " })?;
            term.fmt_magnitude(f)?;
        }
        Ok(())
    }
}
