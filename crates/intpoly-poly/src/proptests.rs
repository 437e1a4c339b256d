//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashMap;
    use std::hash::{Hash, Hasher};

    use proptest::prelude::*;

    use crate::error::PolyError;
    use crate::sparse::Polynomial;

    // Small coefficients keep products far from i64 overflow
    fn small_coeff() -> impl Strategy<Value = i64> {
        -100i64..100i64
    }

    // Coefficients around i64::MAX / 2 in either sign
    fn large_coeff() -> impl Strategy<Value = i64> {
        let half = i64::MAX / 2;
        prop_oneof![(half - 1000)..=(half + 1000), -(half + 1000)..=-(half - 1000)]
    }

    fn small_power() -> impl Strategy<Value = i64> {
        0i64..8i64
    }

    fn small_terms() -> impl Strategy<Value = Vec<(i64, i64)>> {
        proptest::collection::vec((small_coeff(), small_power()), 0..=6)
    }

    // Strategy for generating small sparse polynomials (degree 0-7)
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        small_terms().prop_map(|terms| Polynomial::from_terms(terms).unwrap())
    }

    fn constant_poly() -> impl Strategy<Value = Polynomial> {
        small_coeff().prop_map(Polynomial::constant)
    }

    fn hash_of(p: &Polynomial) -> u64 {
        let mut h = DefaultHasher::new();
        p.hash(&mut h);
        h.finish()
    }

    proptest! {
        // Term insertion

        #[test]
        fn insertion_accumulates(terms in small_terms()) {
            let p = Polynomial::from_terms(terms.clone()).unwrap();

            let mut expected: HashMap<i64, i64> = HashMap::new();
            for (c, power) in &terms {
                *expected.entry(*power).or_insert(0) += c;
            }

            for power in 0..8 {
                let want = expected.get(&power).copied().unwrap_or(0);
                prop_assert_eq!(p.coefficient(power), want);
            }
            prop_assert!(p.terms().all(|t| t.coefficient != 0));
        }

        #[test]
        fn degree_is_max_nonzero_power(terms in small_terms()) {
            let p = Polynomial::from_terms(terms).unwrap();
            let max = p.terms().map(|t| t.power).max().unwrap_or(0);
            prop_assert_eq!(p.degree(), max);
        }

        #[test]
        fn negative_power_rejected(p in small_poly(), c in small_coeff(), power in -1000i64..0) {
            let mut q = p.clone();
            prop_assert_eq!(q.add_term(c, power), Err(PolyError::InvalidExponent { power }));
            prop_assert_eq!(q.to_string(), p.to_string());
            prop_assert_eq!(q.degree(), p.degree());
        }

        // Ring axioms

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).to_string(), b.add(&a).to_string());
        }

        #[test]
        fn mul_commutative_near_overflow(
            a in proptest::collection::vec((-1i64..=1, 0i64..4), 1..=4),
            b in proptest::collection::vec((large_coeff(), 0i64..4), 1..=4),
        ) {
            // Intermediate sums may leave i64 range even when the product fits
            let a = Polynomial::from_terms(a).unwrap();
            let Ok(b) = Polynomial::from_terms(b) else {
                return Ok(());
            };
            prop_assert_eq!(a.checked_multiply(&b), b.checked_multiply(&a));
        }

        #[test]
        fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.multiply(&b).to_string(), b.multiply(&a).to_string());
        }

        #[test]
        fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.multiply(&b.add(&c));
            let right = a.multiply(&b).add(&a.multiply(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn add_identity(a in small_poly()) {
            let zero = Polynomial::new();
            prop_assert_eq!(a.add(&zero).to_string(), a.to_string());
            prop_assert_eq!(zero.add(&a).to_string(), a.to_string());
        }

        #[test]
        fn mul_identity_and_zero(a in small_poly()) {
            let one = Polynomial::constant(1);
            let zero = Polynomial::new();
            prop_assert_eq!(a.multiply(&one).to_string(), a.to_string());
            prop_assert_eq!(a.multiply(&zero).to_string(), "0");
        }

        #[test]
        fn additive_inverse(a in small_poly()) {
            let sum = a.add(&a.neg());
            prop_assert!(sum.is_zero());
            prop_assert_eq!(sum.degree(), 0);
        }

        // Degree properties

        #[test]
        fn mul_degree(a in small_poly(), b in small_poly()) {
            // Integer coefficients have no zero divisors
            if !a.is_zero() && !b.is_zero() {
                prop_assert_eq!(a.multiply(&b).degree(), a.degree() + b.degree());
            }
        }

        #[test]
        fn add_degree_bound(a in small_poly(), b in small_poly()) {
            prop_assert!(a.add(&b).degree() <= a.degree().max(b.degree()));
        }

        // Derivative

        #[test]
        fn derivative_of_constant_is_zero(c in constant_poly()) {
            prop_assert_eq!(c.derivative().to_string(), "0");
        }

        #[test]
        fn derivative_is_linear(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).derivative(), a.derivative().add(&b.derivative()));
        }

        #[test]
        fn product_rule(a in small_poly(), b in small_poly()) {
            // (ab)' = a'b + ab'
            let left = a.multiply(&b).derivative();
            let right = a.derivative().multiply(&b).add(&a.multiply(&b.derivative()));
            prop_assert_eq!(left, right);
        }

        // Evaluation

        #[test]
        fn eval_add(a in small_poly(), b in small_poly(), x in -3i32..=3) {
            let x = f64::from(x);
            // Small integer inputs keep every partial sum exact
            prop_assert_eq!(a.add(&b).evaluate(x), a.evaluate(x) + b.evaluate(x));
        }

        // Equality and hashing

        #[test]
        fn eq_matches_rendering(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a == b, a.to_string() == b.to_string());
        }

        #[test]
        fn hash_ignores_insertion_order(terms in small_terms()) {
            let forward = Polynomial::from_terms(terms.clone()).unwrap();
            let backward = Polynomial::from_terms(terms.into_iter().rev()).unwrap();
            prop_assert_eq!(&forward, &backward);
            prop_assert_eq!(hash_of(&forward), hash_of(&backward));
        }
    }
}
