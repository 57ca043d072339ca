//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::div::{contract, poly_div_rem, poly_rem};
    use crate::algorithms::gcd::{make_monic, poly_gcd};
    use crate::algorithms::squarefree::separate_roots;
    use crate::dense::{Endianness, Poly};
    use horner_rings::Q;

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-100i64..100i64).prop_map(Q::from_integer)
    }

    // Strategy for generating small polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = Poly<Q>> {
        proptest::collection::vec(small_coeff(), 0..=5)
            .prop_map(|coeffs| Poly::new(Endianness::Little, coeffs))
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = Poly<Q>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        // Canonical form

        #[test]
        fn canonical_leading_coeff(a in small_poly()) {
            if let Some(lead) = a.leading_coeff() {
                prop_assert!(!horner_rings::Ring::is_zero(lead));
            } else {
                prop_assert!(a.is_zero());
                prop_assert_eq!(a.degree(), None);
            }
        }

        #[test]
        fn endianness_round_trip(coeffs in proptest::collection::vec(small_coeff(), 0..=6)) {
            let le = Poly::new(Endianness::Little, coeffs.clone());
            let mut reversed = coeffs;
            reversed.reverse();
            let be = Poly::new(Endianness::Big, reversed);
            prop_assert_eq!(le, be);
        }

        // Polynomial ring axioms

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn add_identity_and_inverse(a in small_poly()) {
            prop_assert_eq!(a.add(&Poly::zero()), a.clone());
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn mul_identity_and_zero(a in small_poly()) {
            prop_assert_eq!(a.mul(&Poly::one()), a.clone());
            prop_assert!(a.mul(&Poly::zero()).is_zero());
        }

        #[test]
        fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        // Degree bookkeeping

        #[test]
        fn mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // Q has no zero divisors: deg(a·b) = deg(a) + deg(b)
            let product = a.mul(&b);
            prop_assert_eq!(
                product.degree(),
                Some(a.degree().unwrap() + b.degree().unwrap())
            );
        }

        #[test]
        fn add_degree_bound(a in nonzero_poly(), b in nonzero_poly()) {
            let sum = a.add(&b);
            if let Some(d) = sum.degree() {
                prop_assert!(d <= a.degree().unwrap().max(b.degree().unwrap()));
            }
        }

        // Evaluation homomorphism

        #[test]
        fn eval_add(a in small_poly(), b in small_poly(), x in small_coeff()) {
            let sum = a.add(&b);
            prop_assert_eq!(sum.eval(&x), a.eval(&x) + b.eval(&x));
        }

        #[test]
        fn eval_mul(a in small_poly(), b in small_poly(), x in small_coeff()) {
            let product = a.mul(&b);
            prop_assert_eq!(product.eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn eval_compose(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert_eq!(a.compose(&b).eval(&x), a.eval(&b.eval(&x)));
        }

        #[test]
        fn pow_matches_repeated_mul(a in small_poly(), n in 0i64..5) {
            let mut expected = Poly::one();
            for _ in 0..n {
                expected = expected.mul(&a);
            }
            prop_assert_eq!(a.pow(n).unwrap(), expected);
        }

        // Derivative consistency

        #[test]
        fn eval_deriv_consistent(a in small_poly(), x in small_coeff()) {
            let (value, deriv) = a.eval_deriv(&x);
            prop_assert_eq!(value, a.eval(&x));
            prop_assert_eq!(deriv, a.derivative().eval(&x));
        }

        #[test]
        fn eval_derivs_consistent(a in small_poly(), x in small_coeff()) {
            let values = a.eval_derivs(&x);
            let mut d = a.clone();
            for value in values {
                prop_assert_eq!(value, d.eval(&x));
                d = d.derivative();
            }
            prop_assert!(d.is_zero());
        }

        #[test]
        fn integral_undoes_derivative(a in small_poly()) {
            prop_assert_eq!(a.integral().derivative(), a);
        }

        // Division law

        #[test]
        fn division_law(a in small_poly(), b in nonzero_poly()) {
            let (q, r) = poly_div_rem(&a, &b).unwrap();
            prop_assert_eq!(q.mul(&b).add(&r), a);
            if let Some(dr) = r.degree() {
                prop_assert!(dr < b.degree().unwrap());
            }
        }

        #[test]
        fn contraction_identity(a in small_poly(), t in small_coeff()) {
            let (q, r) = contract(&a, &t);
            // q·(x - t) + r == a
            let linear = Poly::new(Endianness::Little, vec![-t.clone(), Q::from_integer(1)]);
            prop_assert_eq!(q.mul(&linear).add(&Poly::constant(r.clone())), a.clone());
            prop_assert_eq!(r, a.eval(&t));
        }

        // GCD divisibility

        #[test]
        fn gcd_divides_both(a in nonzero_poly(), b in nonzero_poly()) {
            let g = poly_gcd(&a, &b).unwrap();
            prop_assert!(poly_rem(&a, &g).unwrap().is_zero());
            prop_assert!(poly_rem(&b, &g).unwrap().is_zero());
        }

        // Squarefree reconstruction

        #[test]
        fn separate_roots_reconstructs(a in nonzero_poly(), b in nonzero_poly()) {
            // force repeated structure: p = a²·b
            let p = a.mul(&a).mul(&b);
            let factors = separate_roots(&p).unwrap();
            let product = factors.iter().fold(Poly::one(), |acc, f| acc.mul(f));
            prop_assert_eq!(make_monic(&product), make_monic(&p));
        }
    }
}
