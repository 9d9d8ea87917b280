// tests/algorithm_property_tests.rs
//
// Algebraic properties that every pairwise algorithm and the fold must hold.

use gcd_trace::{reduce, GcdAlgorithm, NumericValue};
use num::{BigInt, Integer};

fn big(n: u64) -> BigInt {
    BigInt::from(n)
}

fn values(ns: &[u64]) -> Vec<NumericValue> {
    ns.iter().map(|&n| NumericValue::from(big(n))).collect()
}

// Factorization is trial division, so keep operands where sqrt(n) is cheap.
const SMALL: u64 = 1_000_000;

#[cfg(test)]
mod algorithm_property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// All algorithms agree with each other and with num's gcd.
        #[test]
        fn algorithms_agree(a in 0..SMALL, b in 0..SMALL) {
            let expected = big(a).gcd(&big(b));
            for algorithm in GcdAlgorithm::ALL {
                let (gcd, _) = algorithm.gcd_pair(&big(a), &big(b));
                prop_assert_eq!(&gcd, &expected, "{} on ({}, {})", algorithm, a, b);
            }
        }

        /// gcd(a, 0) = gcd(0, a) = a
        #[test]
        fn zero_is_identity(a in 0..SMALL) {
            for algorithm in GcdAlgorithm::ALL {
                prop_assert_eq!(algorithm.gcd_pair(&big(a), &big(0)).0, big(a));
                prop_assert_eq!(algorithm.gcd_pair(&big(0), &big(a)).0, big(a));
            }
        }

        /// gcd(a, b) = gcd(b, a)
        #[test]
        fn commutative(a in 0..SMALL, b in 0..SMALL) {
            for algorithm in GcdAlgorithm::ALL {
                prop_assert_eq!(
                    algorithm.gcd_pair(&big(a), &big(b)).0,
                    algorithm.gcd_pair(&big(b), &big(a)).0
                );
            }
        }

        /// reduce([a, b, c]) = reduce([gcd(a, b), c])
        #[test]
        fn fold_is_associative(a in 0..SMALL, b in 0..SMALL, c in 0..SMALL) {
            for algorithm in GcdAlgorithm::ALL {
                let whole = reduce(&values(&[a, b, c]), algorithm).unwrap().gcd;
                let ab = reduce(&values(&[a, b]), algorithm).unwrap().gcd;
                let staged_values = [NumericValue::from(ab), NumericValue::from(big(c))];
                let staged = reduce(&staged_values, algorithm).unwrap().gcd;
                prop_assert_eq!(whole, staged);
            }
        }

        /// reduce([a, a]) = a
        #[test]
        fn idempotent(a in 0..SMALL) {
            for algorithm in GcdAlgorithm::ALL {
                prop_assert_eq!(reduce(&values(&[a, a]), algorithm).unwrap().gcd, big(a));
            }
        }

        /// Large operands for the algorithms that do not factor.
        #[test]
        fn euclidean_and_stein_agree_on_u64(a in any::<u64>(), b in any::<u64>()) {
            let expected = big(a).gcd(&big(b));
            prop_assert_eq!(GcdAlgorithm::Euclidean.gcd_pair(&big(a), &big(b)).0, expected.clone());
            prop_assert_eq!(GcdAlgorithm::Stein.gcd_pair(&big(a), &big(b)).0, expected);
        }

        /// The result divides every input.
        #[test]
        fn result_divides_inputs(ns in prop::collection::vec(1..SMALL, 2..6)) {
            for algorithm in GcdAlgorithm::ALL {
                let gcd = reduce(&values(&ns), algorithm).unwrap().gcd;
                for &n in &ns {
                    prop_assert!(big(n).is_multiple_of(&gcd));
                }
            }
        }
    }
}
