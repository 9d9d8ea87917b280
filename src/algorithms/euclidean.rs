// src/algorithms/euclidean.rs
//
// Euclidean algorithm: replace (a, b) by (b, a mod b) until b is zero.
// Each division is logged as `a = b×q + r`.

use log::debug;
use num::{BigInt, Integer, Signed, Zero};

use crate::trace::{Step, Trace};

/// GCD of two non-negative integers by repeated Euclidean division.
///
/// A zero operand short-circuits to the other operand without logging
/// any division.
pub fn euclidean_gcd(a: &BigInt, b: &BigInt) -> (BigInt, Trace) {
    debug_assert!(!a.is_negative() && !b.is_negative());

    let mut trace = Trace::new();
    if a.is_zero() {
        return (b.clone(), trace);
    }

    let mut a = a.clone();
    let mut b = b.clone();

    while !b.is_zero() {
        let (quotient, remainder) = a.div_mod_floor(&b);
        debug!("Euclidean: {} = {}×{} + {}", a, b, quotient, remainder);
        trace.push(Step::Division {
            dividend: a,
            divisor: b.clone(),
            quotient,
            remainder: remainder.clone(),
        });
        a = b;
        b = remainder;
    }

    (a, trace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn div(a: i64, b: i64, q: i64, r: i64) -> Step {
        Step::Division {
            dividend: BigInt::from(a),
            divisor: BigInt::from(b),
            quotient: BigInt::from(q),
            remainder: BigInt::from(r),
        }
    }

    #[test]
    fn test_euclidean_48_18() {
        let (gcd, trace) = euclidean_gcd(&BigInt::from(48), &BigInt::from(18));
        assert_eq!(gcd, BigInt::from(6));
        assert_eq!(
            trace.steps(),
            &[div(48, 18, 2, 12), div(18, 12, 1, 6), div(12, 6, 2, 0)]
        );
    }

    #[test]
    fn test_smaller_first_operand_takes_extra_division() {
        let (gcd, trace) = euclidean_gcd(&BigInt::from(18), &BigInt::from(48));
        assert_eq!(gcd, BigInt::from(6));
        assert_eq!(trace.steps()[0], div(18, 48, 0, 18));
        assert_eq!(trace.len(), 4);
    }

    #[test]
    fn test_zero_operands_produce_no_steps() {
        let five = BigInt::from(5);
        let zero = BigInt::zero();
        for (a, b, expected) in [(&five, &zero, 5), (&zero, &five, 5), (&zero, &zero, 0)] {
            let (gcd, trace) = euclidean_gcd(a, b);
            assert_eq!(gcd, BigInt::from(expected));
            assert!(trace.is_empty());
        }
    }
}
