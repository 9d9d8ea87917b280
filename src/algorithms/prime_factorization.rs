// src/algorithms/prime_factorization.rs
//
// GCD by factorization: factor both operands, keep each prime of the first
// operand with the smaller of its two exponents, multiply the survivors.

use log::debug;
use num::{BigInt, One, Signed, Zero};

use crate::integer_math::trial_division::factorize;
use crate::trace::{Step, Trace};

/// GCD of two non-negative integers from their prime factorizations.
///
/// Zero has no finite factorization, so a zero operand is handled here
/// and the factorizer is never called with it.
pub fn prime_factorization_gcd(a: &BigInt, b: &BigInt) -> (BigInt, Trace) {
    debug_assert!(!a.is_negative() && !b.is_negative());

    let mut trace = Trace::new();

    if a.is_zero() || b.is_zero() {
        let other = if a.is_zero() { b.clone() } else { a.clone() };
        trace.push(Step::ZeroOperand { other: other.clone() });
        return (other, trace);
    }

    let factors_a = factorize(a);
    debug!("Factorization: {} = {}", a, factors_a);
    trace.push(Step::Factorization { value: a.clone(), factors: factors_a.clone() });

    let factors_b = factorize(b);
    debug!("Factorization: {} = {}", b, factors_b);
    trace.push(Step::Factorization { value: b.clone(), factors: factors_b.clone() });

    // Only primes of `a` are scanned; a prime found only in `b` has
    // exponent zero in `a` and cannot be common.
    let common = factors_a.common_with(&factors_b);
    if common.is_empty() {
        trace.push(Step::NoCommonFactors);
        return (BigInt::one(), trace);
    }

    for (prime, exponent) in common.iter() {
        trace.push(Step::CommonFactor { prime: prime.clone(), exponent });
    }

    (common.product(), trace)
}
