// src/algorithms/stein.rs
//
// Stein's binary GCD: strip common factors of two, then alternate halving
// and subtraction on odd values. No division is used.

use log::debug;
use num::{BigInt, Integer, Signed, Zero};

use crate::trace::{Step, Trace};

/// Binary GCD of two non-negative integers.
///
/// Phases, all logged:
/// 1. shift both right while both are even, counting `shift`;
/// 2. shift `a` right until it is odd;
/// 3. loop: make `b` odd, swap so `a <= b`, set `b := b - a`, stop at zero;
/// 4. the surviving `a` shifted left by `shift` is the GCD.
pub fn stein_gcd(a: &BigInt, b: &BigInt) -> (BigInt, Trace) {
    debug_assert!(!a.is_negative() && !b.is_negative());

    let mut trace = Trace::new();
    if a.is_zero() {
        return (b.clone(), trace);
    }
    if b.is_zero() {
        return (a.clone(), trace);
    }

    let mut a = a.clone();
    let mut b = b.clone();
    let mut shift = 0usize;

    while a.is_even() && b.is_even() {
        a >>= 1usize;
        b >>= 1usize;
        shift += 1;
        trace.push(Step::JointShift { a: a.clone(), b: b.clone() });
    }

    while a.is_even() {
        a >>= 1usize;
        trace.push(Step::ShiftA { a: a.clone() });
    }

    // `a` stays odd from here on; `b` is nonzero at the top of every pass.
    loop {
        while b.is_even() {
            b >>= 1usize;
            trace.push(Step::ShiftB { b: b.clone() });
        }

        if a > b {
            std::mem::swap(&mut a, &mut b);
            trace.push(Step::Swap { a: a.clone(), b: b.clone() });
        }

        b -= &a;
        trace.push(Step::Subtract { a: a.clone(), difference: b.clone() });

        if b.is_zero() {
            break;
        }
    }

    let result = &a << shift;
    debug!("Stein: {} << {} = {}", a, shift, result);
    trace.push(Step::Restore { value: a, shift, result: result.clone() });

    (result, trace)
}
