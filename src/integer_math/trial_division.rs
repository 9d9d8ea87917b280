// src/integer_math/trial_division.rs
//
// Trial division: divides out 2, then every odd candidate while
// candidate² <= remaining. Whatever is left above 1 is prime.
// Complexity: O(sqrt(n)) in the worst case (n prime).

use log::trace;
use num::{BigInt, Integer, One, Signed, ToPrimitive, Zero};

use crate::integer_math::factor_map::FactorMap;

/// Factors `|n|` into primes. The sign of `n` is ignored.
///
/// `n` must be nonzero; zero has no finite factorization and callers are
/// expected to special-case it. `factorize(0)` returns the empty map
/// rather than looping.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use gcd_trace::integer_math::trial_division::factorize;
///
/// let factors = factorize(&BigInt::from(360));
/// assert_eq!(factors.to_string(), "2^3 × 3^2 × 5");
/// ```
pub fn factorize(n: &BigInt) -> FactorMap {
    let mut factors = FactorMap::new();
    let mut remaining = n.abs();

    if remaining.is_zero() {
        return factors;
    }

    let two = BigInt::from(2);
    while remaining.is_even() {
        factors.add(&two);
        remaining >>= 1usize;
    }

    // Fast path while the remaining cofactor fits a machine word.
    if let Some(mut rest) = remaining.to_u64() {
        let mut divisor = 3u64;
        while divisor.checked_mul(divisor).map_or(false, |sq| sq <= rest) {
            while rest % divisor == 0 {
                trace!("Trial division: {} divides {}", divisor, rest);
                factors.add(&BigInt::from(divisor));
                rest /= divisor;
            }
            divisor += 2;
        }
        if rest > 1 {
            factors.add(&BigInt::from(rest));
        }
        return factors;
    }

    let mut divisor = BigInt::from(3);
    while &divisor * &divisor <= remaining {
        while remaining.is_multiple_of(&divisor) {
            trace!("Trial division: {} divides {}", divisor, remaining);
            factors.add(&divisor);
            remaining /= &divisor;
        }
        divisor += &two;
    }

    if remaining > BigInt::one() {
        factors.add(&remaining);
    }

    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(factors: &FactorMap) -> Vec<(u64, u32)> {
        factors
            .iter()
            .map(|(p, e)| (p.to_u64().unwrap(), e))
            .collect()
    }

    #[test]
    fn test_factorize_small_composite() {
        let factors = factorize(&BigInt::from(60));
        assert_eq!(entries(&factors), vec![(2, 2), (3, 1), (5, 1)]);
    }

    #[test]
    fn test_factorize_prime() {
        assert_eq!(entries(&factorize(&BigInt::from(97))), vec![(97, 1)]);
    }

    #[test]
    fn test_factorize_power_of_two() {
        assert_eq!(entries(&factorize(&BigInt::from(64))), vec![(2, 6)]);
    }

    #[test]
    fn test_factorize_one_is_empty() {
        assert!(factorize(&BigInt::one()).is_empty());
    }

    #[test]
    fn test_factorize_ignores_sign() {
        assert_eq!(factorize(&BigInt::from(-18)), factorize(&BigInt::from(18)));
    }

    #[test]
    fn test_factorize_square_of_prime() {
        assert_eq!(entries(&factorize(&BigInt::from(49))), vec![(7, 2)]);
    }

    #[test]
    fn test_factorize_beyond_u64() {
        // 2^70 * 3^50 * 1000003
        let large_prime = BigInt::from(1_000_003);
        let n = (BigInt::one() << 70usize) * num::pow(BigInt::from(3), 50) * &large_prime;
        let factors = factorize(&n);
        assert_eq!(factors.exponent(&BigInt::from(2)), 70);
        assert_eq!(factors.exponent(&BigInt::from(3)), 50);
        assert_eq!(factors.exponent(&large_prime), 1);
        assert_eq!(factors.product(), n);
    }

    #[test]
    fn test_product_reconstructs_input() {
        for n in 1..500i64 {
            assert_eq!(factorize(&BigInt::from(n)).product(), BigInt::from(n), "n = {}", n);
        }
    }
}
