// src/integer_math/factor_map.rs

use num::{BigInt, One, Zero};
use std::collections::BTreeMap;
use std::fmt;

/// Prime → exponent map. Keys are ordered, exponents are always positive,
/// and the empty map stands for the magnitude 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FactorMap(BTreeMap<BigInt, u32>);

impl FactorMap {
    pub fn new() -> Self {
        FactorMap(BTreeMap::new())
    }

    /// Records one more occurrence of `prime`.
    pub fn add(&mut self, prime: &BigInt) {
        self.add_power(prime, 1);
    }

    /// Adds `exponent` occurrences of `prime`; a zero exponent is a no-op so
    /// the map never stores empty entries.
    pub fn add_power(&mut self, prime: &BigInt, exponent: u32) {
        if exponent == 0 {
            return;
        }
        *self.0.entry(prime.clone()).or_insert(0) += exponent;
    }

    /// Exponent of `prime`, treating absence as zero.
    pub fn exponent(&self, prime: &BigInt) -> u32 {
        self.0.get(prime).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BigInt, u32)> {
        self.0.iter().map(|(prime, exponent)| (prime, *exponent))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Product of `prime^exponent` over all entries.
    pub fn product(&self) -> BigInt {
        self.iter().fold(BigInt::one(), |acc, (prime, exponent)| {
            acc * num::pow(prime.clone(), exponent as usize)
        })
    }

    /// Entry-wise minimum of exponents, scanning only this map's primes.
    ///
    /// A prime missing here has exponent zero on this side, so it can never
    /// be common; there is nothing to gain from also walking `other`.
    pub fn common_with(&self, other: &FactorMap) -> FactorMap {
        let mut common = FactorMap::new();
        for (prime, exponent) in self.iter() {
            common.add_power(prime, exponent.min(other.exponent(prime)));
        }
        common
    }
}

impl fmt::Display for FactorMap {
    /// `2^3 × 3 × 5^2`; the empty map renders as `1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "1");
        }
        for (idx, (prime, exponent)) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, " × ")?;
            }
            if exponent == 1 {
                write!(f, "{}", prime)?;
            } else {
                write!(f, "{}^{}", prime, exponent)?;
            }
        }
        Ok(())
    }
}

impl FromIterator<(BigInt, u32)> for FactorMap {
    fn from_iter<I: IntoIterator<Item = (BigInt, u32)>>(iter: I) -> Self {
        let mut map = FactorMap::new();
        for (prime, exponent) in iter {
            if !prime.is_zero() {
                map.add_power(&prime, exponent);
            }
        }
        map
    }
}
