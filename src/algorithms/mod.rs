// src/algorithms/mod.rs
//
// Pairwise GCD strategies. The set is closed, so selection is an enum and
// dispatch is a plain match:
//
// Algorithm            Core operation          Trace content
// ─────────────────────────────────────────────────────────────────────
// Euclidean            division with remainder  a = b×q + r per step
// Prime factorization  trial division           both factorizations, common primes
// Stein (binary)       shift and subtract       every shift, swap, subtraction
//
// All three agree on the result for every pair of non-negative integers.

pub mod euclidean;
pub mod prime_factorization;
pub mod stein;

use num::BigInt;
use std::fmt;
use std::str::FromStr;

use crate::core::error::GcdError;
use crate::trace::Trace;

/// Enumeration of the available pairwise GCD algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GcdAlgorithm {
    /// Repeated Euclidean division
    Euclidean,

    /// Intersection of prime factorizations
    PrimeFactorization,

    /// Stein's binary algorithm
    Stein,
}

impl GcdAlgorithm {
    pub const ALL: [GcdAlgorithm; 3] = [
        GcdAlgorithm::Euclidean,
        GcdAlgorithm::PrimeFactorization,
        GcdAlgorithm::Stein,
    ];

    /// Returns a human-readable name for the algorithm
    pub fn name(&self) -> &str {
        match self {
            Self::Euclidean => "Euclidean",
            Self::PrimeFactorization => "Prime Factorization",
            Self::Stein => "Stein (binary)",
        }
    }

    /// Canonical selector accepted by `from_str`
    pub fn id(&self) -> &str {
        match self {
            Self::Euclidean => "euclidean",
            Self::PrimeFactorization => "prime",
            Self::Stein => "stein",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Euclidean => "repeated division with remainder until the remainder is zero",
            Self::PrimeFactorization => "product of the shared prime powers of both operands",
            Self::Stein => "halving and subtraction, restoring common factors of two at the end",
        }
    }

    /// Runs this algorithm on two non-negative integers.
    pub fn gcd_pair(&self, a: &BigInt, b: &BigInt) -> (BigInt, Trace) {
        match self {
            Self::Euclidean => euclidean::euclidean_gcd(a, b),
            Self::PrimeFactorization => prime_factorization::prime_factorization_gcd(a, b),
            Self::Stein => stein::stein_gcd(a, b),
        }
    }
}

impl Default for GcdAlgorithm {
    fn default() -> Self {
        GcdAlgorithm::Euclidean
    }
}

impl fmt::Display for GcdAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GcdAlgorithm {
    type Err = GcdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euclidean" | "euclid" => Ok(Self::Euclidean),
            "prime" | "factorization" | "prime-factorization" | "prime_factorization" => {
                Ok(Self::PrimeFactorization)
            }
            "stein" | "binary" => Ok(Self::Stein),
            _ => Err(GcdError::UnknownAlgorithm(s.to_string())),
        }
    }
}
