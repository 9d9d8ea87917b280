// src/core/numeric_value.rs

use num::{BigInt, BigRational, One, Signed};
use std::fmt;

/// An exact input value: a big integer or a rational kept in lowest terms
/// with a positive denominator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericValue {
    Integer(BigInt),
    Rational(BigRational),
}

impl NumericValue {
    /// Builds a value from a ratio, collapsing whole numbers to `Integer`.
    /// `BigRational` already stores lowest terms with a positive denominator.
    pub fn from_ratio(ratio: BigRational) -> Self {
        if ratio.denom().is_one() {
            NumericValue::Integer(ratio.numer().clone())
        } else {
            NumericValue::Rational(ratio)
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, NumericValue::Integer(_))
    }

    pub fn numerator(&self) -> &BigInt {
        match self {
            NumericValue::Integer(n) => n,
            NumericValue::Rational(r) => r.numer(),
        }
    }

    /// The operand a GCD algorithm actually sees: the magnitude of the
    /// numerator. Denominators are dropped, not rounded.
    pub fn normalized(&self) -> BigInt {
        self.numerator().abs()
    }
}

impl From<BigInt> for NumericValue {
    fn from(value: BigInt) -> Self {
        NumericValue::Integer(value)
    }
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        NumericValue::Integer(BigInt::from(value))
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Integer(n) => write!(f, "{}", n),
            NumericValue::Rational(r) if r.denom().is_one() => write!(f, "{}", r.numer()),
            NumericValue::Rational(r) => write!(f, "{}/{}", r.numer(), r.denom()),
        }
    }
}
