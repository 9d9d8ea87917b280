// src/trace/step.rs

use num::BigInt;
use std::fmt;

use crate::core::numeric_value::NumericValue;
use crate::integer_math::factor_map::FactorMap;

/// One entry of the audit log. Steps are appended in the order the work
/// happens and are never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A non-integer input was replaced by the magnitude of its numerator.
    Normalized { original: NumericValue, normalized: BigInt },

    /// Start of one pairwise reduction.
    StageStart { left: BigInt, right: BigInt },

    /// `dividend = divisor × quotient + remainder`
    Division {
        dividend: BigInt,
        divisor: BigInt,
        quotient: BigInt,
        remainder: BigInt,
    },

    /// One side was zero, so the other side is the GCD.
    ZeroOperand { other: BigInt },

    Factorization { value: BigInt, factors: FactorMap },
    CommonFactor { prime: BigInt, exponent: u32 },
    NoCommonFactors,

    /// Both operands halved together.
    JointShift { a: BigInt, b: BigInt },
    ShiftA { a: BigInt },
    ShiftB { b: BigInt },
    Swap { a: BigInt, b: BigInt },
    /// `b := b - a`
    Subtract { a: BigInt, difference: BigInt },
    /// `value << shift = result`
    Restore { value: BigInt, shift: usize, result: BigInt },

    /// End of one pairwise reduction.
    StageResult { gcd: BigInt },
}

impl Step {
    pub fn is_stage_marker(&self) -> bool {
        matches!(self, Step::StageStart { .. } | Step::StageResult { .. })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Normalized { original, normalized } => {
                write!(f, "{} is not an integer; using |numerator| = {}", original, normalized)
            }
            Step::StageStart { left, right } => write!(f, "GCD of {} and {}:", left, right),
            Step::Division { dividend, divisor, quotient, remainder } => {
                write!(f, "  {} = {}×{} + {}", dividend, divisor, quotient, remainder)
            }
            Step::ZeroOperand { other } => write!(f, "  one operand is 0, so the GCD is {}", other),
            Step::Factorization { value, factors } => write!(f, "  {} = {}", value, factors),
            Step::CommonFactor { prime, exponent } => {
                write!(f, "  common prime factor {}^{}", prime, exponent)
            }
            Step::NoCommonFactors => write!(f, "  no common prime factors"),
            Step::JointShift { a, b } => write!(f, "  both even, shift right: a={}, b={}", a, b),
            Step::ShiftA { a } => write!(f, "  a is even, shift right: a={}", a),
            Step::ShiftB { b } => write!(f, "  b is even, shift right: b={}", b),
            Step::Swap { a, b } => write!(f, "  swap a and b: a={}, b={}", a, b),
            Step::Subtract { a, difference } => write!(f, "  b = b - {} → {}", a, difference),
            Step::Restore { value, shift, result } => {
                write!(f, "  restore shift: {} << {} = {}", value, shift, result)
            }
            Step::StageResult { gcd } => write!(f, "Stage result: {}", gcd),
        }
    }
}

/// Ordered, append-only sequence of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Self {
        Trace { steps: Vec::new() }
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Moves every step of `other` onto the end of this trace.
    pub fn append(&mut self, other: Trace) {
        self.steps.extend(other.steps);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl From<Vec<Step>> for Trace {
    fn from(steps: Vec<Step>) -> Self {
        Trace { steps }
    }
}
