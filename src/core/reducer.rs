// src/core/reducer.rs

use log::{debug, info, warn};
use num::BigInt;

use crate::algorithms::GcdAlgorithm;
use crate::core::cancellation_token::CancellationToken;
use crate::core::error::{GcdError, Result};
use crate::core::number_parser::parse_numbers;
use crate::core::numeric_value::NumericValue;
use crate::trace::{Step, Trace};

/// Final GCD of a sequence together with the full audit trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub gcd: BigInt,
    pub trace: Trace,
}

/// Reported after each pairwise stage completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageProgress {
    /// 1-based index of the stage that just finished.
    pub stage: usize,
    pub stage_count: usize,
    pub running_gcd: BigInt,
}

/// Left fold of a pairwise algorithm over a sequence.
///
/// The fold is strictly sequential: stage `i` reduces the running GCD with
/// value `i + 1`. A cancellation token, if present, is checked before each
/// stage and never inside one.
pub struct Reducer<'a> {
    algorithm: GcdAlgorithm,
    cancel_token: Option<&'a CancellationToken>,
    progress: Option<Box<dyn FnMut(&StageProgress) + 'a>>,
}

impl<'a> Reducer<'a> {
    pub fn new(algorithm: GcdAlgorithm) -> Self {
        Reducer {
            algorithm,
            cancel_token: None,
            progress: None,
        }
    }

    pub fn with_cancellation(mut self, cancel_token: &'a CancellationToken) -> Self {
        self.cancel_token = Some(cancel_token);
        self
    }

    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&StageProgress) + 'a,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    pub fn algorithm(&self) -> GcdAlgorithm {
        self.algorithm
    }

    pub fn run(mut self, values: &[NumericValue]) -> Result<Reduction> {
        if values.len() < 2 {
            return Err(GcdError::InsufficientOperands { found: values.len() });
        }

        let stage_count = values.len() - 1;
        info!(
            "Reducing {} values with {} ({} stages)",
            values.len(),
            self.algorithm.name(),
            stage_count
        );

        let mut trace = Trace::new();
        let mut operands = Vec::with_capacity(values.len());
        for value in values {
            let normalized = value.normalized();
            if !value.is_integer() {
                warn!("Rational {} truncated to numerator magnitude {}", value, normalized);
                trace.push(Step::Normalized {
                    original: value.clone(),
                    normalized: normalized.clone(),
                });
            }
            operands.push(normalized);
        }

        let mut operands = operands.into_iter();
        let mut running_gcd = match operands.next() {
            Some(first) => first,
            None => return Err(GcdError::InsufficientOperands { found: 0 }),
        };

        for (idx, value) in operands.enumerate() {
            if let Some(token) = self.cancel_token {
                if token.is_cancellation_requested() {
                    info!("Reduction cancelled before stage {} of {}", idx + 1, stage_count);
                    return Err(GcdError::Cancelled {
                        completed_stages: idx,
                        stage_count,
                    });
                }
            }

            trace.push(Step::StageStart {
                left: running_gcd.clone(),
                right: value.clone(),
            });

            let (gcd, stage_trace) = self.algorithm.gcd_pair(&running_gcd, &value);
            debug!(
                "Stage {}/{}: gcd({}, {}) = {} in {} steps",
                idx + 1,
                stage_count,
                running_gcd,
                value,
                gcd,
                stage_trace.len()
            );
            trace.append(stage_trace);
            trace.push(Step::StageResult { gcd: gcd.clone() });
            running_gcd = gcd;

            if let Some(progress) = self.progress.as_mut() {
                progress(&StageProgress {
                    stage: idx + 1,
                    stage_count,
                    running_gcd: running_gcd.clone(),
                });
            }
        }

        info!("GCD: {}", running_gcd);

        Ok(Reduction {
            gcd: running_gcd,
            trace,
        })
    }
}

/// Reduces `values` with `algorithm`, returning the GCD and its trace.
pub fn reduce(values: &[NumericValue], algorithm: GcdAlgorithm) -> Result<Reduction> {
    Reducer::new(algorithm).run(values)
}

/// Parses comma-separated `input` and reduces it. Parsing finishes before
/// any GCD work starts.
pub fn reduce_text(input: &str, algorithm: GcdAlgorithm) -> Result<Reduction> {
    let values = parse_numbers(input)?;
    reduce(&values, algorithm)
}
