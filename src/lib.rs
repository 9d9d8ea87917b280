// src/lib.rs

pub mod algorithms;
pub mod batch;
pub mod config;
pub mod core;
pub mod integer_math;
pub mod trace;

pub use crate::algorithms::GcdAlgorithm;
pub use crate::core::error::GcdError;
pub use crate::core::number_parser::{parse_number, parse_numbers};
pub use crate::core::numeric_value::NumericValue;
pub use crate::core::reducer::{reduce, reduce_text, Reducer, Reduction, StageProgress};
pub use crate::trace::{render, Step, Trace, TraceRenderer};
