// src/core/mod.rs

pub mod cancellation_token;
pub mod error;
pub mod number_parser;
pub mod numeric_value;
pub mod reducer;
