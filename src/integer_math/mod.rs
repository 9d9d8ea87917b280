// src/integer_math/mod.rs

pub mod factor_map;
pub mod trial_division;
