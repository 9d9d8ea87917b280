// src/config/mod.rs

pub mod gcd_config;

// Re-export main types for convenience
pub use gcd_config::{GcdConfig, OutputConfig, OutputFormat};
