// src/trace/mod.rs

pub mod render;
pub mod step;

pub use render::{render, TraceRenderer};
pub use step::{Step, Trace};
