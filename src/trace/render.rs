// src/trace/render.rs

use crate::trace::step::{Step, Trace};

pub const DEFAULT_SEPARATOR_WIDTH: usize = 40;

/// Turns a trace into display lines. Integers are printed with every digit
/// and no grouping, so output does not depend on locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRenderer {
    /// Width of the `-` rule printed after each stage result; 0 disables it.
    pub separator_width: usize,
}

impl Default for TraceRenderer {
    fn default() -> Self {
        TraceRenderer {
            separator_width: DEFAULT_SEPARATOR_WIDTH,
        }
    }
}

impl TraceRenderer {
    pub fn new(separator_width: usize) -> Self {
        TraceRenderer { separator_width }
    }

    pub fn render(&self, trace: &Trace) -> Vec<String> {
        let mut lines = Vec::with_capacity(trace.len());
        for step in trace {
            lines.push(step.to_string());
            if matches!(step, Step::StageResult { .. }) && self.separator_width > 0 {
                lines.push("-".repeat(self.separator_width));
            }
        }
        lines
    }
}

/// Renders with the default separator width.
pub fn render(trace: &Trace) -> Vec<String> {
    TraceRenderer::default().render(trace)
}
