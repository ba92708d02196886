//! The host-rendering boundary.
//!
//! The core never rasterizes anything: border-capable shapes hand a path and
//! a stroke style to whatever the host provides behind [`Canvas`]. The stroke
//! is a plain value assembled immediately before each draw, so shapes stay
//! fully immutable.

use crate::path::Path;
use crate::types::Color;

/// Decorative stroke style for border drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Stroke {
        Stroke { color, width }
    }
}

/// Minimal drawing surface implemented by the host rendering framework.
pub trait Canvas {
    /// Stroke `path` with the given style.
    fn draw_path(&mut self, path: &Path, stroke: &Stroke);
}

/// Canvas that records every draw call, for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<(Path, Stroke)>,
}

impl RecordingCanvas {
    pub fn new() -> RecordingCanvas {
        RecordingCanvas::default()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_path(&mut self, path: &Path, stroke: &Stroke) {
        self.ops.push((path.clone(), *stroke));
    }
}
