//! Circle: the oval inscribed in the rectangle.

use std::f64::consts::TAU;
use std::hash::{Hash, Hasher};

use crate::canvas::{Canvas, Stroke};
use crate::defaults;
use crate::errors::ShapeError;
use crate::path::Path;
use crate::types::{Angle, Color, Rect};

use super::{BorderShape, Shape, validate_rect};

/// Clips to the circle inscribed in the rectangle, centered at the
/// rectangle's center with radius `min(width, height) / 2`.
///
/// With a positive border width the decorative stroke is drawn fully inside
/// the clip boundary (`min(width - bw, height - bw) / 2`), which keeps
/// anti-aliasing from bleeding past the clip edge.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleShape {
    pub border_width: f64,
    pub border_color: Color,
}

impl Default for CircleShape {
    fn default() -> CircleShape {
        CircleShape {
            border_width: defaults::BORDER_WIDTH,
            border_color: defaults::BORDER_COLOR,
        }
    }
}

impl CircleShape {
    pub fn new() -> CircleShape {
        CircleShape::default()
    }

    pub fn with_border(width: f64, color: Color) -> CircleShape {
        CircleShape {
            border_width: width,
            border_color: color,
        }
    }

    fn circle_path(rect: Rect, radius: f64) -> Path {
        let cx = rect.width() / 2.0;
        let cy = rect.height() / 2.0;
        let oval = Rect::new(cx - radius, cy - radius, cx + radius, cy + radius);
        Path::new()
            .m(cx + radius, cy)
            .a(oval, Angle::ZERO, Angle::radians(TAU))
            .z()
    }
}

impl Shape for CircleShape {
    fn build(&self, rect: Rect, _scale: Option<f64>) -> Result<Path, ShapeError> {
        validate_rect(&rect)?;
        let radius = rect.min_dimension() / 2.0;
        Ok(Self::circle_path(rect, radius))
    }
}

impl BorderShape for CircleShape {
    fn draw_border(&self, canvas: &mut dyn Canvas, rect: Rect) -> Result<(), ShapeError> {
        validate_rect(&rect)?;
        if self.border_width <= 0.0 {
            return Ok(());
        }
        // Stroke sits inside the clip: inset the diameter by the border width.
        let radius = ((rect.width() - self.border_width)
            .min(rect.height() - self.border_width)
            / 2.0)
            .max(0.0);
        let stroke = Stroke::new(self.border_color, self.border_width);
        canvas.draw_path(&Self::circle_path(rect, radius), &stroke);
        Ok(())
    }
}

impl Hash for CircleShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.border_width.to_bits());
        self.border_color.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use crate::path::{PathCmd, point_on_oval};

    #[test]
    fn outline_touches_cardinal_extremes() {
        let rect = Rect::from_size(100.0, 60.0);
        let path = CircleShape::new().build(rect, None).unwrap();
        assert!(path.is_closed());

        let r = 30.0;
        let (cx, cy) = (50.0, 30.0);
        let oval = match path.commands()[1] {
            PathCmd::ArcTo { oval, .. } => oval,
            ref other => panic!("expected arc, got {other:?}"),
        };
        for (angle, expected) in [
            (Angle::degrees(0.0), (cx + r, cy)),
            (Angle::degrees(90.0), (cx, cy + r)),
            (Angle::degrees(180.0), (cx - r, cy)),
            (Angle::degrees(270.0), (cx, cy - r)),
        ] {
            let p = point_on_oval(oval, angle);
            assert!((p.x - expected.0).abs() < 1e-9);
            assert!((p.y - expected.1).abs() < 1e-9);
        }
    }

    #[test]
    fn border_is_stroked_inside_the_clip() {
        let circle = CircleShape::with_border(4.0, Color::BLACK);
        let mut canvas = RecordingCanvas::new();
        circle
            .draw_border(&mut canvas, Rect::from_size(100.0, 60.0))
            .unwrap();

        assert_eq!(canvas.ops.len(), 1);
        let (path, stroke) = &canvas.ops[0];
        assert_eq!(stroke.width, 4.0);
        assert_eq!(stroke.color, Color::BLACK);
        // min(100 - 4, 60 - 4) / 2 = 28
        match path.commands()[1] {
            PathCmd::ArcTo { oval, .. } => {
                assert_eq!(oval.width() / 2.0, 28.0);
            }
            ref other => panic!("expected arc, got {other:?}"),
        }
    }

    #[test]
    fn zero_border_width_draws_nothing() {
        let circle = CircleShape::new();
        let mut canvas = RecordingCanvas::new();
        circle
            .draw_border(&mut canvas, Rect::from_size(10.0, 10.0))
            .unwrap();
        assert!(canvas.ops.is_empty());
    }
}
