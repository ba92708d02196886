//! Rounded rectangle with independent per-corner radii.

use std::hash::{Hash, Hasher};

use crate::canvas::{Canvas, Stroke};
use crate::defaults;
use crate::errors::ShapeError;
use crate::path::Path;
use crate::types::{Angle, Color, CornerRadius, Rect};

use super::{BorderShape, Shape, validate_rect};

/// Clips to a rectangle with rounded corners.
///
/// Radii are clamped so no corner exceeds half of the rectangle's smaller
/// dimension. Corners are true quarter arcs by default; `bezier_corners`
/// swaps them for single quadratic curves, which some hosts rasterize
/// faster at the cost of a slightly flatter curve.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundRectShape {
    pub radius: CornerRadius,
    pub bezier_corners: bool,
    pub border_width: f64,
    pub border_color: Color,
}

impl Default for RoundRectShape {
    fn default() -> RoundRectShape {
        RoundRectShape::new(CornerRadius::uniform(0.0))
    }
}

impl RoundRectShape {
    pub fn new(radius: CornerRadius) -> RoundRectShape {
        RoundRectShape {
            radius,
            bezier_corners: false,
            border_width: defaults::BORDER_WIDTH,
            border_color: defaults::BORDER_COLOR,
        }
    }

    pub fn with_border(mut self, width: f64, color: Color) -> RoundRectShape {
        self.border_width = width;
        self.border_color = color;
        self
    }

    pub fn with_bezier_corners(mut self, bezier: bool) -> RoundRectShape {
        self.bezier_corners = bezier;
        self
    }

    fn outline(&self, rect: Rect) -> Path {
        let (l, t, r, b) = (rect.left, rect.top, rect.right, rect.bottom);
        let cr = self.radius.clamped_to(rect.min_dimension() / 2.0);
        let (tl, tr, br, bl) = (cr.top_left, cr.top_right, cr.bottom_right, cr.bottom_left);

        let mut path = Path::new().m(l + tl, t).l(r - tr, t);
        if tr > 0.0 {
            path = if self.bezier_corners {
                path.q(r, t, r, t + tr)
            } else {
                path.a(
                    Rect::new(r - 2.0 * tr, t, r, t + 2.0 * tr),
                    Angle::degrees(-90.0),
                    Angle::degrees(90.0),
                )
            };
        }
        path = path.l(r, b - br);
        if br > 0.0 {
            path = if self.bezier_corners {
                path.q(r, b, r - br, b)
            } else {
                path.a(
                    Rect::new(r - 2.0 * br, b - 2.0 * br, r, b),
                    Angle::degrees(0.0),
                    Angle::degrees(90.0),
                )
            };
        }
        path = path.l(l + bl, b);
        if bl > 0.0 {
            path = if self.bezier_corners {
                path.q(l, b, l, b - bl)
            } else {
                path.a(
                    Rect::new(l, b - 2.0 * bl, l + 2.0 * bl, b),
                    Angle::degrees(90.0),
                    Angle::degrees(90.0),
                )
            };
        }
        path = path.l(l, t + tl);
        if tl > 0.0 {
            path = if self.bezier_corners {
                path.q(l, t, l + tl, t)
            } else {
                path.a(
                    Rect::new(l, t, l + 2.0 * tl, t + 2.0 * tl),
                    Angle::degrees(180.0),
                    Angle::degrees(90.0),
                )
            };
        }
        path.z()
    }
}

impl Shape for RoundRectShape {
    fn build(&self, rect: Rect, _scale: Option<f64>) -> Result<Path, ShapeError> {
        validate_rect(&rect)?;
        Ok(self.outline(rect))
    }
}

impl BorderShape for RoundRectShape {
    fn draw_border(&self, canvas: &mut dyn Canvas, rect: Rect) -> Result<(), ShapeError> {
        validate_rect(&rect)?;
        if self.border_width <= 0.0 {
            return Ok(());
        }
        let stroke = Stroke::new(self.border_color, self.border_width);
        canvas.draw_path(&self.outline(rect), &stroke);
        Ok(())
    }
}

impl Hash for RoundRectShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.radius.hash(state);
        self.bezier_corners.hash(state);
        state.write_u64(self.border_width.to_bits());
        self.border_color.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use crate::path::PathCmd;

    #[test]
    fn zero_radius_degenerates_to_the_rectangle() {
        let path = RoundRectShape::default()
            .build(Rect::from_size(100.0, 50.0), None)
            .unwrap();
        assert_eq!(path.to_svg(), "M0,0L100,0L100,50L0,50L0,0Z");
    }

    #[test]
    fn radii_are_clamped_to_half_the_smaller_dimension() {
        let shape = RoundRectShape::new(CornerRadius::uniform(100.0));
        let path = shape.build(Rect::from_size(80.0, 40.0), None).unwrap();
        // 100 clamps to 20, so the top edge starts at x = 20.
        match path.commands()[0] {
            PathCmd::MoveTo(p) => assert_eq!((p.x, p.y), (20.0, 0.0)),
            ref other => panic!("expected move, got {other:?}"),
        }
        let bounds = path.bounds().unwrap();
        assert!(bounds.right <= 80.0 + 1e-9);
        assert!(bounds.bottom <= 40.0 + 1e-9);
    }

    #[test]
    fn bezier_corners_use_quadratic_curves() {
        let shape = RoundRectShape::new(CornerRadius::uniform(10.0)).with_bezier_corners(true);
        let path = shape.build(Rect::from_size(100.0, 50.0), None).unwrap();
        assert!(
            path.commands()
                .iter()
                .all(|cmd| !matches!(cmd, PathCmd::ArcTo { .. }))
        );
        assert_eq!(
            path.commands()
                .iter()
                .filter(|cmd| matches!(cmd, PathCmd::QuadTo { .. }))
                .count(),
            4
        );
    }

    #[test]
    fn mixed_radii_round_only_their_corners() {
        let shape = RoundRectShape::new(CornerRadius::new(10.0, 0.0, 10.0, 0.0));
        let path = shape.build(Rect::from_size(100.0, 50.0), None).unwrap();
        assert_eq!(
            path.commands()
                .iter()
                .filter(|cmd| matches!(cmd, PathCmd::ArcTo { .. }))
                .count(),
            2
        );
    }

    #[test]
    fn border_strokes_the_same_outline() {
        let shape = RoundRectShape::new(CornerRadius::uniform(8.0)).with_border(3.0, Color::BLACK);
        let mut canvas = RecordingCanvas::new();
        shape
            .draw_border(&mut canvas, Rect::from_size(100.0, 50.0))
            .unwrap();

        assert_eq!(canvas.ops.len(), 1);
        let (path, stroke) = &canvas.ops[0];
        assert_eq!(*path, shape.outline(Rect::from_size(100.0, 50.0)));
        assert_eq!(stroke.width, 3.0);
    }
}
