//! Adapter exposing shapes through a host framework's border interface.
//!
//! Hosts that clip through a border abstraction (outer path for the clip,
//! paint pass for decoration) wrap an [`AnyShape`] in a [`ShapeBorder`].
//! The adapter contributes no layout: the shape is pure clipping, so the
//! insets are zero and the inner path is empty.

use std::hash::{Hash, Hasher};

use crate::canvas::Canvas;
use crate::errors::ShapeError;
use crate::log::debug;
use crate::path::Path;
use crate::shapes::{AnyShape, Shape};
use crate::types::Rect;

/// Per-edge layout insets, all zero for shape borders.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct EdgeInsets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };
}

/// Presents an [`AnyShape`] as a border: the shape's outline becomes the
/// outer path, and border-capable shapes get their stroke drawn during the
/// paint pass. Whether the wrapped shape can paint is resolved once at
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeBorder {
    shape: AnyShape,
    border_capable: bool,
}

impl ShapeBorder {
    pub fn new(shape: impl Into<AnyShape>) -> ShapeBorder {
        let shape = shape.into();
        let border_capable = shape.border_shape().is_some();
        ShapeBorder {
            shape,
            border_capable,
        }
    }

    pub fn shape(&self) -> &AnyShape {
        &self.shape
    }

    /// Layout space consumed by the border. Always zero: the decorative
    /// stroke overlaps the content instead of displacing it.
    pub fn dimensions(&self) -> EdgeInsets {
        EdgeInsets::ZERO
    }

    /// The clip outline for the given rectangle.
    pub fn outer_path(&self, rect: Rect) -> Result<Path, ShapeError> {
        self.shape.build(rect, Some(1.0))
    }

    /// The content-side outline. Empty: the shape does not reserve an
    /// interior region distinct from the outer path.
    pub fn inner_path(&self, _rect: Rect) -> Path {
        Path::new()
    }

    /// Draws the decorative stroke if the wrapped shape supports one.
    /// A no-op for every other shape.
    pub fn paint(&self, canvas: &mut dyn Canvas, rect: Rect) -> Result<(), ShapeError> {
        if !self.border_capable {
            return Ok(());
        }
        debug!(shape = ?self.shape, "painting shape border");
        match self.shape.border_shape() {
            Some(border) => border.draw_border(canvas, rect),
            None => Ok(()),
        }
    }

    /// Borders scale with the rectangle they are given, so scaling the
    /// border itself is the identity.
    pub fn scale(&self, _factor: f64) -> ShapeBorder {
        self.clone()
    }
}

impl Hash for ShapeBorder {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.shape.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use crate::shapes::{CircleShape, StarShape, TriangleShape};
    use crate::types::Color;

    #[test]
    fn outer_path_is_the_shape_outline() {
        let border = ShapeBorder::new(TriangleShape::default());
        let rect = Rect::from_size(100.0, 100.0);
        let outline = border.outer_path(rect).unwrap();
        assert_eq!(
            outline,
            TriangleShape::default().build(rect, None).unwrap()
        );
    }

    #[test]
    fn inner_path_is_empty_and_insets_are_zero() {
        let border = ShapeBorder::new(StarShape::new(5).unwrap());
        assert!(border.inner_path(Rect::from_size(10.0, 10.0)).is_empty());
        assert_eq!(border.dimensions(), EdgeInsets::ZERO);
    }

    #[test]
    fn paint_is_a_no_op_for_clip_only_shapes() {
        let border = ShapeBorder::new(TriangleShape::default());
        let mut canvas = RecordingCanvas::new();
        border
            .paint(&mut canvas, Rect::from_size(100.0, 100.0))
            .unwrap();
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn paint_delegates_to_border_capable_shapes() {
        let border = ShapeBorder::new(CircleShape::with_border(2.0, Color::BLACK));
        let mut canvas = RecordingCanvas::new();
        border
            .paint(&mut canvas, Rect::from_size(100.0, 100.0))
            .unwrap();
        assert_eq!(canvas.ops.len(), 1);
    }

    #[test]
    fn scale_is_the_identity() {
        let border = ShapeBorder::new(StarShape::new(5).unwrap());
        assert_eq!(border.scale(2.0), border);
    }

    #[test]
    fn equality_follows_the_wrapped_shape() {
        let a = ShapeBorder::new(StarShape::new(5).unwrap());
        let b = ShapeBorder::new(StarShape::new(5).unwrap());
        let c = ShapeBorder::new(StarShape::new(6).unwrap());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
