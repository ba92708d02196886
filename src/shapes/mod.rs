//! Shape variants and the capability traits they share.
//!
//! Each shape is an immutable value holding only its configuration. Building
//! a path is a pure function of the rectangle; paths come back closed or the
//! build is a defect. [`AnyShape`] gives the adapter a uniform type to wrap
//! while each variant keeps its own geometry.

pub mod arc;
pub mod bubble;
pub mod circle;
pub mod custom;
pub mod cut_corner;
pub mod diagonal;
pub mod polygon;
pub mod round_rect;
pub mod star;
pub mod triangle;

pub use arc::{ArcDirection, ArcPosition, ArcShape};
pub use bubble::{BubblePosition, BubbleShape};
pub use circle::CircleShape;
pub use custom::CustomShape;
pub use cut_corner::CutCornerShape;
pub use diagonal::{DiagonalDirection, DiagonalPosition, DiagonalShape};
pub use polygon::PolygonShape;
pub use round_rect::RoundRectShape;
pub use star::StarShape;
pub use triangle::TriangleShape;

use enum_dispatch::enum_dispatch;
use std::hash::{Hash, Hasher};

use crate::canvas::Canvas;
use crate::errors::ShapeError;
use crate::path::Path;
use crate::types::Rect;

/// A pure function from a rectangle (and optional scale) to a closed outline.
///
/// `scale` is accepted for interface compatibility with hosts that pass one;
/// every concrete variant derives its geometry from the rectangle alone and
/// ignores it.
#[enum_dispatch]
pub trait Shape {
    fn build(&self, rect: Rect, scale: Option<f64>) -> Result<Path, ShapeError>;
}

/// A shape that can additionally render a decorative stroke distinct from
/// its clip outline. Implemented by Circle and RoundRect.
pub trait BorderShape {
    fn draw_border(&self, canvas: &mut dyn Canvas, rect: Rect) -> Result<(), ShapeError>;
}

/// Uniform storage over every shape variant.
#[enum_dispatch(Shape)]
#[derive(Clone, Debug, PartialEq)]
pub enum AnyShape {
    Circle(CircleShape),
    RoundRect(RoundRectShape),
    CutCorner(CutCornerShape),
    Arc(ArcShape),
    Diagonal(DiagonalShape),
    Triangle(TriangleShape),
    Bubble(BubbleShape),
    Star(StarShape),
    Polygon(PolygonShape),
    Custom(CustomShape),
}

impl AnyShape {
    /// The border-drawing capability, if this variant has one.
    pub fn border_shape(&self) -> Option<&dyn BorderShape> {
        match self {
            AnyShape::Circle(s) => Some(s),
            AnyShape::RoundRect(s) => Some(s),
            _ => None,
        }
    }
}

impl Hash for AnyShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            AnyShape::Circle(s) => s.hash(state),
            AnyShape::RoundRect(s) => s.hash(state),
            AnyShape::CutCorner(s) => s.hash(state),
            AnyShape::Arc(s) => s.hash(state),
            AnyShape::Diagonal(s) => s.hash(state),
            AnyShape::Triangle(s) => s.hash(state),
            AnyShape::Bubble(s) => s.hash(state),
            AnyShape::Star(s) => s.hash(state),
            AnyShape::Polygon(s) => s.hash(state),
            AnyShape::Custom(s) => s.hash(state),
        }
    }
}

/// Rectangle precondition shared by every `build` implementation.
pub(crate) fn validate_rect(rect: &Rect) -> Result<(), ShapeError> {
    if !rect.is_valid() {
        return Err(ShapeError::invalid_argument(format!(
            "rectangle must be finite with right >= left and bottom >= top, got \
             ({}, {}, {}, {})",
            rect.left, rect.top, rect.right, rect.bottom
        )));
    }
    Ok(())
}
