//! One rectangle edge tilted by an angle.

use std::hash::{Hash, Hasher};

use crate::errors::ShapeError;
use crate::path::Path;
use crate::types::{Angle, Rect};

use super::{Shape, validate_rect};

/// Which edge is tilted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagonalPosition {
    Top,
    Bottom,
    Left,
    Right,
}

/// Which end of the tilted edge is pulled inward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagonalDirection {
    Left,
    Right,
}

/// Clips to a quadrilateral: the rectangle with one edge tilted by `angle`.
///
/// The displacement is `width * tan(|angle|)` for every position, including
/// `Left` and `Right`. Tilting a vertical edge therefore scales with the
/// rectangle's width, not its height, which hosts rely on for matched
/// slopes across stacked banners of equal width.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagonalShape {
    pub position: DiagonalPosition,
    pub direction: DiagonalDirection,
    pub angle: Angle,
}

impl DiagonalShape {
    pub fn new(
        position: DiagonalPosition,
        direction: DiagonalDirection,
        angle: Angle,
    ) -> DiagonalShape {
        DiagonalShape {
            position,
            direction,
            angle,
        }
    }
}

impl Shape for DiagonalShape {
    fn build(&self, rect: Rect, _scale: Option<f64>) -> Result<Path, ShapeError> {
        validate_rect(&rect)?;
        let w = rect.width();
        let h = rect.height();
        let d = w * self.angle.abs().tan();

        use DiagonalDirection as Dir;
        use DiagonalPosition as Pos;
        let path = match (self.position, self.direction) {
            (Pos::Bottom, Dir::Left) => {
                Path::new().m(0.0, 0.0).l(w, 0.0).l(w, h - d).l(0.0, h).z()
            }
            (Pos::Bottom, Dir::Right) => {
                Path::new().m(0.0, 0.0).l(w, 0.0).l(w, h).l(0.0, h - d).z()
            }
            (Pos::Top, Dir::Left) => Path::new().m(0.0, d).l(w, 0.0).l(w, h).l(0.0, h).z(),
            (Pos::Top, Dir::Right) => Path::new().m(0.0, 0.0).l(w, d).l(w, h).l(0.0, h).z(),
            (Pos::Left, Dir::Left) => Path::new().m(d, 0.0).l(w, 0.0).l(w, h).l(0.0, h).z(),
            (Pos::Left, Dir::Right) => Path::new().m(0.0, 0.0).l(w, 0.0).l(w, h).l(d, h).z(),
            (Pos::Right, Dir::Left) => {
                Path::new().m(0.0, 0.0).l(w - d, 0.0).l(w, h).l(0.0, h).z()
            }
            (Pos::Right, Dir::Right) => {
                Path::new().m(0.0, 0.0).l(w, 0.0).l(w - d, h).l(0.0, h).z()
            }
        };
        Ok(path)
    }
}

impl Hash for DiagonalShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
        self.direction.hash(state);
        self.angle.hash(state);
    }
}
