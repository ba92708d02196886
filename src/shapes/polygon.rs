//! Regular polygon inscribed in the rectangle.

use std::f64::consts::TAU;
use std::hash::{Hash, Hasher};

use crate::errors::ShapeError;
use crate::path::Path;
use crate::types::Rect;

use super::{Shape, validate_rect};

/// Clips to a regular polygon with `sides` edges, centered in the rectangle
/// and inscribed in its smaller dimension. The first vertex sits due east of
/// the center.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonShape {
    sides: u32,
}

impl PolygonShape {
    /// Fails when `sides < 3`, the smallest closed polygon.
    pub fn new(sides: u32) -> Result<PolygonShape, ShapeError> {
        if sides < 3 {
            return Err(ShapeError::invalid_argument(format!(
                "a polygon needs at least 3 sides, got {sides}"
            )));
        }
        Ok(PolygonShape { sides })
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }
}

impl Shape for PolygonShape {
    fn build(&self, rect: Rect, _scale: Option<f64>) -> Result<Path, ShapeError> {
        validate_rect(&rect)?;
        let cx = rect.width() / 2.0;
        let cy = rect.height() / 2.0;
        let radius = rect.min_dimension() / 2.0;

        let mut path = Path::new().m(cx + radius, cy);
        for i in 1..self.sides {
            let angle = TAU * f64::from(i) / f64::from(self.sides);
            path = path.l(cx + radius * angle.cos(), cy + radius * angle.sin());
        }
        Ok(path.z())
    }
}

impl Hash for PolygonShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sides.hash(state);
    }
}
