//! Star polygon inscribed in the rectangle.

use std::f64::consts::TAU;
use std::hash::{Hash, Hasher};

use crate::errors::ShapeError;
use crate::path::Path;
use crate::types::Rect;

use super::{Shape, validate_rect};

/// Clips to a star with `points` spikes, centered in the rectangle. Outer
/// vertices sit on the inscribed circle, inner vertices at half its radius.
#[derive(Clone, Debug, PartialEq)]
pub struct StarShape {
    points: u32,
}

impl StarShape {
    /// The largest accepted point count, so `2 * points + 1` vertices
    /// always fit in a `u32`.
    pub const MAX_POINTS: u32 = (u32::MAX - 1) / 2;

    /// Fails when `points <= 3`: three spikes already degenerate into a
    /// hexagon-like blob at the half-radius ratio, anything fewer is not a
    /// star at all. Also fails past [`StarShape::MAX_POINTS`].
    pub fn new(points: u32) -> Result<StarShape, ShapeError> {
        if points <= 3 {
            return Err(ShapeError::invalid_argument(format!(
                "a star needs more than 3 points, got {points}"
            )));
        }
        if points > Self::MAX_POINTS {
            return Err(ShapeError::invalid_argument(format!(
                "a star supports at most {} points, got {points}",
                Self::MAX_POINTS
            )));
        }
        Ok(StarShape { points })
    }

    pub fn points(&self) -> u32 {
        self.points
    }
}

impl Shape for StarShape {
    fn build(&self, rect: Rect, _scale: Option<f64>) -> Result<Path, ShapeError> {
        validate_rect(&rect)?;
        let cx = rect.width() / 2.0;
        let cy = rect.height() / 2.0;
        let radius = rect.min_dimension() / 2.0;
        let vertices = 2 * self.points;
        let alpha = TAU / f64::from(vertices);

        let mut path = Path::new();
        // Alternate between the full radius and half of it, walking the
        // circle once and landing back on the starting vertex.
        for i in (1..=vertices + 1).rev() {
            let r = radius * f64::from(i % 2 + 1) / 2.0;
            let omega = alpha * f64::from(i);
            let x = cx + r * omega.sin();
            let y = cy + r * omega.cos();
            path = if path.is_empty() { path.m(x, y) } else { path.l(x, y) };
        }
        Ok(path.z())
    }
}

impl Hash for StarShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.points.hash(state);
    }
}
