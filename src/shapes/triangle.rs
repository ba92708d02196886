//! Triangle with vertices anchored by percentages of the edges.

use std::hash::{Hash, Hasher};

use crate::defaults;
use crate::errors::ShapeError;
use crate::path::Path;
use crate::types::Rect;

use super::{Shape, validate_rect};

/// Clips to a triangle whose three vertices slide along the rectangle's
/// edges: one on each vertical edge, the apex on the bottom edge.
///
/// * `percent_left` places the left vertex at `(0, percent_left * height)`
/// * `percent_bottom` places the apex at `(percent_bottom * width, height)`
/// * `percent_right` places the right vertex at `(width, percent_right * height)`
///
/// The defaults give the classic upright-pointing wedge: top corners plus a
/// centered bottom apex. Percentages are taken as given, values outside
/// `[0, 1]` push vertices past the rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleShape {
    pub percent_bottom: f64,
    pub percent_left: f64,
    pub percent_right: f64,
}

impl Default for TriangleShape {
    fn default() -> TriangleShape {
        TriangleShape {
            percent_bottom: defaults::TRIANGLE_PERCENT_BOTTOM,
            percent_left: defaults::TRIANGLE_PERCENT_LEFT,
            percent_right: defaults::TRIANGLE_PERCENT_RIGHT,
        }
    }
}

impl TriangleShape {
    pub fn new(percent_bottom: f64, percent_left: f64, percent_right: f64) -> TriangleShape {
        TriangleShape {
            percent_bottom,
            percent_left,
            percent_right,
        }
    }
}

impl Shape for TriangleShape {
    fn build(&self, rect: Rect, _scale: Option<f64>) -> Result<Path, ShapeError> {
        validate_rect(&rect)?;
        let w = rect.width();
        let h = rect.height();
        Ok(Path::new()
            .m(0.0, self.percent_left * h)
            .l(self.percent_bottom * w, h)
            .l(w, self.percent_right * h)
            .z())
    }
}

impl Hash for TriangleShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.percent_bottom.to_bits());
        state.write_u64(self.percent_left.to_bits());
        state.write_u64(self.percent_right.to_bits());
    }
}
