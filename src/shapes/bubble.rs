//! Speech-bubble outline: rounded body plus a triangular arrow.

use std::hash::{Hash, Hasher};

use crate::defaults;
use crate::errors::ShapeError;
use crate::path::Path;
use crate::types::Rect;

use super::{Shape, validate_rect};

/// Which edge carries the arrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BubblePosition {
    Top,
    Bottom,
    Left,
    Right,
}

/// Clips to a rounded rectangle with a triangular arrow on one edge.
///
/// The body is inset by `arrow_height` on the arrow's side so the arrow tip
/// lands exactly on the rectangle boundary. The arrow's anchor point slides
/// along the edge with `arrow_position_percent` (0 at the near corner, 1 at
/// the far one). Corners are quadratic curves keyed off half the corner
/// radius.
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleShape {
    pub position: BubblePosition,
    pub corner_radius: f64,
    pub arrow_width: f64,
    pub arrow_height: f64,
    pub arrow_position_percent: f64,
}

impl Default for BubbleShape {
    fn default() -> BubbleShape {
        BubbleShape {
            position: BubblePosition::Bottom,
            corner_radius: defaults::BUBBLE_RADIUS,
            arrow_width: defaults::BUBBLE_ARROW_WIDTH,
            arrow_height: defaults::BUBBLE_ARROW_HEIGHT,
            arrow_position_percent: defaults::BUBBLE_ARROW_POSITION,
        }
    }
}

impl BubbleShape {
    pub fn new(position: BubblePosition) -> BubbleShape {
        BubbleShape {
            position,
            ..BubbleShape::default()
        }
    }
}

impl Shape for BubbleShape {
    fn build(&self, rect: Rect, _scale: Option<f64>) -> Result<Path, ShapeError> {
        validate_rect(&rect)?;

        let d = self.corner_radius.max(0.0);
        let aw = self.arrow_width;
        let (mut left, mut top, mut right, mut bottom) =
            (rect.left, rect.top, rect.right, rect.bottom);
        match self.position {
            BubblePosition::Left => left += self.arrow_height,
            BubblePosition::Top => top += self.arrow_height,
            BubblePosition::Right => right -= self.arrow_height,
            BubblePosition::Bottom => bottom -= self.arrow_height,
        }
        let center_x = (rect.left + rect.right) * self.arrow_position_percent;
        let center_y = (rect.top + rect.bottom) * self.arrow_position_percent;

        let mut path = Path::new().m(left + d / 2.0, top);
        if self.position == BubblePosition::Top {
            path = path
                .l(center_x - aw, top)
                .l(center_x, rect.top)
                .l(center_x + aw, top);
        }
        path = path.l(right - d / 2.0, top).q(right, top, right, top + d / 2.0);
        if self.position == BubblePosition::Right {
            path = path
                .l(right, center_y - aw)
                .l(rect.right, center_y)
                .l(right, center_y + aw);
        }
        path = path
            .l(right, bottom - d / 2.0)
            .q(right, bottom, right - d / 2.0, bottom);
        if self.position == BubblePosition::Bottom {
            path = path
                .l(center_x + aw, bottom)
                .l(center_x, rect.bottom)
                .l(center_x - aw, bottom);
        }
        path = path
            .l(left + d / 2.0, bottom)
            .q(left, bottom, left, bottom - d / 2.0);
        if self.position == BubblePosition::Left {
            path = path
                .l(left, center_y + aw)
                .l(rect.left, center_y)
                .l(left, center_y - aw);
        }
        Ok(path.l(left, top + d / 2.0).q(left, top, left + d / 2.0, top).z())
    }
}

impl Hash for BubbleShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
        state.write_u64(self.corner_radius.to_bits());
        state.write_u64(self.arrow_width.to_bits());
        state.write_u64(self.arrow_height.to_bits());
        state.write_u64(self.arrow_position_percent.to_bits());
    }
}
