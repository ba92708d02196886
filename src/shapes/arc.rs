//! One rectangle edge replaced by a smooth arc, bulging in or out.

use std::hash::{Hash, Hasher};

use crate::errors::ShapeError;
use crate::log::debug;
use crate::path::Path;
use crate::types::Rect;

use super::{Shape, validate_rect};

/// Which edge carries the arc.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArcPosition {
    Top,
    Bottom,
    Left,
    Right,
}

/// Whether the arc bulges away from the body (`Outside`) or carves into it
/// (`Inside`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArcDirection {
    Inside,
    Outside,
}

/// Clips to a rectangle whose chosen edge is replaced by two chained
/// quadratic curves meeting at the edge midpoint.
///
/// For outside arcs the flat body is inset by `height` and the curve reaches
/// the rectangle boundary; inside arcs keep the body at full size and the
/// curve dips `height` into it.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcShape {
    pub position: ArcPosition,
    pub direction: ArcDirection,
    pub height: f64,
}

impl ArcShape {
    pub fn new(position: ArcPosition, direction: ArcDirection, height: f64) -> ArcShape {
        ArcShape {
            position,
            direction,
            height,
        }
    }
}

impl Shape for ArcShape {
    fn build(&self, rect: Rect, _scale: Option<f64>) -> Result<Path, ShapeError> {
        validate_rect(&rect)?;
        let w = rect.width();
        let h = rect.height();
        let ht = self.height.abs();
        debug!(
            position = ?self.position,
            direction = ?self.direction,
            height = ht,
            "building arc outline"
        );

        use ArcDirection::*;
        use ArcPosition::*;
        let path = match (self.position, self.direction) {
            (Bottom, Outside) => Path::new()
                .m(0.0, 0.0)
                .l(0.0, h - ht)
                .q(w / 4.0, h, w / 2.0, h)
                .q(3.0 * w / 4.0, h, w, h - ht)
                .l(w, 0.0)
                .z(),
            (Bottom, Inside) => Path::new()
                .m(0.0, 0.0)
                .l(0.0, h)
                .q(w / 4.0, h - ht, w / 2.0, h - ht)
                .q(3.0 * w / 4.0, h - ht, w, h)
                .l(w, 0.0)
                .z(),
            (Top, Outside) => Path::new()
                .m(0.0, ht)
                .q(w / 4.0, 0.0, w / 2.0, 0.0)
                .q(3.0 * w / 4.0, 0.0, w, ht)
                .l(w, h)
                .l(0.0, h)
                .z(),
            (Top, Inside) => Path::new()
                .m(0.0, 0.0)
                .q(w / 4.0, ht, w / 2.0, ht)
                .q(3.0 * w / 4.0, ht, w, 0.0)
                .l(w, h)
                .l(0.0, h)
                .z(),
            (Left, Outside) => Path::new()
                .m(ht, 0.0)
                .q(0.0, h / 4.0, 0.0, h / 2.0)
                .q(0.0, 3.0 * h / 4.0, ht, h)
                .l(w, h)
                .l(w, 0.0)
                .z(),
            (Left, Inside) => Path::new()
                .m(0.0, 0.0)
                .q(ht, h / 4.0, ht, h / 2.0)
                .q(ht, 3.0 * h / 4.0, 0.0, h)
                .l(w, h)
                .l(w, 0.0)
                .z(),
            (Right, Outside) => Path::new()
                .m(w - ht, 0.0)
                .q(w, h / 4.0, w, h / 2.0)
                .q(w, 3.0 * h / 4.0, w - ht, h)
                .l(0.0, h)
                .l(0.0, 0.0)
                .z(),
            (Right, Inside) => Path::new()
                .m(w, 0.0)
                .q(w - ht, h / 4.0, w - ht, h / 2.0)
                .q(w - ht, 3.0 * h / 4.0, w, h)
                .l(0.0, h)
                .l(0.0, 0.0)
                .z(),
        };
        Ok(path)
    }
}

impl Hash for ArcShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
        self.direction.hash(state);
        state.write_u64(self.height.to_bits());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_arc_insets_the_body_and_reaches_the_edge() {
        let shape = ArcShape::new(ArcPosition::Bottom, ArcDirection::Outside, 20.0);
        let path = shape.build(Rect::from_size(100.0, 60.0), None).unwrap();
        assert_eq!(path.to_svg(), "M0,0L0,40Q25,60 50,60Q75,60 100,40L100,0Z");
        let bounds = path.bounds().unwrap();
        assert!((bounds.bottom - 60.0).abs() < 1e-9);
    }

    #[test]
    fn inside_arc_keeps_corners_and_dips_inward() {
        let shape = ArcShape::new(ArcPosition::Bottom, ArcDirection::Inside, 20.0);
        let path = shape.build(Rect::from_size(100.0, 60.0), None).unwrap();
        assert_eq!(path.to_svg(), "M0,0L0,60Q25,40 50,40Q75,40 100,60L100,0Z");
    }

    #[test]
    fn negative_height_behaves_like_its_magnitude() {
        let rect = Rect::from_size(100.0, 60.0);
        let a = ArcShape::new(ArcPosition::Top, ArcDirection::Outside, 15.0);
        let b = ArcShape::new(ArcPosition::Top, ArcDirection::Outside, -15.0);
        assert_eq!(a.build(rect, None).unwrap(), b.build(rect, None).unwrap());
    }

    #[test]
    fn every_layout_stays_within_the_rectangle() {
        use ArcDirection::*;
        use ArcPosition::*;
        let rect = Rect::from_size(90.0, 50.0);
        for position in [Top, Bottom, Left, Right] {
            for direction in [Inside, Outside] {
                let path = ArcShape::new(position, direction, 10.0)
                    .build(rect, None)
                    .unwrap();
                let bounds = path.bounds().unwrap();
                assert!(bounds.left >= -1e-9, "{position:?}/{direction:?}");
                assert!(bounds.top >= -1e-9, "{position:?}/{direction:?}");
                assert!(bounds.right <= 90.0 + 1e-9, "{position:?}/{direction:?}");
                assert!(bounds.bottom <= 50.0 + 1e-9, "{position:?}/{direction:?}");
            }
        }
    }
}
