//! Rectangle with corners cut off by straight 45-degree chamfers.

use std::hash::{Hash, Hasher};

use crate::errors::ShapeError;
use crate::path::Path;
use crate::types::{CornerRadius, Rect};

use super::{Shape, validate_rect};

/// Clips to a rectangle whose corners are truncated by straight diagonal
/// segments. Each corner's cut length comes from the corresponding radius,
/// non-negative by construction but otherwise taken as given: cuts larger
/// than the rectangle produce a self-intersecting outline.
#[derive(Clone, Debug, PartialEq)]
pub struct CutCornerShape {
    pub radius: CornerRadius,
}

impl CutCornerShape {
    pub fn new(radius: CornerRadius) -> CutCornerShape {
        CutCornerShape { radius }
    }
}

impl Shape for CutCornerShape {
    fn build(&self, rect: Rect, _scale: Option<f64>) -> Result<Path, ShapeError> {
        validate_rect(&rect)?;
        let (l, t, r, b) = (rect.left, rect.top, rect.right, rect.bottom);
        let cr = self.radius;
        let (tl, tr, br, bl) = (cr.top_left, cr.top_right, cr.bottom_right, cr.bottom_left);

        Ok(Path::new()
            .m(l + tl, t)
            .l(r - tr, t)
            .l(r, t + tr)
            .l(r, b - br)
            .l(r - br, b)
            .l(l + bl, b)
            .l(l, b - bl)
            .l(l, t + tl)
            .z())
    }
}

impl Hash for CutCornerShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.radius.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCmd;

    #[test]
    fn uniform_cut_produces_an_octagon() {
        let path = CutCornerShape::new(CornerRadius::uniform(10.0))
            .build(Rect::from_size(100.0, 50.0), None)
            .unwrap();
        assert_eq!(
            path.to_svg(),
            "M10,0L90,0L100,10L100,40L90,50L10,50L0,40L0,10Z"
        );
    }

    #[test]
    fn zero_cut_degenerates_to_the_rectangle() {
        let path = CutCornerShape::new(CornerRadius::uniform(0.0))
            .build(Rect::from_size(60.0, 40.0), None)
            .unwrap();
        // Duplicate corner vertices collapse, the outline stays rectangular.
        assert_eq!(path.bounds(), Some(Rect::from_size(60.0, 40.0)));
        assert!(path.is_closed());
    }

    #[test]
    fn oversized_cuts_are_taken_as_given() {
        let path = CutCornerShape::new(CornerRadius::uniform(60.0))
            .build(Rect::from_size(100.0, 40.0), None)
            .unwrap();
        // No cross-clamping: the extent stays 60 even past the rectangle.
        match path.commands()[0] {
            PathCmd::MoveTo(p) => assert_eq!((p.x, p.y), (60.0, 0.0)),
            ref other => panic!("expected move, got {other:?}"),
        }
        assert_eq!(
            path.to_svg(),
            "M60,0L40,0L100,60L100,-20L40,40L60,40L0,-20L0,60Z"
        );
    }
}
