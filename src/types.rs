//! Geometry value objects shared by every shape.
//!
//! Design goals:
//! - No raw angle units in domain logic (radians canonical, degrees convert
//!   on construction)
//! - Corner radii can never be negative
//! - Equality/hashing on bit patterns so shapes can be diffed across rebuilds

use std::fmt;
use std::hash::{Hash, Hasher};

/// Axis-aligned rectangle in a Y-down coordinate space.
///
/// Shapes build their outline in the rectangle's local space, with the
/// top-left corner at the origin. `right >= left` and `bottom >= top` is a
/// caller invariant; it is validated once per `build` call.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Rect {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// A rectangle with its top-left corner at the origin.
    pub fn from_size(width: f64, height: f64) -> Rect {
        Rect {
            left: 0.0,
            top: 0.0,
            right: width,
            bottom: height,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// The shorter of width and height.
    #[inline]
    pub fn min_dimension(&self) -> f64 {
        self.width().min(self.height())
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    /// All four edges are finite and the corners are correctly ordered.
    pub fn is_valid(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
            && self.right >= self.left
            && self.bottom >= self.top
    }
}

impl Hash for Rect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.left.to_bits());
        state.write_u64(self.top.to_bits());
        state.write_u64(self.right.to_bits());
        state.write_u64(self.bottom.to_bits());
    }
}

/// An angle, stored canonically in radians.
///
/// Two angles are equal iff their radian values are bit-identical, so an
/// angle constructed from degrees equals one constructed from the converted
/// radian value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub const fn radians(value: f64) -> Angle {
        Angle(value)
    }

    /// Converts to radians on construction.
    #[inline]
    pub fn degrees(value: f64) -> Angle {
        Angle(value.to_radians())
    }

    /// The canonical radian value.
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn abs(self) -> Angle {
        Angle(self.0.abs())
    }

    #[inline]
    pub fn tan(self) -> f64 {
        self.0.tan()
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Angle) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Angle {}

impl Hash for Angle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.to_bits());
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rad", self.0)
    }
}

/// Four independent corner radii, clamped to be non-negative.
///
/// Used by RoundRect (curvature), CutCorner (cut extent) and Bubble (body
/// rounding). Overlap between adjacent corners is deliberately not
/// validated; shapes that care clamp against the rectangle at build time.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CornerRadius {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadius {
    pub const ZERO: CornerRadius = CornerRadius {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    /// Per-corner radii; negative values clamp to zero.
    pub fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> CornerRadius {
        CornerRadius {
            top_left: top_left.max(0.0),
            top_right: top_right.max(0.0),
            bottom_right: bottom_right.max(0.0),
            bottom_left: bottom_left.max(0.0),
        }
    }

    /// The same radius on all four corners.
    pub fn uniform(radius: f64) -> CornerRadius {
        Self::new(radius, radius, radius, radius)
    }

    /// Clamp every corner to at most `max` (half the shorter rectangle
    /// dimension, for shapes that must avoid corner overflow).
    pub(crate) fn clamped_to(self, max: f64) -> CornerRadius {
        CornerRadius {
            top_left: self.top_left.min(max),
            top_right: self.top_right.min(max),
            bottom_right: self.bottom_right.min(max),
            bottom_left: self.bottom_left.min(max),
        }
    }
}

impl Hash for CornerRadius {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.top_left.to_bits());
        state.write_u64(self.top_right.to_bits());
        state.write_u64(self.bottom_right.to_bits());
        state.write_u64(self.bottom_left.to_bits());
    }
}

/// 8-bit RGBA color for border strokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn rect_dimensions() {
        let rect = Rect::from_size(120.0, 60.0);
        assert_eq!(rect.width(), 120.0);
        assert_eq!(rect.height(), 60.0);
        assert_eq!(rect.min_dimension(), 60.0);
        assert_eq!(rect.center_x(), 60.0);
        assert_eq!(rect.center_y(), 30.0);
    }

    #[test]
    fn rect_validity() {
        assert!(Rect::from_size(10.0, 10.0).is_valid());
        assert!(Rect::ZERO.is_valid());
        assert!(!Rect::new(10.0, 0.0, 0.0, 10.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, f64::NAN, 10.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, f64::INFINITY, 10.0).is_valid());
    }

    #[test]
    fn angle_degrees_converts_to_radians() {
        assert_eq!(Angle::degrees(180.0), Angle::radians(std::f64::consts::PI));
        assert_eq!(Angle::degrees(0.0), Angle::ZERO);
    }

    #[test]
    fn angle_equality_and_hash_on_bits() {
        let a = Angle::degrees(45.0);
        let b = Angle::radians(45.0_f64.to_radians());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(Angle::degrees(45.0), Angle::degrees(45.000001));
    }

    #[test]
    fn corner_radius_clamps_negative() {
        let radius = CornerRadius::new(-5.0, 10.0, -0.1, 2.0);
        assert_eq!(radius.top_left, 0.0);
        assert_eq!(radius.top_right, 10.0);
        assert_eq!(radius.bottom_right, 0.0);
        assert_eq!(radius.bottom_left, 2.0);
    }

    #[test]
    fn corner_radius_clamped_to_max() {
        let radius = CornerRadius::uniform(40.0).clamped_to(25.0);
        assert_eq!(radius, CornerRadius::uniform(25.0));
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::WHITE.to_string(), "rgba(255,255,255,255)");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "rgba(1,2,3,4)");
    }
}
