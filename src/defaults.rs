//! Default styling values, passed explicitly at construction (never ambient
//! state). All linear values are in the host's logical pixels.

use crate::types::Color;

pub const BORDER_COLOR: Color = Color::WHITE;
pub const BORDER_WIDTH: f64 = 0.0;

pub const BUBBLE_RADIUS: f64 = 12.0;
pub const BUBBLE_ARROW_WIDTH: f64 = 12.0;
pub const BUBBLE_ARROW_HEIGHT: f64 = 12.0;
pub const BUBBLE_ARROW_POSITION: f64 = 0.5;

pub const TRIANGLE_PERCENT_BOTTOM: f64 = 0.5;
pub const TRIANGLE_PERCENT_LEFT: f64 = 0.0;
pub const TRIANGLE_PERCENT_RIGHT: f64 = 0.0;
