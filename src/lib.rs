//! shapeclip builds shaped clipping outlines for rectangular UI containers.
//!
//! Every shape is an immutable configuration value; handing it a rectangle
//! produces a closed [`path::Path`] that a host framework can clip or stroke.
//! Nothing here rasterizes: drawing happens behind the host-implemented
//! [`canvas::Canvas`] trait.
//!
//! ```
//! use shapeclip::shapes::{Shape, StarShape};
//! use shapeclip::types::Rect;
//!
//! let star = StarShape::new(5)?;
//! let path = star.build(Rect::from_size(120.0, 120.0), None)?;
//! assert!(path.is_closed());
//! # Ok::<(), shapeclip::errors::ShapeError>(())
//! ```
//!
//! Hosts whose clipping goes through a border abstraction wrap any shape in
//! [`border::ShapeBorder`], which exposes the outline as the border's outer
//! path and paints the decorative stroke for the shapes that carry one.

pub mod border;
pub mod canvas;
pub mod defaults;
pub mod errors;
pub mod log;
pub mod path;
pub mod shapes;
pub mod types;

pub use border::ShapeBorder;
pub use canvas::{Canvas, Stroke};
pub use errors::ShapeError;
pub use path::{Path, PathCmd};
pub use shapes::{AnyShape, BorderShape, Shape};
pub use types::{Angle, Color, CornerRadius, Rect};
