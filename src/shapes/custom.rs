//! Host-supplied outline generators.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::errors::ShapeError;
use crate::path::Path;
use crate::types::Rect;

use super::{Shape, validate_rect};

type Builder = dyn Fn(Rect) -> Path + Send + Sync;

/// Wraps a caller-provided closure as a shape.
///
/// A default-constructed `CustomShape` has no generator; building it is an
/// `InvalidState` error rather than a silent empty clip.
///
/// Equality and hashing are by generator identity (the same `Arc`), since
/// closures cannot be compared structurally. Clones therefore compare equal
/// to their source, while two separately constructed shapes never do.
#[derive(Clone, Default)]
pub struct CustomShape {
    builder: Option<Arc<Builder>>,
}

impl CustomShape {
    pub fn new<F>(builder: F) -> CustomShape
    where
        F: Fn(Rect) -> Path + Send + Sync + 'static,
    {
        CustomShape {
            builder: Some(Arc::new(builder)),
        }
    }
}

impl Shape for CustomShape {
    fn build(&self, rect: Rect, _scale: Option<f64>) -> Result<Path, ShapeError> {
        validate_rect(&rect)?;
        let builder = self.builder.as_ref().ok_or_else(|| {
            ShapeError::invalid_state("custom shape has no outline generator".to_string())
        })?;
        Ok(builder(rect))
    }
}

impl fmt::Debug for CustomShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomShape")
            .field("builder", &self.builder.as_ref().map(Arc::as_ptr))
            .finish()
    }
}

impl PartialEq for CustomShape {
    fn eq(&self, other: &CustomShape) -> bool {
        match (&self.builder, &other.builder) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Hash for CustomShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.builder {
            Some(builder) => (Arc::as_ptr(builder) as *const () as usize).hash(state),
            None => 0usize.hash(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_output_is_returned_verbatim() {
        let shape = CustomShape::new(|rect| {
            Path::new()
                .m(0.0, 0.0)
                .l(rect.width(), 0.0)
                .l(0.0, rect.height())
                .z()
        });
        let path = shape.build(Rect::from_size(40.0, 20.0), None).unwrap();
        assert_eq!(path.to_svg(), "M0,0L40,0L0,20Z");
    }

    #[test]
    fn missing_generator_is_invalid_state() {
        let shape = CustomShape::default();
        assert!(matches!(
            shape.build(Rect::from_size(10.0, 10.0), None),
            Err(ShapeError::InvalidState { .. })
        ));
    }

    #[test]
    fn clones_share_identity_but_twins_do_not() {
        let generator = |rect: Rect| Path::new().m(0.0, 0.0).l(rect.width(), 0.0).z();
        let a = CustomShape::new(generator);
        let clone = a.clone();
        let b = CustomShape::new(generator);
        assert_eq!(a, clone);
        assert_ne!(a, b);
    }
}
