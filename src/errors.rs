//! Error types with diagnostic codes using miette.
//!
//! Everything here is a programmer error surfaced to the caller; nothing is
//! retried or recovered internally. Construction-time parameters (star point
//! count, polygon side count) fail eagerly at construction; per-call
//! parameters (the rectangle) fail at build time.

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced by shape construction and path building.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A required input was missing or out of range.
    #[error("invalid argument: {message}")]
    #[diagnostic(code(shapeclip::invalid_argument))]
    InvalidArgument { message: String },

    /// A shape was asked to build while not fully configured.
    #[error("invalid state: {message}")]
    #[diagnostic(code(shapeclip::invalid_state))]
    InvalidState { message: String },
}

impl ShapeError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> ShapeError {
        ShapeError::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_state(message: impl Into<String>) -> ShapeError {
        ShapeError::InvalidState {
            message: message.into(),
        }
    }
}
