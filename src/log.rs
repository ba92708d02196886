//! Optional debug logging for outline building and border painting.
//!
//! With the `tracing` feature the macro forwards to `tracing::debug!`;
//! without it the call sites compile away entirely.

#[cfg(feature = "tracing")]
pub use tracing::debug;

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::debug;
