//! Logging for lattice building, motif placement and rendering.
//!
//! Built with the `tracing` feature these are the `tracing` macros. Without
//! it every call expands to nothing, arguments included, so the field
//! expressions at call sites are never evaluated.
//!
//! Levels used across the crate:
//! - `debug!` for per-stage summaries (lattice size, paths placed)
//! - `info!` once per finished document
//! - `warn!` for drawable but suspicious input, such as a selection that
//!   matched no cells

#[cfg(feature = "tracing")]
pub use tracing::{debug, info, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, info, warn};
