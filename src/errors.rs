//! Error types with diagnostics using miette
//!
//! Configuration problems are caught before any geometry is built; geometry
//! errors signal an invariant that validation should already have ruled out.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Invalid numeric parameters or unrecognized tokens
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("spacing must be positive, got {value}")]
    #[diagnostic(code(kolamru::config::spacing))]
    NonPositiveSpacing { value: f64 },

    #[error("a grid needs at least 2 rows of dots, got {rows}")]
    #[diagnostic(code(kolamru::config::rows))]
    TooFewRows { rows: u32 },

    #[error("a grid needs at least 2 columns of dots, got {cols}")]
    #[diagnostic(code(kolamru::config::cols))]
    TooFewColumns { cols: u32 },

    #[error("loop radius {radius} is outside [0, {max}]")]
    #[diagnostic(
        code(kolamru::config::loop_radius),
        help("the corner radius may be at most half the spacing")
    )]
    LoopRadiusOutOfRange { radius: f64, max: f64 },

    #[error("dot size must be positive, got {value}")]
    #[diagnostic(code(kolamru::config::dot_size))]
    NonPositiveDotSize { value: f64 },

    #[error("arc radius must be positive, got {value}")]
    #[diagnostic(code(kolamru::config::arc_radius))]
    NonPositiveArcRadius { value: f64 },

    #[error("diamond half-extent must be at least 1, got {value}")]
    #[diagnostic(code(kolamru::config::half_extent))]
    InvalidHalfExtent { value: u32 },

    #[error("unknown cell selection: {token:?}")]
    #[diagnostic(
        code(kolamru::config::unknown_selection),
        help("expected one of: all, checker, border, diamond:<radius>")
    )]
    UnknownSelection { token: String },

    #[error("unknown symmetry: {token:?}")]
    #[diagnostic(
        code(kolamru::config::unknown_symmetry),
        help("expected a comma-separated subset of: h, v, rot")
    )]
    UnknownSymmetry { token: String },

    #[error("invalid value for {field}: {source}")]
    #[diagnostic(code(kolamru::config::invalid_number))]
    InvalidNumber {
        field: &'static str,
        #[source]
        source: NumericError,
    },
}

// ============================================================================
// Geometry Errors
// ============================================================================

/// Invariant violations inside the curve primitives
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("radius must be positive, got {radius}")]
    #[diagnostic(code(kolamru::geometry::radius))]
    NonPositiveRadius { radius: f64 },

    #[error("rectangle size must be positive, got {width}x{height}")]
    #[diagnostic(code(kolamru::geometry::size))]
    NonPositiveSize { width: f64, height: f64 },

    #[error("corner radius {radius} is outside [0, {max}]")]
    #[diagnostic(code(kolamru::geometry::corner_radius))]
    CornerRadiusOutOfRange { radius: f64, max: f64 },

    #[error("non-finite coordinate in {what}")]
    #[diagnostic(code(kolamru::geometry::non_finite))]
    NonFinite { what: &'static str },

    #[error("{what} needs at least {min} points, got {got}")]
    #[diagnostic(code(kolamru::geometry::too_few_points))]
    TooFewPoints {
        what: &'static str,
        min: usize,
        got: usize,
    },
}

// ============================================================================
// Top-level
// ============================================================================

/// Anything that aborts a render call
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum KolamError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Geometry(#[from] GeometryError),
}

impl KolamError {
    pub fn is_config(&self) -> bool {
        matches!(self, KolamError::Config(_))
    }
}
