//! Default sizes and colors (drawing units unless noted)

/// Pixels per drawing unit.
pub const SCALE: f64 = 60.0;
/// Blank border around the drawing, in drawing units.
pub const MARGIN: f64 = 0.5;
pub const STROKE: &str = "black";
pub const DOT_FILL: &str = "orange";
pub const BACKGROUND: &str = "white";
/// Dot radius for grid kolams, in spacing units.
pub const GRID_DOT_RADIUS: f64 = 0.05;
/// Title font size in pixels.
pub const FONT_SIZE: f64 = 16.0;
/// Decimal places kept in emitted coordinates.
pub const PRECISION: usize = 3;
