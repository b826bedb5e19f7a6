//! The finished drawing: dots plus styled paths, ready for a [`crate::render::Canvas`].

use crate::path::Path;
use crate::types::{BBox, Point};

/// Stroke width used for loops and arcs, in output units.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// How one path is stroked. Fill is always none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStyle {
    pub stroke_width: f64,
    /// Join the last point back to the first.
    pub closed: bool,
}

impl PathStyle {
    pub fn open(stroke_width: f64) -> Self {
        Self {
            stroke_width,
            closed: false,
        }
    }

    pub fn closed(stroke_width: f64) -> Self {
        Self {
            stroke_width,
            closed: true,
        }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::open(DEFAULT_STROKE_WIDTH)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyledPath {
    pub path: Path,
    pub style: PathStyle,
}

impl StyledPath {
    pub fn new(path: Path, style: PathStyle) -> Self {
        Self { path, style }
    }
}

/// Everything a canvas needs to draw one kolam.
///
/// Paths are kept in placement order; canvases draw them first and the dots
/// on top.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub dots: Vec<Point>,
    pub dot_radius: f64,
    pub paths: Vec<StyledPath>,
    pub title: Option<String>,
}

impl Scene {
    /// Axis-aligned box around every dot disc and every path vertex,
    /// control points included.
    pub fn bounds(&self) -> BBox {
        let mut bbox = BBox::new();
        for &dot in &self.dots {
            bbox.expand_disc(dot, self.dot_radius);
        }
        for styled in &self.paths {
            for p in styled.path.vertices() {
                bbox.expand_point(p);
            }
        }
        bbox
    }

    /// Total number of vertices across all paths.
    pub fn vertex_count(&self) -> usize {
        self.paths.iter().map(|p| p.path.vertices().len()).sum()
    }
}
