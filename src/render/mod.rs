//! Rendering a [`Scene`] onto a drawing surface
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and colors
//! - `svg`: Standalone SVG documents

pub mod defaults;
pub mod svg;

pub use svg::{SvgCanvas, SvgOptions};

use crate::scene::{Scene, StyledPath};
use crate::types::{BBox, Point};

/// A drawing surface. Calls arrive as `begin`, any number of `path` and
/// `dot`, then `finish`.
pub trait Canvas {
    type Output;

    fn begin(&mut self, bounds: BBox, title: Option<&str>);

    fn path(&mut self, path: &StyledPath);

    fn dot(&mut self, center: Point, radius: f64);

    fn finish(self) -> Self::Output;
}

/// Draw every path, then every dot on top.
pub fn draw_scene<C: Canvas>(scene: &Scene, mut canvas: C) -> C::Output {
    canvas.begin(scene.bounds(), scene.title.as_deref());
    for path in &scene.paths {
        canvas.path(path);
    }
    for &dot in &scene.dots {
        canvas.dot(dot, scene.dot_radius);
    }
    crate::log::debug!(
        paths = scene.paths.len(),
        dots = scene.dots.len(),
        "drew scene"
    );
    canvas.finish()
}
