//! Procedural kolam line art.
//!
//! A kolam is drawn over a lattice of dots. This crate builds the lattice,
//! picks cells with a [`Selection`], drops a motif into each picked cell,
//! mirrors it through a [`SymmetrySet`], and hands the result to a
//! [`render::Canvas`] as a [`Scene`].
//!
//! ```
//! use kolamru::{GridConfig, grid_kolam_svg};
//!
//! let svg = grid_kolam_svg(&GridConfig::checkerboard()).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod config;
pub mod errors;
pub mod geometry;
pub mod lattice;
pub mod log;
pub mod motif;
pub mod path;
pub mod placer;
pub mod render;
pub mod scene;
pub mod selection;
pub mod symmetry;
pub mod types;

pub use config::{FlowerConfig, GridConfig};
pub use errors::{ConfigError, GeometryError, KolamError};
pub use geometry::{Direction, arc, circle, polygon, rounded_rectangle, spokes};
pub use lattice::{Lattice, LatticeCell, LatticeShape};
pub use motif::{MotifBuilder, MotifKind, OuterArc, RoundedLoop};
pub use path::{Path, PathSegment, SegmentKind};
pub use placer::{central_ornament, place_motifs};
pub use render::{Canvas, SvgCanvas, SvgOptions, draw_scene};
pub use scene::{PathStyle, Scene, StyledPath};
pub use selection::Selection;
pub use symmetry::{Symmetry, SymmetrySet};
pub use types::{BBox, Point, pt};

use crate::scene::DEFAULT_STROKE_WIDTH;

/// Rounded loops over a rectangular dot grid.
///
/// The config is validated before any geometry is built.
pub fn grid_kolam(config: &GridConfig) -> Result<Scene, KolamError> {
    config.validate()?;
    let lattice = Lattice::rectangular(config.rows, config.cols, config.spacing)?;
    let motif: MotifKind = RoundedLoop::square(config.spacing, config.loop_radius).into();

    let mut scene = place_motifs(
        &lattice,
        &config.cell_selection,
        config.symmetry,
        &motif,
        PathStyle::open(DEFAULT_STROKE_WIDTH),
    )?;
    if !config.show_dots {
        scene.dots.clear();
    }
    scene.dot_radius = render::defaults::GRID_DOT_RADIUS * config.spacing;
    scene.title = config.title.clone();

    crate::log::debug!(
        rows = config.rows,
        cols = config.cols,
        paths = scene.paths.len(),
        "grid kolam"
    );
    Ok(scene)
}

/// Outer arcs on a diamond lattice around a fixed central flower.
pub fn flower_kolam(config: &FlowerConfig) -> Result<Scene, KolamError> {
    config.validate()?;
    let lattice = Lattice::diamond(config.half_extent, config.spacing)?;

    let n = config.half_extent as i32;
    let outer_axis = Selection::custom(move |i, j| i.abs() + j.abs() == n && (i == 0 || j == 0));
    let motif: MotifKind = OuterArc {
        radius: config.arc_radius * config.spacing,
    }
    .into();

    let mut scene = place_motifs(
        &lattice,
        &outer_axis,
        SymmetrySet::none(),
        &motif,
        PathStyle::open(DEFAULT_STROKE_WIDTH),
    )?;
    scene.paths.extend(central_ornament(config.spacing)?);
    scene.dot_radius = config.dot_size * config.spacing;
    scene.title = config.title.clone();

    crate::log::debug!(
        half_extent = config.half_extent,
        paths = scene.paths.len(),
        "flower kolam"
    );
    Ok(scene)
}

/// [`grid_kolam`] rendered with default [`SvgOptions`].
pub fn grid_kolam_svg(config: &GridConfig) -> Result<String, KolamError> {
    Ok(render::svg::render_svg(&grid_kolam(config)?, SvgOptions::default()))
}

/// [`flower_kolam`] rendered with default [`SvgOptions`].
pub fn flower_kolam_svg(config: &FlowerConfig) -> Result<String, KolamError> {
    Ok(render::svg::render_svg(&flower_kolam(config)?, SvgOptions::default()))
}
