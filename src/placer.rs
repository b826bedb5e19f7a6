//! Walks a lattice, places motifs in selected cells and mirrors them.

use glam::dvec2;

use crate::errors::{GeometryError, KolamError};
use crate::geometry::{circle, polygon, spokes};
use crate::lattice::Lattice;
use crate::motif::{MotifBuilder, MotifKind};
use crate::scene::{PathStyle, Scene, StyledPath};
use crate::selection::Selection;
use crate::symmetry::SymmetrySet;
use crate::types::pt;

/// Ornament circle and spoke length, in spacing units.
pub const ORNAMENT_RADIUS: f64 = 0.4;
pub const ORNAMENT_SPOKES: usize = 12;
pub const SPOKE_STROKE_WIDTH: f64 = 1.0;

/// Build a scene from `lattice`.
///
/// Every dot is copied in order. Cells are visited row-major; for each
/// selected cell the motif's base paths are appended, then one copy per
/// symmetry in set order. Symmetries are applied to the base path, never
/// to each other's output.
///
/// The first geometry error aborts the call.
pub fn place_motifs(
    lattice: &Lattice,
    selection: &Selection,
    symmetries: SymmetrySet,
    motif: &MotifKind,
    style: PathStyle,
) -> Result<Scene, KolamError> {
    let mut scene = Scene {
        dots: lattice.dots().to_vec(),
        ..Scene::default()
    };

    let mut selected = 0usize;
    for cell in lattice.cells() {
        if !selection.decide(cell, lattice) {
            continue;
        }
        selected += 1;
        for base in motif.build(cell)? {
            let mirrored: Vec<_> = symmetries.iter().map(|s| s.transform(&base)).collect();
            scene.paths.push(StyledPath::new(base, style));
            scene
                .paths
                .extend(mirrored.into_iter().map(|path| StyledPath::new(path, style)));
        }
    }

    if selected == 0 {
        crate::log::warn!(%selection, "selection matched no cells");
    }
    crate::log::debug!(
        cells = lattice.cells().len(),
        selected,
        paths = scene.paths.len(),
        "placed motifs"
    );

    Ok(scene)
}

/// The fixed center of the flower kolam: a diamond outline, a circle and
/// twelve spokes, all scaled by `spacing`.
pub fn central_ornament(spacing: f64) -> Result<Vec<StyledPath>, GeometryError> {
    let s = spacing;
    let diamond = polygon(&[pt(0.0, s), pt(s, 0.0), pt(0.0, -s), pt(-s, 0.0)])?;
    let ring = circle(dvec2(0.0, 0.0), ORNAMENT_RADIUS * s)?;
    let rays = spokes(dvec2(0.0, 0.0), ORNAMENT_RADIUS * s, ORNAMENT_SPOKES)?;

    Ok(vec![
        StyledPath::new(diamond, PathStyle::closed(crate::scene::DEFAULT_STROKE_WIDTH)),
        StyledPath::new(ring, PathStyle::closed(crate::scene::DEFAULT_STROKE_WIDTH)),
        StyledPath::new(rays, PathStyle::open(SPOKE_STROKE_WIDTH)),
    ])
}
