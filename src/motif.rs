//! Motif builders: what gets drawn in a selected cell.
//!
//! Each builder is its own type implementing [`MotifBuilder`]; [`MotifKind`]
//! wraps them for uniform storage.

use enum_dispatch::enum_dispatch;

use crate::errors::GeometryError;
use crate::geometry::{Direction, arc, rounded_rectangle};
use crate::lattice::LatticeCell;
use crate::path::Path;

/// Common behavior for all motifs
#[enum_dispatch]
pub trait MotifBuilder {
    /// Base paths for `cell`, before any symmetry is applied.
    ///
    /// An empty result means the cell gets nothing even though it was
    /// selected.
    fn build(&self, cell: &LatticeCell) -> Result<Vec<Path>, GeometryError>;
}

/// A rounded-rectangle loop centered on the cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedLoop {
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

impl RoundedLoop {
    /// Square loop that fills a cell of side `spacing`.
    pub fn square(spacing: f64, corner_radius: f64) -> Self {
        Self {
            width: spacing,
            height: spacing,
            corner_radius,
        }
    }
}

impl MotifBuilder for RoundedLoop {
    fn build(&self, cell: &LatticeCell) -> Result<Vec<Path>, GeometryError> {
        let path = rounded_rectangle(cell.center, self.width, self.height, self.corner_radius)?;
        Ok(vec![path])
    }
}

/// A semicircle bulging away from the origin, for cells on the axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OuterArc {
    pub radius: f64,
}

impl MotifBuilder for OuterArc {
    fn build(&self, cell: &LatticeCell) -> Result<Vec<Path>, GeometryError> {
        match Direction::outward(cell.i, cell.j) {
            Some(direction) => Ok(vec![arc(cell.center, self.radius, direction)?]),
            None => Ok(Vec::new()),
        }
    }
}

#[enum_dispatch(MotifBuilder)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotifKind {
    RoundedLoop,
    OuterArc,
}
