//! Dot lattices and their cells.
//!
//! Two shapes are supported:
//!
//! - **Rectangular**: a `rows × cols` grid of dots centered on the origin.
//!   Cells sit between dots, so there are `(rows-1) × (cols-1)` of them.
//! - **Diamond**: the integer sites `(i, j)` with `|i|, |j| <= n` and
//!   `|i| + |j| <= 2n - 1`. Each dot is also a cell, addressed by its signed
//!   indices.
//!
//! Both are built once per render call and never mutated afterwards.

use glam::dvec2;

use crate::errors::ConfigError;
use crate::types::{Point, try_positive};

/// Which builder produced a lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatticeShape {
    /// `rows` and `cols` count dots, not cells.
    Rectangular { rows: u32, cols: u32 },
    Diamond { half_extent: u32 },
}

/// One addressable cell and its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeCell {
    pub i: i32,
    pub j: i32,
    pub center: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    shape: LatticeShape,
    spacing: f64,
    dots: Vec<Point>,
    /// Row-major.
    cells: Vec<LatticeCell>,
}

fn check_spacing(spacing: f64) -> Result<f64, ConfigError> {
    try_positive(spacing).map_err(|_| ConfigError::NonPositiveSpacing { value: spacing })
}

/// Cells between `rows × cols` dots. Widened first: the product of two
/// `u32` dimensions can exceed `u32::MAX`.
fn cell_count(rows: u32, cols: u32) -> usize {
    (rows as usize - 1) * (cols as usize - 1)
}

impl Lattice {
    /// Rectangular grid of `rows × cols` dots with the grid mean at the origin.
    ///
    /// Dot `(r, c)` sits at `(c·s − mean_x, r·s − mean_y)`; dots are listed
    /// row by row.
    pub fn rectangular(rows: u32, cols: u32, spacing: f64) -> Result<Self, ConfigError> {
        if rows < 2 {
            return Err(ConfigError::TooFewRows { rows });
        }
        if cols < 2 {
            return Err(ConfigError::TooFewColumns { cols });
        }
        let spacing = check_spacing(spacing)?;

        let mean_x = (cols - 1) as f64 * spacing / 2.0;
        let mean_y = (rows - 1) as f64 * spacing / 2.0;
        let xs: Vec<f64> = (0..cols).map(|c| c as f64 * spacing - mean_x).collect();
        let ys: Vec<f64> = (0..rows).map(|r| r as f64 * spacing - mean_y).collect();

        let dots = ys
            .iter()
            .flat_map(|&y| xs.iter().map(move |&x| dvec2(x, y)))
            .collect();

        let mut cells = Vec::with_capacity(cell_count(rows, cols));
        for i in 0..rows as usize - 1 {
            for j in 0..cols as usize - 1 {
                cells.push(LatticeCell {
                    i: i as i32,
                    j: j as i32,
                    center: dvec2((xs[j] + xs[j + 1]) / 2.0, (ys[i] + ys[i + 1]) / 2.0),
                });
            }
        }

        crate::log::debug!(rows, cols, spacing, cells = cells.len(), "rectangular lattice");

        Ok(Self {
            shape: LatticeShape::Rectangular { rows, cols },
            spacing,
            dots,
            cells,
        })
    }

    /// Diamond-bounded lattice of half-extent `n`.
    ///
    /// Sites are enumerated with `i` outer and `j` inner, and dot `(i, j)`
    /// sits at `(i·s, j·s)`. Only `n = 3` has been checked against the
    /// traditional layout (45 dots).
    pub fn diamond(half_extent: u32, spacing: f64) -> Result<Self, ConfigError> {
        if half_extent == 0 {
            return Err(ConfigError::InvalidHalfExtent { value: half_extent });
        }
        let spacing = check_spacing(spacing)?;

        let n = half_extent as i32;
        let bound = 2 * n - 1;
        let cells: Vec<LatticeCell> = (-n..=n)
            .flat_map(|i| (-n..=n).map(move |j| (i, j)))
            .filter(|(i, j)| i.abs() + j.abs() <= bound)
            .map(|(i, j)| LatticeCell {
                i,
                j,
                center: dvec2(i as f64 * spacing, j as f64 * spacing),
            })
            .collect();
        let dots = cells.iter().map(|c| c.center).collect();

        crate::log::debug!(half_extent, spacing, dots = cells.len(), "diamond lattice");

        Ok(Self {
            shape: LatticeShape::Diamond { half_extent },
            spacing,
            dots,
            cells,
        })
    }

    pub fn shape(&self) -> LatticeShape {
        self.shape
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn dots(&self) -> &[Point] {
        &self.dots
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[LatticeCell] {
        &self.cells
    }

    /// Look up a cell by its indices.
    pub fn cell(&self, i: i32, j: i32) -> Option<&LatticeCell> {
        match self.shape {
            LatticeShape::Rectangular { .. } => {
                let (cell_rows, cell_cols) = self.cell_dims()?;
                if i < 0 || j < 0 || i >= cell_rows || j >= cell_cols {
                    return None;
                }
                self.cells.get((i * cell_cols + j) as usize)
            }
            LatticeShape::Diamond { .. } => self.cells.iter().find(|c| c.i == i && c.j == j),
        }
    }

    /// Number of cell rows and columns for the rectangular shape.
    pub fn cell_dims(&self) -> Option<(i32, i32)> {
        match self.shape {
            LatticeShape::Rectangular { rows, cols } => Some((rows as i32 - 1, cols as i32 - 1)),
            LatticeShape::Diamond { .. } => None,
        }
    }

    /// Whether `(i, j)` lies on the outermost ring of cells.
    pub fn is_border(&self, i: i32, j: i32) -> bool {
        match self.shape {
            LatticeShape::Rectangular { rows, cols } => {
                i == 0 || j == 0 || i == rows as i32 - 2 || j == cols as i32 - 2
            }
            LatticeShape::Diamond { half_extent } => {
                let n = half_extent as i32;
                i.abs() + j.abs() == 2 * n - 1 || i.abs() == n || j.abs() == n
            }
        }
    }

    /// Index of the middle cell, used for distance-based selection.
    pub fn center_index(&self) -> (i32, i32) {
        match self.shape {
            LatticeShape::Rectangular { rows, cols } => ((rows as i32 - 1) / 2, (cols as i32 - 1) / 2),
            LatticeShape::Diamond { .. } => (0, 0),
        }
    }
}
