//! Render parameters for the two kolam families.

use crate::errors::ConfigError;
use crate::selection::Selection;
use crate::symmetry::{Symmetry, SymmetrySet};
use crate::types::{try_finite, try_positive};

/// Parameters for a rectangular-grid kolam of rounded loops.
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Dot rows.
    pub rows: u32,
    /// Dot columns.
    pub cols: u32,
    pub spacing: f64,
    pub cell_selection: Selection,
    pub symmetry: SymmetrySet,
    /// Corner radius of each loop, in `[0, spacing / 2]`.
    pub loop_radius: f64,
    pub show_dots: bool,
    pub title: Option<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            spacing: 1.0,
            cell_selection: Selection::All,
            symmetry: SymmetrySet::none()
                .with(Symmetry::MirrorHorizontal)
                .with(Symmetry::MirrorVertical),
            loop_radius: 0.25,
            show_dots: true,
            title: None,
        }
    }
}

impl GridConfig {
    /// Every cell of a 5×5 grid, mirrored both ways.
    pub fn full_grid() -> Self {
        Self {
            loop_radius: 0.22,
            title: Some("Kolam - Full Grid".to_string()),
            ..Self::default()
        }
    }

    /// Alternating cells of a 7×7 grid with a half-turn.
    pub fn checkerboard() -> Self {
        Self {
            rows: 7,
            cols: 7,
            cell_selection: Selection::Checkerboard,
            symmetry: SymmetrySet::none().with(Symmetry::Rotate180),
            title: Some("Kolam - Checkerboard".to_string()),
            ..Self::default()
        }
    }

    /// A diamond of cells around the middle of a 9×9 grid, dots hidden.
    pub fn diamond_motif() -> Self {
        Self {
            rows: 9,
            cols: 9,
            spacing: 0.9,
            cell_selection: Selection::DiamondRadius(3),
            symmetry: SymmetrySet::all(),
            loop_radius: 0.18,
            show_dots: false,
            title: Some("Kolam - Diamond Motif".to_string()),
        }
    }

    /// Look up a preset by name: `full-grid`, `checkerboard` or `diamond`.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "full-grid" | "full" => Some(Self::full_grid()),
            "checkerboard" | "checker" => Some(Self::checkerboard()),
            "diamond" | "diamond-motif" => Some(Self::diamond_motif()),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 2 {
            return Err(ConfigError::TooFewRows { rows: self.rows });
        }
        if self.cols < 2 {
            return Err(ConfigError::TooFewColumns { cols: self.cols });
        }
        try_positive(self.spacing).map_err(|_| ConfigError::NonPositiveSpacing {
            value: self.spacing,
        })?;
        try_finite(self.loop_radius).map_err(|source| ConfigError::InvalidNumber {
            field: "loop_radius",
            source,
        })?;
        let max = self.spacing / 2.0;
        if !(0.0..=max).contains(&self.loop_radius) {
            return Err(ConfigError::LoopRadiusOutOfRange {
                radius: self.loop_radius,
                max,
            });
        }
        Ok(())
    }
}

/// Parameters for the diamond-lattice flower kolam.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowerConfig {
    pub spacing: f64,
    /// Radius of each lattice dot.
    pub dot_size: f64,
    /// Lattice half-extent `n`; the traditional layout uses 3.
    pub half_extent: u32,
    /// Outer arc radius in spacing units.
    pub arc_radius: f64,
    pub title: Option<String>,
}

impl Default for FlowerConfig {
    fn default() -> Self {
        Self {
            spacing: 1.0,
            dot_size: 0.07,
            half_extent: 3,
            arc_radius: 0.6,
            title: None,
        }
    }
}

impl FlowerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        try_positive(self.spacing).map_err(|_| ConfigError::NonPositiveSpacing {
            value: self.spacing,
        })?;
        try_positive(self.dot_size).map_err(|_| ConfigError::NonPositiveDotSize {
            value: self.dot_size,
        })?;
        if self.half_extent == 0 {
            return Err(ConfigError::InvalidHalfExtent {
                value: self.half_extent,
            });
        }
        try_positive(self.arc_radius).map_err(|_| ConfigError::NonPositiveArcRadius {
            value: self.arc_radius,
        })?;
        Ok(())
    }
}
