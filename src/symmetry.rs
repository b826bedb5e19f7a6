//! Mirror and rotation transforms applied to whole paths.

use std::fmt;
use std::str::FromStr;

use glam::dvec2;

use crate::errors::ConfigError;
use crate::path::Path;
use crate::types::Point;

/// A reflection or half-turn about the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// `(x, y) -> (x, -y)`
    MirrorHorizontal,
    /// `(x, y) -> (-x, y)`
    MirrorVertical,
    /// `(x, y) -> (-x, -y)`
    Rotate180,
}

/// Sign vectors, indexed by `Symmetry as usize`.
const SIGNS: [(f64, f64); 3] = [(1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)];

impl Symmetry {
    pub const ALL: [Symmetry; 3] = [
        Symmetry::MirrorHorizontal,
        Symmetry::MirrorVertical,
        Symmetry::Rotate180,
    ];

    fn signs(self) -> Point {
        let (sx, sy) = SIGNS[self as usize];
        dvec2(sx, sy)
    }

    pub fn apply(self, p: Point) -> Point {
        p * self.signs()
    }

    /// Transform every point of every segment, control points included.
    pub fn transform(self, path: &Path) -> Path {
        let signs = self.signs();
        path.map_points(|p| p * signs)
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Symmetry::MirrorHorizontal => "h",
            Symmetry::MirrorVertical => "v",
            Symmetry::Rotate180 => "rot",
        })
    }
}

impl FromStr for Symmetry {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Ok(Symmetry::MirrorHorizontal),
            "v" | "vertical" => Ok(Symmetry::MirrorVertical),
            "rot" | "rotate" => Ok(Symmetry::Rotate180),
            _ => Err(ConfigError::UnknownSymmetry {
                token: s.trim().to_string(),
            }),
        }
    }
}

/// A subset of [`Symmetry`]. Iteration order is always horizontal, vertical,
/// rotation, regardless of insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SymmetrySet {
    bits: u8,
}

impl SymmetrySet {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Symmetry::ALL.into_iter().collect()
    }

    pub fn with(mut self, symmetry: Symmetry) -> Self {
        self.insert(symmetry);
        self
    }

    pub fn insert(&mut self, symmetry: Symmetry) {
        self.bits |= symmetry.bit();
    }

    pub fn contains(&self, symmetry: Symmetry) -> bool {
        self.bits & symmetry.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Symmetry> + '_ {
        Symmetry::ALL.into_iter().filter(|s| self.contains(*s))
    }
}

impl FromIterator<Symmetry> for SymmetrySet {
    fn from_iter<I: IntoIterator<Item = Symmetry>>(iter: I) -> Self {
        let mut set = SymmetrySet::none();
        for s in iter {
            set.insert(s);
        }
        set
    }
}

impl fmt::Display for SymmetrySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, s) in self.iter().enumerate() {
            if n > 0 {
                f.write_str(",")?;
            }
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

impl FromStr for SymmetrySet {
    type Err = ConfigError;

    /// Comma-separated tokens; an empty string is the empty set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(SymmetrySet::none());
        }
        s.split(',').map(str::parse::<Symmetry>).collect()
    }
}
