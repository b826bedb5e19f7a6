//! Which lattice cells receive a motif.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::errors::ConfigError;
use crate::lattice::{Lattice, LatticeCell};

/// Caller-supplied rule over zero-based cell indices.
pub type CellPredicate = Arc<dyn Fn(i32, i32) -> bool + Send + Sync>;

/// Cell selection rule, evaluated once per cell during placement.
#[derive(Clone, Default)]
pub enum Selection {
    #[default]
    All,
    /// Cells where `i + j` is even.
    Checkerboard,
    /// The outermost ring of cells.
    Border,
    /// Cells within this Manhattan distance of the lattice's middle cell.
    DiamondRadius(u32),
    Custom(CellPredicate),
}

impl Selection {
    /// Wrap a closure as [`Selection::Custom`].
    pub fn custom(predicate: impl Fn(i32, i32) -> bool + Send + Sync + 'static) -> Self {
        Selection::Custom(Arc::new(predicate))
    }

    pub fn decide(&self, cell: &LatticeCell, lattice: &Lattice) -> bool {
        let (i, j) = (cell.i, cell.j);
        match self {
            Selection::All => true,
            Selection::Checkerboard => (i + j).rem_euclid(2) == 0,
            Selection::Border => lattice.is_border(i, j),
            Selection::DiamondRadius(radius) => {
                let (ci, cj) = lattice.center_index();
                (i - ci).unsigned_abs() + (j - cj).unsigned_abs() <= *radius
            }
            Selection::Custom(predicate) => predicate(i, j),
        }
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "All"),
            Selection::Checkerboard => write!(f, "Checkerboard"),
            Selection::Border => write!(f, "Border"),
            Selection::DiamondRadius(r) => f.debug_tuple("DiamondRadius").field(r).finish(),
            Selection::Custom(_) => write!(f, "Custom(<fn>)"),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "all"),
            Selection::Checkerboard => write!(f, "checker"),
            Selection::Border => write!(f, "border"),
            Selection::DiamondRadius(r) => write!(f, "diamond:{r}"),
            Selection::Custom(_) => write!(f, "custom"),
        }
    }
}

impl FromStr for Selection {
    type Err = ConfigError;

    /// Parse `all`, `checker`, `border` or `diamond:<radius>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let unknown = || ConfigError::UnknownSelection {
            token: token.to_string(),
        };
        match token.to_ascii_lowercase().as_str() {
            "all" => Ok(Selection::All),
            "checker" | "checkerboard" => Ok(Selection::Checkerboard),
            "border" => Ok(Selection::Border),
            other => {
                let radius = other
                    .strip_prefix("diamond:")
                    .or_else(|| other.strip_prefix("diamond-radius:"))
                    .ok_or_else(unknown)?;
                radius
                    .trim()
                    .parse::<u32>()
                    .map(Selection::DiamondRadius)
                    .map_err(|_| unknown())
            }
        }
    }
}
