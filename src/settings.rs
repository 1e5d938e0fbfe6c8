use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BingoError;

/// Card dimensions offered by the settings page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum GridSize {
    Three,
    #[default]
    Five,
    Seven,
}

impl GridSize {
    pub const ALL: [GridSize; 3] = [GridSize::Three, GridSize::Five, GridSize::Seven];

    pub fn dimension(&self) -> usize {
        match self {
            Self::Three => 3,
            Self::Five => 5,
            Self::Seven => 7,
        }
    }

    pub fn from_dimension(n: usize) -> Result<Self, BingoError> {
        Self::ALL
            .into_iter()
            .find(|size| size.dimension() == n)
            .ok_or_else(|| BingoError::InvalidGridSize(n.to_string()))
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dimension();
        write!(f, "{n}x{n}")
    }
}

/// Accepts `"5x5"` as well as a bare `"5"`.
impl FromStr for GridSize {
    type Err = BingoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BingoError::InvalidGridSize(s.to_string());
        let trimmed = s.trim();
        let n = match trimmed.split_once('x') {
            Some((rows, cols)) if rows == cols => rows,
            Some(_) => return Err(invalid()),
            None => trimmed,
        };
        let n: usize = n.parse().map_err(|_| invalid())?;
        Self::from_dimension(n).map_err(|_| invalid())
    }
}

impl From<GridSize> for String {
    fn from(size: GridSize) -> Self {
        size.to_string()
    }
}

impl TryFrom<String> for GridSize {
    type Error = BingoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Player-facing card settings.
///
/// Missing keys fall back to the defaults (5x5 with a free center).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid_size: GridSize,
    /// Odd grids only: the center tile reads `FREE` instead of an item.
    pub free_center: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: GridSize::default(),
            free_center: true,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, BingoError> {
        serde_json::from_str(json).map_err(|e| BingoError::InvalidSettings(e.to_string()))
    }

    pub fn dimension(&self) -> usize {
        self.grid_size.dimension()
    }

    /// Whether the card built from these settings carries a `FREE` tile.
    pub fn has_free_tile(&self) -> bool {
        self.free_center && self.dimension() % 2 == 1
    }
}
