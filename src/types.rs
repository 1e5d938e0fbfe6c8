use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BingoError;

/// A card coordinate, written `"<row>-<col>"` on the JS side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TileId {
    pub row: usize,
    pub col: usize,
}

impl TileId {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the tile lies on a `grid_size` x `grid_size` card.
    pub fn is_within(&self, grid_size: usize) -> bool {
        self.row < grid_size && self.col < grid_size
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for TileId {
    type Err = BingoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BingoError::InvalidTileId(s.to_string());
        let (row, col) = s.split_once('-').ok_or_else(invalid)?;
        Ok(Self {
            row: parse_index(row).ok_or_else(invalid)?,
            col: parse_index(col).ok_or_else(invalid)?,
        })
    }
}

impl From<TileId> for String {
    fn from(tile: TileId) -> Self {
        tile.to_string()
    }
}

impl TryFrom<String> for TileId {
    type Error = BingoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn parse_index(part: &str) -> Option<usize> {
    // `usize::from_str` accepts a leading '+', which is not a tile id.
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Which family a winning line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Row,
    Column,
    Diagonal,
}

pub const MAIN_DIAGONAL: usize = 1;
pub const ANTI_DIAGONAL: usize = 2;

/// A fully revealed row, column or diagonal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    #[serde(rename = "type")]
    pub kind: LineKind,
    /// Contract:
    /// - Row/column: the row or column number.
    /// - Diagonal: `MAIN_DIAGONAL` (top-left to bottom-right) or `ANTI_DIAGONAL`.
    pub index: usize,
    pub tiles: Vec<TileId>,
}

/// Win classification, ordered by celebration priority in `WinType::classify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WinType {
    Single,
    Double,
    HPattern,
    Complete,
}

impl WinType {
    /// First match wins: complete, then H-pattern, then line count.
    pub fn classify(line_count: usize, is_h_pattern: bool, is_complete: bool) -> Option<Self> {
        if is_complete {
            Some(Self::Complete)
        } else if is_h_pattern {
            Some(Self::HPattern)
        } else if line_count >= 2 {
            Some(Self::Double)
        } else if line_count == 1 {
            Some(Self::Single)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::HPattern => "h-pattern",
            Self::Complete => "complete",
        }
    }

    /// Banner text shown when this win is first reached.
    pub fn celebration_message(&self) -> &'static str {
        match self {
            Self::Single => "BINGO!",
            Self::Double => "DOUBLE BINGO!",
            Self::HPattern => "H-BINGO!",
            Self::Complete => "SUPER BINGO!",
        }
    }
}

impl fmt::Display for WinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one `detect_wins` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinResult {
    /// `None` serializes to `null` (no win).
    pub win_type: Option<WinType>,
    pub winning_lines: Vec<WinLine>,
    /// Contract:
    /// - Exactly the union of `winning_lines[*].tiles`.
    /// - Never contains H-pattern or complete-board tiles on their own.
    pub winning_tiles: BTreeSet<TileId>,
    /// Contract: always `winning_lines.len()`.
    pub line_count: usize,
    pub is_h_pattern: bool,
    pub is_complete: bool,
}
