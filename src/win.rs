//! Win detection over an N x N bingo card.
//!
//! Revealed tiles arrive as `"<row>-<col>"` strings and are matched by exact
//! string identity, so malformed or out-of-range entries never complete a
//! line. They do still count towards the complete-board check, which compares
//! set cardinality against `grid_size²`.

use std::collections::HashSet;

use crate::types::{ANTI_DIAGONAL, LineKind, MAIN_DIAGONAL, TileId, WinLine, WinResult, WinType};

/// H-pattern needs a middle row with interior cells and distinct side columns.
const MIN_H_PATTERN_SIZE: usize = 5;

/// Classifies the win state of a card.
///
/// Duplicates in `revealed` are ignored. `grid_size == 0` yields the empty
/// no-win result.
pub fn detect_wins<S: AsRef<str>>(revealed: &[S], grid_size: usize) -> WinResult {
    if grid_size == 0 {
        return WinResult::default();
    }

    let revealed = revealed_set(revealed);
    let n = grid_size;
    let mut winning_lines = Vec::new();

    for row in 0..n {
        if let Some(tiles) = full_line(&revealed, (0..n).map(|col| TileId::new(row, col))) {
            winning_lines.push(WinLine {
                kind: LineKind::Row,
                index: row,
                tiles,
            });
        }
    }

    for col in 0..n {
        if let Some(tiles) = full_line(&revealed, (0..n).map(|row| TileId::new(row, col))) {
            winning_lines.push(WinLine {
                kind: LineKind::Column,
                index: col,
                tiles,
            });
        }
    }

    if let Some(tiles) = full_line(&revealed, (0..n).map(|i| TileId::new(i, i))) {
        winning_lines.push(WinLine {
            kind: LineKind::Diagonal,
            index: MAIN_DIAGONAL,
            tiles,
        });
    }

    if let Some(tiles) = full_line(&revealed, (0..n).map(|i| TileId::new(i, n - 1 - i))) {
        winning_lines.push(WinLine {
            kind: LineKind::Diagonal,
            index: ANTI_DIAGONAL,
            tiles,
        });
    }

    let is_h_pattern = h_pattern_in(&revealed, n);
    let is_complete = board_is_complete(revealed.len(), n);

    let winning_tiles = winning_lines
        .iter()
        .flat_map(|line| line.tiles.iter().copied())
        .collect();
    let line_count = winning_lines.len();
    let win_type = WinType::classify(line_count, is_h_pattern, is_complete);

    log::debug!(
        "detect_wins: grid={n} revealed={} lines={line_count} -> {:?}",
        revealed.len(),
        win_type
    );

    WinResult {
        win_type,
        winning_lines,
        winning_tiles,
        line_count,
        is_h_pattern,
        is_complete,
    }
}

/// Returns whether the left column, right column and middle-row interior are
/// all revealed. Always `false` for even grids and grids smaller than 5.
pub fn check_h_pattern<S: AsRef<str>>(revealed: &[S], grid_size: usize) -> bool {
    h_pattern_in(&revealed_set(revealed), grid_size)
}

/// Tiles that make up the H-pattern: left column, right column, then the
/// middle-row interior. Corners appear once, via the columns.
///
/// Only meaningful where `check_h_pattern` can succeed (odd sizes >= 5).
pub fn h_pattern_tiles(grid_size: usize) -> Vec<TileId> {
    h_pattern_cells(grid_size).collect()
}

fn h_pattern_cells(grid_size: usize) -> impl Iterator<Item = TileId> {
    let n = grid_size;
    let middle = n / 2;
    let last = n.saturating_sub(1);
    let left = (0..n).map(|row| TileId::new(row, 0));
    let right = (0..n).map(move |row| TileId::new(row, last));
    let bar = (1..last).map(move |col| TileId::new(middle, col));

    left.chain(right).chain(bar)
}

fn h_pattern_in(revealed: &HashSet<&str>, grid_size: usize) -> bool {
    if grid_size < MIN_H_PATTERN_SIZE || grid_size % 2 == 0 {
        return false;
    }

    // Lazy, so the scan stops at the first missing tile.
    h_pattern_cells(grid_size).all(|tile| is_revealed(revealed, tile))
}

/// `grid_size²` can overflow a 32-bit `usize`; such a board is never complete.
fn board_is_complete(revealed_count: usize, grid_size: usize) -> bool {
    grid_size
        .checked_mul(grid_size)
        .is_some_and(|cells| revealed_count == cells)
}

fn revealed_set<S: AsRef<str>>(revealed: &[S]) -> HashSet<&str> {
    revealed.iter().map(AsRef::as_ref).collect()
}

fn is_revealed(revealed: &HashSet<&str>, tile: TileId) -> bool {
    revealed.contains(tile.to_string().as_str())
}

fn full_line(revealed: &HashSet<&str>, tiles: impl Iterator<Item = TileId>) -> Option<Vec<TileId>> {
    let mut line = Vec::new();
    for tile in tiles {
        if !is_revealed(revealed, tile) {
            return None;
        }
        line.push(tile);
    }
    Some(line)
}
