use std::collections::BTreeSet;

use rand::Rng;
use serde::Serialize;

use crate::card::{BingoCard, TilePool};
use crate::error::BingoError;
use crate::settings::Settings;
use crate::types::{TileId, WinResult, WinType};
use crate::win::{detect_wins, h_pattern_tiles};

/// Emitted when the card reaches a win state it was not already in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Celebration {
    pub win_type: WinType,
    pub message: &'static str,
}

impl From<WinType> for Celebration {
    fn from(win_type: WinType) -> Self {
        Self {
            win_type,
            message: win_type.celebration_message(),
        }
    }
}

/// What the UI needs after a tile toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleOutcome {
    pub revealed: bool,
    pub result: WinResult,
    /// Contract:
    /// - `Some` only when `result.win_type` is a win different from the
    ///   previous toggle's.
    /// - `None` when the win type is unchanged or the card has no win.
    pub celebration: Option<Celebration>,
}

/// One player's card plus the tiles they have revealed on it.
#[derive(Debug, Clone)]
pub struct BingoSession {
    pool: TilePool,
    settings: Settings,
    card: BingoCard,
    revealed: BTreeSet<TileId>,
    last_win: Option<WinType>,
}

impl BingoSession {
    pub fn new<R: Rng + ?Sized>(
        pool: TilePool,
        settings: Settings,
        rng: &mut R,
    ) -> Result<Self, BingoError> {
        let card = BingoCard::generate(&pool, &settings, rng)?;
        Ok(Self {
            pool,
            settings,
            card,
            revealed: BTreeSet::new(),
            last_win: None,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn card(&self) -> &BingoCard {
        &self.card
    }

    pub fn grid_size(&self) -> usize {
        self.card.grid_size()
    }

    pub fn revealed(&self) -> impl Iterator<Item = TileId> + '_ {
        self.revealed.iter().copied()
    }

    pub fn is_revealed(&self, tile: TileId) -> bool {
        self.revealed.contains(&tile)
    }

    pub fn last_win(&self) -> Option<WinType> {
        self.last_win
    }

    /// Reveals a hidden tile or hides a revealed one, then re-runs detection.
    /// Free tiles toggle like any other tile.
    pub fn toggle(&mut self, tile_id: &str) -> Result<ToggleOutcome, BingoError> {
        let tile: TileId = tile_id.parse()?;
        if self.card.tile(tile).is_none() {
            let grid_size = self.grid_size();
            log::warn!("rejected toggle of {tile} on {grid_size}x{grid_size} card");
            return Err(BingoError::TileOutOfRange { tile, grid_size });
        }

        let revealed = if self.revealed.remove(&tile) {
            false
        } else {
            self.revealed.insert(tile);
            true
        };

        let result = self.detect();
        let celebration = match result.win_type {
            Some(win_type) if self.last_win != Some(win_type) => {
                log::info!("celebrating {win_type}: {}", win_type.celebration_message());
                Some(Celebration::from(win_type))
            }
            _ => None,
        };
        self.last_win = result.win_type;

        Ok(ToggleOutcome {
            revealed,
            result,
            celebration,
        })
    }

    /// Current win state without changing anything.
    pub fn detect(&self) -> WinResult {
        let ids: Vec<String> = self.revealed.iter().map(ToString::to_string).collect();
        detect_wins(&ids, self.grid_size())
    }

    /// Tiles to highlight: every winning line, plus the H when it is formed.
    pub fn highlighted(&self) -> BTreeSet<TileId> {
        let result = self.detect();
        let mut tiles = result.winning_tiles;
        if result.is_h_pattern {
            tiles.extend(h_pattern_tiles(self.grid_size()));
        }
        tiles
    }

    /// Hides every tile and forgets the celebrated win.
    pub fn reset(&mut self) {
        self.revealed.clear();
        self.last_win = None;
    }

    /// Deals a fresh card from the same pool and clears progress.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BingoError> {
        self.card = BingoCard::generate(&self.pool, &self.settings, rng)?;
        self.reset();
        Ok(())
    }

    /// Applies new settings, dealing a new card when the layout changes.
    pub fn apply_settings<R: Rng + ?Sized>(
        &mut self,
        settings: Settings,
        rng: &mut R,
    ) -> Result<(), BingoError> {
        if settings == self.settings {
            return Ok(());
        }
        let card = BingoCard::generate(&self.pool, &settings, rng)?;
        self.settings = settings;
        self.card = card;
        self.reset();
        Ok(())
    }
}
