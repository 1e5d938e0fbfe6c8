use itertools::Itertools;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::error::BingoError;
use crate::settings::Settings;
use crate::types::TileId;

pub const FREE_TEXT: &str = "FREE";

/// Unique item texts a card is drawn from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TilePool {
    items: Vec<String>,
}

impl TilePool {
    /// One item per line. Lines are trimmed; blanks and repeats are dropped.
    pub fn from_text(text: &str) -> Self {
        Self::from_items(text.lines())
    }

    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items = items
            .into_iter()
            .map(|item| item.as_ref().trim().to_string())
            .filter(|item| !item.is_empty())
            .unique()
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub id: TileId,
    pub text: String,
    pub is_free: bool,
}

/// A randomized N x N card, tiles stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BingoCard {
    grid_size: usize,
    tiles: Vec<Tile>,
}

impl BingoCard {
    /// Draws a card from `pool`.
    ///
    /// Needs `n²` items, one fewer when the settings put a `FREE` tile in the
    /// center of an odd grid.
    pub fn generate<R: Rng + ?Sized>(
        pool: &TilePool,
        settings: &Settings,
        rng: &mut R,
    ) -> Result<Self, BingoError> {
        let n = settings.dimension();
        let free_center = settings.has_free_tile();
        let needed = if free_center { n * n - 1 } else { n * n };

        if pool.len() < needed {
            log::warn!(
                "card generation failed: {n}x{n} needs {needed} items, pool has {}",
                pool.len()
            );
            return Err(BingoError::NotEnoughItems {
                grid_size: n,
                needed,
                available: pool.len(),
            });
        }

        let mut items = pool.items().to_vec();
        let (picked, _) = items.partial_shuffle(rng, needed);
        let mut picked = picked.iter().cloned();

        let center = TileId::new(n / 2, n / 2);
        let mut tiles = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                let id = TileId::new(row, col);
                let is_free = free_center && id == center;
                let text = if is_free {
                    FREE_TEXT.to_string()
                } else {
                    // `picked` holds exactly one item per non-free tile.
                    picked.next().unwrap_or_default()
                };
                tiles.push(Tile { id, text, is_free });
            }
        }

        log::debug!(
            "generated {n}x{n} card from {} items (free center: {free_center})",
            pool.len()
        );

        Ok(Self {
            grid_size: n,
            tiles,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        if !id.is_within(self.grid_size) {
            return None;
        }
        self.tiles.get(id.row * self.grid_size + id.col)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::settings::GridSize;

    fn pool_of(count: usize) -> TilePool {
        TilePool::from_items((0..count).map(|i| format!("item {i}")))
    }

    fn settings(grid_size: GridSize, free_center: bool) -> Settings {
        Settings {
            grid_size,
            free_center,
        }
    }

    #[test]
    fn pool_trims_and_drops_blank_and_repeated_lines() {
        let text = "  coffee spill \n\nfire drill\ncoffee spill\n   \nreply-all\n";
        let pool = TilePool::from_text(text);

        assert_eq!(pool.items(), &["coffee spill", "fire drill", "reply-all"]);
        assert_eq!(pool.len(), 3);
        assert!(TilePool::from_text("\n \n").is_empty());
    }

    #[test]
    fn free_center_card_uses_one_fewer_item() {
        let mut rng = StdRng::seed_from_u64(7);
        let s = settings(GridSize::Five, true);
        let card = BingoCard::generate(&pool_of(24), &s, &mut rng).unwrap();

        assert_eq!(card.grid_size(), 5);
        assert_eq!(card.tiles().len(), 25);

        let center = card.tile(TileId::new(2, 2)).unwrap();
        assert!(center.is_free);
        assert_eq!(center.text, FREE_TEXT);
        assert_eq!(card.tiles().iter().filter(|t| t.is_free).count(), 1);

        let texts: HashSet<&str> = card
            .tiles()
            .iter()
            .filter(|t| !t.is_free)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(texts.len(), 24);
    }

    #[test]
    fn tiles_are_laid_out_row_major() {
        let mut rng = StdRng::seed_from_u64(1);
        let s = settings(GridSize::Three, false);
        let card = BingoCard::generate(&pool_of(9), &s, &mut rng).unwrap();

        for (i, tile) in card.tiles().iter().enumerate() {
            assert_eq!(tile.id, TileId::new(i / 3, i % 3));
            assert!(!tile.is_free);
        }
        assert_eq!(card.tile(TileId::new(3, 0)), None);
    }

    #[test]
    fn too_small_pool_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let s = settings(GridSize::Five, false);
        let err = BingoCard::generate(&pool_of(24), &s, &mut rng).unwrap_err();

        assert_eq!(
            err,
            BingoError::NotEnoughItems {
                grid_size: 5,
                needed: 25,
                available: 24,
            }
        );
    }

    #[test]
    fn same_seed_gives_same_card() {
        let pool = pool_of(60);
        let s = settings(GridSize::Seven, true);

        let a = BingoCard::generate(&pool, &s, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = BingoCard::generate(&pool, &s, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn card_serializes_tile_ids_as_strings() {
        let mut rng = StdRng::seed_from_u64(3);
        let s = settings(GridSize::Three, true);
        let card = BingoCard::generate(&pool_of(8), &s, &mut rng).unwrap();

        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["gridSize"], 3);
        assert_eq!(json["tiles"][4]["id"], "1-1");
        assert_eq!(json["tiles"][4]["isFree"], true);
        assert_eq!(json["tiles"][4]["text"], "FREE");
    }
}
