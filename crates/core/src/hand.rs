use crate::{
    detect_potential_combos, validate_hand_with_rules, HandRules, PotentialCombo, Tile,
    ValidationResult,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("already holding {limit} of {tile}")]
    AtLimit { tile: Tile, limit: u8 },
    #[error("no tile at slot {0}")]
    IndexOutOfRange(usize),
}

/// A hand being assembled tile by tile.
///
/// Scoring tiles keep their slot order, which is what combo indices refer
/// to. Flowers and seasons sit in a separate area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
    #[serde(default)]
    bonus: Vec<Tile>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a hand from tiles in order, enforcing the copy limits.
    pub fn from_tiles(tiles: &[Tile]) -> Result<Self, HandError> {
        let mut hand = Self::new();
        for tile in tiles {
            hand.try_add(*tile)?;
        }
        Ok(hand)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn bonus_tiles(&self) -> &[Tile] {
        &self.bonus
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty() && self.bonus.is_empty()
    }

    pub fn count(&self, tile: Tile) -> usize {
        let area = if tile.is_bonus() { &self.bonus } else { &self.tiles };
        area.iter().filter(|held| **held == tile).count()
    }

    pub fn is_at_limit(&self, tile: Tile) -> bool {
        self.count(tile) >= tile.max_copies() as usize
    }

    pub fn try_add(&mut self, tile: Tile) -> Result<(), HandError> {
        if self.is_at_limit(tile) {
            return Err(HandError::AtLimit {
                tile,
                limit: tile.max_copies(),
            });
        }
        if tile.is_bonus() {
            self.bonus.push(tile);
        } else {
            self.tiles.push(tile);
        }
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Tile, HandError> {
        if index >= self.tiles.len() {
            return Err(HandError::IndexOutOfRange(index));
        }
        Ok(self.tiles.remove(index))
    }

    pub fn remove_bonus(&mut self, index: usize) -> Result<Tile, HandError> {
        if index >= self.bonus.len() {
            return Err(HandError::IndexOutOfRange(index));
        }
        Ok(self.bonus.remove(index))
    }

    /// Moves the tile at `from` so that it ends up at slot `to`.
    pub fn move_tile(&mut self, from: usize, to: usize) -> Result<(), HandError> {
        let len = self.tiles.len();
        if from >= len {
            return Err(HandError::IndexOutOfRange(from));
        }
        if to >= len {
            return Err(HandError::IndexOutOfRange(to));
        }
        let tile = self.tiles.remove(from);
        self.tiles.insert(to, tile);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
        self.bonus.clear();
    }

    pub fn validate(&self, rules: HandRules) -> ValidationResult {
        validate_hand_with_rules(&self.tiles, rules)
    }

    pub fn potential_combos(&self) -> Vec<PotentialCombo> {
        detect_potential_combos(&self.tiles)
    }
}
