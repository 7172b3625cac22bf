use crate::Tile;

/// Per-kind counts of scoring tiles.
///
/// Slots are ordered by tile, so two tables compare equal exactly when they
/// describe the same multiset. The decomposition search uses the table
/// itself as its memo key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCounts {
    counts: [u8; Tile::SCORING_KINDS],
}

impl Default for TileCounts {
    fn default() -> Self {
        Self {
            counts: [0; Tile::SCORING_KINDS],
        }
    }
}

impl TileCounts {
    /// Counts scoring tiles; bonus tiles are skipped.
    pub fn from_tiles<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> Self {
        let mut counts = Self::default();
        for tile in tiles {
            counts.add(*tile, 1);
        }
        counts
    }

    pub fn get(&self, tile: Tile) -> u8 {
        tile.index().map(|idx| self.counts[idx]).unwrap_or(0)
    }

    pub fn add(&mut self, tile: Tile, amount: u8) {
        if let Some(idx) = tile.index() {
            self.counts[idx] = self.counts[idx].saturating_add(amount);
        }
    }

    /// Removes `amount` copies; returns false (and leaves the table
    /// untouched) if fewer are present.
    pub fn remove(&mut self, tile: Tile, amount: u8) -> bool {
        let Some(idx) = tile.index() else {
            return false;
        };
        if self.counts[idx] < amount {
            return false;
        }
        self.counts[idx] -= amount;
        true
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|&count| count as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Lowest tile still present.
    pub fn first(&self) -> Option<Tile> {
        self.counts
            .iter()
            .position(|&count| count > 0)
            .and_then(Tile::from_index)
    }

    /// Present tiles with their counts, in tile order.
    pub fn iter(&self) -> impl Iterator<Item = (Tile, u8)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .filter_map(|(idx, &count)| Tile::from_index(idx).map(|tile| (tile, count)))
    }

    /// Tiles held more times than a physical set contains.
    pub fn over_limit(&self) -> Vec<Tile> {
        self.iter()
            .filter(|(tile, count)| *count > tile.max_copies())
            .map(|(tile, _)| tile)
            .collect()
    }

    /// Distinct tiles held at least twice.
    pub fn pair_kinds(&self) -> usize {
        self.iter().filter(|(_, count)| *count >= 2).count()
    }

    /// Canonical `id:count` rendering, e.g. `m1:3|p5:2`.
    pub fn state_key(&self) -> String {
        self.iter()
            .map(|(tile, count)| format!("{tile}:{count}"))
            .collect::<Vec<_>>()
            .join("|")
    }
}
