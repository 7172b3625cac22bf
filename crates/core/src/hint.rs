//! Advisory progress text for hands that are not yet winning.
//!
//! The counts here are greedy and can under-report melds in hands with
//! several readings. They only shape the message; the verdict always comes
//! from the decomposition search.

use crate::{Shortfall, Suit, Tile, TileCounts, HAND_SIZE, MELDS_PER_HAND};

pub const SEVEN_PAIRS: usize = 7;

/// Pungs and kongs first (a kong is one set), then one forward chow scan
/// per numbered suit over what is left.
pub fn greedy_set_count(counts: &TileCounts) -> usize {
    let mut remaining = *counts;
    let mut sets = 0;

    for (tile, count) in counts.iter() {
        if count >= 3 {
            sets += 1;
            remaining.remove(tile, count.min(4));
        }
    }

    for suit in Suit::NUMBERED {
        for start in 1..=7 {
            let run: Vec<Tile> = (start..start + 3)
                .filter_map(|rank| Tile::new(suit, rank).ok())
                .collect();
            while run.iter().all(|tile| remaining.get(*tile) > 0) {
                for tile in &run {
                    remaining.remove(*tile, 1);
                }
                sets += 1;
            }
        }
    }

    sets
}

pub fn progress_hint(counts: &TileCounts) -> Shortfall {
    let sets = greedy_set_count(counts);
    if sets > 0 && sets < MELDS_PER_HAND {
        return Shortfall::NeedSets {
            missing: MELDS_PER_HAND - sets,
        };
    }

    let pairs = counts.pair_kinds();
    if (2..SEVEN_PAIRS).contains(&pairs) {
        return Shortfall::NeedPairs {
            missing: SEVEN_PAIRS - pairs,
        };
    }

    let current = counts.total();
    if current < HAND_SIZE {
        return Shortfall::TileCount {
            current,
            target: HAND_SIZE,
        };
    }

    Shortfall::NotArranged
}
