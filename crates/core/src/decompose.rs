use crate::{HandRules, Tile, TileCounts};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Scoring tiles in a complete hand.
pub const HAND_SIZE: usize = 14;
pub const MELDS_PER_HAND: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeldKind {
    Pung,
    Chow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meld {
    pub kind: MeldKind,
    pub tiles: [Tile; 3],
}

/// One way a standard hand splits into its pair and four melds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    pub pair: Tile,
    pub melds: Vec<Meld>,
}

/// Memoized meld search. The memo is only valid for one hand; build a new
/// decomposer for every top-level check.
#[derive(Debug, Default)]
pub struct Decomposer {
    memo: HashMap<TileCounts, bool>,
}

impl Decomposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct sub-multisets solved so far.
    pub fn states(&self) -> usize {
        self.memo.len()
    }

    /// True when the hand is a pair plus four melds using every tile.
    pub fn is_standard(&mut self, counts: &TileCounts) -> bool {
        pair_candidates(counts).any(|(pair, rest)| {
            let found = self.can_decompose(&rest);
            tracing::trace!(pair = %pair, found, "standard hand pair candidate");
            found
        })
    }

    pub fn standard_decomposition(&mut self, counts: &TileCounts) -> Option<Decomposition> {
        for (pair, rest) in pair_candidates(counts) {
            if !self.can_decompose(&rest) {
                continue;
            }
            let melds = self.melds_for(&rest)?;
            return Some(Decomposition { pair, melds });
        }
        None
    }

    /// Whether every remaining tile can be grouped into pungs and chows.
    ///
    /// Always branches on the lowest remaining tile, so a given multiset is
    /// explored the same way no matter how it was reached.
    pub fn can_decompose(&mut self, counts: &TileCounts) -> bool {
        if let Some(&cached) = self.memo.get(counts) {
            return cached;
        }
        let found = match counts.first() {
            None => true,
            Some(tile) => meld_options(counts, tile)
                .into_iter()
                .any(|(_, next)| self.can_decompose(&next)),
        };
        self.memo.insert(*counts, found);
        found
    }

    fn melds_for(&mut self, counts: &TileCounts) -> Option<Vec<Meld>> {
        let Some(tile) = counts.first() else {
            return Some(Vec::new());
        };
        for (meld, next) in meld_options(counts, tile) {
            if self.can_decompose(&next) {
                let mut melds = vec![meld];
                melds.extend(self.melds_for(&next)?);
                return Some(melds);
            }
        }
        None
    }
}

fn pair_candidates(counts: &TileCounts) -> impl Iterator<Item = (Tile, TileCounts)> + '_ {
    let complete = counts.total() == HAND_SIZE;
    counts
        .iter()
        .filter(move |&(_, count)| complete && count >= 2)
        .map(move |(tile, _)| {
            let mut rest = *counts;
            rest.remove(tile, 2);
            (tile, rest)
        })
}

/// Melds containing `tile` that the counts can supply, with the counts left
/// after taking each one. Pung first, then the chow with `tile` as the low,
/// middle and high tile.
fn meld_options(counts: &TileCounts, tile: Tile) -> Vec<(Meld, TileCounts)> {
    let mut options = Vec::new();
    if counts.get(tile) >= 3 {
        let mut next = *counts;
        next.remove(tile, 3);
        options.push((
            Meld {
                kind: MeldKind::Pung,
                tiles: [tile; 3],
            },
            next,
        ));
    }
    if !tile.is_numbered() {
        return options;
    }
    for low in [0i8, -1, -2] {
        let run = (
            tile.offset(low),
            tile.offset(low + 1),
            tile.offset(low + 2),
        );
        let (Some(a), Some(b), Some(c)) = run else {
            continue;
        };
        let mut next = *counts;
        if next.remove(a, 1) && next.remove(b, 1) && next.remove(c, 1) {
            options.push((
                Meld {
                    kind: MeldKind::Chow,
                    tiles: [a, b, c],
                },
                next,
            ));
        }
    }
    options
}

pub fn can_form_standard_hand(counts: &TileCounts) -> bool {
    Decomposer::new().is_standard(counts)
}

pub fn standard_decomposition(counts: &TileCounts) -> Option<Decomposition> {
    Decomposer::new().standard_decomposition(counts)
}

pub fn is_seven_pairs(counts: &TileCounts) -> bool {
    is_seven_pairs_with_rules(counts, HandRules::default())
}

pub fn is_seven_pairs_with_rules(counts: &TileCounts, rules: HandRules) -> bool {
    if !rules.seven_pairs || counts.total() != HAND_SIZE {
        return false;
    }
    counts
        .iter()
        .all(|(_, count)| count == 2 || (count == 4 && rules.seven_pairs_allow_quads))
}
