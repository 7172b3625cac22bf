use crate::{Suit, Tile};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComboKind {
    Pair,
    Pung,
    Kong,
    Chow,
}

impl ComboKind {
    pub fn name(self) -> &'static str {
        match self {
            ComboKind::Pair => "pair",
            ComboKind::Pung => "pung",
            ComboKind::Kong => "kong",
            ComboKind::Chow => "chow",
        }
    }

    pub fn size(self) -> usize {
        match self {
            ComboKind::Pair => 2,
            ComboKind::Pung | ComboKind::Chow => 3,
            ComboKind::Kong => 4,
        }
    }
}

/// A grouping the given tiles could form, with the slots it would use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PotentialCombo {
    pub tiles: Vec<Tile>,
    pub combo_type: ComboKind,
    pub indices: Vec<usize>,
}

/// Lists every pair, pung, kong and chow the tiles could form.
///
/// Candidates overlap freely: four identical tiles yield a pair, a pung and
/// a kong, and a tile in a pung may also appear in a chow. Choosing among
/// them is up to the caller. Identical tiles always contribute their
/// earliest slots.
///
/// `tiles` must not contain bonus tiles.
pub fn detect_potential_combos(tiles: &[Tile]) -> Vec<PotentialCombo> {
    debug_assert!(
        tiles.iter().all(|tile| !tile.is_bonus()),
        "bonus tiles cannot form combos"
    );

    let mut combos = Vec::new();

    let mut order: Vec<Tile> = Vec::new();
    let mut slots: HashMap<Tile, Vec<usize>> = HashMap::new();
    for (idx, tile) in tiles.iter().enumerate() {
        let entry = slots.entry(*tile).or_default();
        if entry.is_empty() {
            order.push(*tile);
        }
        entry.push(idx);
    }

    for tile in &order {
        let indices = &slots[tile];
        for kind in [ComboKind::Pair, ComboKind::Pung, ComboKind::Kong] {
            let wanted = kind.size();
            let available = if kind == ComboKind::Kong {
                indices.len() == wanted
            } else {
                indices.len() >= wanted
            };
            if available {
                combos.push(PotentialCombo {
                    tiles: vec![*tile; wanted],
                    combo_type: kind,
                    indices: indices[..wanted].to_vec(),
                });
            }
        }
    }

    for suit in Suit::NUMBERED {
        for start in 1..=7u8 {
            let mut run_tiles = Vec::with_capacity(3);
            let mut run_indices = Vec::with_capacity(3);
            for rank in start..start + 3 {
                let Ok(tile) = Tile::new(suit, rank) else {
                    break;
                };
                let Some(&first) = slots.get(&tile).and_then(|found| found.first()) else {
                    break;
                };
                run_tiles.push(tile);
                run_indices.push(first);
            }
            if run_indices.len() == 3 {
                combos.push(PotentialCombo {
                    tiles: run_tiles,
                    combo_type: ComboKind::Chow,
                    indices: run_indices,
                });
            }
        }
    }

    combos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_tiles;

    fn scan(ids: &str) -> Vec<PotentialCombo> {
        detect_potential_combos(&parse_tiles(ids).expect("parse"))
    }

    #[test]
    fn four_of_a_kind_yields_pair_pung_and_kong() {
        let combos = scan("m1 m1 m1 m1");
        let kinds: Vec<ComboKind> = combos.iter().map(|combo| combo.combo_type).collect();
        assert_eq!(kinds, vec![ComboKind::Pair, ComboKind::Pung, ComboKind::Kong]);
        assert_eq!(combos[0].indices, vec![0, 1]);
        assert_eq!(combos[1].indices, vec![0, 1, 2]);
        assert_eq!(combos[2].indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn run_uses_first_slot_of_each_rank() {
        let combos = scan("m5 m4 m4 m6");
        let chows: Vec<&PotentialCombo> = combos
            .iter()
            .filter(|combo| combo.combo_type == ComboKind::Chow)
            .collect();
        assert_eq!(chows.len(), 1);
        assert_eq!(chows[0].indices, vec![1, 0, 3]);
        assert_eq!(
            chows[0].tiles.iter().map(|tile| tile.id()).collect::<Vec<_>>(),
            vec!["m4", "m5", "m6"]
        );
    }

    #[test]
    fn groups_follow_first_appearance() {
        let combos = scan("p3 z1 p3 z1");
        assert_eq!(combos.len(), 2);
        assert_eq!(combos[0].tiles[0].id(), "p3");
        assert_eq!(combos[1].indices, vec![1, 3]);
    }

    #[test]
    fn honors_and_split_suits_never_chow() {
        assert!(scan("z1 z2 z3").is_empty());
        assert!(scan("m8 m9 p1").is_empty());
        assert!(scan("m9 m1 m2").is_empty());
    }

    #[test]
    fn serializes_combo_type_lowercase() {
        let combos = scan("s1 s2 s3");
        let json = serde_json::to_value(&combos[0]).expect("serialize");
        assert_eq!(json["comboType"], "chow");
        assert_eq!(json["indices"], serde_json::json!([0, 1, 2]));
        assert_eq!(json["tiles"], serde_json::json!(["s1", "s2", "s3"]));
    }
}
