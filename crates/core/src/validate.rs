use crate::{
    is_seven_pairs_with_rules, parse_tile_ids, progress_hint, Decomposer, HandRules, Tile,
    TileCounts, TileError, HAND_SIZE, MAX_COPIES,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinPattern {
    Standard,
    SevenPairs,
}

impl WinPattern {
    pub fn description(self) -> &'static str {
        match self {
            WinPattern::Standard => "4 Sets + 1 Pair",
            WinPattern::SevenPairs => "7 Pairs",
        }
    }
}

/// Why a hand is not (yet) winning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shortfall {
    NothingSelected,
    TooManyCopies { tiles: Vec<Tile> },
    NeedSets { missing: usize },
    NeedPairs { missing: usize },
    TileCount { current: usize, target: usize },
    NotArranged,
}

impl Shortfall {
    pub fn reason(&self) -> String {
        match self {
            Shortfall::NothingSelected => "No tiles selected yet. Add tiles to build a hand.".into(),
            Shortfall::TooManyCopies { .. } => format!(
                "Maximum {MAX_COPIES} of each tile allowed. Remove excess tiles."
            ),
            Shortfall::NeedSets { missing } => format!(
                "Looking good! Add {missing} more {} and a pair.",
                plural(*missing, "set", "sets")
            ),
            Shortfall::NeedPairs { missing } => format!(
                "Nice pairs! Add {missing} more {} for a 7 Pairs win.",
                plural(*missing, "pair", "pairs")
            ),
            Shortfall::TileCount { current, target } => {
                format!("Current Hand: {current}/{target} tiles. Keep going!")
            }
            Shortfall::NotArranged => {
                "Not a winning hand yet. Try arranging into sets and pairs.".into()
            }
        }
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    Winning { pattern: WinPattern },
    NotWinning(Shortfall),
}

impl ValidationResult {
    pub fn is_winning(&self) -> bool {
        matches!(self, ValidationResult::Winning { .. })
    }

    pub fn pattern(&self) -> Option<WinPattern> {
        match self {
            ValidationResult::Winning { pattern } => Some(*pattern),
            ValidationResult::NotWinning(_) => None,
        }
    }

    /// Tiles over the copy limit; empty for every other outcome.
    pub fn invalid_tiles(&self) -> &[Tile] {
        match self {
            ValidationResult::NotWinning(Shortfall::TooManyCopies { tiles }) => tiles,
            _ => &[],
        }
    }

    pub fn reason(&self) -> String {
        match self {
            ValidationResult::Winning { pattern } => {
                format!("Winning Hand: {}", pattern.description())
            }
            ValidationResult::NotWinning(shortfall) => shortfall.reason(),
        }
    }

    pub fn report(&self) -> ValidationReport {
        let invalid = self.invalid_tiles();
        ValidationReport {
            is_valid: self.is_winning(),
            reason: self.reason(),
            pattern: self.pattern(),
            invalid_tiles: (!invalid.is_empty()).then(|| invalid.to_vec()),
        }
    }
}

/// Flat form of a [`ValidationResult`] for callers that want
/// `{ isValid, reason, pattern?, invalidTiles? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<WinPattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_tiles: Option<Vec<Tile>>,
}

pub fn validate_hand(tiles: &[Tile]) -> ValidationResult {
    validate_hand_with_rules(tiles, HandRules::default())
}

/// Bonus tiles are dropped before any check.
pub fn validate_hand_with_rules(tiles: &[Tile], rules: HandRules) -> ValidationResult {
    let counts = TileCounts::from_tiles(tiles.iter().filter(|tile| !tile.is_bonus()));
    validate_counts(&counts, rules)
}

/// Validates raw ids. An id that does not name a tile is an error, never a
/// losing verdict.
pub fn validate_ids<S: AsRef<str>>(ids: &[S]) -> Result<ValidationResult, TileError> {
    let tiles = parse_tile_ids(ids)?;
    Ok(validate_hand(&tiles))
}

pub fn validate_counts(counts: &TileCounts, rules: HandRules) -> ValidationResult {
    if counts.is_empty() {
        return ValidationResult::NotWinning(Shortfall::NothingSelected);
    }

    let over = counts.over_limit();
    if !over.is_empty() {
        tracing::debug!(tiles = ?over, "hand holds more copies than a set contains");
        return ValidationResult::NotWinning(Shortfall::TooManyCopies { tiles: over });
    }

    let total = counts.total();
    if total == HAND_SIZE && is_seven_pairs_with_rules(counts, rules) {
        tracing::debug!(total, "seven pairs");
        return ValidationResult::Winning {
            pattern: WinPattern::SevenPairs,
        };
    }

    let mut decomposer = Decomposer::new();
    let standard = decomposer.is_standard(counts);
    tracing::debug!(
        hand = %counts.state_key(),
        total,
        standard,
        states = decomposer.states(),
        "standard hand search"
    );
    if standard {
        return ValidationResult::Winning {
            pattern: WinPattern::Standard,
        };
    }

    ValidationResult::NotWinning(progress_hint(counts))
}
