use hupai_core::{validate_hand_with_rules, HandRules, Tile, ValidationResult};
use serde::{Deserialize, Serialize};

/// A named hand shown to players as a worked example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleHand {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub tiles: Vec<Tile>,
}

impl ExampleHand {
    pub fn validate(&self, rules: HandRules) -> ValidationResult {
        validate_hand_with_rules(&self.tiles, rules)
    }
}
