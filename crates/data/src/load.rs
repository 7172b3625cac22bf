use crate::schema::ExampleHand;
use anyhow::{bail, Context};
use hupai_core::HandRules;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

const BUILTIN_EXAMPLES: &[u8] = include_bytes!("../../../assets/example_hands.json");
const BUILTIN_RULES: &[u8] = include_bytes!("../../../assets/rules.json");

pub fn load_example_hands(path: &Path) -> anyhow::Result<Vec<ExampleHand>> {
    let hands: Vec<ExampleHand> = load_json(path)?;
    check_example_hands(&hands).with_context(|| format!("check {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = hands.len(), "loaded example hands");
    Ok(hands)
}

pub fn load_hand_rules(path: &Path) -> anyhow::Result<HandRules> {
    let rules: HandRules = load_json(path)?;
    tracing::debug!(path = %path.display(), ?rules, "loaded hand rules");
    Ok(rules)
}

/// Example hands embedded from `assets/example_hands.json`.
pub fn builtin_example_hands() -> anyhow::Result<Vec<ExampleHand>> {
    let hands = parse_example_hands(BUILTIN_EXAMPLES).context("parse built-in example hands")?;
    tracing::debug!(count = hands.len(), "loaded built-in example hands");
    Ok(hands)
}

pub fn builtin_hand_rules() -> anyhow::Result<HandRules> {
    serde_json::from_slice(BUILTIN_RULES).context("parse built-in hand rules")
}

pub fn parse_example_hands(json_bytes: &[u8]) -> anyhow::Result<Vec<ExampleHand>> {
    let hands: Vec<ExampleHand> =
        serde_json::from_slice(json_bytes).context("parse example hands JSON")?;
    check_example_hands(&hands)?;
    Ok(hands)
}

/// Names must be present and unique so the CLI can refer to hands by name.
fn check_example_hands(hands: &[ExampleHand]) -> anyhow::Result<()> {
    for (idx, hand) in hands.iter().enumerate() {
        if hand.name.trim().is_empty() {
            bail!("example hand #{idx} has no name");
        }
        if hands[..idx].iter().any(|other| other.name == hand.name) {
            bail!("duplicate example hand name: {}", hand.name);
        }
    }
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
