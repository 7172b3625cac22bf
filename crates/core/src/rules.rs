use serde::{Deserialize, Serialize};

/// Table options that change which shapes count as a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRules {
    /// Accept the seven pairs pattern at all.
    #[serde(default = "enabled")]
    pub seven_pairs: bool,
    /// Four identical tiles count as two pairs for seven pairs. Riichi
    /// tables turn this off.
    #[serde(default = "enabled")]
    pub seven_pairs_allow_quads: bool,
}

fn enabled() -> bool {
    true
}

impl Default for HandRules {
    fn default() -> Self {
        Self {
            seven_pairs: true,
            seven_pairs_allow_quads: true,
        }
    }
}

impl HandRules {
    pub fn riichi() -> Self {
        Self {
            seven_pairs: true,
            seven_pairs_allow_quads: false,
        }
    }
}
