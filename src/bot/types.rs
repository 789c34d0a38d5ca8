use std::fmt;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::game::{Move, MoveHistory};

/// Tag for each computer decision policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Cheat = 0,
    LeastUsed = 1,
    MostUsed = 2,
    LastUsed = 3,
    Random = 4,
}

impl StrategyKind {
    /// Selection weight out of 100
    pub fn weight(self) -> u8 {
        match self {
            StrategyKind::Cheat => 10,
            StrategyKind::LeastUsed => 20,
            StrategyKind::MostUsed => 20,
            StrategyKind::LastUsed => 20,
            StrategyKind::Random => 30,
        }
    }

    /// Human readable name including the weight, e.g. "Cheat (10%)"
    pub fn label(self) -> String {
        format!("{} ({}%)", self, self.weight())
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StrategyKind::Cheat => "Cheat",
                StrategyKind::LeastUsed => "Least Used",
                StrategyKind::MostUsed => "Most Used",
                StrategyKind::LastUsed => "Last Used",
                StrategyKind::Random => "Random",
            }
        )
    }
}

/// Trait for computer decision-making strategies.
///
/// Strategies hold no state of their own. They read the session's shared
/// history and draw any randomness from the supplied source.
pub trait ComputerStrategy: Send + Sync {
    /// Pick the computer's move for this round
    fn decide(&self, player_move: Move, history: &MoveHistory, rng: &mut dyn RngCore) -> Move;

    /// Which policy this is; its `Display` is the reported strategy name
    fn kind(&self) -> StrategyKind;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_weights_sum_to_one_hundred() {
        let total: u32 = StrategyKind::iter().map(|k| k.weight() as u32).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_label_includes_weight() {
        assert_eq!(StrategyKind::Cheat.label(), "Cheat (10%)");
        assert_eq!(StrategyKind::LeastUsed.label(), "Least Used (20%)");
        assert_eq!(StrategyKind::Random.label(), "Random (30%)");
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&StrategyKind::MostUsed).unwrap(),
            "\"most_used\""
        );
    }
}
