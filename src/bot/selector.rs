use std::sync::Arc;

use rand::{Rng, RngCore};
use strum::IntoEnumIterator;

use super::{
    strategy_factory::StrategyFactory,
    types::{ComputerStrategy, StrategyKind},
};

/// Weighted dispatcher picking one strategy per round.
///
/// A roll in 1..=100 is mapped onto contiguous ranges:
/// 1-10 Cheat, 11-30 LeastUsed, 31-50 MostUsed, 51-70 LastUsed, 71-100 Random.
pub struct StrategySelector {
    strategies: Vec<Arc<dyn ComputerStrategy>>,
}

impl StrategySelector {
    pub fn new() -> Self {
        Self {
            strategies: StrategyKind::iter()
                .map(StrategyFactory::create_strategy)
                .collect(),
        }
    }

    /// Draw a strategy kind. Every call is independent of the previous ones.
    pub fn draw(rng: &mut dyn RngCore) -> StrategyKind {
        let roll = rng.random_range(1..=100);
        match Self::kind_for_roll(roll) {
            Some(kind) => kind,
            None => unreachable!("roll {roll} drawn outside 1..=100"),
        }
    }

    /// Map a roll to its strategy kind, None unless the roll is in 1..=100
    pub fn kind_for_roll(roll: u8) -> Option<StrategyKind> {
        match roll {
            1..=10 => Some(StrategyKind::Cheat),
            11..=30 => Some(StrategyKind::LeastUsed),
            31..=50 => Some(StrategyKind::MostUsed),
            51..=70 => Some(StrategyKind::LastUsed),
            71..=100 => Some(StrategyKind::Random),
            _ => None,
        }
    }

    /// Draw a strategy for this round, returned with its name
    pub fn select(&self, rng: &mut dyn RngCore) -> (&dyn ComputerStrategy, String) {
        let strategy = self.strategy(Self::draw(rng));
        (strategy, strategy.kind().to_string())
    }

    pub fn strategy(&self, kind: StrategyKind) -> &dyn ComputerStrategy {
        self.strategies[kind as usize].as_ref()
    }
}

impl Default for StrategySelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;
    use std::collections::HashMap;

    #[rstest]
    #[case(1, StrategyKind::Cheat)]
    #[case(10, StrategyKind::Cheat)]
    #[case(11, StrategyKind::LeastUsed)]
    #[case(30, StrategyKind::LeastUsed)]
    #[case(31, StrategyKind::MostUsed)]
    #[case(50, StrategyKind::MostUsed)]
    #[case(51, StrategyKind::LastUsed)]
    #[case(70, StrategyKind::LastUsed)]
    #[case(71, StrategyKind::Random)]
    #[case(100, StrategyKind::Random)]
    fn test_roll_boundaries(#[case] roll: u8, #[case] expected: StrategyKind) {
        assert_eq!(StrategySelector::kind_for_roll(roll), Some(expected));
    }

    #[rstest]
    #[case(0)]
    #[case(101)]
    #[case(200)]
    #[case(255)]
    fn test_roll_outside_range_has_no_kind(#[case] roll: u8) {
        assert_eq!(StrategySelector::kind_for_roll(roll), None);
    }

    #[test]
    fn test_partition_matches_weights() {
        let mut widths: HashMap<StrategyKind, u8> = HashMap::new();
        for roll in 1..=100u8 {
            let kind = StrategySelector::kind_for_roll(roll).unwrap();
            *widths.entry(kind).or_default() += 1;
        }

        for kind in StrategyKind::iter() {
            assert_eq!(widths.get(&kind).copied(), Some(kind.weight()), "{kind}");
        }
    }

    #[test]
    fn test_selection_frequencies_within_tolerance() {
        let mut rng = StdRng::seed_from_u64(2024);
        let draws = 100_000;

        let mut seen: HashMap<StrategyKind, u32> = HashMap::new();
        for _ in 0..draws {
            *seen.entry(StrategySelector::draw(&mut rng)).or_default() += 1;
        }

        for kind in StrategyKind::iter() {
            let share = seen.get(&kind).copied().unwrap_or_default() as f64 / draws as f64;
            let expected = kind.weight() as f64 / 100.0;
            assert!(
                (share - expected).abs() < 0.02,
                "{kind} selected {share}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_select_follows_draw() {
        let selector = StrategySelector::new();
        let mut rng = StdRng::seed_from_u64(11);
        let mut expected_rng = StdRng::seed_from_u64(11);

        for _ in 0..50 {
            let (strategy, name) = selector.select(&mut rng);
            let expected = StrategySelector::draw(&mut expected_rng);
            assert_eq!(strategy.kind(), expected);
            assert_eq!(name, expected.to_string());
        }
    }
}
