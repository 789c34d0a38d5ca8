use std::sync::Arc;

use super::{
    cheat_strategy::CheatStrategy,
    frequency_strategy::{LeastUsedStrategy, MostUsedStrategy},
    last_used_strategy::LastUsedStrategy,
    random_strategy::RandomStrategy,
    types::{ComputerStrategy, StrategyKind},
};

/// Factory for creating computer strategies by kind
pub struct StrategyFactory;

impl StrategyFactory {
    /// Create a strategy instance for the given kind
    pub fn create_strategy(kind: StrategyKind) -> Arc<dyn ComputerStrategy> {
        match kind {
            StrategyKind::Cheat => Arc::new(CheatStrategy::new()),
            StrategyKind::LeastUsed => Arc::new(LeastUsedStrategy::new()),
            StrategyKind::MostUsed => Arc::new(MostUsedStrategy::new()),
            StrategyKind::LastUsed => Arc::new(LastUsedStrategy::new()),
            StrategyKind::Random => Arc::new(RandomStrategy::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(StrategyKind::Cheat, "Cheat")]
    #[case(StrategyKind::LeastUsed, "Least Used")]
    #[case(StrategyKind::MostUsed, "Most Used")]
    #[case(StrategyKind::LastUsed, "Last Used")]
    #[case(StrategyKind::Random, "Random")]
    fn test_create_strategy(#[case] kind: StrategyKind, #[case] name: &str) {
        let strategy = StrategyFactory::create_strategy(kind);
        assert_eq!(strategy.kind(), kind);
        assert_eq!(strategy.kind().to_string(), name);
    }
}
