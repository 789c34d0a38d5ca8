pub mod cheat_strategy;
pub mod frequency_strategy;
pub mod last_used_strategy;
pub mod random_strategy;
pub mod selector;
pub mod strategy_factory;
pub mod types;

pub use cheat_strategy::CheatStrategy;
pub use frequency_strategy::{LeastUsedStrategy, MostUsedStrategy};
pub use last_used_strategy::LastUsedStrategy;
pub use random_strategy::RandomStrategy;
pub use selector::StrategySelector;
pub use strategy_factory::StrategyFactory;
pub use types::{ComputerStrategy, StrategyKind};
