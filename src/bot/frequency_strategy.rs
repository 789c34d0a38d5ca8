use std::cmp::Ordering;

use rand::RngCore;

use crate::game::{Move, MoveHistory};

use super::types::{ComputerStrategy, StrategyKind};

/// Scan order for frequency lookups. Earlier moves win ties.
const SCAN_ORDER: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

/// Walk the counters and keep the first move whose count is strictly
/// `wanted` compared to the best so far. Defaults to Rock.
fn pick_by_count(history: &MoveHistory, wanted: Ordering) -> Move {
    let mut best = SCAN_ORDER[0];
    for candidate in &SCAN_ORDER[1..] {
        if history.count(*candidate).cmp(&history.count(best)) == wanted {
            best = *candidate;
        }
    }
    best
}

/// Counters the move the player has thrown least often
pub struct LeastUsedStrategy;

impl LeastUsedStrategy {
    pub fn new() -> Self {
        Self
    }

    pub fn least_used(history: &MoveHistory) -> Move {
        pick_by_count(history, Ordering::Less)
    }
}

impl Default for LeastUsedStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputerStrategy for LeastUsedStrategy {
    fn decide(&self, _player_move: Move, history: &MoveHistory, _rng: &mut dyn RngCore) -> Move {
        Self::least_used(history).counter()
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::LeastUsed
    }
}

/// Counters the player's favourite move
pub struct MostUsedStrategy;

impl MostUsedStrategy {
    pub fn new() -> Self {
        Self
    }

    pub fn most_used(history: &MoveHistory) -> Move {
        pick_by_count(history, Ordering::Greater)
    }
}

impl Default for MostUsedStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputerStrategy for MostUsedStrategy {
    fn decide(&self, _player_move: Move, history: &MoveHistory, _rng: &mut dyn RngCore) -> Move {
        Self::most_used(history).counter()
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::MostUsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    #[test]
    fn test_least_and_most_used_with_mixed_counts() {
        let mut rng = StdRng::seed_from_u64(3);
        let history = MoveHistory::with_counts(5, 1, 3);

        assert_eq!(LeastUsedStrategy::least_used(&history), Move::Paper);
        assert_eq!(
            LeastUsedStrategy::new().decide(Move::Rock, &history, &mut rng),
            Move::Scissors
        );

        assert_eq!(MostUsedStrategy::most_used(&history), Move::Rock);
        assert_eq!(
            MostUsedStrategy::new().decide(Move::Rock, &history, &mut rng),
            Move::Paper
        );
    }

    #[test]
    fn test_empty_history_defaults_to_rock() {
        let mut rng = StdRng::seed_from_u64(3);
        let history = MoveHistory::new();

        assert_eq!(
            LeastUsedStrategy::new().decide(Move::Scissors, &history, &mut rng),
            Move::Paper
        );
        assert_eq!(
            MostUsedStrategy::new().decide(Move::Scissors, &history, &mut rng),
            Move::Paper
        );
    }

    #[rstest]
    #[case((2, 2, 5), Move::Rock)] // Rock and Paper tied, Rock scanned first
    #[case((4, 1, 1), Move::Paper)] // Paper and Scissors tied, Paper scanned first
    #[case((3, 3, 0), Move::Scissors)]
    #[case((7, 7, 7), Move::Rock)]
    fn test_least_used_tie_break(#[case] counts: (u32, u32, u32), #[case] expected: Move) {
        let history = MoveHistory::with_counts(counts.0, counts.1, counts.2);
        assert_eq!(LeastUsedStrategy::least_used(&history), expected);
    }

    #[rstest]
    #[case((5, 5, 1), Move::Rock)]
    #[case((1, 4, 4), Move::Paper)]
    #[case((0, 0, 2), Move::Scissors)]
    #[case((3, 3, 3), Move::Rock)]
    fn test_most_used_tie_break(#[case] counts: (u32, u32, u32), #[case] expected: Move) {
        let history = MoveHistory::with_counts(counts.0, counts.1, counts.2);
        assert_eq!(MostUsedStrategy::most_used(&history), expected);
    }
}
