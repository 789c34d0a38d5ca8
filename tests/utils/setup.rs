use roshambo::{GameEngine, Move, RoundReport, StrategyKind};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// Wraps a seeded engine and keeps every report it produced
pub struct TestGame {
    pub engine: GameEngine,
    pub reports: Vec<RoundReport>,
}

impl TestGame {
    pub fn seeded(seed: u64) -> Self {
        Self {
            engine: GameEngine::seeded(seed),
            reports: Vec::new(),
        }
    }

    pub fn play(&mut self, player_move: Move) -> RoundReport {
        let report = self.engine.play_round(player_move);
        self.reports.push(report);
        report
    }

    pub fn play_as(&mut self, kind: StrategyKind, player_move: Move) -> RoundReport {
        let report = self.engine.play_round_with(kind, player_move);
        self.reports.push(report);
        report
    }
}

/// Play `moves` in order and return the game afterwards
pub fn play_many(seed: u64, moves: &[Move]) -> TestGame {
    let mut game = TestGame::seeded(seed);
    for m in moves {
        game.play(*m);
    }
    game
}
