use std::fmt;

use rand::{rngs::StdRng, RngCore, SeedableRng};
use serde::Serialize;
use tracing::debug;

use crate::bot::{StrategyKind, StrategySelector};

use super::{Move, MoveHistory, RoundResolver, ScoreBoard, Winner};

/// Everything that happened in one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    pub player_move: Move,
    pub computer_move: Move,
    pub winner: Winner,
    pub rule: Option<&'static str>,
    pub strategy: StrategyKind,
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {} -> {}   [{}]",
            self.player_move, self.computer_move, self.winner, self.strategy
        )
    }
}

/// Outcome of a round together with the scores after it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    pub outcome: RoundOutcome,
    pub scores: ScoreBoard,
}

/// One game session: the player's history, the scores and the random source
/// used to pick and run strategies.
pub struct GameEngine<R = StdRng> {
    history: MoveHistory,
    scores: ScoreBoard,
    selector: StrategySelector,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Deterministic engine for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: RngCore> GameEngine<R> {
    pub fn new(rng: R) -> Self {
        Self {
            history: MoveHistory::new(),
            scores: ScoreBoard::new(),
            selector: StrategySelector::new(),
            rng,
        }
    }

    /// Play one round against a randomly selected strategy
    pub fn play_round(&mut self, player_move: Move) -> RoundReport {
        // Strategies see the history as it was before this round.
        let (strategy, name) = self.selector.select(&mut self.rng);
        let kind = strategy.kind();
        let computer_move = strategy.decide(player_move, &self.history, &mut self.rng);
        debug!(strategy = %name, "Strategy selected");

        self.finish_round(kind, player_move, computer_move)
    }

    /// Play one round against a specific strategy
    pub fn play_round_with(&mut self, kind: StrategyKind, player_move: Move) -> RoundReport {
        let computer_move = self
            .selector
            .strategy(kind)
            .decide(player_move, &self.history, &mut self.rng);

        self.finish_round(kind, player_move, computer_move)
    }

    fn finish_round(
        &mut self,
        kind: StrategyKind,
        player_move: Move,
        computer_move: Move,
    ) -> RoundReport {
        let resolution = RoundResolver::resolve(player_move, computer_move);

        self.history.record_player_move(player_move);
        self.scores.record(resolution.winner);

        let outcome = RoundOutcome {
            player_move,
            computer_move,
            winner: resolution.winner,
            rule: resolution.rule,
            strategy: kind,
        };

        debug!(
            strategy = %kind,
            player_move = %player_move,
            computer_move = %computer_move,
            winner = %resolution.winner,
            round = self.scores.rounds_played(),
            "Round resolved"
        );

        RoundReport {
            outcome,
            scores: self.scores,
        }
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }
}
