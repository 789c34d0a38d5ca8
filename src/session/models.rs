use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bot::StrategyKind;
use crate::game::{GameError, Move, MoveCounts, RoundReport, ScoreBoard, Winner};

/// Request payload for playing a round.
///
/// The move is kept as raw JSON so that a missing, null or non-string move
/// surfaces as an `InvalidMove` error instead of a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct PlayRoundRequest {
    #[serde(rename = "move", default)]
    pub raw_move: Option<Value>,
}

impl PlayRoundRequest {
    pub fn player_move(&self) -> Result<Move, GameError> {
        match &self.raw_move {
            Some(Value::String(raw)) => raw.parse(),
            Some(other) => Err(GameError::InvalidMove(other.to_string())),
            None => Err(GameError::InvalidMove(String::new())),
        }
    }
}

/// Response for game creation and game lookups
#[derive(Debug, Serialize, Deserialize)]
pub struct GameResponse {
    pub id: String,
    pub scores: ScoreBoard,
    pub move_counts: MoveCounts,
    pub last_move: Option<Move>,
}

/// Response for a played round
#[derive(Debug, Serialize, Deserialize)]
pub struct RoundResponse {
    pub game_id: String,
    pub player_move: Move,
    pub computer_move: Move,
    pub winner: Winner,
    pub rule: Option<String>,
    pub strategy: StrategyKind,
    pub strategy_label: String,
    pub scores: ScoreBoard,
    /// One line summary, e.g. "Rock vs Paper -> Computer   [Cheat]"
    pub summary: String,
}

impl RoundResponse {
    pub fn from_report(game_id: &str, report: &RoundReport) -> Self {
        let outcome = &report.outcome;
        Self {
            game_id: game_id.to_string(),
            player_move: outcome.player_move,
            computer_move: outcome.computer_move,
            winner: outcome.winner,
            rule: outcome.rule.map(str::to_string),
            strategy: outcome.strategy,
            strategy_label: outcome.strategy.label(),
            scores: report.scores,
            summary: outcome.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"move": "rock"}"#, Move::Rock)]
    #[case(r#"{"move": "S"}"#, Move::Scissors)]
    fn test_player_move_parses_strings(#[case] body: &str, #[case] expected: Move) {
        let request: PlayRoundRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.player_move().unwrap(), expected);
    }

    #[rstest]
    #[case(r#"{}"#)]
    #[case(r#"{"move": null}"#)]
    #[case(r#"{"move": 1}"#)]
    #[case(r#"{"move": ["rock"]}"#)]
    #[case(r#"{"move": "lizard"}"#)]
    fn test_player_move_rejects_non_moves(#[case] body: &str) {
        let request: PlayRoundRequest = serde_json::from_str(body).unwrap();
        assert!(matches!(
            request.player_move(),
            Err(GameError::InvalidMove(_))
        ));
    }
}
