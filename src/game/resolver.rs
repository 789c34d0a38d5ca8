use super::{Move, Winner};

/// Result of comparing a player move against a computer move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub winner: Winner,
    /// Explanation of the winning pair, absent on a tie
    pub rule: Option<&'static str>,
}

pub struct RoundResolver;

impl RoundResolver {
    /// Decide who won the round. Total over all nine move pairs.
    pub fn resolve(player_move: Move, computer_move: Move) -> Resolution {
        if player_move == computer_move {
            return Resolution {
                winner: Winner::Tie,
                rule: None,
            };
        }

        let (winner, winning, losing) = if player_move.beats(computer_move) {
            (Winner::Player, player_move, computer_move)
        } else {
            (Winner::Computer, computer_move, player_move)
        };

        Resolution {
            winner,
            rule: Self::rule_for(winning, losing),
        }
    }

    /// Rule text for a (winning, losing) pair, None if the pair is not a win
    pub fn rule_for(winning: Move, losing: Move) -> Option<&'static str> {
        match (winning, losing) {
            (Move::Rock, Move::Scissors) => Some("Rock breaks scissors"),
            (Move::Paper, Move::Rock) => Some("Paper covers rock"),
            (Move::Scissors, Move::Paper) => Some("Scissors cuts paper"),
            (Move::Rock, Move::Rock | Move::Paper)
            | (Move::Paper, Move::Paper | Move::Scissors)
            | (Move::Scissors, Move::Scissors | Move::Rock) => None,
        }
    }
}
