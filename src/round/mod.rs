//! Round outcome evaluation.

use serde::{Deserialize, Serialize};

use crate::core::{Move, RuleTable};

/// Result of one round, from the player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    Win,
    Lose,
    Tie,
}

/// Evaluate a round from the player's perspective.
///
/// Total over all move pairs: the tournament invariant of `RuleTable`
/// guarantees exactly one of the three outcomes.
#[must_use]
pub fn evaluate(player: Move, opponent: Move) -> RoundOutcome {
    if player == opponent {
        RoundOutcome::Tie
    } else if RuleTable::beats(player, opponent) {
        RoundOutcome::Win
    } else {
        RoundOutcome::Lose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_outcomes() {
        assert_eq!(evaluate(Move::Rock, Move::Scissors), RoundOutcome::Win);
        assert_eq!(evaluate(Move::Rock, Move::Paper), RoundOutcome::Lose);
        assert_eq!(evaluate(Move::Rock, Move::Rock), RoundOutcome::Tie);
    }

    #[test]
    fn test_antisymmetry() {
        for a in Move::ALL {
            for b in Move::ALL {
                match evaluate(a, b) {
                    RoundOutcome::Win => assert_eq!(evaluate(b, a), RoundOutcome::Lose),
                    RoundOutcome::Lose => assert_eq!(evaluate(b, a), RoundOutcome::Win),
                    RoundOutcome::Tie => assert_eq!(a, b),
                }
            }
        }
    }
}
