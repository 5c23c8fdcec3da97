//! The closed move enumeration.
//!
//! `Move` is the only input type the engine accepts from the outside
//! world. Anything that is not one of the five variants is rejected at
//! the conversion boundary (`TryFrom<u8>`, `FromStr`) with
//! `EngineError::InvalidMove`, so the rest of the engine works with a
//! total, infallible type.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::EngineError;

/// One of the five playable moves.
///
/// The discriminants give every move a stable enumeration index (0-4).
/// Predictors use this index for deterministic tie-breaking: when two
/// moves have equal historical support, the lower index wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
    Lizard = 3,
    Spock = 4,
}

impl Move {
    /// All moves in enumeration order.
    pub const ALL: [Move; 5] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
    ];

    /// Number of distinct moves.
    pub const COUNT: usize = 5;

    /// Stable enumeration index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name as used by UI layers ("rock", "spock", ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Lizard => "lizard",
            Move::Spock => "spock",
        }
    }
}

impl TryFrom<u8> for Move {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Move::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| EngineError::InvalidMove(value.to_string()))
    }
}

impl FromStr for Move {
    type Err = EngineError;

    /// Parse a move name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| EngineError::InvalidMove(s.to_string()))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ordering_matches_indices() {
        for (i, m) in Move::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
    }

    #[test]
    fn test_try_from_u8() {
        assert_eq!(Move::try_from(0), Ok(Move::Rock));
        assert_eq!(Move::try_from(4), Ok(Move::Spock));
        assert!(matches!(Move::try_from(5), Err(EngineError::InvalidMove(_))));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("rock".parse::<Move>(), Ok(Move::Rock));
        assert_eq!("Spock".parse::<Move>(), Ok(Move::Spock));
        assert_eq!("LIZARD".parse::<Move>(), Ok(Move::Lizard));
        assert!(matches!(
            "dynamite".parse::<Move>(),
            Err(EngineError::InvalidMove(_))
        ));
    }

    #[test]
    fn test_serde_lowercase_names() {
        let json = serde_json::to_string(&Move::Scissors).unwrap();
        assert_eq!(json, "\"scissors\"");
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Move::Scissors);
    }

    #[test]
    fn test_display_roundtrip() {
        for m in Move::ALL {
            assert_eq!(m.to_string().parse::<Move>(), Ok(m));
        }
    }
}
