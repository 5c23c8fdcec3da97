//! The RPSLS rule table.
//!
//! The relation is a fixed tournament over the five moves: for every
//! ordered pair of distinct moves exactly one direction wins, no move
//! beats itself, and each move beats exactly two others and loses to
//! exactly two others. The table is baked in at compile time and never
//! mutated.

use crate::core::moves::Move;

/// What each move defeats, indexed by `Move::index()`.
const DEFEATS: [[Move; 2]; Move::COUNT] = [
    [Move::Scissors, Move::Lizard], // rock crushes scissors, crushes lizard
    [Move::Rock, Move::Spock],      // paper covers rock, disproves spock
    [Move::Paper, Move::Lizard],    // scissors cut paper, decapitate lizard
    [Move::Spock, Move::Paper],     // lizard poisons spock, eats paper
    [Move::Scissors, Move::Rock],   // spock smashes scissors, vaporizes rock
];

/// Static tournament relation encoding which move beats which.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleTable;

impl RuleTable {
    /// True iff `a` defeats `b`.
    #[must_use]
    pub fn beats(a: Move, b: Move) -> bool {
        DEFEATS[a.index()].contains(&b)
    }

    /// The two moves `a` defeats.
    #[must_use]
    pub const fn defeats(a: Move) -> [Move; 2] {
        DEFEATS[a.index()]
    }

    /// The two moves that defeat `target`.
    #[must_use]
    pub fn counters_of(target: Move) -> [Move; 2] {
        let mut out = [target; 2];
        let mut n = 0;
        for m in Move::ALL {
            if Self::beats(m, target) {
                out[n] = m;
                n += 1;
            }
        }
        debug_assert_eq!(n, 2, "every move must have exactly two counters");
        out
    }
}
