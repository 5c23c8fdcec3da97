//! Player-move prediction strategies.
//!
//! Two interchangeable strategies, both pure functions of a history
//! snapshot:
//! - `FrequencyPredictor`: the player's overall most frequent move
//! - `SequencePredictor`: order-N pattern matching over the recent
//!   history (Markov-like), falling back to frequency when the current
//!   pattern has never been seen
//!
//! Tie-breaking is a fixed policy: when two moves have equal support,
//! the one with the lower enumeration index is predicted. This keeps
//! predictions reproducible across runs.

pub mod frequency;
pub mod sequence;

pub use frequency::FrequencyPredictor;
pub use sequence::SequencePredictor;

use serde::{Deserialize, Serialize};

use crate::core::Move;

/// Outcome of a prediction pass over the move history.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// The move the player is expected to make next, if any.
    pub predicted: Option<Move>,
    /// Fraction of historical occurrences supporting the prediction,
    /// in [0, 1]. Zero when `predicted` is `None`.
    pub confidence: f64,
}

impl PredictionResult {
    /// No prediction available.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            predicted: None,
            confidence: 0.0,
        }
    }

    #[must_use]
    pub const fn new(predicted: Move, confidence: f64) -> Self {
        Self {
            predicted: Some(predicted),
            confidence,
        }
    }
}

/// A prediction strategy over a history snapshot.
///
/// Implementations must be pure: identical history and configuration
/// produce identical results, with no hidden mutable state.
pub trait Predictor: Send + Sync {
    /// Predict the player's next move from their history (oldest first).
    fn predict(&self, history: &[Move]) -> PredictionResult;
}

/// Tally per-move counts and pick the maximum, breaking ties toward
/// the lowest enumeration index. Returns `None` if all counts are zero.
pub(crate) fn argmax_move(counts: &[u32; Move::COUNT]) -> Option<(Move, u32)> {
    let mut best: Option<(Move, u32)> = None;
    for m in Move::ALL {
        let count = counts[m.index()];
        if count > 0 && best.map_or(true, |(_, c)| count > c) {
            best = Some((m, count));
        }
    }
    best
}
