//! Counter-move selection: turning predictions into an opponent move.
//!
//! The policy is deliberately two-stage random. Even a perfect
//! prediction is only followed with probability `weight * confidence`;
//! otherwise the opponent plays uniformly at random. A player who has
//! reverse-engineered the predictor still cannot exploit the opponent
//! deterministically.

pub mod config;

pub use config::{Difficulty, PolicyConfig};

use crate::core::{EngineError, GameRng, Move, RuleTable};
use crate::predict::{PredictionResult, Predictor, SequencePredictor};

/// Chooses the opponent's move from the player's history.
///
/// Stateless between calls: the choice is a pure function of the
/// history snapshot, the configuration, and the injected RNG.
#[derive(Clone, Debug)]
pub struct OpponentPolicy {
    config: PolicyConfig,
    predictor: SequencePredictor,
}

impl OpponentPolicy {
    /// Build a policy, rejecting out-of-range configuration.
    pub fn new(config: PolicyConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            predictor: SequencePredictor::new(config.order),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Choose the opponent's move for the coming round.
    ///
    /// Returns the move together with the prediction that informed it,
    /// so callers can surface what the opponent expected.
    pub fn choose_move(&self, history: &[Move], rng: &mut GameRng) -> (Move, PredictionResult) {
        if !self.config.enabled {
            return (random_move(rng), PredictionResult::none());
        }

        let prediction = if history.len() < self.config.min_samples {
            PredictionResult::none()
        } else {
            self.predictor.predict(history)
        };

        let Some(target) = prediction.predicted else {
            return (random_move(rng), prediction);
        };

        let chance = self.config.weight * prediction.confidence;
        if rng.gen_f64() < chance {
            let counters = RuleTable::counters_of(target);
            let pick = rng.gen_range_usize(0..counters.len());
            (counters[pick], prediction)
        } else {
            // Uniform fallback, not biased toward the counter.
            (random_move(rng), prediction)
        }
    }
}

fn random_move(rng: &mut GameRng) -> Move {
    Move::ALL[rng.gen_range_usize(0..Move::COUNT)]
}
