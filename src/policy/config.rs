//! Opponent policy configuration and difficulty presets.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;
use crate::predict::sequence::MAX_ORDER;

/// Opponent policy parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// If false, prediction is ignored entirely and the opponent plays
    /// uniformly at random.
    pub enabled: bool,

    /// Sequence-match order, in [1, 5].
    /// Higher orders match longer patterns but repeat less often.
    pub order: usize,

    /// Maximum probability of following a prediction, in [0, 1].
    /// The actual chance per round is `weight * confidence`.
    pub weight: f64,

    /// Observations required before a prediction is trusted.
    pub min_samples: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            order: 2,
            weight: 0.8,
            min_samples: 1,
        }
    }
}

impl PolicyConfig {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = min_samples;
        self
    }

    /// Reject out-of-range parameters.
    ///
    /// Called at session construction and reset, so a caller bug
    /// surfaces immediately instead of being silently clamped away.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(1..=MAX_ORDER).contains(&self.order) {
            return Err(EngineError::InvalidConfig(format!(
                "order must be in [1, {MAX_ORDER}], got {}",
                self.order
            )));
        }
        if !self.weight.is_finite() || !(0.0..=1.0).contains(&self.weight) {
            return Err(EngineError::InvalidConfig(format!(
                "weight must be in [0, 1], got {}",
                self.weight
            )));
        }
        Ok(())
    }
}

/// Difficulty presets bundling `{enabled, order, weight}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random opponent; prediction disabled.
    Easy,
    /// Short pattern matching, followed 60% of the time at full confidence.
    Normal,
    /// Longer pattern matching, followed 75% of the time at full confidence.
    Hard,
}

impl Difficulty {
    /// The policy bundle this difficulty maps to.
    #[must_use]
    pub fn policy(self) -> PolicyConfig {
        match self {
            Difficulty::Easy => PolicyConfig::default().with_enabled(false),
            Difficulty::Normal => PolicyConfig::default().with_order(2).with_weight(0.6),
            Difficulty::Hard => PolicyConfig::default().with_order(3).with_weight(0.75),
        }
    }
}
