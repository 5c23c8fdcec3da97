//! Fixed-order frequency predictor.

use crate::core::Move;

use super::{argmax_move, PredictionResult, Predictor};

/// Predicts the player's most frequent historical move.
///
/// Confidence is the predicted move's share of the counted sample.
#[derive(Clone, Copy, Debug)]
pub struct FrequencyPredictor {
    /// Observations required before committing to a prediction.
    pub min_samples: usize,
    /// Count only the most recent `window` entries (None = whole history).
    pub window: Option<usize>,
}

impl Default for FrequencyPredictor {
    fn default() -> Self {
        Self {
            min_samples: 1,
            window: None,
        }
    }
}

impl FrequencyPredictor {
    #[must_use]
    pub fn new(min_samples: usize) -> Self {
        Self {
            min_samples,
            window: None,
        }
    }

    #[must_use]
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = Some(window);
        self
    }
}

impl Predictor for FrequencyPredictor {
    fn predict(&self, history: &[Move]) -> PredictionResult {
        let sample = match self.window {
            Some(n) => &history[history.len().saturating_sub(n)..],
            None => history,
        };

        if sample.is_empty() || sample.len() < self.min_samples {
            return PredictionResult::none();
        }

        let mut counts = [0u32; Move::COUNT];
        for m in sample {
            counts[m.index()] += 1;
        }

        match argmax_move(&counts) {
            Some((predicted, count)) => {
                PredictionResult::new(predicted, f64::from(count) / sample.len() as f64)
            }
            None => PredictionResult::none(),
        }
    }
}
