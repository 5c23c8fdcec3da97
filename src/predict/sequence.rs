//! Order-N sequence predictor (Markov-like pattern matching).

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::Move;

use super::{argmax_move, FrequencyPredictor, PredictionResult, Predictor};

/// Order is capped at this many moves; longer patterns almost never
/// repeat within a single session.
pub const MAX_ORDER: usize = 5;

/// An order-N pattern of consecutive player moves.
type Pattern = SmallVec<[Move; MAX_ORDER]>;

/// Predicts the move that historically followed the last N moves.
///
/// Builds a transition table from every N-length window in the history
/// to the moves that immediately followed it, then looks up the current
/// suffix. An unseen suffix falls back to frequency prediction over the
/// whole history; a history of N or fewer moves predicts nothing.
#[derive(Clone, Copy, Debug)]
pub struct SequencePredictor {
    order: usize,
    fallback: FrequencyPredictor,
}

impl SequencePredictor {
    /// Create a predictor of the given order.
    ///
    /// The order is defensively clamped to `[1, MAX_ORDER]`; callers
    /// that want out-of-range orders rejected instead should validate
    /// via `PolicyConfig`.
    #[must_use]
    pub fn new(order: usize) -> Self {
        Self {
            order: order.clamp(1, MAX_ORDER),
            fallback: FrequencyPredictor::default(),
        }
    }

    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }
}

impl Predictor for SequencePredictor {
    fn predict(&self, history: &[Move]) -> PredictionResult {
        let n = self.order;
        if history.len() <= n {
            return PredictionResult::none();
        }

        // Transition table: pattern -> per-move follower counts.
        // Only windows with a follower are counted, so the trailing
        // suffix itself never matches.
        let mut table: FxHashMap<Pattern, [u32; Move::COUNT]> = FxHashMap::default();
        for i in 0..history.len() - n {
            let pattern = Pattern::from_slice(&history[i..i + n]);
            let follower = history[i + n];
            table.entry(pattern).or_insert([0; Move::COUNT])[follower.index()] += 1;
        }

        let suffix = Pattern::from_slice(&history[history.len() - n..]);
        match table.get(&suffix) {
            Some(counts) => {
                let total: u32 = counts.iter().sum();
                match argmax_move(counts) {
                    Some((predicted, count)) if total > 0 => {
                        PredictionResult::new(predicted, f64::from(count) / f64::from(total))
                    }
                    _ => PredictionResult::none(),
                }
            }
            None => self.fallback.predict(history),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Move::{Lizard, Paper, Rock, Scissors, Spock};

    #[test]
    fn test_order_two_repeated_pattern() {
        // [rock, paper] was followed by scissors once and lizard once;
        // the lowest-index tie-break picks scissors at confidence 1/2.
        let history = [Rock, Paper, Scissors, Rock, Paper, Lizard, Rock, Paper];
        let result = SequencePredictor::new(2).predict(&history);

        assert_eq!(result.predicted, Some(Scissors));
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_dominant_follower() {
        let history = [Rock, Paper, Spock, Rock, Paper, Spock, Rock, Paper];
        let result = SequencePredictor::new(2).predict(&history);

        assert_eq!(result.predicted, Some(Spock));
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_short_history_predicts_nothing() {
        let history = [Rock, Paper];
        let result = SequencePredictor::new(2).predict(&history);

        assert_eq!(result, PredictionResult::none());
        assert_eq!(SequencePredictor::new(3).predict(&history), PredictionResult::none());
    }

    #[test]
    fn test_unseen_suffix_falls_back_to_frequency() {
        // [lizard, spock] never occurred before; overall rock dominates.
        let history = [Rock, Rock, Rock, Lizard, Spock];
        let result = SequencePredictor::new(2).predict(&history);

        assert_eq!(result.predicted, Some(Rock));
        assert!((result.confidence - 3.0 / 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_order_is_clamped() {
        assert_eq!(SequencePredictor::new(0).order(), 1);
        assert_eq!(SequencePredictor::new(99).order(), MAX_ORDER);
    }

    #[test]
    fn test_order_one_counts_single_move_followers() {
        // rock was followed by paper twice and scissors once.
        let history = [Rock, Paper, Rock, Scissors, Rock, Paper, Rock];
        let result = SequencePredictor::new(1).predict(&history);

        assert_eq!(result.predicted, Some(Paper));
        assert!((result.confidence - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_pure_over_identical_input() {
        let history = [Rock, Paper, Scissors, Rock, Paper];
        let predictor = SequencePredictor::new(2);

        assert_eq!(predictor.predict(&history), predictor.predict(&history));
    }
}
