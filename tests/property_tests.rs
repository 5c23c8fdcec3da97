//! Property-based tests over random move histories.

use proptest::prelude::*;

use rpsls_engine::core::{GameRng, HistoryLog, Move, RuleTable};
use rpsls_engine::predict::{FrequencyPredictor, Predictor, SequencePredictor};
use rpsls_engine::round::{evaluate, RoundOutcome};
use rpsls_engine::session::{GameSession, SessionConfig};

fn arb_move() -> impl Strategy<Value = Move> {
    (0usize..Move::COUNT).prop_map(|i| Move::ALL[i])
}

fn arb_history() -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(arb_move(), 0..64)
}

proptest! {
    #[test]
    fn prop_beats_is_a_tournament(a in arb_move(), b in arb_move()) {
        if a == b {
            prop_assert!(!RuleTable::beats(a, b));
        } else {
            prop_assert!(RuleTable::beats(a, b) != RuleTable::beats(b, a));
        }
    }

    #[test]
    fn prop_evaluate_antisymmetric(a in arb_move(), b in arb_move()) {
        match evaluate(a, b) {
            RoundOutcome::Win => prop_assert_eq!(evaluate(b, a), RoundOutcome::Lose),
            RoundOutcome::Lose => prop_assert_eq!(evaluate(b, a), RoundOutcome::Win),
            RoundOutcome::Tie => prop_assert_eq!(a, b),
        }
    }

    #[test]
    fn prop_frequency_confidence_in_unit_interval(history in arb_history()) {
        let result = FrequencyPredictor::default().predict(&history);
        prop_assert!((0.0..=1.0).contains(&result.confidence));
        prop_assert_eq!(result.predicted.is_none(), history.is_empty());
    }

    #[test]
    fn prop_sequence_confidence_in_unit_interval(
        history in arb_history(),
        order in 1usize..=5,
    ) {
        let result = SequencePredictor::new(order).predict(&history);
        prop_assert!((0.0..=1.0).contains(&result.confidence));
        if history.len() <= order {
            prop_assert!(result.predicted.is_none());
        }
    }

    #[test]
    fn prop_predicted_move_occurs_in_history(history in arb_history()) {
        // Both strategies only ever predict moves the player has made.
        for result in [
            FrequencyPredictor::default().predict(&history),
            SequencePredictor::new(2).predict(&history),
        ] {
            if let Some(m) = result.predicted {
                prop_assert!(history.contains(&m));
            }
        }
    }

    #[test]
    fn prop_history_never_exceeds_cap(
        moves in arb_history(),
        cap in 1usize..10,
    ) {
        let mut log = HistoryLog::capped(cap);
        for m in &moves {
            log.record(*m);
            prop_assert!(log.len() <= cap);
        }
        // The retained tail matches the end of the input.
        let keep = moves.len().min(cap);
        prop_assert_eq!(log.all(), &moves[moves.len() - keep..]);
    }

    #[test]
    fn prop_session_scores_account_for_every_round(
        moves in prop::collection::vec(arb_move(), 1..40),
        seed in any::<u64>(),
    ) {
        let config = SessionConfig::default().with_unbounded_tries();
        let mut session = GameSession::new(config, GameRng::new(seed)).unwrap();

        let mut ties = 0u32;
        for m in &moves {
            let report = session.submit_move(*m).unwrap();
            if report.outcome == RoundOutcome::Tie {
                ties += 1;
            }
        }

        prop_assert_eq!(
            session.player_score() + session.opponent_score() + ties,
            moves.len() as u32
        );
        prop_assert_eq!(session.history(), moves.as_slice());
    }
}
