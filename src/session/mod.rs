//! Session orchestration: one round per synchronous `submit_move` call.
//!
//! The session owns the history log and the score counters for its
//! whole lifetime. Each round resolves to completion inside one call,
//! with no suspension points: callers layering animation or countdown
//! delays on top do so after the authoritative state change.

pub mod config;

pub use config::{SessionConfig, DEFAULT_MAX_TRIES};

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, GameRng, GameRngState, HistoryLog, Move};
use crate::policy::OpponentPolicy;
use crate::predict::PredictionResult;
use crate::round::{evaluate, RoundOutcome};

/// Observable session phase.
///
/// `Idle` exists only between construction steps: `GameSession::new`
/// performs the Idle -> AwaitingMove start transition itself.
/// `RoundResolved` is transient inside `submit_move`, which resolves
/// the round and immediately moves to `AwaitingMove` or `Exhausted`,
/// so callers polling `phase()` between calls never observe either.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Idle,
    AwaitingMove,
    RoundResolved,
    Exhausted,
}

/// Everything the caller learns from one resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    pub opponent_move: Move,
    pub outcome: RoundOutcome,
    pub player_score: u32,
    pub opponent_score: u32,
    pub tries_remaining: Option<u32>,
    /// What the opponent expected the player to do this round.
    pub predicted: PredictionResult,
}

/// Serializable capture of a full session.
///
/// The caller owns the persistence format; restoring a snapshot
/// resumes play exactly where it left off, RNG position included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: SessionConfig,
    pub player_score: u32,
    pub opponent_score: u32,
    pub tries_remaining: Option<u32>,
    pub history: Vec<Move>,
    pub phase: SessionPhase,
    pub rng: GameRngState,
}

/// One continuous play sequence with its own scores and try counter.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    policy: OpponentPolicy,
    history: HistoryLog,
    rng: GameRng,
    player_score: u32,
    opponent_score: u32,
    tries_remaining: Option<u32>,
    phase: SessionPhase,
}

impl GameSession {
    /// Start a session in `AwaitingMove` (or `Exhausted` if configured
    /// with zero tries). Rejects invalid configuration.
    pub fn new(config: SessionConfig, rng: GameRng) -> Result<Self, EngineError> {
        let policy = OpponentPolicy::new(config.policy)?;
        Ok(Self {
            policy,
            history: HistoryLog::with_limit(config.history_capacity),
            rng,
            player_score: 0,
            opponent_score: 0,
            tries_remaining: config.max_tries,
            phase: Self::phase_for_tries(config.max_tries),
            config,
        })
    }

    /// Play one round.
    ///
    /// The opponent commits to its move from the history of completed
    /// rounds only; the move being submitted is recorded afterwards, so
    /// the predictor forecasts the current move rather than peeking at
    /// it. Scores, tries, and history are updated before this returns.
    pub fn submit_move(&mut self, player_move: Move) -> Result<RoundReport, EngineError> {
        if self.phase == SessionPhase::Exhausted {
            return Err(EngineError::NoTriesRemaining);
        }
        self.phase = SessionPhase::RoundResolved;

        let (opponent_move, predicted) = self.policy.choose_move(self.history.all(), &mut self.rng);
        self.history.record(player_move);

        let outcome = evaluate(player_move, opponent_move);
        match outcome {
            RoundOutcome::Win => self.player_score += 1,
            RoundOutcome::Lose => self.opponent_score += 1,
            RoundOutcome::Tie => {}
        }

        if let Some(tries) = self.tries_remaining.as_mut() {
            *tries = tries.saturating_sub(1);
        }
        self.phase = Self::phase_for_tries(self.tries_remaining);

        Ok(RoundReport {
            opponent_move,
            outcome,
            player_score: self.player_score,
            opponent_score: self.opponent_score,
            tries_remaining: self.tries_remaining,
            predicted,
        })
    }

    /// Reset to a fresh session under `config`: scores zeroed, tries
    /// restored, history cleared. Available from any phase.
    pub fn reset(&mut self, config: SessionConfig) -> Result<(), EngineError> {
        self.policy = OpponentPolicy::new(config.policy)?;
        self.history = HistoryLog::with_limit(config.history_capacity);
        self.player_score = 0;
        self.opponent_score = 0;
        self.tries_remaining = config.max_tries;
        self.phase = Self::phase_for_tries(config.max_tries);
        self.config = config;
        Ok(())
    }

    /// Read-only snapshot of the retained player history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        self.history.all()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    #[must_use]
    pub fn opponent_score(&self) -> u32 {
        self.opponent_score
    }

    #[must_use]
    pub fn tries_remaining(&self) -> Option<u32> {
        self.tries_remaining
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Capture the session for persistence by the caller.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.config,
            player_score: self.player_score,
            opponent_score: self.opponent_score,
            tries_remaining: self.tries_remaining,
            history: self.history.all().to_vec(),
            phase: self.phase,
            rng: self.rng.state(),
        }
    }

    /// Rebuild a session from a snapshot, resuming play exactly.
    pub fn restore(snapshot: SessionSnapshot) -> Result<Self, EngineError> {
        let policy = OpponentPolicy::new(snapshot.config.policy)?;
        Ok(Self {
            policy,
            history: HistoryLog::from_entries(snapshot.history, snapshot.config.history_capacity),
            rng: GameRng::from_state(&snapshot.rng),
            player_score: snapshot.player_score,
            opponent_score: snapshot.opponent_score,
            tries_remaining: snapshot.tries_remaining,
            phase: snapshot.phase,
            config: snapshot.config,
        })
    }

    fn phase_for_tries(tries: Option<u32>) -> SessionPhase {
        match tries {
            Some(0) => SessionPhase::Exhausted,
            _ => SessionPhase::AwaitingMove,
        }
    }
}
