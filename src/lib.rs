//! # rpsls-engine
//!
//! Predictive opponent core for Rock-Paper-Scissors-Lizard-Spock.
//!
//! ## Design Principles
//!
//! 1. **Explicit sessions**: No global state. Scores, history, and
//!    configuration live in a `GameSession` constructed by the caller.
//!
//! 2. **Injected randomness**: Every random draw goes through a seedable
//!    `GameRng`, so behavior is fully reproducible in tests.
//!
//! 3. **Synchronous rounds**: One `submit_move` call resolves a whole
//!    round. Animation, audio, and persistence are the caller's problem
//!    and happen after the authoritative state change.
//!
//! ## Architecture
//!
//! - **Prediction**: A frequency counter and an order-N sequence matcher
//!   turn the player's move history into a predicted next move plus a
//!   confidence score.
//!
//! - **Two-stage counter policy**: The opponent follows the prediction
//!   with probability `weight * confidence`, otherwise plays uniformly at
//!   random, so it can never be exploited deterministically.
//!
//! ## Modules
//!
//! - `core`: Move enumeration, rule table, history log, RNG, errors
//! - `predict`: Frequency and order-N sequence prediction strategies
//! - `policy`: Counter-move selection and difficulty presets
//! - `round`: Win/lose/tie evaluation
//! - `session`: Round orchestration, scoring, snapshots

pub mod core;
pub mod predict;
pub mod policy;
pub mod round;
pub mod session;

// Re-export commonly used types
pub use crate::core::{EngineError, GameRng, GameRngState, HistoryLog, Move, RuleTable};

pub use crate::predict::{FrequencyPredictor, PredictionResult, Predictor, SequencePredictor};

pub use crate::policy::{Difficulty, OpponentPolicy, PolicyConfig};

pub use crate::round::{evaluate, RoundOutcome};

pub use crate::session::{
    GameSession, RoundReport, SessionConfig, SessionPhase, SessionSnapshot,
};
