//! Core engine types: moves, rules, history, RNG, errors.
//!
//! This module contains the fundamental building blocks the rest of
//! the engine is assembled from. Everything here is a pure value type
//! or a deterministic function over one.

pub mod error;
pub mod history;
pub mod moves;
pub mod rng;
pub mod rules;

pub use error::EngineError;
pub use history::HistoryLog;
pub use moves::Move;
pub use rng::{GameRng, GameRngState};
pub use rules::RuleTable;
