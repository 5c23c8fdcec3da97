//! Engine error taxonomy.
//!
//! All errors are local and non-fatal: a rejected call leaves the
//! session usable, and the only retry is the caller resubmitting a
//! valid request.

use std::error::Error;
use std::fmt;

/// Errors surfaced by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Input was not one of the five enumerated moves.
    InvalidMove(String),
    /// The session is exhausted; reset before playing again.
    NoTriesRemaining,
    /// Configuration rejected at reset/construction time
    /// (order outside [1,5], weight outside [0,1]).
    InvalidConfig(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidMove(input) => {
                write!(f, "invalid move: {input:?} is not one of rock/paper/scissors/lizard/spock")
            }
            EngineError::NoTriesRemaining => {
                write!(f, "no tries left; reset the session to play again")
            }
            EngineError::InvalidConfig(reason) => {
                write!(f, "invalid configuration: {reason}")
            }
        }
    }
}

impl Error for EngineError {}
