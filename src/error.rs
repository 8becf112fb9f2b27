//! Error types for the goalie crate

use thiserror::Error;

use crate::types::{Action, State};

/// Main error type for the goalie crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action '{input}' (expected one of: left, center, right)")]
    ParseAction { input: String },

    #[error("invalid state '{input}' (expected one of: left, center, right, start)")]
    ParseState { input: String },

    #[error("shot pattern must contain at least one direction")]
    EmptyPattern,

    #[error("reward {value} must be finite")]
    NonFiniteReward { value: f64 },

    #[error("update for ({state}, {action}) produced a non-finite value")]
    NonFiniteValue { state: State, action: Action },

    #[error("learning rate {value} must be in (0, 1]")]
    InvalidLearningRate { value: f64 },

    #[error("discount factor {value} must be in [0, 1]")]
    InvalidDiscountFactor { value: f64 },

    #[error("exploration rate {value} must be in [0, 1]")]
    InvalidExplorationRate { value: f64 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
