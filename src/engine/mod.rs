//! Tabular Q-learning decision engine
//!
//! This module implements the goalkeeper's learning core: a dense value
//! table over the (state, action) cross product, ε-greedy action selection,
//! and the one-step Q-learning update applied after every round.
//!
//! The engine is pure in-memory computation with no I/O and no internal
//! locking; the round controller serializes rounds, so each
//! `select_action`/`update` pair runs to completion before the next begins.
//!
//! ## Usage Example
//!
//! ```
//! use goalie::engine::{DecisionEngine, EngineConfig};
//! use goalie::types::{Action, State};
//!
//! let mut engine = DecisionEngine::new(EngineConfig::new().with_seed(42))?;
//!
//! // One round: decide, observe the shot, learn.
//! let dive = engine.select_action(State::Start);
//! let shot = Action::Left;
//! let reward = if dive == shot { 1.0 } else { -1.0 };
//! engine.update(State::Start, dive, reward, State::from(shot))?;
//! # Ok::<(), goalie::Error>(())
//! ```

pub mod agent;
pub mod config;
pub mod value_table;

// Public re-exports
pub use agent::DecisionEngine;
pub use config::{
    DEFAULT_DISCOUNT_FACTOR, DEFAULT_EPSILON, DEFAULT_LEARNING_RATE, EngineConfig,
};
pub use value_table::{SnapshotCell, ValueTable, ValueTableSnapshot};
