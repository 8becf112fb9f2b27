//! Q-learning goalkeeper for a penalty shootout mini-game
//!
//! This crate provides:
//! - A tabular Q-learning decision engine with ε-greedy action selection
//! - The round controller that sequences shots, rewards, and learning updates
//! - Scripted shooter strategies for simulation and testing
//! - Snapshot export (JSON/CSV) and a CLI for simulated or interactive play
//!
//! The keeper conditions each dive on the shooter's most recent direction
//! and learns from a fixed reward contract: +1 for a matching dive (save),
//! −1 otherwise (goal). Rounds are strictly sequential; the engine performs
//! no I/O and keeps the value table exclusively to itself, handing out
//! immutable snapshots for display.

pub mod cli;
pub mod engine;
pub mod error;
pub mod export;
pub mod round;
pub mod shooter;
pub mod types;

pub use engine::{DecisionEngine, EngineConfig, ValueTableSnapshot};
pub use error::{Error, Result};
pub use round::{CONCEDE_REWARD, RoundController, RoundOutcome, SAVE_REWARD, reward_for};
pub use shooter::{CycleShooter, FixedShooter, Shooter, UniformShooter};
pub use types::{Action, State};
