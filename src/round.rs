//! Round sequencing and the reward contract
//!
//! The [`RoundController`] owns the boundary between the human shooter and
//! the decision engine: it runs the two-call sequence (select, then update)
//! once per round, computes the reward, advances the context state, and
//! keeps the running counters the presentation layer displays. The engine
//! itself never sees any of this sequencing.

use serde::Serialize;

use crate::{
    engine::DecisionEngine,
    error::Result,
    types::{Action, State},
};

/// Reward for a successful defensive match (dive equals shot).
pub const SAVE_REWARD: f64 = 1.0;
/// Reward for a conceded goal (dive differs from shot).
pub const CONCEDE_REWARD: f64 = -1.0;

/// Reward contract: +1 if and only if the dive matches the shot, else −1.
pub fn reward_for(dive: Action, shot: Action) -> f64 {
    if dive == shot {
        SAVE_REWARD
    } else {
        CONCEDE_REWARD
    }
}

/// Everything observed in one completed round.
///
/// Ephemeral: produced once per round for display and logging, never
/// retained by the learning core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundOutcome {
    /// Context the keeper's decision conditioned on
    pub prior_state: State,
    /// The keeper's dive direction
    pub agent_action: Action,
    /// The shooter's shot direction
    pub human_action: Action,
    /// +1 for a save, −1 for a goal
    pub reward: f64,
    /// Context for the following round (always the shot direction)
    pub next_state: State,
}

impl RoundOutcome {
    /// Whether the keeper saved the shot.
    pub fn is_save(&self) -> bool {
        self.agent_action == self.human_action
    }
}

/// Sequences rounds against the decision engine.
///
/// Tracks the current context state (starting at [`State::Start`]) and the
/// running totals of rounds, saves, and conceded goals. Rounds are strictly
/// sequential: each call to [`play_round`](RoundController::play_round) runs
/// the full select/reward/update cycle to completion.
#[derive(Debug)]
pub struct RoundController {
    engine: DecisionEngine,
    context: State,
    rounds: u64,
    saves: u64,
    goals: u64,
}

impl RoundController {
    /// Wrap an engine in a fresh controller at the initial context.
    pub fn new(engine: DecisionEngine) -> Self {
        Self {
            engine,
            context: State::Start,
            rounds: 0,
            saves: 0,
            goals: 0,
        }
    }

    /// Play one round given the human's shot direction.
    ///
    /// Selects the keeper's dive for the current context, computes the
    /// reward, applies the learning update, then advances the context to the
    /// observed shot.
    ///
    /// # Errors
    ///
    /// Propagates engine update failures; the reward produced here is always
    /// finite, so a failure indicates corrupted engine parameters.
    pub fn play_round(&mut self, shot: Action) -> Result<RoundOutcome> {
        let dive = self.engine.select_action(self.context);
        let reward = reward_for(dive, shot);
        let next_state = State::from(shot);

        self.engine.update(self.context, dive, reward, next_state)?;

        let outcome = RoundOutcome {
            prior_state: self.context,
            agent_action: dive,
            human_action: shot,
            reward,
            next_state,
        };

        self.context = next_state;
        self.rounds += 1;
        if outcome.is_save() {
            self.saves += 1;
        } else {
            self.goals += 1;
        }

        Ok(outcome)
    }

    /// Context state the next decision will condition on.
    pub fn context(&self) -> State {
        self.context
    }

    /// Total completed rounds.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Total successful saves.
    pub fn saves(&self) -> u64 {
        self.saves
    }

    /// Total conceded goals.
    pub fn goals(&self) -> u64 {
        self.goals
    }

    /// Fraction of rounds saved, 0.0 before any round.
    pub fn save_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.saves as f64 / self.rounds as f64
        }
    }

    /// Read-only access to the engine, for snapshots and per-cell display.
    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }
}
