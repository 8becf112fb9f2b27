//! Epsilon-greedy decision engine with one-step Q-learning

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
    engine::{EngineConfig, ValueTable, ValueTableSnapshot},
    error::{Error, Result},
    types::{Action, State},
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Tabular Q-learning decision engine for the goalkeeper.
///
/// Owns the value table exclusively; the only mutation entry point is
/// [`update`](DecisionEngine::update), which rewrites exactly one cell per
/// call. Action selection is ε-greedy: explore uniformly with probability ε,
/// otherwise exploit the greedy action with a deterministic first-max
/// tie-break over the fixed enumeration order.
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    table: ValueTable,
    learning_rate: f64,
    discount_factor: f64,
    epsilon: f64,
    rng: StdRng,
}

impl DecisionEngine {
    /// Create an engine from a configuration, validating parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLearningRate`] unless α ∈ (0, 1],
    /// [`Error::InvalidDiscountFactor`] unless γ ∈ [0, 1], and
    /// [`Error::InvalidExplorationRate`] unless ε ∈ [0, 1].
    pub fn new(config: EngineConfig) -> Result<Self> {
        let EngineConfig {
            learning_rate,
            discount_factor,
            epsilon,
            seed,
        } = config;

        if !(learning_rate > 0.0 && learning_rate <= 1.0) {
            return Err(Error::InvalidLearningRate {
                value: learning_rate,
            });
        }
        if !(0.0..=1.0).contains(&discount_factor) {
            return Err(Error::InvalidDiscountFactor {
                value: discount_factor,
            });
        }
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(Error::InvalidExplorationRate { value: epsilon });
        }

        Ok(Self {
            table: ValueTable::new(),
            learning_rate,
            discount_factor,
            epsilon,
            rng: build_rng(seed),
        })
    }

    /// Create an engine with the original game's constants.
    pub fn with_defaults() -> Self {
        // Default ranges are statically valid.
        match Self::new(EngineConfig::new()) {
            Ok(engine) => engine,
            Err(_) => unreachable!("default configuration is within range"),
        }
    }

    /// ε-greedy action selection.
    ///
    /// With probability ε returns a uniformly random action (exploration);
    /// otherwise returns the greedy action for `state` (exploitation), ties
    /// broken by enumeration order. Does not mutate the value table.
    pub fn select_action(&mut self, state: State) -> Action {
        if self.rng.random::<f64>() < self.epsilon {
            let action = Action::ALL[self.rng.random_range(0..Action::ALL.len())];
            debug!(state = %state, action = %action, "exploring: random action");
            action
        } else {
            let action = self.table.greedy_action(state);
            debug!(
                state = %state,
                action = %action,
                q = self.table.get(state, action),
                "exploiting: greedy action",
            );
            action
        }
    }

    /// One-step Q-learning update.
    ///
    /// Applies `Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') − Q(s,a)]`,
    /// stores the result in the `(prior, action)` cell — the only cell that
    /// changes — and returns the newly stored estimate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteReward`] for a non-finite reward and
    /// [`Error::NonFiniteValue`] if the computed estimate is non-finite;
    /// in both cases the table is left untouched.
    pub fn update(
        &mut self,
        prior: State,
        action: Action,
        reward: f64,
        next: State,
    ) -> Result<f64> {
        if !reward.is_finite() {
            return Err(Error::NonFiniteReward { value: reward });
        }

        let current = self.table.get(prior, action);
        let target = reward + self.discount_factor * self.table.max_over_actions(next);
        let new_value = current + self.learning_rate * (target - current);

        if !new_value.is_finite() {
            return Err(Error::NonFiniteValue {
                state: prior,
                action,
            });
        }

        self.table.set(prior, action, new_value);
        debug!(
            prior = %prior,
            action = %action,
            reward,
            next = %next,
            q = new_value,
            "applied q-learning update",
        );
        Ok(new_value)
    }

    /// Current estimate for a single cell (read-only, for display).
    pub fn value(&self, state: State, action: Action) -> f64 {
        self.table.get(state, action)
    }

    /// Immutable copy of the full value table.
    pub fn snapshot(&self) -> ValueTableSnapshot {
        self.table.snapshot()
    }

    /// Learning rate α.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Discount factor γ.
    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    /// Exploration rate ε.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greedy_engine() -> DecisionEngine {
        DecisionEngine::new(EngineConfig::new().with_epsilon(0.0).with_seed(7))
            .expect("valid config")
    }

    #[test]
    fn fresh_engine_reads_zero_everywhere() {
        let engine = DecisionEngine::with_defaults();
        for state in State::ALL {
            for action in Action::ALL {
                assert_eq!(engine.value(state, action), 0.0);
            }
        }
    }

    #[test]
    fn update_matches_hand_computed_scenario() {
        // α = 0.1, γ = 0.95, all values start at zero.
        let mut engine = greedy_engine();

        let v1 = engine
            .update(State::Start, Action::Left, 1.0, State::Left)
            .unwrap();
        assert!((v1 - 0.1).abs() < 1e-12);
        assert!((engine.value(State::Start, Action::Left) - 0.1).abs() < 1e-12);

        let v2 = engine
            .update(State::Left, Action::Center, -1.0, State::Right)
            .unwrap();
        assert!((v2 + 0.1).abs() < 1e-12);
        assert!((engine.value(State::Left, Action::Center) + 0.1).abs() < 1e-12);
    }

    #[test]
    fn update_mutates_exactly_one_cell() {
        let mut engine = greedy_engine();
        let before = engine.snapshot();
        engine
            .update(State::Center, Action::Right, 1.0, State::Center)
            .unwrap();
        let after = engine.snapshot();

        for (b, a) in before.cells.iter().zip(after.cells.iter()) {
            if b.state == State::Center && b.action == Action::Right {
                assert_ne!(a.value, b.value);
            } else {
                assert_eq!(a.value, b.value);
            }
        }
    }

    #[test]
    fn update_is_deterministic_in_its_arguments() {
        let mut first = greedy_engine();
        let mut second = greedy_engine();
        let a = first
            .update(State::Start, Action::Right, -1.0, State::Right)
            .unwrap();
        let b = second
            .update(State::Start, Action::Right, -1.0, State::Right)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_reward_fixed_point_stops_changing() {
        // With reward = 0 and γ·maxNext equal to the stored value, the stored
        // value is a fixed point of the update rule.
        let mut engine = DecisionEngine::new(
            EngineConfig::new()
                .with_discount_factor(0.0)
                .with_epsilon(0.0)
                .with_seed(1),
        )
        .unwrap();

        let mut previous = engine.value(State::Left, Action::Left);
        for _ in 0..50 {
            let updated = engine
                .update(State::Left, Action::Left, 0.0, State::Left)
                .unwrap();
            assert_eq!(updated, previous);
            previous = updated;
        }
        assert_eq!(previous, 0.0);
    }

    #[test]
    fn repeated_identical_feedback_converges() {
        // Constant reward drives the estimate toward r / (1 - γ·…); with
        // γ = 0 it converges to the reward itself.
        let mut engine = DecisionEngine::new(
            EngineConfig::new()
                .with_discount_factor(0.0)
                .with_epsilon(0.0)
                .with_seed(1),
        )
        .unwrap();

        let mut value = 0.0;
        for _ in 0..200 {
            value = engine
                .update(State::Right, Action::Right, 1.0, State::Right)
                .unwrap();
        }
        assert!((value - 1.0).abs() < 1e-6);
    }

    #[test]
    fn non_finite_reward_is_rejected_without_mutation() {
        let mut engine = greedy_engine();
        for reward in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = engine.update(State::Start, Action::Left, reward, State::Left);
            assert!(matches!(result, Err(Error::NonFiniteReward { .. })));
        }
        assert_eq!(engine.value(State::Start, Action::Left), 0.0);
    }

    #[test]
    fn config_ranges_are_validated() {
        assert!(matches!(
            DecisionEngine::new(EngineConfig::new().with_learning_rate(0.0)),
            Err(Error::InvalidLearningRate { .. })
        ));
        assert!(matches!(
            DecisionEngine::new(EngineConfig::new().with_learning_rate(1.5)),
            Err(Error::InvalidLearningRate { .. })
        ));
        assert!(matches!(
            DecisionEngine::new(EngineConfig::new().with_discount_factor(-0.1)),
            Err(Error::InvalidDiscountFactor { .. })
        ));
        assert!(matches!(
            DecisionEngine::new(EngineConfig::new().with_discount_factor(1.01)),
            Err(Error::InvalidDiscountFactor { .. })
        ));
        assert!(matches!(
            DecisionEngine::new(EngineConfig::new().with_epsilon(1.01)),
            Err(Error::InvalidExplorationRate { .. })
        ));
        assert!(DecisionEngine::new(EngineConfig::new().with_epsilon(1.0)).is_ok());
        assert!(DecisionEngine::new(EngineConfig::new().with_discount_factor(1.0)).is_ok());
    }

    #[test]
    fn greedy_selection_follows_learned_values() {
        let mut engine = greedy_engine();
        engine
            .update(State::Start, Action::Right, 1.0, State::Right)
            .unwrap();
        assert_eq!(engine.select_action(State::Start), Action::Right);
        // Untouched state still ties at zero: first action wins.
        assert_eq!(engine.select_action(State::Center), Action::Left);
    }

    #[test]
    fn seeded_engines_select_identically() {
        let config = EngineConfig::new().with_epsilon(1.0).with_seed(99);
        let mut a = DecisionEngine::new(config.clone()).unwrap();
        let mut b = DecisionEngine::new(config).unwrap();
        for _ in 0..100 {
            assert_eq!(a.select_action(State::Start), b.select_action(State::Start));
        }
    }
}
