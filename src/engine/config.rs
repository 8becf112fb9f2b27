//! Configuration for decision engine creation.

/// Learning rate α used when none is configured (matches the original game).
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
/// Discount factor γ used when none is configured.
pub const DEFAULT_DISCOUNT_FACTOR: f64 = 0.95;
/// Exploration rate ε used when none is configured.
pub const DEFAULT_EPSILON: f64 = 0.1;

/// Configuration for creating a [`DecisionEngine`](crate::engine::DecisionEngine).
///
/// Builder-style API; ranges are validated when the engine is constructed,
/// not here, so a config can be assembled freely (e.g. from CLI flags).
///
/// # Examples
///
/// ```
/// use goalie::engine::EngineConfig;
///
/// let config = EngineConfig::new()
///     .with_learning_rate(0.3)
///     .with_epsilon(0.2)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Learning rate α ∈ (0, 1]
    pub learning_rate: f64,
    /// Discount factor γ ∈ [0, 1]
    pub discount_factor: f64,
    /// Exploration rate ε ∈ [0, 1]
    pub epsilon: f64,
    /// Random seed for reproducible exploration
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Create a configuration with the original game's constants
    /// (α = 0.1, γ = 0.95, ε = 0.1, unseeded).
    pub fn new() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            discount_factor: DEFAULT_DISCOUNT_FACTOR,
            epsilon: DEFAULT_EPSILON,
            seed: None,
        }
    }

    /// Set the learning rate α.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the discount factor γ.
    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    /// Set the exploration rate ε.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the random seed for deterministic exploration.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
