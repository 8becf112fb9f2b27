//! Scripted shooter strategies for simulation and testing
//!
//! The live game takes shots from a human; simulations and tests take them
//! from a [`Shooter`], which plays the opponent role the way the round
//! controller expects: one direction per round, no knowledge of the keeper.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    error::{Error, Result},
    types::Action,
};

/// A source of shot directions.
pub trait Shooter {
    /// Produce the next shot direction.
    fn shoot(&mut self) -> Action;

    /// Name for identification in summaries and logging.
    fn name(&self) -> &str;
}

/// Shoots uniformly at random.
#[derive(Debug)]
pub struct UniformShooter {
    rng: StdRng,
}

impl UniformShooter {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformShooter {
    fn default() -> Self {
        Self::new()
    }
}

impl Shooter for UniformShooter {
    fn shoot(&mut self) -> Action {
        Action::ALL[self.rng.random_range(0..Action::ALL.len())]
    }

    fn name(&self) -> &str {
        "uniform"
    }
}

/// Always shoots the same direction; the fastest case for the keeper to learn.
#[derive(Debug, Clone, Copy)]
pub struct FixedShooter {
    direction: Action,
}

impl FixedShooter {
    pub fn new(direction: Action) -> Self {
        Self { direction }
    }
}

impl Shooter for FixedShooter {
    fn shoot(&mut self) -> Action {
        self.direction
    }

    fn name(&self) -> &str {
        self.direction.as_str()
    }
}

/// Repeats a fixed pattern of directions.
#[derive(Debug, Clone)]
pub struct CycleShooter {
    pattern: Vec<Action>,
    position: usize,
}

impl CycleShooter {
    /// Create a cycling shooter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPattern`] for an empty pattern.
    pub fn new(pattern: Vec<Action>) -> Result<Self> {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }
        Ok(Self {
            pattern,
            position: 0,
        })
    }
}

impl Shooter for CycleShooter {
    fn shoot(&mut self) -> Action {
        let action = self.pattern[self.position];
        self.position = (self.position + 1) % self.pattern.len();
        action
    }

    fn name(&self) -> &str {
        "cycle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_shooter_never_varies() {
        let mut shooter = FixedShooter::new(Action::Center);
        for _ in 0..10 {
            assert_eq!(shooter.shoot(), Action::Center);
        }
    }

    #[test]
    fn cycle_shooter_wraps_around() {
        let mut shooter = CycleShooter::new(vec![Action::Left, Action::Right]).unwrap();
        assert_eq!(shooter.shoot(), Action::Left);
        assert_eq!(shooter.shoot(), Action::Right);
        assert_eq!(shooter.shoot(), Action::Left);
    }

    #[test]
    fn cycle_shooter_rejects_empty_pattern() {
        assert!(matches!(
            CycleShooter::new(Vec::new()),
            Err(Error::EmptyPattern)
        ));
    }

    #[test]
    fn seeded_uniform_shooters_agree() {
        let mut a = UniformShooter::with_seed(11);
        let mut b = UniformShooter::with_seed(11);
        for _ in 0..50 {
            assert_eq!(a.shoot(), b.shoot());
        }
    }
}
