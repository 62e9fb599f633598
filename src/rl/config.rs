//! Q-learning hyperparameter configuration

use serde::{Deserialize, Serialize};

/// Configuration for the tabular Q-learning algorithm
///
/// The epsilon schedule is deliberately configuration rather than a baked-in
/// constant: epsilon starts at `epsilon_start` and is multiplied by
/// `epsilon_decay` after every episode, floored at `epsilon_min`. Setting
/// `epsilon_decay` to 1.0 disables decay entirely.
///
/// # Example
///
/// ```rust
/// use q_forager::rl::QLearningConfig;
///
/// // Use default hyperparameters
/// let config = QLearningConfig::default();
///
/// // Or customize specific parameters
/// let config = QLearningConfig {
///     alpha: 0.5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QLearningConfig {
    /// Learning rate: how far each transition moves the stored value
    ///
    /// Default: 0.1
    pub alpha: f32,

    /// Discount factor for future rewards
    ///
    /// Must stay below 1.0 so values remain bounded under the game's
    /// bounded rewards.
    ///
    /// Default: 0.9
    pub gamma: f32,

    /// Exploration rate at the start of training
    ///
    /// Default: 1.0
    pub epsilon_start: f32,

    /// Floor the exploration rate never decays below
    ///
    /// Default: 0.05
    pub epsilon_min: f32,

    /// Multiplicative per-episode epsilon decay
    ///
    /// Default: 0.995
    pub epsilon_decay: f32,

    /// Number of episodes to train
    ///
    /// Default: 5000
    pub num_episodes: usize,

    /// Step cap per episode; episodes that survive this long are cut off
    ///
    /// Default: 200
    pub step_cap: usize,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self {
            alpha: 0.1,
            gamma: 0.9,
            epsilon_start: 1.0,
            epsilon_min: 0.05,
            epsilon_decay: 0.995,
            num_episodes: 5000,
            step_cap: 200,
        }
    }
}

impl QLearningConfig {
    /// Validate configuration parameters
    ///
    /// Returns `Ok(())` if all parameters are in their valid ranges,
    /// `Err(String)` with a message otherwise. Callers treat failure as
    /// fatal at startup.
    pub fn validate(&self) -> Result<(), String> {
        if self.alpha <= 0.0 || self.alpha > 1.0 {
            return Err(format!("alpha must be in (0, 1], got {}", self.alpha));
        }

        if !(0.0..1.0).contains(&self.gamma) {
            return Err(format!("gamma must be in [0, 1), got {}", self.gamma));
        }

        if !(0.0..=1.0).contains(&self.epsilon_start) {
            return Err(format!(
                "epsilon_start must be in [0, 1], got {}",
                self.epsilon_start
            ));
        }

        if !(0.0..=1.0).contains(&self.epsilon_min) {
            return Err(format!(
                "epsilon_min must be in [0, 1], got {}",
                self.epsilon_min
            ));
        }

        if self.epsilon_min > self.epsilon_start {
            return Err(format!(
                "epsilon_min ({}) cannot exceed epsilon_start ({})",
                self.epsilon_min, self.epsilon_start
            ));
        }

        if self.epsilon_decay <= 0.0 || self.epsilon_decay > 1.0 {
            return Err(format!(
                "epsilon_decay must be in (0, 1], got {}",
                self.epsilon_decay
            ));
        }

        if self.num_episodes == 0 {
            return Err("num_episodes must be at least 1".to_string());
        }

        if self.step_cap == 0 {
            return Err("step_cap must be at least 1".to_string());
        }

        Ok(())
    }
}
