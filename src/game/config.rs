use serde::{Deserialize, Serialize};

use super::state::Position;

/// Configuration for the grid environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Side length of the square grid
    pub grid_size: i32,
    /// Cell the agent starts every episode from
    pub start: Position,

    // Rewards (for RL)
    /// Reward for reaching the food
    pub food_reward: f32,
    /// Penalty for each step (encourages efficiency)
    pub step_penalty: f32,
    /// Penalty for walking off the grid
    pub death_penalty: f32,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            start: Position::new(5, 5),
            food_reward: 10.0,
            step_penalty: -1.0,
            death_penalty: -10.0,
        }
    }
}

impl EnvConfig {
    /// Create a configuration for a square grid, starting at its center
    pub fn new(grid_size: i32) -> Self {
        Self {
            grid_size,
            start: Position::new(grid_size / 2, grid_size / 2),
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(5)
    }

    /// Validate configuration parameters
    ///
    /// Configuration errors are fatal: callers are expected to abort at
    /// startup rather than retry.
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_size <= 0 {
            return Err(format!("grid_size must be positive, got {}", self.grid_size));
        }

        let in_bounds = self.start.x >= 0
            && self.start.x < self.grid_size
            && self.start.y >= 0
            && self.start.y < self.grid_size;
        if !in_bounds {
            return Err(format!(
                "start position ({}, {}) is outside the {}x{} grid",
                self.start.x, self.start.y, self.grid_size, self.grid_size
            ));
        }

        if self.grid_size == 1 {
            return Err("grid_size 1 leaves no cell for the food".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EnvConfig::default();
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.food_reward, 10.0);
        assert_eq!(config.step_penalty, -1.0);
        assert_eq!(config.death_penalty, -10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_centers_start() {
        let config = EnvConfig::new(5);
        assert_eq!(config.start, Position::new(2, 2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_non_positive_grid() {
        let mut config = EnvConfig::default();
        config.grid_size = 0;
        assert!(config.validate().is_err());

        config.grid_size = -3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_start_out_of_bounds() {
        let mut config = EnvConfig::new(5);
        config.start = Position::new(5, 2);
        assert!(config.validate().is_err());

        config.start = Position::new(2, -1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_single_cell_grid() {
        let mut config = EnvConfig::new(1);
        config.start = Position::new(0, 0);
        assert!(config.validate().is_err());
    }
}
