use rand::rngs::StdRng;
use rand::Rng;

use super::{
    action::Action,
    config::EnvConfig,
    state::{Observation, Position},
};

/// Result of an environment step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    /// World snapshot after the step
    pub observation: Observation,
    /// Reward for this step (for RL training)
    pub reward: f32,
    /// Whether the episode has terminated
    pub done: bool,
    /// Whether the agent reached the food this step
    pub ate_food: bool,
}

/// The grid environment: agent position, food position, termination rules
/// and per-step reward emission.
///
/// Food placement uses an injected seedable RNG so runs are reproducible.
/// The environment is owned exclusively by whatever drives it; there is no
/// shared state.
pub struct Environment {
    config: EnvConfig,
    rng: StdRng,
    agent: Position,
    food: Position,
    terminated: bool,
    score: u32,
    steps: u32,
}

impl Environment {
    /// Create a new environment, failing fast on invalid configuration
    pub fn new(config: EnvConfig, mut rng: StdRng) -> Result<Self, String> {
        config.validate()?;

        let agent = config.start;
        let food = Self::random_food(&mut rng, config.grid_size, agent);

        Ok(Self {
            config,
            rng,
            agent,
            food,
            terminated: false,
            score: 0,
            steps: 0,
        })
    }

    /// Reset to the start of a new episode and return the initial observation
    pub fn reset(&mut self) -> Observation {
        self.agent = self.config.start;
        self.food = Self::random_food(&mut self.rng, self.config.grid_size, self.agent);
        self.terminated = false;
        self.score = 0;
        self.steps = 0;
        self.observation()
    }

    /// Execute one step of the simulation
    ///
    /// - Off-grid move: death penalty, episode terminates, the agent does not
    ///   move past the boundary. There is no wrap-around.
    /// - Move onto the food: food reward, food respawns on a cell distinct
    ///   from the agent's new cell, episode continues.
    /// - Any other move: step penalty, episode continues.
    pub fn step(&mut self, action: Action) -> StepResult {
        if self.terminated {
            // Stepping a finished episode is a no-op terminal result
            return StepResult {
                observation: self.observation(),
                reward: 0.0,
                done: true,
                ate_food: false,
            };
        }

        let target = self.agent.moved_by_action(action);

        if !self.observation().is_in_bounds(target) {
            self.terminated = true;
            self.steps += 1;

            return StepResult {
                observation: self.observation(),
                reward: self.config.death_penalty,
                done: true,
                ate_food: false,
            };
        }

        self.agent = target;
        self.steps += 1;

        let ate_food = self.agent == self.food;
        let reward = if ate_food {
            self.score += 1;
            self.food = Self::random_food(&mut self.rng, self.config.grid_size, self.agent);
            self.config.food_reward
        } else {
            self.config.step_penalty
        };

        StepResult {
            observation: self.observation(),
            reward,
            done: false,
            ate_food,
        }
    }

    /// Current world snapshot
    pub fn observation(&self) -> Observation {
        Observation {
            agent: self.agent,
            food: self.food,
            grid_size: self.config.grid_size,
        }
    }

    /// Food items collected this episode
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Steps taken this episode
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Whether the current episode has ended in a collision
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Pick a random cell distinct from the agent's cell
    fn random_food(rng: &mut StdRng, grid_size: i32, agent: Position) -> Position {
        loop {
            let pos = Position::new(rng.gen_range(0..grid_size), rng.gen_range(0..grid_size));
            if pos != agent {
                return pos;
            }
        }
    }

    /// Force world coordinates, for tests exercising exact contracts
    #[cfg(test)]
    pub(crate) fn place(&mut self, agent: Position, food: Position) {
        self.agent = agent;
        self.food = food;
    }
}
