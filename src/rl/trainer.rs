//! Episode loop driving the environment and the Q-learning update
//!
//! The trainer owns the environment, the Q-table and the exploration RNG by
//! composition; there is no process-wide training state. A single `tick()`
//! performs one learning step and is free of any pacing concern, so a host
//! may call it as fast as it likes for headless training or throttle it for
//! visualization.

use rand::rngs::StdRng;

use crate::game::{Environment, Observation};
use crate::metrics::TrainingStats;

use super::{
    config::QLearningConfig,
    policy::EpsilonGreedy,
    qtable::QTable,
    state::{encode, StateKey},
};

/// One learning step: produced by `tick()`, consumed within the same step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub state: StateKey,
    pub action: crate::game::Action,
    pub reward: f32,
    pub next_state: StateKey,
    pub done: bool,
}

/// How an episode ended; always exactly one of the two
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeOutcome {
    /// The agent walked off the grid
    Collision,
    /// The configured step cap cut the episode off
    StepCapReached,
}

/// Summary of a completed episode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeSummary {
    /// Total reward accumulated over the episode
    pub reward: f32,
    /// Steps taken
    pub steps: usize,
    /// Food items collected
    pub score: u32,
    pub outcome: EpisodeOutcome,
}

/// Read-only view of trainer + environment state for renderers
///
/// Produced after each tick; drawing never feeds back into learning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub grid_size: i32,
    pub agent: crate::game::Position,
    pub food: crate::game::Position,
    pub latest_reward: f32,
    pub episode: usize,
    pub score: u32,
    pub steps: u32,
    pub epsilon: f32,
    pub states_seen: usize,
}

/// Drives episodes: reset, step, observe reward, apply the update rule,
/// decide termination, track score.
pub struct Trainer {
    env: Environment,
    table: QTable,
    config: QLearningConfig,
    rng: StdRng,
    obs: Observation,
    epsilon: f32,
    episode: usize,
    episode_reward: f32,
    episode_steps: usize,
    latest_reward: f32,
}

impl Trainer {
    /// Create a trainer, failing fast on invalid hyperparameters
    ///
    /// The policy RNG is separate from the environment's food RNG so either
    /// stream can be seeded independently in tests.
    pub fn new(mut env: Environment, config: QLearningConfig, rng: StdRng) -> Result<Self, String> {
        config.validate()?;
        let obs = env.reset();
        let epsilon = config.epsilon_start;

        Ok(Self {
            env,
            table: QTable::new(),
            config,
            rng,
            obs,
            epsilon,
            episode: 0,
            episode_reward: 0.0,
            episode_steps: 0,
            latest_reward: 0.0,
        })
    }

    /// Perform one learning step of the running episode
    ///
    /// Encodes the current observation, selects an action epsilon-greedily,
    /// steps the environment, applies the Q-learning update and advances the
    /// episode counters. Callers must check [`episode_outcome`] between
    /// ticks; ticking a finished episode is a programming error.
    ///
    /// [`episode_outcome`]: Trainer::episode_outcome
    pub fn tick(&mut self) -> Transition {
        debug_assert!(self.episode_outcome().is_none());

        let state = encode(&self.obs);
        let action = EpsilonGreedy::select(&self.table, state, self.epsilon, &mut self.rng);
        let result = self.env.step(action);
        let next_state = encode(&result.observation);

        self.table.update(
            state,
            action,
            result.reward,
            next_state,
            self.config.alpha,
            self.config.gamma,
        );

        self.obs = result.observation;
        self.episode_reward += result.reward;
        self.episode_steps += 1;
        self.latest_reward = result.reward;

        Transition {
            state,
            action,
            reward: result.reward,
            next_state,
            done: result.done,
        }
    }

    /// Terminal outcome of the running episode, if it has ended
    pub fn episode_outcome(&self) -> Option<EpisodeOutcome> {
        if self.env.is_terminated() {
            Some(EpisodeOutcome::Collision)
        } else if self.episode_steps >= self.config.step_cap {
            Some(EpisodeOutcome::StepCapReached)
        } else {
            None
        }
    }

    /// Close out a finished episode: decay epsilon, reset the environment,
    /// and return the summary. Returns `None` while the episode is running.
    pub fn finish_episode(&mut self) -> Option<EpisodeSummary> {
        let outcome = self.episode_outcome()?;

        let summary = EpisodeSummary {
            reward: self.episode_reward,
            steps: self.episode_steps,
            score: self.env.score(),
            outcome,
        };

        self.episode += 1;
        self.epsilon = (self.epsilon * self.config.epsilon_decay).max(self.config.epsilon_min);
        self.obs = self.env.reset();
        self.episode_reward = 0.0;
        self.episode_steps = 0;

        Some(summary)
    }

    /// Run one full episode to its terminal outcome
    ///
    /// Always returns: the step cap bounds the episode even if the agent
    /// never collides.
    pub fn run_episode(&mut self) -> EpisodeSummary {
        loop {
            self.tick();
            if let Some(summary) = self.finish_episode() {
                return summary;
            }
        }
    }

    /// Train for the configured number of episodes, collecting statistics
    pub fn train(&mut self) -> TrainingStats {
        let mut stats = TrainingStats::new(100);
        for _ in 0..self.config.num_episodes {
            let summary = self.run_episode();
            stats.record_episode(summary.reward, summary.steps, summary.score);
        }
        stats
    }

    /// Abandon the running episode and start a fresh one
    ///
    /// The abandoned episode is not recorded and epsilon does not decay;
    /// the table keeps whatever it learned from the steps already taken.
    pub fn restart_episode(&mut self) {
        self.obs = self.env.reset();
        self.episode_reward = 0.0;
        self.episode_steps = 0;
    }

    /// Renderer-facing snapshot of the current world and training progress
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid_size: self.obs.grid_size,
            agent: self.obs.agent,
            food: self.obs.food,
            latest_reward: self.latest_reward,
            episode: self.episode,
            score: self.env.score(),
            steps: self.env.steps(),
            epsilon: self.epsilon,
            states_seen: self.table.len(),
        }
    }

    /// Episodes completed so far
    pub fn episodes_completed(&self) -> usize {
        self.episode
    }

    /// Current exploration rate
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// The learned action-value table
    pub fn table(&self) -> &QTable {
        &self.table
    }

    pub fn config(&self) -> &QLearningConfig {
        &self.config
    }
}
