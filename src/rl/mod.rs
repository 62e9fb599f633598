//! Tabular reinforcement learning for the forager game
//!
//! Provides:
//! - Compact discrete state encoding (wall danger flags + relative food direction)
//! - Lazily-populated action-value table with the Q-learning update
//! - Epsilon-greedy exploration with uniform tie-breaking
//! - Trainer driving episodes and exposing renderer-facing snapshots

pub mod config;
pub mod policy;
pub mod qtable;
pub mod state;
pub mod trainer;

pub use config::QLearningConfig;
pub use policy::EpsilonGreedy;
pub use qtable::QTable;
pub use state::{encode, StateKey};
pub use trainer::{EpisodeOutcome, EpisodeSummary, Snapshot, Trainer, Transition};
