//! Q-Forager - tabular Q-learning on a grid food-collection game
//!
//! This library provides:
//! - Core grid environment (game module)
//! - Tabular RL: state encoding, Q-table, epsilon-greedy policy, trainer (rl module)
//! - TUI rendering of training snapshots (render module)
//! - Keyboard handling for the watch mode (input module)
//! - Training statistics (metrics module)
//! - Execution modes: headless train, live watch (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod rl;
