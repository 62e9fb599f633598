//! Core grid environment for the food-collection game
//!
//! This module contains all the simulation logic without any I/O or rendering
//! dependencies. It can be driven programmatically by the trainer or by tests.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::Action;
pub use config::EnvConfig;
pub use engine::{Environment, StepResult};
pub use state::{Observation, Position};
