use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use q_forager::game::{EnvConfig, Environment};
use q_forager::modes::{TrainMode, TrainModeConfig, WatchMode};
use q_forager::rl::{QLearningConfig, Trainer};

#[derive(Parser)]
#[command(name = "q_forager")]
#[command(version, about = "Tabular Q-learning agent for a grid food-collection game")]
struct Cli {
    /// Execution mode
    #[arg(long, default_value = "watch")]
    mode: Mode,

    /// Side length of the square grid
    #[arg(long, default_value = "10")]
    grid_size: i32,

    /// Number of training episodes
    #[arg(long, default_value = "5000")]
    episodes: usize,

    /// Step cap per episode
    #[arg(long, default_value = "200")]
    step_cap: usize,

    /// Learning rate
    #[arg(long, default_value = "0.1")]
    alpha: f32,

    /// Discount factor
    #[arg(long, default_value = "0.9")]
    gamma: f32,

    /// Initial exploration rate
    #[arg(long, default_value = "1.0")]
    epsilon: f32,

    /// Exploration rate floor
    #[arg(long, default_value = "0.05")]
    epsilon_min: f32,

    /// Multiplicative per-episode epsilon decay
    #[arg(long, default_value = "0.995")]
    epsilon_decay: f32,

    /// RNG seed for reproducible runs (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Log progress every N episodes (train mode)
    #[arg(long, default_value = "100")]
    log_frequency: usize,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Train headless, printing progress to stdout
    Train,
    /// Train inside a TUI and watch the agent learn
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_config = EnvConfig::new(cli.grid_size);
    let q_config = QLearningConfig {
        alpha: cli.alpha,
        gamma: cli.gamma,
        epsilon_start: cli.epsilon,
        epsilon_min: cli.epsilon_min,
        epsilon_decay: cli.epsilon_decay,
        num_episodes: cli.episodes,
        step_cap: cli.step_cap,
    };

    // Separate streams for food placement and exploration draws
    let (env_rng, policy_rng) = match cli.seed {
        Some(seed) => (
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (StdRng::from_entropy(), StdRng::from_entropy()),
    };

    // Configuration errors are fatal at startup
    let env = Environment::new(env_config, env_rng).map_err(|e| anyhow!(e))?;
    let trainer = Trainer::new(env, q_config, policy_rng).map_err(|e| anyhow!(e))?;

    match cli.mode {
        Mode::Train => {
            let config = TrainModeConfig {
                log_frequency: cli.log_frequency,
            };
            TrainMode::new(trainer, config).run()?;
        }
        Mode::Watch => {
            WatchMode::new(trainer).run().await?;
        }
    }

    Ok(())
}
