//! Headless training mode
//!
//! Runs the trainer for its configured number of episodes as fast as the CPU
//! allows, printing periodic progress and a final summary.

use anyhow::Result;

use crate::metrics::TrainingStats;
use crate::rl::Trainer;

/// Configuration for the headless training mode
#[derive(Debug, Clone)]
pub struct TrainModeConfig {
    /// Log training progress every N episodes
    pub log_frequency: usize,
}

impl Default for TrainModeConfig {
    fn default() -> Self {
        Self { log_frequency: 100 }
    }
}

/// Headless training mode
pub struct TrainMode {
    trainer: Trainer,
    stats: TrainingStats,
    config: TrainModeConfig,
}

impl TrainMode {
    pub fn new(trainer: Trainer, config: TrainModeConfig) -> Self {
        // 100-episode rolling window for smoothed progress lines
        let stats = TrainingStats::new(100);
        Self {
            trainer,
            stats,
            config,
        }
    }

    /// Run the training loop to completion
    pub fn run(&mut self) -> Result<()> {
        self.print_header();

        let num_episodes = self.trainer.config().num_episodes;
        for episode in 0..num_episodes {
            let summary = self.trainer.run_episode();
            self.stats
                .record_episode(summary.reward, summary.steps, summary.score);

            if (episode + 1) % self.config.log_frequency == 0 {
                println!(
                    "[Episode {}/{}] {} | epsilon: {:.3} | states: {}",
                    episode + 1,
                    num_episodes,
                    self.stats.format_summary(),
                    self.trainer.epsilon(),
                    self.trainer.table().len(),
                );
            }
        }

        println!("\nTraining complete!");
        println!("Episodes: {}", self.stats.total_episodes());
        println!("Distinct states seen: {}", self.trainer.table().len());
        println!("Final statistics: {}", self.stats.format_summary());

        Ok(())
    }

    fn print_header(&self) {
        let q = self.trainer.config();
        println!("{}", "=".repeat(70));
        println!("Tabular Q-Learning - Grid Forager");
        println!("{}", "=".repeat(70));
        println!("Episodes: {}", q.num_episodes);
        println!("Step cap: {}", q.step_cap);
        println!("Alpha: {}", q.alpha);
        println!("Gamma: {}", q.gamma);
        println!(
            "Epsilon: {} -> {} (decay {})",
            q.epsilon_start, q.epsilon_min, q.epsilon_decay
        );
        println!("Logging: every {} episodes", self.config.log_frequency);
        println!("{}", "=".repeat(70));
        println!();
    }
}
