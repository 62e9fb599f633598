//! Training statistics tracking
//!
//! Tracks episode-level metrics (rewards, lengths, scores) over a rolling
//! window, for smoothed progress reporting during training.

use std::collections::VecDeque;

/// Training statistics tracker with rolling averages
///
/// # Example
///
/// ```rust
/// use q_forager::metrics::TrainingStats;
///
/// let mut stats = TrainingStats::new(100);
/// stats.record_episode(15.5, 150, 5);
///
/// println!("Mean reward: {}", stats.mean_episode_reward());
/// println!("{}", stats.format_summary());
/// ```
#[derive(Debug, Clone)]
pub struct TrainingStats {
    /// Episode rewards (rolling window)
    episode_rewards: VecDeque<f32>,

    /// Episode lengths in steps (rolling window)
    episode_lengths: VecDeque<usize>,

    /// Episode scores (food collected) (rolling window)
    episode_scores: VecDeque<u32>,

    /// Total number of episodes completed
    total_episodes: usize,

    /// Total number of environment steps taken
    total_steps: usize,

    /// Best single-episode score seen so far
    best_score: u32,

    /// Window size for rolling averages
    window_size: usize,
}

impl TrainingStats {
    /// Create a tracker keeping the last `window_size` episodes
    pub fn new(window_size: usize) -> Self {
        Self {
            episode_rewards: VecDeque::with_capacity(window_size),
            episode_lengths: VecDeque::with_capacity(window_size),
            episode_scores: VecDeque::with_capacity(window_size),
            total_episodes: 0,
            total_steps: 0,
            best_score: 0,
            window_size,
        }
    }

    /// Record the completion of an episode
    pub fn record_episode(&mut self, reward: f32, length: usize, score: u32) {
        Self::push_deque(&mut self.episode_rewards, reward, self.window_size);
        Self::push_deque(&mut self.episode_lengths, length, self.window_size);
        Self::push_deque(&mut self.episode_scores, score, self.window_size);
        self.total_episodes += 1;
        self.total_steps += length;
        if score > self.best_score {
            self.best_score = score;
        }
    }

    /// Mean reward over the rolling window
    pub fn mean_episode_reward(&self) -> f32 {
        Self::mean_f32(&self.episode_rewards)
    }

    /// Mean episode length over the rolling window
    pub fn mean_episode_length(&self) -> f32 {
        let sum: usize = self.episode_lengths.iter().sum();
        if self.episode_lengths.is_empty() {
            0.0
        } else {
            sum as f32 / self.episode_lengths.len() as f32
        }
    }

    /// Mean score over the rolling window
    pub fn mean_episode_score(&self) -> f32 {
        let sum: u32 = self.episode_scores.iter().sum();
        if self.episode_scores.is_empty() {
            0.0
        } else {
            sum as f32 / self.episode_scores.len() as f32
        }
    }

    pub fn total_episodes(&self) -> usize {
        self.total_episodes
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// One-line summary for progress logging
    pub fn format_summary(&self) -> String {
        format!(
            "reward: {:>7.2} | length: {:>6.1} | score: {:>5.2} | best: {} | steps: {}",
            self.mean_episode_reward(),
            self.mean_episode_length(),
            self.mean_episode_score(),
            self.best_score,
            self.total_steps,
        )
    }

    fn push_deque<T>(deque: &mut VecDeque<T>, value: T, window: usize) {
        if deque.len() == window {
            deque.pop_front();
        }
        deque.push_back(value);
    }

    fn mean_f32(deque: &VecDeque<f32>) -> f32 {
        if deque.is_empty() {
            0.0
        } else {
            deque.iter().sum::<f32>() / deque.len() as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = TrainingStats::new(10);
        assert_eq!(stats.mean_episode_reward(), 0.0);
        assert_eq!(stats.mean_episode_length(), 0.0);
        assert_eq!(stats.mean_episode_score(), 0.0);
        assert_eq!(stats.total_episodes(), 0);
        assert_eq!(stats.total_steps(), 0);
    }

    #[test]
    fn test_record_episode() {
        let mut stats = TrainingStats::new(10);
        stats.record_episode(15.5, 150, 5);

        assert_eq!(stats.total_episodes(), 1);
        assert_eq!(stats.total_steps(), 150);
        assert_eq!(stats.best_score(), 5);
        assert!((stats.mean_episode_reward() - 15.5).abs() < 1e-5);
    }

    #[test]
    fn test_rolling_window_evicts_oldest() {
        let mut stats = TrainingStats::new(2);
        stats.record_episode(1.0, 10, 0);
        stats.record_episode(2.0, 20, 1);
        stats.record_episode(3.0, 30, 2);

        // Window holds the last two episodes only
        assert!((stats.mean_episode_reward() - 2.5).abs() < 1e-5);
        assert!((stats.mean_episode_length() - 25.0).abs() < 1e-5);

        // Totals keep counting past the window
        assert_eq!(stats.total_episodes(), 3);
        assert_eq!(stats.total_steps(), 60);
    }

    #[test]
    fn test_best_score_never_decreases() {
        let mut stats = TrainingStats::new(10);
        stats.record_episode(0.0, 1, 7);
        stats.record_episode(0.0, 1, 3);
        assert_eq!(stats.best_score(), 7);
    }

    #[test]
    fn test_format_summary_is_nonempty() {
        let mut stats = TrainingStats::new(10);
        stats.record_episode(-12.0, 12, 0);
        assert!(stats.format_summary().contains("reward"));
    }
}
