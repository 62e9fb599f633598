//! Live watch mode
//!
//! Runs training inside a TUI so the agent can be watched while it learns.
//! A tick timer paces `Trainer::tick`; the pacing only gates how often ticks
//! fire and never alters the learning computation. Episodes roll over
//! automatically as they terminate.
//!
//! # Controls
//!
//! - Space: pause/unpause
//! - 1-4: speed control (1=slow, 4=very fast)
//! - R: restart the current episode
//! - Q/Esc: quit

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::input::{InputHandler, KeyAction};
use crate::metrics::TrainingStats;
use crate::render::Renderer;
use crate::rl::Trainer;

/// Simulation speed settings for the watch mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    /// 2 Hz (500ms per step)
    Slow,
    /// 8 Hz (125ms per step)
    Normal,
    /// 20 Hz (50ms per step)
    Fast,
    /// 60 Hz (16ms per step)
    VeryFast,
}

impl Speed {
    /// Tick interval for this speed
    fn tick_interval(&self) -> Duration {
        match self {
            Self::Slow => Duration::from_millis(500),
            Self::Normal => Duration::from_millis(125),
            Self::Fast => Duration::from_millis(50),
            Self::VeryFast => Duration::from_millis(16),
        }
    }
}

/// Watch mode: training loop behind a paced TUI
pub struct WatchMode {
    trainer: Trainer,
    stats: TrainingStats,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    paused: bool,
    speed: Speed,
}

impl WatchMode {
    pub fn new(trainer: Trainer) -> Self {
        Self {
            trainer,
            stats: TrainingStats::new(100),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            paused: false,
            speed: Speed::Normal,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run loop with cleanup
        let result = self.run_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.speed.tick_interval());

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        let old_speed = self.speed;
                        self.handle_event(event);
                        if self.speed != old_speed {
                            tick_timer = interval(self.speed.tick_interval());
                        }
                    }
                }

                // Learning step
                _ = tick_timer.tick() => {
                    if !self.paused {
                        self.advance();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    let snapshot = self.trainer.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.stats, self.paused);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// One paced learning step, rolling the episode over if it ended
    fn advance(&mut self) {
        self.trainer.tick();
        if let Some(summary) = self.trainer.finish_episode() {
            self.stats
                .record_episode(summary.reward, summary.steps, summary.score);
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::TogglePause => self.paused = !self.paused,
                KeyAction::Restart => self.trainer.restart_episode(),
                KeyAction::SetSpeed(speed) => self.speed = speed,
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{EnvConfig, Environment};
    use crate::rl::QLearningConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn watch_mode() -> WatchMode {
        let env = Environment::new(EnvConfig::small(), StdRng::seed_from_u64(1)).unwrap();
        let config = QLearningConfig {
            step_cap: 10,
            ..Default::default()
        };
        let trainer = Trainer::new(env, config, StdRng::seed_from_u64(2)).unwrap();
        WatchMode::new(trainer)
    }

    #[test]
    fn test_speed_intervals_are_monotonic() {
        assert!(Speed::Slow.tick_interval() > Speed::Normal.tick_interval());
        assert!(Speed::Normal.tick_interval() > Speed::Fast.tick_interval());
        assert!(Speed::Fast.tick_interval() > Speed::VeryFast.tick_interval());
    }

    #[test]
    fn test_advance_rolls_episodes_over() {
        let mut mode = watch_mode();

        // Drive well past the step cap; episodes must roll over into stats
        for _ in 0..100 {
            mode.advance();
        }

        assert!(mode.stats.total_episodes() > 0);
        assert!(mode.trainer.episodes_completed() > 0);
    }

    #[test]
    fn test_pause_and_speed_keys() {
        let mut mode = watch_mode();

        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        mode.handle_event(Event::Key(space));
        assert!(mode.paused);

        let three = KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE);
        mode.handle_event(Event::Key(three));
        assert_eq!(mode.speed, Speed::Fast);

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        mode.handle_event(Event::Key(q));
        assert!(mode.should_quit);
    }
}
