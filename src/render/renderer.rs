use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::Position;
use crate::metrics::TrainingStats;
use crate::rl::Snapshot;

/// TUI renderer for the watch mode
///
/// A pure consumer: it draws whatever [`Snapshot`] and [`TrainingStats`]
/// it is handed and never feeds anything back into learning.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, stats: &TrainingStats, paused: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Grid area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let header = self.render_header(chunks[0], snapshot, stats);
        frame.render_widget(header, chunks[0]);

        // Center the grid horizontally
        let grid_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let grid = self.render_grid(grid_area, snapshot, paused);
        frame.render_widget(grid, grid_area);

        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, snapshot: &Snapshot, paused: bool) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for y in 0..snapshot.grid_size {
            let mut spans = Vec::new();

            for x in 0..snapshot.grid_size {
                let pos = Position::new(x, y);

                let cell = if pos == snapshot.agent {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if pos == snapshot.food {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let title = if paused { " Forager (paused) " } else { " Forager " };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_header(&self, _area: Rect, snapshot: &Snapshot, stats: &TrainingStats) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Episode: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.episode.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(snapshot.score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Epsilon: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{:.3}", snapshot.epsilon),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("States: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.states_seen.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Mean reward: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{:.1}", stats.mean_episode_reward()),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" pause | "),
            Span::styled("1-4", Style::default().fg(Color::Cyan)),
            Span::raw(" speed | "),
            Span::styled("R", Style::default().fg(Color::Cyan)),
            Span::raw(" restart episode | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
