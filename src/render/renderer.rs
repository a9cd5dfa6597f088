use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{FrameBuffer, RoundPhase, RoundState, MAX_BRIGHTNESS};
use crate::stats::SessionStats;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &RoundState, policy: &str, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Matrix area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Render header with session stats
        let header = self.render_stats(chunks[0], state, policy, stats);
        frame.render_widget(header, chunks[0]);

        // Center the matrix horizontally
        let matrix_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        // Render the matrix or the idle screen
        match state.phase {
            RoundPhase::Playing => {
                let matrix = self.render_matrix(matrix_area, &state.render_frame());
                frame.render_widget(matrix, matrix_area);
            }
            RoundPhase::RoundOver => {
                let round_over = self.render_round_over(matrix_area, state);
                frame.render_widget(round_over, matrix_area);
            }
        }

        // Render footer with controls
        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_matrix(&self, _area: Rect, buffer: &FrameBuffer) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for y in 0..buffer.height() {
            let mut spans = Vec::new();

            for x in 0..buffer.width() {
                let level = buffer.pixel(x, y);
                spans.push(Span::styled(
                    "██",
                    Style::default().fg(brightness_color(level)),
                ));
                spans.push(Span::raw(" "));
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" 5x5 "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        _area: Rect,
        state: &RoundState,
        policy: &str,
        stats: &SessionStats,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.length().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.best_length.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Rounds: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.rounds_played.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Policy: ", Style::default().fg(Color::Yellow)),
            Span::styled(policy.to_string(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_round_over(&self, _area: Rect, state: &RoundState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "ROUND OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Length: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.length().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "←",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("←", Style::default().fg(Color::Cyan)),
            Span::raw(" / "),
            Span::styled("A", Style::default().fg(Color::Cyan)),
            Span::raw(" turn left | "),
            Span::styled("→", Style::default().fg(Color::Cyan)),
            Span::raw(" / "),
            Span::styled("D", Style::default().fg(Color::Cyan)),
            Span::raw(" turn right | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Amber ramp for the LED levels. Level 0 keeps a faint glow so the
/// whole matrix stays visible against the terminal background.
fn brightness_color(level: u8) -> Color {
    let level = level.min(MAX_BRIGHTNESS) as u16;
    let red = 40 + 215 * level / 9;
    let green = 8 + 120 * level / 9;
    Color::Rgb(red as u8, green as u8, 0)
}
