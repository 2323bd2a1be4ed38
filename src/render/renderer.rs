use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameOverReason, GameState, Phase, Position};
use crate::metrics::SessionStats;

/// What occupies a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Head,
    Body,
    Food,
    Empty,
}

impl CellKind {
    pub fn of(state: &GameState, pos: Position) -> Self {
        if pos == state.snake.head() {
            CellKind::Head
        } else if state.snake.contains(pos) {
            CellKind::Body
        } else if pos == state.food {
            CellKind::Food
        } else {
            CellKind::Empty
        }
    }

    fn span(self) -> Span<'static> {
        match self {
            CellKind::Head => Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
            CellKind::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
            CellKind::Food => Span::styled(
                "● ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            CellKind::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
        }
    }
}

/// Read-only view of the engine state
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, stats), chunks[0]);

        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if state.is_game_over {
            frame.render_widget(self.render_game_over(state), board_area);
        } else {
            frame.render_widget(self.render_grid(state), board_area);
        }

        frame.render_widget(self.render_controls(state.phase()), chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let lines: Vec<Line> = (0..state.board_size as i32)
            .map(|y| {
                let spans: Vec<Span> = (0..state.board_size as i32)
                    .map(|x| CellKind::of(state, Position::new(x, y)).span())
                    .collect();
                Line::from(spans)
            })
            .collect();

        let title = match state.phase() {
            Phase::Running => " SNAKE ",
            _ => " SNAKE - press Space ",
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Green))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, stats: &SessionStats) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Green)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.high_score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.games_played.to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let reason = match state.game_over_reason {
            Some(GameOverReason::Wall) => "Hit the wall",
            Some(GameOverReason::SelfCollision) => "Bit your own tail",
            Some(GameOverReason::BoardFull) => "Board full, you win!",
            None => "",
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Game Over!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(Span::styled(reason, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, phase: Phase) -> Paragraph<'_> {
        let primary = match phase {
            Phase::Idle => " Start Game | ",
            Phase::Running => " Pause | ",
            Phase::GameOver => " Play Again | ",
        };

        let text = vec![Line::from(vec![
            Span::styled("Space", Style::default().fg(Color::Green)),
            Span::raw(primary),
            Span::styled("R", Style::default().fg(Color::Yellow)),
            Span::raw(" Reset | "),
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw("/"),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" or swipe to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" Quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
