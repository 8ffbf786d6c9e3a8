use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use common::{
    DEFAULT_TICK_INTERVAL_MS, Direction, GRID_HEIGHT, GRID_WIDTH, GameCommand, GameEvent,
    GameState, GameStatus,
};

use crate::render::arena::ArenaRenderer;
use crate::render::standard_renderer::StandardRenderer;
use crate::render::types::{CharDimensions, RenderConfig};

#[derive(Debug)]
pub enum AppCommand {
    Quit,
}

pub struct App {
    pub game: GameState,
    tick_accumulator: Duration,
}

impl App {
    pub fn new(seed: u64) -> Self {
        Self {
            game: GameState::new(GRID_WIDTH, GRID_HEIGHT, seed),
            tick_accumulator: Duration::ZERO,
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Up => self.exec(GameCommand::Turn {
                direction: Direction::Up,
            }),
            KeyCode::Down => self.exec(GameCommand::Turn {
                direction: Direction::Down,
            }),
            KeyCode::Left => self.exec(GameCommand::Turn {
                direction: Direction::Left,
            }),
            KeyCode::Right => self.exec(GameCommand::Turn {
                direction: Direction::Right,
            }),
            KeyCode::Char('p') | KeyCode::Char('P') => self.exec(GameCommand::TogglePause),
            KeyCode::Char('r') | KeyCode::Char('R') => self.exec(GameCommand::Restart),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(AppCommand::Quit);
            }
            KeyCode::Char('q') | KeyCode::Esc => return Some(AppCommand::Quit),
            _ => {}
        }
        None
    }

    /// Advance the simulation by at most one step per call once a full
    /// tick interval has elapsed. Backlog after a stalled frame is
    /// dropped, not replayed.
    pub fn update(&mut self, dt: Duration) {
        self.tick_accumulator += dt;
        if self.tick_accumulator >= Duration::from_millis(DEFAULT_TICK_INTERVAL_MS) {
            self.exec(GameCommand::Tick);
            self.tick_accumulator = Duration::ZERO;
        }
    }

    fn exec(&mut self, command: GameCommand) {
        for event in self.game.exec_command(&command) {
            if let GameEvent::SnakeDied { score } = event {
                tracing::debug!(score, tick = self.game.current_tick(), "game over");
            }
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Score header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Controls help
        ])
        .margin(1)
        .split(frame.area());

        frame.render_widget(self.render_header(), chunks[0]);
        self.render_arena(frame, chunks[1]);
        frame.render_widget(self.render_controls(), chunks[2]);

        match self.game.status {
            GameStatus::Paused => self.render_overlay(
                frame,
                "Paused",
                Style::default().fg(Color::Yellow),
                vec![Line::from("Press p to resume")],
            ),
            GameStatus::Over => self.render_overlay(
                frame,
                "Game Over",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                vec![
                    Line::from(format!("Final score: {}", self.game.arena.snake.score)),
                    Line::from("Press r to restart"),
                ],
            ),
            GameStatus::Running => {}
        }
    }

    fn render_header(&self) -> Paragraph {
        let status = match self.game.status {
            GameStatus::Running => "Running",
            GameStatus::Paused => "Paused",
            GameStatus::Over => "Game over",
        };
        let title = format!(
            "Score: {} | Tick: {} | {}",
            self.game.arena.snake.score,
            self.game.current_tick(),
            status
        );

        Paragraph::new(title)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    }

    fn render_arena(&self, frame: &mut Frame, area: Rect) {
        let arena = &self.game.arena;
        let block = Block::default().title("Board").borders(Borders::ALL);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let char_dims = CharDimensions::new(2, 1);
        let renderer = StandardRenderer::new(char_dims);
        let arena_renderer = ArenaRenderer::new(renderer);
        let config = RenderConfig {
            chars_per_cell: char_dims,
        };

        let char_grid = arena_renderer.render(arena, &config);

        // Board dimensions including its own border
        let board_width = arena.width as usize * char_dims.horizontal + 2;
        let board_height = arena.height as usize * char_dims.vertical + 2;

        let x_offset = inner.width.saturating_sub(board_width as u16) / 2;
        let y_offset = inner.height.saturating_sub(board_height as u16) / 2;

        let border_style = Style::default().fg(Color::DarkGray);
        let mut final_lines: Vec<Line> = Vec::new();

        for _ in 0..y_offset {
            final_lines.push(Line::from(""));
        }

        let horizontal_run =
            "─".repeat(arena.width as usize * char_dims.horizontal);
        let padding = " ".repeat(x_offset as usize);

        final_lines.push(Line::from(Span::styled(
            format!("{padding}┌{horizontal_run}┐"),
            border_style,
        )));

        for (chars, styles) in char_grid.into_styled_lines() {
            let mut line_spans = Vec::new();
            if x_offset > 0 {
                line_spans.push(Span::raw(padding.clone()));
            }
            line_spans.push(Span::styled("│", border_style));
            for (ch, style) in chars.into_iter().zip(styles) {
                line_spans.push(Span::styled(ch.to_string(), style));
            }
            line_spans.push(Span::styled("│", border_style));
            final_lines.push(Line::from(line_spans));
        }

        final_lines.push(Line::from(Span::styled(
            format!("{padding}└{horizontal_run}┘"),
            border_style,
        )));

        frame.render_widget(Paragraph::new(final_lines), inner);
    }

    fn render_controls(&self) -> Paragraph {
        Paragraph::new(Line::from(
            "←↑↓→: Steer | p: Pause | r: Restart | q: Quit",
        ))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
    }

    fn render_overlay(
        &self,
        frame: &mut Frame,
        title: &str,
        title_style: Style,
        message: Vec<Line>,
    ) {
        let height = message.len() as u16 + 2;
        let area = centered_rect(frame.area(), 30, height);

        let block = Block::default()
            .title(Span::styled(title, title_style))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL);

        let popup = Paragraph::new(message)
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(Clear, area);
        frame.render_widget(popup, area);
    }
}

/// Rect of at most `width` x `height`, centered inside `area`.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
