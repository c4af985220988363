use enum_map::{enum_map, EnumMap};
use ratatui::{
    crossterm::event::{Event, KeyCode},
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use tactoe::{winning_line, Cell, GameHistory, Mark, Snapshot, Square};

use crate::app::Message;

const CELL_WIDTH: usize = 5;

pub struct BoardView {
    snapshot: Snapshot,
    winning: Option<[Square; 3]>,
    cursor: Square,
    palette: EnumMap<Mark, Color>,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView {
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot::EMPTY,
            winning: None,
            cursor: Square::default(),
            palette: enum_map! {
                Mark::X => Color::Blue,
                Mark::O => Color::Red,
            },
        }
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let row = (self.cursor.row() as isize + d_row).rem_euclid(3);
        let col = (self.cursor.col() as isize + d_col).rem_euclid(3);
        // rem_euclid(3) keeps both in 0..3
        if let Some(square) = Square::from_row_col(row as usize, col as usize) {
            self.cursor = square;
        }
    }

    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
                KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
                KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
                KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
                KeyCode::Enter | KeyCode::Char(' ') => return Some(Message::Play(self.cursor)),
                KeyCode::Char(c @ '1'..='9') => {
                    let index = c.to_digit(10)? as usize - 1;
                    let square = Square::new(index)?;
                    self.cursor = square;
                    return Some(Message::Play(square));
                }
                _ => {}
            }
        }
        None
    }

    pub fn on_state_change(&mut self, game: &GameHistory) {
        self.snapshot = *game.current_snapshot();
        self.winning = winning_line(&self.snapshot).map(|line| line.squares);
    }

    fn cell_span(&self, square: Square, focused: bool) -> Span<'static> {
        let (text, mut style) = match self.snapshot.cell(square) {
            Cell::Empty => (
                format!("{:^CELL_WIDTH$}", square.index() + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Cell::Marked(mark) => (
                format!("{:^CELL_WIDTH$}", mark.to_string()),
                Style::default()
                    .fg(self.palette[mark])
                    .add_modifier(Modifier::BOLD),
            ),
        };
        if self.winning.is_some_and(|line| line.contains(&square)) {
            style = style.bg(Color::Yellow);
        }
        if focused && square == self.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Span::styled(text, style)
    }

    pub fn draw(&self, focused: bool) -> impl Widget + '_ {
        let separator = Style::default().fg(Color::DarkGray);
        let mut lines = Vec::with_capacity(5);
        for row in 0..3 {
            if row > 0 {
                let rule = vec!["─".repeat(CELL_WIDTH); 3].join("┼");
                lines.push(Line::styled(rule, separator));
            }
            let mut spans = Vec::with_capacity(5);
            for col in 0..3 {
                if col > 0 {
                    spans.push(Span::styled("│", separator));
                }
                if let Some(square) = Square::from_row_col(row, col) {
                    spans.push(self.cell_span(square, focused));
                }
            }
            lines.push(Line::from(spans));
        }
        let block = Block::bordered().title("Board").border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        });
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
    }
}
