use itertools::Itertools;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};
use tactoe::{GameHistory, GameStatus};
use tactoe_types::ALL_MARKS;

pub struct StatusView;

impl StatusView {
    pub fn draw(&self, game: &GameHistory) -> impl Widget + '_ {
        let status = game.status();
        let headline_style = match status {
            GameStatus::Winner(_) => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            GameStatus::NextToMove(_) => Style::default().fg(Color::Yellow),
        };
        let board = game.current_snapshot();
        let counts = board.counts();
        let tally = ALL_MARKS
            .iter()
            .map(|mark| format!("{mark}: {}", counts[*mark]))
            .join("  ");
        let mut detail = format!("move {} of {}  {tally}", game.current_move(), game.len() - 1);
        // No draw status exists; a full board without a line only gets a note.
        if board.is_full() && status.winner().is_none() {
            detail.push_str("  (board full)");
        }
        Paragraph::new(vec![
            Line::styled(status.to_string(), headline_style),
            Line::raw(detail),
            Line::styled("? help  tab switch pane  n new  q quit", Style::default().fg(Color::DarkGray)),
        ])
        .block(Block::bordered().title("Status"))
    }
}
