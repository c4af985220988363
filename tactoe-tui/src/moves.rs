use ratatui::{
    crossterm::event::{Event, KeyCode},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Widget},
};
use tactoe::{GameHistory, MoveEntry};

use crate::app::Message;

/// Jump targets for every board in the history.
#[derive(Default)]
pub struct MoveList {
    entries: Vec<MoveEntry>,
    current: usize,
    selected: usize,
}

impl MoveList {
    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    self.selected = (self.selected + 1).min(self.entries.len().saturating_sub(1));
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = self.selected.saturating_sub(1);
                }
                KeyCode::Home => self.selected = 0,
                KeyCode::End => self.selected = self.entries.len().saturating_sub(1),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Some(entry) = self.entries.get(self.selected) {
                        return Some(Message::JumpTo(entry.index));
                    }
                }
                _ => {}
            }
        }
        None
    }

    pub fn on_state_change(&mut self, game: &GameHistory) {
        self.entries = game.move_list();
        self.current = game.current_move();
        self.selected = self.current;
    }

    pub fn draw(&self, focused: bool) -> impl Widget + '_ {
        let block = Block::new()
            .borders(Borders::ALL)
            .border_style(if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            })
            .title(Line::raw("History").left_aligned());
        let items = self.entries.iter().map(|entry| {
            let marker = if focused && entry.index == self.selected {
                '>'
            } else {
                ' '
            };
            let style = if entry.index == self.current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{marker} {entry}")).style(style)
        });
        List::new(items).block(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn selection_follows_current_move_and_clamps() {
        let mut game = GameHistory::new();
        game.play_index(4).unwrap();
        game.play_index(0).unwrap();
        let mut list = MoveList::default();
        list.on_state_change(&game);
        assert_eq!(list.selected, 2);

        list.update(&key(KeyCode::Down));
        assert_eq!(list.selected, 2);
        list.update(&key(KeyCode::Home));
        assert_eq!(list.update(&key(KeyCode::Enter)), Some(Message::JumpTo(0)));
        list.update(&key(KeyCode::Up));
        assert_eq!(list.selected, 0);
    }

    #[test]
    fn empty_list_ignores_keys() {
        let mut list = MoveList::default();
        list.update(&key(KeyCode::Down));
        assert_eq!(list.selected, 0);
        assert_eq!(list.update(&key(KeyCode::Enter)), None);
    }
}
