use std::{io, ops::ControlFlow, time::Duration};

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout},
    DefaultTerminal, Frame,
};
use tactoe::{GameHistory, Square};
use tracing::{debug, info, warn};

use crate::{board::BoardView, help::HelpPopup, moves::MoveList, status::StatusView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Board,
    History,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Quit,
    Play(Square),
    JumpTo(usize),
    NewGame,
}

pub struct App {
    game: GameHistory,
    focus: Focus,
    show_help: bool,
    board_view: BoardView,
    move_list: MoveList,
    status: StatusView,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_game(GameHistory::new())
    }

    pub fn with_game(game: GameHistory) -> Self {
        let mut app = Self {
            game,
            focus: Focus::Board,
            show_help: false,
            board_view: BoardView::default(),
            move_list: MoveList::default(),
            status: StatusView,
        };
        app.on_state_change();
        app
    }

    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(Duration::from_millis(100))? {
                let event = event::read()?;
                if let Some(message) = self.handle_event(&event) {
                    if self.dispatch(message).is_break() {
                        break;
                    }
                }
            }
        }
        info!("session closed");
        Ok(())
    }

    /// Turns a terminal event into a message, updating view-local state
    /// such as cursors on the way.
    pub fn handle_event(&mut self, event: &Event) -> Option<Message> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if self.show_help {
            // any key closes the popup
            self.show_help = false;
            return None;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(Message::Quit),
            KeyCode::Char('n') => return Some(Message::NewGame),
            KeyCode::Char('?') => {
                self.show_help = true;
                return None;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                return None;
            }
            _ => {}
        }
        match self.focus {
            Focus::Board => self.board_view.update(event),
            Focus::History => self.move_list.update(event),
        }
    }

    pub fn dispatch(&mut self, message: Message) -> ControlFlow<()> {
        match message {
            Message::Quit => return ControlFlow::Break(()),
            Message::Play(square) => {
                if let Err(error) = self.game.play(square) {
                    debug!(%error, "move ignored");
                    return ControlFlow::Continue(());
                }
            }
            Message::JumpTo(index) => {
                if let Err(error) = self.game.jump_to(index) {
                    warn!(%error, "jump ignored");
                    return ControlFlow::Continue(());
                }
            }
            Message::NewGame => {
                info!("new game");
                self.game = GameHistory::new();
                self.focus = Focus::Board;
            }
        }
        self.on_state_change();
        ControlFlow::Continue(())
    }

    fn on_state_change(&mut self) {
        self.board_view.on_state_change(&self.game);
        self.move_list.on_state_change(&self.game);
    }

    pub fn draw(&self, frame: &mut Frame) {
        let horizontal =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]);
        let vertical = Layout::vertical([Constraint::Min(9), Constraint::Length(5)]);
        let [left, moves] = horizontal.areas(frame.area());
        let [board, status] = vertical.areas(left);
        frame.render_widget(self.board_view.draw(self.focus == Focus::Board), board);
        frame.render_widget(
            self.move_list.draw(self.focus == Focus::History),
            moves,
        );
        frame.render_widget(self.status.draw(&self.game), status);
        if self.show_help {
            frame.render_widget(HelpPopup, frame.area());
        }
    }
}
