use std::fmt;

use tactoe_types::{Cell, Mark, Snapshot, Square};
use tracing::{debug, instrument};

use crate::{
    error::{MoveRejected, OutOfRange},
    status::GameStatus,
    winner::evaluate,
};

/// Every board of one game plus the index of the board on display.
///
/// `snapshots[0]` is always the empty board and each later entry adds
/// exactly one mark to the one before it. Whose turn it is follows from
/// `current` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    snapshots: Vec<Snapshot>,
    current: usize,
}

/// One jump target in the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    pub index: usize,
}

impl MoveEntry {
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.index == 0 {
            write!(f, "Go to game start")
        } else {
            write!(f, "Go to move #{}", self.index)
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GameHistory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::EMPTY],
            current: 0,
        }
    }

    /// Places the mark of the player to move on `square`.
    ///
    /// Any boards after the current one are discarded first, so playing
    /// after a jump replaces the old future.
    #[instrument(level = "debug", skip(self), fields(current = self.current))]
    pub fn play(&mut self, square: Square) -> Result<(), MoveRejected> {
        let current = self.current_snapshot();
        if let Some(winner) = evaluate(current) {
            debug!(%winner, "game already decided");
            return Err(MoveRejected::GameDecided { winner });
        }
        if let Cell::Marked(mark) = current.cell(square) {
            debug!(%mark, "cell taken");
            return Err(MoveRejected::Occupied { square });
        }

        let mark = self.next_mark();
        let next = current.with_mark(square, mark);
        let discarded = self.snapshots.len() - self.current - 1;
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;
        debug!(%mark, discarded, move_number = self.current, "move played");
        Ok(())
    }

    /// [`play`](Self::play) with a raw cell index, as delivered by a UI.
    pub fn play_index(&mut self, index: usize) -> Result<(), MoveRejected> {
        let square = Square::new(index).ok_or(MoveRejected::NoSuchCell { index })?;
        self.play(square)
    }

    /// Shows the board after `move_index` moves. The history itself is kept.
    #[instrument(level = "debug", skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), OutOfRange> {
        if move_index >= self.snapshots.len() {
            return Err(OutOfRange {
                requested: move_index,
                len: self.snapshots.len(),
            });
        }
        self.current = move_index;
        debug!("jumped");
        Ok(())
    }

    #[must_use]
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.snapshots[self.current]
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match evaluate(self.current_snapshot()) {
            Some(mark) => GameStatus::Winner(mark),
            None => GameStatus::NextToMove(self.next_mark()),
        }
    }

    #[must_use]
    pub fn move_list(&self) -> Vec<MoveEntry> {
        (0..self.snapshots.len())
            .map(|index| MoveEntry { index })
            .collect()
    }

    #[must_use]
    pub fn current_move(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn next_mark(&self) -> Mark {
        Mark::for_move(self.current)
    }

    #[must_use]
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the starting board is never removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Whether no further move is possible from the current board, either
    /// because someone won or because every cell is marked.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        let current = self.current_snapshot();
        current.is_full() || evaluate(current).is_some()
    }
}
