use derive_more::Display;
use tactoe_types::Mark;

/// What the status line shows for the current position.
///
/// There is no draw variant: a full board without a line still names the
/// player whose turn it would be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameStatus {
    #[display("Winner: {_0}")]
    Winner(Mark),
    #[display("Next player: {_0}")]
    NextToMove(Mark),
}

impl GameStatus {
    #[must_use]
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Winner(mark) => Some(mark),
            GameStatus::NextToMove(_) => None,
        }
    }
}
