use derive_more::{Display, Error};
use tactoe_types::{Mark, Square};

/// Why a play left the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveRejected {
    #[display("cell {square} is already marked")]
    Occupied { square: Square },
    #[display("game already won by {winner}")]
    GameDecided { winner: Mark },
    #[display("no cell at index {index}")]
    NoSuchCell { index: usize },
}

/// A jump outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("move {requested} is not in a history of {len} entries")]
pub struct OutOfRange {
    pub requested: usize,
    pub len: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let sq = Square::new(4).unwrap();
        assert_eq!(
            MoveRejected::Occupied { square: sq }.to_string(),
            "cell 4 is already marked"
        );
        assert_eq!(
            MoveRejected::GameDecided { winner: Mark::O }.to_string(),
            "game already won by O"
        );
        assert_eq!(
            OutOfRange {
                requested: 7,
                len: 3
            }
            .to_string(),
            "move 7 is not in a history of 3 entries"
        );
    }
}
