use crate::Square;

const fn sq(index: u8) -> Square {
    match Square::new(index as usize) {
        Some(square) => square,
        None => panic!("line square out of range"),
    }
}

/// Every three-in-a-row on the board: rows, then columns, then diagonals.
pub const LINES: [[Square; 3]; 8] = [
    [sq(0), sq(1), sq(2)],
    [sq(3), sq(4), sq(5)],
    [sq(6), sq(7), sq(8)],
    [sq(0), sq(3), sq(6)],
    [sq(1), sq(4), sq(7)],
    [sq(2), sq(5), sq(8)],
    [sq(0), sq(4), sq(8)],
    [sq(2), sq(4), sq(6)],
];
