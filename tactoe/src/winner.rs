use tactoe_types::{Mark, Snapshot, Square, LINES};

/// A completed three-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub squares: [Square; 3],
}

/// First line in [`LINES`] order held entirely by one mark.
#[must_use]
pub fn winning_line(snapshot: &Snapshot) -> Option<WinningLine> {
    LINES.iter().find_map(|&squares| {
        let [a, b, c] = squares.map(|sq| snapshot.mark_on(sq));
        match a {
            Some(mark) if b == a && c == a => Some(WinningLine { mark, squares }),
            _ => None,
        }
    })
}

/// Mark that owns a complete line, if any. A full board without a line is
/// reported the same as an unfinished one.
#[must_use]
pub fn evaluate(snapshot: &Snapshot) -> Option<Mark> {
    winning_line(snapshot).map(|line| line.mark)
}
