/// One of the nine cells, numbered row-major from the top left.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, derive_more::Display,
)]
pub struct Square(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no cell at index {_0}, expected 0 to 8")]
pub struct InvalidSquare(#[error(not(source))] pub usize);

pub const ALL_SQUARES: [Square; 9] = {
    let mut squares = [Square(0); 9];
    let mut i = 0;
    while i < 9 {
        squares[i] = Square(i as u8);
        i += 1;
    }
    squares
};

impl Square {
    pub const COUNT: usize = 9;

    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            // Fits: checked against COUNT above
            Some(Self(index as u8))
        } else {
            None
        }
    }

    #[must_use]
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / 3
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.index() % 3
    }

    #[must_use]
    pub const fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::new(row * 3 + col)
        } else {
            None
        }
    }
}

impl TryFrom<usize> for Square {
    type Error = InvalidSquare;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(InvalidSquare(index))
    }
}

impl From<Square> for usize {
    fn from(square: Square) -> Self {
        square.index()
    }
}
