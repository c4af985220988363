use enum_map::Enum;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Enum, derive_more::Display)]
pub enum Mark {
    X,
    O,
}

pub const ALL_MARKS: [Mark; 2] = [Mark::X, Mark::O];

impl Mark {
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Mark that places the next stone when `index` moves have been played.
    /// X opens, so even positions belong to X.
    #[must_use]
    pub const fn for_move(index: usize) -> Self {
        if index % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }
}
