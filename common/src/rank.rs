use std::array::IntoIter;

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Rank {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
}

pub type RanksIterator = IntoIter<Rank, 8>;
impl Rank {
    pub fn all_ranks_ascending() -> RanksIterator {
        [
            Self::One,
            Self::Two,
            Self::Three,
            Self::Four,
            Self::Five,
            Self::Six,
            Self::Seven,
            Self::Eight,
        ]
        .into_iter()
    }

    /// Ranks in the order a FEN placement field lists them: the black back rank first.
    pub fn all_ranks_descending() -> std::iter::Rev<RanksIterator> {
        Self::all_ranks_ascending().rev()
    }

    /// The rank directly below this one, from white's side of the board.
    pub fn next_lower(self) -> Option<Rank> {
        match self {
            Self::One => None,
            Self::Two => Some(Self::One),
            Self::Three => Some(Self::Two),
            Self::Four => Some(Self::Three),
            Self::Five => Some(Self::Four),
            Self::Six => Some(Self::Five),
            Self::Seven => Some(Self::Six),
            Self::Eight => Some(Self::Seven),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::One => '1',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
        }
    }

    pub fn as_index(self) -> usize {
        self as usize - 1
    }
}
