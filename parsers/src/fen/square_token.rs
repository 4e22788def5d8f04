use fen_common::Piece;

use crate::{FenErr, FenErrKind};

/// What a single character of a piece-placement field stands for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SquareToken {
    Occupied(Piece),
    /// A run of 1 to 8 empty squares.
    Empty(u8),
    RankSeparator,
}

impl SquareToken {
    /// Classifies the character found at byte `index`. Anything that is not a
    /// piece letter, a digit from 1 to 8 or '/' is an error.
    pub fn classify(index: usize, ch: char) -> Result<Self, FenErr> {
        match ch {
            '/' => Ok(Self::RankSeparator),
            '1'..='8' => Ok(Self::Empty(ch as u8 - b'0')),
            _ => match Piece::from_fen(ch) {
                None => Err(FenErr::new(
                    FenErrKind::UnexpectedChar(ch),
                    index..index + ch.len_utf8(),
                )),
                Some(piece) => Ok(Self::Occupied(piece)),
            },
        }
    }

    /// How many squares of a rank this token fills.
    pub fn width(&self) -> u8 {
        match self {
            Self::Occupied(_) => 1,
            Self::Empty(count) => *count,
            Self::RankSeparator => 0,
        }
    }
}
