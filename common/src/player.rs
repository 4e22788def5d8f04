#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The lowercase color letter, matching FEN's active-color field.
    pub fn as_char(self) -> char {
        match self {
            Player::Black => 'b',
            Player::White => 'w',
        }
    }

    /// FEN encodes the owner of a piece in the case of its letter.
    pub fn from_case(ch: char) -> Option<Player> {
        if ch.is_ascii_uppercase() {
            Some(Player::White)
        } else if ch.is_ascii_lowercase() {
            Some(Player::Black)
        } else {
            None
        }
    }
}
