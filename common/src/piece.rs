use std::fmt::Debug;

use crate::{PieceKind, Player};

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    player: Player,
}

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(Player::White, PieceKind::Pawn);
    pub const BLACK_PAWN: Piece = Piece::new(Player::Black, PieceKind::Pawn);

    pub const fn new(player: Player, kind: PieceKind) -> Self {
        Self { kind, player }
    }

    /// Reads a FEN piece letter. Uppercase letters are white, lowercase are black.
    pub fn from_fen(ch: char) -> Option<Self> {
        let player = Player::from_case(ch)?;
        let kind = PieceKind::try_from(ch.to_ascii_uppercase()).ok()?;
        Some(Self::new(player, kind))
    }

    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    pub const fn player(&self) -> Player {
        self.player
    }

    pub const fn to_fen(&self) -> char {
        match self.player() {
            Player::White => self.kind().as_char().to_ascii_uppercase(),
            Player::Black => self.kind().as_char().to_ascii_lowercase(),
        }
    }
}

impl Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut repr_string = String::with_capacity(2);
        repr_string.push(self.player.as_char());
        repr_string.push(self.kind.as_char());
        f.write_str(&repr_string)
    }
}
