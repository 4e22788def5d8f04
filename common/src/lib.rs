mod location;
mod file;
mod rank;
mod player;
mod piece_kind;
mod piece;

pub use location::Location;
pub use file::File;
pub use rank::Rank;
pub use piece_kind::PieceKind;
pub use player::Player;
pub use piece::Piece;
