mod fen_parser;
pub use fen_parser::{FenErr, FenErrKind};
pub(crate) use fen_parser::FenParser;
mod piece_locations;
pub use piece_locations::PieceLocations;
mod square_token;
pub use square_token::SquareToken;
