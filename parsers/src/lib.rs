mod scanner;
pub use scanner::placement_field;
mod fen;
use fen::FenParser;
pub use fen::{FenErr, FenErrKind, PieceLocations, SquareToken};

/// Parses the piece-placement field at the start of `fen`. Everything after the
/// first whitespace is ignored, and error spans are byte offsets into `fen`.
pub fn parse_fen(fen: &str) -> Result<PieceLocations, FenErr> {
    FenParser::parse_fen(fen)
}

/// Parses a bare piece-placement field, with no trailing FEN fields.
pub fn parse_placement(field: &str) -> Result<PieceLocations, FenErr> {
    FenParser::parse_placement(field)
}
