use fen_common::{Piece, Rank};
use fen_parsers::PieceLocations;

/// Top and bottom edge of the board: one pipe per cell boundary plus two
/// characters per cell.
pub const BORDER: &str = "-------------------------";

/// One square, without its closing pipe. The next cell (or the end of the rank)
/// closes it.
pub fn render_cell(square: Option<Piece>) -> String {
    let mut cell = String::with_capacity(3);
    cell.push('|');
    match square {
        None => cell.push_str("  "),
        Some(piece) => {
            cell.push(piece.player().as_char());
            cell.push(piece.kind().as_char());
        }
    }
    cell
}

/// A full rank line, file a to h, closed with a pipe and a newline.
pub fn render_rank(layout: &PieceLocations, rank: Rank) -> String {
    let mut line = String::with_capacity(BORDER.len() + 1);
    for square in layout.rank(rank) {
        line.push_str(&render_cell(square));
    }
    line.push_str("|\n");
    line
}

/// All eight rank lines, rank 8 at the top so white ends up at the bottom.
pub fn render_board(layout: &PieceLocations) -> String {
    Rank::all_ranks_descending()
        .map(|rank| render_rank(layout, rank))
        .collect()
}
