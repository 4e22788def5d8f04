mod cells;
pub use cells::{render_board, render_cell, render_rank, BORDER};
mod diagram;
pub use diagram::Diagram;

use fen_parsers::FenErr;

/// Parses `fen` and renders the framed diagram, titled with `title` if given.
pub fn render_fen(fen: &str, title: Option<&str>) -> Result<String, FenErr> {
    let layout = fen_parsers::parse_fen(fen)?;
    let diagram = match title {
        None => Diagram::new(&layout),
        Some(title) => Diagram::new(&layout).with_title(title),
    };
    Ok(diagram.to_string())
}
