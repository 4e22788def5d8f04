use std::fmt::Display;

use fen_parsers::PieceLocations;

use crate::{render_board, BORDER};

/// A framed board: a blank line, the optional title, the top border, the eight
/// ranks and the bottom border.
pub struct Diagram<'layout> {
    layout: &'layout PieceLocations,
    title: Option<&'layout str>,
}

impl<'layout> Diagram<'layout> {
    pub fn new(layout: &'layout PieceLocations) -> Self {
        Self {
            layout,
            title: None,
        }
    }

    pub fn with_title(mut self, title: &'layout str) -> Self {
        self.title = Some(title);
        self
    }
}

impl Display for Diagram<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        if let Some(title) = self.title {
            writeln!(f, "{}", title)?;
        }
        writeln!(f, "{}", BORDER)?;
        f.write_str(&render_board(self.layout))?;
        writeln!(f, "{}", BORDER)
    }
}
