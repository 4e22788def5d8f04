use std::fmt::{Display, Write};
use std::ops::{Index, IndexMut};

use fen_common::{File, Location, Piece, Rank};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PieceLocations {
    pieces: [[Option<Piece>; 8]; 8],
}

impl PieceLocations {
    /// The squares of `rank`, file a first.
    pub fn rank(&self, rank: Rank) -> impl Iterator<Item = Option<Piece>> + '_ {
        self.pieces[rank.as_index()].iter().copied()
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Location, Piece)> + '_ {
        Location::all_locations()
            .filter_map(move |location| self[&location].map(|piece| (location, piece)))
    }
}

impl Index<&Location> for PieceLocations {
    type Output = Option<Piece>;

    fn index(&self, index: &Location) -> &Self::Output {
        &self.pieces[index.rank().as_index()][index.file().as_index()]
    }
}

impl IndexMut<&Location> for PieceLocations {
    fn index_mut(&mut self, index: &Location) -> &mut Self::Output {
        &mut self.pieces[index.rank().as_index()][index.file().as_index()]
    }
}

/// Writes the canonical piece-placement field, collapsing empty runs into digits.
impl Display for PieceLocations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, rank) in Rank::all_ranks_descending().enumerate() {
            let mut num_empties = 0_u8;

            if i != 0 {
                f.write_char('/')?;
            }

            for file in File::all_files_ascending() {
                match self[&Location::new(file, rank)] {
                    None => num_empties += 1,
                    Some(piece) => {
                        if num_empties > 0 {
                            f.write_char((num_empties + b'0') as char)?;
                            num_empties = 0;
                        }
                        f.write_char(piece.to_fen())?;
                    }
                }
            }

            if num_empties > 0 {
                f.write_char((num_empties + b'0') as char)?;
            }
        }

        Ok(())
    }
}
