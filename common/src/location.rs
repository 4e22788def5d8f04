use std::fmt::Display;

use crate::{file::File, rank::Rank};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Location {
    pub(crate) file: File,
    pub(crate) rank: Rank,
}

impl Location {
    pub fn new(file: File, rank: Rank) -> Location {
        Location { file, rank }
    }

    pub fn all_locations() -> impl Iterator<Item = Location> {
        Rank::all_ranks_ascending()
            .flat_map(|rank| File::all_files_ascending().map(move |file| Location::new(file, rank)))
    }

    pub const fn file(&self) -> File {
        self.file
    }

    pub const fn rank(&self) -> Rank {
        self.rank
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file.as_char(), self.rank.as_char())
    }
}
