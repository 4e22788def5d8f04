#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum File {
    a = 0,
    b = 1,
    c = 2,
    d = 3,
    e = 4,
    f = 5,
    g = 6,
    h = 7,
}

impl File {
    pub fn all_files_ascending() -> impl DoubleEndedIterator<Item = File> {
        [
            Self::a,
            Self::b,
            Self::c,
            Self::d,
            Self::e,
            Self::f,
            Self::g,
            Self::h,
        ]
        .into_iter()
    }

    pub fn as_char(self) -> char {
        match self {
            Self::a => 'a',
            Self::b => 'b',
            Self::c => 'c',
            Self::d => 'd',
            Self::e => 'e',
            Self::f => 'f',
            Self::g => 'g',
            Self::h => 'h',
        }
    }

    pub fn as_index(self) -> usize {
        self as usize
    }
}
