use std::fmt::Display;
use std::process::ExitCode;

/// Every way a run can fail, each with its own exit code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrinterErr {
    Usage,
    InvalidExtension,
    Unreadable,
    MalformedField,
}

impl PrinterErr {
    pub const fn code(self) -> u8 {
        match self {
            Self::Usage => 1,
            Self::InvalidExtension => 2,
            Self::Unreadable => 3,
            Self::MalformedField => 4,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

impl Display for PrinterErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage => write!(f, "usage: fen-printer <FEN_FILE>"),
            Self::InvalidExtension => write!(f, "invalid .fen file"),
            Self::Unreadable => write!(f, "could not open file"),
            Self::MalformedField => write!(f, "invalid FEN field"),
        }
    }
}

impl std::error::Error for PrinterErr {}
