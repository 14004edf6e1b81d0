use rustyline::error::ReadlineError;
use std::{fmt, io, path::PathBuf};

/// Utility enum to package the errors that can stop the program, as opposed to errors in a single
/// equation, which are reported and skipped.
#[derive(Debug)]
pub enum Error {
    /// The input file could not be read.
    Read(PathBuf, io::Error),

    /// The output file could not be written.
    Write(PathBuf, io::Error),

    /// Reading from or writing to the standard streams failed.
    Io(io::Error),

    /// The interactive prompt failed.
    Readline(ReadlineError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(path, err) => write!(f, "could not read `{}`: {}", path.display(), err),
            Self::Write(path, err) => write!(f, "could not write `{}`: {}", path.display(), err),
            Self::Io(err) => write!(f, "{}", err),
            Self::Readline(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ReadlineError> for Error {
    fn from(err: ReadlineError) -> Self {
        Self::Readline(err)
    }
}
