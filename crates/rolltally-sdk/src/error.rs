use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Input could not be read as markup
    Parse(String),
    /// Markup parsed, but no roll was recognized in any entry
    NoData { entries: usize },
}

impl Error {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Parse(_) => 1,
            Error::NoData { .. } => 2,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(msg) => write!(f, "Failed to parse transcript: {}", msg),
            Error::NoData { entries } => write!(
                f,
                "No skill-check rolls found in transcript ({} entries scanned)",
                entries
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<rolltally_providers::Error> for Error {
    fn from(err: rolltally_providers::Error) -> Self {
        match err {
            rolltally_providers::Error::Parse(msg) => Error::Parse(msg),
        }
    }
}
