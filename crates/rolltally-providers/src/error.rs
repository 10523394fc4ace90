use std::fmt;

/// Result type for rolltally-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the providers layer
///
/// Only whole-document failures surface here. A single entry that does not
/// look like a roll is skipped, never reported.
#[derive(Debug)]
pub enum Error {
    /// Input could not be interpreted as markup
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
