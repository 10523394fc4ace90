// Error types
pub mod error;

// Tree query abstraction over a parsed transcript
pub mod traits;

// HTML-backed transcript tree
pub mod html;

// Roll announcement grammar
pub mod grammar;

// Extraction options
pub mod options;

// Entry -> RollEvent extraction
pub mod extract;

pub use error::{Error, Result};
pub use extract::{RollEvents, SkipReason, SkipTally, extract_events};
pub use grammar::{RollMatch, match_roll};
pub use html::HtmlTranscript;
pub use options::{DEFAULT_IGNORED_PARTICIPANTS, ExtractOptions};
pub use traits::{LogEntry, TranscriptTree};
