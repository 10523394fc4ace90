//! rolltally-sdk: critical/fumble statistics from session transcripts.
//!
//! # Overview
//!
//! One call turns a saved HTML transcript into per-participant statistics:
//! the transcript is parsed, every log entry is checked for a skill-check
//! announcement, and the resulting roll events are folded per participant.
//!
//! # Quickstart
//!
//! ```
//! use rolltally_sdk::{ExtractOptions, analyze};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let html = r#"<p><span>[main]</span><span>Alice</span>
//!   <span>CCB&lt;=65 【目星】 (1D100&lt;=65) ＞ 4 ＞ 決定的成功</span></p>"#;
//!
//! let analysis = analyze(html, &ExtractOptions::default())?;
//! let alice = analysis.result.get("Alice").unwrap();
//! assert_eq!(alice.total_critical, 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! This SDK acts as a facade over:
//! - `rolltally-types`: Core domain models (RollEvent, ParticipantStats, etc.)
//! - `rolltally-providers`: Transcript parsing and roll extraction
//! - `rolltally-engine`: Aggregation and display ordering

pub mod error;

pub use error::{Error, Result};
pub use rolltally_engine::{Aggregator, DisplaySet, aggregate};
pub use rolltally_providers::{
    DEFAULT_IGNORED_PARTICIPANTS, ExtractOptions, HtmlTranscript, SkipTally, extract_events,
};
pub use rolltally_types as types;

use rolltally_types::AggregationResult;
use serde::Serialize;

/// Outcome of one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub result: AggregationResult,
    /// How the transcript's entries were consumed
    pub tally: SkipTally,
}

/// Analyze transcript markup.
///
/// Fails with [`Error::Parse`] when the input is not markup, and with
/// [`Error::NoData`] when it parses but holds no recognizable roll.
pub fn analyze(markup: &str, options: &ExtractOptions) -> Result<Analysis> {
    let transcript = HtmlTranscript::parse(markup)?;

    let mut events = extract_events(&transcript, options);
    let result = aggregate(events.by_ref());
    let tally = events.tally();

    tracing::info!(
        entries = tally.entries,
        events = tally.events,
        participants = result.len(),
        "analyzed transcript"
    );
    tracing::debug!(
        too_few_fragments = tally.too_few_fragments,
        ignored_participant = tally.ignored_participant,
        no_roll = tally.no_roll,
        empty_field = tally.empty_field,
        "skipped entries"
    );

    if result.is_empty() {
        return Err(Error::NoData {
            entries: tally.entries,
        });
    }

    Ok(Analysis { result, tally })
}

/// Analyze raw file contents. Input that is not valid UTF-8 is a parse failure.
pub fn analyze_bytes(bytes: &[u8], options: &ExtractOptions) -> Result<Analysis> {
    let markup = std::str::from_utf8(bytes)
        .map_err(|e| Error::Parse(format!("transcript is not valid UTF-8: {}", e)))?;
    analyze(markup, options)
}
