pub mod config;
pub mod copy;
pub mod report;

use crate::args::FilterArgs;
use crate::config::Config;
use anyhow::{Context, Result};
use rolltally_sdk::{Analysis, DisplaySet, analyze_bytes};
use std::path::Path;

/// Read, analyze and pick the displayed participants for one transcript
pub(crate) fn load(file: &Path, filter: &FilterArgs, config: &Config) -> Result<(Analysis, DisplaySet)> {
    let bytes = std::fs::read(file)
        .with_context(|| format!("Failed to read transcript: {}", file.display()))?;

    let options = config.extract_options(&filter.ignore);
    tracing::debug!(
        file = %file.display(),
        ignored = ?options.ignored_participants,
        "analyzing"
    );
    let analysis = analyze_bytes(&bytes, &options)?;

    let mut display = DisplaySet::from_result(&analysis.result);
    display.hide(config.hidden_participants.iter().chain(filter.hide.iter()));

    Ok((analysis, display))
}
