use crate::args::FilterArgs;
use crate::config::Config;
use crate::presentation::json::CopyView;
use crate::presentation::{format_all_participants, format_participant};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use rolltally_types::normalize_whitespace;
use std::path::Path;

pub fn handle(
    file: &Path,
    participant: Option<&str>,
    filter: &FilterArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let (analysis, mut display) = super::load(file, filter, config)?;

    let (names, text) = match participant {
        Some(name) => {
            // Names are keyed after whitespace normalization
            let name = normalize_whitespace(name);
            display.retain_only(&name);
            let (name, stats) = display
                .ranked(&analysis.result)
                .first()
                .copied()
                .with_context(|| format!("Participant not found: {}", name))?;
            (vec![name], format_participant(name, stats))
        }
        None => {
            let ranked = display.ranked(&analysis.result);
            let text = format_all_participants(&ranked)
                .context("Nothing to copy: every participant is hidden")?;
            (ranked.iter().map(|(name, _)| *name).collect(), text)
        }
    };

    match format {
        OutputFormat::Json => {
            let view = CopyView {
                participants: names,
                text,
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        OutputFormat::Plain => println!("{}", text),
    }

    Ok(())
}
