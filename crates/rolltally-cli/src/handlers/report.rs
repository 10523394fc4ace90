use crate::args::FilterArgs;
use crate::config::Config;
use crate::presentation::json::ReportView;
use crate::presentation::{ReportOpts, format_report};
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use std::path::Path;

pub fn handle(file: &Path, filter: &FilterArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let (analysis, display) = super::load(file, filter, config)?;
    let ranked = display.ranked(&analysis.result);

    match format {
        OutputFormat::Json => {
            let view = ReportView::new(&ranked, analysis.tally);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        OutputFormat::Plain => {
            if ranked.is_empty() {
                eprintln!("All participants are hidden; nothing to display.");
                return Ok(());
            }
            let opts = ReportOpts {
                enable_color: std::io::stdout().is_terminal(),
            };
            for line in format_report(&ranked, &opts) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
