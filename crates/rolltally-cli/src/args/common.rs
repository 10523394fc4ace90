use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Skip entries from this speaker (adds to the configured list)
    #[arg(long = "ignore", value_name = "NAME")]
    pub ignore: Vec<String>,

    /// Leave this participant out of the output (statistics are unchanged)
    #[arg(long = "hide", value_name = "NAME")]
    pub hide: Vec<String>,
}
