use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::config::Config;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = Config::resolve_path(cli.config.as_deref())?;

    match cli.command {
        Commands::Report { file, filter } => {
            let config = Config::load_from(&config_path)?;
            handlers::report::handle(&file, &filter, &config, cli.format)
        }

        Commands::Copy {
            file,
            participant,
            filter,
        } => {
            let config = Config::load_from(&config_path)?;
            handlers::copy::handle(&file, participant.as_deref(), &filter, &config, cli.format)
        }

        Commands::Config { command } => match command {
            ConfigCommand::Path => handlers::config::path(&config_path),
            ConfigCommand::Init { force } => handlers::config::init(&config_path, force),
        },
    }
}
