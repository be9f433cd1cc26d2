//! Command implementations

mod check;
mod config;
mod estimate;
mod generate;
mod import;
mod render;

use crate::cli::{Cli, Commands};
use crate::files::load_config;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render(args) => render::execute(args, &output),
        Commands::Check(args) => check::execute(args, &output),
        Commands::Estimate(args) => estimate::execute(args, &config, &output),
        Commands::Import(args) => import::execute(args, &output),
        Commands::Generate(args) => generate::execute(args, config, &output).await,
        Commands::Config => config::execute(&config, &output),
    }
}
