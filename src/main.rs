use anyhow::Result;
use clap::Parser;

mod cli;
mod config;

use cli::Cli;

fn main() -> Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config)?;
    config::init_tracing(&app_config.log_level);

    tracing::debug!(?app_config, "Configuration loaded");
    cli.run(&app_config)
}
