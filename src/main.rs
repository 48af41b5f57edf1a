use anyhow::{Context, Result};
use clap::Parser;

use biodash::cli::args::{Cli, Commands};
use biodash::cli::handlers;
use biodash::config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { force }) => {
            let path = AppConfig::config_path()?;
            handlers::handle_init(&path, force)?;
        }
        command => {
            let config = AppConfig::load().context("Loading config")?;
            // A bad calorie goal or duplicate task id is reported here, before any UI starts
            let engine = config.build_engine()?;

            match command {
                Some(Commands::Summary { json }) => {
                    handlers::handle_summary(&config, &engine, json)?
                }
                Some(Commands::Levels) => handlers::handle_levels(&engine)?,
                _ => biodash::tui::app::run(config, engine)?,
            }
        }
    }

    Ok(())
}
