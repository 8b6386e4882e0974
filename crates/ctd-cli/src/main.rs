use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use ctd_l10n::Language;
use tracing_subscriber::EnvFilter;

use ctd_cli::commands::{export, locations, overview};
use ctd_cli::{Cli, Commands, Config};

/// Load config and resolve the effective language and snapshot path.
fn load_config(cli: &Cli) -> Result<(Config, Language)> {
    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let language = cli.lang.unwrap_or(config.language);
    Ok((config, language))
}

fn resolve_input(input: Option<&Path>, config: &Config) -> PathBuf {
    input.map_or_else(|| config.diary_path.clone(), Path::to_path_buf)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match &cli.command {
        Some(Commands::Overview { input, days, json }) => {
            let (config, language) = load_config(&cli)?;
            let input = resolve_input(input.as_deref(), &config);
            overview::run(
                &input,
                *days,
                *json,
                config.min_distinct_high_risk_encounters,
                language,
            )?;
        }
        Some(Commands::Export { input, output }) => {
            let (config, language) = load_config(&cli)?;
            let input = resolve_input(input.as_deref(), &config);
            export::run(&input, output.as_deref(), language)?;
        }
        Some(Commands::Locations { input, json }) => {
            let (config, language) = load_config(&cli)?;
            let input = resolve_input(input.as_deref(), &config);
            locations::run(&input, *json, language)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
