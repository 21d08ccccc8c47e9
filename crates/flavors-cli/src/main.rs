use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use flavors_cli::commands::{clear, ingest, summary, util};
use flavors_cli::{Cli, Commands, Config};

/// Load config and open database, ensuring the parent directory exists.
fn open_database(cli: &Cli) -> Result<flavors_db::Database> {
    let config = Config::load_from(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_database_override(cli.db.clone());
    tracing::debug!(?config, "loaded configuration");

    if let Some(parent) = config
        .database_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }

    flavors_db::Database::open(&config.database_path)
        .with_context(|| format!("failed to open {}", config.database_path.display()))
}

fn run_summary(cli: &Cli, since: Option<&str>, json: bool) -> Result<()> {
    // Validate the bound before touching the store.
    let since = since.map(util::parse_since).transpose()?;
    let format = if json {
        summary::Format::Json
    } else {
        summary::Format::Table
    };

    let db = open_database(cli)?;
    let mut stdout = io::stdout().lock();
    summary::run(&mut stdout, &db, since, format)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support; logs go to stderr so stdout stays parseable
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match &cli.command {
        Some(Commands::Ingest) => {
            let mut db = open_database(&cli)?;
            ingest::run(&mut db)?;
        }
        Some(Commands::Summary { since, json }) => {
            run_summary(&cli, since.as_deref(), *json)?;
        }
        Some(Commands::Clear { yes }) => {
            let confirmed = *yes || clear::confirm(io::stdin().lock(), &mut io::stderr())?;
            clear::run(&mut io::stdout().lock(), confirmed, || open_database(&cli))?;
        }
        None => {
            // No subcommand, show the summary
            run_summary(&cli, None, false)?;
        }
    }

    Ok(())
}
