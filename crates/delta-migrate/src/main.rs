//! delta-migrate CLI
//!
//! Command-line tool for rendering `addAutoIncrement` changes.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use delta_migrate::prelude::*;
use delta_migrate::render_all;

/// Render `addAutoIncrement` changes for a target database.
#[derive(Parser)]
#[command(name = "delta-migrate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Changelog file to read changes from.
    #[arg(short, long, env = "DELTA_CHANGELOG", default_value = "changelog.xml")]
    changelog: PathBuf,

    /// Target database dialect (oracle, mssql, postgresql, derby, hsqldb, cache, mysql).
    #[arg(short, long, env = "DELTA_DIALECT", default_value = "generic")]
    dialect: Dialect,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SQL for every change.
    Sql,

    /// List the tables and columns every change touches.
    Objects,

    /// Print every change re-serialized as a changelog element.
    Serialize,

    /// Print the changes as JSON.
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let dialect = cli.dialect;
    let changes = load_changes(&cli.changelog)?;

    if changes.is_empty() {
        info!(
            "No addAutoIncrement changes found in {}",
            cli.changelog.display()
        );
        return Ok(());
    }

    match cli.command {
        Commands::Sql => {
            info!("Generating SQL for {} change(s) on {}", changes.len(), dialect);

            let statements = render_all(&changes, dialect).inspect_err(|err| error!("{err}"))?;
            for statement in statements {
                println!("{statement};");
            }
            info!("{}", AddAutoIncrement::CONFIRMATION_MESSAGE);
        }

        Commands::Objects => {
            for change in &changes {
                let mut objects: Vec<String> = change
                    .affected_database_objects()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                objects.sort();
                println!("{}: {}", change.summary(), objects.join(", "));
            }
        }

        Commands::Serialize => {
            for change in &changes {
                println!("{}", change.serialize().to_xml()?);
            }
        }

        Commands::Json => {
            println!("{}", serde_json::to_string_pretty(&changes)?);
        }
    }

    Ok(())
}
