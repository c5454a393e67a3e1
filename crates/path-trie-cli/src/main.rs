mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "path-trie")]
#[command(version, about = "path-trie CLI - validate route tables and resolve paths", long_about = None)]
struct Cli {
    /// Log at debug level regardless of the route table's [log] setting
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Define every route in a table and print the resulting trie
    Check {
        /// Route table (TOML)
        routes: PathBuf,
    },

    /// Resolve paths against a route table, one JSON result per path
    Match {
        /// Route table (TOML)
        routes: PathBuf,

        /// Request paths, e.g. /users/42
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let routes = match &cli.command {
        Commands::Check { routes } | Commands::Match { routes, .. } => routes,
    };
    let config = Config::load(routes)?;

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        config.log.level()?
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Check { .. } => {
            commands::check::execute(&config)?;
        }
        Commands::Match { paths, .. } => {
            commands::resolve::execute(&config, &paths)?;
        }
    }

    Ok(())
}
