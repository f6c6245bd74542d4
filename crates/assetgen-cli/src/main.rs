//! assetgen CLI
//!
//! Keeps a Flutter project's `pubspec.yaml` and generated asset constants in
//! step with its resource directory.

mod cli;
mod commands;
mod error;

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use assetgen_fs::{NormalizedPath, resolve_root};
use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    // The only place the process working directory is consulted
    let root = match &cli.project {
        Some(project) => resolve_root(project)?,
        None => resolve_root(std::env::current_dir()?)?,
    };
    tracing::debug!("Project root: {}", root);

    execute_command(&root, cli.config.as_deref(), cli.command.unwrap_or_default())
}

fn execute_command(root: &NormalizedPath, config: Option<&Path>, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Sync(args) => commands::run_sync(root, config, &args),
        Commands::Check { paths, json } => commands::run_check(root, config, &paths, json),
        Commands::Scan { paths, json } => commands::run_scan(root, config, &paths, json),
    }
}
