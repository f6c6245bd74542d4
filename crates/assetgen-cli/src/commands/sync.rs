//! Sync and check command implementations

use std::path::Path;

use colored::Colorize;

use assetgen_core::{CheckStatus, SyncEngine, SyncOptions, SyncReport};
use assetgen_fs::NormalizedPath;

use super::resolve_config;
use crate::cli::{PathArgs, SyncArgs};
use crate::error::{CliError, Result};

/// Run the sync command
///
/// Reconciles the manifest and regenerates the constants file. With
/// `--dry-run`, prints a unified diff of every file that would change.
pub fn run_sync(root: &NormalizedPath, config_file: Option<&Path>, args: &SyncArgs) -> Result<()> {
    let config = resolve_config(root, config_file, &args.to_settings())?;
    let engine = SyncEngine::new(config);

    if !args.json {
        let label = if args.dry_run { "Previewing" } else { "Syncing" };
        println!(
            "{} {} resources in {}/",
            "=>".blue().bold(),
            label,
            engine.config().resource_dir
        );
    }

    let plan = engine.plan()?;
    if args.dry_run && !args.json {
        for file in plan.changed_files() {
            print!("{}", file.diff());
        }
    }
    let report = engine.execute(&plan, SyncOptions { dry_run: args.dry_run })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &SyncReport) {
    let counts = &report.counts;
    println!(
        "   {} {} declared, {} {} retired",
        "+".green(),
        plural(counts.added, "directory", "directories"),
        "-".red(),
        counts.removed
    );
    println!(
        "   {} {} declared, {} {} retired",
        "+".green(),
        plural(counts.fonts_added, "font asset", "font assets"),
        "-".red(),
        counts.fonts_removed
    );
    for dir in &report.empty_directories {
        println!("   {} {} contains no files", "!".yellow(), dir.cyan());
    }
    for action in &report.actions {
        println!("   {} {}", "*".green(), action);
    }

    if report.has_changes() {
        println!(
            "{} {} generated.",
            "OK".green().bold(),
            plural(report.constants, "constant", "constants")
        );
    } else {
        println!("{} Everything is up to date.", "OK".green().bold());
    }
}

/// Run the check command
///
/// Fails when a sync would rewrite the manifest or the generated source.
pub fn run_check(
    root: &NormalizedPath,
    config_file: Option<&Path>,
    paths: &PathArgs,
    json: bool,
) -> Result<()> {
    let config = resolve_config(root, config_file, &paths.to_settings())?;
    let report = SyncEngine::new(config).check()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    match report.status {
        CheckStatus::UpToDate => {
            if !json {
                println!("{} Resources are in sync.", "OK".green().bold());
            }
            Ok(())
        }
        CheckStatus::Stale => {
            if !json {
                println!("{} Outputs are out of date:", "STALE".yellow().bold());
                for file in &report.stale_files {
                    println!("   {} {}", "-".yellow(), file.cyan());
                }
                println!();
                println!("Run {} to update.", "assetgen sync".cyan());
            }
            Err(CliError::user(format!(
                "{} out of date",
                plural(report.stale_files.len(), "file", "files")
            )))
        }
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {one}")
    } else {
        format!("{count} {many}")
    }
}
