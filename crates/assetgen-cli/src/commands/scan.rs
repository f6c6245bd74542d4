//! Scan command implementation
//!
//! Read-only: nothing is reconciled or written.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use assetgen_core::{ResourceIndex, SyncEngine, group_families};
use assetgen_fs::NormalizedPath;

use super::resolve_config;
use crate::cli::PathArgs;
use crate::error::Result;

/// Run the scan command
pub fn run_scan(
    root: &NormalizedPath,
    config_file: Option<&Path>,
    paths: &PathArgs,
    json: bool,
) -> Result<()> {
    let config = resolve_config(root, config_file, &paths.to_settings())?;
    let layout = config.layout();
    let engine = SyncEngine::new(config);
    let index = engine.scan()?;
    let families = group_families(index.font_files(&layout).map(|f| f.path.as_str()));

    if json {
        let value = json!({
            "resource_dir": index.resource_dir(),
            "exists": index.exists(),
            "directories": index
                .directories()
                .iter()
                .map(|d| json!({ "path": d.path, "is_empty": d.is_empty }))
                .collect::<Vec<_>>(),
            "files": index.files().iter().map(|f| f.path.as_str()).collect::<Vec<_>>(),
            "families": families,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if !index.exists() {
        println!(
            "{} No resource directory at {}/",
            "=>".blue().bold(),
            index.resource_dir()
        );
        return Ok(());
    }

    print_groups(&index);

    if !families.is_empty() {
        println!();
        println!("{}", "Font families".bold());
        for family in &families {
            println!(
                "   {} {} ({})",
                "-".green(),
                family.name.cyan(),
                family.assets.len()
            );
        }
    }
    Ok(())
}

fn print_groups(index: &ResourceIndex) {
    println!(
        "{} {} files in {}/",
        "=>".blue().bold(),
        index.files().len(),
        index.resource_dir()
    );
    for group in index.groups() {
        let name = if group.is_empty() { "(root)" } else { group.as_str() };
        println!("   {} {} ({})", "-".green(), name.cyan(), index.files_in(group).count());
    }

    let empty = index.empty_directories();
    if !empty.is_empty() {
        println!();
        for dir in empty {
            println!("   {} {} contains no files", "!".yellow(), dir);
        }
    }
}
