//! Command implementations for assetgen-cli

pub mod scan;
pub mod sync;

use std::path::Path;

use assetgen_core::{ConfigResolver, ResolvedConfig, Settings};
use assetgen_fs::NormalizedPath;

use crate::error::Result;

pub use scan::run_scan;
pub use sync::{run_check, run_sync};

/// Resolve the effective configuration for a project root.
///
/// `config_file` replaces the default `assetgen.toml` lookup; `overrides`
/// come from command-line flags and win over both.
pub fn resolve_config(
    root: &NormalizedPath,
    config_file: Option<&Path>,
    overrides: &Settings,
) -> Result<ResolvedConfig> {
    let mut resolver = ConfigResolver::new(root.clone());
    if let Some(path) = config_file {
        resolver = resolver.with_config_file(path);
    }
    tracing::debug!("Resolving configuration from {}", resolver.config_path());
    Ok(resolver.resolve(overrides)?)
}
