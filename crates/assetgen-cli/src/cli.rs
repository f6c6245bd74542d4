//! CLI argument parsing using clap derive

use std::path::PathBuf;

use assetgen_core::Settings;
use clap::{Args, Parser, Subcommand};

/// assetgen - Keep pubspec.yaml and generated asset constants in step with your resources
#[derive(Parser, Debug)]
#[command(name = "assetgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Configuration file (defaults to assetgen.toml in the project root)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to run (defaults to sync)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Reconcile pubspec.yaml and regenerate the constants file
    ///
    /// Examples:
    ///   assetgen sync                 # Update files in place
    ///   assetgen sync --dry-run       # Show a diff, write nothing
    ///   assetgen sync --no-fonts      # Leave flutter.fonts alone
    Sync(SyncArgs),

    /// Exit with an error when a sync would change anything
    Check {
        #[command(flatten)]
        paths: PathArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List discovered resource groups, directories and font families
    Scan {
        #[command(flatten)]
        paths: PathArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Sync(SyncArgs::default())
    }
}

/// Arguments of the sync command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncArgs {
    /// Preview changes without applying them
    #[arg(long)]
    pub dry_run: bool,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,

    /// Do not reconcile font families
    #[arg(long)]
    pub no_fonts: bool,

    /// Do not write the generated constants file
    #[arg(long)]
    pub no_codegen: bool,

    #[command(flatten)]
    pub paths: PathArgs,
}

impl SyncArgs {
    pub fn to_settings(&self) -> Settings {
        let mut settings = self.paths.to_settings();
        if self.no_fonts {
            settings.fonts = Some(false);
        }
        if self.no_codegen {
            settings.codegen = Some(false);
        }
        settings
    }
}

/// Path overrides shared by every command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PathArgs {
    /// Resource root relative to the project
    #[arg(long, value_name = "DIR")]
    pub resource_dir: Option<String>,

    /// Manifest path relative to the project
    #[arg(long, value_name = "FILE")]
    pub pubspec: Option<String>,

    /// Generated source path relative to the project
    #[arg(long, value_name = "FILE")]
    pub output: Option<String>,

    /// Name of the aggregate class in the generated source
    #[arg(long, value_name = "NAME")]
    pub class_name: Option<String>,
}

impl PathArgs {
    pub fn to_settings(&self) -> Settings {
        Settings {
            resource_dir: self.resource_dir.clone(),
            pubspec: self.pubspec.clone(),
            output: self.output.clone(),
            class_name: self.class_name.clone(),
            ..Settings::default()
        }
    }
}
