//! Filesystem abstraction for assetgen
//!
//! Provides normalized resource paths, safe I/O operations, format-agnostic
//! config loading and the resource directory scanner.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod scan;

pub use config::{ConfigFormat, ConfigStore};
pub use constants::ProjectPath;
pub use error::{Error, Result};
pub use path::{NormalizedPath, resolve_root};
pub use scan::{DirectoryScan, ScanOptions, ScannedGroup};
