//! Project configuration
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. **Built-in defaults** - `resources/`, `pubspec.yaml`, `lib/generated/assets.dart`
//! 2. **Project config** - `assetgen.toml` at the project root, or an explicit file
//! 3. **Overrides** - values supplied by the caller, typically CLI flags
//!
//! # Example
//!
//! ```ignore
//! use assetgen_core::config::{ConfigResolver, Settings};
//! use assetgen_fs::NormalizedPath;
//!
//! let resolver = ConfigResolver::new(NormalizedPath::new("/path/to/app"));
//! let config = resolver.resolve(&Settings::default())?;
//! println!("scanning {}", config.resource_dir);
//! ```

mod resolver;
mod settings;

pub use resolver::{ConfigResolver, ResolvedConfig};
pub use settings::Settings;
