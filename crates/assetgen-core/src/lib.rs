//! Resource reconciliation and constant generation for assetgen
//!
//! This crate keeps a Flutter project's `pubspec.yaml` and a generated Dart
//! source file in step with the contents of its resource directory:
//!
//! - **Resource index**: Canonical model of the scanned resource tree
//! - **Reconciliation**: Merge of disk state into `flutter.assets` and `flutter.fonts`
//! - **Identifier synthesis**: Collision-checked constant names per resource file
//! - **Code generation**: Dart classes exposing every constant
//! - **SyncEngine**: Plan, check and sync operations over a project
//!
//! # Architecture
//!
//! ```text
//!              scanner (assetgen-fs)
//!                        |
//!                  ResourceIndex
//!                   |         |
//!          FontFamily         |
//!                   |         |
//!          ReconciliationEngine ----> PubspecDocument
//!                        |
//!                   build_model  ----> DartRenderer
//! ```
//!
//! # Example
//!
//! ```ignore
//! use assetgen_core::{ConfigResolver, Settings, SyncEngine};
//! use assetgen_fs::resolve_root;
//!
//! let root = resolve_root(".")?;
//! let config = ConfigResolver::new(root).resolve(&Settings::default())?;
//! let report = SyncEngine::new(config).sync()?;
//! println!("{} declarations added", report.counts.added);
//! ```

pub mod codegen;
pub mod config;
pub mod document;
pub mod error;
pub mod family;
pub mod ident;
pub mod index;
pub mod reconcile;
pub mod sync;

pub use codegen::{DartRenderer, GENERATED_MARKER, is_generated};
pub use config::{ConfigResolver, ResolvedConfig, Settings};
pub use document::{AssetEntry, FontAsset, FontFamilyBlock, ManifestFragment, PubspecDocument};
pub use error::{Error, Result};
pub use family::{FontFamily, family_name, group_families};
pub use ident::{
    AssetConstant, AssetModel, ConstantGroup, FamilyConstant, build_model, build_model_for_class,
};
pub use index::{DirectoryDeclaration, ResourceFile, ResourceIndex, ResourceLayout};
pub use reconcile::{ChangeCounts, Reconciliation, ReconciliationEngine, reconcile};
pub use sync::{CheckReport, CheckStatus, FilePlan, SyncEngine, SyncOptions, SyncPlan, SyncReport};
