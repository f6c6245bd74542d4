//! Error types for assetgen-core

use std::path::PathBuf;

/// Result type for assetgen-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in assetgen-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The project manifest does not exist
    #[error("Manifest not found at {path}")]
    MissingDocument { path: PathBuf },

    /// The project manifest cannot be read into the expected structure
    #[error("Malformed manifest at {path}: {message}")]
    MalformedDocument { path: PathBuf, message: String },

    /// Two resource paths synthesize the same constant name
    #[error("Identifier {identifier} is produced by both {first} and {second}")]
    IdentifierCollision {
        identifier: String,
        first: String,
        second: String,
    },

    /// The output path holds a file this tool did not generate
    #[error("Refusing to overwrite {path}: not a generated file")]
    UnmanagedOutput { path: PathBuf },

    /// Explicitly requested configuration file is missing
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// A configuration value is out of range
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidConfig { key: String, message: String },

    /// Filesystem error from assetgen-fs
    #[error(transparent)]
    Fs(#[from] assetgen_fs::Error),

    /// YAML serialization error
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::MalformedDocument {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            message: message.into(),
        }
    }
}
