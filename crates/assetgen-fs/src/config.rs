//! Settings file loading
//!
//! The format follows the file extension, so `assetgen.toml`,
//! `assetgen.json` and `assetgen.yaml` are all accepted.

use crate::{Error, NormalizedPath, Result, io};
use serde::de::DeserializeOwned;

/// Serialization format of a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from the extension of `path` (case-insensitive).
    pub fn from_path(path: &NormalizedPath) -> Result<Self> {
        let extension = path.extension().unwrap_or("");
        match extension.to_ascii_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    fn deserialize<T: DeserializeOwned>(self, content: &str) -> std::result::Result<T, String> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Reads typed settings from disk.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Read and deserialize the file at `path`.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let format = ConfigFormat::from_path(path)?;
        let content = io::read_text(path)?;
        self.parse_as(format, path, &content)
    }

    /// Deserialize `content` as though it had been read from `path`.
    pub fn parse<T: DeserializeOwned>(&self, path: &NormalizedPath, content: &str) -> Result<T> {
        self.parse_as(ConfigFormat::from_path(path)?, path, content)
    }

    fn parse_as<T: DeserializeOwned>(
        &self,
        format: ConfigFormat,
        path: &NormalizedPath,
        content: &str,
    ) -> Result<T> {
        tracing::debug!("Parsing {} settings from {}", format.name(), path);
        format.deserialize(content).map_err(|message| Error::ConfigParse {
            path: path.to_native(),
            format: format.name().into(),
            message,
        })
    }
}
