//! Configuration resolution with layered merge

use std::path::Path;

use assetgen_fs::{ConfigStore, NormalizedPath, ProjectPath, ScanOptions};

use super::settings::Settings;
use crate::ident::DEFAULT_CLASS_NAME;
use crate::index::{DEFAULT_FONT_EXTENSIONS, ResourceLayout};
use crate::{Error, Result};

/// The effective configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Absolute project root; every other path is relative to it
    pub project_root: NormalizedPath,
    pub resource_dir: String,
    pub pubspec: String,
    pub output: String,
    pub fonts_dir: String,
    pub font_extensions: Vec<String>,
    pub class_name: String,
    pub include_hidden: bool,
    pub fonts: bool,
    pub codegen: bool,
}

impl ResolvedConfig {
    /// Defaults for a project root.
    pub fn defaults(project_root: NormalizedPath) -> Self {
        Self {
            project_root,
            resource_dir: ProjectPath::ResourceDir.as_str().to_string(),
            pubspec: ProjectPath::Pubspec.as_str().to_string(),
            output: ProjectPath::GeneratedSource.as_str().to_string(),
            fonts_dir: ProjectPath::FontsDir.as_str().to_string(),
            font_extensions: DEFAULT_FONT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
            include_hidden: false,
            fonts: true,
            codegen: true,
        }
    }

    /// Apply a settings layer and validate the result.
    pub fn from_settings(project_root: NormalizedPath, settings: &Settings) -> Result<Self> {
        let mut config = Self::defaults(project_root);

        if let Some(dir) = &settings.resource_dir {
            config.resource_dir = relative_path("resource_dir", dir)?;
        }
        if let Some(pubspec) = &settings.pubspec {
            config.pubspec = relative_path("pubspec", pubspec)?;
        }
        if let Some(output) = &settings.output {
            config.output = relative_path("output", output)?;
        }
        if let Some(dir) = &settings.fonts_dir {
            config.fonts_dir = relative_path("fonts_dir", dir)?;
        }
        if let Some(extensions) = &settings.font_extensions {
            config.font_extensions = extensions.clone();
        }
        if let Some(name) = &settings.class_name {
            if !is_dart_identifier(name) {
                return Err(Error::invalid_config(
                    "class_name",
                    format!("`{name}` is not a valid class name"),
                ));
            }
            config.class_name = name.clone();
        }
        if let Some(hidden) = settings.include_hidden {
            config.include_hidden = hidden;
        }
        if let Some(fonts) = settings.fonts {
            config.fonts = fonts;
        }
        if let Some(codegen) = settings.codegen {
            config.codegen = codegen;
        }

        Ok(config)
    }

    pub fn pubspec_path(&self) -> NormalizedPath {
        self.project_root.join(&self.pubspec)
    }

    pub fn output_path(&self) -> NormalizedPath {
        self.project_root.join(&self.output)
    }

    pub fn layout(&self) -> ResourceLayout {
        ResourceLayout::new(&self.resource_dir, &self.fonts_dir)
            .with_font_extensions(&self.font_extensions)
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            include_hidden: self.include_hidden,
        }
    }
}

/// Resolves configuration for a project root.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    root: NormalizedPath,
    config_file: Option<NormalizedPath>,
}

impl ConfigResolver {
    /// Resolver reading `assetgen.toml` from `root`, if present.
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            root,
            config_file: None,
        }
    }

    /// Read settings from an explicit file instead.
    ///
    /// Relative paths are taken from the project root. Unlike the default
    /// file, an explicit file must exist.
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.config_file = Some(if path.is_absolute() {
            NormalizedPath::new(path)
        } else {
            self.root.join(&NormalizedPath::new(path).clean_relative().into_string())
        });
        self
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Path of the configuration file this resolver reads.
    pub fn config_path(&self) -> NormalizedPath {
        self.config_file
            .clone()
            .unwrap_or_else(|| self.root.join(ProjectPath::ConfigFile.as_str()))
    }

    pub fn has_config(&self) -> bool {
        self.config_path().is_file()
    }

    /// Load the project settings layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] when an explicit file is missing, and
    /// a parse error when the file is invalid or has unknown keys.
    pub fn load_settings(&self) -> Result<Settings> {
        let path = self.config_path();
        if !path.is_file() {
            if self.config_file.is_some() {
                return Err(Error::ConfigNotFound {
                    path: path.to_native(),
                });
            }
            tracing::debug!("No config at {}, using defaults", path);
            return Ok(Settings::default());
        }

        tracing::debug!("Loading config from {}", path);
        Ok(ConfigStore::new().load(&path)?)
    }

    /// Resolve defaults, the project settings and `overrides`, in that order.
    pub fn resolve(&self, overrides: &Settings) -> Result<ResolvedConfig> {
        let mut settings = self.load_settings()?;
        settings.merge(overrides);
        ResolvedConfig::from_settings(self.root.clone(), &settings)
    }
}

fn relative_path(key: &str, value: &str) -> Result<String> {
    let cleaned = NormalizedPath::new(value).clean_relative();
    let cleaned = cleaned.as_str().trim_end_matches('/');

    if Path::new(value).is_absolute() || value.starts_with('/') {
        return Err(Error::invalid_config(key, "must be relative to the project root"));
    }
    if cleaned.is_empty() {
        return Err(Error::invalid_config(key, "must not be empty"));
    }
    if cleaned.split('/').any(|segment| segment == "..") {
        return Err(Error::invalid_config(key, "must not leave the project root"));
    }
    Ok(cleaned.to_string())
}

fn is_dart_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
