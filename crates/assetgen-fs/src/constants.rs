//! Default file and directory names inside a project.

use std::path::Path;

/// Well-known project paths, relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPath {
    /// The project manifest (`pubspec.yaml`)
    Pubspec,
    /// The optional tool configuration (`assetgen.toml`)
    ConfigFile,
    /// The resource root (`resources`)
    ResourceDir,
    /// The fonts subdirectory inside the resource root (`fonts`)
    FontsDir,
    /// The generated source file
    GeneratedSource,
}

impl ProjectPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pubspec => "pubspec.yaml",
            Self::ConfigFile => "assetgen.toml",
            Self::ResourceDir => "resources",
            Self::FontsDir => "fonts",
            Self::GeneratedSource => "lib/generated/assets.dart",
        }
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
