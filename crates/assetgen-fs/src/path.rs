//! Forward-slash paths shared by the scanner, the manifest and the writers

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A path stored with `/` separators on every platform.
///
/// Conversion back to a native [`PathBuf`] happens only when touching the
/// filesystem. Manifest entries go through [`NormalizedPath::clean_relative`],
/// so they never carry a leading `/` or empty and `.` segments, and only
/// directories end in `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            inner: path.as_ref().to_string_lossy().replace('\\', "/"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn into_string(self) -> String {
        self.inner
    }

    /// Native form for `std::fs` calls.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Append `segment`, inserting a separator only when one is missing.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let inner = match self.inner.as_str() {
            "" => segment,
            base if base.ends_with('/') => format!("{base}{segment}"),
            base => format!("{base}/{segment}"),
        };
        Self { inner }
    }

    /// Canonical relative form used for manifest entries.
    ///
    /// Drops leading slashes, `.` segments and repeated separators. A
    /// trailing slash survives, so directory paths keep their directory form.
    pub fn clean_relative(&self) -> Self {
        let segments: Vec<&str> = self
            .inner
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect();
        let mut inner = segments.join("/");
        if self.is_dir_form() && !inner.is_empty() {
            inner.push('/');
        }
        Self { inner }
    }

    /// This path with exactly one trailing slash.
    pub fn as_dir(&self) -> Self {
        Self {
            inner: format!("{}/", self.inner.trim_end_matches('/')),
        }
    }

    pub fn is_dir_form(&self) -> bool {
        self.inner.ends_with('/')
    }

    /// Remainder after a directory prefix.
    ///
    /// Matches whole segments only: `res` is not a prefix of `resources/a`.
    pub fn strip_dir_prefix(&self, prefix: &str) -> Option<&str> {
        let prefix = prefix.trim_end_matches('/');
        if prefix.is_empty() {
            return Some(&self.inner);
        }
        match self.inner.strip_prefix(prefix)? {
            "" => Some(""),
            rest => rest.strip_prefix('/'),
        }
    }

    /// Last non-empty segment.
    pub fn file_name(&self) -> Option<&str> {
        self.inner
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
    }

    /// Text after the last `.` of the file name. Dotfiles have none.
    pub fn extension(&self) -> Option<&str> {
        match self.file_name()?.rsplit_once('.')? {
            ("", _) => None,
            (_, extension) => Some(extension),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

/// Canonicalize the project root.
///
/// Uses `dunce` so Windows paths do not pick up the `\\?\` prefix.
pub fn resolve_root(path: impl AsRef<Path>) -> Result<NormalizedPath> {
    let path = path.as_ref();
    let canonical = dunce::canonicalize(path).map_err(|e| Error::io(path, e))?;
    Ok(NormalizedPath::new(canonical))
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_relative_strips_dot_segments() {
        let path = NormalizedPath::new("./resources//images/./icons/");
        assert_eq!(path.clean_relative().as_str(), "resources/images/icons/");
    }

    #[test]
    fn test_clean_relative_drops_leading_slash() {
        let path = NormalizedPath::new("/resources/logo.png");
        assert_eq!(path.clean_relative().as_str(), "resources/logo.png");
    }

    #[test]
    fn test_strip_dir_prefix_whole_segments() {
        let path = NormalizedPath::new("resources/images/logo.png");
        assert_eq!(path.strip_dir_prefix("resources"), Some("images/logo.png"));
        assert_eq!(path.strip_dir_prefix("resources/"), Some("images/logo.png"));
        assert_eq!(path.strip_dir_prefix("res"), None);
        assert_eq!(
            NormalizedPath::new("resources").strip_dir_prefix("resources/"),
            Some("")
        );
    }

    #[test]
    fn test_file_name_ignores_trailing_slash() {
        assert_eq!(NormalizedPath::new("resources/images/").file_name(), Some("images"));
        assert_eq!(NormalizedPath::new("/").file_name(), None);
    }
}
