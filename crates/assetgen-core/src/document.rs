//! Typed access to the project manifest
//!
//! The manifest is held as an ordered YAML mapping. Only two keys are
//! interpreted: `flutter.assets` and `flutter.fonts`. They are read into a
//! [`ManifestFragment`] and written back with [`PubspecDocument::apply`];
//! every other key stays where it was, with its value untouched.

use std::path::{Path, PathBuf};

use assetgen_fs::{NormalizedPath, io};
use serde_yaml::{Mapping, Value};

use crate::{Error, Result};

const FLUTTER: &str = "flutter";
const ASSETS: &str = "assets";
const FONTS: &str = "fonts";
const FAMILY: &str = "family";
const ASSET: &str = "asset";

/// Dotted key of the directory declarations.
pub const ASSETS_KEY: &str = "flutter.assets";
/// Dotted key of the font family blocks.
pub const FONTS_KEY: &str = "flutter.fonts";

/// One entry of `flutter.assets`.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetEntry {
    /// A plain path entry
    Path(String),
    /// Anything else (e.g. a `path:`/`flavors:` mapping), carried verbatim
    Opaque(Value),
}

impl AssetEntry {
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Path(path) => Some(path),
            Self::Opaque(_) => None,
        }
    }

    fn from_value(value: &Value) -> Self {
        match value {
            Value::String(path) => Self::Path(path.clone()),
            other => Self::Opaque(other.clone()),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Self::Path(path) => Value::String(path.clone()),
            Self::Opaque(value) => value.clone(),
        }
    }
}

/// One `asset:` entry inside a family block.
///
/// Keys besides `asset` (`weight`, `style`, ...) are kept in their original
/// order when the entry is written back.
#[derive(Debug, Clone)]
pub struct FontAsset {
    pub asset: String,
    raw: Mapping,
}

impl FontAsset {
    pub fn new(asset: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            raw: Mapping::new(),
        }
    }

    /// Same entry pointing at a different path.
    pub fn with_asset(&self, asset: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            raw: self.raw.clone(),
        }
    }

    /// Look up a sibling key such as `weight`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    fn from_value(value: &Value, origin: &Path) -> Result<Self> {
        let Value::Mapping(raw) = value else {
            return Err(Error::malformed(origin, "font entries must be mappings"));
        };
        let asset = match raw.get(ASSET) {
            Some(Value::String(asset)) => asset.clone(),
            _ => {
                return Err(Error::malformed(
                    origin,
                    "font entry is missing a string `asset`",
                ));
            }
        };
        Ok(Self {
            asset,
            raw: raw.clone(),
        })
    }

    fn to_value(&self) -> Value {
        let mut raw = self.raw.clone();
        raw.insert(Value::from(ASSET), Value::from(self.asset.as_str()));
        Value::Mapping(raw)
    }
}

// Equal when they write back the same YAML, whatever was parsed
impl PartialEq for FontAsset {
    fn eq(&self, other: &Self) -> bool {
        self.to_value() == other.to_value()
    }
}

/// One entry of `flutter.fonts`.
#[derive(Debug, Clone)]
pub struct FontFamilyBlock {
    pub family: String,
    pub fonts: Vec<FontAsset>,
    raw: Mapping,
}

impl FontFamilyBlock {
    pub fn new(family: impl Into<String>, fonts: Vec<FontAsset>) -> Self {
        Self {
            family: family.into(),
            fonts,
            raw: Mapping::new(),
        }
    }

    /// Same block with a replaced asset list.
    pub fn with_fonts(&self, fonts: Vec<FontAsset>) -> Self {
        Self {
            family: self.family.clone(),
            fonts,
            raw: self.raw.clone(),
        }
    }

    /// Asset paths in declaration order.
    pub fn asset_paths(&self) -> Vec<&str> {
        self.fonts.iter().map(|f| f.asset.as_str()).collect()
    }

    fn from_value(value: &Value, origin: &Path) -> Result<Self> {
        let Value::Mapping(raw) = value else {
            return Err(Error::malformed(origin, "`flutter.fonts` entries must be mappings"));
        };
        let family = match raw.get(FAMILY) {
            Some(Value::String(family)) => family.clone(),
            _ => {
                return Err(Error::malformed(
                    origin,
                    "font block is missing a string `family`",
                ));
            }
        };
        let fonts = match raw.get(FONTS) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(items)) => items
                .iter()
                .map(|item| FontAsset::from_value(item, origin))
                .collect::<Result<_>>()?,
            Some(_) => {
                return Err(Error::malformed(
                    origin,
                    format!("`fonts` of family {family} must be a list"),
                ));
            }
        };
        Ok(Self {
            family,
            fonts,
            raw: raw.clone(),
        })
    }

    fn to_value(&self) -> Value {
        let mut raw = self.raw.clone();
        raw.insert(Value::from(FAMILY), Value::from(self.family.as_str()));
        raw.insert(
            Value::from(FONTS),
            Value::Sequence(self.fonts.iter().map(FontAsset::to_value).collect()),
        );
        Value::Mapping(raw)
    }
}

impl PartialEq for FontFamilyBlock {
    fn eq(&self, other: &Self) -> bool {
        self.to_value() == other.to_value()
    }
}

/// The part of the manifest owned by reconciliation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManifestFragment {
    pub assets: Vec<AssetEntry>,
    pub fonts: Vec<FontFamilyBlock>,
}

impl ManifestFragment {
    /// Plain path entries of `flutter.assets`, in order.
    pub fn asset_paths(&self) -> Vec<&str> {
        self.assets.iter().filter_map(AssetEntry::path).collect()
    }

    /// First block declaring `family`.
    pub fn family(&self, family: &str) -> Option<&FontFamilyBlock> {
        self.fonts.iter().find(|block| block.family == family)
    }
}

/// A parsed `pubspec.yaml`.
#[derive(Debug, Clone, PartialEq)]
pub struct PubspecDocument {
    root: Mapping,
    origin: PathBuf,
}

impl PubspecDocument {
    /// Parse manifest text. `origin` is only used in error messages.
    pub fn parse(source: &str, origin: impl Into<PathBuf>) -> Result<Self> {
        let origin = origin.into();
        let value: Value = serde_yaml::from_str(source)
            .map_err(|e| Error::malformed(&origin, e.to_string()))?;

        let root = match value {
            Value::Mapping(root) => root,
            Value::Null => Mapping::new(),
            _ => return Err(Error::malformed(&origin, "top level must be a mapping")),
        };
        Ok(Self { root, origin })
    }

    /// Load the manifest from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingDocument`] when the file does not exist and
    /// [`Error::MalformedDocument`] when it cannot be parsed.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Self::load_with_source(path).map(|(document, _)| document)
    }

    /// Load the manifest together with the text it was parsed from.
    pub fn load_with_source(path: &NormalizedPath) -> Result<(Self, String)> {
        let Some(source) = io::read_text_opt(path)? else {
            return Err(Error::MissingDocument {
                path: path.to_native(),
            });
        };
        let document = Self::parse(&source, path.to_native())?;
        Ok((document, source))
    }

    /// Path the document was read from.
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    /// Top-level mapping.
    pub fn root(&self) -> &Mapping {
        &self.root
    }

    /// Serialize back to YAML text.
    pub fn render(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.root)?)
    }

    /// Write the document atomically.
    pub fn save(&self, path: &NormalizedPath) -> Result<()> {
        let text = self.render()?;
        io::write_text(path, &text)?;
        Ok(())
    }

    /// Look up a value by dotted key, e.g. `flutter.assets`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut segments = key.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = current.as_mapping()?.get(segment)?;
        }
        Some(current)
    }

    /// Set a value by dotted key, creating intermediate mappings.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let origin = &self.origin;
        let mut segments: Vec<&str> = key.split('.').collect();
        let Some(last) = segments.pop() else {
            return Ok(());
        };

        let mut current = &mut self.root;
        for segment in segments {
            let entry = current
                .entry(Value::from(segment))
                .or_insert_with(|| Value::Mapping(Mapping::new()));
            if entry.is_null() {
                *entry = Value::Mapping(Mapping::new());
            }
            current = match entry {
                Value::Mapping(map) => map,
                _ => {
                    return Err(Error::malformed(
                        origin,
                        format!("`{segment}` must be a mapping"),
                    ));
                }
            };
        }
        current.insert(Value::from(last), value);
        Ok(())
    }

    /// Remove a value by dotted key, keeping the order of its siblings.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let (parent, last) = match key.rsplit_once('.') {
            Some((parent, last)) => (Some(parent), last),
            None => (None, key),
        };

        let mut current = &mut self.root;
        if let Some(parent) = parent {
            for segment in parent.split('.') {
                current = current.get_mut(segment)?.as_mapping_mut()?;
            }
        }
        current.shift_remove(last)
    }

    /// Read the reconciliation-owned keys.
    pub fn fragment(&self) -> Result<ManifestFragment> {
        let flutter = match self.root.get(FLUTTER) {
            None | Some(Value::Null) => return Ok(ManifestFragment::default()),
            Some(Value::Mapping(flutter)) => flutter,
            Some(_) => return Err(Error::malformed(&self.origin, "`flutter` must be a mapping")),
        };

        let assets = match flutter.get(ASSETS) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(items)) => items.iter().map(AssetEntry::from_value).collect(),
            Some(_) => {
                return Err(Error::malformed(&self.origin, "`flutter.assets` must be a list"));
            }
        };

        let fonts = match flutter.get(FONTS) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(items)) => items
                .iter()
                .map(|item| FontFamilyBlock::from_value(item, &self.origin))
                .collect::<Result<_>>()?,
            Some(_) => {
                return Err(Error::malformed(&self.origin, "`flutter.fonts` must be a list"));
            }
        };

        Ok(ManifestFragment { assets, fonts })
    }

    /// Write a fragment back into the document.
    pub fn apply(&mut self, fragment: &ManifestFragment) -> Result<()> {
        self.apply_assets(&fragment.assets)?;
        self.apply_fonts(&fragment.fonts)
    }

    /// Replace `flutter.assets`.
    ///
    /// An empty list is only written when the key already exists.
    pub fn apply_assets(&mut self, assets: &[AssetEntry]) -> Result<()> {
        if !assets.is_empty() || self.get(ASSETS_KEY).is_some() {
            let assets = assets.iter().map(AssetEntry::to_value).collect();
            self.set(ASSETS_KEY, Value::Sequence(assets))?;
        }
        Ok(())
    }

    /// Replace `flutter.fonts`. An empty list removes the key.
    pub fn apply_fonts(&mut self, fonts: &[FontFamilyBlock]) -> Result<()> {
        if fonts.is_empty() {
            self.remove(FONTS_KEY);
        } else {
            let fonts = fonts.iter().map(FontFamilyBlock::to_value).collect();
            self.set(FONTS_KEY, Value::Sequence(fonts))?;
        }
        Ok(())
    }
}
