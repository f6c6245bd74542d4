//! Font family grouping
//!
//! A font file's family is the part of its file stem before the first
//! separator (`-`, `_` or space). Grouping is exact and case-sensitive:
//! `Roboto-Regular.ttf` and `roboto-bold.ttf` belong to different families.

use std::collections::{BTreeMap, BTreeSet};

use assetgen_fs::NormalizedPath;
use serde::Serialize;

/// Separators that end a family name, in the order they are considered.
pub const FAMILY_SEPARATORS: [char; 3] = ['-', '_', ' '];

/// Derive the family name from a file stem.
///
/// ```
/// use assetgen_core::family::family_name;
///
/// assert_eq!(family_name("Roboto-Regular"), "Roboto");
/// assert_eq!(family_name("Roboto_Bold"), "Roboto");
/// assert_eq!(family_name("NotoSans"), "NotoSans");
/// ```
pub fn family_name(stem: &str) -> &str {
    match stem.find(&FAMILY_SEPARATORS[..]) {
        // A leading separator would leave an empty name
        Some(0) | None => stem,
        Some(idx) => &stem[..idx],
    }
}

/// Family of a font file path, from its file stem.
pub fn family_of(path: &str) -> Option<&str> {
    let name = path.trim_end_matches('/').rsplit('/').next()?;
    let stem = match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    };
    if stem.is_empty() {
        return None;
    }
    Some(family_name(stem))
}

/// Font files sharing a derived family name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontFamily {
    pub name: String,
    /// Project-relative asset paths, sorted ascending
    pub assets: Vec<String>,
}

impl FontFamily {
    pub fn contains(&self, path: &str) -> bool {
        self.assets.binary_search_by(|a| a.as_str().cmp(path)).is_ok()
    }
}

/// Group font file paths into families.
///
/// Families are ordered by name and each family's assets are sorted, so the
/// result does not depend on input order.
pub fn group_families<I, S>(paths: I) -> Vec<FontFamily>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut families: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for path in paths {
        let path = NormalizedPath::new(path.as_ref()).clean_relative();
        let Some(name) = family_of(path.as_str()) else {
            continue;
        };
        families
            .entry(name.to_string())
            .or_default()
            .insert(path.into_string());
    }

    families
        .into_iter()
        .map(|(name, assets)| FontFamily {
            name,
            assets: assets.into_iter().collect(),
        })
        .collect()
}
