//! Constant identifier synthesis
//!
//! Every resource file maps to an upper-case constant name derived from its
//! path below the top-level group, e.g. `images/icons/home-icon.png` becomes
//! `ICONS_HOME_ICON_PNG`. Two paths that map to the same name make the run
//! fail with [`Error::IdentifierCollision`]; a constant is never silently
//! replaced by another.

use std::collections::HashMap;

use serde::Serialize;

use crate::family::FontFamily;
use crate::index::ResourceIndex;
use crate::{Error, Result};

/// Group key used for files placed directly in the resource root.
pub const ROOT_GROUP_KEY: &str = "ROOT";

/// Map a string onto the identifier alphabet `[A-Z0-9_]`.
///
/// Every character outside ASCII alphanumerics becomes `_`, the result is
/// upper-cased, and a leading digit gets a `_` prefix.
pub fn sanitize(raw: &str) -> String {
    let mut out: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Identifier for a file given its path relative to the resource root.
///
/// The top-level group segment is dropped; root files keep their full name.
pub fn synthesize_identifier(relative: &str, group: &str) -> String {
    let stripped = if group.is_empty() {
        relative
    } else {
        relative
            .strip_prefix(group)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(relative)
    };
    sanitize(stripped)
}

/// Key under which a group's constants are emitted.
pub fn group_key(group: &str) -> String {
    if group.is_empty() {
        ROOT_GROUP_KEY.to_string()
    } else {
        sanitize(group)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetConstant {
    pub identifier: String,
    /// Project-relative path the constant resolves to
    pub path: String,
}

/// Constants of one top-level group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstantGroup {
    /// Group name as found on disk, empty for the root group
    pub name: String,
    pub key: String,
    pub constants: Vec<AssetConstant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyConstant {
    pub identifier: String,
    pub family: String,
}

/// Everything the generated source exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetModel {
    pub groups: Vec<ConstantGroup>,
    pub families: Vec<FamilyConstant>,
}

impl AssetModel {
    /// All file constants across groups, in group order.
    pub fn constants(&self) -> impl Iterator<Item = &AssetConstant> {
        self.groups.iter().flat_map(|g| g.constants.iter())
    }

    pub fn constant_count(&self) -> usize {
        self.groups.iter().map(|g| g.constants.len()).sum()
    }

    /// Look up a file constant by identifier.
    pub fn lookup(&self, identifier: &str) -> Option<&AssetConstant> {
        self.constants().find(|c| c.identifier == identifier)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.families.is_empty()
    }
}

/// Tracks which source produced each identifier within one namespace.
#[derive(Debug, Default)]
struct Namespace<'a> {
    owners: HashMap<String, &'a str>,
}

impl<'a> Namespace<'a> {
    fn claim(&mut self, identifier: &str, source: &'a str) -> Result<()> {
        match self.owners.get(identifier) {
            Some(first) if *first != source => Err(Error::IdentifierCollision {
                identifier: identifier.to_string(),
                first: first.to_string(),
                second: source.to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                self.owners.insert(identifier.to_string(), source);
                Ok(())
            }
        }
    }
}

/// Name of the aggregate class when none is configured.
pub const DEFAULT_CLASS_NAME: &str = "Assets";

const AGGREGATE_CLASS: &str = "the aggregate class";
const FONTS_CLASS: &str = "the font family class";

/// Build the constant model with the default aggregate class name.
pub fn build_model(index: &ResourceIndex, families: &[FontFamily]) -> Result<AssetModel> {
    build_model_for_class(index, families, DEFAULT_CLASS_NAME)
}

/// Build the constant model for an index and its font families.
///
/// Every class emitted into one library shares a namespace: group classes,
/// `class_name` and `<class_name>Fonts`. A member may not share its class's
/// name either.
///
/// # Errors
///
/// Returns [`Error::IdentifierCollision`] when two files, two groups or two
/// families synthesize the same identifier, or when a name clashes with the
/// class that holds it or with another class.
pub fn build_model_for_class(
    index: &ResourceIndex,
    families: &[FontFamily],
    class_name: &str,
) -> Result<AssetModel> {
    let fonts_class = format!("{class_name}Fonts");

    let mut classes = Namespace::default();
    classes.claim(class_name, AGGREGATE_CLASS)?;
    if !families.is_empty() {
        classes.claim(&fonts_class, FONTS_CLASS)?;
    }

    let mut files = Namespace::default();
    let mut groups = Vec::new();

    for group in index.groups() {
        let key = group_key(group);
        let constants: Vec<AssetConstant> = index
            .files_in(group)
            .map(|file| -> Result<AssetConstant> {
                let identifier = synthesize_identifier(&file.relative, &file.group);
                if identifier == key || identifier == class_name {
                    return Err(Error::IdentifierCollision {
                        second: file.path.clone(),
                        first: if identifier == key {
                            group_dir(index, group)
                        } else {
                            AGGREGATE_CLASS.to_string()
                        },
                        identifier,
                    });
                }
                files.claim(&identifier, &file.path)?;
                Ok(AssetConstant {
                    identifier,
                    path: file.path.clone(),
                })
            })
            .collect::<Result<_>>()?;

        if constants.is_empty() {
            continue;
        }

        classes.claim(&key, group)?;
        groups.push(ConstantGroup {
            name: group.clone(),
            key,
            constants,
        });
    }

    let mut family_ids = Namespace::default();
    let families: Vec<FamilyConstant> = families
        .iter()
        .map(|family| -> Result<FamilyConstant> {
            let identifier = sanitize(&family.name);
            if identifier == fonts_class {
                return Err(Error::IdentifierCollision {
                    identifier,
                    first: FONTS_CLASS.to_string(),
                    second: family.name.clone(),
                });
            }
            family_ids.claim(&identifier, &family.name)?;
            Ok(FamilyConstant {
                identifier,
                family: family.name.clone(),
            })
        })
        .collect::<Result<_>>()?;

    let model = AssetModel { groups, families };
    tracing::debug!(
        "Synthesized {} constants in {} groups, {} families",
        model.constant_count(),
        model.groups.len(),
        model.families.len()
    );
    Ok(model)
}

/// Directory form of a group, e.g. `resources/images/`.
fn group_dir(index: &ResourceIndex, group: &str) -> String {
    let root = index.resource_dir().trim_end_matches('/');
    if group.is_empty() {
        format!("{root}/")
    } else {
        format!("{root}/{group}/")
    }
}
