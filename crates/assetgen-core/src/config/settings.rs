//! Raw settings as written in `assetgen.toml`

use serde::{Deserialize, Serialize};

/// One layer of configuration.
///
/// Every field is optional so a layer only mentions what it changes. The
/// same type carries caller overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Resource root relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_dir: Option<String>,

    /// Manifest path relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubspec: Option<String>,

    /// Generated source path relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Fonts directory relative to the resource root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_extensions: Option<Vec<String>>,

    /// Name of the aggregate class in the generated source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_hidden: Option<bool>,

    /// Reconcile `flutter.fonts`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<bool>,

    /// Write the generated source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codegen: Option<bool>,
}

impl Settings {
    /// Overlay `other` on top of `self`.
    pub fn merge(&mut self, other: &Settings) {
        fn overlay<T: Clone>(base: &mut Option<T>, over: &Option<T>) {
            if over.is_some() {
                base.clone_from(over);
            }
        }

        overlay(&mut self.resource_dir, &other.resource_dir);
        overlay(&mut self.pubspec, &other.pubspec);
        overlay(&mut self.output, &other.output);
        overlay(&mut self.fonts_dir, &other.fonts_dir);
        overlay(&mut self.font_extensions, &other.font_extensions);
        overlay(&mut self.class_name, &other.class_name);
        overlay(&mut self.include_hidden, &other.include_hidden);
        overlay(&mut self.fonts, &other.fonts);
        overlay(&mut self.codegen, &other.codegen);
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_merge_prefers_later_layer() {
        let mut base = Settings {
            resource_dir: Some("assets".into()),
            fonts: Some(true),
            ..Settings::default()
        };
        let over = Settings {
            fonts: Some(false),
            class_name: Some("R".into()),
            ..Settings::default()
        };

        base.merge(&over);

        assert_eq!(base.resource_dir.as_deref(), Some("assets"));
        assert_eq!(base.fonts, Some(false));
        assert_eq!(base.class_name.as_deref(), Some("R"));
    }

    #[test]
    fn test_serializes_only_set_fields() {
        let settings = Settings {
            output: Some("lib/r.dart".into()),
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"output":"lib/r.dart"}"#);
        assert!(Settings::default().is_empty());
    }
}
