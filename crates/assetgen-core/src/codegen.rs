//! Dart source generation from an [`AssetModel`]

use crate::ident::{AssetModel, DEFAULT_CLASS_NAME};

/// First line of every generated file.
pub const GENERATED_MARKER: &str = "// GENERATED CODE - DO NOT MODIFY BY HAND";

/// Whether `content` was produced by this generator.
pub fn is_generated(content: &str) -> bool {
    content.lines().next() == Some(GENERATED_MARKER)
}

/// Renders the asset model as a Dart library.
#[derive(Debug, Clone)]
pub struct DartRenderer {
    class_name: String,
}

impl Default for DartRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_CLASS_NAME)
    }
}

impl DartRenderer {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn render(&self, model: &AssetModel) -> String {
        let mut out = String::new();

        out.push_str(GENERATED_MARKER);
        out.push('\n');
        out.push_str("// Generated by assetgen\n");
        out.push_str("//\n");
        out.push_str(&format!(
            "// {} in {}, {}\n",
            plural(model.constant_count(), "asset"),
            plural(model.groups.len(), "group"),
            plural(model.families.len(), "font family"),
        ));
        for group in &model.groups {
            out.push_str(&format!("//   {}: {}\n", group.key, group.constants.len()));
        }
        out.push_str("\n// ignore_for_file: camel_case_types, constant_identifier_names\n");

        for group in &model.groups {
            out.push('\n');
            open_class(&mut out, &group.key);
            for constant in &group.constants {
                out.push_str(&format!(
                    "  static const String {} = '{}';\n",
                    constant.identifier,
                    escape(&constant.path)
                ));
            }
            out.push_str("}\n");
        }

        out.push('\n');
        open_class(&mut out, &self.class_name);
        for constant in model.constants() {
            out.push_str(&format!(
                "  static const String {} = '{}';\n",
                constant.identifier,
                escape(&constant.path)
            ));
        }
        if model.constant_count() == 0 {
            out.push_str("  static const List<String> values = [];\n");
        } else {
            out.push_str("\n  static const List<String> values = [\n");
            for constant in model.constants() {
                out.push_str(&format!("    {},\n", constant.identifier));
            }
            out.push_str("  ];\n");
        }
        out.push_str("}\n");

        if !model.families.is_empty() {
            out.push('\n');
            open_class(&mut out, &format!("{}Fonts", self.class_name));
            for family in &model.families {
                out.push_str(&format!(
                    "  static const String {} = '{}';\n",
                    family.identifier,
                    escape(&family.family)
                ));
            }
            out.push_str("}\n");
        }

        out
    }
}

fn open_class(out: &mut String, name: &str) {
    out.push_str(&format!("class {name} {{\n"));
    out.push_str(&format!("  {name}._();\n\n"));
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else if let Some(stem) = noun.strip_suffix('y') {
        format!("{count} {stem}ies")
    } else {
        format!("{count} {noun}s")
    }
}

/// Escape a value for a single-quoted Dart string literal.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '$' => out.push_str("\\$"),
            c => out.push(c),
        }
    }
    out
}
