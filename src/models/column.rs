//! Column specification tree
//!
//! A `ColumnSpec` describes one header column. Columns nest: a node with
//! children is a grouping header spanning its descendants, a node without
//! children is a leaf occupying one physical grid column. The tree is
//! caller-owned and never mutated by the layout engine; all computed state
//! lives in the engine's output cells.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// One node of the hierarchical column specification
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ColumnSpec {
    /// Display text for the header cell
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Field correlation key; also the display fallback when label is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Accessibility abbreviation text (rendered as the abbr attribute)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbr: Option<String>,

    /// Nested sub-columns; empty marks a leaf.
    /// A `children` field that is present but not a usable sequence
    /// degrades silently to "no children".
    #[serde(
        default,
        deserialize_with = "lenient_children",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<ColumnSpec>,

    /// Arbitrary extension fields, passed through verbatim to the output
    /// cell for consumer-defined template substitution
    #[serde(flatten)]
    pub extensions: HashMap<String, serde_json::Value>,
}

impl ColumnSpec {
    /// Create a leaf column with the given key
    pub fn leaf(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::default()
        }
    }

    /// Create a grouping column with the given key and children
    pub fn group(key: impl Into<String>, children: Vec<ColumnSpec>) -> Self {
        Self {
            key: Some(key.into()),
            children,
            ..Self::default()
        }
    }

    /// Set the display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the accessibility abbreviation
    pub fn with_abbr(mut self, abbr: impl Into<String>) -> Self {
        self.abbr = Some(abbr.into());
        self
    }

    /// Attach an extension field
    pub fn with_extension(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.extensions.insert(name.into(), value);
        self
    }

    /// Whether this node is a leaf (no non-empty children sequence)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Interpret a JSON value as a column sequence, degrading anything
/// unusable (missing, null, scalar, non-object array elements) to an
/// empty or shortened sequence instead of failing.
pub fn columns_from_value(value: serde_json::Value) -> Vec<ColumnSpec> {
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Deserialize `children` leniently: anything other than an array of
/// column objects becomes an empty sequence, which the engine treats
/// as a leaf.
fn lenient_children<'de, D>(deserializer: D) -> Result<Vec<ColumnSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(columns_from_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nested_columns() {
        let json = r#"{"key": "name", "children": [{"key": "first"}, {"key": "last"}]}"#;
        let spec: ColumnSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.key, Some("name".to_string()));
        assert_eq!(spec.children.len(), 2);
        assert!(spec.children[0].is_leaf());
    }

    #[test]
    fn test_children_not_an_array_degrades_to_leaf() {
        let json = r#"{"key": "id", "children": "oops"}"#;
        let spec: ColumnSpec = serde_json::from_str(json).unwrap();
        assert!(spec.is_leaf(), "non-array children must degrade to a leaf");
    }

    #[test]
    fn test_children_null_degrades_to_leaf() {
        let json = r#"{"key": "id", "children": null}"#;
        let spec: ColumnSpec = serde_json::from_str(json).unwrap();
        assert!(spec.is_leaf());
    }

    #[test]
    fn test_extension_fields_are_captured() {
        let json = r#"{"key": "price", "formatter": "currency", "width": 120}"#;
        let spec: ColumnSpec = serde_json::from_str(json).unwrap();
        assert_eq!(
            spec.extensions.get("formatter"),
            Some(&serde_json::json!("currency"))
        );
        assert_eq!(spec.extensions.get("width"), Some(&serde_json::json!(120)));
    }

    #[test]
    fn test_builder_helpers() {
        let spec = ColumnSpec::group("name", vec![ColumnSpec::leaf("first")])
            .with_label("Name")
            .with_abbr("Nm");
        assert_eq!(spec.label, Some("Name".to_string()));
        assert_eq!(spec.abbr, Some("Nm".to_string()));
        assert!(!spec.is_leaf());
    }
}
