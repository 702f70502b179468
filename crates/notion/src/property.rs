//! Typed page properties and their wire shapes.

use std::collections::HashMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Number;

/// Property kinds supported by the page builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Title,
    RichText,
    Number,
    Select,
    MultiSelect,
    Url,
    Email,
    Checkbox,
}

impl PropertyKind {
    /// Key wrapping the payload on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::RichText => "rich_text",
            Self::Number => "number",
            Self::Select => "select",
            Self::MultiSelect => "multi_select",
            Self::Url => "url",
            Self::Email => "email",
            Self::Checkbox => "checkbox",
        }
    }
}

impl std::fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a single page property.
///
/// Serializes to a one-key object, e.g. `{"number": 5}` or
/// `{"title": [{"text": {"content": "Report"}}]}`.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Title(String),
    RichText(String),
    Number(Number),
    Select(String),
    /// Option names, sent verbatim (no reordering, no deduplication).
    MultiSelect(Vec<String>),
    Url(String),
    Email(String),
    Checkbox(bool),
}

impl PropertyValue {
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        match self {
            Self::Title(_) => PropertyKind::Title,
            Self::RichText(_) => PropertyKind::RichText,
            Self::Number(_) => PropertyKind::Number,
            Self::Select(_) => PropertyKind::Select,
            Self::MultiSelect(_) => PropertyKind::MultiSelect,
            Self::Url(_) => PropertyKind::Url,
            Self::Email(_) => PropertyKind::Email,
            Self::Checkbox(_) => PropertyKind::Checkbox,
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let key = self.kind().as_str();
        let mut map = serializer.serialize_map(Some(1))?;

        match self {
            Self::Title(content) | Self::RichText(content) => {
                map.serialize_entry(key, &[TextSpan::new(content)])?;
            }
            Self::Number(number) => map.serialize_entry(key, number)?,
            Self::Select(name) => map.serialize_entry(key, &SelectOption { name })?,
            Self::MultiSelect(names) => map.serialize_entry(key, names)?,
            Self::Url(value) | Self::Email(value) => map.serialize_entry(key, value)?,
            Self::Checkbox(checked) => map.serialize_entry(key, checked)?,
        }

        map.end()
    }
}

/// One property declaration as made by a builder call.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDeclaration {
    pub name: String,
    pub value: PropertyValue,
}

impl PropertyDeclaration {
    #[must_use]
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Flattened property mapping, one entry per distinct name.
///
/// Serializes as a JSON object keyed by property name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    entries: Vec<(String, PropertyValue)>,
}

impl Properties {
    /// Flatten an ordered declaration list.
    ///
    /// A later declaration replaces the value of an earlier one with the same
    /// name (last write wins). The entry stays where the name first appeared.
    #[must_use]
    pub fn flatten(declarations: &[PropertyDeclaration]) -> Self {
        let mut entries: Vec<(String, PropertyValue)> = Vec::with_capacity(declarations.len());
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(declarations.len());

        for declaration in declarations {
            match index.get(declaration.name.as_str()) {
                Some(&position) => entries[position].1 = declaration.value.clone(),
                None => {
                    index.insert(declaration.name.as_str(), entries.len());
                    entries.push((declaration.name.clone(), declaration.value.clone()));
                }
            }
        }

        Self { entries }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Property names in wire order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Shared wire fragments
// =============================================================================

/// `{"text": {"content": ...}}`, the rich text element used by titles, text
/// properties and block bodies.
#[derive(Debug, Serialize)]
pub(crate) struct TextSpan<'a> {
    text: TextContent<'a>,
}

impl<'a> TextSpan<'a> {
    pub(crate) const fn new(content: &'a str) -> Self {
        Self {
            text: TextContent { content },
        }
    }
}

#[derive(Debug, Serialize)]
struct TextContent<'a> {
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct SelectOption<'a> {
    name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wire(value: &PropertyValue) -> serde_json::Value {
        serde_json::to_value(value).unwrap()
    }

    #[test]
    fn test_text_kinds_wrap_content() {
        assert_eq!(
            wire(&PropertyValue::Title("Report".to_string())),
            json!({"title": [{"text": {"content": "Report"}}]})
        );
        assert_eq!(
            wire(&PropertyValue::RichText("notes".to_string())),
            json!({"rich_text": [{"text": {"content": "notes"}}]})
        );
    }

    #[test]
    fn test_scalar_kinds() {
        assert_eq!(
            wire(&PropertyValue::Number(Number::from(5))),
            json!({"number": 5})
        );
        assert_eq!(
            wire(&PropertyValue::Number(Number::from_f64(2.5).unwrap())),
            json!({"number": 2.5})
        );
        assert_eq!(
            wire(&PropertyValue::Select("High".to_string())),
            json!({"select": {"name": "High"}})
        );
        assert_eq!(
            wire(&PropertyValue::Url("https://example.com".to_string())),
            json!({"url": "https://example.com"})
        );
        assert_eq!(
            wire(&PropertyValue::Email("a@example.com".to_string())),
            json!({"email": "a@example.com"})
        );
        assert_eq!(
            wire(&PropertyValue::Checkbox(false)),
            json!({"checkbox": false})
        );
    }

    #[test]
    fn test_multi_select_is_verbatim() {
        let value = PropertyValue::MultiSelect(vec![
            "b".to_string(),
            "a".to_string(),
            "b".to_string(),
        ]);
        assert_eq!(wire(&value), json!({"multi_select": ["b", "a", "b"]}));
    }

    #[test]
    fn test_flatten_last_write_wins_keeps_first_position() {
        let declarations = vec![
            PropertyDeclaration::new("Score", PropertyValue::Number(Number::from(1))),
            PropertyDeclaration::new("Done", PropertyValue::Checkbox(true)),
            PropertyDeclaration::new("Score", PropertyValue::Number(Number::from(2))),
        ];

        let properties = Properties::flatten(&declarations);
        assert_eq!(properties.len(), 2);
        assert_eq!(
            properties.get("Score"),
            Some(&PropertyValue::Number(Number::from(2)))
        );
        assert_eq!(properties.names().collect::<Vec<_>>(), vec!["Score", "Done"]);
    }

    #[test]
    fn test_flatten_allows_kind_change_on_redeclare() {
        let declarations = vec![
            PropertyDeclaration::new("Status", PropertyValue::Select("Open".to_string())),
            PropertyDeclaration::new("Status", PropertyValue::RichText("closed".to_string())),
        ];

        let properties = Properties::flatten(&declarations);
        assert_eq!(
            serde_json::to_value(&properties).unwrap(),
            json!({"Status": {"rich_text": [{"text": {"content": "closed"}}]}})
        );
    }

    #[test]
    fn test_flatten_many_redeclarations_keeps_one_entry_per_name() {
        let declarations: Vec<_> = (0..2_000)
            .map(|i| {
                PropertyDeclaration::new(
                    format!("Field {}", i % 50),
                    PropertyValue::Number(Number::from(i)),
                )
            })
            .collect();

        let properties = Properties::flatten(&declarations);
        assert_eq!(properties.len(), 50);
        assert_eq!(properties.names().next(), Some("Field 0"));
        assert_eq!(properties.names().last(), Some("Field 49"));
        assert_eq!(
            properties.get("Field 0"),
            Some(&PropertyValue::Number(Number::from(1_950)))
        );
        assert_eq!(
            properties.get("Field 49"),
            Some(&PropertyValue::Number(Number::from(1_999)))
        );
    }

    #[test]
    fn test_empty_flatten_serializes_to_empty_object() {
        let properties = Properties::flatten(&[]);
        assert!(properties.is_empty());
        assert_eq!(serde_json::to_value(&properties).unwrap(), json!({}));
    }
}
