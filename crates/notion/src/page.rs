//! Page draft accumulation and the create-page payload.

use serde::Serialize;
use serde_json::{Number, Value};

use crate::property::{Properties, PropertyDeclaration, PropertyValue};

/// Property name used by [`PageRequestBuilder::title`].
pub const TITLE_PROPERTY: &str = "Name";

/// Accumulates property declarations and child blocks for one page.
///
/// Setters never fail and never validate: names are not checked against the
/// target database, and a repeated name is resolved when the draft is built
/// (last write wins, see [`Properties::flatten`]). The draft is consumed by
/// [`PageRequestBuilder::build`]; clone it first to submit the same content
/// twice. Every submission creates a new page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRequestBuilder {
    declarations: Vec<PropertyDeclaration>,
    children: Vec<Value>,
}

impl PageRequestBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, name: impl Into<String>, value: PropertyValue) -> &mut Self {
        self.declarations.push(PropertyDeclaration::new(name, value));
        self
    }

    /// Set the page title under the `Name` property.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.push(TITLE_PROPERTY, PropertyValue::Title(title.into()))
    }

    /// Set the page title for a database whose title column is not `Name`.
    pub fn title_as(&mut self, name: impl Into<String>, title: impl Into<String>) -> &mut Self {
        self.push(name, PropertyValue::Title(title.into()))
    }

    pub fn text(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.push(name, PropertyValue::RichText(value.into()))
    }

    /// Set a number property. Floats go through [`Number::from_f64`].
    pub fn number(&mut self, name: impl Into<String>, value: impl Into<Number>) -> &mut Self {
        self.push(name, PropertyValue::Number(value.into()))
    }

    pub fn select(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.push(name, PropertyValue::Select(value.into()))
    }

    pub fn multi_select<I, S>(&mut self, name: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.push(name, PropertyValue::MultiSelect(values))
    }

    pub fn url(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.push(name, PropertyValue::Url(value.into()))
    }

    pub fn email(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.push(name, PropertyValue::Email(value.into()))
    }

    pub fn checkbox(&mut self, name: impl Into<String>, value: bool) -> &mut Self {
        self.push(name, PropertyValue::Checkbox(value))
    }

    /// Append one child block, passed through untouched.
    pub fn child(&mut self, block: Value) -> &mut Self {
        self.children.push(block);
        self
    }

    pub fn children(&mut self, blocks: impl IntoIterator<Item = Value>) -> &mut Self {
        self.children.extend(blocks);
        self
    }

    /// Declarations in call order, duplicates included.
    #[must_use]
    pub fn declarations(&self) -> &[PropertyDeclaration] {
        &self.declarations
    }

    #[must_use]
    pub fn child_blocks(&self) -> &[Value] {
        &self.children
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.children.is_empty()
    }

    /// Consume the draft into the payload for `database_id`.
    #[must_use]
    pub fn build(self, database_id: impl Into<String>) -> PageRequest {
        PageRequest {
            parent: Parent {
                database_id: database_id.into(),
            },
            properties: Properties::flatten(&self.declarations),
            children: self.children,
        }
    }
}

/// Body of a create-page request.
///
/// ```json
/// {"parent": {"database_id": "..."}, "properties": {...}, "children": [...]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRequest {
    parent: Parent,
    properties: Properties,
    children: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Parent {
    database_id: String,
}

impl PageRequest {
    #[must_use]
    pub fn database_id(&self) -> &str {
        &self.parent.database_id
    }

    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }

    #[must_use]
    pub fn children(&self) -> &[Value] {
        &self.children
    }

    /// The request body as a JSON value.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
