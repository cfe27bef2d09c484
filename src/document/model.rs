//! Canonical document types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::legacy::RawDocument;
use crate::value::SettingValue;

/// One placed component within a document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInstance {
    /// Unique within the document, never reused
    pub id: String,
    /// Catalog id; may name a component the catalog no longer has
    pub component_id: String,
    /// Values that differ from the component's effective defaults
    pub overrides: IndexMap<String, SettingValue>,
}

impl TemplateInstance {
    pub fn new(id: impl Into<String>, component_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component_id: component_id.into(),
            overrides: IndexMap::new(),
        }
    }

    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    /// The component reference, if it is usable
    ///
    /// Blank references are treated the same as missing ones.
    pub fn component_ref(&self) -> Option<&str> {
        if self.component_id.trim().is_empty() {
            None
        } else {
            Some(&self.component_id)
        }
    }
}

/// A user-edited email template: an ordered list of component instances
///
/// Deserialization accepts both the canonical and the legacy field names
/// (see [`RawDocument`]); serialization always writes the canonical shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDocument")]
pub struct TemplateDocument {
    pub id: String,
    pub name: String,
    /// Render and display order
    pub instances: Vec<TemplateInstance>,
}

impl TemplateDocument {
    /// Create an empty document
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            instances: Vec::new(),
        }
    }

    /// Parse a document from JSON, normalizing legacy field names
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Serialize the canonical shape as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn instance(&self, id: &str) -> Option<&TemplateInstance> {
        self.instances.iter().find(|i| i.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
