//! Tolerant input shape for documents, resolved once into the canonical model
//!
//! Older documents name the instance list `root`, the component reference
//! `componentType` and the overrides `props`, and may nest `children`. Every
//! field other than the document's `id` and `name` is read as untyped JSON so
//! that a stray value never rejects the whole document.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::model::{TemplateDocument, TemplateInstance};
use crate::value::SettingValue;

/// A document as found on disk, in either canonical or legacy shape
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub instances: Option<Value>,
    /// Legacy name for `instances`
    #[serde(default)]
    pub root: Option<Value>,
}

/// A single instance as found on disk
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInstance {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, rename = "componentId")]
    pub component_id: Option<Value>,
    /// Legacy name for `componentId`
    #[serde(default, rename = "componentType")]
    pub component_type: Option<Value>,
    #[serde(default)]
    pub overrides: Option<Value>,
    /// Legacy name for `overrides`
    #[serde(default)]
    pub props: Option<Value>,
    /// Legacy nesting; not rendered
    #[serde(default)]
    pub children: Option<Value>,
}

impl RawDocument {
    /// Whether either the canonical or the legacy instance list is present
    pub fn has_instance_list(&self) -> bool {
        self.instance_list().is_some()
    }

    /// `instances` wins when it is an array, otherwise `root` is used
    fn instance_list(&self) -> Option<&Vec<Value>> {
        self.instances
            .as_ref()
            .and_then(Value::as_array)
            .or_else(|| self.root.as_ref().and_then(Value::as_array))
    }

    /// Instance entries in document order
    ///
    /// Objects and arrays are kept, so instance indices line up with the
    /// stored list; an array carries no fields and reads as an empty
    /// instance. Scalars and nulls are skipped.
    pub fn raw_instances(&self) -> Vec<RawInstance> {
        self.instance_list()
            .map(|list| {
                list.iter()
                    .filter_map(|v| match v {
                        Value::Object(_) => RawInstance::deserialize(v).ok(),
                        Value::Array(_) => Some(RawInstance::default()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl RawInstance {
    /// Resolve field synonyms into a canonical instance
    ///
    /// The canonical field is used when present and not null, otherwise the
    /// legacy one. A non-string component reference becomes the empty
    /// string, which the renderer reports as missing.
    pub fn normalize(self) -> TemplateInstance {
        let id = match self.id {
            Some(Value::String(s)) => s,
            _ => String::new(),
        };

        let component_id = match self.component_id.or(self.component_type) {
            Some(Value::String(s)) => s,
            _ => String::new(),
        };

        let overrides: IndexMap<String, SettingValue> = match self.overrides.or(self.props) {
            Some(Value::Object(map)) => map
                .into_iter()
                .map(|(key, value)| (key, SettingValue::from_json(value)))
                .collect(),
            _ => IndexMap::new(),
        };

        if let Some(Value::Array(children)) = &self.children {
            if !children.is_empty() {
                tracing::debug!(
                    instance = %id,
                    count = children.len(),
                    "dropping nested children of legacy instance"
                );
            }
        }

        TemplateInstance {
            id,
            component_id,
            overrides,
        }
    }
}

impl From<RawDocument> for TemplateDocument {
    fn from(raw: RawDocument) -> Self {
        let instances = raw
            .raw_instances()
            .into_iter()
            .map(RawInstance::normalize)
            .collect();

        TemplateDocument {
            id: raw.id,
            name: raw.name,
            instances,
        }
    }
}
