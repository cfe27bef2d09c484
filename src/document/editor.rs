//! Pure editing operations on documents
//!
//! Every operation returns a new [`TemplateDocument`]; instances are replaced,
//! never mutated in place.

use thiserror::Error;

use super::model::{TemplateDocument, TemplateInstance};
use crate::catalog::{Catalog, ComponentDefinition, Setting};
use crate::value::{SettingKind, SettingValue};

/// Errors that can occur while editing a document
#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    /// No instance with this id in the document
    #[error("instance not found: {id}")]
    InstanceNotFound { id: String },

    /// An instance with this id already exists
    #[error("duplicate instance id: {id}")]
    DuplicateInstance { id: String },

    /// The instance's component is not in the catalog
    #[error("unknown component: {id}")]
    UnknownComponent { id: String },

    /// The component does not declare this setting
    #[error("component {component} has no setting \"{key}\"")]
    UnknownSetting { component: String, key: String },

    /// The value cannot be used for the setting
    #[error("invalid value for {key}: expected {expected}, got \"{value}\"")]
    InvalidValue {
        key: String,
        expected: String,
        value: String,
    },
}

/// Generate a fresh instance or document id
pub fn new_instance_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl TemplateDocument {
    /// Rename the document
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Append a new instance of `definition` with no overrides
    pub fn with_instance(
        &self,
        definition: &ComponentDefinition,
        instance_id: impl Into<String>,
    ) -> Result<Self, EditError> {
        let instance_id = instance_id.into();
        if self.instance(&instance_id).is_some() {
            return Err(EditError::DuplicateInstance { id: instance_id });
        }

        let mut instances = self.instances.clone();
        instances.push(TemplateInstance::new(instance_id, definition.id.clone()));

        Ok(Self {
            instances,
            ..self.clone()
        })
    }

    /// Change one setting of one instance
    ///
    /// Setting a value equal to the effective default removes the override
    /// instead of storing it.
    pub fn with_setting(
        &self,
        catalog: &Catalog,
        instance_id: &str,
        key: &str,
        value: SettingValue,
    ) -> Result<Self, EditError> {
        let index = self
            .instances
            .iter()
            .position(|i| i.id == instance_id)
            .ok_or_else(|| EditError::InstanceNotFound {
                id: instance_id.to_string(),
            })?;

        let instance = &self.instances[index];
        let definition =
            catalog
                .get(&instance.component_id)
                .ok_or_else(|| EditError::UnknownComponent {
                    id: instance.component_id.clone(),
                })?;

        if !definition.has_setting(key) {
            return Err(EditError::UnknownSetting {
                component: definition.id.clone(),
                key: key.to_string(),
            });
        }

        let mut overrides = instance.overrides.clone();
        if definition.effective_default(key) == Some(&value) {
            overrides.shift_remove(key);
        } else {
            overrides.insert(key.to_string(), value);
        }

        let mut instances = self.instances.clone();
        instances[index] = TemplateInstance {
            overrides,
            ..instance.clone()
        };

        Ok(Self {
            instances,
            ..self.clone()
        })
    }
}

impl Setting {
    /// Convert user input into a value of this setting's kind
    pub fn parse_value(&self, input: &str) -> Result<SettingValue, EditError> {
        let invalid = |expected: &str| EditError::InvalidValue {
            key: self.key.clone(),
            expected: expected.to_string(),
            value: input.to_string(),
        };

        match self.kind {
            SettingKind::Number => input
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(SettingValue::Number)
                .ok_or_else(|| invalid("a number")),
            SettingKind::Boolean => match input.trim() {
                "true" => Ok(SettingValue::Boolean(true)),
                "false" => Ok(SettingValue::Boolean(false)),
                _ => Err(invalid("true or false")),
            },
            SettingKind::Select if !self.options.is_empty() => {
                if self.options.iter().any(|o| o.value == input) {
                    Ok(SettingValue::from(input))
                } else {
                    let allowed: Vec<&str> = self.options.iter().map(|o| o.value.as_str()).collect();
                    Err(invalid(&format!("one of {}", allowed.join(", "))))
                }
            }
            _ => Ok(SettingValue::from(input)),
        }
    }
}
