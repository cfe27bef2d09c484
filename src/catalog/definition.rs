//! Component definitions and their settings schema

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::{SettingKind, SettingValue};

/// One choice offered by a `select` setting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingOption {
    pub label: String,
    pub value: String,
}

/// A single entry in a component's settings schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    /// Key referenced by `{{key}}` placeholders and instance overrides
    pub key: String,
    /// Display label
    pub label: String,
    #[serde(rename = "type")]
    pub kind: SettingKind,
    #[serde(default, rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<SettingValue>,
    /// Allowed values for `select` settings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SettingOption>,
}

impl Setting {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: SettingKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            default_value: None,
            options: Vec::new(),
        }
    }

    pub fn with_default(mut self, value: impl Into<SettingValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_option(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(SettingOption {
            label: label.into(),
            value: value.into(),
        });
        self
    }
}

/// A placeable block type: an HTML template plus the settings that fill it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    /// Stable identifier, unique within a catalog
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// HTML fragment with `{{key}}` placeholders
    pub template: String,
    /// Ordered settings schema
    #[serde(default)]
    pub settings: Vec<Setting>,
    /// Baseline values, taking precedence over each setting's own default
    #[serde(default)]
    pub defaults: IndexMap<String, SettingValue>,
}

impl ComponentDefinition {
    pub fn new(id: impl Into<String>, template: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            description: String::new(),
            template: template.into(),
            settings: Vec::new(),
            defaults: IndexMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_setting(mut self, setting: Setting) -> Self {
        self.settings.push(setting);
        self
    }

    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    /// Get the schema entry for a key
    pub fn setting(&self, key: &str) -> Option<&Setting> {
        self.settings.iter().find(|s| s.key == key)
    }

    /// Check if the schema declares a key
    pub fn has_setting(&self, key: &str) -> bool {
        self.setting(key).is_some()
    }

    /// Lookup table from setting key to its schema entry
    pub fn setting_map(&self) -> HashMap<&str, &Setting> {
        self.settings.iter().map(|s| (s.key.as_str(), s)).collect()
    }

    /// Compute the effective defaults for this component
    ///
    /// Every entry of `defaults` is kept (even keys the schema does not
    /// declare); schema keys missing from `defaults` fall back to the
    /// setting's own default when it has one.
    pub fn effective_defaults(&self) -> IndexMap<String, SettingValue> {
        let mut output = self.defaults.clone();
        for setting in &self.settings {
            if output.contains_key(&setting.key) {
                continue;
            }
            if let Some(value) = &setting.default_value {
                output.insert(setting.key.clone(), value.clone());
            }
        }
        output
    }

    /// The effective default for a single key, if any
    pub fn effective_default(&self, key: &str) -> Option<&SettingValue> {
        self.defaults
            .get(key)
            .or_else(|| self.setting(key).and_then(|s| s.default_value.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading() -> ComponentDefinition {
        ComponentDefinition::new("heading", "<h1 style=\"color: {{color}}\">{{title}}</h1>")
            .with_setting(Setting::new("title", "Title", SettingKind::Text).with_default("Welcome"))
            .with_setting(Setting::new("color", "Color", SettingKind::Color).with_default("#000000"))
            .with_setting(Setting::new("level", "Level", SettingKind::Number))
            .with_default("color", "#333333")
    }

    #[test]
    fn test_defaults_map_wins_over_setting_default() {
        let def = heading();
        let defaults = def.effective_defaults();
        assert_eq!(defaults.get("color"), Some(&SettingValue::from("#333333")));
        assert_eq!(def.effective_default("color"), Some(&SettingValue::from("#333333")));
    }

    #[test]
    fn test_setting_default_fills_gaps() {
        let def = heading();
        assert_eq!(
            def.effective_defaults().get("title"),
            Some(&SettingValue::from("Welcome"))
        );
        assert_eq!(def.effective_default("title"), Some(&SettingValue::from("Welcome")));
    }

    #[test]
    fn test_missing_default_is_absent() {
        let def = heading();
        assert!(!def.effective_defaults().contains_key("level"));
        assert_eq!(def.effective_default("level"), None);
    }

    #[test]
    fn test_defaults_keep_undeclared_keys() {
        let def = heading().with_default("legacy", "x");
        assert!(def.effective_defaults().contains_key("legacy"));
        assert!(!def.has_setting("legacy"));
    }

    #[test]
    fn test_setting_map() {
        let def = heading();
        let map = def.setting_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map["color"].kind, SettingKind::Color);
    }
}
