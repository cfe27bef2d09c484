//! Document to HTML rendering

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::catalog::{Catalog, ComponentDefinition, Setting};
use crate::document::{TemplateDocument, TemplateInstance};
use crate::value::SettingValue;

use super::config::RenderConfig;
use super::placeholder::{escape_html, placeholder_keys, substitute};
use super::warning::RenderWarning;

/// Result of rendering a document
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    pub html: String,
    /// Diagnostics in discovery order
    pub warnings: Vec<RenderWarning>,
}

impl RenderOutput {
    /// Warning messages as plain strings
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.message.clone()).collect()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Render a document to a standalone HTML page
///
/// Rendering never fails: problems are reported as warnings and the affected
/// instances contribute no output.
pub fn render(document: &TemplateDocument, catalog: &Catalog) -> RenderOutput {
    render_with_config(document, catalog, &RenderConfig::default())
}

/// Render a document with custom configuration
pub fn render_with_config(
    document: &TemplateDocument,
    catalog: &Catalog,
    config: &RenderConfig,
) -> RenderOutput {
    let mut warnings = Vec::new();
    let mut body = String::new();

    for (index, instance) in document.instances.iter().enumerate() {
        if let Some(fragment) = render_instance(index, instance, catalog, &mut warnings) {
            body.push_str(&fragment);
        }
    }

    let html = if config.standalone {
        format!("<!doctype html><html><body>{}</body></html>", body)
    } else {
        body
    };

    RenderOutput { html, warnings }
}

/// Render a single instance, recording warnings in discovery order
fn render_instance(
    index: usize,
    instance: &TemplateInstance,
    catalog: &Catalog,
    warnings: &mut Vec<RenderWarning>,
) -> Option<String> {
    let Some(component_id) = instance.component_ref() else {
        warnings.push(RenderWarning::missing_component(index));
        return None;
    };

    let Some(definition) = catalog.get(component_id) else {
        tracing::debug!(
            index,
            component = component_id,
            "skipping instance of unknown component"
        );
        return None;
    };

    let settings = definition.setting_map();

    for key in instance.overrides.keys() {
        if !settings.contains_key(key.as_str()) {
            warnings.push(RenderWarning::unknown_override(component_id, key));
        }
    }

    let mut values = definition.effective_defaults();
    for (key, value) in &instance.overrides {
        values.insert(key.clone(), value.clone());
    }

    Some(fill_template(definition, component_id, &settings, &values, warnings))
}

fn fill_template(
    definition: &ComponentDefinition,
    component_id: &str,
    settings: &HashMap<&str, &Setting>,
    values: &IndexMap<String, SettingValue>,
    warnings: &mut Vec<RenderWarning>,
) -> String {
    for key in placeholder_keys(&definition.template) {
        if !settings.contains_key(key) {
            warnings.push(RenderWarning::unknown_placeholder(component_id, key));
        }
    }

    substitute(&definition.template, |key| {
        let value = match values.get(key) {
            Some(value) if !value.is_null() => value,
            _ => return String::new(),
        };

        let text = value.to_string();
        match settings.get(key) {
            Some(setting) if setting.kind.escapes() => escape_html(&text),
            _ => text,
        }
    })
    .into_owned()
}
