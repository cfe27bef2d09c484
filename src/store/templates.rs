//! Template persistence over a key-value area

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::area::KeyValueArea;
use super::StoreError;
use crate::document::{new_instance_id, RawDocument, TemplateDocument};

/// Key of the summary index
pub const TEMPLATE_INDEX_KEY: &str = "oeb:templates:index";

/// Name used for templates created without one
pub const DEFAULT_TEMPLATE_NAME: &str = "Untitled Template";

/// Key under which a document is stored
pub fn template_key(id: &str) -> String {
    format!("oeb:template:{}", id)
}

/// Summary of a saved template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateListItem {
    pub id: String,
    pub name: String,
    pub updated_at: DateTime<Utc>,
}

/// Saved templates plus an index of their summaries
#[derive(Debug)]
pub struct TemplateStore<A> {
    area: A,
}

impl<A: KeyValueArea> TemplateStore<A> {
    pub fn new(area: A) -> Self {
        Self { area }
    }

    pub fn area(&self) -> &A {
        &self.area
    }

    pub fn into_inner(self) -> A {
        self.area
    }

    /// Summaries of readable templates, most recently saved first
    pub fn list(&self) -> Result<Vec<TemplateListItem>, StoreError> {
        let mut entries = Vec::new();
        for entry in self.read_index()? {
            if self.read_template(&entry.id)?.is_some() {
                entries.push(entry);
            }
        }
        entries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(entries)
    }

    /// Load a template; missing and malformed documents are both `None`
    pub fn get(&self, id: &str) -> Result<Option<TemplateDocument>, StoreError> {
        self.read_template(id)
    }

    /// Load a template that must exist
    pub fn require(&self, id: &str) -> Result<TemplateDocument, StoreError> {
        self.get(id)?.ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// Create and save an empty template
    pub fn create(&mut self, name: Option<&str>) -> Result<TemplateDocument, StoreError> {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_TEMPLATE_NAME);
        let doc = TemplateDocument::new(new_instance_id(), name);
        self.save(&doc)?;
        Ok(doc)
    }

    /// Save a template, stamping its index entry with the current time
    pub fn save(&mut self, doc: &TemplateDocument) -> Result<(), StoreError> {
        self.save_at(doc, Utc::now())
    }

    /// Save a template with an explicit modification time
    pub fn save_at(
        &mut self,
        doc: &TemplateDocument,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let content = serde_json::to_string(doc)?;
        self.area.set_item(&template_key(&doc.id), &content)?;

        let mut index: Vec<TemplateListItem> = self
            .read_index()?
            .into_iter()
            .filter(|entry| entry.id != doc.id)
            .collect();
        index.push(TemplateListItem {
            id: doc.id.clone(),
            name: doc.name.clone(),
            updated_at,
        });
        self.write_index(&index)?;

        tracing::info!(id = %doc.id, name = %doc.name, "saved template");
        Ok(())
    }

    /// Delete a template and its index entry
    pub fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        self.area.remove_item(&template_key(id))?;
        let index: Vec<TemplateListItem> = self
            .read_index()?
            .into_iter()
            .filter(|entry| entry.id != id)
            .collect();
        self.write_index(&index)?;

        tracing::info!(id, "removed template");
        Ok(())
    }

    fn read_index(&self) -> Result<Vec<TemplateListItem>, StoreError> {
        let entries = match self.read_json(TEMPLATE_INDEX_KEY)? {
            Some(Value::Array(entries)) => entries,
            _ => return Ok(Vec::new()),
        };

        Ok(entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect())
    }

    fn write_index(&mut self, index: &[TemplateListItem]) -> Result<(), StoreError> {
        let content = serde_json::to_string(index)?;
        self.area.set_item(TEMPLATE_INDEX_KEY, &content)
    }

    fn read_template(&self, id: &str) -> Result<Option<TemplateDocument>, StoreError> {
        let Some(value) = self.read_json(&template_key(id))? else {
            return Ok(None);
        };

        match serde_json::from_value::<RawDocument>(value) {
            Ok(raw) if raw.has_instance_list() => Ok(Some(raw.into())),
            _ => {
                tracing::debug!(id, "ignoring malformed template");
                Ok(None)
            }
        }
    }

    /// Read and parse a stored item; unparsable content reads as absent
    fn read_json(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self
            .area
            .get_item(key)?
            .and_then(|content| serde_json::from_str(&content).ok()))
    }
}
