//! The component catalog: an immutable, ordered set of definitions

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use super::builtin::BUILTIN_CATALOG;
use super::definition::ComponentDefinition;
use crate::error::CatalogError;

/// Closed set of component definitions known at render time
///
/// Order is significant: it is the display order of any component picker.
#[derive(Debug, Clone)]
pub struct Catalog {
    components: Vec<ComponentDefinition>,
    index: HashMap<String, usize>,
}

/// TOML structure for deserializing catalogs
#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    components: Vec<ComponentDefinition>,
}

impl Catalog {
    /// Build a catalog from definitions, validating ids and setting keys
    pub fn new(components: Vec<ComponentDefinition>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(components.len());

        for (position, def) in components.iter().enumerate() {
            if def.id.trim().is_empty() {
                return Err(CatalogError::EmptyComponentId { position });
            }
            if index.insert(def.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateComponent { id: def.id.clone() });
            }

            let mut keys = HashSet::new();
            for setting in &def.settings {
                if !keys.insert(setting.key.as_str()) {
                    return Err(CatalogError::DuplicateSetting {
                        component: def.id.clone(),
                        key: setting.key.clone(),
                    });
                }
            }
        }

        Ok(Self { components, index })
    }

    /// The built-in text, button, divider and image components
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// All definitions, in display order
    pub fn list(&self) -> &[ComponentDefinition] {
        &self.components
    }

    /// Get a definition by id
    ///
    /// A missing id is an expected condition (a component type that was
    /// removed while documents still reference it), not an error.
    pub fn get(&self, id: &str) -> Option<&ComponentDefinition> {
        self.index.get(id).map(|&i| &self.components[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Component ids, in display order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|c| c.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl FromStr for Catalog {
    type Err = CatalogError;

    /// Parse a catalog from TOML source
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let parsed: TomlCatalog = toml::from_str(content)?;
        Self::new(parsed.components)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        BUILTIN_CATALOG
            .parse()
            .expect("Built-in catalog should be valid TOML")
    }
}
