//! Non-fatal diagnostics produced while rendering

use std::fmt;

/// A warning about a structural or schema mismatch in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderWarning {
    pub category: WarningCategory,
    pub message: String,
}

/// Category of render warning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCategory {
    /// Instance has no usable component reference
    MissingComponent,
    /// Override key not declared by the component's settings
    UnknownOverride,
    /// Template placeholder not declared by the component's settings
    UnknownPlaceholder,
}

impl RenderWarning {
    pub fn missing_component(index: usize) -> Self {
        Self {
            category: WarningCategory::MissingComponent,
            message: format!("Instance at index {} is missing componentId.", index),
        }
    }

    pub fn unknown_override(component_id: &str, key: &str) -> Self {
        Self {
            category: WarningCategory::UnknownOverride,
            message: format!(
                "Instance for component \"{}\" has override \"{}\" with no matching setting key.",
                component_id, key
            ),
        }
    }

    pub fn unknown_placeholder(component_id: &str, key: &str) -> Self {
        Self {
            category: WarningCategory::UnknownPlaceholder,
            message: format!(
                "Component \"{}\" contains placeholder \"{{{{{}}}}}\" with no matching setting key.",
                component_id, key
            ),
        }
    }
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningCategory::MissingComponent => write!(f, "missing-component"),
            WarningCategory::UnknownOverride => write!(f, "unknown-override"),
            WarningCategory::UnknownPlaceholder => write!(f, "unknown-placeholder"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            RenderWarning::missing_component(3).to_string(),
            "Instance at index 3 is missing componentId."
        );
        assert_eq!(
            RenderWarning::unknown_override("text", "href").to_string(),
            "Instance for component \"text\" has override \"href\" with no matching setting key."
        );
        assert_eq!(
            RenderWarning::unknown_placeholder("text", "foo").to_string(),
            "Component \"text\" contains placeholder \"{{foo}}\" with no matching setting key."
        );
    }

    #[test]
    fn test_category_display() {
        assert_eq!(WarningCategory::UnknownOverride.to_string(), "unknown-override");
    }
}
