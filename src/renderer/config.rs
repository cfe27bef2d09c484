//! Configuration for HTML rendering

/// Configuration options for HTML output
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to wrap the fragments in a doctype/html/body shell
    pub standalone: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { standalone: true }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is a complete HTML document
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert!(config.standalone);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RenderConfig::new().with_standalone(false);
        assert!(!config.standalone);
    }
}
