//! Formatter configuration
//!
//! A YAML document that fixes the namespace scope, layout and default
//! toggles for a rendering session:
//!
//! ```yaml
//! namespaces:
//!   current: MyApp
//!   imports:
//!     - namespace: System
//!     - namespace: Foo.Bar
//!       alias: FB
//! render:
//!   indent: "    "
//! members:
//!   include_attributes: false
//! comparison:
//!   policy: security
//!   strict: false
//! ```
//!
//! Every section and key is optional.

use crate::compare::ComparisonPolicy;
use crate::completeness::InterfaceCompletenessAnalyzer;
use crate::error::{Error, Result};
use crate::render::{MemberFormatOptions, NamespaceManager, NamespaceReference, RenderConfig};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FormatterConfig {
    /// Namespace scope of the rendered document
    #[serde(default)]
    pub namespaces: NamespacesConfig,

    /// Layout
    #[serde(default)]
    pub render: RenderConfig,

    /// Default declaration toggles
    #[serde(default)]
    pub members: MemberFormatOptions,

    /// Member comparison settings
    #[serde(default)]
    pub comparison: ComparisonConfig,
}

/// Imported namespaces and the namespace being written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NamespacesConfig {
    #[serde(default)]
    pub current: Option<String>,

    #[serde(default)]
    pub imports: Vec<NamespaceReference>,
}

/// Comparison configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComparisonConfig {
    #[serde(default)]
    pub policy: ComparisonPolicy,

    /// Compare canonical signatures instead of hashes
    #[serde(default)]
    pub strict: bool,
}

impl FormatterConfig {
    /// Parse and validate a configuration document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: FormatterConfig = serde_norway::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FormatterConfig = serde_norway::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_norway::to_string(self)?)
    }

    /// Check namespaces, aliases and layout
    pub fn validate(&self) -> Result<()> {
        if let Some(current) = &self.namespaces.current {
            NamespaceReference::new(current.as_str()).validate()?;
        }

        let mut aliases = HashSet::new();
        for import in &self.namespaces.imports {
            import.validate()?;
            if let Some(alias) = &import.alias {
                if !aliases.insert(alias.as_str()) {
                    return Err(Error::Config(format!("alias '{}' is used more than once", alias)));
                }
            }
        }

        if !self.render.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(Error::Config(format!(
                "indent must be spaces or tabs, got {:?}",
                self.render.indent
            )));
        }
        Ok(())
    }

    pub fn namespace_manager(&self) -> NamespaceManager {
        NamespaceManager::new(
            self.namespaces.imports.iter().cloned(),
            self.namespaces.current.as_deref(),
        )
    }

    pub fn render_config(&self) -> RenderConfig {
        self.render.clone()
    }

    /// Completeness analyzer with this configuration's comparison settings
    /// and namespace scope
    pub fn analyzer(&self) -> InterfaceCompletenessAnalyzer {
        InterfaceCompletenessAnalyzer::new()
            .with_policy(self.comparison.policy)
            .with_strict(self.comparison.strict)
            .with_namespaces(self.namespace_manager())
    }
}
