//! JSON registry configuration.
//!
//! ```json
//! {
//!   "include_defaults": true,
//!   "classes": [
//!     { "name": "com.acme.Widget" },
//!     { "name": "com.acme.WidgetList", "alias": "Widgets", "collection": true },
//!     { "name": "com.acme.Gadget", "aliases": ["Gizmo"] }
//!   ]
//! }
//! ```

use super::NameRegistry;
use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use typex_api::ClassRef;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Start from [`NameRegistry::java_defaults`]
    pub include_defaults: bool,
    pub classes: Vec<ClassConfig>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_defaults: true,
            classes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassConfig {
    pub name: String,
    /// Canonical alias; defaults to the simple name
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub collection: bool,
}

impl RegistryConfig {
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn build(&self) -> Result<NameRegistry, RegistryError> {
        let mut builder = NameRegistry::builder();
        if self.include_defaults {
            builder = builder.extend(&NameRegistry::java_defaults());
        }
        for class in &self.classes {
            let alias = class
                .alias
                .clone()
                .unwrap_or_else(|| ClassRef::new(class.name.as_str()).simple_name().to_string());
            builder = builder.entry(class.name.as_str(), Some(alias), class.collection);
            for extra in &class.aliases {
                builder = builder.alias(class.name.as_str(), extra.as_str());
            }
        }
        let registry = builder.build()?;
        tracing::info!(
            "Loaded name registry with {} classes ({} configured)",
            registry.len(),
            self.classes.len()
        );
        Ok(registry)
    }
}

impl NameRegistry {
    /// Load a registry from a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        tracing::debug!("Reading name registry from {}", path.display());
        RegistryConfig::from_path(path)?.build()
    }
}
