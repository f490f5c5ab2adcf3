//! Bidirectional mapping between class names and their short aliases.
//!
//! Parsing resolves a dotted name as a fully qualified name and an undotted
//! name through the alias table only. Generation prints the canonical alias of
//! a class when it has one and its fully qualified name otherwise.

mod builtin;
pub mod config;

pub use config::{ClassConfig, RegistryConfig};

use crate::error::{RegistryError, TypeError, TypeResult};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use typex_api::{ClassRef, PACKAGE_SEPARATOR, is_valid_class_name};

static ALIAS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}_$][\p{L}\p{N}_$]*$").expect("alias pattern is valid"));

/// A registered class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassEntry {
    /// Fully qualified name
    pub name: String,
    /// Canonical alias used when generating
    pub alias: Option<String>,
    /// Additional aliases accepted when parsing
    pub aliases: Vec<String>,
    pub collection: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    classes: IndexMap<String, ClassEntry>,
    /// alias -> fully qualified name
    aliases: HashMap<String, String>,
}

impl NameRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Primitives plus the common `java.lang`, `java.util`, `java.math` and
    /// `java.time` classes under their simple names.
    pub fn java_defaults() -> Self {
        builtin::java_defaults()
    }

    pub fn builder() -> NameRegistryBuilder {
        NameRegistryBuilder::default()
    }

    /// Resolve a name as written in a type expression.
    pub fn resolve(&self, name: &str) -> TypeResult<ClassRef> {
        let fqn = if name.contains(PACKAGE_SEPARATOR) {
            self.classes.get(name).map(|entry| entry.name.as_str())
        } else {
            self.aliases.get(name).map(String::as_str)
        };
        fqn.map(ClassRef::new)
            .ok_or_else(|| TypeError::ClassNotFound(name.to_string()))
    }

    /// Canonical alias of a fully qualified name.
    pub fn alias_of(&self, fqn: &str) -> Option<&str> {
        self.classes.get(fqn)?.alias.as_deref()
    }

    pub fn contains(&self, fqn: &str) -> bool {
        self.classes.contains_key(fqn)
    }

    pub fn entry(&self, fqn: &str) -> Option<&ClassEntry> {
        self.classes.get(fqn)
    }

    /// Whether the class named by an alias or fully qualified name is
    /// flagged as a collection. Array names are never registered, so they
    /// are never collections here.
    pub fn is_collection(&self, name: &str) -> bool {
        let fqn = self.aliases.get(name).map(String::as_str).unwrap_or(name);
        self.classes.get(fqn).is_some_and(|entry| entry.collection)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &ClassEntry> {
        self.classes.values()
    }

    /// Add a class or merge into an existing registration. The first alias a
    /// class receives stays canonical; later ones are accepted for parsing.
    fn insert(
        &mut self,
        name: &str,
        alias: Option<&str>,
        collection: bool,
    ) -> Result<(), RegistryError> {
        if !is_valid_class_name(name) {
            return Err(RegistryError::InvalidClassName(name.to_string()));
        }
        // A name without a package is only reachable through an alias
        let alias = alias.or_else(|| (!name.contains(PACKAGE_SEPARATOR)).then_some(name));

        if let Some(alias) = alias {
            self.bind_alias(name, alias)?;
        }

        let entry = self
            .classes
            .entry(name.to_string())
            .or_insert_with(|| ClassEntry {
                name: name.to_string(),
                alias: None,
                aliases: Vec::new(),
                collection: false,
            });
        entry.collection |= collection;
        if let Some(alias) = alias {
            if entry.alias.is_none() {
                entry.alias = Some(alias.to_string());
            } else if entry.alias.as_deref() != Some(alias) && !entry.aliases.iter().any(|a| a == alias)
            {
                entry.aliases.push(alias.to_string());
            }
        }
        Ok(())
    }

    fn add_alias(&mut self, name: &str, alias: &str) -> Result<(), RegistryError> {
        if !self.classes.contains_key(name) {
            return Err(RegistryError::UnknownClass(name.to_string()));
        }
        self.insert(name, Some(alias), false)
    }

    fn bind_alias(&mut self, name: &str, alias: &str) -> Result<(), RegistryError> {
        if !ALIAS.is_match(alias) {
            return Err(RegistryError::InvalidAlias(alias.to_string()));
        }
        match self.aliases.get(alias) {
            Some(existing) if existing != name => Err(RegistryError::DuplicateAlias {
                alias: alias.to_string(),
                existing: existing.clone(),
            }),
            Some(_) => Ok(()),
            None => {
                self.aliases.insert(alias.to_string(), name.to_string());
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone)]
enum Registration {
    Class {
        name: String,
        alias: Option<String>,
        collection: bool,
    },
    Alias {
        name: String,
        alias: String,
    },
    Registry(NameRegistry),
}

/// Collects registrations; validation happens in [`NameRegistryBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct NameRegistryBuilder {
    registrations: Vec<Registration>,
}

impl NameRegistryBuilder {
    /// Register a class without an alias. It is written by its fully
    /// qualified name.
    pub fn class(self, fqn: impl Into<String>) -> Self {
        self.entry(fqn, None, false)
    }

    /// Register a class under its simple name.
    pub fn simple(self, fqn: impl Into<String>) -> Self {
        let fqn = fqn.into();
        let alias = ClassRef::new(fqn.as_str()).simple_name().to_string();
        self.entry(fqn, Some(alias), false)
    }

    /// Register a class under an explicit alias.
    pub fn named(self, fqn: impl Into<String>, alias: impl Into<String>) -> Self {
        self.entry(fqn, Some(alias.into()), false)
    }

    /// Register a collection class under its simple name.
    pub fn collection(self, fqn: impl Into<String>) -> Self {
        let fqn = fqn.into();
        let alias = ClassRef::new(fqn.as_str()).simple_name().to_string();
        self.entry(fqn, Some(alias), true)
    }

    pub fn entry(
        mut self,
        fqn: impl Into<String>,
        alias: Option<String>,
        collection: bool,
    ) -> Self {
        self.registrations.push(Registration::Class {
            name: fqn.into(),
            alias,
            collection,
        });
        self
    }

    /// Additional alias for an already registered class.
    pub fn alias(mut self, fqn: impl Into<String>, alias: impl Into<String>) -> Self {
        self.registrations.push(Registration::Alias {
            name: fqn.into(),
            alias: alias.into(),
        });
        self
    }

    /// Include every class and alias of another registry.
    pub fn extend(mut self, other: &NameRegistry) -> Self {
        self.registrations.push(Registration::Registry(other.clone()));
        self
    }

    pub fn build(self) -> Result<NameRegistry, RegistryError> {
        let mut registry = NameRegistry::empty();
        for registration in self.registrations {
            match registration {
                Registration::Class {
                    name,
                    alias,
                    collection,
                } => registry.insert(&name, alias.as_deref(), collection)?,
                Registration::Alias { name, alias } => registry.add_alias(&name, &alias)?,
                Registration::Registry(other) => {
                    for entry in other.entries() {
                        registry.insert(&entry.name, entry.alias.as_deref(), entry.collection)?;
                        for alias in &entry.aliases {
                            registry.add_alias(&entry.name, alias)?;
                        }
                    }
                }
            }
        }
        Ok(registry)
    }
}
