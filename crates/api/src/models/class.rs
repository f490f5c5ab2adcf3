use crate::error::{ModelError, ModelResult};
use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Fully qualified name of `java.lang.Object`, the implicit wildcard bound.
pub const OBJECT: &str = "java.lang.Object";

/// Separator between packages and between package/class.
pub const PACKAGE_SEPARATOR: char = '.';

/// Primitive keywords, including `void`.
pub const PRIMITIVES: &[&str] = &[
    "boolean", "byte", "char", "short", "int", "long", "float", "double", "void",
];

/// Java binary name: dot-separated identifiers, e.g. `java.util.Map$Entry`.
static CLASS_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}_$][\p{L}\p{N}_$]*(\.[\p{L}_$][\p{L}\p{N}_$]*)*$")
        .expect("class name pattern is valid")
});

/// Whether `name` is a well-formed fully qualified class name or keyword.
pub fn is_valid_class_name(name: &str) -> bool {
    CLASS_NAME.is_match(name)
}

/// A resolved class or primitive, identified by its fully qualified name.
///
/// Primitives are identified by their keyword (`int`, `byte`, ...).
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
#[serde(transparent)]
pub struct ClassRef(String);

impl ClassRef {
    /// Unchecked; callers holding untrusted text should use [`ClassRef::try_new`].
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn try_new(name: impl Into<String>) -> ModelResult<Self> {
        let name = name.into();
        if !is_valid_class_name(&name) {
            return Err(ModelError::InvalidClassName(name));
        }
        Ok(Self(name))
    }

    pub fn is_valid(&self) -> bool {
        is_valid_class_name(&self.0)
    }

    pub fn object() -> Self {
        Self(OBJECT.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Last segment of the name, e.g. `ArrayList` for `java.util.ArrayList`.
    pub fn simple_name(&self) -> &str {
        self.0
            .rfind(PACKAGE_SEPARATOR)
            .map(|pos| &self.0[pos + 1..])
            .unwrap_or(&self.0)
    }

    /// Package part of the name, `None` for primitives and the default package.
    pub fn package(&self) -> Option<&str> {
        self.0.rfind(PACKAGE_SEPARATOR).map(|pos| &self.0[..pos])
    }

    pub fn is_primitive(&self) -> bool {
        PRIMITIVES.contains(&self.0.as_str())
    }

    pub fn is_object(&self) -> bool {
        self.0 == OBJECT
    }
}

impl<'de> Deserialize<'de> for ClassRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ClassRef::try_new(String::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ClassRef {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ClassRef {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_parts() {
        let list = ClassRef::new("java.util.ArrayList");
        assert_eq!(list.simple_name(), "ArrayList");
        assert_eq!(list.package(), Some("java.util"));

        let int = ClassRef::new("int");
        assert_eq!(int.simple_name(), "int");
        assert_eq!(int.package(), None);
        assert!(int.is_primitive());
        assert!(!list.is_primitive());
    }

    #[test]
    fn test_try_new_validates_names() {
        for name in ["java.util.Map$Entry", "int", "Widget", "_x.y1"] {
            assert!(ClassRef::try_new(name).is_ok(), "name: {name}");
        }
        for name in ["", "a b", "List<X>", "java..util", ".List", "java.util.", "1abc"] {
            assert_eq!(
                ClassRef::try_new(name),
                Err(ModelError::InvalidClassName(name.to_string()))
            );
            assert!(!ClassRef::new(name).is_valid());
        }
    }

    #[test]
    fn test_deserialize_rejects_invalid_name() {
        let ok: ClassRef = serde_json::from_str(r#""java.lang.String""#).unwrap();
        assert_eq!(ok.name(), "java.lang.String");
        assert!(serde_json::from_str::<ClassRef>(r#""a b""#).is_err());
    }

    #[test]
    fn test_object() {
        assert!(ClassRef::object().is_object());
        assert_eq!(ClassRef::object().simple_name(), "Object");
    }
}
