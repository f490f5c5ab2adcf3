use crate::error::TypeResult;
use crate::generator::TypeGenerator;
use crate::parser;
use crate::registry::NameRegistry;
use dashmap::DashMap;
use std::sync::Arc;
use typex_api::{ModelResult, ReflectType, TypeExpr};

/// Runtime options for [`TypeCodec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Remember parse results (failures included) per input string
    pub memoize: bool,
    /// Upper bound on remembered inputs; once reached, new inputs are parsed
    /// but not stored
    pub cache_capacity: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            memoize: true,
            cache_capacity: 4096,
        }
    }
}

/// Parser and generator bound to one registry. Safe to share across threads.
pub struct TypeCodec {
    registry: Arc<NameRegistry>,
    config: CodecConfig,
    cache: DashMap<String, TypeResult<TypeExpr>>,
}

impl TypeCodec {
    pub fn new(registry: Arc<NameRegistry>) -> Self {
        Self::with_config(registry, CodecConfig::default())
    }

    pub fn with_config(registry: Arc<NameRegistry>, config: CodecConfig) -> Self {
        Self {
            registry,
            config,
            cache: DashMap::new(),
        }
    }

    /// Codec over [`NameRegistry::java_defaults`].
    pub fn java_defaults() -> Self {
        Self::new(Arc::new(NameRegistry::java_defaults()))
    }

    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn parse(&self, input: &str) -> TypeResult<TypeExpr> {
        if !self.config.memoize {
            return self.parse_uncached(input);
        }
        if let Some(hit) = self.cache.get(input) {
            tracing::trace!("Parse cache hit for '{}'", input);
            return hit.value().clone();
        }

        let result = self.parse_uncached(input);
        if self.cache.len() < self.config.cache_capacity {
            self.cache.insert(input.to_string(), result.clone());
        }
        result
    }

    fn parse_uncached(&self, input: &str) -> TypeResult<TypeExpr> {
        let result = parser::parse(input, &self.registry);
        if let Err(e) = &result {
            tracing::debug!("Failed to parse type '{}': {}", input, e);
        }
        result
    }

    pub fn generate(&self, ty: &TypeExpr) -> String {
        TypeGenerator::new(&self.registry).generate(ty)
    }

    pub fn generate_reflect(&self, ty: &dyn ReflectType) -> ModelResult<String> {
        TypeGenerator::new(&self.registry).generate_reflect(ty)
    }

    /// Parse and regenerate, yielding the canonical spelling of `input`.
    pub fn normalize(&self, input: &str) -> TypeResult<String> {
        self.parse(input).map(|ty| self.generate(&ty))
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TypeError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_is_memoized() {
        let codec = TypeCodec::java_defaults();
        let first = codec.parse("List<String>").unwrap();
        let second = codec.parse("List<String>").unwrap();
        assert_eq!(first, second);
        assert_eq!(codec.cache_len(), 1);
    }

    #[test]
    fn test_failures_are_memoized() {
        let codec = TypeCodec::java_defaults();
        let err = codec.parse("List<Missing>").unwrap_err();
        assert_eq!(err, TypeError::ClassNotFound("Missing".to_string()));
        assert_eq!(codec.parse("List<Missing>").unwrap_err(), err);
        assert_eq!(codec.cache_len(), 1);
    }

    #[test]
    fn test_capacity_limits_cache() {
        let config = CodecConfig {
            memoize: true,
            cache_capacity: 2,
        };
        let codec = TypeCodec::with_config(Arc::new(NameRegistry::java_defaults()), config);
        for input in ["String", "Integer", "Long", "Short"] {
            codec.parse(input).unwrap();
        }
        assert_eq!(codec.cache_len(), 2);
        assert_eq!(codec.parse("Short").unwrap(), TypeExpr::class("java.lang.Short"));

        codec.clear_cache();
        assert_eq!(codec.cache_len(), 0);
    }

    #[test]
    fn test_memoize_disabled() {
        let config = CodecConfig {
            memoize: false,
            ..CodecConfig::default()
        };
        let codec = TypeCodec::with_config(Arc::new(NameRegistry::java_defaults()), config);
        codec.parse("String").unwrap();
        assert_eq!(codec.cache_len(), 0);
    }

    #[test]
    fn test_normalize() {
        let codec = TypeCodec::java_defaults();
        assert_eq!(
            codec
                .normalize("java.util.Map< java.lang.String ,List<? extends java.lang.Object>>")
                .unwrap(),
            "Map<String, List<?>>"
        );
    }

    #[test]
    fn test_generate_reflect() {
        let codec = TypeCodec::java_defaults();
        let ty = codec.parse("List<int[]>").unwrap();
        assert_eq!(codec.generate_reflect(&ty).unwrap(), "List<int[]>");
    }
}
