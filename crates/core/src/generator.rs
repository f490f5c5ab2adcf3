//! Canonical text form of a [`TypeExpr`].
//!
//! Classes are written by alias when the registry has one, arguments are
//! separated by `", "`, and a wildcard bounded by `java.lang.Object` only is
//! written as a bare `?`.

use crate::registry::NameRegistry;
use typex_api::{ClassRef, ModelResult, ReflectType, TypeExpr, WildcardBound};

pub struct TypeGenerator<'a> {
    registry: &'a NameRegistry,
}

pub fn generate(ty: &TypeExpr, registry: &NameRegistry) -> String {
    TypeGenerator::new(registry).generate(ty)
}

/// Generate from a host-side type. Fails when the host type cannot be
/// represented (owner types, non-class raw types).
pub fn generate_reflect(ty: &dyn ReflectType, registry: &NameRegistry) -> ModelResult<String> {
    TypeGenerator::new(registry).generate_reflect(ty)
}

impl<'a> TypeGenerator<'a> {
    pub fn new(registry: &'a NameRegistry) -> Self {
        Self { registry }
    }

    pub fn generate(&self, ty: &TypeExpr) -> String {
        let mut out = String::new();
        self.write_type(&mut out, ty);
        out
    }

    pub fn generate_reflect(&self, ty: &dyn ReflectType) -> ModelResult<String> {
        let ty = TypeExpr::from_reflect(ty)?;
        Ok(self.generate(&ty))
    }

    fn write_type(&self, out: &mut String, ty: &TypeExpr) {
        match ty {
            TypeExpr::Class(class) => self.write_class(out, class),
            TypeExpr::Array(array) => {
                self.write_type(out, array.component());
                out.push_str("[]");
            }
            TypeExpr::Parameterized(parameterized) => {
                self.write_class(out, parameterized.raw());
                out.push('<');
                for (i, arg) in parameterized.args().iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.write_type(out, arg);
                }
                out.push('>');
            }
            TypeExpr::Wildcard(wildcard) => match wildcard.bound() {
                WildcardBound::Unbounded => out.push('?'),
                WildcardBound::Extends(bound) => {
                    out.push_str("? extends ");
                    self.write_type(out, bound);
                }
                WildcardBound::Super(bound) => {
                    out.push_str("? super ");
                    self.write_type(out, bound);
                }
            },
        }
    }

    fn write_class(&self, out: &mut String, class: &ClassRef) {
        out.push_str(self.registry.alias_of(class.name()).unwrap_or(class.name()));
    }
}
