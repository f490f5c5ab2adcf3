//! Reflective type shapes.
//!
//! These traits mirror the interface hierarchy a host reflection API exposes
//! for generic types (`Class`, `ParameterizedType`, `GenericArrayType`,
//! `WildcardType`). Consumers that only understand that shape receive
//! [`TypeExpr`] values through these traits, and values built by such
//! consumers are converted back with [`TypeExpr::from_reflect`].

use crate::error::{ModelError, ModelResult};
use crate::models::{ArrayType, ClassRef, ParameterizedType, TypeExpr, WildcardType};
use std::fmt::Debug;

/// Root of the reflective hierarchy.
pub trait ReflectType: Debug + Send + Sync {
    fn shape(&self) -> TypeShape<'_>;

    /// Platform type name, e.g. `java.util.List<java.lang.String>`.
    fn type_name(&self) -> String {
        match self.shape() {
            TypeShape::Class(c) => match c.component_type() {
                Some(component) => format!("{}[]", component.type_name()),
                None => c.class_name().to_string(),
            },
            TypeShape::Parameterized(p) => {
                let args = p
                    .actual_type_arguments()
                    .iter()
                    .map(|a| a.type_name())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}<{}>", p.raw_type().type_name(), args)
            }
            TypeShape::GenericArray(a) => format!("{}[]", a.generic_component_type().type_name()),
            TypeShape::Wildcard(w) => {
                let lower = w.lower_bounds();
                if !lower.is_empty() {
                    return format!("? super {}", join_bounds(&lower));
                }
                let upper = w.upper_bounds();
                if upper.iter().any(|b| b.type_name() != crate::models::OBJECT) {
                    return format!("? extends {}", join_bounds(&upper));
                }
                "?".to_string()
            }
        }
    }
}

fn join_bounds(bounds: &[&dyn ReflectType]) -> String {
    bounds
        .iter()
        .map(|b| b.type_name())
        .collect::<Vec<_>>()
        .join(" & ")
}

/// Borrowed view of a reflective type as one of the four shapes.
#[derive(Clone, Copy)]
pub enum TypeShape<'a> {
    Class(&'a dyn ReflectClass),
    Parameterized(&'a dyn ReflectParameterized),
    GenericArray(&'a dyn ReflectArray),
    Wildcard(&'a dyn ReflectWildcard),
}

/// A plain class. Array classes (such as `byte[]`) report their component.
pub trait ReflectClass {
    fn class_name(&self) -> &str;

    fn component_type(&self) -> Option<&dyn ReflectType> {
        None
    }
}

pub trait ReflectParameterized {
    fn raw_type(&self) -> &dyn ReflectType;
    fn actual_type_arguments(&self) -> Vec<&dyn ReflectType>;

    fn owner_type(&self) -> Option<&dyn ReflectType> {
        None
    }
}

pub trait ReflectArray {
    fn generic_component_type(&self) -> &dyn ReflectType;
}

pub trait ReflectWildcard {
    fn upper_bounds(&self) -> Vec<&dyn ReflectType>;
    fn lower_bounds(&self) -> Vec<&dyn ReflectType>;
}

/// Equality contract shared by every implementation of the reflective shapes.
///
/// Parameterized types compare owner, raw type and ordered arguments; generic
/// arrays compare components; wildcards compare bound sets.
pub fn structurally_equal(a: &dyn ReflectType, b: &dyn ReflectType) -> bool {
    match (a.shape(), b.shape()) {
        (TypeShape::Class(x), TypeShape::Class(y)) => {
            x.class_name() == y.class_name()
                && option_equal(x.component_type(), y.component_type())
        }
        (TypeShape::Parameterized(x), TypeShape::Parameterized(y)) => {
            let (xs, ys) = (x.actual_type_arguments(), y.actual_type_arguments());
            option_equal(x.owner_type(), y.owner_type())
                && structurally_equal(x.raw_type(), y.raw_type())
                && xs.len() == ys.len()
                && xs.iter().zip(&ys).all(|(l, r)| structurally_equal(*l, *r))
        }
        (TypeShape::GenericArray(x), TypeShape::GenericArray(y)) => {
            structurally_equal(x.generic_component_type(), y.generic_component_type())
        }
        (TypeShape::Wildcard(x), TypeShape::Wildcard(y)) => {
            set_equal(&x.upper_bounds(), &y.upper_bounds())
                && set_equal(&x.lower_bounds(), &y.lower_bounds())
        }
        _ => false,
    }
}

fn option_equal(a: Option<&dyn ReflectType>, b: Option<&dyn ReflectType>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => structurally_equal(a, b),
        _ => false,
    }
}

fn set_equal(a: &[&dyn ReflectType], b: &[&dyn ReflectType]) -> bool {
    a.iter().all(|x| contains(b, *x)) && b.iter().all(|y| contains(a, *y))
}

fn contains(set: &[&dyn ReflectType], item: &dyn ReflectType) -> bool {
    set.iter().any(|candidate| structurally_equal(*candidate, item))
}

impl TypeExpr {
    /// Build a value from any implementation of the reflective shapes.
    pub fn from_reflect(ty: &dyn ReflectType) -> ModelResult<TypeExpr> {
        match ty.shape() {
            TypeShape::Class(c) => match c.component_type() {
                Some(component) => Ok(TypeExpr::array_of(TypeExpr::from_reflect(component)?)),
                None => Ok(TypeExpr::class(c.class_name())),
            },
            TypeShape::Parameterized(p) => {
                if p.owner_type().is_some() {
                    return Err(ModelError::OwnerTypeUnsupported(ty.type_name()));
                }
                let raw = match TypeExpr::from_reflect(p.raw_type())? {
                    TypeExpr::Class(raw) => raw,
                    other => return Err(ModelError::RawTypeNotClass(other.to_string())),
                };
                let args = p
                    .actual_type_arguments()
                    .into_iter()
                    .map(TypeExpr::from_reflect)
                    .collect::<ModelResult<Vec<_>>>()?;
                TypeExpr::parameterized(raw, args)
            }
            TypeShape::GenericArray(a) => Ok(TypeExpr::array_of(TypeExpr::from_reflect(
                a.generic_component_type(),
            )?)),
            TypeShape::Wildcard(w) => {
                let upper = w
                    .upper_bounds()
                    .into_iter()
                    .map(TypeExpr::from_reflect)
                    .collect::<ModelResult<Vec<_>>>()?;
                let lower = w
                    .lower_bounds()
                    .into_iter()
                    .map(TypeExpr::from_reflect)
                    .collect::<ModelResult<Vec<_>>>()?;
                WildcardType::new(upper, lower).map(TypeExpr::Wildcard)
            }
        }
    }
}

impl ReflectType for TypeExpr {
    fn shape(&self) -> TypeShape<'_> {
        match self {
            TypeExpr::Class(c) => TypeShape::Class(c),
            TypeExpr::Array(a) => TypeShape::GenericArray(a),
            TypeExpr::Parameterized(p) => TypeShape::Parameterized(p),
            TypeExpr::Wildcard(w) => TypeShape::Wildcard(w),
        }
    }
}

impl ReflectType for ClassRef {
    fn shape(&self) -> TypeShape<'_> {
        TypeShape::Class(self)
    }
}

impl ReflectClass for ClassRef {
    fn class_name(&self) -> &str {
        self.name()
    }
}

impl ReflectArray for ArrayType {
    fn generic_component_type(&self) -> &dyn ReflectType {
        self.component()
    }
}

impl ReflectParameterized for ParameterizedType {
    fn raw_type(&self) -> &dyn ReflectType {
        self.raw()
    }

    fn actual_type_arguments(&self) -> Vec<&dyn ReflectType> {
        self.args().iter().map(|a| a as &dyn ReflectType).collect()
    }
}

impl ReflectWildcard for WildcardType {
    fn upper_bounds(&self) -> Vec<&dyn ReflectType> {
        WildcardType::upper_bounds(self)
            .iter()
            .map(|b| b as &dyn ReflectType)
            .collect()
    }

    fn lower_bounds(&self) -> Vec<&dyn ReflectType> {
        WildcardType::lower_bounds(self)
            .iter()
            .map(|b| b as &dyn ReflectType)
            .collect()
    }
}
