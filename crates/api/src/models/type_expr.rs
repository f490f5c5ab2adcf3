use super::class::ClassRef;
use crate::error::{ModelError, ModelResult};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Structural description of a generic Java type.
///
/// Values are immutable and compare structurally: parameterized types by raw
/// type and ordered arguments, arrays by component, wildcards by their bound
/// sets.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
#[serde(tag = "kind", content = "data")]
pub enum TypeExpr {
    /// Resolved class or primitive (e.g. `java.lang.String`, `int`)
    Class(ClassRef),

    /// Array of any component type (e.g. `String[]`, `List<String>[]`)
    Array(ArrayType),

    /// Generic instantiation (e.g. `List<String>`)
    Parameterized(ParameterizedType),

    /// Wildcard type argument (e.g. `? extends Number`)
    Wildcard(WildcardType),
}

impl TypeExpr {
    pub fn class(name: impl Into<String>) -> Self {
        TypeExpr::Class(ClassRef::new(name))
    }

    pub fn object() -> Self {
        TypeExpr::Class(ClassRef::object())
    }

    pub fn array_of(component: TypeExpr) -> Self {
        TypeExpr::Array(ArrayType::new(component))
    }

    pub fn parameterized(raw: ClassRef, args: Vec<TypeExpr>) -> ModelResult<Self> {
        ParameterizedType::new(raw, args).map(TypeExpr::Parameterized)
    }

    pub fn as_class(&self) -> Option<&ClassRef> {
        match self {
            TypeExpr::Class(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_object(&self) -> bool {
        self.as_class().is_some_and(ClassRef::is_object)
    }

    /// Number of array dimensions wrapped around the innermost component.
    pub fn array_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let TypeExpr::Array(array) = current {
            depth += 1;
            current = array.component();
        }
        depth
    }

    /// Whether this value can be written as text and read back unchanged.
    ///
    /// Wildcards are only allowed as type arguments or at the top level, and
    /// carry at most one bound on each side. Every class name must be a valid
    /// fully qualified name.
    pub fn is_well_formed(&self) -> bool {
        self.check_well_formed(true)
    }

    fn check_well_formed(&self, wildcard_allowed: bool) -> bool {
        match self {
            TypeExpr::Class(class) => class.is_valid(),
            TypeExpr::Array(array) => array.component().check_well_formed(false),
            TypeExpr::Parameterized(p) => {
                p.raw().is_valid() && p.args().iter().all(|arg| arg.check_well_formed(true))
            }
            TypeExpr::Wildcard(w) => {
                wildcard_allowed
                    && w.upper_bounds().len() == 1
                    && w.lower_bounds().len() <= 1
                    && w
                        .upper_bounds()
                        .iter()
                        .chain(w.lower_bounds())
                        .all(|bound| bound.check_well_formed(false))
            }
        }
    }
}

impl fmt::Display for TypeExpr {
    /// Platform type name: fully qualified classes, `", "` between arguments.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Class(c) => write!(f, "{}", c),
            TypeExpr::Array(array) => write!(f, "{}[]", array.component()),
            TypeExpr::Parameterized(p) => {
                write!(f, "{}<", p.raw())?;
                for (i, arg) in p.args().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
            TypeExpr::Wildcard(w) => {
                f.write_str("?")?;
                let (keyword, bounds): (&str, Vec<&TypeExpr>) = if !w.lower_bounds().is_empty() {
                    (" super ", w.lower_bounds().iter().collect())
                } else if w.upper_bounds().iter().any(|b| !b.is_object()) {
                    (" extends ", w.upper_bounds().iter().collect())
                } else {
                    return Ok(());
                };
                f.write_str(keyword)?;
                for (i, bound) in bounds.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" & ")?;
                    }
                    write!(f, "{}", bound)?;
                }
                Ok(())
            }
        }
    }
}

impl From<ClassRef> for TypeExpr {
    fn from(c: ClassRef) -> Self {
        TypeExpr::Class(c)
    }
}

impl From<ArrayType> for TypeExpr {
    fn from(a: ArrayType) -> Self {
        TypeExpr::Array(a)
    }
}

impl From<ParameterizedType> for TypeExpr {
    fn from(p: ParameterizedType) -> Self {
        TypeExpr::Parameterized(p)
    }
}

impl From<WildcardType> for TypeExpr {
    fn from(w: WildcardType) -> Self {
        TypeExpr::Wildcard(w)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
pub struct ArrayType {
    component: Box<TypeExpr>,
}

impl ArrayType {
    pub fn new(component: TypeExpr) -> Self {
        Self {
            component: Box::new(component),
        }
    }

    pub fn component(&self) -> &TypeExpr {
        &self.component
    }
}

/// A raw class applied to one or more type arguments. Owner types are never
/// modelled.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
pub struct ParameterizedType {
    raw: ClassRef,
    args: Vec<TypeExpr>,
}

impl ParameterizedType {
    pub fn new(raw: ClassRef, args: Vec<TypeExpr>) -> ModelResult<Self> {
        if args.is_empty() {
            return Err(ModelError::EmptyArguments {
                raw: raw.name().to_string(),
            });
        }
        Ok(Self { raw, args })
    }

    pub fn raw(&self) -> &ClassRef {
        &self.raw
    }

    pub fn args(&self) -> &[TypeExpr] {
        &self.args
    }
}

#[derive(Deserialize)]
struct ParameterizedParts {
    raw: ClassRef,
    args: Vec<TypeExpr>,
}

impl<'de> Deserialize<'de> for ParameterizedType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parts = ParameterizedParts::deserialize(deserializer)?;
        ParameterizedType::new(parts.raw, parts.args).map_err(serde::de::Error::custom)
    }
}

/// Wildcard with upper and lower bound sets.
///
/// The upper set is never empty: an unbounded `?` has upper bound
/// `{java.lang.Object}`, and `? super X` keeps `{java.lang.Object}` as its
/// upper bound next to the lower bound `{X}`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
pub struct WildcardType {
    upper: BTreeSet<TypeExpr>,
    lower: BTreeSet<TypeExpr>,
}

/// Which side of a wildcard carries its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WildcardBound<'a> {
    Unbounded,
    Extends(&'a TypeExpr),
    Super(&'a TypeExpr),
}

impl WildcardType {
    pub fn new(
        upper: impl IntoIterator<Item = TypeExpr>,
        lower: impl IntoIterator<Item = TypeExpr>,
    ) -> ModelResult<Self> {
        let mut upper: BTreeSet<TypeExpr> = upper.into_iter().collect();
        let lower: BTreeSet<TypeExpr> = lower.into_iter().collect();
        if upper.is_empty() {
            upper.insert(TypeExpr::object());
        }
        if let (Some(u), Some(l)) = (upper.iter().find(|b| !b.is_object()), lower.first()) {
            return Err(ModelError::ConflictingBounds {
                upper: u.to_string(),
                lower: l.to_string(),
            });
        }
        Ok(Self { upper, lower })
    }

    /// `?`
    pub fn unbounded() -> Self {
        Self {
            upper: BTreeSet::from([TypeExpr::object()]),
            lower: BTreeSet::new(),
        }
    }

    /// `? extends bound`
    pub fn extends(bound: TypeExpr) -> Self {
        Self {
            upper: BTreeSet::from([bound]),
            lower: BTreeSet::new(),
        }
    }

    /// `? super bound`
    pub fn super_of(bound: TypeExpr) -> Self {
        Self {
            upper: BTreeSet::from([TypeExpr::object()]),
            lower: BTreeSet::from([bound]),
        }
    }

    pub fn upper_bounds(&self) -> &BTreeSet<TypeExpr> {
        &self.upper
    }

    pub fn lower_bounds(&self) -> &BTreeSet<TypeExpr> {
        &self.lower
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self.bound(), WildcardBound::Unbounded)
    }

    pub fn bound(&self) -> WildcardBound<'_> {
        if let Some(lower) = self.lower.first() {
            return WildcardBound::Super(lower);
        }
        match self.upper.iter().find(|b| !b.is_object()) {
            Some(upper) => WildcardBound::Extends(upper),
            None => WildcardBound::Unbounded,
        }
    }
}

#[derive(Deserialize)]
struct WildcardParts {
    #[serde(default)]
    upper: Vec<TypeExpr>,
    #[serde(default)]
    lower: Vec<TypeExpr>,
}

impl<'de> Deserialize<'de> for WildcardType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parts = WildcardParts::deserialize(deserializer)?;
        WildcardType::new(parts.upper, parts.lower).map_err(serde::de::Error::custom)
    }
}
