//! Embedding type expressions as strings in serde documents.
//!
//! Deserialization needs the codec's registry, so it goes through a
//! [`DeserializeSeed`] rather than a plain `Deserialize` impl.

use crate::codec::TypeCodec;
use serde::de::{self, DeserializeSeed, Deserializer, Visitor};
use serde::{Serialize, Serializer};
use std::fmt;
use typex_api::TypeExpr;

/// Deserializes a string field into a [`TypeExpr`].
#[derive(Clone, Copy)]
pub struct TypeExprSeed<'a> {
    codec: &'a TypeCodec,
}

impl<'de> DeserializeSeed<'de> for TypeExprSeed<'_> {
    type Value = TypeExpr;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<TypeExpr, D::Error> {
        deserializer.deserialize_str(self)
    }
}

impl<'de> Visitor<'de> for TypeExprSeed<'_> {
    type Value = TypeExpr;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a generic type expression")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TypeExpr, E> {
        self.codec.parse(v).map_err(E::custom)
    }
}

/// Serializes a [`TypeExpr`] as its canonical string.
pub struct Canonical<'a> {
    codec: &'a TypeCodec,
    ty: &'a TypeExpr,
}

impl Serialize for Canonical<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.codec.generate(self.ty))
    }
}

impl TypeCodec {
    pub fn seed(&self) -> TypeExprSeed<'_> {
        TypeExprSeed { codec: self }
    }

    pub fn canonical<'a>(&'a self, ty: &'a TypeExpr) -> Canonical<'a> {
        Canonical { codec: self, ty }
    }
}
