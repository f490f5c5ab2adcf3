//! Conversion between JVM class-file descriptors and type expressions.
//!
//! Descriptors carry erased types only, so conversion into [`TypeExpr`] never
//! produces parameterized types or wildcards, and [`DescriptorConverter::erase`]
//! drops type arguments on the way back.

use crate::error::DescriptorError;
use ristretto_classfile::{BaseType, FieldType};
use typex_api::{ClassRef, OBJECT, TypeExpr, WildcardBound};

/// Array dimensions allowed in a descriptor by the class-file format.
pub const MAX_ARRAY_DIMENSIONS: usize = 255;

/// Parameter and return types of a method descriptor. `void` returns are
/// represented as the `void` class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub params: Vec<TypeExpr>,
    pub ret: TypeExpr,
}

pub struct DescriptorConverter;

impl DescriptorConverter {
    pub fn convert_field(ty: &FieldType) -> TypeExpr {
        match ty {
            FieldType::Base(base) => TypeExpr::class(base_name(base)),
            FieldType::Object(name) => TypeExpr::class(name.replace('/', ".")),
            FieldType::Array(component) => TypeExpr::array_of(Self::convert_field(component)),
        }
    }

    /// Parse a single field descriptor such as `[Ljava/lang/String;`.
    pub fn convert_field_descriptor(descriptor: &str) -> Result<TypeExpr, DescriptorError> {
        let malformed = |reason: String| DescriptorError::MalformedField {
            descriptor: descriptor.to_string(),
            reason,
        };
        check_dimensions(descriptor).map_err(malformed)?;
        let field_type = FieldType::parse(descriptor).map_err(|e| malformed(e.to_string()))?;
        if field_type.descriptor() != descriptor {
            return Err(malformed("trailing characters".to_string()));
        }
        Ok(Self::convert_field(&field_type))
    }

    pub fn convert_method(descriptor: &str) -> Result<MethodSignature, DescriptorError> {
        let malformed = |reason: String| DescriptorError::Malformed {
            descriptor: descriptor.to_string(),
            reason,
        };
        check_dimensions(descriptor).map_err(malformed)?;
        let (params, ret) =
            FieldType::parse_method_descriptor(descriptor).map_err(|e| malformed(e.to_string()))?;

        Ok(MethodSignature {
            params: params.iter().map(Self::convert_field).collect(),
            ret: match ret {
                None => TypeExpr::class("void"),
                Some(field_type) => Self::convert_field(&field_type),
            },
        })
    }

    /// Erased field type. `None` for `void`.
    pub fn erase(ty: &TypeExpr) -> Option<FieldType> {
        match ty {
            TypeExpr::Class(class) => erase_class(class),
            TypeExpr::Array(array) => {
                Self::erase(array.component()).map(|c| FieldType::Array(Box::new(c)))
            }
            TypeExpr::Parameterized(parameterized) => erase_class(parameterized.raw()),
            TypeExpr::Wildcard(wildcard) => match wildcard.bound() {
                WildcardBound::Extends(bound) => Self::erase(bound),
                _ => Some(FieldType::Object(OBJECT.replace('.', "/"))),
            },
        }
    }

    /// Descriptor string for a field type, e.g. `[Ljava/lang/String;`.
    pub fn descriptor(ty: &FieldType) -> String {
        ty.descriptor()
    }

    /// Descriptor of the erasure of `ty`, `V` for `void`.
    pub fn erased_descriptor(ty: &TypeExpr) -> String {
        Self::erase(ty).map_or_else(|| "V".to_string(), |f| f.descriptor())
    }
}

fn check_dimensions(descriptor: &str) -> Result<(), String> {
    let mut run = 0;
    for c in descriptor.chars() {
        if c == '[' {
            run += 1;
            if run > MAX_ARRAY_DIMENSIONS {
                return Err(format!("more than {MAX_ARRAY_DIMENSIONS} array dimensions"));
            }
        } else {
            run = 0;
        }
    }
    Ok(())
}

fn base_name(base: &BaseType) -> &'static str {
    match base {
        BaseType::Byte => "byte",
        BaseType::Char => "char",
        BaseType::Double => "double",
        BaseType::Float => "float",
        BaseType::Int => "int",
        BaseType::Long => "long",
        BaseType::Short => "short",
        BaseType::Boolean => "boolean",
    }
}

fn erase_class(class: &ClassRef) -> Option<FieldType> {
    let base = match class.name() {
        "void" => return None,
        "byte" => BaseType::Byte,
        "char" => BaseType::Char,
        "double" => BaseType::Double,
        "float" => BaseType::Float,
        "int" => BaseType::Int,
        "long" => BaseType::Long,
        "short" => BaseType::Short,
        "boolean" => BaseType::Boolean,
        name => return Some(FieldType::Object(name.replace('.', "/"))),
    };
    Some(FieldType::Base(base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::TypeCodec;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_convert_method() {
        let codec = TypeCodec::java_defaults();
        let sig =
            DescriptorConverter::convert_method("(I[Ljava/lang/String;J)Ljava/util/List;").unwrap();

        let params: Vec<_> = sig.params.iter().map(|p| codec.generate(p)).collect();
        assert_eq!(params, vec!["int", "String[]", "long"]);
        assert_eq!(codec.generate(&sig.ret), "List");
    }

    #[test]
    fn test_convert_void_method() {
        let sig = DescriptorConverter::convert_method("()V").unwrap();
        assert!(sig.params.is_empty());
        assert_eq!(sig.ret, TypeExpr::class("void"));
    }

    #[test]
    fn test_malformed_descriptor() {
        let err = DescriptorConverter::convert_method("(I").unwrap_err();
        assert!(err.to_string().starts_with("Malformed method descriptor '(I'"));
    }

    #[test]
    fn test_erase_drops_arguments() {
        let codec = TypeCodec::java_defaults();
        let ty = codec.parse("Map<String, List<? extends Number>>[]").unwrap();
        let erased = DescriptorConverter::erase(&ty).unwrap();
        assert_eq!(DescriptorConverter::descriptor(&erased), "[Ljava/util/Map;");
    }

    #[test]
    fn test_erase_wildcards() {
        let codec = TypeCodec::java_defaults();
        let upper = codec.parse("? extends Number").unwrap();
        let lower = codec.parse("? super Integer").unwrap();
        assert_eq!(
            DescriptorConverter::descriptor(&DescriptorConverter::erase(&upper).unwrap()),
            "Ljava/lang/Number;"
        );
        assert_eq!(
            DescriptorConverter::descriptor(&DescriptorConverter::erase(&lower).unwrap()),
            "Ljava/lang/Object;"
        );
    }

    #[test]
    fn test_erase_primitives_and_void() {
        let int_array = TypeExpr::array_of(TypeExpr::class("int"));
        let erased = DescriptorConverter::erase(&int_array).unwrap();
        assert_eq!(DescriptorConverter::descriptor(&erased), "[I");
        assert!(DescriptorConverter::erase(&TypeExpr::class("void")).is_none());
    }

    #[test]
    fn test_convert_field_descriptor() {
        let codec = TypeCodec::java_defaults();
        let ty = DescriptorConverter::convert_field_descriptor("[[Ljava/util/Map;").unwrap();
        assert_eq!(codec.generate(&ty), "Map[][]");
        assert_eq!(
            DescriptorConverter::convert_field_descriptor("J").unwrap(),
            TypeExpr::class("long")
        );
    }

    #[test]
    fn test_malformed_field_descriptor() {
        for descriptor in ["", "Q", "Ljava/lang/String", "II", "V"] {
            let err = DescriptorConverter::convert_field_descriptor(descriptor).unwrap_err();
            assert!(
                err.to_string()
                    .starts_with(&format!("Malformed field descriptor '{descriptor}'")),
                "descriptor: {descriptor}, got {err}"
            );
        }
    }

    #[test]
    fn test_too_many_dimensions() {
        let deep = format!("{}I", "[".repeat(MAX_ARRAY_DIMENSIONS + 1));
        assert!(DescriptorConverter::convert_field_descriptor(&deep).is_err());
        assert!(DescriptorConverter::convert_method(&format!("({deep})V")).is_err());

        let limit = format!("{}I", "[".repeat(MAX_ARRAY_DIMENSIONS));
        let ty = DescriptorConverter::convert_field_descriptor(&limit).unwrap();
        assert_eq!(ty.array_depth(), MAX_ARRAY_DIMENSIONS);
    }

    #[test]
    fn test_erased_descriptor() {
        let codec = TypeCodec::java_defaults();
        let ty = codec.parse("List<String>[]").unwrap();
        assert_eq!(DescriptorConverter::erased_descriptor(&ty), "[Ljava/util/List;");
        assert_eq!(
            DescriptorConverter::erased_descriptor(&TypeExpr::class("void")),
            "V"
        );
    }

    #[test]
    fn test_descriptor_round_trip() {
        let descriptor = "(Z[[DLjava/util/Map;)V";
        let sig = DescriptorConverter::convert_method(descriptor).unwrap();
        let params: String = sig
            .params
            .iter()
            .filter_map(DescriptorConverter::erase)
            .map(|f| DescriptorConverter::descriptor(&f))
            .collect();
        assert_eq!(format!("({params})V"), descriptor);
    }
}
