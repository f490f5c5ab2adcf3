//! Generation vectors, from both the model and a host-side reflective type.

use pretty_assertions::assert_eq;
use std::sync::Arc;
use typex_api::{
    ReflectArray, ReflectClass, ReflectParameterized, ReflectType, ReflectWildcard, TypeShape,
};
use typex_core::{NameRegistry, RegistryConfig, TypeCodec};

/// Stand-in for a runtime's own type objects.
#[derive(Debug)]
enum Host {
    Class(&'static str),
    Generic {
        raw: Box<Host>,
        args: Vec<Host>,
        owner: Option<Box<Host>>,
    },
    Array(Box<Host>),
    Wildcard(Vec<Host>, Vec<Host>),
}

fn generic(raw: &'static str, args: Vec<Host>) -> Host {
    Host::Generic {
        raw: Box::new(Host::Class(raw)),
        args,
        owner: None,
    }
}

impl ReflectType for Host {
    fn shape(&self) -> TypeShape<'_> {
        match self {
            Host::Class(_) => TypeShape::Class(self),
            Host::Generic { .. } => TypeShape::Parameterized(self),
            Host::Array(_) => TypeShape::GenericArray(self),
            Host::Wildcard(..) => TypeShape::Wildcard(self),
        }
    }
}

impl ReflectClass for Host {
    fn class_name(&self) -> &str {
        match self {
            Host::Class(name) => name,
            _ => "",
        }
    }
}

impl ReflectParameterized for Host {
    fn raw_type(&self) -> &dyn ReflectType {
        match self {
            Host::Generic { raw, .. } => raw.as_ref(),
            _ => self,
        }
    }

    fn actual_type_arguments(&self) -> Vec<&dyn ReflectType> {
        match self {
            Host::Generic { args, .. } => args.iter().map(|a| a as &dyn ReflectType).collect(),
            _ => Vec::new(),
        }
    }

    fn owner_type(&self) -> Option<&dyn ReflectType> {
        match self {
            Host::Generic {
                owner: Some(owner), ..
            } => Some(owner.as_ref()),
            _ => None,
        }
    }
}

impl ReflectArray for Host {
    fn generic_component_type(&self) -> &dyn ReflectType {
        match self {
            Host::Array(component) => component.as_ref(),
            _ => self,
        }
    }
}

impl ReflectWildcard for Host {
    fn upper_bounds(&self) -> Vec<&dyn ReflectType> {
        match self {
            Host::Wildcard(upper, _) => upper.iter().map(|b| b as &dyn ReflectType).collect(),
            _ => Vec::new(),
        }
    }

    fn lower_bounds(&self) -> Vec<&dyn ReflectType> {
        match self {
            Host::Wildcard(_, lower) => lower.iter().map(|b| b as &dyn ReflectType).collect(),
            _ => Vec::new(),
        }
    }
}

#[test]
fn test_generate_vectors() {
    let codec = TypeCodec::java_defaults();
    let cases = [
        "ArrayList",
        "Object[]",
        "Integer[]",
        "Object[][]",
        "ArrayList<String>",
        "ArrayList<ArrayList<Long>>",
        "LinkedHashMap<byte[], int[]>",
        "LinkedHashMap<Integer, ArrayList<String>>",
        "LinkedHashMap<? extends Integer, ArrayList<? super String>>",
        "ArrayList<?>",
        "ArrayList<String>[]",
    ];
    for canonical in cases {
        let ty = codec.parse(canonical).unwrap();
        assert_eq!(codec.generate(&ty), canonical);
    }
}

#[test]
fn test_generate_from_host_types() {
    let codec = TypeCodec::java_defaults();
    let host = generic(
        "java.util.LinkedHashMap",
        vec![
            Host::Wildcard(vec![Host::Class("java.lang.Integer")], vec![]),
            generic(
                "java.util.ArrayList",
                vec![Host::Wildcard(
                    vec![Host::Class("java.lang.Object")],
                    vec![Host::Class("java.lang.String")],
                )],
            ),
        ],
    );
    assert_eq!(
        codec.generate_reflect(&host).unwrap(),
        "LinkedHashMap<? extends Integer, ArrayList<? super String>>"
    );

    let array = Host::Array(Box::new(generic(
        "java.util.ArrayList",
        vec![Host::Wildcard(vec![], vec![])],
    )));
    assert_eq!(codec.generate_reflect(&array).unwrap(), "ArrayList<?>[]");
}

#[test]
fn test_host_and_parsed_values_agree() {
    let codec = TypeCodec::java_defaults();
    let host = generic(
        "java.util.ArrayList",
        vec![Host::Array(Box::new(Host::Class("byte")))],
    );
    let parsed = codec.parse("ArrayList<byte[]>").unwrap();
    assert!(typex_api::structurally_equal(&host, &parsed));
}

#[test]
fn test_generate_registered_and_unregistered() {
    let codec = TypeCodec::java_defaults();
    assert!(codec.parse("List<com.acme.Widget>").unwrap_err().is_class_not_found());

    let registry = RegistryConfig::from_json(
        r#"{ "classes": [{ "name": "com.acme.Widget", "alias": "W" }] }"#,
    )
    .unwrap()
    .build()
    .unwrap();
    let codec = TypeCodec::new(Arc::new(registry));
    let ty = codec.parse("List<com.acme.Widget>").unwrap();
    assert_eq!(codec.generate(&ty), "List<W>");

    let bare = TypeCodec::new(Arc::new(
        NameRegistry::builder()
            .class("com.acme.Gadget")
            .build()
            .unwrap(),
    ));
    let ty = bare.parse("com.acme.Gadget[]").unwrap();
    assert_eq!(bare.generate(&ty), "com.acme.Gadget[]");
}

#[test]
fn test_owner_types_are_rejected() {
    let codec = TypeCodec::java_defaults();
    let inner = Host::Generic {
        raw: Box::new(Host::Class("com.acme.Outer$Inner")),
        args: vec![Host::Class("java.lang.String")],
        owner: Some(Box::new(Host::Class("com.acme.Outer"))),
    };
    let err = codec.generate_reflect(&inner).unwrap_err();
    assert!(err.to_string().starts_with("Owner types are not supported"));
}
