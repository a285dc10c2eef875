use std::borrow::Cow;

use jwriter_classfile::ClassRef;
use jwriter_test_utils::{init_tracing, FakeTypes};
use jwriter_types::{ArrayTypeName, ClassName, PrimitiveName, TypeName};
use jwriter_types_bridge::{
    from_live_type, from_resolved_class, BoundConvention, ConvertError, ResolvedClass,
    ResolvedKind,
};

use pretty_assertions::assert_eq;

fn for_name(name: &str) -> TypeName {
    init_tracing();
    from_resolved_class(&ClassRef::for_name(name).unwrap()).unwrap()
}

#[test]
fn arrays_of_objects_and_primitives() {
    assert_eq!(
        for_name("[Ljava.lang.Object;"),
        TypeName::from(ArrayTypeName::new(ClassName::object()))
    );
    assert_eq!(
        for_name("[I"),
        TypeName::from(ArrayTypeName::new(PrimitiveName::Int))
    );
    assert_ne!(for_name("[Ljava.lang.Object;"), for_name("[I"));
    assert_eq!(
        for_name("[[J"),
        TypeName::from(ArrayTypeName::new(ArrayTypeName::new(PrimitiveName::Long)))
    );
}

#[test]
fn void_and_boxed_void_are_different() {
    assert_eq!(for_name("void"), TypeName::Void);

    let boxed = for_name("java.lang.Void");
    assert_eq!(boxed, TypeName::from(ClassName::void_class()));
    assert_ne!(boxed, TypeName::Void);
}

#[test]
fn every_primitive_keyword() {
    for primitive in PrimitiveName::ALL {
        assert_eq!(for_name(primitive.keyword()), TypeName::Primitive(primitive));
    }
}

#[test]
fn top_level_and_nested_classes() {
    assert_eq!(
        for_name("java.nio.charset.Charset"),
        TypeName::from(
            ClassName::new("java.nio.charset", Vec::<String>::new(), "Charset").unwrap()
        )
    );
    assert_eq!(
        for_name("java.util.Map$Entry"),
        TypeName::from(ClassName::new("java.util", ["Map"], "Entry").unwrap())
    );
    assert_eq!(
        for_name("Foo"),
        TypeName::from(ClassName::new("", Vec::<String>::new(), "Foo").unwrap())
    );
}

#[test]
fn descriptors_and_names_agree() {
    for (descriptor, name) in [
        ("Ljava/util/Map$Entry;", "java.util.Map$Entry"),
        ("[Ljava/lang/String;", "[Ljava.lang.String;"),
        ("V", "void"),
        ("Z", "boolean"),
    ] {
        let from_descriptor =
            from_resolved_class(&jwriter_classfile::parse_class_descriptor(descriptor).unwrap())
                .unwrap();
        assert_eq!(from_descriptor, for_name(name), "{descriptor}");
    }
}

#[test]
fn both_sources_agree_on_the_same_type() {
    let mut types = FakeTypes::new(BoundConvention::Flatten);
    let object = types.object_type();
    let objects = types.array(object);
    let entry = types.class_type("java.util", &["Map", "Entry"]);

    assert_eq!(
        from_live_type(&types, &objects).unwrap(),
        for_name("[Ljava.lang.Object;")
    );
    assert_eq!(
        from_live_type(&types, &entry).unwrap(),
        for_name("java.util.Map$Entry")
    );
}

#[test]
fn anonymous_classes_are_malformed() {
    let anonymous = ClassRef::for_name("com.example.Outer$1").unwrap();
    assert!(matches!(
        from_resolved_class(&anonymous),
        Err(ConvertError::MalformedName(_))
    ));
}

/// A reference source that breaks its own contract.
#[derive(Clone)]
enum Broken {
    ArrayWithoutComponent,
    Unnamed,
}

impl ResolvedClass for Broken {
    fn kind(&self) -> ResolvedKind {
        match self {
            Broken::ArrayWithoutComponent => ResolvedKind::Array,
            Broken::Unnamed => ResolvedKind::Named,
        }
    }

    fn name(&self) -> Cow<'_, str> {
        match self {
            Broken::ArrayWithoutComponent => Cow::Borrowed("[?"),
            Broken::Unnamed => Cow::Borrowed(""),
        }
    }

    fn component_type(&self) -> Option<Self> {
        None
    }
}

#[test]
fn contract_violations_are_invalid_input() {
    assert!(matches!(
        from_resolved_class(&Broken::ArrayWithoutComponent),
        Err(ConvertError::InvalidInput(_))
    ));
    assert!(matches!(
        from_resolved_class(&Broken::Unnamed),
        Err(ConvertError::InvalidInput(_))
    ));
}
