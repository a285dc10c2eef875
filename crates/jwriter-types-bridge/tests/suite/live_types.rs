use jwriter_test_utils::{init_tracing, FakeTypes};
use jwriter_types::{
    ArrayTypeName, ClassName, IntersectionTypeName, ParameterizedTypeName, PrimitiveName,
    TypeName,
};
use jwriter_types_bridge::{from_live_type, BoundConvention, ConvertError, LiveKind};

use pretty_assertions::assert_eq;

fn class(canonical: &str) -> ClassName {
    ClassName::parse(canonical).unwrap()
}

fn model() -> FakeTypes {
    init_tracing();
    FakeTypes::new(BoundConvention::Flatten)
}

#[test]
fn declared_types_without_arguments_are_class_names() {
    let mut types = model();
    let object = types.object_type();
    let charset = types.class_type("java.nio.charset", &["Charset"]);
    let nested = types.class_type("com.example", &["Outer", "Middle", "Inner"]);

    assert_eq!(from_live_type(&types, &object).unwrap(), TypeName::from(ClassName::object()));
    assert_eq!(
        from_live_type(&types, &charset).unwrap(),
        TypeName::from(
            ClassName::new("java.nio.charset", Vec::<String>::new(), "Charset").unwrap()
        )
    );
    assert_eq!(
        from_live_type(&types, &nested).unwrap(),
        TypeName::from(ClassName::new("com.example", ["Outer", "Middle"], "Inner").unwrap())
    );
}

#[test]
fn default_package_class() {
    let mut types = model();
    let foo = types.class_type("", &["Foo"]);

    let TypeName::Class(converted) = from_live_type(&types, &foo).unwrap() else {
        panic!("expected a class name");
    };
    assert_eq!(converted.package_name(), "");
    assert_eq!(converted.simple_name(), "Foo");
}

#[test]
fn parameterized_type_keeps_argument_order() {
    let mut types = model();
    let set = types.class("java.util", &["Set"]);
    let object = types.object_type();
    let set_of_object = types.declared(set, vec![object]);

    assert_eq!(
        from_live_type(&types, &set_of_object).unwrap(),
        TypeName::from(
            ParameterizedTypeName::new(class("java.util.Set"), [TypeName::from(ClassName::object())])
                .unwrap()
        )
    );

    let map = types.class("java.util", &["Map"]);
    let string = types.class_type("java.lang", &["String"]);
    let ints = types.primitive(PrimitiveName::Int);
    let int_array = types.array(ints);
    let map_type = types.declared(map, vec![string, int_array]);

    let TypeName::Parameterized(converted) = from_live_type(&types, &map_type).unwrap() else {
        panic!("expected a parameterized type");
    };
    assert_eq!(converted.raw_type(), &class("java.util.Map"));
    assert_eq!(
        converted.type_arguments(),
        [
            TypeName::from(class("java.lang.String")),
            ArrayTypeName::new(PrimitiveName::Int).into(),
        ]
    );
}

#[test]
fn nested_generic_class() {
    let mut types = model();
    let entry = types.class("java.util", &["Map", "Entry"]);
    let string = types.class_type("java.lang", &["String"]);
    let object = types.object_type();
    let entry_type = types.declared(entry, vec![string, object]);

    let converted = from_live_type(&types, &entry_type).unwrap();
    assert_eq!(converted.to_string(), "java.util.Map.Entry<java.lang.String, java.lang.Object>");
}

#[test]
fn every_primitive_kind() {
    let mut types = model();
    for primitive in PrimitiveName::ALL {
        let ty = types.primitive(primitive);
        assert_eq!(from_live_type(&types, &ty).unwrap(), TypeName::Primitive(primitive));
    }
}

#[test]
fn arrays() {
    let mut types = model();
    let object = types.object_type();
    let objects = types.array(object);
    assert_eq!(
        from_live_type(&types, &objects).unwrap(),
        TypeName::from(ArrayTypeName::new(ClassName::object()))
    );

    let double = types.primitive(PrimitiveName::Double);
    let doubles = types.array(double);
    let matrix = types.array(doubles);
    assert_eq!(
        from_live_type(&types, &matrix).unwrap(),
        TypeName::from(ArrayTypeName::new(ArrayTypeName::new(PrimitiveName::Double)))
    );
}

#[test]
fn void_and_null() {
    let mut types = model();
    let void = types.void_type();
    let null = types.null_type();
    let other_null = types.null_type();

    assert_eq!(from_live_type(&types, &void).unwrap(), TypeName::Void);
    assert_eq!(from_live_type(&types, &null).unwrap(), TypeName::Null);
    assert_eq!(
        from_live_type(&types, &null).unwrap(),
        from_live_type(&types, &other_null).unwrap()
    );
}

#[test]
fn standalone_intersection() {
    let mut types = model();
    let number = types.class_type("java.lang", &["Number"]);
    let runnable = types.class_type("java.lang", &["Runnable"]);
    let both = types.intersection(vec![number, runnable]);

    assert_eq!(
        from_live_type(&types, &both).unwrap(),
        TypeName::from(
            IntersectionTypeName::new([
                TypeName::from(class("java.lang.Number")),
                TypeName::from(class("java.lang.Runnable")),
            ])
            .unwrap()
        )
    );
}

#[test]
fn conversion_is_repeatable() {
    let mut types = model();
    let list = types.class("java.util", &["List"]);
    let string = types.class_type("java.lang", &["String"]);
    let list_string = types.declared(list, vec![string]);
    let lists = types.array(list_string);

    let first = from_live_type(&types, &lists).unwrap();
    let second = from_live_type(&types, &lists).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unsupported_kinds_are_named() {
    let mut types = model();
    for (kind, name) in [
        (LiveKind::Wildcard, "wildcard"),
        (LiveKind::Union, "union"),
        (LiveKind::Module, "module"),
        (LiveKind::Executable, "executable"),
        (LiveKind::Package, "package"),
        (LiveKind::Error, "error"),
        (LiveKind::None, "none"),
    ] {
        let ty = types.opaque(kind);
        assert_eq!(
            from_live_type(&types, &ty),
            Err(ConvertError::UnsupportedTypeKind(name.to_string()))
        );
    }
}

#[test]
fn unsupported_kind_inside_type_arguments_fails_the_whole_conversion() {
    let mut types = model();
    let list = types.class("java.util", &["List"]);
    let wildcard = types.opaque(LiveKind::Wildcard);
    let list_of_any = types.declared(list, vec![wildcard]);

    assert_eq!(
        from_live_type(&types, &list_of_any),
        Err(ConvertError::UnsupportedTypeKind("wildcard".to_string()))
    );
}

#[test]
fn local_classes_have_no_canonical_name() {
    let mut types = model();
    let owner = types.class("com.example", &["Owner"]);
    let local = types.local_class(owner, "run", "Local");
    let local_type = types.declared(local, Vec::new());

    assert!(matches!(
        from_live_type(&types, &local_type),
        Err(ConvertError::InvalidInput(_))
    ));
}

#[test]
fn malformed_element_names_are_reported() {
    let mut types = model();
    let anonymous = types.class_type("com.example", &["Outer", "1"]);

    assert!(matches!(
        from_live_type(&types, &anonymous),
        Err(ConvertError::MalformedName(_))
    ));
}

#[test]
fn one_part_intersection_is_invalid_input() {
    let mut types = model();
    let number = types.class_type("java.lang", &["Number"]);
    let lonely = types.intersection(vec![number]);

    assert!(matches!(
        from_live_type(&types, &lonely),
        Err(ConvertError::InvalidInput(_))
    ));
}
