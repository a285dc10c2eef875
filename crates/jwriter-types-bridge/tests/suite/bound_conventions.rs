use jwriter_test_utils::{init_tracing, FakeTypes, TypeId};
use jwriter_types::{ClassName, IntersectionTypeName, TypeName, TypeVariableName};
use jwriter_types_bridge::{from_live_type, from_live_type_with, BoundConvention, BridgeConfig};

use pretty_assertions::assert_eq;

fn class(canonical: &str) -> TypeName {
    ClassName::parse(canonical).unwrap().into()
}

/// `<Intersection extends Number & Runnable>`
fn intersection_param(types: &mut FakeTypes) -> TypeId {
    let owner = types.class("com.example", &["Fixtures", "Parameterized"]);
    let param = types.type_param(owner, "Intersection");
    let number = types.class_type("java.lang", &["Number"]);
    let runnable = types.class_type("java.lang", &["Runnable"]);
    let both = types.intersection(vec![number, runnable]);
    types.set_bound(param, both);
    param
}

fn flattened() -> TypeName {
    TypeVariableName::new(
        "Intersection",
        vec![class("java.lang.Number"), class("java.lang.Runnable")],
    )
    .into()
}

fn wrapped() -> TypeName {
    let both =
        IntersectionTypeName::new([class("java.lang.Number"), class("java.lang.Runnable")])
            .unwrap();
    TypeVariableName::new("Intersection", vec![both.into()]).into()
}

#[test]
fn flatten_convention_lists_each_bound() {
    init_tracing();
    let mut types = FakeTypes::new(BoundConvention::Flatten);
    let param = intersection_param(&mut types);

    let converted = from_live_type(&types, &param).unwrap();
    assert_eq!(converted, flattened());

    let TypeName::TypeVariable(var) = converted else {
        panic!("expected a type variable");
    };
    assert_eq!(var.bounds().len(), 2);
}

#[test]
fn wrap_convention_uses_one_intersection_bound() {
    init_tracing();
    let mut types = FakeTypes::new(BoundConvention::Wrap);
    let param = intersection_param(&mut types);

    let converted = from_live_type(&types, &param).unwrap();
    assert_eq!(converted, wrapped());

    let TypeName::TypeVariable(var) = converted else {
        panic!("expected a type variable");
    };
    let [TypeName::Intersection(bound)] = var.bounds() else {
        panic!("expected a single intersection bound, got {:?}", var.bounds());
    };
    assert_eq!(bound.bounds().len(), 2);
}

#[test]
fn conventions_differ_structurally_but_render_alike() {
    assert_ne!(flattened(), wrapped());

    let (TypeName::TypeVariable(flat), TypeName::TypeVariable(wrap)) = (flattened(), wrapped())
    else {
        panic!("expected type variables");
    };
    assert_eq!(flat.declaration(), wrap.declaration());
}

#[test]
fn config_overrides_the_reported_convention() {
    init_tracing();
    let mut types = FakeTypes::new(BoundConvention::Wrap);
    let param = intersection_param(&mut types);

    let config = BridgeConfig {
        bound_convention: Some(BoundConvention::Flatten),
    };
    assert_eq!(
        from_live_type_with(&types, &param, &config).unwrap(),
        flattened()
    );

    types.set_bound_convention(BoundConvention::Flatten);
    let config = BridgeConfig {
        bound_convention: Some(BoundConvention::Wrap),
    };
    assert_eq!(from_live_type_with(&types, &param, &config).unwrap(), wrapped());
    assert_eq!(from_live_type(&types, &param).unwrap(), flattened());
}

#[test]
fn convention_by_release() {
    assert_eq!(BoundConvention::for_release(6), BoundConvention::Flatten);
    assert_eq!(BoundConvention::for_release(7), BoundConvention::Flatten);
    for release in [8, 9, 11, 17, 21] {
        assert_eq!(
            BoundConvention::for_release(release),
            BoundConvention::Wrap,
            "release {release}"
        );
    }
}
