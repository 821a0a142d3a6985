//! Declaration rendering tests
//!
//! Table-driven checks of type names, literals and member declarations as a
//! consumer sees them through the public API.

use codemodel::{
    format_type_name, format_using_statement, format_value, Attribute, AttributeParameter,
    AttributeParameterValue, CodeModel, Container, DefaultValue, EnumModel, Field,
    GenericParameter, Member, MemberFormatOptions, Method, NamespaceManager, NamespaceReference,
    Parameter, Property, PropertyFormatOptions, Renderer, Security, TypeRef, WellKnownType,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn scope() -> NamespaceManager {
    NamespaceManager::new(
        vec![
            NamespaceReference::new("System"),
            NamespaceReference::new("System.Collections.Generic"),
            NamespaceReference::aliased("Foo.Bar", "FB"),
        ],
        Some("MyApp"),
    )
}

#[rstest]
#[case(WellKnownType::Object, "object")]
#[case(WellKnownType::Void, "void")]
#[case(WellKnownType::Boolean, "bool")]
#[case(WellKnownType::Character, "char")]
#[case(WellKnownType::SignedByte, "sbyte")]
#[case(WellKnownType::UnsignedByte, "byte")]
#[case(WellKnownType::Signed16BitInteger, "short")]
#[case(WellKnownType::Unsigned16BitInteger, "ushort")]
#[case(WellKnownType::Signed32BitInteger, "int")]
#[case(WellKnownType::Unsigned32BitInteger, "uint")]
#[case(WellKnownType::Signed64BitInteger, "long")]
#[case(WellKnownType::Unsigned64BitInteger, "ulong")]
#[case(WellKnownType::Decimal, "decimal")]
#[case(WellKnownType::Single, "float")]
#[case(WellKnownType::Double, "double")]
#[case(WellKnownType::Pointer, "IntPtr")]
#[case(WellKnownType::PlatformPointer, "UIntPtr")]
#[case(WellKnownType::DateTime, "DateTime")]
#[case(WellKnownType::String, "string")]
fn test_well_known_spelling(#[case] kind: WellKnownType, #[case] expected: &str) {
    let t = TypeRef::well_known(kind);
    assert_eq!(
        format_type_name(Some(&t), &NamespaceManager::empty()).as_deref(),
        Some(expected)
    );
}

#[rstest]
#[case("System.Collections.Generic", "List", "List")]
#[case("Foo.Bar", "Widget", "FB.Widget")]
#[case("MyApp", "Order", "Order")]
#[case("Other.Ns", "Thing", "Other.Ns.Thing")]
#[case("", "Global", "Global")]
fn test_namespace_qualification(#[case] namespace: &str, #[case] name: &str, #[case] expected: &str) {
    let t = TypeRef::named(namespace, name);
    assert_eq!(format_type_name(Some(&t), &scope()).as_deref(), Some(expected));
}

#[rstest]
#[case(vec![], "int[]")]
#[case(vec![1], "int[]")]
#[case(vec![2], "int[,]")]
#[case(vec![1, 2], "int[][,]")]
#[case(vec![3, 1], "int[,,][]")]
fn test_array_dimensions(#[case] dimensions: Vec<u32>, #[case] expected: &str) {
    let t = TypeRef::well_known(WellKnownType::Signed32BitInteger).with_array_dimensions(dimensions);
    assert_eq!(format_type_name(Some(&t), &scope()).as_deref(), Some(expected));
}

#[rstest]
#[case(WellKnownType::String, "abc", Some("\"abc\""))]
#[case(WellKnownType::Character, "c", Some("'c'"))]
#[case(WellKnownType::Boolean, "False", Some("false"))]
#[case(WellKnownType::Void, "", Some("void"))]
#[case(WellKnownType::Decimal, "2.5", Some("2.5"))]
#[case(WellKnownType::Signed64BitInteger, "-7", Some("-7"))]
fn test_value_by_category(#[case] kind: WellKnownType, #[case] raw: &str, #[case] expected: Option<&str>) {
    let model = CodeModel::new();
    let t = TypeRef::well_known(kind);
    assert_eq!(format_value(Some(&t), raw, &model).as_deref(), expected);
}

#[test]
fn test_enum_value_uses_full_enum_name() {
    let mut model = CodeModel::new();
    model.add_enum(EnumModel::new("MyApp.Billing", "Currency").with_value("Euro", "978"));
    let t = TypeRef::named("MyApp.Billing", "Currency").as_enum();

    assert_eq!(
        format_value(Some(&t), "978", &model).as_deref(),
        Some("MyApp.Billing.Currency.Euro")
    );
}

#[rstest]
#[case(NamespaceReference::new("System"), false, None, "using System;")]
#[case(NamespaceReference::aliased("Foo.Bar", "FB"), true, None, "using FB = Foo.Bar;")]
#[case(NamespaceReference::aliased("Foo.Bar", "FB"), false, None, "using Foo.Bar;")]
#[case(NamespaceReference::aliased("Foo.Bar", "FB"), true, Some("X"), "using X = Foo.Bar;")]
#[case(NamespaceReference::new("Foo.Bar"), false, Some("X"), "using X = Foo.Bar;")]
fn test_using_statement(
    #[case] reference: NamespaceReference,
    #[case] include_alias: bool,
    #[case] alias: Option<&str>,
    #[case] expected: &str,
) {
    assert_eq!(format_using_statement(&reference, include_alias, alias), expected);
}

#[test]
fn test_rendering_is_idempotent() {
    let model = CodeModel::new();
    let ns = scope();
    let renderer = Renderer::new(&ns, &model);

    let mut t = GenericParameter::new("T");
    t.has_class_constraint = true;
    let mut method = Method::new("Find")
        .returning(
            TypeRef::named("System.Collections.Generic", "List")
                .with_generic_arguments(vec![TypeRef::placeholder("T")]),
        )
        .with_parameter(Parameter::new("key", TypeRef::named("Foo.Bar", "Key")));
    method.generic_parameters.push(t);
    let member = Member::from(method);

    let first = renderer.member(&member, &MemberFormatOptions::default()).unwrap();
    let second = renderer.member(&member, &MemberFormatOptions::default()).unwrap();
    assert_eq!(first, "public List<T> Find<T>(FB.Key key) where T: class");
    assert_eq!(first, second);
}

#[test]
fn test_unrenderable_fragments_are_omitted() {
    let model = CodeModel::new();
    let ns = scope();
    let renderer = Renderer::new(&ns, &model);

    let mut field = Field::new("Mode", TypeRef::named("MyApp", "Mode").as_enum());
    field.is_constant = true;
    field.constant_value = Some("1".into());
    field
        .attributes
        .push(Attribute::new(TypeRef::unloaded("MyApp", "Gone")));

    // enum model missing: the value is dropped, as is the unloaded attribute
    assert_eq!(
        renderer.field(&field, &MemberFormatOptions::default()).unwrap(),
        "private const Mode Mode;"
    );
}

#[test]
fn test_attributes_render_above_method() {
    let model = CodeModel::new();
    let ns = scope();
    let renderer = Renderer::new(&ns, &model);

    let mut method = Method::new("Old");
    method.attributes.push(
        Attribute::new(TypeRef::named("System", "Obsolete")).with_parameter(
            AttributeParameter::positional(AttributeParameterValue::Value {
                value: "use New".into(),
                value_type: TypeRef::well_known(WellKnownType::String),
            }),
        ),
    );

    assert_eq!(
        renderer.method(&method, &MemberFormatOptions::default()).unwrap(),
        "[Obsolete(\"use New\")]\npublic void Old()"
    );
    assert_eq!(
        renderer
            .method(&method, &MemberFormatOptions::default().with_attributes(false))
            .unwrap(),
        "public void Old()"
    );
}

#[test]
fn test_property_getter_override_narrows_security() {
    let model = CodeModel::new();
    let ns = scope();
    let renderer = Renderer::new(&ns, &model);

    let property = Property::new("Total", TypeRef::well_known(WellKnownType::Decimal));
    let options = PropertyFormatOptions::default()
        .with_get_security(Security::Public)
        .with_set_security(Security::Private);

    assert_eq!(
        renderer.property(&property, &options).unwrap(),
        "public decimal Total { get; private set; }"
    );
}

#[test]
fn test_optional_enum_parameter() {
    let mut model = CodeModel::new();
    model.add_enum(EnumModel::new("MyApp", "Level").with_value("High", "2"));
    let ns = scope();
    let renderer = Renderer::new(&ns, &model);

    let parameter = Parameter::new("level", TypeRef::named("MyApp", "Level").as_enum())
        .optional(DefaultValue::Value("2".into()));
    assert_eq!(
        renderer.parameters(&[parameter], false, false),
        "Level level = MyApp.Level.High"
    );
}

#[test]
fn test_header_of_generic_class() {
    let model = CodeModel::new();
    let ns = scope();
    let renderer = Renderer::new(&ns, &model);

    let mut t = GenericParameter::new("TKey");
    t.constraining_types
        .push(TypeRef::named("System", "IComparable"));
    let mut container = Container::class("MyApp", "Index")
        .with_base_class(TypeRef::named("System", "Object"))
        .implementing(TypeRef::named("Foo.Bar", "IIndex"));
    container.generic_parameters.push(t);
    container.is_abstract = true;

    assert_eq!(
        renderer
            .container_header(&container, &MemberFormatOptions::default())
            .unwrap(),
        "public abstract class Index<TKey>: FB.IIndex where TKey: IComparable"
    );
}
