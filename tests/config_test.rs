//! Configuration loading from disk

use codemodel::{
    CodeModel, Container, Error, FormatterConfig, MemberFormatOptions, Method, Renderer, TypeRef,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_config_and_render() {
    let file = write_config(
        r#"
namespaces:
  current: Shop
  imports:
    - namespace: System
    - namespace: Shop.Core
      alias: Core
render:
  indent: "  "
members:
  include_security: false
"#,
    );
    let config = FormatterConfig::load(file.path()).unwrap();
    assert_eq!(config.render_config().indent, "  ");

    let model = CodeModel::new();
    let namespaces = config.namespace_manager();
    let renderer = Renderer::with_config(&namespaces, &model, config.render_config());

    let method = Method::new("Place").returning(TypeRef::named("Shop.Core", "Receipt"));
    assert_eq!(renderer.method(&method, &config.members).unwrap(), "Core.Receipt Place()");
}

#[test]
fn test_loaded_analyzer_uses_configured_policy() {
    let file = write_config("comparison:\n  policy: base\n");
    let config = FormatterConfig::load(file.path()).unwrap();

    let mut model = CodeModel::new();
    model.add_container(Container::interface("Shop", "ICart").with_member(Method::new("Clear")));
    let mut clear = Method::new("Clear");
    clear.security = codemodel::Security::Internal;
    let cart = model.add_container(
        Container::class("Shop", "Cart")
            .implementing(TypeRef::named("Shop", "ICart"))
            .with_member(clear),
    );

    let report = config.analyzer().analyze(&model, cart).unwrap();
    assert!(report.is_complete);
    assert_eq!(
        MemberFormatOptions::default(),
        config.members,
        "unset members section keeps defaults"
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FormatterConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_malformed_file_names_the_path() {
    let file = write_config("namespaces: [unclosed\n");
    let err = FormatterConfig::load(file.path()).unwrap_err();
    match err {
        Error::Config(message) => assert!(message.contains("failed to parse")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_config_round_trips_through_yaml() {
    let config = FormatterConfig::from_yaml("namespaces:\n  current: Shop\n").unwrap();
    let yaml = config.to_yaml().unwrap();
    assert_eq!(FormatterConfig::from_yaml(&yaml).unwrap(), config);
}
