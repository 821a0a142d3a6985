//! Literal and default-value rendering

use crate::lexical::{keywords, runtime, symbols};
use crate::model::{ModelSource, TypeRef, WellKnownType};
use tracing::debug;

/// Render `raw` as a literal of `type_ref`
///
/// `System.Type` renders as `typeof(raw)`. Enum values are looked up by
/// their stored literal and render as `Namespace.Enum.Member`; an enum that
/// cannot be resolved, or a literal with no matching member, gives `None`.
/// Other non-primitive values pass through untouched.
pub fn format_value(type_ref: Option<&TypeRef>, raw: &str, source: &dyn ModelSource) -> Option<String> {
    let type_ref = type_ref.filter(|t| t.is_loaded)?;

    if type_ref.same_definition(runtime::SYSTEM_NAMESPACE, runtime::TYPE_TYPE) {
        return Some(format!("{}({})", keywords::TYPEOF, raw));
    }

    if type_ref.is_enum {
        return format_enum_value(type_ref, raw, source);
    }

    if !type_ref.is_well_known {
        return Some(raw.to_string());
    }

    let formatted = match type_ref.well_known_kind {
        WellKnownType::Void => keywords::VOID.to_string(),
        WellKnownType::Boolean => raw.to_lowercase(),
        WellKnownType::Character => format!("{q}{raw}{q}", q = symbols::CHAR_QUOTE),
        WellKnownType::String => format!("{q}{raw}{q}", q = symbols::STRING_QUOTE),
        _ => raw.to_string(),
    };
    Some(formatted)
}

fn format_enum_value(type_ref: &TypeRef, raw: &str, source: &dyn ModelSource) -> Option<String> {
    let model = match source.resolve_enum(type_ref) {
        Ok(model) => model,
        Err(e) => {
            debug!(enum_type = %type_ref.full_name(), error = %e, "enum value left unrendered");
            return None;
        }
    };

    let value = model.find_by_literal(raw)?;
    if model.namespace.is_empty() {
        Some(format!("{}.{}", model.name, value.name))
    } else {
        Some(format!("{}.{}.{}", model.namespace, model.name, value.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CodeModel, EnumModel};

    fn colors() -> CodeModel {
        let mut model = CodeModel::new();
        model.add_enum(
            EnumModel::new("Colors", "Color")
                .with_value("Red", "1")
                .with_value("Green", "2"),
        );
        model
    }

    fn wk(kind: WellKnownType) -> TypeRef {
        TypeRef::well_known(kind)
    }

    #[test]
    fn test_primitive_literals() {
        let model = CodeModel::new();
        assert_eq!(
            format_value(Some(&wk(WellKnownType::String)), "hello", &model).as_deref(),
            Some("\"hello\"")
        );
        assert_eq!(
            format_value(Some(&wk(WellKnownType::Character)), "x", &model).as_deref(),
            Some("'x'")
        );
        assert_eq!(
            format_value(Some(&wk(WellKnownType::Boolean)), "TRUE", &model).as_deref(),
            Some("true")
        );
        assert_eq!(
            format_value(Some(&wk(WellKnownType::Double)), "1.5", &model).as_deref(),
            Some("1.5")
        );
        assert_eq!(
            format_value(Some(&wk(WellKnownType::Void)), "anything", &model).as_deref(),
            Some("void")
        );
    }

    #[test]
    fn test_type_literal() {
        let model = CodeModel::new();
        let system_type = TypeRef::named("System", "Type");
        assert_eq!(
            format_value(Some(&system_type), "string", &model).as_deref(),
            Some("typeof(string)")
        );
    }

    #[test]
    fn test_enum_lookup() {
        let model = colors();
        let color = TypeRef::named("Colors", "Color").as_enum();
        assert_eq!(
            format_value(Some(&color), "1", &model).as_deref(),
            Some("Colors.Color.Red")
        );
        assert_eq!(format_value(Some(&color), "7", &model), None);
    }

    #[test]
    fn test_unresolvable_enum_is_none() {
        let model = CodeModel::new();
        let color = TypeRef::named("Colors", "Color").as_enum();
        assert_eq!(format_value(Some(&color), "1", &model), None);
    }

    #[test]
    fn test_non_primitive_passthrough() {
        let model = CodeModel::new();
        let money = TypeRef::named("Billing", "Money");
        assert_eq!(
            format_value(Some(&money), "Money.Zero", &model).as_deref(),
            Some("Money.Zero")
        );
    }

    #[test]
    fn test_missing_or_unloaded_type_is_none() {
        let model = CodeModel::new();
        assert_eq!(format_value(None, "1", &model), None);
        assert_eq!(
            format_value(Some(&TypeRef::unloaded("System", "String")), "x", &model),
            None
        );
    }
}
