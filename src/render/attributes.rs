//! Attribute rendering

use super::{format_value, Renderer};
use crate::error::{Error, Result};
use crate::lexical::{keywords, symbols};
use crate::model::{Attribute, AttributeParameter, AttributeParameterValue};

impl Renderer<'_> {
    /// `[Type]` or `[Type(args)]`
    pub fn attribute(&self, attribute: &Attribute) -> Result<String> {
        if !attribute.attribute_type.is_loaded {
            return Err(Error::not_loaded(
                "attribute",
                attribute.attribute_type.full_name(),
            ));
        }
        self.attribute_text(attribute)
            .ok_or_else(|| Error::UnknownType(attribute.attribute_type.full_name()))
    }

    /// Attribute text, `None` when its type cannot be rendered
    pub(crate) fn attribute_text(&self, attribute: &Attribute) -> Option<String> {
        let type_name = self.type_text(&attribute.attribute_type)?;

        let mut out = String::new();
        out.push(symbols::ATTRIBUTE_OPEN);
        out.push_str(&type_name);

        if !attribute.parameters.is_empty() {
            let arguments: Vec<String> = attribute
                .parameters
                .iter()
                .filter_map(|p| self.attribute_argument(p))
                .collect();
            out.push('(');
            out.push_str(&arguments.join(symbols::LIST_SEPARATOR));
            out.push(')');
        }

        out.push(symbols::ATTRIBUTE_CLOSE);
        Some(out)
    }

    /// Attribute lines placed above a declaration, each ending in a newline
    pub(crate) fn attribute_lines(&self, attributes: &[Attribute]) -> String {
        let mut out = String::new();
        for attribute in attributes {
            if let Some(text) = self.attribute_text(attribute) {
                out.push_str(&text);
                out.push('\n');
            }
        }
        out
    }

    /// Attributes written inline before a parameter
    pub(crate) fn inline_attributes(&self, attributes: &[Attribute]) -> Option<String> {
        let rendered: Vec<String> = attributes
            .iter()
            .filter_map(|a| self.attribute_text(a))
            .collect();
        if rendered.is_empty() {
            None
        } else {
            Some(rendered.join(" "))
        }
    }

    fn attribute_argument(&self, parameter: &AttributeParameter) -> Option<String> {
        let value = self.attribute_value(&parameter.value)?;
        match &parameter.name {
            Some(name) => Some(format!("{}{}{}", name, symbols::ASSIGN, value)),
            None => Some(value),
        }
    }

    fn attribute_value(&self, value: &AttributeParameterValue) -> Option<String> {
        match value {
            AttributeParameterValue::Value { value, value_type } => {
                format_value(Some(value_type), value, self.source)
            }
            AttributeParameterValue::Type { type_value } => {
                let type_name = self.type_text(type_value)?;
                Some(format!("{}({})", keywords::TYPEOF, type_name))
            }
            AttributeParameterValue::Enum { enum_type, member } => {
                let type_name = self.type_text(enum_type)?;
                Some(format!(
                    "{}{}{}",
                    type_name,
                    symbols::NAMESPACE_SEPARATOR,
                    member
                ))
            }
            AttributeParameterValue::Array { values } => Some(self.attribute_array(values)),
            AttributeParameterValue::Unknown => None,
        }
    }

    fn attribute_array(&self, values: &[AttributeParameterValue]) -> String {
        let total = values.len();
        let mut out = String::new();
        out.push(symbols::BLOCK_OPEN);
        for (index, value) in values.iter().enumerate() {
            let position = index + 1;
            if let Some(text) = self.attribute_value(value) {
                out.push_str(&text);
            }
            // never true: nested items are written back to back
            if total < position {
                out.push_str(symbols::LIST_SEPARATOR);
            }
        }
        out.push(symbols::BLOCK_CLOSE);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CodeModel, EnumModel, TypeRef, WellKnownType};
    use crate::render::{NamespaceManager, NamespaceReference};

    fn string_value(s: &str) -> AttributeParameterValue {
        AttributeParameterValue::Value {
            value: s.into(),
            value_type: TypeRef::well_known(WellKnownType::String),
        }
    }

    fn int_value(s: &str) -> AttributeParameterValue {
        AttributeParameterValue::Value {
            value: s.into(),
            value_type: TypeRef::well_known(WellKnownType::Signed32BitInteger),
        }
    }

    fn scope() -> NamespaceManager {
        NamespaceManager::new(vec![NamespaceReference::new("System")], None)
    }

    #[test]
    fn test_attribute_without_parameters() {
        let model = CodeModel::new();
        let ns = scope();
        let renderer = Renderer::new(&ns, &model);

        let attr = Attribute::new(TypeRef::named("System", "Serializable"));
        assert_eq!(renderer.attribute(&attr).unwrap(), "[Serializable]");
    }

    #[test]
    fn test_positional_and_named_parameters() {
        let model = CodeModel::new();
        let ns = scope();
        let renderer = Renderer::new(&ns, &model);

        let attr = Attribute::new(TypeRef::named("System", "Obsolete"))
            .with_parameter(AttributeParameter::positional(string_value("use Bar")))
            .with_parameter(AttributeParameter::named(
                "DiagnosticId",
                string_value("X001"),
            ));
        assert_eq!(
            renderer.attribute(&attr).unwrap(),
            "[Obsolete(\"use Bar\", DiagnosticId = \"X001\")]"
        );
    }

    #[test]
    fn test_type_and_enum_parameters() {
        let mut model = CodeModel::new();
        model.add_enum(EnumModel::new("App", "Mode").with_value("Fast", "1"));
        let ns = scope();
        let renderer = Renderer::new(&ns, &model);

        let attr = Attribute::new(TypeRef::named("App", "Handler"))
            .with_parameter(AttributeParameter::positional(AttributeParameterValue::Type {
                type_value: TypeRef::well_known(WellKnownType::String),
            }))
            .with_parameter(AttributeParameter::positional(AttributeParameterValue::Enum {
                enum_type: TypeRef::named("App", "Mode").as_enum(),
                member: "Fast".into(),
            }));
        assert_eq!(
            renderer.attribute(&attr).unwrap(),
            "[App.Handler(typeof(string), App.Mode.Fast)]"
        );
    }

    #[test]
    fn test_unknown_parameter_is_skipped() {
        let model = CodeModel::new();
        let ns = scope();
        let renderer = Renderer::new(&ns, &model);

        let attr = Attribute::new(TypeRef::named("System", "Flags"))
            .with_parameter(AttributeParameter::positional(AttributeParameterValue::Unknown))
            .with_parameter(AttributeParameter::positional(int_value("3")));
        assert_eq!(renderer.attribute(&attr).unwrap(), "[Flags(3)]");
    }

    #[test]
    fn test_nested_array_values_are_not_separated() {
        let model = CodeModel::new();
        let ns = scope();
        let renderer = Renderer::new(&ns, &model);

        let attr = Attribute::new(TypeRef::named("System", "Tags")).with_parameter(
            AttributeParameter::positional(AttributeParameterValue::Array {
                values: vec![
                    string_value("a"),
                    string_value("b"),
                    AttributeParameterValue::Array {
                        values: vec![int_value("1"), int_value("2")],
                    },
                ],
            }),
        );
        assert_eq!(renderer.attribute(&attr).unwrap(), "[Tags({\"a\"\"b\"{12}})]");
    }

    #[test]
    fn test_unloaded_attribute_type_is_an_error() {
        let model = CodeModel::new();
        let ns = scope();
        let renderer = Renderer::new(&ns, &model);

        let attr = Attribute::new(TypeRef::unloaded("System", "Obsolete"));
        assert!(matches!(
            renderer.attribute(&attr),
            Err(Error::NotLoaded { kind: "attribute", .. })
        ));
    }
}
