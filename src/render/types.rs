//! Type-name rendering

use super::scoping::NamespaceManager;
use crate::lexical::{symbols, well_known_type_name};
use crate::model::TypeRef;

/// Render a type reference as it should appear in a document
///
/// Returns `None` for a missing or unloaded reference, and for a well-known
/// reference whose category has no spelling. Generic arguments that are
/// themselves placeholders render by bare symbol name.
pub fn format_type_name(type_ref: Option<&TypeRef>, namespaces: &NamespaceManager) -> Option<String> {
    let type_ref = type_ref.filter(|t| t.is_loaded)?;

    debug_assert!(
        !(type_ref.is_array && type_ref.is_tuple),
        "type reference {} is flagged both array and tuple",
        type_ref.full_name()
    );

    let mut name = if type_ref.is_well_known {
        well_known_type_name(type_ref.well_known_kind)?.to_string()
    } else {
        match namespaces.resolve(&type_ref.namespace) {
            Some(qualifier) => format!(
                "{}{}{}",
                qualifier,
                symbols::NAMESPACE_SEPARATOR,
                type_ref.name
            ),
            None => type_ref.name.clone(),
        }
    };

    if type_ref.is_generic && !type_ref.generic_arguments.is_empty() {
        let arguments = type_ref
            .generic_arguments
            .iter()
            .map(|arg| {
                if arg.is_generic_placeholder {
                    Some(arg.name.clone())
                } else {
                    format_type_name(Some(arg), namespaces)
                }
            })
            .collect::<Option<Vec<_>>>()?;
        name.push(symbols::GENERIC_OPEN);
        name.push_str(&arguments.join(symbols::LIST_SEPARATOR));
        name.push(symbols::GENERIC_CLOSE);
    }

    if type_ref.is_array {
        name.push_str(&format_array_dimensions(&type_ref.array_dimensions));
    }

    if type_ref.is_tuple {
        name = format_tuple(type_ref, namespaces)?;
    }

    Some(name)
}

/// One bracket group per dimension, `rank - 1` commas inside
fn format_array_dimensions(dimensions: &[u32]) -> String {
    if dimensions.is_empty() {
        return format!("{}{}", symbols::ARRAY_OPEN, symbols::ARRAY_CLOSE);
    }

    let mut out = String::new();
    for rank in dimensions {
        out.push(symbols::ARRAY_OPEN);
        for _ in 1..*rank {
            out.push(symbols::ARRAY_RANK_SEPARATOR);
        }
        out.push(symbols::ARRAY_CLOSE);
    }
    out
}

fn format_tuple(type_ref: &TypeRef, namespaces: &NamespaceManager) -> Option<String> {
    let elements = type_ref
        .tuple_elements
        .iter()
        .map(|element| {
            let type_name = format_type_name(Some(&element.element_type), namespaces)?;
            if element.has_default_name || element.name.is_empty() {
                Some(type_name)
            } else {
                Some(format!("{} {}", type_name, element.name))
            }
        })
        .collect::<Option<Vec<_>>>()?;
    Some(format!("({})", elements.join(symbols::LIST_SEPARATOR)))
}
