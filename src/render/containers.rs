//! Container headers

use super::{ensure_loaded, push_keyword, push_security, MemberFormatOptions, Renderer};
use crate::error::Result;
use crate::lexical::{container_keyword, keywords, runtime, symbols};
use crate::model::{Container, TypeRef, WellKnownType};

/// The universal root type is never written as a base class
fn is_root_object(base: &TypeRef) -> bool {
    (base.is_well_known && base.well_known_kind == WellKnownType::Object)
        || (base.namespace.eq_ignore_ascii_case(runtime::SYSTEM_NAMESPACE)
            && base.name.eq_ignore_ascii_case(runtime::OBJECT_TYPE))
}

impl Renderer<'_> {
    /// `[security ][static ][abstract |sealed ]kind name[<T>][: base, ifaces][ where ...]`
    pub fn container_header(&self, container: &Container, options: &MemberFormatOptions) -> Result<String> {
        ensure_loaded(container.is_loaded, "container", &container.full_name())?;

        let mut out = String::new();
        if options.include_attributes {
            out.push_str(&self.attribute_lines(&container.attributes));
        }
        if options.include_security {
            push_security(&mut out, options.effective_security(container.security));
        }
        if options.include_keywords {
            if container.is_static {
                push_keyword(&mut out, keywords::STATIC);
            }
            if container.is_abstract && !container.is_interface() {
                push_keyword(&mut out, keywords::ABSTRACT);
            } else if container.is_sealed {
                push_keyword(&mut out, keywords::SEALED);
            }
        }
        push_keyword(&mut out, container_keyword(container.kind));
        out.push_str(&container.name);
        out.push_str(&self.generic_parameter_list(&container.generic_parameters));

        let base = container
            .base_class
            .as_ref()
            .filter(|_| container.kind.supports_base_class())
            .filter(|b| !is_root_object(b));
        let inherited: Vec<String> = base
            .into_iter()
            .chain(container.inherited_interfaces.iter())
            .filter_map(|t| self.type_text(t))
            .collect();
        if !inherited.is_empty() {
            out.push_str(symbols::CONSTRAINT);
            out.push_str(&inherited.join(symbols::LIST_SEPARATOR));
        }

        for clause in container
            .generic_parameters
            .iter()
            .filter_map(|p| self.where_clause(p))
        {
            out.push(' ');
            out.push_str(&clause);
        }
        Ok(out)
    }
}
