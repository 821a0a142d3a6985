//! Member declarations: fields, properties, events and methods

use super::{
    ensure_loaded, format_value, push_keyword, push_security, MemberFormatOptions,
    PropertyFormatOptions, Renderer,
};
use crate::error::Result;
use crate::lexical::{keywords, runtime, symbols};
use crate::model::{
    DefaultValue, Event, Field, GenericParameter, Member, Method, Parameter, Property, Security,
    TypeRef,
};
use crate::util::default_backing_field_name;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Accessor body shape for properties backed by a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccessorBodyStyle {
    /// `get => _field;`
    #[default]
    Expression,
    /// `get { return _field; }`
    Block,
}

/// One accessor selected for rendering, with the prefix it needs
struct Accessor {
    keyword: &'static str,
    security: Option<Security>,
}

impl Accessor {
    fn head(&self) -> String {
        let mut out = String::new();
        if let Some(security) = self.security {
            push_security(&mut out, security);
        }
        out.push_str(self.keyword);
        out
    }
}

/// Push `text` followed by a space when the fragment rendered
fn push_fragment(out: &mut String, text: Option<String>) {
    if let Some(text) = text {
        out.push_str(&text);
        out.push(' ');
    }
}

fn push_inheritance_keyword(
    out: &mut String,
    is_override: bool,
    is_abstract: bool,
    is_virtual: bool,
    options: &MemberFormatOptions,
) {
    if is_override {
        push_keyword(out, keywords::OVERRIDE);
    } else if is_abstract && options.include_abstract_keyword {
        push_keyword(out, keywords::ABSTRACT);
    } else if is_virtual {
        push_keyword(out, keywords::VIRTUAL);
    }
}

fn returns_task(return_type: Option<&TypeRef>) -> bool {
    return_type
        .map(|t| t.same_definition(runtime::TASK_NAMESPACE, runtime::TASK_TYPE))
        .unwrap_or(false)
}

impl Renderer<'_> {
    // =========================================================================
    // Fields
    // =========================================================================

    /// `[attrs\n][security ][static ][readonly ][const ]type name[ = value];`
    ///
    /// `const` and the constant value do not depend on `include_keywords`.
    pub fn field(&self, field: &Field, options: &MemberFormatOptions) -> Result<String> {
        ensure_loaded(field.is_loaded, "field", &field.name)?;

        let mut out = String::new();
        if options.include_attributes {
            out.push_str(&self.attribute_lines(&field.attributes));
        }
        if options.include_security {
            push_security(&mut out, options.effective_security(field.security));
        }
        if options.include_keywords {
            if field.is_static {
                push_keyword(&mut out, keywords::STATIC);
            }
            if field.is_read_only {
                push_keyword(&mut out, keywords::READONLY);
            }
        }
        if field.is_constant {
            push_keyword(&mut out, keywords::CONST);
        }
        push_fragment(&mut out, self.type_text(&field.data_type));
        out.push_str(&field.name);

        if field.is_constant {
            let value = field
                .constant_value
                .as_deref()
                .and_then(|raw| format_value(Some(&field.data_type), raw, self.source));
            if let Some(value) = value {
                out.push_str(symbols::ASSIGN);
                out.push_str(&value);
            }
        }
        out.push(symbols::STATEMENT_END);
        Ok(out)
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// `[sealed ][security ][static ][override |abstract |virtual ]type name { get; set; }`
    ///
    /// An accessor is prefixed with its security only when it differs from
    /// the property's. An accessor override renders the accessor even when
    /// the property does not have one.
    pub fn property(&self, property: &Property, options: &PropertyFormatOptions) -> Result<String> {
        ensure_loaded(property.is_loaded, "property", &property.name)?;

        let mut out = self.property_head(property, &options.member);
        let accessors = self.accessors(property, options);
        out.push(' ');
        out.push(symbols::BLOCK_OPEN);
        out.push(' ');
        for accessor in &accessors {
            out.push_str(&accessor.head());
            out.push(symbols::STATEMENT_END);
            out.push(' ');
        }
        out.push(symbols::BLOCK_CLOSE);
        Ok(out)
    }

    /// Property as declared on an interface: no security or keywords, and
    /// only the accessors that are public
    pub fn interface_property(&self, property: &Property, include_attributes: bool) -> Result<String> {
        ensure_loaded(property.is_loaded, "property", &property.name)?;

        let mut out = String::new();
        if include_attributes {
            out.push_str(&self.attribute_lines(&property.attributes));
        }
        push_fragment(&mut out, self.type_text(&property.property_type));
        out.push_str(&property.name);
        out.push_str(" { ");
        if property.has_get && property.get_security == Security::Public {
            out.push_str(keywords::GET);
            out.push_str("; ");
        }
        if property.has_set && property.set_security == Security::Public {
            out.push_str(keywords::SET);
            out.push_str("; ");
        }
        out.push(symbols::BLOCK_CLOSE);
        Ok(out)
    }

    /// Property whose accessors read and write a backing field
    ///
    /// The body is laid out one accessor per line, indented with
    /// [`RenderConfig::indent`](super::RenderConfig). Without an explicit
    /// field name the field is the camel-cased property name prefixed with
    /// an underscore.
    pub fn property_with_backing_field(
        &self,
        property: &Property,
        backing_field: Option<&str>,
        style: AccessorBodyStyle,
        options: &PropertyFormatOptions,
    ) -> Result<String> {
        ensure_loaded(property.is_loaded, "property", &property.name)?;

        let field = backing_field
            .map(str::to_string)
            .unwrap_or_else(|| default_backing_field_name(&property.name));
        let indent = &self.config.indent;

        let mut out = self.property_head(property, &options.member);
        out.push('\n');
        out.push(symbols::BLOCK_OPEN);
        out.push('\n');
        for accessor in self.accessors(property, options) {
            let body = match (style, accessor.keyword) {
                (AccessorBodyStyle::Expression, keywords::GET) => format!("{}{};", symbols::LAMBDA, field),
                (AccessorBodyStyle::Expression, _) => {
                    format!("{}{}{}{};", symbols::LAMBDA, field, symbols::ASSIGN, keywords::VALUE)
                }
                (AccessorBodyStyle::Block, keywords::GET) => {
                    format!(" {{ {} {}; }}", keywords::RETURN, field)
                }
                (AccessorBodyStyle::Block, _) => {
                    format!(" {{ {}{}{}; }}", field, symbols::ASSIGN, keywords::VALUE)
                }
            };
            out.push_str(indent);
            out.push_str(&accessor.head());
            out.push_str(&body);
            out.push('\n');
        }
        out.push(symbols::BLOCK_CLOSE);
        Ok(out)
    }

    fn property_head(&self, property: &Property, options: &MemberFormatOptions) -> String {
        let mut out = String::new();
        if options.include_attributes {
            out.push_str(&self.attribute_lines(&property.attributes));
        }
        if options.include_keywords && property.is_sealed {
            push_keyword(&mut out, keywords::SEALED);
        }
        if options.include_security {
            push_security(&mut out, options.effective_security(property.security));
        }
        if options.include_keywords {
            if property.is_static {
                push_keyword(&mut out, keywords::STATIC);
            }
            push_inheritance_keyword(
                &mut out,
                property.is_override,
                property.is_abstract,
                property.is_virtual,
                options,
            );
        }
        push_fragment(&mut out, self.type_text(&property.property_type));
        out.push_str(&property.name);
        out
    }

    fn accessors(&self, property: &Property, options: &PropertyFormatOptions) -> Vec<Accessor> {
        let property_security = options.member.effective_security(property.security);
        let prefix = |security: Security| {
            (options.member.include_security
                && security != Security::Unknown
                && security != property_security)
                .then_some(security)
        };

        let mut accessors = Vec::with_capacity(2);
        if property.has_get || options.get_security_override.is_some() {
            let security = options.get_security_override.unwrap_or(property.get_security);
            accessors.push(Accessor {
                keyword: keywords::GET,
                security: prefix(security),
            });
        }
        if property.has_set || options.set_security_override.is_some() {
            let security = options.set_security_override.unwrap_or(property.set_security);
            accessors.push(Accessor {
                keyword: keywords::SET,
                security: prefix(security),
            });
        }
        accessors
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// `[sealed ][security ][static ][override |abstract |virtual ]event type name;`
    pub fn event(&self, event: &Event, options: &MemberFormatOptions) -> Result<String> {
        ensure_loaded(event.is_loaded, "event", &event.name)?;

        let mut out = String::new();
        if options.include_attributes {
            out.push_str(&self.attribute_lines(&event.attributes));
        }
        if options.include_keywords && event.is_sealed {
            push_keyword(&mut out, keywords::SEALED);
        }
        if options.include_security {
            push_security(&mut out, options.effective_security(event.security));
        }
        if options.include_keywords {
            if event.is_static {
                push_keyword(&mut out, keywords::STATIC);
            }
            push_inheritance_keyword(
                &mut out,
                event.is_override,
                event.is_abstract,
                event.is_virtual,
                options,
            );
        }
        self.push_event_tail(&mut out, event);
        Ok(out)
    }

    /// `event type name;`
    pub fn interface_event(&self, event: &Event, include_attributes: bool) -> Result<String> {
        ensure_loaded(event.is_loaded, "event", &event.name)?;

        let mut out = String::new();
        if include_attributes {
            out.push_str(&self.attribute_lines(&event.attributes));
        }
        self.push_event_tail(&mut out, event);
        Ok(out)
    }

    fn push_event_tail(&self, out: &mut String, event: &Event) {
        push_keyword(out, keywords::EVENT);
        push_fragment(out, self.type_text(&event.event_type));
        out.push_str(&event.name);
        out.push(symbols::STATEMENT_END);
    }

    // =========================================================================
    // Methods
    // =========================================================================

    /// `[attrs\n][security ][static ][sealed ][abstract ][override ][virtual ][async ]return name<T>(params)[ where ...]`
    ///
    /// `async` is written when the return type is `System.Threading.Tasks.Task`
    /// (with or without a result argument). [`Method::is_async`] is not consulted.
    pub fn method(&self, method: &Method, options: &MemberFormatOptions) -> Result<String> {
        ensure_loaded(method.is_loaded, "method", &method.name)?;

        let mut out = String::new();
        if options.include_attributes {
            out.push_str(&self.attribute_lines(&method.attributes));
        }
        if options.include_security {
            push_security(&mut out, options.effective_security(method.security));
        }
        if options.include_keywords {
            if method.is_static {
                push_keyword(&mut out, keywords::STATIC);
            }
            if method.is_sealed {
                push_keyword(&mut out, keywords::SEALED);
            }
            if method.is_abstract && options.include_abstract_keyword {
                push_keyword(&mut out, keywords::ABSTRACT);
            }
            if method.is_override {
                push_keyword(&mut out, keywords::OVERRIDE);
            }
            if method.is_virtual {
                push_keyword(&mut out, keywords::VIRTUAL);
            }
            if returns_task(method.return_type.as_ref()) {
                push_keyword(&mut out, keywords::ASYNC);
            }
        }

        match method.return_type.as_ref().filter(|_| !method.is_void) {
            Some(return_type) => push_fragment(&mut out, self.type_text(return_type)),
            None => push_keyword(&mut out, keywords::VOID),
        }

        out.push_str(&method.name);
        out.push_str(&self.generic_parameter_list(&method.generic_parameters));
        out.push('(');
        out.push_str(&self.parameters(
            &method.parameters,
            method.is_extension,
            options.include_attributes,
        ));
        out.push(')');

        for clause in method.generic_parameters.iter().filter_map(|p| self.where_clause(p)) {
            out.push(' ');
            out.push_str(&clause);
        }
        Ok(out)
    }

    /// Comma separated parameter list, without the parentheses
    ///
    /// Each parameter renders `[attrs ][this ][out |ref |params ]type name[ = default]`;
    /// `this` only on the first parameter of an extension method.
    pub fn parameters(&self, parameters: &[Parameter], is_extension: bool, include_attributes: bool) -> String {
        parameters
            .iter()
            .enumerate()
            .map(|(index, parameter)| {
                self.parameter(parameter, is_extension && index == 0, include_attributes)
            })
            .collect::<Vec<_>>()
            .join(symbols::LIST_SEPARATOR)
    }

    fn parameter(&self, parameter: &Parameter, extension_target: bool, include_attributes: bool) -> String {
        let mut out = String::new();
        if include_attributes {
            push_fragment(&mut out, self.inline_attributes(&parameter.attributes));
        }
        if extension_target {
            push_keyword(&mut out, keywords::THIS);
        }
        if parameter.is_out {
            push_keyword(&mut out, keywords::OUT);
        } else if parameter.is_ref {
            push_keyword(&mut out, keywords::REF);
        } else if parameter.is_params {
            push_keyword(&mut out, keywords::PARAMS);
        }
        push_fragment(&mut out, self.type_text(&parameter.parameter_type));
        out.push_str(&parameter.name);

        let default = match &parameter.default_value {
            DefaultValue::None => None,
            DefaultValue::Value(raw) => format_value(Some(&parameter.parameter_type), raw, self.source),
            DefaultValue::DefaultKeyword => Some(keywords::DEFAULT.to_string()),
            DefaultValue::NullKeyword => Some(keywords::NULL.to_string()),
        };
        if let Some(default) = default {
            out.push_str(symbols::ASSIGN);
            out.push_str(&default);
        }
        out
    }

    /// `<T, U>`, or an empty string for a non-generic declaration
    pub fn generic_parameter_list(&self, parameters: &[GenericParameter]) -> String {
        if parameters.is_empty() {
            return String::new();
        }
        let names: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
        format!(
            "{}{}{}",
            symbols::GENERIC_OPEN,
            names.join(symbols::LIST_SEPARATOR),
            symbols::GENERIC_CLOSE
        )
    }

    /// `where T: class|struct[, types...][, new()]`
    ///
    /// `None` unless the parameter is a placeholder with at least one
    /// constraint.
    pub fn where_clause(&self, parameter: &GenericParameter) -> Option<String> {
        if !parameter.is_placeholder() || !parameter.has_constraints() {
            return None;
        }

        let mut constraints: Vec<String> = Vec::new();
        if parameter.has_class_constraint {
            constraints.push(keywords::CLASS.to_string());
        } else if parameter.has_struct_constraint {
            constraints.push(keywords::STRUCT.to_string());
        }
        constraints.extend(
            parameter
                .constraining_types
                .iter()
                .filter_map(|t| self.type_text(t)),
        );
        if parameter.has_new_constraint {
            constraints.push(keywords::NEW_CONSTRAINT.to_string());
        }
        if constraints.is_empty() {
            return None;
        }

        Some(format!(
            "{} {}{}{}",
            keywords::WHERE,
            parameter.name,
            symbols::CONSTRAINT,
            constraints.join(symbols::LIST_SEPARATOR)
        ))
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Render any member with the shared options
    pub fn member(&self, member: &Member, options: &MemberFormatOptions) -> Result<String> {
        match member {
            Member::Field(field) => self.field(field, options),
            Member::Property(property) => {
                self.property(property, &PropertyFormatOptions::from(options.clone()))
            }
            Member::Event(event) => self.event(event, options),
            Member::Method(method) => self.method(method, options),
        }
    }
}
