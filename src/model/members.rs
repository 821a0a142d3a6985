//! Member models: fields, properties, events and methods

use super::{Attribute, GenericParameter, TypeRef};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

fn default_true() -> bool {
    true
}

/// Accessibility of a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Security {
    #[default]
    Unknown,
    Public,
    Protected,
    Internal,
    Private,
    ProtectedInternal,
    PrivateProtected,
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::lexical::security_keyword(*self) {
            Some(keyword) => write!(f, "{}", keyword),
            None => write!(f, "unknown"),
        }
    }
}

/// Discriminant of [`Member`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MemberType {
    Event,
    Field,
    Method,
    Property,
}

impl fmt::Display for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberType::Event => write!(f, "event"),
            MemberType::Field => write!(f, "field"),
            MemberType::Method => write!(f, "method"),
            MemberType::Property => write!(f, "property"),
        }
    }
}

/// A member declared within a container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum Member {
    Event(Event),
    Field(Field),
    Method(Method),
    Property(Property),
}

impl Member {
    pub fn kind(&self) -> MemberType {
        match self {
            Member::Event(_) => MemberType::Event,
            Member::Field(_) => MemberType::Field,
            Member::Method(_) => MemberType::Method,
            Member::Property(_) => MemberType::Property,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Member::Event(e) => &e.name,
            Member::Field(f) => &f.name,
            Member::Method(m) => &m.name,
            Member::Property(p) => &p.name,
        }
    }

    pub fn security(&self) -> Security {
        match self {
            Member::Event(e) => e.security,
            Member::Field(f) => f.security,
            Member::Method(m) => m.security,
            Member::Property(p) => p.security,
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        match self {
            Member::Event(e) => &e.attributes,
            Member::Field(f) => &f.attributes,
            Member::Method(m) => &m.attributes,
            Member::Property(p) => &p.attributes,
        }
    }

    pub fn is_loaded(&self) -> bool {
        match self {
            Member::Event(e) => e.is_loaded,
            Member::Field(f) => f.is_loaded,
            Member::Method(m) => m.is_loaded,
            Member::Property(p) => p.is_loaded,
        }
    }
}

impl From<Event> for Member {
    fn from(e: Event) -> Self {
        Member::Event(e)
    }
}

impl From<Field> for Member {
    fn from(f: Field) -> Self {
        Member::Field(f)
    }
}

impl From<Method> for Member {
    fn from(m: Method) -> Self {
        Member::Method(m)
    }
}

impl From<Property> for Member {
    fn from(p: Property) -> Self {
        Member::Property(p)
    }
}

/// A field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Field {
    pub name: String,

    #[serde(default)]
    pub security: Security,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,

    #[serde(rename = "type")]
    pub data_type: TypeRef,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default)]
    pub is_read_only: bool,

    #[serde(default)]
    pub is_constant: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant_value: Option<String>,

    #[serde(default = "default_true")]
    pub is_loaded: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            security: Security::Private,
            attributes: Vec::new(),
            data_type,
            is_static: false,
            is_read_only: false,
            is_constant: false,
            constant_value: None,
            is_loaded: true,
        }
    }
}

/// A property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Property {
    pub name: String,

    #[serde(default)]
    pub security: Security,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,

    #[serde(rename = "type")]
    pub property_type: TypeRef,

    #[serde(default)]
    pub has_get: bool,

    #[serde(default)]
    pub get_security: Security,

    #[serde(default)]
    pub has_set: bool,

    #[serde(default)]
    pub set_security: Security,

    #[serde(default)]
    pub is_abstract: bool,

    #[serde(default)]
    pub is_virtual: bool,

    #[serde(default)]
    pub is_override: bool,

    #[serde(default)]
    pub is_sealed: bool,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default = "default_true")]
    pub is_loaded: bool,
}

impl Property {
    /// A public read/write auto property
    pub fn new(name: impl Into<String>, property_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            security: Security::Public,
            attributes: Vec::new(),
            property_type,
            has_get: true,
            get_security: Security::Public,
            has_set: true,
            set_security: Security::Public,
            is_abstract: false,
            is_virtual: false,
            is_override: false,
            is_sealed: false,
            is_static: false,
            is_loaded: true,
        }
    }
}

/// An event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Event {
    pub name: String,

    #[serde(default)]
    pub security: Security,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,

    /// Delegate type of the handler
    #[serde(rename = "type")]
    pub event_type: TypeRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_method: Option<Method>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_method: Option<Method>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raise_method: Option<Method>,

    #[serde(default)]
    pub is_abstract: bool,

    #[serde(default)]
    pub is_virtual: bool,

    #[serde(default)]
    pub is_override: bool,

    #[serde(default)]
    pub is_sealed: bool,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default = "default_true")]
    pub is_loaded: bool,
}

impl Event {
    pub fn new(name: impl Into<String>, event_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            security: Security::Public,
            attributes: Vec::new(),
            event_type,
            add_method: None,
            remove_method: None,
            raise_method: None,
            is_abstract: false,
            is_virtual: false,
            is_override: false,
            is_sealed: false,
            is_static: false,
            is_loaded: true,
        }
    }
}

/// A method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Method {
    pub name: String,

    #[serde(default)]
    pub security: Security,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,

    /// Absent when the method returns void
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeRef>,

    #[serde(default)]
    pub is_void: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_parameters: Vec<GenericParameter>,

    #[serde(default)]
    pub is_abstract: bool,

    #[serde(default)]
    pub is_virtual: bool,

    #[serde(default)]
    pub is_override: bool,

    #[serde(default)]
    pub is_sealed: bool,

    #[serde(default)]
    pub is_static: bool,

    /// Provider's classification; declaration rendering infers `async` from the return type instead
    #[serde(default)]
    pub is_async: bool,

    #[serde(default)]
    pub is_extension: bool,

    #[serde(default = "default_true")]
    pub is_loaded: bool,
}

impl Method {
    /// A public void method without parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            security: Security::Public,
            attributes: Vec::new(),
            return_type: None,
            is_void: true,
            parameters: Vec::new(),
            generic_parameters: Vec::new(),
            is_abstract: false,
            is_virtual: false,
            is_override: false,
            is_sealed: false,
            is_static: false,
            is_async: false,
            is_extension: false,
            is_loaded: true,
        }
    }

    pub fn returning(mut self, return_type: TypeRef) -> Self {
        self.is_void = false;
        self.return_type = Some(return_type);
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn is_generic(&self) -> bool {
        !self.generic_parameters.is_empty()
    }
}

/// Default value carried by an optional parameter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DefaultValue {
    #[default]
    None,
    Value(String),
    DefaultKeyword,
    NullKeyword,
}

/// A method parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "type")]
    pub parameter_type: TypeRef,

    #[serde(default)]
    pub is_out: bool,

    #[serde(default)]
    pub is_ref: bool,

    #[serde(default)]
    pub is_params: bool,

    #[serde(default)]
    pub is_optional: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,

    #[serde(default)]
    pub default_value: DefaultValue,
}

impl Parameter {
    pub fn new(name: impl Into<String>, parameter_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            parameter_type,
            is_out: false,
            is_ref: false,
            is_params: false,
            is_optional: false,
            attributes: Vec::new(),
            default_value: DefaultValue::None,
        }
    }

    pub fn optional(mut self, default_value: DefaultValue) -> Self {
        self.is_optional = true;
        self.default_value = default_value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WellKnownType;

    #[test]
    fn test_member_accessors_dispatch_by_kind() {
        let member: Member = Field::new("count", TypeRef::well_known(WellKnownType::Signed32BitInteger)).into();
        assert_eq!(member.kind(), MemberType::Field);
        assert_eq!(member.name(), "count");
        assert_eq!(member.security(), Security::Private);
        assert!(member.is_loaded());
    }

    #[test]
    fn test_member_from_yaml() {
        let yaml = r#"
member: method
name: Bar
security: public
is_void: true
parameters:
  - name: id
    type: { name: Int32, namespace: System, is_well_known: true, well_known_kind: signed32_bit_integer }
    is_optional: true
    default_value: { kind: value, value: "0" }
"#;
        let member: Member = serde_norway::from_str(yaml).unwrap();
        let Member::Method(method) = member else {
            panic!("Expected method");
        };
        assert_eq!(method.parameters.len(), 1);
        assert_eq!(
            method.parameters[0].default_value,
            DefaultValue::Value("0".into())
        );
        assert!(method.is_loaded);
    }

    #[test]
    fn test_security_display() {
        assert_eq!(Security::ProtectedInternal.to_string(), "protected internal");
        assert_eq!(Security::Unknown.to_string(), "unknown");
    }
}
