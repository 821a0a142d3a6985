//! Container (type-level declaration) and enum models

use super::{Attribute, GenericParameter, Member, Security, TypeRef};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

fn default_true() -> bool {
    true
}

/// Discriminant of a container declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContainerType {
    Class,
    Interface,
    Structure,
    Record,
    RecordStructure,
}

impl ContainerType {
    /// Kinds that may name a base class
    pub fn supports_base_class(self) -> bool {
        matches!(self, ContainerType::Class | ContainerType::Record)
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::lexical::container_keyword(*self))
    }
}

/// A class, interface, structure, record or record structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Container {
    pub kind: ContainerType,

    pub name: String,

    #[serde(default)]
    pub namespace: String,

    #[serde(default)]
    pub security: Security,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_parameters: Vec<GenericParameter>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inherited_interfaces: Vec<TypeRef>,

    /// Only meaningful for classes and records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_class: Option<TypeRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Member>,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default)]
    pub is_abstract: bool,

    #[serde(default)]
    pub is_sealed: bool,

    #[serde(default = "default_true")]
    pub is_loaded: bool,
}

impl Container {
    pub fn new(kind: ContainerType, namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            namespace: namespace.into(),
            security: Security::Public,
            attributes: Vec::new(),
            generic_parameters: Vec::new(),
            inherited_interfaces: Vec::new(),
            base_class: None,
            members: Vec::new(),
            is_static: false,
            is_abstract: false,
            is_sealed: false,
            is_loaded: true,
        }
    }

    pub fn class(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(ContainerType::Class, namespace, name)
    }

    pub fn interface(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(ContainerType::Interface, namespace, name)
    }

    pub fn with_member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn implementing(mut self, interface: TypeRef) -> Self {
        self.inherited_interfaces.push(interface);
        self
    }

    pub fn with_base_class(mut self, base: TypeRef) -> Self {
        self.base_class = Some(base);
        self
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ContainerType::Interface
    }

    /// A reference to this container's own definition
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::named(self.namespace.clone(), self.name.clone())
    }

    pub fn full_name(&self) -> String {
        self.type_ref().full_name()
    }
}

/// A named value of an enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EnumValue {
    pub name: String,

    /// Stored literal, compared ordinally against raw constant values
    pub value: String,
}

/// An enumeration definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EnumModel {
    pub name: String,

    #[serde(default)]
    pub namespace: String,

    #[serde(default)]
    pub values: Vec<EnumValue>,

    #[serde(default = "default_true")]
    pub is_loaded: bool,
}

impl EnumModel {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            values: Vec::new(),
            is_loaded: true,
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.push(EnumValue {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// The member whose stored literal equals `raw`
    pub fn find_by_literal(&self, raw: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.value == raw)
    }
}
