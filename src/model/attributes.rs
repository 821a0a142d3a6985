//! Attribute models

use super::TypeRef;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An attribute applied to a container, member or parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub attribute_type: TypeRef,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<AttributeParameter>,
}

impl Attribute {
    pub fn new(attribute_type: TypeRef) -> Self {
        Self {
            attribute_type,
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: AttributeParameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// A positional or named attribute argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AttributeParameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub value: AttributeParameterValue,
}

impl AttributeParameter {
    pub fn positional(value: AttributeParameterValue) -> Self {
        Self { name: None, value }
    }

    pub fn named(name: impl Into<String>, value: AttributeParameterValue) -> Self {
        Self {
            name: Some(name.into()),
            value,
        }
    }
}

/// The value of an attribute argument
///
/// Array values nest; providers never produce cyclic nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttributeParameterValue {
    /// A constant, formatted according to its type
    Value {
        value: String,
        #[serde(rename = "type")]
        value_type: TypeRef,
    },
    /// A type literal, rendered as `typeof(...)`
    Type {
        #[serde(rename = "type")]
        type_value: TypeRef,
    },
    /// An enum member referenced by name
    Enum {
        #[serde(rename = "type")]
        enum_type: TypeRef,
        member: String,
    },
    Array { values: Vec<AttributeParameterValue> },
    Unknown,
}
