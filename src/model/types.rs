//! Type references and generic parameters

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Primitive categories with a fixed spelling in the target language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WellKnownType {
    #[default]
    NotWellKnown,
    Object,
    Void,
    Boolean,
    Character,
    SignedByte,
    UnsignedByte,
    Signed16BitInteger,
    Unsigned16BitInteger,
    Signed32BitInteger,
    Unsigned32BitInteger,
    Signed64BitInteger,
    Unsigned64BitInteger,
    Decimal,
    Single,
    Double,
    Pointer,
    PlatformPointer,
    DateTime,
    String,
}

impl WellKnownType {
    /// Every mapped category (excludes `NotWellKnown`)
    pub const ALL: [WellKnownType; 19] = [
        WellKnownType::Object,
        WellKnownType::Void,
        WellKnownType::Boolean,
        WellKnownType::Character,
        WellKnownType::SignedByte,
        WellKnownType::UnsignedByte,
        WellKnownType::Signed16BitInteger,
        WellKnownType::Unsigned16BitInteger,
        WellKnownType::Signed32BitInteger,
        WellKnownType::Unsigned32BitInteger,
        WellKnownType::Signed64BitInteger,
        WellKnownType::Unsigned64BitInteger,
        WellKnownType::Decimal,
        WellKnownType::Single,
        WellKnownType::Double,
        WellKnownType::Pointer,
        WellKnownType::PlatformPointer,
        WellKnownType::DateTime,
        WellKnownType::String,
    ];
}

fn default_true() -> bool {
    true
}

fn is_true(value: &bool) -> bool {
    *value
}

/// A reference to a data type at a use site
///
/// Decoration precedence when rendering is generic, then array, then tuple.
/// A reference flagged both array and tuple is never produced by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct TypeRef {
    pub name: String,

    #[serde(default)]
    pub namespace: String,

    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub is_loaded: bool,

    #[serde(default)]
    pub is_well_known: bool,

    #[serde(default)]
    pub well_known_kind: WellKnownType,

    #[serde(default)]
    pub is_generic: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_arguments: Vec<TypeRef>,

    #[serde(default)]
    pub is_array: bool,

    /// Rank per dimension; rank 2 renders as `[,]`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub array_dimensions: Vec<u32>,

    #[serde(default)]
    pub is_tuple: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tuple_elements: Vec<TupleElement>,

    #[serde(default)]
    pub is_enum: bool,

    /// The "type" is a generic parameter symbol such as `T`
    #[serde(default)]
    pub is_generic_placeholder: bool,
}

/// One element of a tuple type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TupleElement {
    #[serde(rename = "type")]
    pub element_type: TypeRef,

    pub name: String,

    /// Name was synthesized (`Item1`, ...) and is not written in source
    #[serde(default)]
    pub has_default_name: bool,
}

impl TupleElement {
    pub fn named(element_type: TypeRef, name: impl Into<String>) -> Self {
        Self {
            element_type,
            name: name.into(),
            has_default_name: false,
        }
    }

    pub fn unnamed(element_type: TypeRef, position: usize) -> Self {
        Self {
            element_type,
            name: format!("Item{}", position + 1),
            has_default_name: true,
        }
    }
}

impl TypeRef {
    /// A named (non primitive) type
    pub fn named(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            is_loaded: true,
            ..Default::default()
        }
    }

    /// A primitive with a fixed spelling
    pub fn well_known(kind: WellKnownType) -> Self {
        Self {
            name: crate::lexical::runtime_type_name(kind).to_string(),
            namespace: "System".into(),
            is_loaded: true,
            is_well_known: true,
            well_known_kind: kind,
            ..Default::default()
        }
    }

    /// A generic parameter symbol such as `T`
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_loaded: true,
            is_generic_placeholder: true,
            ..Default::default()
        }
    }

    pub fn tuple(elements: Vec<TupleElement>) -> Self {
        Self {
            name: "ValueTuple".into(),
            namespace: "System".into(),
            is_loaded: true,
            is_tuple: true,
            tuple_elements: elements,
            ..Default::default()
        }
    }

    /// An unloaded reference, as handed out by a provider that failed to bind it
    pub fn unloaded(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            is_loaded: false,
            ..Self::named(namespace, name)
        }
    }

    pub fn with_generic_arguments(mut self, arguments: Vec<TypeRef>) -> Self {
        self.is_generic = true;
        self.generic_arguments = arguments;
        self
    }

    pub fn with_array_dimensions(mut self, dimensions: Vec<u32>) -> Self {
        self.is_array = true;
        self.array_dimensions = dimensions;
        self
    }

    pub fn as_enum(mut self) -> Self {
        self.is_enum = true;
        self
    }

    /// `namespace.name`, or just the name for the global namespace
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Same namespace and name (decorations ignored)
    pub fn same_definition(&self, namespace: &str, name: &str) -> bool {
        self.namespace == namespace && self.name == name
    }
}

/// A type-parameter slot on a generic declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GenericParameter {
    pub name: String,

    #[serde(default)]
    pub has_class_constraint: bool,

    #[serde(default)]
    pub has_struct_constraint: bool,

    #[serde(default)]
    pub has_new_constraint: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraining_types: Vec<TypeRef>,

    /// The parameter's own symbol; defaults to a placeholder named after the parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TypeRef>,
}

impl GenericParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_class_constraint: false,
            has_struct_constraint: false,
            has_new_constraint: false,
            constraining_types: Vec::new(),
            placeholder: None,
        }
    }

    /// The symbol this parameter introduces
    pub fn symbol(&self) -> TypeRef {
        self.placeholder
            .clone()
            .unwrap_or_else(|| TypeRef::placeholder(&self.name))
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
            .as_ref()
            .map(|p| p.is_generic_placeholder)
            .unwrap_or(true)
    }

    pub fn has_constraints(&self) -> bool {
        self.has_class_constraint
            || self.has_struct_constraint
            || self.has_new_constraint
            || !self.constraining_types.is_empty()
    }
}
