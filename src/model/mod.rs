//! Structural code model: the read-only data the renderers consume
//!
//! A host hands over a graph of containers (classes, interfaces, structures,
//! records) and the enums they reference. The renderers and the
//! completeness analyzer only ever borrow it.
//!
//! ## Example model
//!
//! ```yaml
//! containers:
//!   - kind: interface
//!     namespace: Shapes
//!     name: IShape
//!     security: public
//!     members:
//!       - member: method
//!         name: Area
//!         security: public
//!         return_type: { name: Double, namespace: System, is_well_known: true, well_known_kind: double }
//!   - kind: class
//!     namespace: Shapes
//!     name: Circle
//!     security: public
//!     inherited_interfaces:
//!       - { name: IShape, namespace: Shapes }
//! enums:
//!   - namespace: Shapes
//!     name: Color
//!     values:
//!       - { name: Red, value: "1" }
//! ```

mod attributes;
mod containers;
mod members;
mod types;

pub use attributes::{Attribute, AttributeParameter, AttributeParameterValue};
pub use containers::{Container, ContainerType, EnumModel, EnumValue};
pub use members::{
    DefaultValue, Event, Field, Member, MemberType, Method, Parameter, Property, Security,
};
pub use types::{GenericParameter, TupleElement, TypeRef, WellKnownType};

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a container inside a [`CodeModel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub struct ContainerId(pub usize);

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read access to a materialized model graph
///
/// This is the seam to the structural-model provider: anything able to
/// look up containers by handle and resolve full models from a type
/// reference can drive the renderers and the completeness analyzer.
pub trait ModelSource {
    /// The container behind a handle
    fn container(&self, id: ContainerId) -> Option<&Container>;

    /// The container a type reference points at, if it is part of the model
    fn find_container(&self, type_ref: &TypeRef) -> Option<ContainerId>;

    /// The full enum model behind a type reference
    fn resolve_enum(&self, type_ref: &TypeRef) -> Result<&EnumModel>;
}

/// Arena of containers and enums
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CodeModel {
    #[serde(default)]
    pub containers: Vec<Container>,

    #[serde(default)]
    pub enums: Vec<EnumModel>,
}

impl CodeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a model graph from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_norway::from_str(yaml).map_err(|e| Error::ModelParse(e.to_string()))
    }

    /// Serialize the model graph to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(self).map_err(|e| Error::ModelParse(e.to_string()))
    }

    /// Parse a model graph from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::ModelParse(e.to_string()))
    }

    /// Serialize the model graph to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Json)
    }

    pub fn add_container(&mut self, container: Container) -> ContainerId {
        self.containers.push(container);
        ContainerId(self.containers.len() - 1)
    }

    pub fn add_enum(&mut self, model: EnumModel) {
        self.enums.push(model);
    }

    /// Handle of the container with the given namespace and name
    pub fn id_of(&self, namespace: &str, name: &str) -> Option<ContainerId> {
        self.containers
            .iter()
            .position(|c| c.namespace == namespace && c.name == name)
            .map(ContainerId)
    }

    pub fn ids(&self) -> impl Iterator<Item = ContainerId> {
        (0..self.containers.len()).map(ContainerId)
    }
}

impl ModelSource for CodeModel {
    fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(id.0)
    }

    fn find_container(&self, type_ref: &TypeRef) -> Option<ContainerId> {
        if !type_ref.is_loaded || type_ref.is_generic_placeholder {
            return None;
        }
        self.id_of(&type_ref.namespace, &type_ref.name)
    }

    fn resolve_enum(&self, type_ref: &TypeRef) -> Result<&EnumModel> {
        let model = self
            .enums
            .iter()
            .find(|e| type_ref.same_definition(&e.namespace, &e.name))
            .ok_or_else(|| Error::UnresolvedEnum(type_ref.full_name()))?;
        if !model.is_loaded {
            return Err(Error::not_loaded("enum", type_ref.full_name()));
        }
        Ok(model)
    }
}
