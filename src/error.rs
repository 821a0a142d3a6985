//! Error types for the code-model SDK

use crate::model::ContainerId;
use crate::render::scoping::NamespaceError;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Code-model errors
#[derive(Error, Debug)]
pub enum Error {
    /// The receiver model was handed over before the provider finished loading it
    #[error("{kind} '{name}' is not loaded")]
    NotLoaded { kind: &'static str, name: String },

    #[error("Cannot render type name: {0}")]
    UnknownType(String),

    #[error("No container with id {0} in the model")]
    UnknownContainer(ContainerId),

    #[error("Cannot resolve enum model: {0}")]
    UnresolvedEnum(String),

    #[error("Model parse error: {0}")]
    ModelParse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Namespace(#[from] NamespaceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn not_loaded(kind: &'static str, name: impl Into<String>) -> Self {
        Error::NotLoaded {
            kind,
            name: name.into(),
        }
    }
}
