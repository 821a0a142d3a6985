// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # codemodel: render and compare C# declarations
//!
//! A structural model of object-oriented declarations (containers, members,
//! generics, attributes, types) and deterministic renderers that turn it back
//! into C# source text.
//!
//! ## Core Concept
//!
//! A host (an IDE extension, a code generator) walks an existing codebase and
//! hands the model to this crate, which can:
//!
//! - **Render** declarations, type names, literals and `using` statements
//! - **Compare** members under a verbosity policy with a stable hash key
//! - **Check completeness** of a container against the interfaces it declares
//!
//! ## Quick Start
//!
//! ```rust
//! use codemodel::{
//!     CodeModel, Container, MemberFormatOptions, Method, NamespaceManager,
//!     NamespaceReference, Renderer, TypeRef, WellKnownType,
//! };
//!
//! let mut model = CodeModel::new();
//! model.add_container(
//!     Container::interface("Shapes", "IShape")
//!         .with_member(Method::new("Area").returning(TypeRef::well_known(WellKnownType::Double))),
//! );
//! let circle = model.add_container(
//!     Container::class("Shapes", "Circle").implementing(TypeRef::named("Shapes", "IShape")),
//! );
//!
//! let namespaces = NamespaceManager::new(vec![NamespaceReference::new("System")], Some("Shapes"));
//! let renderer = Renderer::new(&namespaces, &model);
//! let header = renderer
//!     .container_header(&model.containers[circle.0], &MemberFormatOptions::default())
//!     .unwrap();
//! assert_eq!(header, "public class Circle: IShape");
//!
//! let missing = codemodel::find_missing_interface_members(&model, circle).unwrap();
//! assert_eq!(missing[0].name(), "Area");
//! ```
//!
//! ## Failure handling
//!
//! Public `Renderer` entry points return [`Result`] and reject models that
//! were never loaded. Nested fragments that cannot be rendered are omitted.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.

pub mod compare;
pub mod completeness;
pub mod config;
pub mod error;
pub mod lexical;
pub mod model;
pub mod render;
pub mod util;

// Re-exports
pub use compare::{compute_comparison_key, ComparisonKey, ComparisonPolicy};
pub use completeness::{
    find_missing_interface_members, CompletenessReport, InterfaceCompletenessAnalyzer,
    MissingMember,
};
pub use config::{ComparisonConfig, FormatterConfig, NamespacesConfig};
pub use error::{Error, Result};
pub use model::{
    Attribute, AttributeParameter, AttributeParameterValue, CodeModel, Container, ContainerId,
    ContainerType, DefaultValue, EnumModel, EnumValue, Event, Field, GenericParameter, Member,
    MemberType, Method, ModelSource, Parameter, Property, Security, TupleElement, TypeRef,
    WellKnownType,
};
pub use render::{
    format_type_name, format_using_statement, format_value, AccessorBodyStyle,
    MemberFormatOptions, NamespaceError, NamespaceManager, NamespaceReference,
    PropertyFormatOptions, RenderConfig, Renderer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
