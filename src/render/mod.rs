//! Declaration rendering: model instances to C# source text
//!
//! Every renderer is a pure function of the model, the options and the
//! [`NamespaceManager`] it was built with. Rendering the same model twice
//! gives byte-identical text.
//!
//! Two tiers of failure handling:
//! - public entry points on [`Renderer`] return `Result` and fail with
//!   [`Error::NotLoaded`] when the model they are asked to render was never
//!   loaded by its provider;
//! - nested fragments (a type name, a default value, one attribute) render
//!   to `Option`, and a `None` fragment is left out of the declaration.

mod attributes;
mod containers;
mod members;
pub mod scoping;
mod types;
mod values;

pub use members::AccessorBodyStyle;
pub use scoping::{format_using_statement, NamespaceError, NamespaceManager, NamespaceReference};
pub use types::format_type_name;
pub use values::format_value;

use crate::error::{Error, Result};
use crate::lexical::security_keyword;
use crate::model::{ModelSource, Security, TypeRef};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Render configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RenderConfig {
    /// Indentation for multi-line bodies
    pub indent: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: "    ".into(),
        }
    }
}

/// Toggles shared by every declaration renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MemberFormatOptions {
    pub include_security: bool,
    pub include_attributes: bool,
    pub include_keywords: bool,
    /// `abstract` is only written when keywords are included as well
    pub include_abstract_keyword: bool,
    /// Render with this security instead of the model's
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_override: Option<Security>,
}

impl Default for MemberFormatOptions {
    fn default() -> Self {
        Self {
            include_security: true,
            include_attributes: true,
            include_keywords: true,
            include_abstract_keyword: false,
            security_override: None,
        }
    }
}

impl MemberFormatOptions {
    /// Name, types and parameters only
    pub fn signature_only() -> Self {
        Self {
            include_security: false,
            include_attributes: false,
            include_keywords: false,
            include_abstract_keyword: false,
            security_override: None,
        }
    }

    pub fn with_security_override(mut self, security: Security) -> Self {
        self.security_override = Some(security);
        self
    }

    pub fn with_attributes(mut self, include: bool) -> Self {
        self.include_attributes = include;
        self
    }

    pub fn with_abstract_keyword(mut self, include: bool) -> Self {
        self.include_abstract_keyword = include;
        self
    }

    fn effective_security(&self, declared: Security) -> Security {
        self.security_override.unwrap_or(declared)
    }
}

/// Property rendering toggles
///
/// An accessor override both changes the accessor's security and makes the
/// accessor render even when the model has none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PropertyFormatOptions {
    #[serde(flatten)]
    pub member: MemberFormatOptions,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_security_override: Option<Security>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_security_override: Option<Security>,
}

impl From<MemberFormatOptions> for PropertyFormatOptions {
    fn from(member: MemberFormatOptions) -> Self {
        Self {
            member,
            get_security_override: None,
            set_security_override: None,
        }
    }
}

impl PropertyFormatOptions {
    pub fn with_get_security(mut self, security: Security) -> Self {
        self.get_security_override = Some(security);
        self
    }

    pub fn with_set_security(mut self, security: Security) -> Self {
        self.set_security_override = Some(security);
        self
    }
}

/// Declaration renderer bound to one document's namespace scope
pub struct Renderer<'a> {
    namespaces: &'a NamespaceManager,
    source: &'a dyn ModelSource,
    config: RenderConfig,
}

impl<'a> Renderer<'a> {
    pub fn new(namespaces: &'a NamespaceManager, source: &'a dyn ModelSource) -> Self {
        Self {
            namespaces,
            source,
            config: RenderConfig::default(),
        }
    }

    pub fn with_config(
        namespaces: &'a NamespaceManager,
        source: &'a dyn ModelSource,
        config: RenderConfig,
    ) -> Self {
        Self {
            namespaces,
            source,
            config,
        }
    }

    pub fn namespaces(&self) -> &NamespaceManager {
        self.namespaces
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Type name as it should appear in this document
    pub fn type_name(&self, type_ref: &TypeRef) -> Result<String> {
        if !type_ref.is_loaded {
            return Err(Error::not_loaded("type", type_ref.full_name()));
        }
        format_type_name(Some(type_ref), self.namespaces)
            .ok_or_else(|| Error::UnknownType(type_ref.full_name()))
    }

    /// Literal text for `raw` interpreted as a constant of `type_ref`
    pub fn value(&self, type_ref: &TypeRef, raw: &str) -> Option<String> {
        format_value(Some(type_ref), raw, self.source)
    }

    pub(crate) fn type_text(&self, type_ref: &TypeRef) -> Option<String> {
        format_type_name(Some(type_ref), self.namespaces)
    }
}

pub(crate) fn ensure_loaded(is_loaded: bool, kind: &'static str, name: &str) -> Result<()> {
    if is_loaded {
        Ok(())
    } else {
        Err(Error::not_loaded(kind, name))
    }
}

/// Push `security` followed by a space, unless it has no keyword
pub(crate) fn push_security(out: &mut String, security: Security) {
    if let Some(keyword) = security_keyword(security) {
        out.push_str(keyword);
        out.push(' ');
    }
}

pub(crate) fn push_keyword(out: &mut String, keyword: &str) {
    out.push_str(keyword);
    out.push(' ');
}
