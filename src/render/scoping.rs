//! Namespace scoping for rendered type references
//!
//! A [`NamespaceManager`] holds the namespaces imported into a document
//! (each optionally aliased) plus the namespace the document declares. It
//! decides whether a type's namespace can be dropped, must be replaced by an
//! alias, or has to be written out in full.
//!
//! The manager is an immutable value: adding namespaces returns a new
//! manager and leaves the original untouched, so one instance can be shared
//! across any number of rendering calls.

use crate::lexical::{is_reserved_word, keywords, symbols};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Namespace Errors
// ============================================================================

/// Namespace validation errors with actionable messages
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NamespaceError {
    #[error("Namespace cannot be empty")]
    Empty,

    #[error("Namespace segment cannot be empty in '{0}'")]
    EmptySegment(String),

    #[error("Identifier must start with a letter or underscore, got '{0}'")]
    InvalidStart(char),

    #[error("Identifier contains invalid character: '{0}'")]
    InvalidChar(char),

    #[error("'{0}' is a reserved word and cannot be used as an alias")]
    ReservedAlias(String),
}

// ============================================================================
// Namespace References
// ============================================================================

/// An imported namespace, optionally aliased (`using FB = Foo.Bar;`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct NamespaceReference {
    pub namespace: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl NamespaceReference {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            alias: None,
        }
    }

    pub fn aliased(namespace: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            alias: Some(alias.into()),
        }
    }

    /// Check the namespace is a dotted identifier path and the alias a usable identifier
    pub fn validate(&self) -> Result<(), NamespaceError> {
        if self.namespace.is_empty() {
            return Err(NamespaceError::Empty);
        }
        for segment in self.namespace.split(symbols::NAMESPACE_SEPARATOR) {
            if segment.is_empty() {
                return Err(NamespaceError::EmptySegment(self.namespace.clone()));
            }
            validate_identifier(segment)?;
        }
        if let Some(alias) = &self.alias {
            validate_identifier(alias)?;
            if is_reserved_word(alias) {
                return Err(NamespaceError::ReservedAlias(alias.clone()));
            }
        }
        Ok(())
    }
}

impl fmt::Display for NamespaceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} = {}", alias, self.namespace),
            None => write!(f, "{}", self.namespace),
        }
    }
}

fn validate_identifier(ident: &str) -> Result<(), NamespaceError> {
    let mut chars = ident.chars();
    let Some(first_char) = chars.next() else {
        return Err(NamespaceError::Empty);
    };
    if !first_char.is_alphabetic() && first_char != '_' {
        return Err(NamespaceError::InvalidStart(first_char));
    }
    for c in chars {
        if !c.is_alphanumeric() && c != '_' {
            return Err(NamespaceError::InvalidChar(c));
        }
    }
    Ok(())
}

// ============================================================================
// Namespace Manager
// ============================================================================

/// Imported namespaces plus the document's own namespace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceManager {
    /// Sorted by namespace length, longest first
    entries: Vec<NamespaceReference>,
    current_namespace: Option<String>,
}

impl NamespaceManager {
    pub fn new(
        imports: impl IntoIterator<Item = NamespaceReference>,
        current_namespace: Option<&str>,
    ) -> Self {
        let mut entries: Vec<NamespaceReference> = imports.into_iter().collect();
        sort_longest_first(&mut entries);
        Self {
            entries,
            current_namespace: current_namespace
                .filter(|ns| !ns.is_empty())
                .map(String::from),
        }
    }

    /// A manager that qualifies every namespaced type in full
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[NamespaceReference] {
        &self.entries
    }

    pub fn current_namespace(&self) -> Option<&str> {
        self.current_namespace.as_deref()
    }

    /// The qualifier to write in front of a type from `namespace`
    ///
    /// `None` means no qualifier: the namespace is empty, imported without
    /// alias, or the document's own namespace. An imported alias wins over
    /// the namespace text; anything else qualifies with the namespace itself.
    pub fn resolve<'a>(&'a self, namespace: &'a str) -> Option<&'a str> {
        if namespace.is_empty() {
            return None;
        }

        if let Some(entry) = self.entries.iter().find(|e| e.namespace == namespace) {
            return entry.alias.as_deref();
        }

        if self.current_namespace.as_deref() == Some(namespace) {
            return None;
        }

        Some(namespace)
    }

    /// A new manager with one more imported namespace
    #[must_use]
    pub fn add_namespace(&self, reference: NamespaceReference) -> Self {
        self.add_namespaces(std::iter::once(reference))
    }

    /// A new manager with more imported namespaces; already imported ones are skipped
    #[must_use]
    pub fn add_namespaces(&self, references: impl IntoIterator<Item = NamespaceReference>) -> Self {
        let mut entries = self.entries.clone();
        for reference in references {
            if !entries.contains(&reference) {
                entries.push(reference);
            }
        }
        sort_longest_first(&mut entries);
        Self {
            entries,
            current_namespace: self.current_namespace.clone(),
        }
    }

    /// A new manager targeting a different document namespace
    #[must_use]
    pub fn with_current_namespace(&self, namespace: &str) -> Self {
        Self {
            entries: self.entries.clone(),
            current_namespace: Some(namespace).filter(|ns| !ns.is_empty()).map(String::from),
        }
    }
}

fn sort_longest_first(entries: &mut [NamespaceReference]) {
    // stable: equal lengths keep import order
    entries.sort_by(|a, b| b.namespace.len().cmp(&a.namespace.len()));
}

// ============================================================================
// Using Statements
// ============================================================================

/// Render `using [alias = ]namespace;`
///
/// An explicit `alias` wins; otherwise the reference's own alias is used when
/// `include_alias` is set.
pub fn format_using_statement(
    reference: &NamespaceReference,
    include_alias: bool,
    alias: Option<&str>,
) -> String {
    let alias = alias.or_else(|| {
        if include_alias {
            reference.alias.as_deref()
        } else {
            None
        }
    });

    match alias {
        Some(alias) => format!(
            "{} {}{}{}{}",
            keywords::USING,
            alias,
            symbols::ASSIGN,
            reference.namespace,
            symbols::STATEMENT_END
        ),
        None => format!(
            "{} {}{}",
            keywords::USING,
            reference.namespace,
            symbols::STATEMENT_END
        ),
    }
}
