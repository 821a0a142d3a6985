//! Interface completeness analysis and its report

use super::keys::{KeyCollector, MemberSet};
use crate::compare::ComparisonPolicy;
use crate::error::Result;
use crate::model::{ContainerId, Member, ModelSource};
use crate::render::{NamespaceManager, Renderer};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of checking one container against its interfaces
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CompletenessReport {
    /// Full name of the analyzed container
    pub container: String,

    pub policy: ComparisonPolicy,

    /// Distinct members required by the directly inherited interfaces
    pub required: usize,

    /// Required members with no counterpart, in discovery order
    pub missing: Vec<MissingMember>,

    pub is_complete: bool,
}

/// A required member the container does not provide
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MissingMember {
    /// Full name of the interface that declares the member
    pub interface: String,

    /// Canonical declaration the member was compared by
    pub signature: String,

    /// `sha256:` prefixed comparison hash
    pub key: String,

    pub member: Member,
}

/// Finds interface members a container fails to implement
///
/// Members are compared by [`ComparisonKey`](crate::ComparisonKey) under the
/// configured policy (security by default). Type names are fully qualified
/// unless a namespace scope is supplied.
#[derive(Debug, Clone, Default)]
pub struct InterfaceCompletenessAnalyzer {
    policy: ComparisonPolicy,
    strict: bool,
    namespaces: NamespaceManager,
}

impl InterfaceCompletenessAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: ComparisonPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Compare by full signature instead of by hash
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_namespaces(mut self, namespaces: NamespaceManager) -> Self {
        self.namespaces = namespaces;
        self
    }

    pub fn policy(&self) -> ComparisonPolicy {
        self.policy
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Check `container` and describe what is missing
    pub fn analyze(&self, source: &dyn ModelSource, container: ContainerId) -> Result<CompletenessReport> {
        let renderer = Renderer::new(&self.namespaces, source);
        let collector = KeyCollector {
            source,
            renderer: &renderer,
            policy: self.policy,
            strict: self.strict,
        };

        let target = collector.container(container)?;
        let mut report = CompletenessReport {
            container: target.full_name(),
            policy: self.policy,
            required: 0,
            missing: Vec::new(),
            is_complete: true,
        };

        if target.is_interface() || target.inherited_interfaces.is_empty() {
            debug!(container = %report.container, "nothing to implement");
            return Ok(report);
        }

        let mut local = MemberSet::new();
        collector.collect(container, &mut local)?;

        let mut required = MemberSet::new();
        for interface in &target.inherited_interfaces {
            if let Some(id) = collector.resolve(target, interface) {
                collector.collect(id, &mut required)?;
            }
        }

        report.required = required.len();
        for (key, entry) in required {
            if local.contains_key(&key) {
                continue;
            }
            report.missing.push(MissingMember {
                interface: collector.container(entry.origin)?.full_name(),
                signature: entry.key.signature.clone(),
                key: entry.key.to_string(),
                member: entry.member,
            });
        }
        report.is_complete = report.missing.is_empty();

        debug!(
            container = %report.container,
            required = report.required,
            missing = report.missing.len(),
            "completeness analyzed"
        );
        Ok(report)
    }

    /// Required members `container` does not provide
    pub fn missing_members(&self, source: &dyn ModelSource, container: ContainerId) -> Result<Vec<Member>> {
        let report = self.analyze(source, container)?;
        Ok(report.missing.into_iter().map(|m| m.member).collect())
    }
}

/// Interface members `container` fails to implement, compared by security
/// policy with fully qualified type names
///
/// Interfaces, and containers that inherit no interfaces, are trivially
/// complete.
pub fn find_missing_interface_members(source: &dyn ModelSource, container: ContainerId) -> Result<Vec<Member>> {
    InterfaceCompletenessAnalyzer::new().missing_members(source, container)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{CodeModel, Container, Method, Property, Security, TypeRef, WellKnownType};

    fn int() -> TypeRef {
        TypeRef::well_known(WellKnownType::Signed32BitInteger)
    }

    fn ifoo() -> Container {
        Container::interface("Demo", "IFoo")
            .with_member(Method::new("M").returning(int()))
            .with_member(Property::new("P", TypeRef::well_known(WellKnownType::String)))
    }

    #[test]
    fn test_reports_unimplemented_members() {
        let mut model = CodeModel::new();
        model.add_container(ifoo());
        let bar = model.add_container(
            Container::class("Demo", "Bar")
                .implementing(TypeRef::named("Demo", "IFoo"))
                .with_member(Method::new("M").returning(int())),
        );

        let missing = find_missing_interface_members(&model, bar).unwrap();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].name(), "P");
    }

    #[test]
    fn test_interface_and_plain_class_are_complete() {
        let mut model = CodeModel::new();
        let foo = model.add_container(ifoo());
        let plain = model.add_container(Container::class("Demo", "Plain"));

        assert!(find_missing_interface_members(&model, foo).unwrap().is_empty());
        assert!(find_missing_interface_members(&model, plain).unwrap().is_empty());
    }

    #[test]
    fn test_security_policy_counts_security_mismatch_as_missing() {
        let mut model = CodeModel::new();
        model.add_container(ifoo());
        let mut m = Method::new("M").returning(int());
        m.security = Security::Internal;
        let bar = model.add_container(
            Container::class("Demo", "Bar")
                .implementing(TypeRef::named("Demo", "IFoo"))
                .with_member(m)
                .with_member(Property::new("P", TypeRef::well_known(WellKnownType::String))),
        );

        let by_security = InterfaceCompletenessAnalyzer::new().analyze(&model, bar).unwrap();
        assert_eq!(by_security.missing.len(), 1);
        assert_eq!(by_security.missing[0].interface, "Demo.IFoo");
        assert_eq!(by_security.missing[0].signature, "public int M()");

        let by_base = InterfaceCompletenessAnalyzer::new()
            .with_policy(ComparisonPolicy::Base)
            .analyze(&model, bar)
            .unwrap();
        assert!(by_base.is_complete);
        assert_eq!(by_base.required, 2);
    }

    #[test]
    fn test_unknown_container_is_an_error() {
        let model = CodeModel::new();
        let err = find_missing_interface_members(&model, ContainerId(3)).unwrap_err();
        assert!(matches!(err, Error::UnknownContainer(ContainerId(3))));
    }
}
