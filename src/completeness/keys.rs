//! Comparable member sets over an inheritance graph

use crate::compare::{compute_comparison_key, ComparisonKey, ComparisonPolicy};
use crate::error::{Error, Result};
use crate::model::{Container, ContainerId, Member, ModelSource, TypeRef};
use crate::render::Renderer;
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::{debug, trace, warn};

/// Map key: the hash, or the full signature in strict mode
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum MemberKey {
    Hash(u64),
    Signature(String),
}

/// A member as seen through the comparison lens
#[derive(Debug, Clone)]
pub(crate) struct KeyedMember {
    pub origin: ContainerId,
    pub key: ComparisonKey,
    pub member: Member,
}

/// Insertion ordered; the first member seen for a key wins
pub(crate) type MemberSet = IndexMap<MemberKey, KeyedMember>;

enum Step {
    Enter(ContainerId),
    Exit(ContainerId),
}

pub(crate) struct KeyCollector<'r, 'a> {
    pub source: &'a dyn ModelSource,
    pub renderer: &'r Renderer<'a>,
    pub policy: ComparisonPolicy,
    pub strict: bool,
}

impl KeyCollector<'_, '_> {
    pub fn container(&self, id: ContainerId) -> Result<&Container> {
        self.source.container(id).ok_or(Error::UnknownContainer(id))
    }

    /// Handle of a referenced interface or base class, if the model has it
    pub fn resolve(&self, from: &Container, type_ref: &TypeRef) -> Option<ContainerId> {
        let found = self.source.find_container(type_ref);
        if found.is_none() {
            debug!(
                container = %from.full_name(),
                reference = %type_ref.full_name(),
                "inherited type not in model, skipped"
            );
        }
        found
    }

    /// Own members of `root` plus everything it inherits
    ///
    /// Interfaces contribute their inherited interfaces; other containers
    /// contribute their base class chain. Members are visited depth first in
    /// declaration order, so the first writer for a key is deterministic.
    pub fn collect(&self, root: ContainerId, into: &mut MemberSet) -> Result<()> {
        let mut visited: HashSet<ContainerId> = HashSet::new();
        let mut on_path: HashSet<ContainerId> = HashSet::new();
        let mut work = vec![Step::Enter(root)];

        while let Some(step) = work.pop() {
            let id = match step {
                Step::Exit(id) => {
                    on_path.remove(&id);
                    continue;
                }
                Step::Enter(id) => id,
            };

            if on_path.contains(&id) {
                warn!(container = %id, root = %root, "inheritance cycle, container not revisited");
                continue;
            }
            if !visited.insert(id) {
                trace!(container = %id, "already collected");
                continue;
            }

            let container = self.container(id)?;
            trace!(container = %container.full_name(), id = %id, "collecting members");
            for member in &container.members {
                self.insert(id, member, into)?;
            }

            on_path.insert(id);
            work.push(Step::Exit(id));

            let parents: Vec<&TypeRef> = if container.is_interface() {
                container.inherited_interfaces.iter().collect()
            } else {
                container.base_class.iter().collect()
            };
            for parent in parents.into_iter().rev() {
                if let Some(parent_id) = self.resolve(container, parent) {
                    work.push(Step::Enter(parent_id));
                }
            }
        }
        Ok(())
    }

    fn insert(&self, origin: ContainerId, member: &Member, into: &mut MemberSet) -> Result<()> {
        let key = compute_comparison_key(member, self.policy, self.renderer)?;
        let map_key = if self.strict {
            MemberKey::Signature(key.signature.clone())
        } else {
            MemberKey::Hash(key.hash)
        };
        into.entry(map_key).or_insert_with(|| KeyedMember {
            origin,
            key,
            member: member.clone(),
        });
        Ok(())
    }
}
