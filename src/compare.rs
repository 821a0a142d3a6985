//! Member comparison keys
//!
//! A member is rendered under a verbosity policy and the resulting canonical
//! declaration text is hashed. Two members are the same under a policy when
//! their canonical texts are identical; the hash is a fast pre-filter and
//! the signature is kept alongside it for callers that cannot accept
//! collisions.
//!
//! Attributes never take part in a comparison.

use crate::error::Result;
use crate::model::Member;
use crate::render::{MemberFormatOptions, Renderer};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// How much of a declaration takes part in a comparison
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonPolicy {
    /// Type, name, generics and parameters
    Base,
    /// Base plus security
    #[default]
    Security,
    /// Security plus keywords (including `abstract`)
    Full,
}

impl ComparisonPolicy {
    /// Render options that select this policy's axes
    pub fn format_options(self) -> MemberFormatOptions {
        let include_keywords = self == ComparisonPolicy::Full;
        MemberFormatOptions {
            include_security: self >= ComparisonPolicy::Security,
            include_attributes: false,
            include_keywords,
            include_abstract_keyword: include_keywords,
            security_override: None,
        }
    }
}

impl fmt::Display for ComparisonPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComparisonPolicy::Base => "base",
            ComparisonPolicy::Security => "security",
            ComparisonPolicy::Full => "full",
        };
        write!(f, "{}", s)
    }
}

/// Canonical signature of a member and its hash
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ComparisonKey {
    /// First eight bytes of the SHA-256 of `signature`, big endian
    pub hash: u64,
    pub signature: String,
}

impl ComparisonKey {
    pub fn from_signature(signature: impl Into<String>) -> Self {
        let signature = signature.into();
        let digest = Sha256::digest(signature.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        Self {
            hash: u64::from_be_bytes(prefix),
            signature,
        }
    }
}

impl fmt::Display for ComparisonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sha256:{}", hex::encode(self.hash.to_be_bytes()))
    }
}

/// Comparison key of `member` under `policy`
///
/// Fails with [`Error::NotLoaded`](crate::Error::NotLoaded) for a member
/// that was never loaded.
pub fn compute_comparison_key(
    member: &Member,
    policy: ComparisonPolicy,
    renderer: &Renderer<'_>,
) -> Result<ComparisonKey> {
    let signature = renderer.member(member, &policy.format_options())?;
    Ok(ComparisonKey::from_signature(signature))
}
