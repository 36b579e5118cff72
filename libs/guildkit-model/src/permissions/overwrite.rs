use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};

use super::PermissionMask;
use crate::wire::{Snowflake, ToWire, wire_tokens};

wire_tokens! {
    /// Subject an overwrite applies to.
    pub enum OverwriteKind ("overwrite type") {
        Role => "role",
        Member => "member",
    }
}

/// Per-subject allow/deny pair applied on top of base permissions for one
/// channel.
///
/// An overwrite never grants and denies the same bit: the builder methods
/// move bits between the two masks, and decoding resolves overlap in favour
/// of `deny`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PermissionOverwrite {
    id: Snowflake,
    #[serde(rename = "type")]
    kind: OverwriteKind,
    allow: PermissionMask,
    deny: PermissionMask,
}

impl PermissionOverwrite {
    /// A neutral overwrite (nothing allowed, nothing denied).
    #[must_use]
    pub const fn new(id: Snowflake, kind: OverwriteKind) -> Self {
        Self {
            id,
            kind,
            allow: PermissionMask::empty(),
            deny: PermissionMask::empty(),
        }
    }

    #[must_use]
    pub const fn for_role(role_id: Snowflake) -> Self {
        Self::new(role_id, OverwriteKind::Role)
    }

    #[must_use]
    pub const fn for_member(user_id: Snowflake) -> Self {
        Self::new(user_id, OverwriteKind::Member)
    }

    /// Builds an overwrite from raw masks. Bits present in both are kept
    /// only in `deny`.
    #[must_use]
    pub fn from_parts(
        id: Snowflake,
        kind: OverwriteKind,
        allow: PermissionMask,
        deny: PermissionMask,
    ) -> Self {
        let overlap = allow & deny;
        if !overlap.is_empty() {
            tracing::warn!(
                subject = %id,
                kind = %kind,
                overlap = overlap.bits(),
                "permission overwrite both allows and denies bits; deny wins"
            );
        }
        Self {
            id,
            kind,
            allow: allow.subtract(deny),
            deny,
        }
    }

    /// Grants `flags`, removing them from the deny set.
    #[must_use]
    pub const fn allow(mut self, flags: PermissionMask) -> Self {
        self.allow = self.allow.union(flags);
        self.deny = self.deny.subtract(flags);
        self
    }

    /// Denies `flags`, removing them from the allow set.
    #[must_use]
    pub const fn deny(mut self, flags: PermissionMask) -> Self {
        self.deny = self.deny.union(flags);
        self.allow = self.allow.subtract(flags);
        self
    }

    /// Returns `flags` to the inherited state (neither allowed nor denied).
    #[must_use]
    pub const fn inherit(mut self, flags: PermissionMask) -> Self {
        self.allow = self.allow.subtract(flags);
        self.deny = self.deny.subtract(flags);
        self
    }

    #[must_use]
    pub const fn id(&self) -> Snowflake {
        self.id
    }

    #[must_use]
    pub const fn kind(&self) -> OverwriteKind {
        self.kind
    }

    #[must_use]
    pub const fn allowed(&self) -> PermissionMask {
        self.allow
    }

    #[must_use]
    pub const fn denied(&self) -> PermissionMask {
        self.deny
    }

    /// True when this overwrite targets the given subject.
    #[must_use]
    pub fn targets(&self, kind: OverwriteKind, id: Snowflake) -> bool {
        self.kind == kind && self.id == id
    }

    /// Applies this overwrite to `mask`; deny beats allow.
    #[must_use]
    pub const fn apply(&self, mask: PermissionMask) -> PermissionMask {
        mask.union(self.allow).subtract(self.deny)
    }
}

#[derive(Deserialize)]
struct RawOverwrite {
    id: Snowflake,
    #[serde(rename = "type")]
    kind: OverwriteKind,
    #[serde(default)]
    allow: PermissionMask,
    #[serde(default)]
    deny: PermissionMask,
}

impl<'de> Deserialize<'de> for PermissionOverwrite {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawOverwrite::deserialize(deserializer)?;
        Ok(Self::from_parts(raw.id, raw.kind, raw.allow, raw.deny))
    }
}

impl ToWire for PermissionOverwrite {
    fn to_wire(&self) -> Value {
        json!({
            "id": self.id.to_wire(),
            "type": self.kind.as_token(),
            "allow": self.allow.bits(),
            "deny": self.deny.bits(),
        })
    }
}
