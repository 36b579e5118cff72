use serde::{Deserialize, Serialize};

use super::{AttachContext, Entity, Hydrated, Merge};
use crate::client::ClientHandle;
use crate::permissions::PermissionMask;
use crate::wire::Snowflake;

/// A guild role.
///
/// Role payloads do not carry their guild; `guild_id` is filled in by the
/// guild-scoped request helpers that fetched the role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Snowflake,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub name: Hydrated<String>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub color: Hydrated<u32>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub hoist: Hydrated<bool>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub position: Hydrated<i32>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub permissions: Hydrated<PermissionMask>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub managed: Hydrated<bool>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub mentionable: Hydrated<bool>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub guild_id: Hydrated<Snowflake>,
    #[serde(skip)]
    ctx: ClientHandle,
}

impl Role {
    /// True for the `@everyone` role, whose id equals its guild's id.
    #[must_use]
    pub fn is_everyone(&self) -> bool {
        self.guild_id.get() == Some(&self.id)
    }

    /// Granted permissions; empty when the snapshot omits them.
    #[must_use]
    pub fn permissions(&self) -> PermissionMask {
        self.permissions.get().copied().unwrap_or_default()
    }
}

impl AttachContext for Role {
    fn attach_context(&mut self, ctx: &ClientHandle) {
        self.ctx = ctx.clone();
    }
}

impl Entity for Role {
    const KIND: &'static str = "role";

    fn id(&self) -> Option<Snowflake> {
        Some(self.id)
    }

    fn context(&self) -> &ClientHandle {
        &self.ctx
    }
}

impl Merge for Role {
    fn absorb(&mut self, partial: Self) {
        self.name.absorb(partial.name);
        self.color.absorb(partial.color);
        self.hoist.absorb(partial.hoist);
        self.position.absorb(partial.position);
        self.permissions.absorb(partial.permissions);
        self.managed.absorb(partial.managed);
        self.mentionable.absorb(partial.mentionable);
        self.guild_id.absorb(partial.guild_id);
    }
}
