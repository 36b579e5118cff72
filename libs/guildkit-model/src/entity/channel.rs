use serde::{Deserialize, Serialize};

use super::{AttachContext, Entity, Hydrated, Merge, User};
use crate::client::ClientHandle;
use crate::permissions::{
    OverwriteKind, PermissionMask, PermissionOverwrite, PermissionQuery,
    resolve_channel_permissions,
};
use crate::wire::{Snowflake, wire_codes};

wire_codes! {
    pub enum ChannelType ("channel type") {
        Text => 0,
        Dm => 1,
        Voice => 2,
        Group => 3,
        Category => 4,
    }
}

impl ChannelType {
    #[must_use]
    pub const fn is_guild(self) -> bool {
        matches!(self, Self::Text | Self::Voice | Self::Category)
    }
}

/// A channel inside a guild: text, voice or category.
///
/// Text-only fields (`topic`, `nsfw`, `rate_limit_per_user`) and voice-only
/// fields (`bitrate`, `user_limit`) stay absent on the other kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildChannel {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: ChannelType,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub guild_id: Hydrated<Snowflake>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub name: Hydrated<String>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub position: Hydrated<i32>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub parent_id: Hydrated<Option<Snowflake>>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub permission_overwrites: Hydrated<Vec<PermissionOverwrite>>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub topic: Hydrated<Option<String>>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub nsfw: Hydrated<bool>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub rate_limit_per_user: Hydrated<u32>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub bitrate: Hydrated<u32>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub user_limit: Hydrated<u32>,
    #[serde(skip)]
    ctx: ClientHandle,
}

impl GuildChannel {
    #[must_use]
    pub fn overwrites(&self) -> &[PermissionOverwrite] {
        self.permission_overwrites.get().map_or(&[], Vec::as_slice)
    }

    /// The overwrite for one role or member, if the channel has one.
    #[must_use]
    pub fn overwrite_for(&self, kind: OverwriteKind, id: Snowflake) -> Option<&PermissionOverwrite> {
        self.overwrites().iter().find(|o| o.targets(kind, id))
    }

    /// Effective permissions of a member in this channel.
    #[must_use]
    pub fn permissions_for(&self, query: &PermissionQuery<'_>) -> PermissionMask {
        resolve_channel_permissions(query, self.overwrites())
    }
}

impl AttachContext for GuildChannel {
    fn attach_context(&mut self, ctx: &ClientHandle) {
        self.ctx = ctx.clone();
    }
}

impl Entity for GuildChannel {
    const KIND: &'static str = "guild channel";

    fn id(&self) -> Option<Snowflake> {
        Some(self.id)
    }

    fn context(&self) -> &ClientHandle {
        &self.ctx
    }
}

impl Merge for GuildChannel {
    fn absorb(&mut self, partial: Self) {
        self.kind = partial.kind;
        self.guild_id.absorb(partial.guild_id);
        self.name.absorb(partial.name);
        self.position.absorb(partial.position);
        self.parent_id.absorb(partial.parent_id);
        self.permission_overwrites.absorb(partial.permission_overwrites);
        self.topic.absorb(partial.topic);
        self.nsfw.absorb(partial.nsfw);
        self.rate_limit_per_user.absorb(partial.rate_limit_per_user);
        self.bitrate.absorb(partial.bitrate);
        self.user_limit.absorb(partial.user_limit);
    }
}

/// A direct-message channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmChannel {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: ChannelType,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub last_message_id: Hydrated<Option<Snowflake>>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub recipients: Hydrated<Vec<User>>,
    #[serde(skip)]
    ctx: ClientHandle,
}

impl DmChannel {
    #[must_use]
    pub fn recipients(&self) -> &[User] {
        self.recipients.get().map_or(&[], Vec::as_slice)
    }
}

impl AttachContext for DmChannel {
    fn attach_context(&mut self, ctx: &ClientHandle) {
        self.ctx = ctx.clone();
        self.recipients.attach_context(ctx);
    }
}

impl Entity for DmChannel {
    const KIND: &'static str = "dm channel";

    fn id(&self) -> Option<Snowflake> {
        Some(self.id)
    }

    fn context(&self) -> &ClientHandle {
        &self.ctx
    }
}

impl Merge for DmChannel {
    fn absorb(&mut self, partial: Self) {
        self.kind = partial.kind;
        self.last_message_id.absorb(partial.last_message_id);
        self.recipients.absorb(partial.recipients);
    }
}
