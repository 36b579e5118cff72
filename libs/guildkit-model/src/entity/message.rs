use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AttachContext, Entity, GuildMember, Hydrated, Merge, User};
use crate::client::ClientHandle;
use crate::error::ModelError;
use crate::wire::{Snowflake, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedImage {
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

impl fmt::Display for EmbedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.url, self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedVideo {
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

impl fmt::Display for EmbedVideo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.url, self.width, self.height)
    }
}

/// Rich content attached to a message. Every part is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<EmbedVideo>,
}

/// A message posted in a channel.
///
/// In guild channels the payload also carries a `member` fragment for the
/// author (no `user`, no `guild_id`); [`Message::author_member`] combines the
/// two into a full [`GuildMember`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub guild_id: Hydrated<Snowflake>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub author: Hydrated<User>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub member: Hydrated<GuildMember>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub content: Hydrated<String>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub timestamp: Hydrated<Timestamp>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub edited_timestamp: Hydrated<Option<Timestamp>>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub tts: Hydrated<bool>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub mention_everyone: Hydrated<bool>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub mentions: Hydrated<Vec<User>>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub mention_roles: Hydrated<Vec<Snowflake>>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub embeds: Hydrated<Vec<Embed>>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub pinned: Hydrated<bool>,
    #[serde(skip)]
    ctx: ClientHandle,
}

impl Message {
    #[must_use]
    pub fn mentions(&self) -> &[User] {
        self.mentions.get().map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn embeds(&self) -> &[Embed] {
        self.embeds.get().map_or(&[], Vec::as_slice)
    }

    /// The author as a guild member, for messages posted in a guild.
    ///
    /// Returns `Ok(None)` outside guilds (no `guild_id`) and when the
    /// payload has no `member` fragment.
    ///
    /// # Errors
    /// Returns [`ModelError::Incomplete`] when the snapshot has no author,
    /// and [`ModelError::IdentityMismatch`] if the fragment names another
    /// user.
    pub fn author_member(&self) -> Result<Option<GuildMember>, ModelError> {
        let (Some(guild_id), Some(fragment)) = (self.guild_id.get(), self.member.get()) else {
            return Ok(None);
        };
        let author = self.author.require(Self::KIND, "author")?;
        GuildMember::from_user(author.clone(), *guild_id, Some(fragment.clone())).map(Some)
    }
}

impl AttachContext for Message {
    fn attach_context(&mut self, ctx: &ClientHandle) {
        self.ctx = ctx.clone();
        self.author.attach_context(ctx);
        self.member.attach_context(ctx);
        self.mentions.attach_context(ctx);
    }
}

impl Entity for Message {
    const KIND: &'static str = "message";

    fn id(&self) -> Option<Snowflake> {
        Some(self.id)
    }

    fn context(&self) -> &ClientHandle {
        &self.ctx
    }
}

impl Merge for Message {
    fn absorb(&mut self, partial: Self) {
        self.channel_id = partial.channel_id;
        self.guild_id.absorb(partial.guild_id);
        self.author.absorb_entity(partial.author);
        self.member.absorb_entity(partial.member);
        self.content.absorb(partial.content);
        self.timestamp.absorb(partial.timestamp);
        self.edited_timestamp.absorb(partial.edited_timestamp);
        self.tts.absorb(partial.tts);
        self.mention_everyone.absorb(partial.mention_everyone);
        self.mentions.absorb(partial.mentions);
        self.mention_roles.absorb(partial.mention_roles);
        self.embeds.absorb(partial.embeds);
        self.pinned.absorb(partial.pinned);
    }
}
