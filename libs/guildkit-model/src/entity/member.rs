use serde::{Deserialize, Serialize};

use super::{AttachContext, Entity, Hydrated, Merge, User, merge_into, same_id};
use crate::client::ClientHandle;
use crate::error::ModelError;
use crate::wire::{Snowflake, Timestamp};

/// A user's membership in one guild.
///
/// Member payloads embedded in messages omit `user` and `guild_id`; use
/// [`GuildMember::from_user`] to combine such a fragment with the author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildMember {
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub guild_id: Hydrated<Snowflake>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub user: Hydrated<User>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub nick: Hydrated<Option<String>>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub roles: Hydrated<Vec<Snowflake>>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub joined_at: Hydrated<Timestamp>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub deaf: Hydrated<bool>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub mute: Hydrated<bool>,
    #[serde(skip)]
    ctx: ClientHandle,
}

impl GuildMember {
    /// Builds a member from a user, the guild it belongs to and an optional
    /// member fragment. The result inherits the user's context.
    ///
    /// # Errors
    /// Returns [`ModelError::IdentityMismatch`] if the fragment names a
    /// different user.
    pub fn from_user(
        user: User,
        guild_id: Snowflake,
        fragment: Option<GuildMember>,
    ) -> Result<Self, ModelError> {
        let ctx = user.context().clone();
        let mut member = Self {
            guild_id: Hydrated::Present(guild_id),
            user: Hydrated::Present(user),
            ..Self::default()
        };
        if let Some(fragment) = fragment {
            merge_into(&mut member, fragment)?;
        }
        member.attach_context(&ctx);
        Ok(member)
    }

    #[must_use]
    pub fn user_id(&self) -> Option<Snowflake> {
        self.user.get().map(|u| u.id)
    }

    /// Nickname if set, username otherwise.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        match self.nick.get() {
            Some(Some(nick)) => Some(nick),
            _ => self.user.get().and_then(|u| u.username.get()).map(String::as_str),
        }
    }

    #[must_use]
    pub fn has_role(&self, role_id: Snowflake) -> bool {
        self.roles.get().is_some_and(|roles| roles.contains(&role_id))
    }
}

impl AttachContext for GuildMember {
    fn attach_context(&mut self, ctx: &ClientHandle) {
        self.ctx = ctx.clone();
        self.user.attach_context(ctx);
    }
}

impl Entity for GuildMember {
    const KIND: &'static str = "guild member";

    /// A member is identified by its user.
    fn id(&self) -> Option<Snowflake> {
        self.user_id()
    }

    fn context(&self) -> &ClientHandle {
        &self.ctx
    }
}

impl Merge for GuildMember {
    fn absorb(&mut self, partial: Self) {
        self.guild_id.absorb(partial.guild_id);
        self.user.absorb_entity(partial.user);
        self.nick.absorb(partial.nick);
        self.roles.absorb(partial.roles);
        self.joined_at.absorb(partial.joined_at);
        self.deaf.absorb(partial.deaf);
        self.mute.absorb(partial.mute);
    }

    /// A member is one user in one guild; both halves must agree.
    fn check_identity(&self, partial: &Self) -> Result<(), ModelError> {
        same_id(Self::KIND, self.user_id(), partial.user_id())?;
        same_id(
            Self::KIND,
            self.guild_id.get().copied(),
            partial.guild_id.get().copied(),
        )
    }
}
