//! Actions invoked on hydrated entities.
//!
//! Each action resolves the owning client from the entity's context handle
//! before doing anything else, so a detached snapshot fails with
//! [`ModelError::NoContext`] without touching the network.

use async_trait::async_trait;
use guildkit_model::entity::{DmChannel, GuildChannel, GuildMember, Role};
use guildkit_model::payloads::RoleProperties;
use guildkit_model::{Entity, ModelError, PermissionOverwrite, Snowflake, UpdatePayload};

use crate::{DmChannelsExt, GuildChannelsExt, MembersExt, RolesExt};

fn member_target(member: &GuildMember) -> Result<(Snowflake, Snowflake), ModelError> {
    let guild_id = *member.guild_id.require(GuildMember::KIND, "guild_id")?;
    let user_id = member
        .user_id()
        .ok_or_else(|| ModelError::incomplete(GuildMember::KIND, "user"))?;
    Ok((guild_id, user_id))
}

#[async_trait]
pub trait MemberActions {
    async fn change_nickname(&self, nickname: Option<&str>) -> Result<(), ModelError>;

    async fn kick(&self) -> Result<(), ModelError>;

    async fn ban(&self, reason: Option<&str>, delete_message_days: u32) -> Result<(), ModelError>;

    async fn unban(&self) -> Result<(), ModelError>;
}

#[async_trait]
impl MemberActions for GuildMember {
    async fn change_nickname(&self, nickname: Option<&str>) -> Result<(), ModelError> {
        let client = self.client()?;
        let (guild_id, user_id) = member_target(self)?;
        client.change_nickname(guild_id, user_id, nickname).await
    }

    async fn kick(&self) -> Result<(), ModelError> {
        let client = self.client()?;
        let (guild_id, user_id) = member_target(self)?;
        client.kick_guild_member(guild_id, user_id).await
    }

    async fn ban(&self, reason: Option<&str>, delete_message_days: u32) -> Result<(), ModelError> {
        let client = self.client()?;
        let (guild_id, user_id) = member_target(self)?;
        client
            .ban_guild_member(guild_id, user_id, reason, delete_message_days)
            .await
    }

    async fn unban(&self) -> Result<(), ModelError> {
        let client = self.client()?;
        let (guild_id, user_id) = member_target(self)?;
        client.unban_guild_member(guild_id, user_id).await
    }
}

#[async_trait]
pub trait RoleActions {
    async fn modify(&self, properties: &RoleProperties) -> Result<Role, ModelError>;

    async fn delete(&self) -> Result<(), ModelError>;
}

#[async_trait]
impl RoleActions for Role {
    async fn modify(&self, properties: &RoleProperties) -> Result<Role, ModelError> {
        let client = self.client()?;
        let guild_id = *self.guild_id.require(Self::KIND, "guild_id")?;
        client.modify_guild_role(guild_id, self.id, properties).await
    }

    async fn delete(&self) -> Result<(), ModelError> {
        let client = self.client()?;
        let guild_id = *self.guild_id.require(Self::KIND, "guild_id")?;
        client.delete_guild_role(guild_id, self.id).await
    }
}

#[async_trait]
pub trait ChannelActions {
    async fn modify<P>(&self, properties: &P) -> Result<GuildChannel, ModelError>
    where
        P: UpdatePayload + Sync + ?Sized;

    async fn delete(&self) -> Result<GuildChannel, ModelError>;

    async fn add_permission_overwrite(&self, overwrite: &PermissionOverwrite)
    -> Result<(), ModelError>;

    async fn remove_permission_overwrite(&self, subject_id: Snowflake) -> Result<(), ModelError>;
}

#[async_trait]
impl ChannelActions for GuildChannel {
    async fn modify<P>(&self, properties: &P) -> Result<GuildChannel, ModelError>
    where
        P: UpdatePayload + Sync + ?Sized,
    {
        self.client()?
            .modify_guild_channel(self.id, properties)
            .await
    }

    async fn delete(&self) -> Result<GuildChannel, ModelError> {
        self.client()?.delete_guild_channel(self.id).await
    }

    async fn add_permission_overwrite(
        &self,
        overwrite: &PermissionOverwrite,
    ) -> Result<(), ModelError> {
        self.client()?
            .add_permission_overwrite(self.id, overwrite)
            .await
    }

    async fn remove_permission_overwrite(&self, subject_id: Snowflake) -> Result<(), ModelError> {
        self.client()?
            .remove_permission_overwrite(self.id, subject_id)
            .await
    }
}

#[async_trait]
pub trait DmActions {
    async fn close(&self) -> Result<DmChannel, ModelError>;
}

#[async_trait]
impl DmActions for DmChannel {
    async fn close(&self) -> Result<DmChannel, ModelError> {
        self.client()?.close_dm(self.id).await
    }
}
