use async_trait::async_trait;
use guildkit_model::entity::{ChannelType, GuildChannel};
use guildkit_model::payloads::ChannelCreation;
use guildkit_model::{Client, ModelError, PermissionOverwrite, Snowflake, ToWire, UpdatePayload};
use http::Method;

use crate::body_of;

/// Guild channel routes.
#[async_trait]
pub trait GuildChannelsExt {
    async fn guild_channels(&self, guild_id: Snowflake) -> Result<Vec<GuildChannel>, ModelError>;

    async fn guild_channel(&self, channel_id: Snowflake) -> Result<GuildChannel, ModelError>;

    async fn create_guild_channel(
        &self,
        guild_id: Snowflake,
        creation: &ChannelCreation,
    ) -> Result<GuildChannel, ModelError>;

    /// Creates a channel with its type forced to text.
    async fn create_text_channel(
        &self,
        guild_id: Snowflake,
        creation: ChannelCreation,
    ) -> Result<GuildChannel, ModelError>;

    /// Creates a channel with its type forced to voice.
    async fn create_voice_channel(
        &self,
        guild_id: Snowflake,
        creation: ChannelCreation,
    ) -> Result<GuildChannel, ModelError>;

    /// Sends the touched fields of `properties` and returns the updated channel.
    async fn modify_guild_channel<P>(
        &self,
        channel_id: Snowflake,
        properties: &P,
    ) -> Result<GuildChannel, ModelError>
    where
        P: UpdatePayload + Sync + ?Sized;

    /// Deletes the channel and returns its last snapshot.
    async fn delete_guild_channel(&self, channel_id: Snowflake) -> Result<GuildChannel, ModelError>;

    /// Adds or replaces the overwrite for `overwrite.id()`.
    async fn add_permission_overwrite(
        &self,
        channel_id: Snowflake,
        overwrite: &PermissionOverwrite,
    ) -> Result<(), ModelError>;

    /// Removes the overwrite for a role or member.
    async fn remove_permission_overwrite(
        &self,
        channel_id: Snowflake,
        subject_id: Snowflake,
    ) -> Result<(), ModelError>;
}

#[async_trait]
impl GuildChannelsExt for Client {
    async fn guild_channels(&self, guild_id: Snowflake) -> Result<Vec<GuildChannel>, ModelError> {
        self.request(Method::GET, &format!("/guilds/{guild_id}/channels"), None)
            .await
    }

    async fn guild_channel(&self, channel_id: Snowflake) -> Result<GuildChannel, ModelError> {
        self.request(Method::GET, &format!("/channels/{channel_id}"), None)
            .await
    }

    async fn create_guild_channel(
        &self,
        guild_id: Snowflake,
        creation: &ChannelCreation,
    ) -> Result<GuildChannel, ModelError> {
        let body = body_of(creation)?;
        self.request(Method::POST, &format!("/guilds/{guild_id}/channels"), Some(&body))
            .await
    }

    async fn create_text_channel(
        &self,
        guild_id: Snowflake,
        mut creation: ChannelCreation,
    ) -> Result<GuildChannel, ModelError> {
        creation.kind = ChannelType::Text;
        self.create_guild_channel(guild_id, &creation).await
    }

    async fn create_voice_channel(
        &self,
        guild_id: Snowflake,
        mut creation: ChannelCreation,
    ) -> Result<GuildChannel, ModelError> {
        creation.kind = ChannelType::Voice;
        self.create_guild_channel(guild_id, &creation).await
    }

    async fn modify_guild_channel<P>(
        &self,
        channel_id: Snowflake,
        properties: &P,
    ) -> Result<GuildChannel, ModelError>
    where
        P: UpdatePayload + Sync + ?Sized,
    {
        self.send_update(Method::PATCH, &format!("/channels/{channel_id}"), properties)
            .await
    }

    async fn delete_guild_channel(&self, channel_id: Snowflake) -> Result<GuildChannel, ModelError> {
        self.request(Method::DELETE, &format!("/channels/{channel_id}"), None)
            .await
    }

    async fn add_permission_overwrite(
        &self,
        channel_id: Snowflake,
        overwrite: &PermissionOverwrite,
    ) -> Result<(), ModelError> {
        let path = format!("/channels/{channel_id}/permissions/{}", overwrite.id());
        self.execute(Method::PUT, &path, Some(&overwrite.to_wire()))
            .await
    }

    async fn remove_permission_overwrite(
        &self,
        channel_id: Snowflake,
        subject_id: Snowflake,
    ) -> Result<(), ModelError> {
        self.execute(
            Method::DELETE,
            &format!("/channels/{channel_id}/permissions/{subject_id}"),
            None,
        )
        .await
    }
}
