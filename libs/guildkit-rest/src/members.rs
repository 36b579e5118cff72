use async_trait::async_trait;
use guildkit_model::entity::GuildMember;
use guildkit_model::payloads::GuildMemberProperties;
use guildkit_model::{Client, ModelError, Snowflake, UpdatePayload};
use http::Method;
use serde_json::{Map, Value};

/// Guild membership routes.
#[async_trait]
pub trait MembersExt {
    async fn guild_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
    ) -> Result<GuildMember, ModelError>;

    /// Sends the touched fields of `properties`.
    async fn modify_guild_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        properties: &GuildMemberProperties,
    ) -> Result<(), ModelError>;

    /// `None` clears the nickname.
    async fn change_nickname(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        nickname: Option<&str>,
    ) -> Result<(), ModelError>;

    async fn kick_guild_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
    ) -> Result<(), ModelError>;

    /// Bans the user and purges up to `delete_message_days` of their
    /// messages, clamped to the configured maximum.
    async fn ban_guild_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        reason: Option<&str>,
        delete_message_days: u32,
    ) -> Result<(), ModelError>;

    async fn unban_guild_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
    ) -> Result<(), ModelError>;
}

#[async_trait]
impl MembersExt for Client {
    async fn guild_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
    ) -> Result<GuildMember, ModelError> {
        let mut member: GuildMember = self
            .request(Method::GET, &format!("/guilds/{guild_id}/members/{user_id}"), None)
            .await?;
        member.guild_id.set(guild_id);
        Ok(member)
    }

    async fn modify_guild_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        properties: &GuildMemberProperties,
    ) -> Result<(), ModelError> {
        let body = properties.to_sparse_map().into_value();
        self.execute(
            Method::PATCH,
            &format!("/guilds/{guild_id}/members/{user_id}"),
            Some(&body),
        )
        .await
    }

    async fn change_nickname(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        nickname: Option<&str>,
    ) -> Result<(), ModelError> {
        let mut properties = GuildMemberProperties::default();
        properties.nick.set(nickname.map(str::to_owned));
        self.modify_guild_member(guild_id, user_id, &properties)
            .await
    }

    async fn kick_guild_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
    ) -> Result<(), ModelError> {
        self.execute(
            Method::DELETE,
            &format!("/guilds/{guild_id}/members/{user_id}"),
            None,
        )
        .await
    }

    async fn ban_guild_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        reason: Option<&str>,
        delete_message_days: u32,
    ) -> Result<(), ModelError> {
        let days = self.config().clamp_ban_days(delete_message_days);
        if days != delete_message_days {
            tracing::debug!(
                requested = delete_message_days,
                applied = days,
                "clamped ban purge window"
            );
        }

        let mut body = Map::new();
        body.insert("delete_message_days".to_owned(), Value::from(days));
        if let Some(reason) = reason {
            body.insert("reason".to_owned(), Value::from(reason));
        }
        self.execute(
            Method::PUT,
            &format!("/guilds/{guild_id}/bans/{user_id}"),
            Some(&Value::Object(body)),
        )
        .await
    }

    async fn unban_guild_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
    ) -> Result<(), ModelError> {
        self.execute(
            Method::DELETE,
            &format!("/guilds/{guild_id}/bans/{user_id}"),
            None,
        )
        .await
    }
}
