use async_trait::async_trait;
use guildkit_model::entity::Role;
use guildkit_model::payloads::{GuildMemberProperties, RoleProperties};
use guildkit_model::{Client, ModelError, Snowflake};
use http::Method;

use crate::MembersExt;

/// Guild role routes. Returned roles carry the `guild_id` they were
/// fetched from.
#[async_trait]
pub trait RolesExt {
    /// Creates a role, then applies `properties` when given.
    async fn create_guild_role(
        &self,
        guild_id: Snowflake,
        properties: Option<&RoleProperties>,
    ) -> Result<Role, ModelError>;

    async fn modify_guild_role(
        &self,
        guild_id: Snowflake,
        role_id: Snowflake,
        properties: &RoleProperties,
    ) -> Result<Role, ModelError>;

    async fn delete_guild_role(&self, guild_id: Snowflake, role_id: Snowflake)
    -> Result<(), ModelError>;

    async fn guild_roles(&self, guild_id: Snowflake) -> Result<Vec<Role>, ModelError>;

    /// Replaces the member's whole role list.
    async fn set_guild_member_roles(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        roles: Vec<Snowflake>,
    ) -> Result<(), ModelError>;

    async fn add_role_to_member(
        &self,
        guild_id: Snowflake,
        role_id: Snowflake,
        user_id: Snowflake,
    ) -> Result<(), ModelError>;

    async fn remove_role_from_member(
        &self,
        guild_id: Snowflake,
        role_id: Snowflake,
        user_id: Snowflake,
    ) -> Result<(), ModelError>;
}

#[async_trait]
impl RolesExt for Client {
    async fn create_guild_role(
        &self,
        guild_id: Snowflake,
        properties: Option<&RoleProperties>,
    ) -> Result<Role, ModelError> {
        let mut role: Role = self
            .request(Method::POST, &format!("/guilds/{guild_id}/roles"), None)
            .await?;
        role.guild_id.set(guild_id);

        match properties {
            Some(properties) => self.modify_guild_role(guild_id, role.id, properties).await,
            None => Ok(role),
        }
    }

    async fn modify_guild_role(
        &self,
        guild_id: Snowflake,
        role_id: Snowflake,
        properties: &RoleProperties,
    ) -> Result<Role, ModelError> {
        let mut role: Role = self
            .send_update(
                Method::PATCH,
                &format!("/guilds/{guild_id}/roles/{role_id}"),
                properties,
            )
            .await?;
        role.guild_id.set(guild_id);
        Ok(role)
    }

    async fn delete_guild_role(
        &self,
        guild_id: Snowflake,
        role_id: Snowflake,
    ) -> Result<(), ModelError> {
        self.execute(
            Method::DELETE,
            &format!("/guilds/{guild_id}/roles/{role_id}"),
            None,
        )
        .await
    }

    async fn guild_roles(&self, guild_id: Snowflake) -> Result<Vec<Role>, ModelError> {
        let mut roles: Vec<Role> = self
            .request(Method::GET, &format!("/guilds/{guild_id}/roles"), None)
            .await?;
        for role in &mut roles {
            role.guild_id.set(guild_id);
        }
        Ok(roles)
    }

    async fn set_guild_member_roles(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        roles: Vec<Snowflake>,
    ) -> Result<(), ModelError> {
        self.modify_guild_member(guild_id, user_id, &GuildMemberProperties::with_roles(roles))
            .await
    }

    async fn add_role_to_member(
        &self,
        guild_id: Snowflake,
        role_id: Snowflake,
        user_id: Snowflake,
    ) -> Result<(), ModelError> {
        self.execute(
            Method::PUT,
            &format!("/guilds/{guild_id}/members/{user_id}/roles/{role_id}"),
            None,
        )
        .await
    }

    async fn remove_role_from_member(
        &self,
        guild_id: Snowflake,
        role_id: Snowflake,
        user_id: Snowflake,
    ) -> Result<(), ModelError> {
        self.execute(
            Method::DELETE,
            &format!("/guilds/{guild_id}/members/{user_id}/roles/{role_id}"),
            None,
        )
        .await
    }
}
