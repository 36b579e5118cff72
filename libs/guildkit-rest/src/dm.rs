use async_trait::async_trait;
use guildkit_model::entity::DmChannel;
use guildkit_model::{Client, ModelError, Snowflake};
use http::Method;
use serde_json::json;

/// Direct-message channel routes of the current user.
#[async_trait]
pub trait DmChannelsExt {
    async fn private_channels(&self) -> Result<Vec<DmChannel>, ModelError>;

    async fn dm_channel(&self, channel_id: Snowflake) -> Result<DmChannel, ModelError>;

    /// Opens (or returns the existing) DM channel with `recipient_id`.
    async fn create_dm(&self, recipient_id: Snowflake) -> Result<DmChannel, ModelError>;

    /// Closes the channel and returns its last snapshot.
    async fn close_dm(&self, channel_id: Snowflake) -> Result<DmChannel, ModelError>;
}

#[async_trait]
impl DmChannelsExt for Client {
    async fn private_channels(&self) -> Result<Vec<DmChannel>, ModelError> {
        self.request(Method::GET, "/users/@me/channels", None).await
    }

    async fn dm_channel(&self, channel_id: Snowflake) -> Result<DmChannel, ModelError> {
        self.request(Method::GET, &format!("/channels/{channel_id}"), None)
            .await
    }

    async fn create_dm(&self, recipient_id: Snowflake) -> Result<DmChannel, ModelError> {
        let body = json!({ "recipient_id": recipient_id.to_string() });
        self.request(Method::POST, "/users/@me/channels", Some(&body))
            .await
    }

    async fn close_dm(&self, channel_id: Snowflake) -> Result<DmChannel, ModelError> {
        self.request(Method::DELETE, &format!("/channels/{channel_id}"), None)
            .await
    }
}
