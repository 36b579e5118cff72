use async_trait::async_trait;
use guildkit_model::entity::HypesquadHouse;
use guildkit_model::payloads::HypesquadJoin;
use guildkit_model::{Client, ModelError};
use http::Method;

use crate::body_of;

const HYPESQUAD_ROUTE: &str = "/hypesquad/online";

/// Routes acting on the current user.
#[async_trait]
pub trait UsersExt {
    async fn join_hypesquad(&self, house: HypesquadHouse) -> Result<(), ModelError>;

    async fn leave_hypesquad(&self) -> Result<(), ModelError>;
}

#[async_trait]
impl UsersExt for Client {
    async fn join_hypesquad(&self, house: HypesquadHouse) -> Result<(), ModelError> {
        let body = body_of(&HypesquadJoin { house_id: house })?;
        self.execute(Method::POST, HYPESQUAD_ROUTE, Some(&body)).await
    }

    async fn leave_hypesquad(&self) -> Result<(), ModelError> {
        self.execute(Method::DELETE, HYPESQUAD_ROUTE, None).await
    }
}
