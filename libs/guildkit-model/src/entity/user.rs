use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AttachContext, Entity, Hydrated, Merge};
use crate::client::ClientHandle;
use crate::wire::{Snowflake, wire_codes};

wire_codes! {
    /// Hypesquad house a user can join.
    pub enum HypesquadHouse ("hypesquad house") {
        Bravery => 1,
        Brilliance => 2,
        Balance => 3,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Snowflake,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub username: Hydrated<String>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub discriminator: Hydrated<String>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub avatar: Hydrated<Option<String>>,
    #[serde(default, skip_serializing_if = "Hydrated::is_absent")]
    pub bot: Hydrated<bool>,
    #[serde(skip)]
    ctx: ClientHandle,
}

impl User {
    /// A bare snapshot carrying only the id.
    #[must_use]
    pub fn new(id: Snowflake) -> Self {
        Self {
            id,
            username: Hydrated::Absent,
            discriminator: Hydrated::Absent,
            avatar: Hydrated::Absent,
            bot: Hydrated::Absent,
            ctx: ClientHandle::detached(),
        }
    }

    /// `name#1234`, when both parts are known.
    #[must_use]
    pub fn tag(&self) -> Option<String> {
        let name = self.username.get()?;
        let discriminator = self.discriminator.get()?;
        Some(format!("{name}#{discriminator}"))
    }

    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.bot.get().copied().unwrap_or(false)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.username.get() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.id),
        }
    }
}

impl AttachContext for User {
    fn attach_context(&mut self, ctx: &ClientHandle) {
        self.ctx = ctx.clone();
    }
}

impl Entity for User {
    const KIND: &'static str = "user";

    fn id(&self) -> Option<Snowflake> {
        Some(self.id)
    }

    fn context(&self) -> &ClientHandle {
        &self.ctx
    }
}

impl Merge for User {
    fn absorb(&mut self, partial: Self) {
        self.username.absorb(partial.username);
        self.discriminator.absorb(partial.discriminator);
        self.avatar.absorb(partial.avatar);
        self.bot.absorb(partial.bot);
    }
}
