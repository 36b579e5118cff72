#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! REST route helpers for the guildkit chat API.
//!
//! Extension traits add typed routes to [`Client`](guildkit_model::Client):
//!
//! ```ignore
//! use guildkit_rest::GuildChannelsExt;
//!
//! let channels = client.guild_channels(guild_id).await?;
//! ```
//!
//! Every returned entity is already attached to the client that fetched it,
//! so the action traits ([`MemberActions`], [`RoleActions`],
//! [`ChannelActions`], [`DmActions`]) can be called on it directly.

mod actions;
mod channels;
mod dm;
mod members;
mod roles;
mod users;

pub use actions::{ChannelActions, DmActions, MemberActions, RoleActions};
pub use channels::GuildChannelsExt;
pub use dm::DmChannelsExt;
pub use members::MembersExt;
pub use roles::RolesExt;
pub use users::UsersExt;

use guildkit_model::{CodecError, ModelError};
use serde::Serialize;
use serde_json::Value;

/// Renders a plain (not change tracked) request body.
pub(crate) fn body_of<T: Serialize + ?Sized>(body: &T) -> Result<Value, ModelError> {
    serde_json::to_value(body).map_err(|e| ModelError::Codec(CodecError::Encode(Box::new(e))))
}
