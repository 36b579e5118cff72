//! Update and creation payloads.
//!
//! `*Properties` types are change-tracked: only the fields a caller touched
//! are sent. Creation payloads are plain structs sent as-is.

mod channel;
mod member;
mod presence;
mod role;
mod user;

pub use channel::{
    ChannelCreation, GuildChannelProperties, TextChannelProperties, VoiceChannelProperties,
};
pub use member::GuildMemberProperties;
pub use presence::PresenceProperties;
pub use role::RoleProperties;
pub use user::HypesquadJoin;
