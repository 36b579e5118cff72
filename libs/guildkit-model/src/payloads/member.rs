use crate::tracked::{SparseMap, Tracked, UpdatePayload};
use crate::wire::Snowflake;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuildMemberProperties {
    /// `None` (or an empty string) clears the nickname.
    pub nick: Tracked<Option<String>>,
    /// Replaces the member's full role list.
    pub roles: Tracked<Vec<Snowflake>>,
    pub mute: Tracked<bool>,
    pub deaf: Tracked<bool>,
    /// Voice channel to move the member to; `None` disconnects them.
    pub channel_id: Tracked<Option<Snowflake>>,
}

impl GuildMemberProperties {
    /// Only `roles` touched.
    #[must_use]
    pub fn with_roles(roles: Vec<Snowflake>) -> Self {
        Self {
            roles: Tracked::touched(roles),
            ..Self::default()
        }
    }
}

impl UpdatePayload for GuildMemberProperties {
    fn write_touched(&self, out: &mut SparseMap) {
        out.put("nick", &self.nick)
            .put("roles", &self.roles)
            .put("mute", &self.mute)
            .put("deaf", &self.deaf)
            .put("channel_id", &self.channel_id);
    }
}
