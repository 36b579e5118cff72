use crate::entity::{Activity, UserStatus};
use crate::tracked::{SparseMap, Tracked, UpdatePayload};

/// Presence update sent by the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceProperties {
    pub status: Tracked<UserStatus>,
    /// Unix time in milliseconds since the user went idle.
    pub since: Tracked<u64>,
    pub game: Tracked<Option<Activity>>,
    pub afk: Tracked<bool>,
}

impl UpdatePayload for PresenceProperties {
    fn write_touched(&self, out: &mut SparseMap) {
        out.put("status", &self.status)
            .put("since", &self.since)
            .put("game", &self.game)
            .put("afk", &self.afk);
    }
}
