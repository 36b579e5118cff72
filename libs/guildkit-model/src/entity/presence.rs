use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::wire::{ToWire, wire_codes, wire_tokens};

wire_tokens! {
    /// Online status of a user.
    pub enum UserStatus ("user status") {
        Online => "online",
        Idle => "idle",
        DoNotDisturb => "dnd",
        Invisible => "invisible",
        Offline => "offline",
    }
}

impl Default for UserStatus {
    fn default() -> Self {
        Self::Online
    }
}

wire_codes! {
    pub enum ActivityKind ("activity type") {
        Game => 0,
        Streaming => 1,
        Listening => 2,
        Watching => 3,
    }
}

impl Default for ActivityKind {
    fn default() -> Self {
        Self::Game
    }
}

/// What a user is currently doing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ActivityKind,
    /// Stream URL, only meaningful for [`ActivityKind::Streaming`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Activity {
    #[must_use]
    pub fn new(kind: ActivityKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            url: None,
        }
    }

    #[must_use]
    pub fn streaming(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ActivityKind::Streaming,
            url: Some(url.into()),
        }
    }
}

impl ToWire for Activity {
    fn to_wire(&self) -> serde_json::Value {
        let mut value = json!({ "name": self.name, "type": self.kind.code() });
        if let Some(url) = &self.url {
            value["url"] = json!(url);
        }
        value
    }
}

/// A user's presence: status plus current activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presence {
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default, rename = "game")]
    pub activity: Option<Activity>,
    /// Unix time in milliseconds since the user went idle; 0 when active.
    #[serde(default)]
    pub since: u64,
    #[serde(default)]
    pub afk: bool,
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.activity {
            Some(activity) => write!(f, "{} ({})", self.status, activity.name),
            None => write!(f, "{}", self.status),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn status_tokens_are_lower_case_except_dnd() {
        assert_eq!(UserStatus::Online.as_token(), "online");
        assert_eq!(UserStatus::Idle.as_token(), "idle");
        assert_eq!(UserStatus::DoNotDisturb.as_token(), "dnd");
        assert_eq!(UserStatus::Invisible.as_token(), "invisible");
        assert_eq!(UserStatus::Offline.as_token(), "offline");
    }

    #[test]
    fn status_decoding_is_case_insensitive() {
        assert_eq!("DND".parse::<UserStatus>().unwrap(), UserStatus::DoNotDisturb);
        assert_eq!("DoNotDisturb".parse::<UserStatus>().unwrap(), UserStatus::DoNotDisturb);
        assert_eq!("Idle".parse::<UserStatus>().unwrap(), UserStatus::Idle);
        assert!("busy".parse::<UserStatus>().is_err());
    }

    #[test]
    fn streaming_activity_carries_url() {
        let activity = Activity::streaming("speedrun", "https://twitch.tv/example");
        assert_eq!(
            activity.to_wire(),
            json!({ "name": "speedrun", "type": 1, "url": "https://twitch.tv/example" })
        );
    }

    #[test]
    fn presence_hydrates_from_gateway_shape() {
        let presence: Presence = serde_json::from_value(json!({
            "status": "dnd",
            "game": { "name": "Rocket League", "type": 0 },
            "since": 0,
            "afk": false
        }))
        .unwrap();
        assert_eq!(presence.status, UserStatus::DoNotDisturb);
        assert_eq!(presence.to_string(), "dnd (Rocket League)");
    }
}
