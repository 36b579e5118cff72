use serde::Serialize;

use crate::entity::ChannelType;
use crate::permissions::PermissionOverwrite;
use crate::tracked::{SparseMap, Tracked, UpdatePayload};
use crate::wire::Snowflake;

/// Fields shared by every guild channel update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuildChannelProperties {
    pub name: Tracked<String>,
    pub position: Tracked<i32>,
    /// Category the channel belongs to; `None` moves it out of any category.
    pub parent_id: Tracked<Option<Snowflake>>,
    /// Replaces the whole overwrite list when touched.
    pub permission_overwrites: Tracked<Vec<PermissionOverwrite>>,
}

impl UpdatePayload for GuildChannelProperties {
    fn write_touched(&self, out: &mut SparseMap) {
        out.put("name", &self.name)
            .put("position", &self.position)
            .put("parent_id", &self.parent_id)
            .put("permission_overwrites", &self.permission_overwrites);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextChannelProperties {
    pub base: GuildChannelProperties,
    pub topic: Tracked<Option<String>>,
    pub nsfw: Tracked<bool>,
    /// Slow-mode delay in seconds.
    pub rate_limit_per_user: Tracked<u32>,
}

impl UpdatePayload for TextChannelProperties {
    fn write_touched(&self, out: &mut SparseMap) {
        out.extend_from(&self.base)
            .put("topic", &self.topic)
            .put("nsfw", &self.nsfw)
            .put("rate_limit_per_user", &self.rate_limit_per_user);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceChannelProperties {
    pub base: GuildChannelProperties,
    /// Bits per second.
    pub bitrate: Tracked<u32>,
    /// 0 means unlimited.
    pub user_limit: Tracked<u32>,
}

impl UpdatePayload for VoiceChannelProperties {
    fn write_touched(&self, out: &mut SparseMap) {
        out.extend_from(&self.base)
            .put("bitrate", &self.bitrate)
            .put("user_limit", &self.user_limit);
    }
}

/// Body of a channel creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelCreation {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChannelType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permission_overwrites: Vec<PermissionOverwrite>,
}

impl ChannelCreation {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ChannelType) -> Self {
        Self {
            name: name.into(),
            kind,
            parent_id: None,
            permission_overwrites: Vec::new(),
        }
    }

    #[must_use]
    pub fn in_category(mut self, parent_id: Snowflake) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    #[must_use]
    pub fn with_overwrite(mut self, overwrite: PermissionOverwrite) -> Self {
        self.permission_overwrites.push(overwrite);
        self
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::permissions::PermissionMask;
    use serde_json::json;

    #[test]
    fn untouched_payload_is_empty() {
        assert!(TextChannelProperties::default().to_sparse_map().is_empty());
        assert!(VoiceChannelProperties::default().to_sparse_map().is_empty());
    }

    #[test]
    fn base_fields_come_first() {
        let mut props = TextChannelProperties::default();
        props.nsfw.set(true);
        props.base.name.set("general".to_owned());

        assert_eq!(props.touched_fields(), ["name", "nsfw"]);
    }

    #[test]
    fn explicit_null_is_sent() {
        let mut props = TextChannelProperties::default();
        props.topic.set(None);
        props.base.parent_id.set(None);

        assert_eq!(
            props.to_sparse_map().into_value(),
            json!({ "parent_id": null, "topic": null })
        );
    }

    #[test]
    fn overwrites_are_encoded_as_wire_objects() {
        let mut props = GuildChannelProperties::default();
        props.permission_overwrites.set(vec![
            PermissionOverwrite::for_role(Snowflake::new(1)).deny(PermissionMask::SEND_MESSAGES),
        ]);

        assert_eq!(
            props.to_sparse_map().into_value(),
            json!({
                "permission_overwrites": [
                    { "id": "1", "type": "role", "allow": 0, "deny": 2048 }
                ]
            })
        );
    }

    #[test]
    fn creation_skips_empty_optionals() {
        let body = serde_json::to_value(ChannelCreation::new("lobby", ChannelType::Voice)).unwrap();
        assert_eq!(body, json!({ "name": "lobby", "type": 2 }));

        let body = serde_json::to_value(
            ChannelCreation::new("rules", ChannelType::Text).in_category(Snowflake::new(8)),
        )
        .unwrap();
        assert_eq!(body, json!({ "name": "rules", "type": 0, "parent_id": "8" }));
    }
}
