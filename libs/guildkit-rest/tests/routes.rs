#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Request helpers hit the expected verb, path and body.

mod common;

use common::{Recorded, setup};
use guildkit_model::entity::{ChannelType, HypesquadHouse};
use guildkit_model::payloads::{ChannelCreation, RoleProperties, VoiceChannelProperties};
use guildkit_model::{Entity, PermissionMask, PermissionOverwrite, Snowflake};
use guildkit_rest::{DmChannelsExt, GuildChannelsExt, MembersExt, RolesExt, UsersExt};
use http::Method;
use serde_json::json;

const GUILD: Snowflake = Snowflake::new(100);
const CHANNEL: Snowflake = Snowflake::new(200);
const USER: Snowflake = Snowflake::new(300);
const ROLE: Snowflake = Snowflake::new(400);

#[tokio::test]
async fn modify_voice_channel_sends_only_touched_fields() {
    let (client, transport) = setup();
    transport.reply(json!({ "id": "200", "type": 2, "user_limit": 5 }));

    let mut props = VoiceChannelProperties::default();
    props.user_limit.set(5);
    let channel = client.modify_guild_channel(CHANNEL, &props).await.unwrap();

    assert_eq!(
        transport.last(),
        Recorded {
            method: Method::PATCH,
            path: "/api/v6/channels/200".to_owned(),
            body: Some(json!({ "user_limit": 5 })),
        }
    );
    assert_eq!(channel.kind, ChannelType::Voice);
    assert!(client.owns(channel.context()));
}

#[tokio::test]
async fn create_text_channel_forces_type() {
    let (client, transport) = setup();
    transport.reply(json!({ "id": "201", "type": 0, "name": "rules" }));

    let creation = ChannelCreation::new("rules", ChannelType::Voice).in_category(Snowflake::new(7));
    client.create_text_channel(GUILD, creation).await.unwrap();

    let sent = transport.last();
    assert_eq!(sent.method, Method::POST);
    assert_eq!(sent.path, "/api/v6/guilds/100/channels");
    assert_eq!(sent.body, Some(json!({ "name": "rules", "type": 0, "parent_id": "7" })));
}

#[tokio::test]
async fn guild_channels_are_all_attached() {
    let (client, transport) = setup();
    transport.reply(json!([
        { "id": "1", "type": 0 },
        { "id": "2", "type": 2 },
        { "id": "3", "type": 4 }
    ]));

    let channels = client.guild_channels(GUILD).await.unwrap();

    assert_eq!(channels.len(), 3);
    assert!(channels.iter().all(|c| client.owns(c.context())));
    assert_eq!(transport.last().path, "/api/v6/guilds/100/channels");
}

#[tokio::test]
async fn permission_overwrite_is_put_under_its_subject() {
    let (client, transport) = setup();
    let overwrite = PermissionOverwrite::for_role(ROLE)
        .allow(PermissionMask::VIEW_CHANNEL | PermissionMask::SEND_MESSAGES);

    client.add_permission_overwrite(CHANNEL, &overwrite).await.unwrap();
    client.remove_permission_overwrite(CHANNEL, ROLE).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::PUT);
    assert_eq!(requests[0].path, "/api/v6/channels/200/permissions/400");
    assert_eq!(
        requests[0].body,
        Some(json!({ "id": "400", "type": "role", "allow": 3072, "deny": 0 }))
    );
    assert_eq!(requests[1].method, Method::DELETE);
    assert_eq!(requests[1].path, "/api/v6/channels/200/permissions/400");
    assert_eq!(requests[1].body, None);
}

#[tokio::test]
async fn create_dm_sends_recipient_as_string() {
    let (client, transport) = setup();
    transport.reply(json!({ "id": "9", "type": 1, "recipients": [{ "id": "300" }] }));

    let dm = client.create_dm(USER).await.unwrap();

    let sent = transport.last();
    assert_eq!(sent.method, Method::POST);
    assert_eq!(sent.path, "/api/v6/users/@me/channels");
    assert_eq!(sent.body, Some(json!({ "recipient_id": "300" })));
    assert!(client.owns(dm.recipients()[0].context()));
}

#[tokio::test]
async fn create_role_with_properties_patches_after_post() {
    let (client, transport) = setup();
    transport.reply(json!({ "id": "400", "name": "new role" }));
    transport.reply(json!({ "id": "400", "name": "mods", "permissions": "8192" }));

    let mut props = RoleProperties::default();
    props.name.set("mods".to_owned());
    let role = client.create_guild_role(GUILD, Some(&props)).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path, "/api/v6/guilds/100/roles");
    assert_eq!(requests[0].body, None);
    assert_eq!(requests[1].method, Method::PATCH);
    assert_eq!(requests[1].path, "/api/v6/guilds/100/roles/400");
    assert_eq!(requests[1].body, Some(json!({ "name": "mods" })));

    assert_eq!(role.guild_id.get(), Some(&GUILD));
    assert!(role.permissions().has(PermissionMask::MANAGE_MESSAGES));
}

#[tokio::test]
async fn create_role_without_properties_posts_once() {
    let (client, transport) = setup();
    transport.reply(json!({ "id": "400" }));

    let role = client.create_guild_role(GUILD, None).await.unwrap();

    assert_eq!(transport.requests().len(), 1);
    assert_eq!(role.guild_id.get(), Some(&GUILD));
}

#[tokio::test]
async fn guild_roles_get_their_guild_assigned() {
    let (client, transport) = setup();
    transport.reply(json!([{ "id": "100" }, { "id": "400" }]));

    let roles = client.guild_roles(GUILD).await.unwrap();

    assert!(roles.iter().all(|r| r.guild_id.get() == Some(&GUILD)));
    assert!(roles[0].is_everyone());
    assert!(!roles[1].is_everyone());
}

#[tokio::test]
async fn member_role_routes() {
    let (client, transport) = setup();

    client.set_guild_member_roles(GUILD, USER, vec![ROLE]).await.unwrap();
    client.add_role_to_member(GUILD, ROLE, USER).await.unwrap();
    client.remove_role_from_member(GUILD, ROLE, USER).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::PATCH);
    assert_eq!(requests[0].path, "/api/v6/guilds/100/members/300");
    assert_eq!(requests[0].body, Some(json!({ "roles": ["400"] })));
    assert_eq!(requests[1].method, Method::PUT);
    assert_eq!(requests[1].path, "/api/v6/guilds/100/members/300/roles/400");
    assert_eq!(requests[2].method, Method::DELETE);
    assert_eq!(requests[2].path, "/api/v6/guilds/100/members/300/roles/400");
}

#[tokio::test]
async fn ban_days_are_clamped_to_config() {
    let (client, transport) = setup();

    client
        .ban_guild_member(GUILD, USER, Some("spam"), 30)
        .await
        .unwrap();
    client.ban_guild_member(GUILD, USER, None, 1).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::PUT);
    assert_eq!(requests[0].path, "/api/v6/guilds/100/bans/300");
    assert_eq!(
        requests[0].body,
        Some(json!({ "delete_message_days": 7, "reason": "spam" }))
    );
    assert_eq!(requests[1].body, Some(json!({ "delete_message_days": 1 })));
}

#[tokio::test]
async fn change_nickname_can_clear() {
    let (client, transport) = setup();

    client.change_nickname(GUILD, USER, None).await.unwrap();

    assert_eq!(transport.last().body, Some(json!({ "nick": null })));
}

#[tokio::test]
async fn guild_member_carries_its_guild() {
    let (client, transport) = setup();
    transport.reply(json!({ "user": { "id": "300", "username": "a" }, "roles": [] }));

    let member = client.guild_member(GUILD, USER).await.unwrap();

    assert_eq!(member.guild_id.get(), Some(&GUILD));
    assert!(client.owns(member.user.get().unwrap().context()));
}

#[tokio::test]
async fn hypesquad_join_and_leave() {
    let (client, transport) = setup();

    client.join_hypesquad(HypesquadHouse::Balance).await.unwrap();
    client.leave_hypesquad().await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path, "/api/v6/hypesquad/online");
    assert_eq!(requests[0].body, Some(json!({ "house_id": 3 })));
    assert_eq!(requests[1].method, Method::DELETE);
    assert_eq!(requests[1].path, "/api/v6/hypesquad/online");
}
