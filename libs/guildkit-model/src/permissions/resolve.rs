use super::{OverwriteKind, PermissionMask, PermissionOverwrite};
use crate::wire::Snowflake;

/// The member-side inputs of a channel permission computation.
#[derive(Debug, Clone, Copy)]
pub struct PermissionQuery<'a> {
    /// The guild id doubles as the id of the `@everyone` role.
    pub guild_id: Snowflake,
    pub member_id: Snowflake,
    pub member_roles: &'a [Snowflake],
    /// Role-derived base set, see [`PermissionMask::from_roles`].
    pub base: PermissionMask,
}

/// Effective permissions of a member in a channel.
///
/// Layers, lowest precedence first: the base set, the `@everyone` overwrite,
/// the member's role overwrites (aggregated), the member overwrite. Within a
/// single overwrite deny beats allow. The role layer clears every denied bit
/// before adding every allowed one, so an allow on one of the member's roles
/// beats a deny on another. `ADMINISTRATOR` in the base set grants every
/// known permission and ignores overwrites.
#[must_use]
pub fn resolve_channel_permissions(
    query: &PermissionQuery<'_>,
    overwrites: &[PermissionOverwrite],
) -> PermissionMask {
    if query.base.has(PermissionMask::ADMINISTRATOR) {
        return query.base.union(PermissionMask::all());
    }

    let mut mask = query.base;

    if let Some(everyone) = overwrites
        .iter()
        .find(|o| o.targets(OverwriteKind::Role, query.guild_id))
    {
        mask = everyone.apply(mask);
    }

    let (allow, deny) = overwrites
        .iter()
        .filter(|o| {
            o.kind() == OverwriteKind::Role
                && o.id() != query.guild_id
                && query.member_roles.contains(&o.id())
        })
        .fold(
            (PermissionMask::empty(), PermissionMask::empty()),
            |(allow, deny), o| (allow.union(o.allowed()), deny.union(o.denied())),
        );
    mask = mask.subtract(deny).union(allow);

    if let Some(member) = overwrites
        .iter()
        .find(|o| o.targets(OverwriteKind::Member, query.member_id))
    {
        mask = member.apply(mask);
    }

    tracing::trace!(
        member = %query.member_id,
        base = query.base.bits(),
        effective = mask.bits(),
        "resolved channel permissions"
    );
    mask
}
