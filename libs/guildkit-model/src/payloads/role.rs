use crate::permissions::PermissionMask;
use crate::tracked::{SparseMap, Tracked, UpdatePayload};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleProperties {
    pub name: Tracked<String>,
    pub permissions: Tracked<PermissionMask>,
    /// RGB colour as an integer; 0 means no colour.
    pub color: Tracked<u32>,
    /// Display the role separately in the member list.
    pub hoist: Tracked<bool>,
    pub mentionable: Tracked<bool>,
}

impl UpdatePayload for RoleProperties {
    fn write_touched(&self, out: &mut SparseMap) {
        out.put("name", &self.name)
            .put("permissions", &self.permissions)
            .put("color", &self.color)
            .put("hoist", &self.hoist)
            .put("mentionable", &self.mentionable);
    }
}
