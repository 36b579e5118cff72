//! Permission bit sets.
//!
//! [`PermissionMask`] is a `Copy` value: `with` and `without` set and clear
//! bits by returning a new mask instead of mutating in place.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::wire::{LenientU64, ToWire};

bitflags::bitflags! {
    /// Fixed-width permission bit set.
    ///
    /// Each named permission owns exactly one bit. Bits without a name are
    /// kept as-is through decode/encode so masks stay forward compatible with
    /// permissions added by the platform later.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PermissionMask: u64 {
        const CREATE_INSTANT_INVITE = 1 << 0;
        const KICK_MEMBERS = 1 << 1;
        const BAN_MEMBERS = 1 << 2;
        const ADMINISTRATOR = 1 << 3;
        const MANAGE_CHANNELS = 1 << 4;
        const MANAGE_GUILD = 1 << 5;
        const ADD_REACTIONS = 1 << 6;
        const VIEW_AUDIT_LOG = 1 << 7;
        const PRIORITY_SPEAKER = 1 << 8;
        const STREAM = 1 << 9;
        const VIEW_CHANNEL = 1 << 10;
        const SEND_MESSAGES = 1 << 11;
        const SEND_TTS_MESSAGES = 1 << 12;
        const MANAGE_MESSAGES = 1 << 13;
        const EMBED_LINKS = 1 << 14;
        const ATTACH_FILES = 1 << 15;
        const READ_MESSAGE_HISTORY = 1 << 16;
        const MENTION_EVERYONE = 1 << 17;
        const USE_EXTERNAL_EMOJIS = 1 << 18;
        const VIEW_GUILD_INSIGHTS = 1 << 19;
        const CONNECT = 1 << 20;
        const SPEAK = 1 << 21;
        const MUTE_MEMBERS = 1 << 22;
        const DEAFEN_MEMBERS = 1 << 23;
        const MOVE_MEMBERS = 1 << 24;
        const USE_VAD = 1 << 25;
        const CHANGE_NICKNAME = 1 << 26;
        const MANAGE_NICKNAMES = 1 << 27;
        const MANAGE_ROLES = 1 << 28;
        const MANAGE_WEBHOOKS = 1 << 29;
        const MANAGE_EMOJIS = 1 << 30;
    }
}

impl Default for PermissionMask {
    fn default() -> Self {
        Self::empty()
    }
}

impl PermissionMask {
    /// Wraps a raw wire value, keeping unknown bits.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self::from_bits_retain(raw)
    }

    /// True when every bit of `flag` is set.
    #[must_use]
    pub const fn has(self, flag: Self) -> bool {
        self.contains(flag)
    }

    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        self.union(flag)
    }

    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        self.subtract(flag)
    }

    /// Bitwise AND-NOT: the bits of `self` that are not in `other`.
    #[must_use]
    pub const fn subtract(self, other: Self) -> Self {
        Self::from_bits_retain(self.bits() & !other.bits())
    }

    /// Looks up a single named permission, e.g. `"SEND_MESSAGES"`.
    #[must_use]
    pub fn flag_by_name(name: &str) -> Option<Self> {
        Self::from_name(name)
    }

    /// Names of the known permissions set in this mask.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter_names().map(|(name, _)| name)
    }

    /// Base permission set of a member: the union of its roles' masks.
    #[must_use]
    pub fn from_roles<I>(roles: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        roles.into_iter().fold(Self::empty(), Self::union)
    }
}

impl fmt::Display for PermissionMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl Serialize for PermissionMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.bits())
    }
}

impl<'de> Deserialize<'de> for PermissionMask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(LenientU64 {
                what: "permission mask",
            })
            .map(Self::from_bits_retain)
    }
}

impl ToWire for PermissionMask {
    fn to_wire(&self) -> Value {
        Value::from(self.bits())
    }
}
