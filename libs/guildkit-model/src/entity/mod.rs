//! Remote entity snapshots.
//!
//! Entities are hydrated from response payloads. A payload may be full or
//! partial, so every optional field is a [`Hydrated`] value that remembers
//! whether the payload carried it. [`merge_into`] folds a partial snapshot
//! into an existing one, and [`AttachContext`] stamps the owning client onto
//! an entity and every entity nested in it.

mod channel;
mod member;
mod message;
mod presence;
mod role;
mod user;

pub use channel::{ChannelType, DmChannel, GuildChannel};
pub use member::GuildMember;
pub use message::{Embed, EmbedImage, EmbedVideo, Message};
pub use presence::{Activity, ActivityKind, Presence, UserStatus};
pub use role::Role;
pub use user::{HypesquadHouse, User};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::client::{Client, ClientHandle};
use crate::error::ModelError;
use crate::wire::Snowflake;

/// A field that a payload either carried or omitted.
///
/// Unlike `Option`, `Hydrated<Option<T>>` separates "omitted" (`Absent`) from
/// "explicitly null" (`Present(None)`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Hydrated<T> {
    Absent,
    Present(T),
}

impl<T> Default for Hydrated<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Hydrated<T> {
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    pub fn set(&mut self, value: T) {
        *self = Self::Present(value);
    }

    /// The value, or [`ModelError::Incomplete`] naming `kind` and `field`.
    ///
    /// # Errors
    /// Fails when the field is absent.
    pub fn require(&self, kind: &'static str, field: &'static str) -> Result<&T, ModelError> {
        self.get().ok_or(ModelError::Incomplete { kind, field })
    }

    /// Replaces the value when `incoming` is present; keeps it otherwise.
    pub fn absorb(&mut self, incoming: Self) {
        if let Self::Present(value) = incoming {
            *self = Self::Present(value);
        }
    }
}

impl<T: Merge> Hydrated<T> {
    /// Like [`Hydrated::absorb`], but a nested entity with the same identity
    /// is merged field by field instead of replaced.
    pub fn absorb_entity(&mut self, incoming: Self) {
        let Self::Present(incoming) = incoming else {
            return;
        };
        match self {
            Self::Present(current) if current.id() == incoming.id() => current.absorb(incoming),
            slot => *slot = Self::Present(incoming),
        }
    }
}

impl<T> From<T> for Hydrated<T> {
    fn from(value: T) -> Self {
        Self::Present(value)
    }
}

impl<T: Serialize> Serialize for Hydrated<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => value.serialize(serializer),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

/// Only called for keys the payload carries; pair with
/// `#[serde(default)]` so a missing key stays `Absent`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Hydrated<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::Present)
    }
}

/// Stamps a client handle onto a value and every entity nested in it.
pub trait AttachContext {
    fn attach_context(&mut self, ctx: &ClientHandle);
}

impl<T: AttachContext> AttachContext for Vec<T> {
    fn attach_context(&mut self, ctx: &ClientHandle) {
        for item in self {
            item.attach_context(ctx);
        }
    }
}

impl<T: AttachContext> AttachContext for Option<T> {
    fn attach_context(&mut self, ctx: &ClientHandle) {
        if let Some(item) = self {
            item.attach_context(ctx);
        }
    }
}

impl<T: AttachContext> AttachContext for Hydrated<T> {
    fn attach_context(&mut self, ctx: &ClientHandle) {
        if let Self::Present(item) = self {
            item.attach_context(ctx);
        }
    }
}

/// A remote object with an identity and a client context.
pub trait Entity: AttachContext {
    /// Human readable kind, used in errors and logs.
    const KIND: &'static str;

    /// Identity, when the snapshot carries one.
    fn id(&self) -> Option<Snowflake>;

    fn context(&self) -> &ClientHandle;

    /// The owning client.
    ///
    /// # Errors
    /// [`ModelError::NoContext`] or [`ModelError::ContextReleased`].
    fn client(&self) -> Result<Client, ModelError> {
        self.context().upgrade(Self::KIND)
    }

    #[must_use]
    fn with_context(mut self, ctx: &ClientHandle) -> Self
    where
        Self: Sized,
    {
        self.attach_context(ctx);
        self
    }
}

/// Field-wise merge of a partial snapshot of the same entity.
pub trait Merge: Entity + Sized {
    /// Overwrites every field `partial` carries; keeps the others.
    fn absorb(&mut self, partial: Self);

    /// Refuses `partial` when it names another entity. Ids that only one
    /// side carries are not compared.
    ///
    /// # Errors
    /// [`ModelError::IdentityMismatch`].
    fn check_identity(&self, partial: &Self) -> Result<(), ModelError> {
        same_id(Self::KIND, self.id(), partial.id())
    }
}

fn same_id(
    kind: &'static str,
    target: Option<Snowflake>,
    partial: Option<Snowflake>,
) -> Result<(), ModelError> {
    match (target, partial) {
        (Some(target), Some(partial)) if target != partial => Err(ModelError::IdentityMismatch {
            kind,
            target,
            partial,
        }),
        _ => Ok(()),
    }
}

/// Merges `partial` into `target`.
///
/// Entities moved in from `partial` are re-attached to the target's context
/// handle, so the whole tree keeps pointing at one client.
///
/// # Errors
/// Returns [`ModelError::IdentityMismatch`] when both snapshots carry an id
/// and the ids differ. `target` is left untouched in that case.
pub fn merge_into<E: Merge>(target: &mut E, partial: E) -> Result<(), ModelError> {
    target.check_identity(&partial)?;
    target.absorb(partial);
    let ctx = target.context().clone();
    target.attach_context(&ctx);
    tracing::trace!(kind = E::KIND, "merged partial snapshot");
    Ok(())
}
