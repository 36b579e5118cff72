//! Permission bit sets and per-channel overwrites.
//!
//! [`PermissionMask`] is a plain value: combining masks never mutates a copy
//! held elsewhere. [`PermissionOverwrite`] pairs an allow and a deny mask for
//! one role or member, and [`resolve_channel_permissions`] stacks overwrites
//! in platform order (member beats role beats base; deny beats allow).

mod mask;
mod overwrite;
mod resolve;

pub use mask::PermissionMask;
pub use overwrite::{OverwriteKind, PermissionOverwrite};
pub use resolve::{PermissionQuery, resolve_channel_permissions};
