#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Client-side model layer for the guildkit chat API.
//!
//! - [`tracked`]: change-tracked fields and sparse update bodies
//! - [`permissions`]: permission bit sets and allow/deny overwrites
//! - [`entity`]: hydrated snapshots, partial merge, context propagation
//! - [`payloads`]: update and creation bodies
//! - [`client`]: the client context entities hold a handle to
//!
//! Transport is pluggable: implement [`RequestExecutor`] and hand it to
//! [`Client::new`].

pub mod client;
pub mod config;
pub mod entity;
pub mod error;
pub mod payloads;
pub mod permissions;
pub mod tracked;
pub mod wire;

pub use client::{Client, ClientHandle, JsonCodec, PayloadCodec, RequestExecutor};
pub use config::{ClientConfig, ConfigError};
pub use entity::{AttachContext, Entity, Hydrated, Merge, merge_into};
pub use error::{CodecError, FormatError, ModelError, TransportError};
pub use permissions::{OverwriteKind, PermissionMask, PermissionOverwrite};
pub use tracked::{SparseMap, Tracked, UpdatePayload};
pub use wire::{Snowflake, Timestamp, ToWire};
