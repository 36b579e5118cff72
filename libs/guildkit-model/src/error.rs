//! Error types for the guildkit model.
//!
//! Decode and format failures are raised where the payload is decoded and
//! propagate unchanged to the caller of the request helper. Building a sparse
//! update body never fails and has no error type.

use crate::wire::Snowflake;
use thiserror::Error;

/// An enum-like wire token (or numeric code) that matches no known value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized {kind} '{token}'")]
pub struct FormatError {
    /// Human readable name of the value being decoded, e.g. `user status`.
    pub kind: &'static str,
    /// The offending token as received.
    pub token: String,
}

impl FormatError {
    #[must_use]
    pub fn new(kind: &'static str, token: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
        }
    }
}

/// Failure reported by a [`RequestExecutor`](crate::client::RequestExecutor).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TransportError {
    /// The remote answered with a non-2xx status.
    #[error("HTTP {status}: {body_preview}")]
    Status {
        status: http::StatusCode,
        body_preview: String,
    },

    /// The request never produced a response (network, connection, etc).
    #[error("Transport error: {0}")]
    Io(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Failure reported by a [`PayloadCodec`](crate::client::PayloadCodec).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CodecError {
    #[error("failed to encode payload: {0}")]
    Encode(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to decode payload: {0}")]
    Decode(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors surfaced by entity operations and request helpers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ModelError {
    /// Two snapshots of different entities were merged.
    #[error("cannot merge {kind} {partial} into {kind} {target}")]
    IdentityMismatch {
        kind: &'static str,
        target: Snowflake,
        partial: Snowflake,
    },

    /// The entity was never attached to a client.
    #[error("{kind} has no client context attached")]
    NoContext { kind: &'static str },

    /// The entity was attached, but the client has since been dropped.
    #[error("client attached to {kind} has been dropped")]
    ContextReleased { kind: &'static str },

    /// The snapshot lacks a field the operation needs.
    #[error("{kind} snapshot is missing '{field}'")]
    Incomplete {
        kind: &'static str,
        field: &'static str,
    },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The decoded payload does not have the expected shape.
    #[error("failed to hydrate {kind}: {source}")]
    Decode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ModelError {
    #[must_use]
    pub fn incomplete(kind: &'static str, field: &'static str) -> Self {
        Self::Incomplete { kind, field }
    }

    /// True for the two "no usable context" conditions.
    #[must_use]
    pub fn is_context_error(&self) -> bool {
        matches!(self, Self::NoContext { .. } | Self::ContextReleased { .. })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn format_error_names_kind_and_token() {
        let err = FormatError::new("user status", "busy");
        assert_eq!(err.to_string(), "unrecognized user status 'busy'");
    }

    #[test]
    fn format_error_converts_into_model_error() {
        let err: ModelError = FormatError::new("overwrite type", "everyone").into();
        assert!(matches!(err, ModelError::Format(_)));
        assert_eq!(err.to_string(), "unrecognized overwrite type 'everyone'");
    }

    #[test]
    fn identity_mismatch_message_mentions_both_ids() {
        let err = ModelError::IdentityMismatch {
            kind: "user",
            target: Snowflake::new(1),
            partial: Snowflake::new(2),
        };
        assert_eq!(err.to_string(), "cannot merge user 2 into user 1");
    }

    #[test]
    fn transport_io_preserves_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ModelError::from(TransportError::Io(Box::new(inner)));

        // `Transport` is transparent, so the first source is already the io error.
        let downcast = err
            .source()
            .and_then(|s| s.downcast_ref::<std::io::Error>());
        assert!(downcast.is_some(), "io error should be reachable through the chain");
    }

    #[test]
    fn context_errors_are_classified() {
        assert!(ModelError::NoContext { kind: "role" }.is_context_error());
        assert!(ModelError::ContextReleased { kind: "role" }.is_context_error());
        assert!(!ModelError::incomplete("guild member", "user").is_context_error());
    }
}
