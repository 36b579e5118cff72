//! The client context every hydrated entity holds a handle to.
//!
//! A [`Client`] owns its collaborators (the [`RequestExecutor`] transport and
//! the [`PayloadCodec`]). Entities keep only a [`ClientHandle`], a non-owning
//! back reference: dropping the last `Client` releases the collaborators even
//! while snapshots are still alive, and actions on those snapshots then fail
//! with [`ModelError::ContextReleased`].

mod codec;
mod executor;

use std::fmt;
use std::sync::{Arc, Weak};

use http::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use codec::{JsonCodec, PayloadCodec};
pub use executor::RequestExecutor;

use crate::config::ClientConfig;
use crate::entity::AttachContext;
use crate::error::ModelError;
use crate::tracked::UpdatePayload;

struct ClientInner {
    executor: Arc<dyn RequestExecutor>,
    codec: Arc<dyn PayloadCodec>,
    config: ClientConfig,
}

/// Shared, cheaply cloneable entry point for requests.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_prefix", &self.inner.config.api_prefix)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client that speaks JSON.
    #[must_use]
    pub fn new(executor: Arc<dyn RequestExecutor>, config: ClientConfig) -> Self {
        Self::with_codec(executor, Arc::new(JsonCodec), config)
    }

    #[must_use]
    pub fn with_codec(
        executor: Arc<dyn RequestExecutor>,
        codec: Arc<dyn PayloadCodec>,
        config: ClientConfig,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                executor,
                codec,
                config,
            }),
        }
    }

    /// A non-owning handle to this client, as stored by entities.
    #[must_use]
    pub fn handle(&self) -> ClientHandle {
        ClientHandle {
            inner: Some(Arc::downgrade(&self.inner)),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Prefixes `path` with the configured API prefix.
    #[must_use]
    pub fn route(&self, path: &str) -> String {
        format!("{}{path}", self.inner.config.api_prefix.trim_end_matches('/'))
    }

    /// Sends a request and returns the decoded (untyped) response body.
    ///
    /// # Errors
    /// Returns [`ModelError::Codec`] or [`ModelError::Transport`] as reported
    /// by the collaborators.
    pub async fn send_raw(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ModelError> {
        let route = self.route(path);
        let encoded = body.map(|b| self.inner.codec.encode(b)).transpose()?;

        tracing::debug!(
            method = %method,
            route = %route,
            has_body = encoded.is_some(),
            "sending request"
        );
        if self.inner.config.log_bodies
            && let Some(body) = body
        {
            tracing::trace!(route = %route, body = %body, "request body");
        }

        let raw = self.inner.executor.send(method, &route, encoded).await?;
        Ok(self.inner.codec.decode(&raw)?)
    }

    /// Sends a request, hydrates the response as `T` and attaches this client
    /// to it (and to everything it contains).
    ///
    /// # Errors
    /// Returns [`ModelError::Decode`] if the response does not have the shape
    /// of `T`, and any error of [`Client::send_raw`].
    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ModelError>
    where
        T: DeserializeOwned + AttachContext,
    {
        let value = self.send_raw(method, path, body).await?;
        let mut hydrated: T =
            serde_json::from_value(value).map_err(|source| ModelError::Decode {
                kind: std::any::type_name::<T>(),
                source,
            })?;
        hydrated.attach_context(&self.handle());
        Ok(hydrated)
    }

    /// Sends a request whose response body is ignored.
    ///
    /// # Errors
    /// Same as [`Client::send_raw`].
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<(), ModelError> {
        self.send_raw(method, path, body).await.map(|_| ())
    }

    /// Sends the sparse body of `payload` (touched fields only) and hydrates
    /// the response.
    ///
    /// # Errors
    /// Same as [`Client::request`].
    pub async fn send_update<T, P>(
        &self,
        method: Method,
        path: &str,
        payload: &P,
    ) -> Result<T, ModelError>
    where
        T: DeserializeOwned + AttachContext,
        P: UpdatePayload + Sync + ?Sized,
    {
        let body = payload.to_sparse_map();
        tracing::debug!(
            route = %path,
            fields = %body.keys().collect::<Vec<_>>().join(","),
            "sending sparse update"
        );
        self.request(method, path, Some(&body.into_value())).await
    }

    /// True if `handle` refers to this client.
    #[must_use]
    pub fn owns(&self, handle: &ClientHandle) -> bool {
        handle
            .inner
            .as_ref()
            .is_some_and(|weak| std::ptr::eq(weak.as_ptr(), Arc::as_ptr(&self.inner)))
    }
}

/// Non-owning reference from an entity back to the [`Client`] that produced
/// it.
///
/// The default handle is detached. Two handles are equal when both are
/// detached or both point at the same client.
#[derive(Clone, Default)]
pub struct ClientHandle {
    inner: Option<Weak<ClientInner>>,
}

impl ClientHandle {
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// True once the handle was attached to a client, even if that client
    /// has since been dropped.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.inner.is_some()
    }

    /// True while the client is still alive.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.inner.as_ref().is_some_and(|w| w.strong_count() > 0)
    }

    /// Upgrades to the owning client.
    ///
    /// # Errors
    /// Returns [`ModelError::NoContext`] for a detached handle and
    /// [`ModelError::ContextReleased`] once the client is gone. `kind` names
    /// the entity in the error.
    pub fn upgrade(&self, kind: &'static str) -> Result<Client, ModelError> {
        let weak = self.inner.as_ref().ok_or(ModelError::NoContext { kind })?;
        weak.upgrade()
            .map(|inner| Client { inner })
            .ok_or(ModelError::ContextReleased { kind })
    }
}

impl PartialEq for ClientHandle {
    fn eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (None, None) => true,
            (Some(a), Some(b)) => Weak::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for ClientHandle {}

impl fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.inner {
            None => "detached",
            Some(w) if w.strong_count() > 0 => "live",
            Some(_) => "released",
        };
        f.debug_tuple("ClientHandle").field(&state).finish()
    }
}
