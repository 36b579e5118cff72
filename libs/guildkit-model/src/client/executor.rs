use async_trait::async_trait;
use bytes::Bytes;
use http::Method;

use crate::error::TransportError;

/// Transport collaborator: performs one request and returns the raw response
/// body.
///
/// Implementations own everything network related (base URL, authentication,
/// retries, rate limits). `path` already carries the configured API prefix.
/// An empty body (e.g. `204 No Content`) is returned as empty bytes.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Bytes>,
    ) -> Result<Bytes, TransportError>;
}
