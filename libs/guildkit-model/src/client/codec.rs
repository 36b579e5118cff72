use bytes::Bytes;
use serde_json::Value;

use crate::error::CodecError;

/// Wire codec collaborator: turns request bodies into bytes and response
/// bytes into a generic payload tree that entities are hydrated from.
pub trait PayloadCodec: Send + Sync {
    /// # Errors
    /// Returns [`CodecError::Encode`] if the body cannot be rendered.
    fn encode(&self, body: &Value) -> Result<Bytes, CodecError>;

    /// # Errors
    /// Returns [`CodecError::Decode`] if `raw` is not a valid payload.
    fn decode(&self, raw: &[u8]) -> Result<Value, CodecError>;
}

/// JSON codec. A blank response body decodes to `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl PayloadCodec for JsonCodec {
    fn encode(&self, body: &Value) -> Result<Bytes, CodecError> {
        serde_json::to_vec(body)
            .map(Bytes::from)
            .map_err(|e| CodecError::Encode(Box::new(e)))
    }

    fn decode(&self, raw: &[u8]) -> Result<Value, CodecError> {
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(raw).map_err(|e| CodecError::Decode(Box::new(e)))
    }
}
