//! JSON continuation token codec
//!
//! Wire format: the payload serialized as JSON, taken as UTF-8 bytes, then
//! encoded with standard (padded) base64 into a single string.

use super::types::ContinuationToken;
use crate::error::{Error, Result, TokenDecodeError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Stateless codec between structured payloads and continuation tokens.
///
/// Safe to share between tasks; it holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTokenCodec;

impl JsonTokenCodec {
    /// Create a new codec
    pub fn new() -> Self {
        Self
    }

    /// Encode a payload into a token
    pub fn encode<P: Serialize + ?Sized>(&self, payload: &P) -> Result<ContinuationToken> {
        let json = serde_json::to_string(payload).map_err(|source| Error::Encoding { source })?;
        Ok(ContinuationToken::new(STANDARD.encode(json.as_bytes())))
    }

    /// Decode a token back into a payload of shape `P`.
    ///
    /// Absent and empty tokens carry no payload and yield `Ok(None)`.
    pub fn decode<P: DeserializeOwned>(
        &self,
        token: Option<&ContinuationToken>,
    ) -> Result<Option<P>> {
        let Some(json) = Self::decode_text(token)? else {
            return Ok(None);
        };
        let payload = serde_json::from_str(&json).map_err(TokenDecodeError::from)?;
        Ok(Some(payload))
    }

    /// Decode a token into an untyped JSON value
    pub fn decode_value(&self, token: Option<&ContinuationToken>) -> Result<Option<Value>> {
        self.decode(token)
    }

    fn decode_text(token: Option<&ContinuationToken>) -> Result<Option<String>> {
        let Some(raw) = token.and_then(ContinuationToken::non_empty) else {
            return Ok(None);
        };
        let bytes = STANDARD.decode(raw).map_err(TokenDecodeError::from)?;
        let text = String::from_utf8(bytes).map_err(TokenDecodeError::from)?;
        Ok(Some(text))
    }
}
