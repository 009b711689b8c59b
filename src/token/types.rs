//! Continuation token value type

use super::codec::JsonTokenCodec;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque position marker in a paginated source.
///
/// Absence is modelled with `Option<ContinuationToken>`: `None` means
/// "start from the beginning" when passed in and "no more data" when
/// returned from a loader. A present but empty token is still a token;
/// only the codec treats it as carrying no payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContinuationToken(String);

impl ContinuationToken {
    /// Create a token from its raw value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build a token carrying a JSON payload
    pub fn from_json<P: Serialize + ?Sized>(payload: &P) -> Result<Self> {
        JsonTokenCodec.encode(payload)
    }

    /// Read the JSON payload carried by this token.
    ///
    /// Returns `Ok(None)` for an empty token.
    pub fn to_json<P: DeserializeOwned>(&self) -> Result<Option<P>> {
        JsonTokenCodec.decode(Some(self))
    }

    /// Raw token value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the raw value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw value, or `None` when empty
    pub fn non_empty(&self) -> Option<&str> {
        if self.0.is_empty() {
            None
        } else {
            Some(&self.0)
        }
    }

    /// Consume the token and return the raw value
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContinuationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ContinuationToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ContinuationToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<ContinuationToken> for String {
    fn from(token: ContinuationToken) -> Self {
        token.0
    }
}

impl AsRef<str> for ContinuationToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
