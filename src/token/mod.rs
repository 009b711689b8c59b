//! Continuation token module
//!
//! Opaque resume handles for paginated sources.
//!
//! # Overview
//!
//! The token module provides:
//! - `ContinuationToken` - The opaque string value passed between batches
//! - `JsonTokenCodec` - Packs structured resume state into a token (JSON + base64)
//!
//! Tokens issued by an external source pass through the worker untouched.
//! The codec is only needed when the caller has to carry its own state
//! inside the token.

mod codec;
mod types;

pub use codec::JsonTokenCodec;
pub use types::ContinuationToken;
