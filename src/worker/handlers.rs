//! Loader and processor contracts
//!
//! Both traits are implemented for async closures, so most callers never
//! implement them by hand:
//!
//! ```rust,ignore
//! let loader = |token: Option<ContinuationToken>| async move {
//!     client.list_objects(token).await
//! };
//! ```

use super::types::Batch;
use crate::token::ContinuationToken;
use async_trait::async_trait;
use std::future::Future;

/// Loads the batch identified by a continuation token.
///
/// `None` asks for the first batch of the source.
#[async_trait]
pub trait BatchLoader<T: Send + 'static>: Send + Sync {
    /// Load the batch that starts at `token`
    async fn load(&self, token: Option<ContinuationToken>) -> anyhow::Result<Batch<T>>;
}

/// Consumes the items of one batch
#[async_trait]
pub trait BatchProcessor<T: Send + 'static>: Send + Sync {
    /// Process the items of a single batch, in source order
    async fn process(&self, items: Vec<T>) -> anyhow::Result<()>;
}

#[async_trait]
impl<T, F, Fut> BatchLoader<T> for F
where
    T: Send + 'static,
    F: Fn(Option<ContinuationToken>) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Batch<T>>> + Send + 'static,
{
    async fn load(&self, token: Option<ContinuationToken>) -> anyhow::Result<Batch<T>> {
        (self)(token).await
    }
}

#[async_trait]
impl<T, F, Fut> BatchProcessor<T> for F
where
    T: Send + 'static,
    F: Fn(Vec<T>) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    async fn process(&self, items: Vec<T>) -> anyhow::Result<()> {
        (self)(items).await
    }
}
