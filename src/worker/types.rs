//! Worker types
//!
//! Batch results returned by loaders and metrics snapshots reported by the worker.

use crate::token::ContinuationToken;
use serde::{Deserialize, Serialize};

/// One page of items loaded from a continuable source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch<T> {
    content: Vec<T>,
    next_token: Option<ContinuationToken>,
    total: Option<u64>,
}

impl<T> Batch<T> {
    /// Create a batch from its parts
    pub fn new(content: Vec<T>, next_token: Option<ContinuationToken>, total: Option<u64>) -> Self {
        Self {
            content,
            next_token,
            total,
        }
    }

    /// Create a batch followed by more data
    pub fn continued(content: Vec<T>, next_token: impl Into<ContinuationToken>) -> Self {
        Self::new(content, Some(next_token.into()), None)
    }

    /// Create the final batch of a source
    pub fn last(content: Vec<T>) -> Self {
        Self::new(content, None, None)
    }

    /// Create an empty final batch
    pub fn empty() -> Self {
        Self::last(Vec::new())
    }

    /// Set the total item count reported by the source
    #[must_use]
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// Items in this batch, in source order
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Token for the following batch, `None` when this is the last one
    pub fn next_token(&self) -> Option<&ContinuationToken> {
        self.next_token.as_ref()
    }

    /// Total item count across the whole source, if the source reports it
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Check if another batch follows
    pub fn has_next(&self) -> bool {
        self.next_token.is_some()
    }

    /// Number of items in this batch
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if this batch has no items
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Split into `(content, next_token, total)`
    pub fn into_parts(self) -> (Vec<T>, Option<ContinuationToken>, Option<u64>) {
        (self.content, self.next_token, self.total)
    }

    /// Convert the items, keeping token and total
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Batch<U> {
        Batch {
            content: self.content.into_iter().map(f).collect(),
            next_token: self.next_token,
            total: self.total,
        }
    }
}

/// Snapshot of worker progress, taken after a completed batch.
///
/// Snapshots are plain values: later batches never change a snapshot
/// already handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub(super) total_items: Option<u64>,
    pub(super) completed_token: Option<ContinuationToken>,
    pub(super) next_token: Option<ContinuationToken>,
    pub(super) processed_items: u64,
    pub(super) processed_batches: u64,
    pub(super) batch_max_time_ms: u64,
    pub(super) batch_min_time_ms: u64,
    pub(super) total_time_ms: u64,
}

impl Metrics {
    /// Last total item count reported by the source
    pub fn total_items(&self) -> Option<u64> {
        self.total_items
    }

    /// Token consumed to load the last completed batch.
    ///
    /// `None` when that batch was loaded from the start of the source.
    pub fn completed_token(&self) -> Option<&ContinuationToken> {
        self.completed_token.as_ref()
    }

    /// Token returned by the last completed batch.
    ///
    /// This is the token to resume from; `None` once the source is exhausted.
    pub fn next_token(&self) -> Option<&ContinuationToken> {
        self.next_token.as_ref()
    }

    /// Items handed to the processor so far
    pub fn processed_items(&self) -> u64 {
        self.processed_items
    }

    /// Batches completed so far
    pub fn processed_batches(&self) -> u64 {
        self.processed_batches
    }

    /// Slowest single batch (load + process), in milliseconds
    pub fn batch_max_time_ms(&self) -> u64 {
        self.batch_max_time_ms
    }

    /// Fastest single batch (load + process), in milliseconds
    pub fn batch_min_time_ms(&self) -> u64 {
        self.batch_min_time_ms
    }

    /// Time spent in all batches, in milliseconds
    pub fn total_time_ms(&self) -> u64 {
        self.total_time_ms
    }

    /// Check if the source has been fully consumed
    pub fn is_finished(&self) -> bool {
        self.processed_batches > 0 && self.next_token.is_none()
    }

    /// Fraction of the reported total processed so far
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_ratio(&self) -> Option<f64> {
        match self.total_items {
            Some(total) if total > 0 => Some(self.processed_items as f64 / total as f64),
            _ => None,
        }
    }
}
