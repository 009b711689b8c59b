//! Batch worker module
//!
//! Works through a continuable source one batch at a time:
//!
//! 1. Load the batch for the current token
//! 2. Hand its items to the processor
//! 3. Record metrics and report a snapshot
//! 4. Repeat with the returned token until the source returns none
//!
//! # Overview
//!
//! The worker module provides:
//! - `BatchWorker` - The fetch/process/advance loop
//! - `BatchLoader` / `BatchProcessor` - Caller-supplied collaborators
//! - `Batch` - One page returned by a loader
//! - `Metrics` - Progress snapshot reported after every batch
//!
//! Loader, processor and progress callback run sequentially on the calling
//! task. Cancellation is polled before each batch, never mid-batch.
//! Failures abort the run; nothing is retried.

mod handlers;
mod recorder;
mod types;

pub use handlers::{BatchLoader, BatchProcessor};
pub use types::{Batch, Metrics};

use crate::config::WorkerConfig;
use crate::error::{Error, Result};
use crate::token::ContinuationToken;
use recorder::MetricsRecorder;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Instrument};

/// Drives a continuable source batch by batch
pub struct BatchWorker<T: Send + 'static> {
    loader: Box<dyn BatchLoader<T>>,
    processor: Box<dyn BatchProcessor<T>>,
    config: WorkerConfig,
}

impl<T: Send + 'static> BatchWorker<T> {
    /// Create a new worker from a loader and a processor
    pub fn new(
        loader: impl BatchLoader<T> + 'static,
        processor: impl BatchProcessor<T> + 'static,
    ) -> Self {
        Self {
            loader: Box::new(loader),
            processor: Box::new(processor),
            config: WorkerConfig::default(),
        }
    }

    /// Start building a worker whose collaborators are supplied separately
    pub fn builder() -> BatchWorkerBuilder<T> {
        BatchWorkerBuilder::new()
    }

    /// Set worker configuration
    #[must_use]
    pub fn with_config(mut self, config: WorkerConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the worker configuration
    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    /// Process all items from the start of the source
    pub async fn process_all(&self) -> Result<Metrics> {
        self.process_all_from_with(None, |_| {}, &CancellationToken::new())
            .await
    }

    /// Process all items, reporting a snapshot after every batch
    pub async fn process_all_with_progress<F>(&self, progress: F) -> Result<Metrics>
    where
        F: FnMut(Metrics),
    {
        self.process_all_from_with(None, progress, &CancellationToken::new())
            .await
    }

    /// Process all items with progress reporting and cancellation
    pub async fn process_all_with<F>(
        &self,
        progress: F,
        cancellation: &CancellationToken,
    ) -> Result<Metrics>
    where
        F: FnMut(Metrics),
    {
        self.process_all_from_with(None, progress, cancellation).await
    }

    /// Process all items starting at `start_token`, e.g. to resume earlier work
    pub async fn process_all_from(
        &self,
        start_token: Option<ContinuationToken>,
    ) -> Result<Metrics> {
        self.process_all_from_with(start_token, |_| {}, &CancellationToken::new())
            .await
    }

    /// Process all items starting at `start_token`.
    ///
    /// `None` starts at the beginning of the source. `progress` receives a
    /// snapshot after every completed batch. Returns the final snapshot once
    /// a batch comes back without a next token.
    ///
    /// # Errors
    ///
    /// - `Error::Cancelled` when `cancellation` fires, observed between batches
    /// - `Error::BatchLoad` when the loader fails
    /// - `Error::BatchProcess` when the processor fails
    ///
    /// No metrics are returned on failure; the last snapshot passed to
    /// `progress` holds the token to resume from.
    pub async fn process_all_from_with<F>(
        &self,
        start_token: Option<ContinuationToken>,
        mut progress: F,
        cancellation: &CancellationToken,
    ) -> Result<Metrics>
    where
        F: FnMut(Metrics),
    {
        let span = info_span!("batch_worker", name = %self.config.name);
        self.run(start_token, &mut progress, cancellation)
            .instrument(span)
            .await
    }

    async fn run<F>(
        &self,
        start_token: Option<ContinuationToken>,
        progress: &mut F,
        cancellation: &CancellationToken,
    ) -> Result<Metrics>
    where
        F: FnMut(Metrics),
    {
        let mut next_token = start_token;
        let mut recorder = MetricsRecorder::new();

        loop {
            if cancellation.is_cancelled() {
                let completed_batches = recorder.processed_batches();
                warn!(completed_batches, "Batch processing cancelled");
                return Err(Error::Cancelled {
                    next_token,
                    completed_batches,
                });
            }

            let start = Instant::now();

            let batch = self
                .loader
                .load(next_token.clone())
                .await
                .map_err(|e| Error::batch_load(next_token.clone(), e))?;

            let (items, returned_token, total) = batch.into_parts();
            let item_count = items.len();

            self.processor
                .process(items)
                .await
                .map_err(|e| Error::batch_process(next_token.clone(), item_count, e))?;

            let elapsed = start.elapsed();
            let completed_token = std::mem::replace(&mut next_token, returned_token);
            recorder.record_batch(
                item_count,
                elapsed,
                total,
                completed_token,
                next_token.clone(),
            );

            let snapshot = recorder.snapshot();
            if self.config.log_progress {
                debug!(
                    batch = snapshot.processed_batches(),
                    items = item_count,
                    elapsed_ms = elapsed.as_millis() as u64,
                    next_token = ?snapshot.next_token().map(ContinuationToken::as_str),
                    "Processed batch"
                );
            }

            if next_token.is_none() {
                progress(snapshot.clone());
                info!(
                    batches = snapshot.processed_batches(),
                    items = snapshot.processed_items(),
                    total_time_ms = snapshot.total_time_ms(),
                    "Completed batch processing"
                );
                return Ok(snapshot);
            }

            progress(snapshot);
        }
    }
}

/// Builder for `BatchWorker`.
///
/// Unlike `BatchWorker::new`, collaborators may be wired in from separate
/// places; `build` reports whichever is missing.
pub struct BatchWorkerBuilder<T: Send + 'static> {
    loader: Option<Box<dyn BatchLoader<T>>>,
    processor: Option<Box<dyn BatchProcessor<T>>>,
    config: WorkerConfig,
}

impl<T: Send + 'static> Default for BatchWorkerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> BatchWorkerBuilder<T> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            loader: None,
            processor: None,
            config: WorkerConfig::default(),
        }
    }

    /// Set the batch loader
    #[must_use]
    pub fn loader(mut self, loader: impl BatchLoader<T> + 'static) -> Self {
        self.loader = Some(Box::new(loader));
        self
    }

    /// Set the batch processor
    #[must_use]
    pub fn processor(mut self, processor: impl BatchProcessor<T> + 'static) -> Self {
        self.processor = Some(Box::new(processor));
        self
    }

    /// Set worker configuration
    #[must_use]
    pub fn config(mut self, config: WorkerConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the worker
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` naming the missing collaborator.
    pub fn build(self) -> Result<BatchWorker<T>> {
        let loader = self.loader.ok_or(Error::invalid_argument("loader"))?;
        let processor = self
            .processor
            .ok_or(Error::invalid_argument("processor"))?;

        Ok(BatchWorker {
            loader,
            processor,
            config: self.config,
        })
    }
}
