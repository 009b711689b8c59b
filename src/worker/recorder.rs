//! Metrics accumulation for a single worker run

use super::types::Metrics;
use crate::token::ContinuationToken;
use std::time::Duration;

/// Mutable metrics accumulator owned by one run of the worker.
///
/// Only snapshots leave the run.
#[derive(Debug)]
pub(crate) struct MetricsRecorder {
    total_items: Option<u64>,
    completed_token: Option<ContinuationToken>,
    next_token: Option<ContinuationToken>,
    processed_items: u64,
    processed_batches: u64,
    batch_max_time_ms: u64,
    batch_min_time_ms: u64,
    total_time: Duration,
}

impl MetricsRecorder {
    pub(crate) fn new() -> Self {
        Self {
            total_items: None,
            completed_token: None,
            next_token: None,
            processed_items: 0,
            processed_batches: 0,
            batch_max_time_ms: 0,
            batch_min_time_ms: u64::MAX,
            total_time: Duration::ZERO,
        }
    }

    /// Record a completed batch
    pub(crate) fn record_batch(
        &mut self,
        items: usize,
        elapsed: Duration,
        total: Option<u64>,
        completed_token: Option<ContinuationToken>,
        next_token: Option<ContinuationToken>,
    ) {
        // Sources report a running grand total; a batch without one keeps the last known value
        if total.is_some() {
            self.total_items = total;
        }
        self.completed_token = completed_token;
        self.next_token = next_token;

        self.total_time += elapsed;
        self.processed_items += items as u64;
        self.processed_batches += 1;

        let ms = to_millis(elapsed);
        self.batch_max_time_ms = self.batch_max_time_ms.max(ms);
        self.batch_min_time_ms = self.batch_min_time_ms.min(ms);
    }

    pub(crate) fn processed_batches(&self) -> u64 {
        self.processed_batches
    }

    pub(crate) fn snapshot(&self) -> Metrics {
        Metrics {
            total_items: self.total_items,
            completed_token: self.completed_token.clone(),
            next_token: self.next_token.clone(),
            processed_items: self.processed_items,
            processed_batches: self.processed_batches,
            batch_max_time_ms: self.batch_max_time_ms,
            batch_min_time_ms: if self.processed_batches == 0 {
                0
            } else {
                self.batch_min_time_ms
            },
            total_time_ms: to_millis(self.total_time),
        }
    }
}

fn to_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
