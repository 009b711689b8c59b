//! # Continuable
//!
//! Drive paginated sources that hand out opaque continuation tokens
//! (object storage listings, search APIs, change feeds) batch by batch.
//!
//! ## Features
//!
//! - **Batch Worker**: load → process → advance loop until the source runs dry
//! - **Progress Metrics**: item/batch counts and per-batch timings after every batch
//! - **Cooperative Cancellation**: checked between batches via `CancellationToken`
//! - **Resumable Tokens**: pack structured resume state into a single string (JSON + base64)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use continuable::{Batch, BatchWorker, ContinuationToken, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let worker = BatchWorker::new(
//!         |token: Option<ContinuationToken>| async move {
//!             let page = client.list(token).await?;
//!             anyhow::Ok(Batch::new(page.items, page.next, page.total))
//!         },
//!         |items: Vec<Object>| async move {
//!             index(items).await
//!         },
//!     );
//!
//!     let metrics = worker
//!         .process_all_with_progress(|m| println!("{} items", m.processed_items()))
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        BatchWorker                         │
//! │  loop { check cancel → load(token) → process(items)        │
//! │         → record metrics → progress(snapshot) }            │
//! └────────────────────────────────────────────────────────────┘
//!          │                    │                     │
//!   ┌──────┴──────┐     ┌───────┴──────┐     ┌────────┴───────┐
//!   │ BatchLoader │     │BatchProcessor│     │ JsonTokenCodec │
//!   │ (caller)    │     │ (caller)     │     │ JSON + base64  │
//!   └─────────────┘     └──────────────┘     └────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
#[allow(missing_docs)]
pub mod error;

/// Continuation tokens and the JSON token codec
pub mod token;

/// Batch iteration driver
pub mod worker;

/// Worker configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::WorkerConfig;
pub use error::{Error, Result};
pub use token::{ContinuationToken, JsonTokenCodec};
pub use worker::{Batch, BatchLoader, BatchProcessor, BatchWorker, BatchWorkerBuilder, Metrics};

/// Re-exported so callers need not depend on tokio-util directly
pub use tokio_util::sync::CancellationToken;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
