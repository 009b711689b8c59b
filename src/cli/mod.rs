//! CLI module
//!
//! Command-line helpers for inspecting and building continuation tokens.
//!
//! # Commands
//!
//! - `encode` - Pack a JSON payload into a token
//! - `decode` - Unpack a token into its JSON payload

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
