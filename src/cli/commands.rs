//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Continuation token toolkit
#[derive(Parser, Debug)]
#[command(name = "continuable")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode a JSON payload as a continuation token
    Encode {
        /// JSON payload (read from stdin when omitted)
        json: Option<String>,
    },

    /// Decode a continuation token into its JSON payload
    Decode {
        /// Token to decode (read from stdin when omitted)
        token: Option<String>,

        /// Print compact JSON instead of pretty JSON
        #[arg(long)]
        compact: bool,
    },
}
