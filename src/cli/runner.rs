//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::error::Result;
use crate::token::{ContinuationToken, JsonTokenCodec};
use serde_json::Value;
use std::io::Read;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
    codec: JsonTokenCodec,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            codec: JsonTokenCodec::new(),
        }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its output
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Encode { json } => {
                let input = input_or_stdin(json.as_deref())?;
                self.encode(&input)
            }
            Commands::Decode { token, compact } => {
                let input = input_or_stdin(token.as_deref())?;
                self.decode(&input, *compact)
            }
        }
    }

    fn encode(&self, json: &str) -> Result<String> {
        let payload: Value = serde_json::from_str(json)?;
        let token = self.codec.encode(&payload)?;
        debug!(len = token.as_str().len(), "Encoded token");
        Ok(token.into_inner())
    }

    fn decode(&self, raw: &str, compact: bool) -> Result<String> {
        let token = ContinuationToken::new(raw);
        let payload = self.codec.decode_value(Some(&token))?.unwrap_or(Value::Null);
        let rendered = if compact {
            serde_json::to_string(&payload)?
        } else {
            serde_json::to_string_pretty(&payload)?
        };
        Ok(rendered)
    }
}

fn input_or_stdin(arg: Option<&str>) -> Result<String> {
    let raw = match arg {
        Some(value) => value.to_string(),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(raw.trim().to_string())
}
