//! Get command implementation

use crate::cli::Cli;
use crate::config::ConfigStore;
use crate::domain::{ConfigError, Result};
use clap::{Args, ValueEnum};

/// Type a value is read as
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValueType {
    #[default]
    String,
    Int,
    Long,
    Bool,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Key to look up
    pub key: String,

    /// Parse the value as this type
    #[arg(long = "as", value_enum, default_value_t = ValueType::String)]
    pub value_type: ValueType,

    /// Print the full entry with its metadata as JSON
    #[arg(long, conflicts_with = "value_type")]
    pub entry: bool,
}

impl GetArgs {
    /// Execute the get command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        let output = cli.load_store().and_then(|store| self.lookup(&store));
        match output {
            Ok(text) => {
                println!("{text}");
                Ok(0)
            }
            Err(e) => {
                tracing::debug!(key = %self.key, error = %e, "Lookup failed");
                eprintln!("❌ {e}");
                Ok(super::EXIT_CONFIG_ERROR)
            }
        }
    }

    fn lookup(&self, store: &ConfigStore) -> Result<String> {
        if self.entry {
            return serde_json::to_string_pretty(store.get_entry(&self.key)?)
                .map_err(|e| ConfigError::Configuration(e.to_string()));
        }
        Ok(match self.value_type {
            ValueType::String => store.get_string(&self.key)?,
            ValueType::Int => store.get_int(&self.key)?.to_string(),
            ValueType::Long => store.get_long(&self.key)?.to_string(),
            ValueType::Bool => store.get_bool(&self.key)?.to_string(),
        })
    }
}
