//! Validate command implementation
//!
//! Loads the configuration exactly as an application would and reports the
//! descriptors read, the entries resolved and any values that still hold
//! unresolved environment references.

use crate::cli::Cli;
use crate::config::{ConfigStore, SERVER_CONFIG};
use crate::env::scan;
use clap::Args;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Fail when any value still contains an unresolved reference
    #[arg(long)]
    pub strict: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        let location = cli.descriptor_location()?;
        tracing::info!(location = %location, "Validating configuration");

        println!("🔍 Validating configuration: {location}");
        println!();

        let store = match cli.loader(&location).load(&location) {
            Ok(store) => {
                println!("✅ Configuration loaded successfully");
                store
            }
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(super::EXIT_CONFIG_ERROR);
            }
        };

        println!();
        println!("Configuration Summary:");
        for (i, source) in store.sources().iter().enumerate() {
            let label = if i == 0 { "Base" } else { "Server" };
            println!("  {label} descriptor: {}", source.display());
        }
        if store.sources().len() < 2 {
            match store.get(SERVER_CONFIG) {
                Ok(path) if !path.is_empty() => {
                    println!("  Server descriptor: {path} (not found, skipped)")
                }
                _ => println!("  Server descriptor: none configured"),
            }
        }
        println!("  Entries: {}", store.len());

        let unresolved = unresolved_entries(&store);
        if unresolved.is_empty() {
            println!();
            return Ok(0);
        }

        println!();
        println!("⚠️  Unresolved environment references:");
        for (key, tokens) in &unresolved {
            println!("  {key}: {}", tokens.join(", "));
        }
        println!();

        Ok(if self.strict {
            super::EXIT_CONFIG_ERROR
        } else {
            0
        })
    }
}

/// Keys whose values still contain references, with those references
fn unresolved_entries(store: &ConfigStore) -> Vec<(String, Vec<String>)> {
    store
        .iter()
        .filter_map(|entry| {
            let tokens: Vec<String> = scan(&entry.value)
                .into_iter()
                .map(|token| token.to_string())
                .collect();
            (!tokens.is_empty()).then(|| (entry.key.clone(), tokens))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Record, RecordList};
    use std::collections::HashMap;

    #[test]
    fn test_unresolved_entries() {
        let records: RecordList = vec![
            Record::new("A", "$HOME/$[MISSING]"),
            Record::new("B", "$SET"),
            Record::new("C", "plain"),
        ]
        .into();
        let env = HashMap::from([
            ("HOME".to_string(), "/h".to_string()),
            ("SET".to_string(), "ok".to_string()),
        ]);
        let store = ConfigStore::build_with_env(records, None, &env);

        assert_eq!(
            unresolved_entries(&store),
            vec![("A".to_string(), vec!["$[MISSING]".to_string()])]
        );
    }
}
