//! Show command implementation

use crate::cli::Cli;
use crate::config::ConfigStore;
use clap::Args;

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Print entries as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        let store = match cli.load_store() {
            Ok(store) => store,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(super::EXIT_CONFIG_ERROR);
            }
        };

        println!("{}", self.render(&store)?);
        Ok(0)
    }

    fn render(&self, store: &ConfigStore) -> anyhow::Result<String> {
        if self.json {
            let entries: Vec<_> = store.iter().collect();
            return Ok(serde_json::to_string_pretty(&entries)?);
        }

        let width = store.iter().map(|e| e.key.len()).max().unwrap_or(0);
        let lines: Vec<String> = store
            .iter()
            .map(|entry| format!("{:width$}  {}", entry.key, entry.value))
            .collect();
        Ok(lines.join("\n"))
    }
}
