//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! base descriptor.

use crate::config::DescriptorFormat;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the descriptor
    #[arg(short, long, default_value = "appconfig.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing descriptor");

        println!("📝 Initializing tierconf descriptor");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Descriptor already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(super::EXIT_CONFIG_ERROR);
        }

        let content = match DescriptorFormat::from_path(&self.output) {
            DescriptorFormat::Toml => Self::sample_toml().to_string(),
            DescriptorFormat::Json => Self::sample_json()?,
        };

        match fs::write(&self.output, content) {
            Ok(_) => {
                println!("✅ Descriptor created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Point SERVER_CONFIG at a per-host override descriptor");
                println!("  3. Validate: tierconf --config {} validate", self.output);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write descriptor");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    fn sample_toml() -> &'static str {
        r#"# tierconf base descriptor
#
# Values may reference environment variables as $NAME or $[NAME].
# Unset variables are left as written.

[[param]]
key = "SERVER_CONFIG"
name = "Server configuration"
type = "path"
description = "Override descriptor merged over this one when the file exists"
value = "$[SERVER_HOME]/server-config.toml"

[[param]]
key = "CACHE_SECONDS"
name = "Cache lifetime"
type = "int"
description = "Seconds before cached data expires"
value = "300"

[[param]]
key = "DEBUG"
name = "Debug mode"
type = "bool"
value = "false"
"#
    }

    fn sample_json() -> anyhow::Result<String> {
        let sample: toml::Value = toml::from_str(Self::sample_toml())?;
        Ok(serde_json::to_string_pretty(&sample)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigLoader, DescriptorReader, JsonDescriptor, TomlDescriptor};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_sample_toml_is_loadable() {
        let records = TomlDescriptor
            .read(&mut InitArgs::sample_toml().as_bytes(), "sample")
            .unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_sample_json_matches_toml() {
        let json = InitArgs::sample_json().unwrap();
        let records = JsonDescriptor.read(&mut json.as_bytes(), "sample").unwrap();
        let toml = TomlDescriptor
            .read(&mut InitArgs::sample_toml().as_bytes(), "sample")
            .unwrap();
        assert_eq!(records, toml);
    }

    #[test]
    fn test_init_writes_and_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("appconfig.toml");
        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };

        assert_eq!(args.execute().unwrap(), 0);
        assert_eq!(args.execute().unwrap(), 2);

        // SERVER_HOME unset, so the override is skipped
        let store = ConfigLoader::new()
            .with_root(dir.path())
            .with_env(Arc::new(HashMap::<String, String>::new()))
            .load("appconfig.toml")
            .unwrap();
        assert_eq!(store.cache_seconds().unwrap(), 300);
        assert!(!store.get_bool("DEBUG").unwrap());
    }
}
