//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for tierconf using clap.

pub mod commands;

use crate::config::{global, ConfigLoader, ConfigStore, DescriptorFormat};
use crate::domain::Result;
use crate::logging::LoggingOptions;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// tierconf - layered configuration with environment substitution
#[derive(Parser, Debug)]
#[command(name = "tierconf")]
#[command(version, about, long_about = None)]
#[command(author = "Tierconf Contributors")]
pub struct Cli {
    /// Base descriptor location, relative to the search root.
    /// Defaults to the bootstrap properties' CONFIGFILE
    #[arg(short, long, env = "TIERCONF_CONFIG")]
    pub config: Option<String>,

    /// Search root for descriptor and bootstrap resources
    #[arg(short, long, default_value = ".", env = "TIERCONF_ROOT")]
    pub root: String,

    /// Descriptor syntax; inferred from the file extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "TIERCONF_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit log lines as JSON
    #[arg(long, env = "TIERCONF_LOG_JSON")]
    pub log_json: bool,

    /// Also write JSON logs to a daily rotated file in this directory
    #[arg(long, env = "TIERCONF_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Descriptor syntax accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Toml,
    Json,
}

impl From<FormatArg> for DescriptorFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Toml => DescriptorFormat::Toml,
            FormatArg::Json => DescriptorFormat::Json,
        }
    }
}

impl Cli {
    /// Loader configured from the global options
    pub fn loader(&self, location: &str) -> ConfigLoader {
        let format = self
            .format
            .map(DescriptorFormat::from)
            .unwrap_or_else(|| DescriptorFormat::from_path(location));
        ConfigLoader::new().with_root(&self.root).with_format(format)
    }

    /// Base descriptor location, from `--config` or the bootstrap properties
    pub fn descriptor_location(&self) -> Result<String> {
        match &self.config {
            Some(location) => Ok(location.clone()),
            None => global::descriptor_location(&ConfigLoader::new().with_root(&self.root)),
        }
    }

    pub fn logging_options(&self) -> LoggingOptions {
        LoggingOptions {
            json: self.log_json,
            directory: self.log_dir.clone(),
        }
    }

    /// Loads the configuration selected by the global options
    pub fn load_store(&self) -> Result<ConfigStore> {
        let location = self.descriptor_location()?;
        self.loader(&location).load(&location)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every resolved entry
    Show(commands::show::ShowArgs),

    /// Print a single value
    Get(commands::get::GetArgs),

    /// Load the configuration and report what was read
    Validate(commands::validate::ValidateArgs),

    /// Show the environment references in a string and their resolution
    Scan(commands::scan::ScanArgs),

    /// Write a sample descriptor
    Init(commands::init::InitArgs),
}
