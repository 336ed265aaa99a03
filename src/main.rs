// tierconf - Layered configuration with environment substitution
// Copyright (c) 2025 Tierconf Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use tierconf::cli::{Cli, Commands};
use tierconf::logging::init_logging;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = cli.log_level.as_deref().unwrap_or("warn");
    let guard = match init_logging(log_level, &cli.logging_options()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "tierconf starting");

    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Show(args) => args.execute(cli),
        Commands::Get(args) => args.execute(cli),
        Commands::Validate(args) => args.execute(cli),
        Commands::Scan(args) => args.execute(),
        Commands::Init(args) => args.execute(),
    }
}
