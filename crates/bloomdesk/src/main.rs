// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bloomdesk - LLM-routed customer-resolution triage for Bloom Supplements.
//!
//! This is the binary entry point for the triage service.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod ask;
mod serve;
mod shutdown;

/// Bloomdesk - LLM-routed customer-resolution triage.
#[derive(Parser, Debug)]
#[command(name = "bloomdesk", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the triage HTTP gateway.
    Serve,
    /// Triage a single message and print the outcome as JSON.
    Ask {
        /// The customer message to triage.
        message: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match bloomdesk_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            bloomdesk_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Ask { message }) => ask::run_ask(config, &message).await,
        None => {
            println!("bloomdesk: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
