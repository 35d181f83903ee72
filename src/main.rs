//
//  community-sdk
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use community_sdk::cli::{Cli, Commands};
use community_sdk::{exit_codes, ApiError};

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code_for(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("COMMUNITY_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Picks the exit code from the first API error in the chain.
fn exit_code_for(error: &anyhow::Error) -> i32 {
    let status = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ApiError>())
        .and_then(ApiError::status);

    match status {
        Some(401) => exit_codes::AUTH_ERROR,
        Some(403) => exit_codes::FORBIDDEN,
        Some(404) | Some(410) => exit_codes::NOT_FOUND,
        _ => exit_codes::ERROR,
    }
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::People(cmd) => cmd.run(&cli.global).await,
        Commands::Content(cmd) => cmd.run(&cli.global).await,
        Commands::Places(cmd) => cmd.run(&cli.global).await,
        Commands::Activity(cmd) => cmd.run(&cli.global).await,
        Commands::Search(cmd) => cmd.run(&cli.global).await,
        Commands::Api(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("{} version {}", community_sdk::APP_NAME, community_sdk::VERSION);
            Ok(())
        }
    }
}
