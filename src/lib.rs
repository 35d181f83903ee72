//
//  community-sdk
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Community SDK
//!
//! A typed client library and command-line tool for the Community REST API
//! of an enterprise social platform.
//!
//! ## Overview
//!
//! The library offers one async method per API endpoint. Each method builds
//! a query string, issues an HTTP call with Basic authentication, decodes the
//! JSON response into typed models and translates HTTP status codes into
//! endpoint-specific messages. List endpoints follow the server's
//! `links.next` chain until it ends and return every record.
//!
//! ## Module Structure
//!
//! - [`api`]: The HTTP client, pagination driver and endpoint methods
//! - [`auth`]: Basic authentication credential
//! - [`config`]: Configuration file and client configuration resolution
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Output formatting (Table, JSON)
//! - [`interactive`]: Confirmation, password and editor prompts
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use community_sdk::api::CommunityClient;
//! use community_sdk::config::{ClientConfig, Config, Overrides};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let client_config = ClientConfig::resolve(&config, &Overrides::default())?;
//! let client = CommunityClient::new(&client_config)?;
//!
//! let me = client.get_me().await?;
//! println!("Signed in as {}", me.display_name);
//! # Ok(())
//! # }
//! ```

/// Community API client, shared types and endpoint methods.
pub mod api;

/// Basic authentication credential.
pub mod auth;

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the
/// clap derive API.
pub mod cli;

/// Configuration file management.
///
/// Stored in platform-specific locations:
/// - Linux: `~/.config/community/config.toml`
/// - macOS: `~/Library/Application Support/community/config.toml`
/// - Windows: `%APPDATA%\community\config.toml`
pub mod config;

/// Output formatting for tables and JSON.
pub mod output;

/// Interactive prompts for confirmations, passwords and editor input.
pub mod interactive;

pub use api::{ApiError, CommunityClient};
pub use auth::Credential;
pub use cli::Cli;
pub use config::{ClientConfig, Config};

/// Name of the CLI binary.
pub const APP_NAME: &str = "community";

/// Crate version, taken from Cargo.toml at compile time.
///
/// ```rust
/// use community_sdk::VERSION;
///
/// println!("community version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
pub mod exit_codes {
    /// The command completed without errors.
    pub const SUCCESS: i32 = 0;

    /// An unspecified error occurred. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// The command was invoked with invalid arguments or options.
    pub const USAGE: i32 = 2;

    /// The server rejected the credentials (HTTP 401).
    pub const AUTH_ERROR: i32 = 4;

    /// Access to the resource was denied (HTTP 403).
    pub const FORBIDDEN: i32 = 5;

    /// The requested resource does not exist (HTTP 404 or 410).
    pub const NOT_FOUND: i32 = 8;
}
