//
//  community-sdk
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod activity;
mod api;
mod completion;
mod config;
mod content;
mod people;
mod places;
mod search;

pub use activity::ActivityCommand;
pub use api::ApiCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use content::ContentCommand;
pub use people::PeopleCommand;
pub use places::PlacesCommand;
pub use search::SearchCommand;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};

use crate::api::CommunityClient;
use crate::config::{ClientConfig, Config, Overrides};
use crate::output::{OutputFormat, OutputWriter};

/// Community CLI - Work with a Community instance from the command line
#[derive(Parser, Debug)]
#[command(
    name = "community",
    version,
    about = "Work with a Community instance from the command line",
    long_about = "community is a CLI for the Community REST API.\n\n\
                  It brings people, content, places, activity and search to your terminal.",
    propagate_version = true,
    after_help = "Use 'community <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Configured host to use
    #[arg(long, global = true, env = "COMMUNITY_HOST")]
    pub host: Option<String>,

    /// Community site or REST API URL (overrides the host entry)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Username to authenticate as
    #[arg(long, short = 'u', global = true)]
    pub username: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Builds a client from flags, the environment and the config file.
    pub fn client(&self) -> Result<CommunityClient> {
        let config = Config::load()?;
        let overrides = Overrides {
            host: self.host.clone(),
            url: self.url.clone(),
            username: self.username.clone(),
            password: None,
        };
        let client_config = ClientConfig::resolve(&config, &overrides)?;
        tracing::debug!("Using {:?}", client_config);

        CommunityClient::new(&client_config).context("Failed to create API client")
    }

    /// Picks the output writer: `--json`, then the configured default.
    pub fn output(&self) -> OutputWriter {
        if self.json {
            return OutputWriter::json();
        }
        let format = Config::load()
            .ok()
            .and_then(|c| c.core.output.parse::<OutputFormat>().ok())
            .unwrap_or_default();
        OutputWriter::new(format)
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up people, followers and following
    #[command(visible_alias = "person")]
    People(PeopleCommand),

    /// Manage documents, discussions and comments
    Content(ContentCommand),

    /// Browse spaces, groups and projects
    #[command(visible_alias = "place")]
    Places(PlacesCommand),

    /// Read activity streams, the inbox and activity exports
    Activity(ActivityCommand),

    /// Search content, people and places
    Search(SearchCommand),

    /// Make authenticated API requests
    Api(ApiCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}

/// Parses a `--after`/`--before` value: RFC 3339, or a date meaning midnight UTC.
pub(crate) fn parse_datetime_arg(value: &str) -> Result<DateTime<Utc>, String> {
    if let Some(dt) = crate::api::common::parse_timestamp(value) {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| format!("expected YYYY-MM-DD or an RFC 3339 timestamp, got '{value}'"))
}

/// Splits comma-separated list arguments and drops empty entries.
pub(crate) fn split_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_datetime_arg() {
        assert_eq!(
            parse_datetime_arg("2024-03-01").unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_datetime_arg("2024-03-01T09:30:00Z").unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
        );
        assert!(parse_datetime_arg("last tuesday").is_err());
    }

    #[test]
    fn test_split_list() {
        let values = vec!["id, displayName".to_string(), "emails".to_string(), ",".to_string()];
        assert_eq!(split_list(&values), vec!["id", "displayName", "emails"]);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "community",
            "people",
            "view",
            "me",
            "--json",
            "--url",
            "https://c.example.com",
        ])
        .unwrap();
        assert!(cli.global.json);
        assert_eq!(cli.global.url.as_deref(), Some("https://c.example.com"));
    }
}
