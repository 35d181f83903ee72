//
//  community-sdk
//  cli/activity.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Activity stream, inbox and export commands
//!
//! ```bash
//! community activity list --after 2024-03-01 --count 500
//! community activity inbox --unread
//! community activity export --after 2024-03-01 --before 2024-04-01 --jsonl > march.jsonl
//! ```

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

use super::{parse_datetime_arg, split_list, GlobalOptions};
use crate::api::endpoints::{Activity, ActivityQuery, ExportQuery, ExportedActivity, InboxQuery};
use crate::api::CommunityClient;
use crate::output::{format_date, strip_html, truncate, write_json_lines, TableRow};

/// Read activity
#[derive(Args, Debug)]
pub struct ActivityCommand {
    #[command(subcommand)]
    pub command: ActivitySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ActivitySubcommand {
    /// List your activity stream
    #[command(visible_alias = "ls")]
    List(StreamArgs),

    /// List your inbox
    Inbox(InboxArgs),

    /// Export raw activity events
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct RangeArgs {
    /// Only entries after this date or timestamp
    #[arg(long, value_parser = parse_datetime_arg)]
    pub after: Option<DateTime<Utc>>,

    /// Only entries before this date or timestamp
    #[arg(long, value_parser = parse_datetime_arg)]
    pub before: Option<DateTime<Utc>>,
}

#[derive(Args, Debug)]
pub struct StreamArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Object types to include (comma-separated or repeated)
    #[arg(long = "type", short = 't')]
    pub types: Vec<String>,

    /// Page size requested from the server (max 1000)
    #[arg(long, short = 'L')]
    pub count: Option<u32>,
}

#[derive(Args, Debug)]
pub struct InboxArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Only unread entries
    #[arg(long)]
    pub unread: bool,

    /// Page size requested from the server (max 100)
    #[arg(long, short = 'L')]
    pub count: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Only these event names (comma-separated or repeated)
    #[arg(long)]
    pub name: Vec<String>,

    /// Only events by these user IDs (comma-separated or repeated)
    #[arg(long)]
    pub user: Vec<String>,

    /// Page size requested from the server (max 100000000)
    #[arg(long, short = 'L')]
    pub count: Option<u32>,

    /// Write one JSON document per line
    #[arg(long)]
    pub jsonl: bool,
}

impl ActivityCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        match &self.command {
            ActivitySubcommand::List(args) => self.list(&client, args, global).await,
            ActivitySubcommand::Inbox(args) => self.inbox(&client, args, global).await,
            ActivitySubcommand::Export(args) => self.export(&client, args, global).await,
        }
    }

    async fn list(
        &self,
        client: &CommunityClient,
        args: &StreamArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let query = ActivityQuery {
            after: args.range.after,
            before: args.range.before,
            count: args.count,
            types: split_list(&args.types),
            ..Default::default()
        };
        let activities = client.list_activities(&query).await?;
        global.output().write_list(&activities, "No activity")
    }

    async fn inbox(
        &self,
        client: &CommunityClient,
        args: &InboxArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let query = InboxQuery {
            after: args.range.after,
            before: args.range.before,
            count: args.count,
            unread_only: args.unread,
            ..Default::default()
        };
        let entries = client.list_inbox(&query).await?;
        global.output().write_list(&entries, "Inbox is empty")
    }

    async fn export(
        &self,
        client: &CommunityClient,
        args: &ExportArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let query = ExportQuery {
            after: args.range.after,
            before: args.range.before,
            count: args.count,
            names: split_list(&args.name),
            users: split_list(&args.user),
            ..Default::default()
        };
        let records = client.export_activity(&query).await?;
        tracing::debug!("Exported {} activity record(s)", records.len());

        if args.jsonl {
            write_json_lines(&records)
        } else {
            global.output().write_list(&records, "No activity to export")
        }
    }
}

impl TableRow for Activity {
    fn headers() -> &'static [&'static str] {
        &["PUBLISHED", "ACTOR", "VERB", "SUMMARY"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        let verb = self.verb.rsplit(':').next().unwrap_or(&self.verb);
        vec![
            format_date(self.published.as_deref()),
            self.actor
                .as_ref()
                .map(|a| a.display_name.clone())
                .unwrap_or_else(|| "-".to_string()),
            verb.to_string(),
            truncate(&strip_html(&self.title), 70),
        ]
    }
}

impl TableRow for ExportedActivity {
    fn headers() -> &'static [&'static str] {
        &["TIME", "EVENT", "ACTOR"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.occurred_at()
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.name.clone(),
            self.actor_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]
    }
}
