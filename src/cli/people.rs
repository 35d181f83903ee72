//
//  community-sdk
//  cli/people.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! People commands
//!
//! ```bash
//! community people view me
//! community people view --login jdoe
//! community people list --tag engineering --sort lastNameAsc
//! community people followers 2001
//! community people activity me --after 2024-03-01
//! ```

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

use super::{parse_datetime_arg, split_list, GlobalOptions};
use crate::api::endpoints::{ActivityQuery, PeopleQuery, Person};
use crate::api::CommunityClient;
use crate::output::{
    format_date, print_field, print_header, print_optional_field, TableOutput, TableRow,
};

/// Look up people
#[derive(Args, Debug)]
pub struct PeopleCommand {
    #[command(subcommand)]
    pub command: PeopleSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PeopleSubcommand {
    /// View a person by ID, or `me`
    View(ViewArgs),

    /// List people
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// List a person's followers
    Followers(RelationArgs),

    /// List the people a person follows
    Following(RelationArgs),

    /// List a person's recent activity
    Activity(ActivityArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Person ID, or `me` for the authenticated user
    #[arg(required_unless_present = "login")]
    pub id: Option<String>,

    /// Look the person up by login username instead
    #[arg(long, conflicts_with = "id")]
    pub login: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only people with these profile tags (comma-separated or repeated)
    #[arg(long, short = 't')]
    pub tag: Vec<String>,

    /// Only people matching these search terms
    #[arg(long, short = 's')]
    pub search: Vec<String>,

    /// Sort order, e.g. firstNameAsc, lastNameAsc, dateJoinedDesc
    #[arg(long)]
    pub sort: Option<String>,

    /// Page size requested from the server (max 100)
    #[arg(long, short = 'L')]
    pub count: Option<u32>,

    /// Fields to return (comma-separated or repeated)
    #[arg(long)]
    pub fields: Vec<String>,
}

#[derive(Args, Debug)]
pub struct RelationArgs {
    /// Person ID, or `me`
    pub id: String,

    /// Page size requested from the server (max 100)
    #[arg(long, short = 'L')]
    pub count: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ActivityArgs {
    /// Person ID, or `me`
    pub id: String,

    /// Only activity after this date or timestamp
    #[arg(long, value_parser = parse_datetime_arg)]
    pub after: Option<DateTime<Utc>>,

    /// Only activity before this date or timestamp
    #[arg(long, value_parser = parse_datetime_arg)]
    pub before: Option<DateTime<Utc>>,

    /// Page size requested from the server (max 1000)
    #[arg(long, short = 'L')]
    pub count: Option<u32>,
}

impl PeopleCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        match &self.command {
            PeopleSubcommand::View(args) => self.view(&client, args, global).await,
            PeopleSubcommand::List(args) => self.list(&client, args, global).await,
            PeopleSubcommand::Followers(args) => self.followers(&client, args, global).await,
            PeopleSubcommand::Following(args) => self.following(&client, args, global).await,
            PeopleSubcommand::Activity(args) => self.activity(&client, args, global).await,
        }
    }

    async fn view(
        &self,
        client: &CommunityClient,
        args: &ViewArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let person = match (&args.login, args.id.as_deref()) {
            (Some(login), _) => client.get_person_by_username(login).await?,
            (None, Some("me")) => client.get_me().await?,
            (None, Some(id)) => client.get_person(id).await?,
            (None, None) => bail!("Pass a person ID or --login"),
        };
        global.output().write(&person)
    }

    async fn list(
        &self,
        client: &CommunityClient,
        args: &ListArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let query = PeopleQuery {
            count: args.count,
            fields: split_list(&args.fields),
            tags: split_list(&args.tag),
            search: args.search.clone(),
            sort: args.sort.clone(),
        };
        let people = client.list_people(&query).await?;
        global.output().write_list(&people, "No people found")
    }

    async fn followers(
        &self,
        client: &CommunityClient,
        args: &RelationArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let id = resolve_person_id(client, &args.id).await?;
        let people = client.get_followers(&id, args.count).await?;
        global.output().write_list(&people, "No followers")
    }

    async fn following(
        &self,
        client: &CommunityClient,
        args: &RelationArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let id = resolve_person_id(client, &args.id).await?;
        let people = client.get_following(&id, args.count).await?;
        global.output().write_list(&people, "Not following anyone")
    }

    async fn activity(
        &self,
        client: &CommunityClient,
        args: &ActivityArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let id = resolve_person_id(client, &args.id).await?;
        let query = ActivityQuery {
            after: args.after,
            before: args.before,
            count: args.count,
            ..Default::default()
        };
        let activities = client.get_person_activities(&id, &query).await?;
        global.output().write_list(&activities, "No activity")
    }
}

/// Turns `me` into the authenticated user's ID.
async fn resolve_person_id(client: &CommunityClient, id: &str) -> Result<String> {
    if id == "me" {
        Ok(client.get_me().await?.id)
    } else {
        Ok(id.to_string())
    }
}

impl TableOutput for Person {
    fn print_table(&self, color: bool) {
        print_header(&self.display_name);
        print_field("ID", &self.id, color);
        print_optional_field("Username", self.username(), color);
        print_optional_field("Email", self.primary_email(), color);
        print_optional_field("Location", self.location.as_deref(), color);
        print_field("Followers", &self.follower_count.to_string(), color);
        print_field("Following", &self.following_count.to_string(), color);
        print_field("Joined", &format_date(self.published.as_deref()), color);
    }
}

impl TableRow for Person {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "USERNAME", "EMAIL"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            self.display_name.clone(),
            self.username().unwrap_or("-").to_string(),
            self.primary_email().unwrap_or("-").to_string(),
        ]
    }
}
