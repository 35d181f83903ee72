//
//  community-sdk
//  cli/places.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Place commands for spaces, groups and projects.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{split_list, GlobalOptions};
use crate::api::endpoints::{ContentQuery, Place, PlaceQuery};
use crate::api::CommunityClient;
use crate::output::{
    format_date, format_status, print_field, print_header, print_optional_field, strip_html,
    truncate, TableOutput, TableRow,
};

/// Browse places
#[derive(Args, Debug)]
pub struct PlacesCommand {
    #[command(subcommand)]
    pub command: PlacesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PlacesSubcommand {
    /// List places
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View a place by its placeID
    View(ViewArgs),

    /// List the content published in a place
    Contents(ContentsArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Place types: space, group, project (comma-separated or repeated)
    #[arg(long = "type", short = 't')]
    pub types: Vec<String>,

    /// Only places with these tags
    #[arg(long)]
    pub tag: Vec<String>,

    /// Only places matching these search terms
    #[arg(long, short = 's')]
    pub search: Vec<String>,

    /// Sort order, e.g. titleAsc, latestActivityDesc
    #[arg(long)]
    pub sort: Option<String>,

    /// Page size requested from the server (max 100)
    #[arg(long, short = 'L')]
    pub count: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Place ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct ContentsArgs {
    /// Place ID
    pub id: String,

    /// Content types to include (comma-separated or repeated)
    #[arg(long = "type", short = 't')]
    pub types: Vec<String>,

    /// Sort order, e.g. dateCreatedDesc
    #[arg(long)]
    pub sort: Option<String>,

    /// Page size requested from the server (max 100)
    #[arg(long, short = 'L')]
    pub count: Option<u32>,
}

impl PlacesCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        match &self.command {
            PlacesSubcommand::List(args) => self.list(&client, args, global).await,
            PlacesSubcommand::View(args) => self.view(&client, args, global).await,
            PlacesSubcommand::Contents(args) => self.contents(&client, args, global).await,
        }
    }

    async fn list(
        &self,
        client: &CommunityClient,
        args: &ListArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let query = PlaceQuery {
            count: args.count,
            types: split_list(&args.types),
            tags: split_list(&args.tag),
            search: args.search.clone(),
            sort: args.sort.clone(),
            ..Default::default()
        };
        let places = client.list_places(&query).await?;
        global.output().write_list(&places, "No places found")
    }

    async fn view(
        &self,
        client: &CommunityClient,
        args: &ViewArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let place = client.get_place(&args.id).await?;
        global.output().write(&place)
    }

    async fn contents(
        &self,
        client: &CommunityClient,
        args: &ContentsArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let query = ContentQuery {
            count: args.count,
            types: split_list(&args.types),
            sort: args.sort.clone(),
            ..Default::default()
        };
        let contents = client.get_place_contents(&args.id, &query).await?;
        global
            .output()
            .write_list(&contents, "No content in this place")
    }
}

impl TableOutput for Place {
    fn print_table(&self, color: bool) {
        print_header(&self.name);
        print_field("Place ID", &self.place_id, color);
        print_field("Type", &self.kind, color);
        if let Some(group_type) = &self.group_type {
            print_field("Visibility", &format_status(group_type, color), color);
        }
        print_optional_field("Short name", self.display_name.as_deref(), color);
        print_optional_field("Description", self.description.as_deref(), color);
        print_field("Followers", &self.follower_count.to_string(), color);
        print_field("Created", &format_date(self.published.as_deref()), color);

        if let Some(body) = &self.content {
            let text = strip_html(&body.text);
            if !text.is_empty() {
                println!();
                println!("{}", text);
            }
        }
    }
}

impl TableRow for Place {
    fn headers() -> &'static [&'static str] {
        &["PLACE ID", "TYPE", "NAME", "DESCRIPTION"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.place_id.clone(),
            self.kind.clone(),
            self.name.clone(),
            truncate(self.description.as_deref().unwrap_or(""), 60),
        ]
    }
}
