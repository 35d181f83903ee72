//
//  community-sdk
//  cli/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Search commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{split_list, GlobalOptions};
use crate::api::endpoints::SearchQuery;

/// Search content, people and places
#[derive(Args, Debug)]
pub struct SearchCommand {
    #[command(subcommand)]
    pub command: SearchSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SearchSubcommand {
    /// Search content
    Contents(SearchArgs),

    /// Search people
    People(SearchArgs),

    /// Search places
    Places(SearchArgs),
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search terms
    #[arg(required = true)]
    pub terms: Vec<String>,

    /// Object types to include (comma-separated or repeated)
    #[arg(long = "type", short = 't')]
    pub types: Vec<String>,

    /// Only results in the place with this URI
    #[arg(long)]
    pub place: Option<String>,

    /// Sort order, e.g. relevanceDesc, updatedDesc
    #[arg(long)]
    pub sort: Option<String>,

    /// Page size requested from the server (max 100)
    #[arg(long, short = 'L')]
    pub count: Option<u32>,
}

impl SearchArgs {
    fn to_query(&self) -> SearchQuery {
        SearchQuery {
            terms: self.terms.clone(),
            types: split_list(&self.types),
            place: self.place.clone(),
            sort: self.sort.clone(),
            count: self.count,
            ..Default::default()
        }
    }
}

impl SearchCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let output = global.output();

        match &self.command {
            SearchSubcommand::Contents(args) => {
                let results = client.search_contents(&args.to_query()).await?;
                output.write_list(&results, "No matching content")
            }
            SearchSubcommand::People(args) => {
                let results = client.search_people(&args.to_query()).await?;
                output.write_list(&results, "No matching people")
            }
            SearchSubcommand::Places(args) => {
                let results = client.search_places(&args.to_query()).await?;
                output.write_list(&results, "No matching places")
            }
        }
    }
}
