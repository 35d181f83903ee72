//
//  community-sdk
//  cli/content.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Content commands for documents, discussions, comments and likes.
//!
//! ```bash
//! community content list --type document --tag roadmap
//! community content view 1234
//! community content create --type discussion --subject "Release planning" --body "<p>Who is in?</p>"
//! community content comment 1234 --body "Count me in"
//! community content delete 1234 --yes
//! ```

use std::fs;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use super::{split_list, GlobalOptions};
use crate::api::endpoints::{
    Comment, CommentQuery, Content, ContentQuery, NewComment, NewContent,
};
use crate::api::CommunityClient;
use crate::interactive::{prompt_confirm_with_default, prompt_editor};
use crate::output::{
    format_date, format_status, print_field, print_header, print_optional_field, strip_html,
    truncate, TableOutput, TableRow,
};

/// Manage content
#[derive(Args, Debug)]
pub struct ContentCommand {
    #[command(subcommand)]
    pub command: ContentSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ContentSubcommand {
    /// List content
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View a content item
    View(ViewArgs),

    /// Create a content item
    Create(CreateArgs),

    /// Replace the subject and body of a content item
    Edit(EditArgs),

    /// Delete a content item
    Delete(DeleteArgs),

    /// List comments on a content item
    Comments(CommentsArgs),

    /// Comment on a content item
    Comment(CommentArgs),

    /// List the people who liked a content item
    Likes(LikesArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Content types, e.g. document, discussion, post (comma-separated or repeated)
    #[arg(long = "type", short = 't')]
    pub types: Vec<String>,

    /// Only content with these tags
    #[arg(long)]
    pub tag: Vec<String>,

    /// Only content in the place with this URI
    #[arg(long)]
    pub place: Option<String>,

    /// Only content by the person with this URI
    #[arg(long)]
    pub author: Option<String>,

    /// Only content matching these search terms
    #[arg(long, short = 's')]
    pub search: Vec<String>,

    /// Sort order, e.g. dateCreatedDesc, latestActivityDesc, titleAsc
    #[arg(long)]
    pub sort: Option<String>,

    /// Page size requested from the server (max 100)
    #[arg(long, short = 'L')]
    pub count: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Content ID
    pub id: String,

    /// Fields to return (comma-separated or repeated)
    #[arg(long)]
    pub fields: Vec<String>,
}

#[derive(Args, Debug)]
pub struct BodyArgs {
    /// HTML body
    #[arg(long, short = 'b', conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the HTML body from a file (- for stdin)
    #[arg(long, short = 'F')]
    pub body_file: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Content type, e.g. discussion, document, post
    #[arg(long = "type", short = 't', default_value = "discussion")]
    pub kind: String,

    /// Title
    #[arg(long, short = 'S')]
    pub subject: String,

    #[command(flatten)]
    pub body: BodyArgs,

    /// URI of the place to publish in
    #[arg(long)]
    pub place: Option<String>,

    /// Tags to attach (comma-separated or repeated)
    #[arg(long)]
    pub tag: Vec<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Content ID
    pub id: String,

    /// New title; the current one is kept when omitted
    #[arg(long, short = 'S')]
    pub subject: Option<String>,

    #[command(flatten)]
    pub body: BodyArgs,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Content ID
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct CommentsArgs {
    /// Content ID
    pub id: String,

    /// Only top-level comments
    #[arg(long)]
    pub exclude_replies: bool,

    /// Page size requested from the server (max 100)
    #[arg(long, short = 'L')]
    pub count: Option<u32>,
}

#[derive(Args, Debug)]
pub struct CommentArgs {
    /// Content ID
    pub id: String,

    #[command(flatten)]
    pub body: BodyArgs,
}

#[derive(Args, Debug)]
pub struct LikesArgs {
    /// Content ID
    pub id: String,

    /// Page size requested from the server (max 100)
    #[arg(long, short = 'L')]
    pub count: Option<u32>,
}

impl BodyArgs {
    /// Returns the body from `--body`, `--body-file` or the editor.
    fn resolve(&self, initial: Option<&str>) -> Result<String> {
        let body = if let Some(body) = &self.body {
            body.clone()
        } else if let Some(path) = &self.body_file {
            if path == "-" {
                let mut buffer = String::new();
                std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)?;
                buffer
            } else {
                fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
            }
        } else {
            prompt_editor(initial, "--body or --body-file")?.unwrap_or_default()
        };

        if body.trim().is_empty() {
            bail!("Body is empty");
        }
        Ok(body)
    }
}

impl ContentCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        match &self.command {
            ContentSubcommand::List(args) => self.list(&client, args, global).await,
            ContentSubcommand::View(args) => self.view(&client, args, global).await,
            ContentSubcommand::Create(args) => self.create(&client, args, global).await,
            ContentSubcommand::Edit(args) => self.edit(&client, args, global).await,
            ContentSubcommand::Delete(args) => self.delete(&client, args, global).await,
            ContentSubcommand::Comments(args) => self.comments(&client, args, global).await,
            ContentSubcommand::Comment(args) => self.comment(&client, args, global).await,
            ContentSubcommand::Likes(args) => self.likes(&client, args, global).await,
        }
    }

    async fn list(
        &self,
        client: &CommunityClient,
        args: &ListArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let query = ContentQuery {
            count: args.count,
            types: split_list(&args.types),
            tags: split_list(&args.tag),
            place: args.place.clone(),
            author: args.author.clone(),
            search: args.search.clone(),
            sort: args.sort.clone(),
            ..Default::default()
        };
        let contents = client.list_contents(&query).await?;
        global.output().write_list(&contents, "No content found")
    }

    async fn view(
        &self,
        client: &CommunityClient,
        args: &ViewArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let content = client.get_content(&args.id, &split_list(&args.fields)).await?;
        global.output().write(&content)
    }

    async fn create(
        &self,
        client: &CommunityClient,
        args: &CreateArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let body = args.body.resolve(None)?;
        let mut draft = NewContent::new(&args.kind, &args.subject, &body);
        draft.parent = args.place.clone();
        draft.tags = split_list(&args.tag);

        let created = client.create_content(&draft).await?;

        let output = global.output();
        if output.is_json() {
            output.write(&created)
        } else {
            output.write_success(&format!("Created {} {}", created.kind, created.id));
            Ok(())
        }
    }

    async fn edit(
        &self,
        client: &CommunityClient,
        args: &EditArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let current = client.get_content(&args.id, &[]).await?;
        let current_body = current.content.as_ref().map(|c| c.text.as_str());
        let body = args.body.resolve(current_body)?;

        let mut draft = NewContent::new(
            &current.kind,
            args.subject.as_deref().unwrap_or(&current.subject),
            &body,
        );
        draft.tags = current.tags.clone();

        let updated = client.update_content(&args.id, &draft).await?;

        let output = global.output();
        if output.is_json() {
            output.write(&updated)
        } else {
            output.write_success(&format!("Updated {} {}", updated.kind, updated.id));
            Ok(())
        }
    }

    async fn delete(
        &self,
        client: &CommunityClient,
        args: &DeleteArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        if !args.yes {
            let confirmed = prompt_confirm_with_default(
                &format!("Delete content {}? This cannot be undone!", args.id),
                false,
                "--yes",
            )?;
            if !confirmed {
                println!("Cancelled.");
                return Ok(());
            }
        }

        client.delete_content(&args.id).await?;
        global
            .output()
            .write_success(&format!("Deleted content {}", args.id));
        Ok(())
    }

    async fn comments(
        &self,
        client: &CommunityClient,
        args: &CommentsArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let query = CommentQuery {
            count: args.count,
            exclude_replies: args.exclude_replies.then_some(true),
            ..Default::default()
        };
        let comments = client.get_comments(&args.id, &query).await?;
        global.output().write_list(&comments, "No comments")
    }

    async fn comment(
        &self,
        client: &CommunityClient,
        args: &CommentArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let body = args.body.resolve(None)?;
        let comment = client
            .create_comment(&args.id, &NewComment::html(&body))
            .await?;

        let output = global.output();
        if output.is_json() {
            output.write(&comment)
        } else {
            output.write_success(&format!("Added comment {}", comment.id));
            Ok(())
        }
    }

    async fn likes(
        &self,
        client: &CommunityClient,
        args: &LikesArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let people = client.get_likes(&args.id, args.count).await?;
        global.output().write_list(&people, "No likes yet")
    }
}

impl TableOutput for Content {
    fn print_table(&self, color: bool) {
        print_header(&self.subject);
        print_field("ID", &self.id, color);
        print_field("Type", &self.kind, color);
        if let Some(status) = &self.status {
            print_field("Status", &format_status(status, color), color);
        }
        print_optional_field(
            "Author",
            self.author.as_ref().map(|a| a.display_name.as_str()),
            color,
        );
        print_optional_field(
            "Place",
            self.parent_place.as_ref().map(|p| p.name.as_str()),
            color,
        );
        if !self.tags.is_empty() {
            print_field("Tags", &self.tags.join(", "), color);
        }
        print_field("Views", &self.view_count.to_string(), color);
        print_field("Likes", &self.like_count.to_string(), color);
        print_field("Replies", &self.reply_count.to_string(), color);
        print_field("Published", &format_date(self.published.as_deref()), color);
        print_field("Updated", &format_date(self.updated.as_deref()), color);

        if let Some(body) = &self.content {
            println!();
            println!("{}", strip_html(&body.text));
        }
    }
}

impl TableRow for Content {
    fn headers() -> &'static [&'static str] {
        &["ID", "TYPE", "SUBJECT", "AUTHOR", "UPDATED"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            self.kind.clone(),
            truncate(&self.subject, 60),
            self.author
                .as_ref()
                .map(|a| a.display_name.clone())
                .unwrap_or_else(|| "-".to_string()),
            format_date(self.updated.as_deref()),
        ]
    }
}

impl TableOutput for Comment {
    fn print_table(&self, color: bool) {
        print_header(&format!("Comment {}", self.id));
        print_optional_field(
            "Author",
            self.author.as_ref().map(|a| a.display_name.as_str()),
            color,
        );
        print_field("Published", &format_date(self.published.as_deref()), color);
        if let Some(body) = &self.content {
            println!();
            println!("{}", strip_html(&body.text));
        }
    }
}

impl TableRow for Comment {
    fn headers() -> &'static [&'static str] {
        &["ID", "AUTHOR", "PUBLISHED", "COMMENT"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            self.author
                .as_ref()
                .map(|a| a.display_name.clone())
                .unwrap_or_else(|| "-".to_string()),
            format_date(self.published.as_deref()),
            self.content
                .as_ref()
                .map(|c| truncate(&strip_html(&c.text), 80))
                .unwrap_or_default(),
        ]
    }
}
