//
//  community-sdk
//  api/endpoints/contents.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Content, comment and like endpoints.
//!
//! Content covers every kind of authored item in the community: documents,
//! discussions, blog posts, files, polls, ideas and so on. The `type` field
//! names the kind.
//!
//! # Endpoints
//!
//! | Method | Path | Result |
//! |--------|------|--------|
//! | [`list_contents`](CommunityClient::list_contents) | `GET /contents` | every page |
//! | [`get_content`](CommunityClient::get_content) | `GET /contents/{id}` | one item |
//! | [`create_content`](CommunityClient::create_content) | `POST /contents` | the created item |
//! | [`update_content`](CommunityClient::update_content) | `PUT /contents/{id}` | the updated item |
//! | [`delete_content`](CommunityClient::delete_content) | `DELETE /contents/{id}` | nothing |
//! | [`get_comments`](CommunityClient::get_comments) | `GET /contents/{id}/comments` | every page |
//! | [`create_comment`](CommunityClient::create_comment) | `POST /contents/{id}/comments` | the created comment |
//! | [`get_likes`](CommunityClient::get_likes) | `GET /contents/{id}/likes` | every page |
//!
//! # Example
//!
//! ```rust,no_run
//! use community_sdk::api::CommunityClient;
//! use community_sdk::api::endpoints::{ContentQuery, NewContent};
//!
//! # async fn example(client: &CommunityClient) -> Result<(), community_sdk::api::ApiError> {
//! let documents = client
//!     .list_contents(&ContentQuery {
//!         types: vec!["document".into()],
//!         count: Some(50),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let draft = NewContent::new("discussion", "Release planning", "<p>Who is in?</p>");
//! let created = client.create_content(&draft).await?;
//! println!("{} documents, created {}", documents.len(), created.id);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::api::client::CommunityClient;
use crate::api::common::{
    path_segment, ApiError, ContentBody, Endpoint, EndpointResultExt, Query, MAX_COUNT,
};
use crate::api::endpoints::people::Person;

/// An authored item: document, discussion, blog post, file, poll, idea...
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Unique identifier.
    pub id: String,

    /// Kind of content, e.g. `document` or `discussion`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Title.
    #[serde(default)]
    pub subject: String,

    /// Body.
    #[serde(default)]
    pub content: Option<ContentBody>,

    /// Author.
    #[serde(default)]
    pub author: Option<Person>,

    /// Place the item was published in.
    #[serde(default)]
    pub parent_place: Option<ParentPlace>,

    /// Tags attached to the item.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Publication state, e.g. `published` or `incomplete`.
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub view_count: u64,

    #[serde(default)]
    pub like_count: u64,

    #[serde(default)]
    pub reply_count: u64,

    /// Creation timestamp.
    #[serde(default)]
    pub published: Option<String>,

    /// Last modification timestamp.
    #[serde(default)]
    pub updated: Option<String>,
}

/// Summary of the place a content item lives in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentPlace {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default, rename = "placeID")]
    pub place_id: Option<String>,
}

/// A comment on a content item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,

    #[serde(default)]
    pub content: Option<ContentBody>,

    #[serde(default)]
    pub author: Option<Person>,

    /// URI of the item or comment this replies to.
    #[serde(default)]
    pub parent: Option<String>,

    #[serde(default)]
    pub published: Option<String>,

    #[serde(default)]
    pub updated: Option<String>,
}

/// Request body for creating or updating a content item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContent {
    /// Kind of content to create, e.g. `discussion`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Title.
    pub subject: String,

    /// Body.
    pub content: ContentBody,

    /// URI of the place to publish in. The user's personal space if absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Tags to attach.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl NewContent {
    /// Creates a request with an HTML body and no parent or tags.
    pub fn new(kind: &str, subject: &str, html: &str) -> Self {
        Self {
            kind: kind.to_string(),
            subject: subject.to_string(),
            content: ContentBody::html(html),
            parent: None,
            tags: Vec::new(),
        }
    }
}

/// Request body for creating a comment.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub content: ContentBody,
}

impl NewComment {
    /// Creates a comment with an HTML body.
    pub fn html(text: &str) -> Self {
        Self {
            content: ContentBody::html(text),
        }
    }
}

/// Options for listing content.
///
/// Used by [`CommunityClient::list_contents`] and
/// [`CommunityClient::get_place_contents`].
#[derive(Debug, Clone, Default)]
pub struct ContentQuery {
    /// Page size requested from the server, clamped to [`MAX_COUNT`].
    pub count: Option<u32>,
    /// Content kinds to include, e.g. `document`, `discussion`.
    pub types: Vec<String>,
    /// Only items tagged with one of these tags.
    pub tags: Vec<String>,
    /// Only items in the place with this URI.
    pub place: Option<String>,
    /// Only items written by the person with this URI.
    pub author: Option<String>,
    /// Only items matching these search terms.
    pub search: Vec<String>,
    /// Fields to include in each record.
    pub fields: Vec<String>,
    /// Sort order, e.g. `dateCreatedDesc` or `latestActivityDesc`.
    pub sort: Option<String>,
}

impl ContentQuery {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .filter("type", &self.types)
            .filter("tag", &self.tags)
            .filter("place", &self.place)
            .filter("author", &self.author)
            .filter("search", &self.search)
            .opt("sort", self.sort.as_deref())
            .list("fields", &self.fields)
            .count(self.count, MAX_COUNT)
    }
}

/// Options for [`CommunityClient::get_comments`].
#[derive(Debug, Clone, Default)]
pub struct CommentQuery {
    /// Page size requested from the server, clamped to [`MAX_COUNT`].
    pub count: Option<u32>,
    /// Fields to include in each record.
    pub fields: Vec<String>,
    /// Return replies nested under their parents instead of flat.
    pub hierarchical: Option<bool>,
    /// Exclude replies; only top-level comments.
    pub exclude_replies: Option<bool>,
}

impl CommentQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .opt("hierarchical", self.hierarchical)
            .opt("excludeReplies", self.exclude_replies)
            .list("fields", &self.fields)
            .count(self.count, MAX_COUNT)
    }
}

impl CommunityClient {
    /// Lists content, following every page.
    pub async fn list_contents(&self, query: &ContentQuery) -> Result<Vec<Content>, ApiError> {
        let url = self.endpoint_url("/contents", &query.to_query());
        self.get_all(&url).await.for_endpoint(Endpoint::Contents)
    }

    /// Fetches one content item. `fields` limits the returned fields.
    pub async fn get_content(&self, id: &str, fields: &[String]) -> Result<Content, ApiError> {
        let path = format!("/contents/{}", path_segment(id));
        let url = self.endpoint_url(&path, &Query::new().list("fields", fields));
        self.get(&url).await.for_endpoint(Endpoint::Content)
    }

    /// Creates a content item.
    pub async fn create_content(&self, content: &NewContent) -> Result<Content, ApiError> {
        let url = self.endpoint_url("/contents", &Query::new());
        self.post(&url, content)
            .await
            .for_endpoint(Endpoint::CreateContent)
    }

    /// Replaces a content item.
    pub async fn update_content(
        &self,
        id: &str,
        content: &NewContent,
    ) -> Result<Content, ApiError> {
        let path = format!("/contents/{}", path_segment(id));
        let url = self.endpoint_url(&path, &Query::new());
        self.put(&url, content)
            .await
            .for_endpoint(Endpoint::UpdateContent)
    }

    /// Deletes a content item.
    pub async fn delete_content(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/contents/{}", path_segment(id));
        let url = self.endpoint_url(&path, &Query::new());
        self.delete(&url).await.for_endpoint(Endpoint::DeleteContent)
    }

    /// Lists comments on a content item, following every page.
    pub async fn get_comments(
        &self,
        content_id: &str,
        query: &CommentQuery,
    ) -> Result<Vec<Comment>, ApiError> {
        let path = format!("/contents/{}/comments", path_segment(content_id));
        let url = self.endpoint_url(&path, &query.to_query());
        self.get_all(&url).await.for_endpoint(Endpoint::Comments)
    }

    /// Adds a comment to a content item.
    pub async fn create_comment(
        &self,
        content_id: &str,
        comment: &NewComment,
    ) -> Result<Comment, ApiError> {
        let path = format!("/contents/{}/comments", path_segment(content_id));
        let url = self.endpoint_url(&path, &Query::new());
        self.post(&url, comment)
            .await
            .for_endpoint(Endpoint::CreateComment)
    }

    /// Lists the people who liked a content item, following every page.
    pub async fn get_likes(
        &self,
        content_id: &str,
        count: Option<u32>,
    ) -> Result<Vec<Person>, ApiError> {
        let path = format!("/contents/{}/likes", path_segment(content_id));
        let url = self.endpoint_url(&path, &Query::new().count(count, MAX_COUNT));
        self.get_all(&url).await.for_endpoint(Endpoint::Likes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_query_filters() {
        let query = ContentQuery {
            types: vec!["document".into(), "discussion".into()],
            place: Some("https://c.example.com/api/core/v3/places/1007".into()),
            count: Some(250),
            ..Default::default()
        }
        .to_query();

        assert_eq!(
            query.encode(),
            "filter=type%28document%2Cdiscussion%29\
             &filter=place%28https%3A%2F%2Fc.example.com%2Fapi%2Fcore%2Fv3%2Fplaces%2F1007%29\
             &count=100"
        );
    }

    #[test]
    fn test_new_content_serialization() {
        let mut draft = NewContent::new("document", "Roadmap", "<p>Q3</p>");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["type"], "document");
        assert_eq!(json["content"]["type"], "text/html");
        assert!(json.get("parent").is_none());
        assert!(json.get("tags").is_none());

        draft.tags.push("planning".into());
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["tags"][0], "planning");
    }

    #[test]
    fn test_deserialize_content() {
        let json = r#"{
            "id": "1234",
            "type": "discussion",
            "subject": "Hello",
            "content": {"type": "text/html", "text": "<p>hi</p>"},
            "parentPlace": {"id": "5", "name": "Engineering", "type": "group", "placeID": "5"},
            "tags": ["intro"],
            "replyCount": 3
        }"#;

        let content: Content = serde_json::from_str(json).unwrap();
        assert_eq!(content.kind, "discussion");
        assert_eq!(content.parent_place.unwrap().name, "Engineering");
        assert_eq!(content.reply_count, 3);
        assert!(content.author.is_none());
    }

    #[test]
    fn test_comment_query() {
        let query = CommentQuery {
            count: Some(10),
            exclude_replies: Some(true),
            ..Default::default()
        }
        .to_query();
        assert_eq!(query.encode(), "excludeReplies=true&count=10");
    }
}
