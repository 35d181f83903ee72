//
//  community-sdk
//  api/endpoints/people.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! People endpoints and the `Person` model.
//!
//! # Endpoints
//!
//! | Method | Path | Result |
//! |--------|------|--------|
//! | [`get_person`](CommunityClient::get_person) | `GET /people/{id}` | one person |
//! | [`get_me`](CommunityClient::get_me) | `GET /people/@me` | the authenticated user |
//! | [`get_person_by_username`](CommunityClient::get_person_by_username) | `GET /people/username/{username}` | one person |
//! | [`list_people`](CommunityClient::list_people) | `GET /people` | every page |
//! | [`get_followers`](CommunityClient::get_followers) | `GET /people/{id}/@followers` | every page |
//! | [`get_following`](CommunityClient::get_following) | `GET /people/{id}/@following` | every page |
//!
//! List endpoints clamp `count` to [`MAX_COUNT`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::client::CommunityClient;
use crate::api::common::{
    path_segment, ApiError, Endpoint, EndpointResultExt, Query, ResourceLink, MAX_COUNT,
};

/// A member of the community.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Unique identifier.
    pub id: String,

    /// Name shown in the user interface.
    #[serde(default)]
    pub display_name: String,

    /// Structured name.
    #[serde(default)]
    pub name: Option<PersonName>,

    /// Email addresses the caller may see.
    #[serde(default)]
    pub emails: Vec<Email>,

    /// Account details, including the login username.
    #[serde(default, rename = "jive")]
    pub account: Option<Account>,

    /// Free-text location.
    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub follower_count: u64,

    #[serde(default)]
    pub following_count: u64,

    /// Avatar URL.
    #[serde(default)]
    pub thumbnail_url: Option<String>,

    /// Creation timestamp, e.g. `2012-01-31T22:46:12.044+0000`.
    #[serde(default)]
    pub published: Option<String>,

    /// Last modification timestamp.
    #[serde(default)]
    pub updated: Option<String>,

    /// Related resources keyed by link name.
    #[serde(default)]
    pub resources: BTreeMap<String, ResourceLink>,
}

impl Person {
    /// Returns the login username, when the caller may see it.
    pub fn username(&self) -> Option<&str> {
        self.account.as_ref().and_then(|a| a.username.as_deref())
    }

    /// Returns the primary email address, or the first one listed.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails
            .iter()
            .find(|e| e.primary)
            .or_else(|| self.emails.first())
            .map(|e| e.value.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    #[serde(default)]
    pub formatted: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Email {
    pub value: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub primary: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub external: Option<bool>,
}

/// Options for [`CommunityClient::list_people`].
#[derive(Debug, Clone, Default)]
pub struct PeopleQuery {
    /// Page size requested from the server, clamped to [`MAX_COUNT`].
    pub count: Option<u32>,
    /// Fields to include in each record.
    pub fields: Vec<String>,
    /// Only people whose profile carries one of these tags.
    pub tags: Vec<String>,
    /// Only people matching these search terms.
    pub search: Vec<String>,
    /// Sort order, e.g. `firstNameAsc` or `dateJoinedDesc`.
    pub sort: Option<String>,
}

impl PeopleQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .filter("tag", &self.tags)
            .filter("search", &self.search)
            .opt("sort", self.sort.as_deref())
            .list("fields", &self.fields)
            .count(self.count, MAX_COUNT)
    }
}

impl CommunityClient {
    /// Fetches one person by ID.
    pub async fn get_person(&self, id: &str) -> Result<Person, ApiError> {
        let path = format!("/people/{}", path_segment(id));
        let url = self.endpoint_url(&path, &Query::new());
        self.get(&url).await.for_endpoint(Endpoint::Person)
    }

    /// Fetches the authenticated user.
    pub async fn get_me(&self) -> Result<Person, ApiError> {
        let url = self.endpoint_url("/people/@me", &Query::new());
        self.get(&url).await.for_endpoint(Endpoint::Person)
    }

    /// Fetches one person by login username.
    pub async fn get_person_by_username(&self, username: &str) -> Result<Person, ApiError> {
        let path = format!("/people/username/{}", path_segment(username));
        let url = self.endpoint_url(&path, &Query::new());
        self.get(&url).await.for_endpoint(Endpoint::Person)
    }

    /// Lists people, following every page.
    pub async fn list_people(&self, query: &PeopleQuery) -> Result<Vec<Person>, ApiError> {
        let url = self.endpoint_url("/people", &query.to_query());
        self.get_all(&url).await.for_endpoint(Endpoint::People)
    }

    /// Lists the people following `id`, following every page.
    pub async fn get_followers(
        &self,
        id: &str,
        count: Option<u32>,
    ) -> Result<Vec<Person>, ApiError> {
        let query = Query::new().count(count, MAX_COUNT);
        let path = format!("/people/{}/@followers", path_segment(id));
        let url = self.endpoint_url(&path, &query);
        self.get_all(&url).await.for_endpoint(Endpoint::Followers)
    }

    /// Lists the people `id` follows, following every page.
    pub async fn get_following(
        &self,
        id: &str,
        count: Option<u32>,
    ) -> Result<Vec<Person>, ApiError> {
        let query = Query::new().count(count, MAX_COUNT);
        let path = format!("/people/{}/@following", path_segment(id));
        let url = self.endpoint_url(&path, &query);
        self.get_all(&url).await.for_endpoint(Endpoint::Following)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_person() {
        let json = r#"{
            "id": "2001",
            "displayName": "Jane Doe",
            "name": {"formatted": "Jane Doe", "givenName": "Jane", "familyName": "Doe"},
            "emails": [
                {"value": "jane@work.example.com", "type": "work", "primary": false},
                {"value": "jane@example.com", "type": "home", "primary": true}
            ],
            "jive": {"username": "jdoe", "enabled": true},
            "followerCount": 12,
            "published": "2012-01-31T22:46:12.044+0000",
            "resources": {"self": {"ref": "https://c.example.com/api/core/v3/people/2001", "allowed": ["GET"]}},
            "somethingNew": true
        }"#;

        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.display_name, "Jane Doe");
        assert_eq!(person.username(), Some("jdoe"));
        assert_eq!(person.primary_email(), Some("jane@example.com"));
        assert_eq!(person.follower_count, 12);
        assert_eq!(person.following_count, 0);
        assert!(person.resources["self"].allows("get"));
    }

    #[test]
    fn test_people_query() {
        let query = PeopleQuery {
            count: Some(1000),
            fields: vec!["id".into(), "displayName".into()],
            tags: vec!["engineering".into()],
            ..Default::default()
        }
        .to_query();

        assert_eq!(query.get("count"), Some("100"));
        assert_eq!(query.get("fields"), Some("id,displayName"));
        assert_eq!(query.get("filter"), Some("tag(engineering)"));
    }
}
