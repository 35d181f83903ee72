//
//  community-sdk
//  api/endpoints/places.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Place endpoints: spaces, groups and projects.

use serde::{Deserialize, Serialize};

use crate::api::client::CommunityClient;
use crate::api::common::{
    path_segment, ApiError, ContentBody, Endpoint, EndpointResultExt, Query, MAX_COUNT,
};
use crate::api::endpoints::contents::{Content, ContentQuery};

/// A container for content: a space, group or project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Resource identifier used in `/places/{id}` URLs.
    #[serde(default, rename = "placeID")]
    pub place_id: String,

    /// Identifier within the place's own kind.
    #[serde(default)]
    pub id: Option<String>,

    /// Kind of place: `space`, `group` or `project`.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub name: String,

    /// Short name used in the place's web address.
    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Long-form description.
    #[serde(default)]
    pub content: Option<ContentBody>,

    /// URI of the enclosing place, if any.
    #[serde(default)]
    pub parent: Option<String>,

    /// Group visibility, e.g. `OPEN`, `MEMBER_ONLY`, `PRIVATE` or `SECRET`.
    #[serde(default)]
    pub group_type: Option<String>,

    #[serde(default)]
    pub follower_count: u64,

    #[serde(default)]
    pub view_count: u64,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub published: Option<String>,

    #[serde(default)]
    pub updated: Option<String>,
}

/// Options for [`CommunityClient::list_places`].
#[derive(Debug, Clone, Default)]
pub struct PlaceQuery {
    /// Page size requested from the server, clamped to [`MAX_COUNT`].
    pub count: Option<u32>,
    /// Place kinds to include: `space`, `group`, `project`.
    pub types: Vec<String>,
    /// Only places tagged with one of these tags.
    pub tags: Vec<String>,
    /// Only places matching these search terms.
    pub search: Vec<String>,
    /// Fields to include in each record.
    pub fields: Vec<String>,
    /// Sort order, e.g. `titleAsc`.
    pub sort: Option<String>,
}

impl PlaceQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .filter("type", &self.types)
            .filter("tag", &self.tags)
            .filter("search", &self.search)
            .opt("sort", self.sort.as_deref())
            .list("fields", &self.fields)
            .count(self.count, MAX_COUNT)
    }
}

impl CommunityClient {
    /// Lists places, following every page.
    pub async fn list_places(&self, query: &PlaceQuery) -> Result<Vec<Place>, ApiError> {
        let url = self.endpoint_url("/places", &query.to_query());
        self.get_all(&url).await.for_endpoint(Endpoint::Places)
    }

    /// Fetches one place by its `placeID`.
    pub async fn get_place(&self, id: &str) -> Result<Place, ApiError> {
        let path = format!("/places/{}", path_segment(id));
        let url = self.endpoint_url(&path, &Query::new());
        self.get(&url).await.for_endpoint(Endpoint::Place)
    }

    /// Lists the content published in a place, following every page.
    ///
    /// The `place` field of `query` is ignored; the path already names it.
    pub async fn get_place_contents(
        &self,
        place_id: &str,
        query: &ContentQuery,
    ) -> Result<Vec<Content>, ApiError> {
        let query = ContentQuery {
            place: None,
            ..query.clone()
        };
        let path = format!("/places/{}/contents", path_segment(place_id));
        let url = self.endpoint_url(&path, &query.to_query());
        self.get_all(&url).await.for_endpoint(Endpoint::PlaceContents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_place() {
        let json = r#"{
            "placeID": "1007",
            "id": "12",
            "type": "group",
            "name": "Engineering",
            "displayName": "engineering",
            "groupType": "OPEN",
            "followerCount": 48
        }"#;

        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.place_id, "1007");
        assert_eq!(place.kind, "group");
        assert_eq!(place.group_type.as_deref(), Some("OPEN"));
        assert_eq!(place.follower_count, 48);
    }

    #[test]
    fn test_place_query() {
        let query = PlaceQuery {
            types: vec!["space".into(), "group".into()],
            count: Some(500),
            ..Default::default()
        }
        .to_query();

        assert_eq!(query.get("filter"), Some("type(space,group)"));
        assert_eq!(query.get("count"), Some("100"));
    }
}
