//
//  community-sdk
//  api/endpoints/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Full-text search over content, people and places.
//!
//! Search terms travel in a `filter=search(...)` expression; the server
//! treats multiple terms as an AND.

use crate::api::client::CommunityClient;
use crate::api::common::{ApiError, Endpoint, EndpointResultExt, Query, MAX_COUNT};
use crate::api::endpoints::contents::Content;
use crate::api::endpoints::people::Person;
use crate::api::endpoints::places::Place;

/// Options shared by the search endpoints.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Search terms. At least one is required by the server.
    pub terms: Vec<String>,
    /// Object kinds to include. Ignored by people search.
    pub types: Vec<String>,
    /// Only results in the place with this URI.
    pub place: Option<String>,
    /// Sort order, e.g. `relevanceDesc` or `updatedDesc`.
    pub sort: Option<String>,
    /// Fields to include in each record.
    pub fields: Vec<String>,
    /// Page size requested from the server, clamped to [`MAX_COUNT`].
    pub count: Option<u32>,
}

impl SearchQuery {
    /// Creates a query for the given terms.
    pub fn terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    fn to_query(&self) -> Query {
        Query::new()
            .filter("search", &self.terms)
            .filter("type", &self.types)
            .filter("place", &self.place)
            .opt("sort", self.sort.as_deref())
            .list("fields", &self.fields)
            .count(self.count, MAX_COUNT)
    }
}

impl CommunityClient {
    /// Searches content, following every page.
    pub async fn search_contents(&self, query: &SearchQuery) -> Result<Vec<Content>, ApiError> {
        let url = self.endpoint_url("/search/contents", &query.to_query());
        self.get_all(&url).await.for_endpoint(Endpoint::Search)
    }

    /// Searches people, following every page.
    pub async fn search_people(&self, query: &SearchQuery) -> Result<Vec<Person>, ApiError> {
        let query = SearchQuery {
            types: Vec::new(),
            ..query.clone()
        };
        let url = self.endpoint_url("/search/people", &query.to_query());
        self.get_all(&url).await.for_endpoint(Endpoint::Search)
    }

    /// Searches places, following every page.
    pub async fn search_places(&self, query: &SearchQuery) -> Result<Vec<Place>, ApiError> {
        let url = self.endpoint_url("/search/places", &query.to_query());
        self.get_all(&url).await.for_endpoint(Endpoint::Search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_terms_in_filter() {
        let query = SearchQuery::terms(["release", "notes"]).to_query();
        assert_eq!(query.encode(), "filter=search%28release%2Cnotes%29");
    }

    #[test]
    fn test_search_query_count_and_sort() {
        let query = SearchQuery {
            sort: Some("updatedDesc".into()),
            count: Some(101),
            ..SearchQuery::terms(["rust"])
        }
        .to_query();
        assert_eq!(query.get("sort"), Some("updatedDesc"));
        assert_eq!(query.get("count"), Some("100"));
    }
}
