//
//  community-sdk
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination envelope for Community API list responses.
//!
//! Every paginated endpoint wraps its records in the same envelope:
//!
//! ```json
//! {
//!     "itemsPerPage": 25,
//!     "startIndex": 0,
//!     "list": [ ... ],
//!     "links": { "next": "https://community.example.com/api/core/v3/people?startIndex=25" }
//! }
//! ```
//!
//! A page without `links`, or with `links` but no `next`, is the last page.
//! The `next` link is an absolute URL and is followed exactly as returned.
//!
//! [`CommunityClient::get_all`](crate::api::CommunityClient::get_all) drives
//! the loop; this module only describes a single page.
//!
//! # Example
//!
//! ```rust
//! use community_sdk::api::common::Envelope;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Tag {
//!     name: String,
//! }
//!
//! let json = r#"{
//!     "list": [{"name": "rust"}],
//!     "links": {"next": "https://community.example.com/api/core/v3/tags?startIndex=1"}
//! }"#;
//!
//! let page: Envelope<Tag> = serde_json::from_str(json).unwrap();
//! assert_eq!(page.list[0].name, "rust");
//! assert!(page.has_next());
//! ```

use serde::{Deserialize, Serialize};

/// One page of a paginated Community API response.
///
/// # Type Parameters
///
/// - `T` - The type of records in the `list` array
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Records on this page, in server order.
    ///
    /// A missing `list` is read as an empty page.
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,

    /// Navigation links. Absent on single-page results.
    #[serde(default)]
    pub links: Option<Links>,

    /// Page size the server used for this page.
    #[serde(default)]
    pub items_per_page: Option<u32>,

    /// Zero-based index of the first record on this page.
    #[serde(default)]
    pub start_index: Option<u32>,
}

/// Navigation links carried by an [`Envelope`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    /// Absolute URL of the following page.
    #[serde(default)]
    pub next: Option<String>,

    /// Absolute URL of the preceding page.
    #[serde(default)]
    pub previous: Option<String>,
}

impl<T> Envelope<T> {
    /// Returns `true` if the server supplied a link to another page.
    pub fn has_next(&self) -> bool {
        self.next_url().is_some()
    }

    /// Returns the absolute URL of the next page, if any.
    ///
    /// An empty `next` string is treated as absent.
    pub fn next_url(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|links| links.next.as_deref())
            .filter(|next| !next.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_links_is_last_page() {
        let page: Envelope<u32> = serde_json::from_str(r#"{"list": [1, 2]}"#).unwrap();
        assert!(!page.has_next());
        assert_eq!(page.list, vec![1, 2]);
    }

    #[test]
    fn test_links_without_next_is_last_page() {
        let page: Envelope<u32> = serde_json::from_str(
            r#"{"list": [], "links": {"previous": "https://example.com/p?startIndex=0"}}"#,
        )
        .unwrap();
        assert!(!page.has_next());
    }

    #[test]
    fn test_next_link() {
        let page: Envelope<u32> = serde_json::from_str(
            r#"{"itemsPerPage": 2, "startIndex": 0, "list": [1, 2],
                "links": {"next": "https://example.com/p?startIndex=2"}}"#,
        )
        .unwrap();
        assert_eq!(page.next_url(), Some("https://example.com/p?startIndex=2"));
        assert_eq!(page.items_per_page, Some(2));
    }

    #[test]
    fn test_missing_list_is_empty() {
        let page: Envelope<u32> = serde_json::from_str("{}").unwrap();
        assert!(page.list.is_empty());
    }
}
