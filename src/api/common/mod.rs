//
//  community-sdk
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API types shared by every Community API endpoint.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`Endpoint`] and [`translate`] - Per-endpoint status code meanings
//! - [`Envelope`] - Pagination wrapper returned by list endpoints
//! - [`Query`] - Query string builder with count clamping and timestamp formatting
//! - [`ResourceLink`] - Hypermedia link attached to most resources
//! - [`ContentBody`] - Rich text body used by content and comments

use serde::{Deserialize, Serialize};

mod errors;
mod pagination;
mod query;

pub use errors::*;
pub use pagination::*;
pub use query::*;

/// Hypermedia link to a related resource.
///
/// Resources carry a `resources` map from link name (`self`, `html`,
/// `followers`, ...) to a `ResourceLink`.
///
/// # Example
///
/// ```rust
/// use community_sdk::api::common::ResourceLink;
///
/// let json = r#"{"ref": "https://community.example.com/api/core/v3/people/42", "allowed": ["GET", "PUT"]}"#;
/// let link: ResourceLink = serde_json::from_str(json).unwrap();
/// assert!(link.allows("PUT"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceLink {
    /// Absolute URL of the linked resource.
    #[serde(rename = "ref")]
    pub href: String,

    /// HTTP methods the authenticated user may use on the resource.
    #[serde(default)]
    pub allowed: Vec<String>,
}

impl ResourceLink {
    /// Returns `true` if `method` is permitted on the linked resource.
    pub fn allows(&self, method: &str) -> bool {
        self.allowed.iter().any(|m| m.eq_ignore_ascii_case(method))
    }
}

/// Text body of a content item or comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBody {
    /// The body text. HTML unless `mime_type` says otherwise.
    pub text: String,

    /// MIME type of `text`, e.g. `text/html`.
    #[serde(rename = "type", default = "default_body_type")]
    pub mime_type: String,
}

fn default_body_type() -> String {
    "text/html".to_string()
}

impl ContentBody {
    /// Creates an HTML body.
    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mime_type: default_body_type(),
        }
    }
}
