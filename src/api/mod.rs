//
//  community-sdk
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the typed client for the Community REST API
//! (`/api/core/v3`).
//!
//! ## Architecture
//!
//! - [`client`]: Request executor, response guard removal and the pagination driver
//! - [`common`]: Shared types (errors, status translation, envelope, query builder)
//! - [`endpoints`]: One method per REST endpoint, with its models and options
//!
//! ## Usage
//!
//! ```rust,no_run
//! use community_sdk::api::CommunityClient;
//! use community_sdk::api::endpoints::PeopleQuery;
//! use community_sdk::auth::Credential;
//!
//! # async fn example() -> Result<(), community_sdk::api::ApiError> {
//! let client = CommunityClient::with_credential(
//!     "https://community.example.com/api/core/v3",
//!     Credential::new("jdoe", "s3cret"),
//! )?;
//!
//! let people = client
//!     .list_people(&PeopleQuery {
//!         tags: vec!["engineering".into()],
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{} engineers", people.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every method returns [`ApiError`]. Status codes with a documented meaning
//! for the endpoint arrive as `ApiError::Endpoint`, whose message is that
//! meaning (e.g. `"person not found"`). Anything else keeps its raw status.

/// Core HTTP client.
///
/// Provides [`CommunityClient`], which handles:
/// - Basic authentication on every request
/// - Response guard removal
/// - Request/response serialization
/// - Following `links.next` across pages
pub mod client;

/// Common types shared by all endpoints.
pub mod common;

/// Typed endpoint methods and models.
pub mod endpoints;

/// Re-export of the main Community API client.
pub use client::CommunityClient;

/// Re-export of the API error type.
pub use common::ApiError;
