//
//  community-sdk
//  api/endpoints/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Community API Endpoints
//!
//! Typed methods on [`CommunityClient`](crate::api::CommunityClient), one per
//! REST endpoint, grouped by resource:
//!
//! - [`people`]: members, followers and following
//! - [`contents`]: documents, discussions, comments and likes
//! - [`places`]: spaces, groups and projects
//! - [`activities`]: activity streams, inbox and bulk export
//! - [`search`]: full-text search
//!
//! Every method follows the same shape: build a [`Query`](crate::api::common::Query)
//! from its options, call the single-shot executor or the pagination driver,
//! and translate status failures with the message table for its endpoint.

pub mod activities;
pub mod contents;
pub mod people;
pub mod places;
pub mod search;

pub use activities::{
    Activity, ActivityActor, ActivityObject, ActivityQuery, ExportQuery, ExportedActivity,
    InboxQuery,
};
pub use contents::{Comment, CommentQuery, Content, ContentQuery, NewComment, NewContent, ParentPlace};
pub use people::{Account, Email, PeopleQuery, Person, PersonName};
pub use places::{Place, PlaceQuery};
pub use search::SearchQuery;
