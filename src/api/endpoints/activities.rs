//
//  community-sdk
//  api/endpoints/activities.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Activity stream, inbox and activity export endpoints.
//!
//! Activity entries follow the Activity Streams layout: an `actor` performs
//! a `verb` on an `object`, optionally within a `target`.
//!
//! Stream endpoints accept up to [`MAX_ACTIVITY_COUNT`] entries per page.
//! The export endpoint is meant for bulk extraction and accepts up to
//! [`MAX_EXPORT_COUNT`].
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::{Duration, Utc};
//! use community_sdk::api::CommunityClient;
//! use community_sdk::api::endpoints::ActivityQuery;
//!
//! # async fn example(client: &CommunityClient) -> Result<(), community_sdk::api::ApiError> {
//! let since_yesterday = ActivityQuery {
//!     after: Some(Utc::now() - Duration::days(1)),
//!     ..Default::default()
//! };
//!
//! for activity in client.list_activities(&since_yesterday).await? {
//!     println!("{} {}", activity.verb, activity.title);
//! }
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::client::CommunityClient;
use crate::api::common::{
    path_segment, ApiError, Endpoint, EndpointResultExt, Query, MAX_ACTIVITY_COUNT, MAX_COUNT,
    MAX_EXPORT_COUNT,
};

/// One entry in an activity stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default)]
    pub id: Option<String>,

    /// Action performed, e.g. `jive:created` or `jive:liked`.
    #[serde(default)]
    pub verb: String,

    /// Plain-text summary.
    #[serde(default)]
    pub title: String,

    /// HTML rendition of the entry.
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub actor: Option<ActivityActor>,

    #[serde(default)]
    pub object: Option<ActivityObject>,

    /// Place or item the object was acted on within.
    #[serde(default)]
    pub target: Option<ActivityObject>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub published: Option<String>,

    #[serde(default)]
    pub updated: Option<String>,
}

/// The person or system that performed an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityActor {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// The item an activity was performed on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityObject {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// One record of the bulk activity export.
///
/// The export carries analytics detail whose shape varies with the kind of
/// activity, so fields beyond the common ones are kept in `details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedActivity {
    /// Event name, e.g. `ACTIVITY_CREATE_DOCUMENT`.
    #[serde(default)]
    pub name: String,

    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: Option<i64>,

    #[serde(default, rename = "actorID")]
    pub actor_id: Option<i64>,

    #[serde(default)]
    pub actor_type: Option<i64>,

    #[serde(default)]
    pub action_object_id: Option<i64>,

    #[serde(default)]
    pub action_object_type: Option<i64>,

    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl ExportedActivity {
    /// Returns the event time, when present and in range.
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp.and_then(DateTime::from_timestamp_millis)
    }
}

/// Options for [`CommunityClient::list_activities`] and
/// [`CommunityClient::get_person_activities`].
#[derive(Debug, Clone, Default)]
pub struct ActivityQuery {
    /// Only entries newer than this instant.
    pub after: Option<DateTime<Utc>>,
    /// Only entries older than this instant.
    pub before: Option<DateTime<Utc>>,
    /// Page size requested from the server, clamped to [`MAX_ACTIVITY_COUNT`].
    pub count: Option<u32>,
    /// Object types to include, e.g. `content` or `place`.
    pub types: Vec<String>,
    /// Fields to include in each record.
    pub fields: Vec<String>,
}

impl ActivityQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .timestamp("after", self.after)
            .timestamp("before", self.before)
            .filter("type", &self.types)
            .list("fields", &self.fields)
            .count(self.count, MAX_ACTIVITY_COUNT)
    }
}

/// Options for [`CommunityClient::list_inbox`].
#[derive(Debug, Clone, Default)]
pub struct InboxQuery {
    /// Only entries newer than this instant.
    pub after: Option<DateTime<Utc>>,
    /// Only entries older than this instant.
    pub before: Option<DateTime<Utc>>,
    /// Page size requested from the server, clamped to [`MAX_COUNT`].
    pub count: Option<u32>,
    /// Only entries not yet marked read.
    pub unread_only: bool,
    /// Object types to include.
    pub types: Vec<String>,
    /// Fields to include in each record.
    pub fields: Vec<String>,
}

impl InboxQuery {
    fn to_query(&self) -> Query {
        let unread: &[&str] = if self.unread_only { &["true"] } else { &[] };
        Query::new()
            .timestamp("after", self.after)
            .timestamp("before", self.before)
            .filter("unread", unread)
            .filter("type", &self.types)
            .list("fields", &self.fields)
            .count(self.count, MAX_COUNT)
    }
}

/// Options for [`CommunityClient::export_activity`].
#[derive(Debug, Clone, Default)]
pub struct ExportQuery {
    /// Only events after this instant.
    pub after: Option<DateTime<Utc>>,
    /// Only events before this instant.
    pub before: Option<DateTime<Utc>>,
    /// Page size requested from the server, clamped to [`MAX_EXPORT_COUNT`].
    pub count: Option<u32>,
    /// Only these event names.
    pub names: Vec<String>,
    /// Only events by these actor IDs.
    pub users: Vec<String>,
    /// Fields to include in each record.
    pub fields: Vec<String>,
}

impl ExportQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .timestamp("after", self.after)
            .timestamp("before", self.before)
            .filter("name", &self.names)
            .filter("user", &self.users)
            .list("fields", &self.fields)
            .count(self.count, MAX_EXPORT_COUNT)
    }
}

impl CommunityClient {
    /// Lists the authenticated user's activity stream, following every page.
    pub async fn list_activities(&self, query: &ActivityQuery) -> Result<Vec<Activity>, ApiError> {
        let url = self.endpoint_url("/activities", &query.to_query());
        self.get_all(&url).await.for_endpoint(Endpoint::Activities)
    }

    /// Lists the activity of one person, following every page.
    pub async fn get_person_activities(
        &self,
        person_id: &str,
        query: &ActivityQuery,
    ) -> Result<Vec<Activity>, ApiError> {
        let path = format!("/people/{}/activities", path_segment(person_id));
        let url = self.endpoint_url(&path, &query.to_query());
        self.get_all(&url).await.for_endpoint(Endpoint::Activities)
    }

    /// Lists the authenticated user's inbox, following every page.
    pub async fn list_inbox(&self, query: &InboxQuery) -> Result<Vec<Activity>, ApiError> {
        let url = self.endpoint_url("/inbox", &query.to_query());
        self.get_all(&url).await.for_endpoint(Endpoint::Inbox)
    }

    /// Exports raw activity events, following every page.
    pub async fn export_activity(
        &self,
        query: &ExportQuery,
    ) -> Result<Vec<ExportedActivity>, ApiError> {
        let url = self.endpoint_url("/export/activity", &query.to_query());
        self.get_all(&url)
            .await
            .for_endpoint(Endpoint::ActivityExport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_activity_query_clamps_to_stream_maximum() {
        let query = ActivityQuery {
            count: Some(5000),
            ..Default::default()
        }
        .to_query();
        assert_eq!(query.get("count"), Some("1000"));

        let query = ActivityQuery {
            count: Some(500),
            ..Default::default()
        }
        .to_query();
        assert_eq!(query.get("count"), Some("500"));
    }

    #[test]
    fn test_activity_query_timestamps() {
        let after = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let query = ActivityQuery {
            after: Some(after),
            ..Default::default()
        }
        .to_query();

        assert_eq!(query.encode(), "after=2024-01-02T03%3A04%3A05.000%2B0000");
    }

    #[test]
    fn test_inbox_unread_filter() {
        let query = InboxQuery {
            unread_only: true,
            count: Some(1000),
            ..Default::default()
        }
        .to_query();
        assert_eq!(query.get("filter"), Some("unread(true)"));
        assert_eq!(query.get("count"), Some("100"));

        assert!(InboxQuery::default().to_query().is_empty());
    }

    #[test]
    fn test_export_query_allows_large_counts() {
        let query = ExportQuery {
            count: Some(2_000_000),
            names: vec!["ACTIVITY_VIEW_DOCUMENT".into()],
            ..Default::default()
        }
        .to_query();
        assert_eq!(query.get("count"), Some("2000000"));
        assert_eq!(query.get("filter"), Some("name(ACTIVITY_VIEW_DOCUMENT)"));
    }

    #[test]
    fn test_deserialize_activity() {
        let json = r#"{
            "verb": "jive:created",
            "title": "Jane created a document",
            "actor": {"id": "2001", "displayName": "Jane Doe", "objectType": "jive:person"},
            "object": {"id": "1234", "displayName": "Roadmap", "objectType": "jive:document"},
            "published": "2024-01-02T03:04:05.000+0000"
        }"#;

        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.verb, "jive:created");
        assert_eq!(activity.actor.unwrap().display_name, "Jane Doe");
        assert_eq!(
            activity.object.unwrap().display_name.as_deref(),
            Some("Roadmap")
        );
        assert!(activity.target.is_none());
    }

    #[test]
    fn test_exported_activity_keeps_details() {
        let json = r#"{
            "name": "ACTIVITY_VIEW_DOCUMENT",
            "timestamp": 1700000000123,
            "actorID": 2001,
            "actorType": 3,
            "context": {"web": {"userAgent": "curl"}}
        }"#;

        let record: ExportedActivity = serde_json::from_str(json).unwrap();
        assert_eq!(record.actor_id, Some(2001));
        assert!(record.details.contains_key("context"));
        assert_eq!(
            record.occurred_at(),
            Utc.timestamp_millis_opt(1_700_000_000_123).single()
        );
    }
}
