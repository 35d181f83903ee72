//
//  community-sdk
//  api/common/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query string construction for Community API endpoints.
//!
//! Endpoint methods describe their optional parameters through [`Query`],
//! which applies the policies every endpoint shares:
//!
//! - `count` parameters are silently clamped to the endpoint's documented
//!   server-side maximum
//! - multi-valued parameters are sent as comma-joined lists
//! - timestamps are sent as `yyyy-MM-ddTHH:mm:ss.SSS+0000` in UTC
//!
//! The finished query is `application/x-www-form-urlencoded`, so the `+` of
//! the timestamp offset is sent as `%2B` and never read back as a space.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use community_sdk::api::common::{Query, MAX_COUNT};
//!
//! let after = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
//! let query = Query::new()
//!     .count(Some(500), MAX_COUNT)
//!     .list("fields", ["id", "subject"])
//!     .timestamp("after", Some(after));
//!
//! assert_eq!(
//!     query.encode(),
//!     "count=100&fields=id%2Csubject&after=2024-03-01T09%3A30%3A00.000%2B0000"
//! );
//! ```

use chrono::{DateTime, Utc};
use url::form_urlencoded;

/// Maximum `count` accepted by most list endpoints.
pub const MAX_COUNT: u32 = 100;

/// Maximum `count` accepted by activity stream endpoints.
pub const MAX_ACTIVITY_COUNT: u32 = 1000;

/// Maximum `count` accepted by the activity export endpoint.
pub const MAX_EXPORT_COUNT: u32 = 100_000_000;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f+0000";

/// Formats a UTC timestamp the way the Community API expects it.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use community_sdk::api::common::format_timestamp;
///
/// let ts = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
/// assert_eq!(format_timestamp(&ts), "2023-11-14T22:13:20.123+0000");
/// ```
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a timestamp as returned by the Community API.
///
/// Accepts both the `+0000` offset form the server emits and RFC 3339.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z")
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Clamps a requested page size to an endpoint maximum.
pub fn clamp_count(requested: u32, max: u32) -> u32 {
    if requested > max {
        tracing::debug!("Clamping count {} to endpoint maximum {}", requested, max);
        max
    } else {
        requested
    }
}

/// Percent-encodes a value for use as a single URL path segment.
///
/// ```rust
/// use community_sdk::api::common::path_segment;
///
/// assert_eq!(path_segment("jane doe/admin"), "jane%20doe%2Fadmin");
/// assert_eq!(path_segment("2001"), "2001");
/// ```
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Escapes a value used inside a `filter=name(a,b)` expression.
///
/// Commas and parentheses separate filter arguments, so literal ones are
/// backslash-escaped.
pub fn escape_filter_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, ',' | '(' | ')' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Ordered set of query parameters for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn param(mut self, name: &str, value: impl ToString) -> Self {
        self.pairs.push((name.to_string(), value.to_string()));
        self
    }

    /// Appends a parameter when a value is present.
    pub fn opt<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Appends a comma-joined list parameter. Empty lists are skipped.
    pub fn list<I, S>(self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = join(values, |v| v.to_string());
        if joined.is_empty() {
            self
        } else {
            self.param(name, joined)
        }
    }

    /// Appends `count`, clamped to `max`, when a count was requested.
    pub fn count(self, requested: Option<u32>, max: u32) -> Self {
        self.opt("count", requested.map(|c| clamp_count(c, max)))
    }

    /// Appends a timestamp parameter when a value is present.
    pub fn timestamp(self, name: &str, value: Option<DateTime<Utc>>) -> Self {
        self.opt(name, value.as_ref().map(format_timestamp))
    }

    /// Appends a `filter=name(a,b,...)` expression. Empty lists are skipped.
    ///
    /// `filter` may be repeated; each call adds one expression.
    pub fn filter<I, S>(self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = join(values, escape_filter_value);
        if joined.is_empty() {
            self
        } else {
            self.param("filter", format!("{}({})", name, joined))
        }
    }

    /// Returns `true` if no parameters were added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the value of the first parameter named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Encodes the query as `application/x-www-form-urlencoded` text.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.pairs {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

fn join<I, S>(values: I, map: impl Fn(&str) -> String) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| map(v.as_ref()))
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
