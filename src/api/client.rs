//
//  community-sdk
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the Community API
//!
//! This module provides the request executor every endpoint method goes
//! through, and the pagination driver list endpoints use.
//!
//! ## Features
//!
//! - Basic authentication header on every request
//! - Response guard removal before JSON decoding
//! - Status failures carrying the status code, URL and server message
//! - Sequential `links.next` following for paginated endpoints
//!
//! ## Response guard
//!
//! The server prepends a JavaScript guard, `throw 'allowIllegalResourceCall is false.';`,
//! to every response body to stop the JSON being executed as a script.
//! [`strip_response_guard`] removes it before any parsing happens.

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::api::common::{ApiError, Envelope, Query};
use crate::auth::Credential;
use crate::config::ClientConfig;

/// Literal guard the server prepends to every response body.
pub const RESPONSE_GUARD: &str = "throw 'allowIllegalResourceCall is false.';";

/// Removes the response guard from the start of a body.
///
/// Leading whitespace before the guard is tolerated. Bodies without the
/// guard are returned unchanged.
///
/// ```rust
/// use community_sdk::api::client::strip_response_guard;
///
/// let guarded = "throw 'allowIllegalResourceCall is false.';\n{\"id\": \"1\"}";
/// assert_eq!(strip_response_guard(guarded).trim(), "{\"id\": \"1\"}");
/// assert_eq!(strip_response_guard("{\"id\": \"1\"}"), "{\"id\": \"1\"}");
/// ```
pub fn strip_response_guard(body: &str) -> &str {
    body.trim_start()
        .strip_prefix(RESPONSE_GUARD)
        .unwrap_or(body)
}

/// Extracts a human-readable message from an error response body.
///
/// The Community API reports errors as:
/// ```json
/// {"error": {"status": 404, "message": "Human readable message"}}
/// ```
/// Proxies in front of it sometimes answer with `{"message": "..."}` or
/// `{"errors": [{"message": "..."}]}` instead. Returns `None` when the body
/// matches none of these.
pub fn server_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(strip_response_guard(body)).ok()?;

    json.get("error")
        .and_then(|e| e.get("message"))
        .or_else(|| json.get("message"))
        .or_else(|| {
            json.get("errors")
                .and_then(|e| e.as_array())
                .and_then(|arr| arr.first())
                .and_then(|e| e.get("message"))
        })
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

fn status_error(status: StatusCode, url: &str, body: &str) -> ApiError {
    let message = server_message(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unexpected status")
            .to_string()
    });

    ApiError::Status {
        status: status.as_u16(),
        url: url.to_string(),
        message,
    }
}

/// The HTTP client for one Community instance.
///
/// A client is built once from a base URL and a [`Credential`] and reused
/// for any number of calls. It holds no mutable state, so it can be shared
/// freely; each operation performs its requests strictly one after another.
///
/// # Example
///
/// ```rust,no_run
/// use community_sdk::api::CommunityClient;
/// use community_sdk::auth::Credential;
///
/// # async fn example() -> Result<(), community_sdk::api::ApiError> {
/// let client = CommunityClient::with_credential(
///     "https://community.example.com/api/core/v3",
///     Credential::new("jdoe", "s3cret"),
/// )?;
///
/// let me = client.get_me().await?;
/// println!("Signed in as {}", me.display_name);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CommunityClient {
    /// The underlying HTTP client
    http: Client,
    /// Base URL of the REST API, without a trailing slash
    base_url: String,
    /// Credential applied to every request
    credential: Credential,
}

impl CommunityClient {
    /// Creates a client from an explicit configuration object.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::with_credential(&config.base_url, config.credential())
    }

    /// Creates a client for `base_url` authenticating as `credential`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Config`] if `base_url` or the username is empty
    /// - [`ApiError::InvalidUrl`] if `base_url` is not an absolute URL
    /// - [`ApiError::Transport`] if the HTTP client could not be built
    pub fn with_credential(base_url: &str, credential: Credential) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::Config("base URL is empty".to_string()));
        }
        if credential.username().trim().is_empty() {
            return Err(ApiError::Config("username is empty".to_string()));
        }
        Url::parse(&base_url)?;

        let http = Client::builder()
            .user_agent(format!("community-sdk/{}", crate::VERSION))
            .build()?;

        Ok(Self {
            http,
            base_url,
            credential,
        })
    }

    /// Returns the base URL requests are made against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the username this client authenticates as.
    pub fn username(&self) -> &str {
        self.credential.username()
    }

    /// Builds the absolute URL for an endpoint path and query.
    ///
    /// ```rust
    /// use community_sdk::api::CommunityClient;
    /// use community_sdk::api::common::Query;
    /// use community_sdk::auth::Credential;
    ///
    /// let client = CommunityClient::with_credential(
    ///     "https://community.example.com/api/core/v3/",
    ///     Credential::new("jdoe", "pw"),
    /// ).unwrap();
    ///
    /// let url = client.endpoint_url("/people", &Query::new().param("count", 10));
    /// assert_eq!(url, "https://community.example.com/api/core/v3/people?count=10");
    /// ```
    pub fn endpoint_url(&self, path: &str, query: &Query) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query.encode())
        }
    }

    /// Sends one request and returns the guard-stripped response body.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] if the request could not be sent or the body read
    /// - [`ApiError::Status`] for any non-2xx response
    pub async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<String, ApiError> {
        let mut request = self
            .http
            .request(method.clone(), url)
            .header(reqwest::header::ACCEPT, "application/json");
        request = self.credential.apply_to_request(request);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("{} {} -> {}", method, url, status);

        let text = response.text().await?;

        if !status.is_success() {
            return Err(status_error(status, url, &text));
        }

        Ok(strip_response_guard(&text).to_string())
    }

    /// Makes a GET request and decodes the response as `T`.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let text = self.execute(Method::GET, url, None).await?;
        decode(url, &text)
    }

    /// Makes a POST request with a JSON body and decodes the response as `T`.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::Serialize)?;
        let text = self.execute(Method::POST, url, Some(&body)).await?;
        decode(url, &text)
    }

    /// Makes a PUT request with a JSON body and decodes the response as `T`.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::Serialize)?;
        let text = self.execute(Method::PUT, url, Some(&body)).await?;
        decode(url, &text)
    }

    /// Makes a DELETE request, discarding any response body.
    pub async fn delete(&self, url: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, url, None).await?;
        Ok(())
    }

    /// Fetches a single page of a paginated endpoint.
    pub async fn get_page<T: DeserializeOwned>(&self, url: &str) -> Result<Envelope<T>, ApiError> {
        self.get(url).await
    }

    /// Fetches every page of a paginated endpoint starting at `url`.
    ///
    /// Pages are fetched one at a time. After each page its `list` is
    /// appended to the result and, if the page carries `links.next`, that
    /// absolute URL is fetched next. The loop ends on the first page without
    /// a next link; there is no upper bound on the page count.
    ///
    /// # Errors
    ///
    /// Any page failure aborts the whole operation. Records gathered from
    /// earlier pages are dropped and only the error is returned.
    pub async fn get_all<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, ApiError> {
        let mut records = Vec::new();
        let mut next = Some(url.to_string());
        let mut pages = 0usize;

        while let Some(current) = next.take() {
            let page: Envelope<T> = self.get_page(&current).await?;
            pages += 1;
            next = page.next_url().map(str::to_string);

            tracing::debug!(
                "Page {} of {} returned {} record(s), more: {}",
                pages,
                url,
                page.list.len(),
                next.is_some()
            );

            records.extend(page.list);
        }

        Ok(records)
    }
}

fn decode<T: DeserializeOwned>(url: &str, text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|source| ApiError::Parse {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_guard_prefix() {
        let body = format!("{}\n{{\"list\": []}}", RESPONSE_GUARD);
        let stripped = strip_response_guard(&body);
        let with: Value = serde_json::from_str(stripped).unwrap();
        let without: Value = serde_json::from_str("{\"list\": []}").unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_strip_guard_leading_whitespace() {
        let body = format!("  \r\n{}[1]", RESPONSE_GUARD);
        assert_eq!(strip_response_guard(&body), "[1]");
    }

    #[test]
    fn test_body_without_guard_unchanged() {
        let body = "  {\"id\": \"1\"}";
        assert_eq!(strip_response_guard(body), body);
    }

    #[test]
    fn test_guard_only_stripped_once() {
        let body = format!("{}\"{}\"", RESPONSE_GUARD, RESPONSE_GUARD);
        let value: String = serde_json::from_str(strip_response_guard(&body)).unwrap();
        assert_eq!(value, RESPONSE_GUARD);
    }

    #[test]
    fn test_server_message_formats() {
        assert_eq!(
            server_message(r#"{"error": {"status": 404, "message": "No person with ID 9"}}"#),
            Some("No person with ID 9".to_string())
        );
        assert_eq!(
            server_message(r#"{"message": "Gateway says no"}"#),
            Some("Gateway says no".to_string())
        );
        assert_eq!(
            server_message(r#"{"errors": [{"message": "first"}, {"message": "second"}]}"#),
            Some("first".to_string())
        );
        assert_eq!(server_message("<html>Bad Gateway</html>"), None);
    }

    #[test]
    fn test_server_message_behind_guard() {
        let body = format!("{}{{\"error\": {{\"message\": \"denied\"}}}}", RESPONSE_GUARD);
        assert_eq!(server_message(&body), Some("denied".to_string()));
    }

    #[test]
    fn test_status_error_falls_back_to_reason() {
        let error = status_error(StatusCode::NOT_FOUND, "https://example.com/x", "");
        match error {
            ApiError::Status {
                status, message, ..
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let result = CommunityClient::with_credential("not a url", Credential::new("u", "p"));
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_empty_base_url_or_username_is_a_config_error() {
        let result = CommunityClient::with_credential("  ", Credential::new("u", "p"));
        assert!(matches!(result, Err(ApiError::Config(_))));

        let result = CommunityClient::with_credential(
            "https://community.example.com/api/core/v3",
            Credential::new("", "p"),
        );
        match result {
            Err(ApiError::Config(message)) => assert!(message.contains("username")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let client = CommunityClient::with_credential(
            "https://community.example.com/api/core/v3/",
            Credential::new("u", "p"),
        )
        .unwrap();
        assert_eq!(
            client.endpoint_url("/people/@me", &Query::new()),
            "https://community.example.com/api/core/v3/people/@me"
        );
    }
}
