//
//  community-sdk
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! The Community API authenticates every call with HTTP Basic authentication.
//! This module holds the username/password pair a client is built with and
//! turns it into an `Authorization` header for each outgoing request.
//!
//! ## Example
//!
//! ```rust
//! use community_sdk::auth::Credential;
//!
//! let credential = Credential::new("jdoe", "s3cret");
//! assert_eq!(credential.username(), "jdoe");
//! assert_eq!(credential.authorization_header(), "Basic amRvZTpzM2NyZXQ=");
//! ```
//!
//! ## Notes
//!
//! - Credentials are immutable once constructed; a client never mutates them.
//! - The header is computed fresh for every request. There is no session reuse.
//! - The password never appears in `Debug` output or in error diagnostics.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;

/// Username and password used for HTTP Basic authentication.
///
/// # Example
///
/// ```rust,no_run
/// use community_sdk::auth::Credential;
/// use reqwest::Client;
///
/// async fn fetch_me(credential: &Credential) -> reqwest::Result<reqwest::Response> {
///     let request = Client::new().get("https://community.example.com/api/core/v3/people/@me");
///     credential.apply_to_request(request).send().await
/// }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    username: String,
    password: String,
}

impl Credential {
    /// Creates a credential from a username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The username this credential authenticates as.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Builds the value of the `Authorization` header.
    ///
    /// Returns `Basic ` followed by the standard base64 encoding of
    /// `username:password`.
    pub fn authorization_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(raw))
    }

    /// Attaches the Basic authentication header to a request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, self.authorization_header())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_header() {
        let credential = Credential::new("Aladdin", "open sesame");
        assert_eq!(
            credential.authorization_header(),
            "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let credential = Credential::new("jdoe", "hunter2");
        let debug = format!("{:?}", credential);
        assert!(debug.contains("jdoe"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_password_with_colon() {
        let credential = Credential::new("user", "pa:ss");
        let encoded = credential
            .authorization_header()
            .trim_start_matches("Basic ")
            .to_string();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, b"user:pa:ss");
    }
}
