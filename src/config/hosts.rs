//
//  community-sdk
//  config/hosts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Host URL helpers.
//!
//! Users usually configure the address of the community site itself
//! (`https://community.example.com`). The REST API lives under a fixed path
//! below it; these helpers turn either form into the API base URL.

/// Path of the REST API below the community site root.
pub const API_PATH: &str = "/api/core/v3";

/// Normalizes a configured host or URL into the REST API base URL.
///
/// - A missing scheme defaults to `https://`
/// - Trailing slashes are removed
/// - [`API_PATH`] is appended unless the URL already ends with it
///
/// # Example
///
/// ```rust
/// use community_sdk::config::api_base_url;
///
/// assert_eq!(
///     api_base_url("community.example.com/"),
///     "https://community.example.com/api/core/v3"
/// );
/// assert_eq!(
///     api_base_url("http://localhost:8080/api/core/v3"),
///     "http://localhost:8080/api/core/v3"
/// );
/// ```
pub fn api_base_url(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');
    let url = if url.starts_with("https://") || url.starts_with("http://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    };

    if url.ends_with(API_PATH) {
        url
    } else {
        format!("{}{}", url, API_PATH)
    }
}

/// Reduces a URL to a lowercase host name suitable as a config key.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let host = host.strip_prefix("https://").unwrap_or(host);
    let host = host.strip_prefix("http://").unwrap_or(host);
    let host = host.split('/').next().unwrap_or(host);
    host.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_url() {
        assert_eq!(
            api_base_url("https://community.example.com"),
            "https://community.example.com/api/core/v3"
        );
        assert_eq!(
            api_base_url(" https://community.example.com/api/core/v3/ "),
            "https://community.example.com/api/core/v3"
        );
    }

    #[test]
    fn test_normalize_host() {
        assert_eq!(
            normalize_host("https://Community.Example.com/api/core/v3"),
            "community.example.com"
        );
        assert_eq!(normalize_host("intranet"), "intranet");
    }
}
