//
//  community-sdk
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Makes authenticated requests to any Community API endpoint. Useful for
//! endpoints not covered by other commands and for debugging. The response
//! guard is removed before the body is printed.
//!
//! ## Examples
//!
//! ```bash
//! # Fetch the authenticated user
//! community api /people/@me
//!
//! # Follow every page of a list endpoint
//! community api "/places?filter=type(group)" --paginate
//!
//! # Create a discussion
//! community api -X POST /contents \
//!     -F type=discussion -F subject="Hello" -F content.type=text/html -F content.text="<p>Hi</p>"
//! ```

use std::fs;

use anyhow::{bail, Result};
use clap::Args;
use reqwest::Method;
use serde_json::{Map, Value};

use super::GlobalOptions;
use crate::api::CommunityClient;
use crate::output::{write_json, write_json_compact};

/// Make authenticated API requests
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// API path relative to the REST base (e.g. /people/@me), or an absolute URL
    pub endpoint: String,

    /// HTTP method (GET, POST, PUT, DELETE)
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Request body fields (key=value, nested with dots, values parsed as JSON when possible)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Raw string body fields (key=value)
    #[arg(long, action = clap::ArgAction::Append)]
    pub raw_field: Vec<String>,

    /// Read the request body from a file (- for stdin)
    #[arg(long, short = 'f', conflicts_with_all = ["field", "raw_field"])]
    pub input: Option<String>,

    /// Follow links.next and print every record of a list endpoint
    #[arg(long)]
    pub paginate: bool,

    /// Print compact JSON
    #[arg(long)]
    pub compact: bool,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let method = self.parse_method()?;
        let url = self.resolve_url(&client);

        if self.paginate {
            if method != Method::GET {
                bail!("--paginate only works with GET requests");
            }
            let records: Vec<Value> = client.get_all(&url).await?;
            return self.print(&Value::Array(records));
        }

        let body = self.build_body()?;
        let text = client.execute(method, &url, body.as_ref()).await?;

        if text.trim().is_empty() {
            return Ok(());
        }
        match serde_json::from_str::<Value>(&text) {
            Ok(json) => self.print(&json),
            Err(_) => {
                println!("{}", text);
                Ok(())
            }
        }
    }

    fn print(&self, value: &Value) -> Result<()> {
        if self.compact {
            write_json_compact(value)
        } else {
            write_json(value)
        }
    }

    fn resolve_url(&self, client: &CommunityClient) -> String {
        if self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://") {
            self.endpoint.clone()
        } else if self.endpoint.starts_with('/') {
            format!("{}{}", client.base_url(), self.endpoint)
        } else {
            format!("{}/{}", client.base_url(), self.endpoint)
        }
    }

    fn parse_method(&self) -> Result<Method> {
        match self.method.to_uppercase().as_str() {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            _ => bail!("Unsupported HTTP method: {}", self.method),
        }
    }

    fn build_body(&self) -> Result<Option<Value>> {
        if let Some(input) = &self.input {
            let content = if input == "-" {
                let mut buffer = String::new();
                std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)?;
                buffer
            } else {
                fs::read_to_string(input)?
            };
            return Ok(Some(serde_json::from_str(&content)?));
        }

        if self.field.is_empty() && self.raw_field.is_empty() {
            return Ok(None);
        }

        let mut body = Map::new();
        for field in &self.field {
            let (key, value) = split_field(field)?;
            set_nested_value(&mut body, key, parse_field_value(value));
        }
        for field in &self.raw_field {
            let (key, value) = split_field(field)?;
            set_nested_value(&mut body, key, Value::String(value.to_string()));
        }

        Ok(Some(Value::Object(body)))
    }
}

fn split_field(field: &str) -> Result<(&str, &str)> {
    match field.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("Invalid field format: {}. Expected key=value", field),
    }
}

/// Interprets a `-F` value: literals, numbers and JSON arrays/objects, else a string.
fn parse_field_value(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => {
            if let Ok(n) = raw.parse::<i64>() {
                return Value::Number(n.into());
            }
            if raw.starts_with('[') || raw.starts_with('{') {
                if let Ok(json) = serde_json::from_str(raw) {
                    return json;
                }
            }
            Value::String(raw.to_string())
        }
    }
}

fn set_nested_value(obj: &mut Map<String, Value>, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            obj.insert(key.to_string(), value);
        }
        Some((first, rest)) => {
            let entry = obj
                .entry(first.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(nested) = entry {
                set_nested_value(nested, rest, value);
            }
        }
    }
}
