//
//  community-sdk
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Manages general settings and the per-host entries that hold a community
//! URL and username. Passwords are only stored when `--store-password` is
//! given; otherwise `COMMUNITY_PASSWORD` supplies them at run time.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::{normalize_host, Config, HostConfig};
use crate::interactive::prompt_password;
use crate::output::OutputFormat;

use super::GlobalOptions;

/// Valid core configuration keys
const VALID_CORE_KEYS: &[&str] = &["default_host", "output"];

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Add or replace a host entry
    SetHost(SetHostArgs),

    /// Remove a host entry
    RemoveHost(RemoveHostArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key (default_host, output)
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key (default_host, output)
    pub key: String,

    /// Configuration value
    pub value: String,
}

#[derive(Args, Debug)]
pub struct SetHostArgs {
    /// Name for the host entry, usually its host name.
    ///
    /// The site URL comes from --url (default https://<name>) and the
    /// username from --username.
    pub name: String,

    /// Prompt for a password and store it in the config file
    #[arg(long)]
    pub store_password: bool,

    /// Make this the default host
    #[arg(long)]
    pub default: bool,
}

#[derive(Args, Debug)]
pub struct RemoveHostArgs {
    /// Host entry to remove
    pub name: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::SetHost(args) => self.set_host(args, global),
            ConfigSubcommand::RemoveHost(args) => self.remove_host(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        validate_key(&args.key)?;
        let config = Config::load()?;
        let value = config.get(&args.key);

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }

        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        validate_key(&args.key)?;
        if args.key == "output" {
            args.value.parse::<OutputFormat>()?;
        }

        let mut config = Config::load()?;
        if args.key == "default_host" && config.host_config(&args.value).is_none() {
            bail!(
                "Host '{}' is not configured. Run 'community config set-host {}' first.",
                args.value,
                args.value
            );
        }
        config.set(&args.key, args.value.clone());
        config.save()?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
                "value": args.value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "{} Set {} = {}",
                style("✓").green(),
                style(&args.key).cyan(),
                args.value
            );
        }

        Ok(())
    }

    fn set_host(&self, args: &SetHostArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        let name = normalize_host(&args.name);
        if name.is_empty() {
            bail!("Host name must not be empty");
        }

        let existing = config.host_config(&name).cloned().unwrap_or_default();
        let url = global
            .url
            .clone()
            .or_else(|| Some(existing.url.clone()).filter(|u| !u.is_empty()))
            .unwrap_or_else(|| format!("https://{}", name));
        let username = global.username.clone().or(existing.username);
        let password = if args.store_password {
            Some(prompt_password("Password", "COMMUNITY_PASSWORD")?)
        } else {
            existing.password
        };

        config.set_host(
            &name,
            HostConfig {
                url: url.clone(),
                username,
                password,
            },
        );
        if args.default || config.core.default_host.is_none() {
            config.set("default_host", name.clone());
        }
        config.save()?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "host": name,
                "url": url,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "{} Configured {} -> {}",
                style("✓").green(),
                style(&name).cyan(),
                url
            );
        }

        Ok(())
    }

    fn remove_host(&self, args: &RemoveHostArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        let name = normalize_host(&args.name);

        if config.hosts.remove(&name).is_none() {
            bail!("Host '{}' is not configured", name);
        }
        if config.core.default_host.as_deref() == Some(name.as_str()) {
            config.core.default_host = None;
        }
        config.save()?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "removed": name,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{} Removed {}", style("✓").green(), style(&name).cyan());
        }

        Ok(())
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;

        if global.json {
            let hosts: serde_json::Map<String, serde_json::Value> = config
                .hosts
                .iter()
                .map(|(name, host)| {
                    (
                        name.clone(),
                        serde_json::json!({
                            "url": host.url,
                            "username": host.username,
                            "password_stored": host.password.is_some(),
                        }),
                    )
                })
                .collect();
            let result = serde_json::json!({
                "core": {
                    "default_host": config.core.default_host,
                    "output": config.core.output,
                },
                "hosts": hosts,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        println!();
        println!("{}", style("Core Configuration").bold());
        println!("{}", "-".repeat(50));
        self.print_kv("default_host", config.core.default_host.as_deref());
        self.print_kv("output", Some(&config.core.output));

        if !config.hosts.is_empty() {
            println!();
            println!("{}", style("Host Configuration").bold());
            println!("{}", "-".repeat(50));
            for (name, host) in &config.hosts {
                println!();
                println!("  {}", style(name).cyan().bold());
                println!("    url: {}", host.url);
                if let Some(username) = &host.username {
                    println!("    username: {}", username);
                }
                if host.password.is_some() {
                    println!("    password: (stored)");
                }
            }
        }

        println!();
        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let config_path = Config::config_path()?;

        if global.json {
            let result = serde_json::json!({
                "path": config_path.display().to_string(),
                "exists": config_path.exists(),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", config_path.display());
        }

        Ok(())
    }

    fn print_kv(&self, key: &str, value: Option<&str>) {
        println!("  {}: {}", style(key).cyan(), value.unwrap_or("-"));
    }
}

fn validate_key(key: &str) -> Result<()> {
    if !VALID_CORE_KEYS.contains(&key) {
        bail!(
            "Unknown configuration key '{}'. Valid keys: {}",
            key,
            VALID_CORE_KEYS.join(", ")
        );
    }
    Ok(())
}
