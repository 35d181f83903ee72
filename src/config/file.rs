//
//  community-sdk
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O Module
//!
//! Low-level file operations used by [`Config`](super::Config). They accept
//! `&Path` so callers can pass either `Path` or `PathBuf`, and write
//! operations create missing parent directories.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use community_sdk::config::{config_exists, read_config_file, write_config_file};
//!
//! let path = Path::new("/tmp/community/config.toml");
//!
//! if config_exists(path) {
//!     println!("{}", read_config_file(path)?);
//! } else {
//!     write_config_file(path, "[core]\noutput = \"table\"\n")?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads the contents of a configuration file.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be opened or is not
/// valid UTF-8. The error names the path.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))
}

/// Writes content to a configuration file, creating parent directories.
///
/// On Unix the file is created owner-only (`0600`) because it may hold a
/// password. An existing file is narrowed to `0600` before it is rewritten.
///
/// # Notes
///
/// - Existing files are overwritten without warning
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options
        .open(path)
        .with_context(|| format!("Failed to open config file {}", path.display()))?;

    // The creation mode does not apply to a file that already existed.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))
            .with_context(|| format!("Failed to restrict permissions on {}", path.display()))?;
    }

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write config file {}", path.display()))?;

    Ok(())
}

/// Checks if a configuration file exists.
pub fn config_exists(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert!(!config_exists(&path));
        write_config_file(&path, "[core]\n").unwrap();
        assert!(config_exists(&path));
        assert_eq!(read_config_file(&path).unwrap(), "[core]\n");
    }

    #[test]
    fn test_rewrite_replaces_longer_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        write_config_file(&path, "[core]\noutput = \"table\"\n").unwrap();
        write_config_file(&path, "[core]\n").unwrap();
        assert_eq!(read_config_file(&path).unwrap(), "[core]\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_config_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let fresh = dir.path().join("fresh.toml");
        write_config_file(&fresh, "[core]\n").unwrap();
        let mode = std::fs::metadata(&fresh).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);

        let existing = dir.path().join("existing.toml");
        std::fs::write(&existing, "").unwrap();
        std::fs::set_permissions(&existing, std::fs::Permissions::from_mode(0o644)).unwrap();
        write_config_file(&existing, "[core]\n").unwrap();
        let mode = std::fs::metadata(&existing).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let error = read_config_file(&path).unwrap_err();
        assert!(format!("{error:#}").contains("missing.toml"));
    }
}
