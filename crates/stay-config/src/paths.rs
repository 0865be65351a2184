//! Configuration directory paths
//!
//! Uses XDG directories via the `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/stayhub/`
//! - macOS: `~/Library/Application Support/stayhub/`
//! - Windows: `%APPDATA%\stayhub\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "stayhub";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the persisted auth token
pub fn token_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("token"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_exists() {
        let dir = config_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_token_path_is_under_config_dir() {
        let path = token_path().unwrap();
        assert!(path.ends_with("token"));
        assert!(path.starts_with(config_dir().unwrap()));
    }
}
