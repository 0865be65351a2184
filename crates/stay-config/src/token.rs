//! Auth token persistence
//!
//! The token is an opaque credential written on successful login, read by
//! the HTTP layer on every request, and dropped on logout or a failed
//! session check. Only the auth tasks write it; nothing else in the store
//! may touch it.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// Save/read/drop interface over the token file
///
/// Cheap to clone; every clone points at the same file.
#[derive(Debug, Clone)]
pub struct TokenStorage {
    path: PathBuf,
}

impl TokenStorage {
    /// Storage at the default location under the app config dir
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: paths::token_path()?,
        })
    }

    /// Storage at an explicit path (tests, alternate profiles)
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Persist the token, replacing any previous one
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
            .with_context(|| format!("Failed to write token file: {:?}", self.path))?;
        log::info!("Saved auth token to {:?}", self.path);
        Ok(())
    }

    /// Read the persisted token, if any
    ///
    /// A missing or unreadable file reads as "no token"; an anonymous
    /// session is never an error.
    pub fn read(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(token) if !token.trim().is_empty() => Some(token.trim().to_string()),
            Ok(_) => None,
            Err(_) => None,
        }
    }

    /// Remove the persisted token
    pub fn drop_token(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("Dropped auth token at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to remove token file: {:?}", self.path))
            }
        }
    }
}
