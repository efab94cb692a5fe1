//! Path resolution for ghstreak configuration files.
//!
//! All ghstreak data lives in `~/.ghstreak/`:
//! - `config.yaml` - Main configuration file
//! - `.env` - Optional credentials file (`GITHUB_USERNAME`, `GITHUB_TOKEN`)

use std::path::PathBuf;

use crate::error::StreakError;

/// Paths to ghstreak configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.ghstreak/`
    pub root: PathBuf,
    /// Config file: `~/.ghstreak/config.yaml`
    pub config_file: PathBuf,
    /// Credentials file: `~/.ghstreak/.env`
    pub env_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, StreakError> {
        let home = std::env::var("HOME")
            .map_err(|_| StreakError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".ghstreak")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            env_file: root.join(".env"),
            root,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_root(PathBuf::from(".ghstreak")))
    }
}
