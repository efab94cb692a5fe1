//! Configuration settings for ghstreak.
//!
//! Settings are loaded from `~/.ghstreak/config.yaml`. Credentials normally
//! come from the environment; the file may carry them as a fallback.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::core::DayBoundary;
use crate::error::StreakError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// GitHub API settings.
    pub github: GitHubConfig,
    /// Response cache settings.
    pub cache: CacheConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Timezone deciding where "today" starts.
    #[serde(default)]
    pub day_boundary: DayBoundary,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply the setting to the `colored` crate globally.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// GitHub API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Login to report on; `GITHUB_USERNAME` takes precedence.
    #[serde(default)]
    pub username: Option<String>,
    /// Personal access token; `GITHUB_TOKEN` takes precedence.
    #[serde(default)]
    pub token: Option<String>,
    /// GraphQL endpoint.
    #[serde(default = "default_graphql_url")]
    pub graphql_url: String,
    /// REST API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// First calendar year to fetch contributions for.
    #[serde(default = "default_first_year")]
    pub first_year: i32,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Number of most recently pushed repositories scanned for commits.
    #[serde(default = "default_repo_limit")]
    pub repo_limit: u32,
    /// Commits listed per repository.
    #[serde(default = "default_commits_per_repo")]
    pub commits_per_repo: u32,
}

/// Response cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Seconds a fetched response stays fresh; 0 refetches on every render.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u32,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

fn default_graphql_url() -> String {
    "https://api.github.com/graphql".to_string()
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

const fn default_first_year() -> i32 {
    2008 // GitHub launch
}

const fn default_timeout_secs() -> u64 {
    15
}

const fn default_repo_limit() -> u32 {
    50
}

const fn default_commits_per_repo() -> u32 {
    20
}

const fn default_ttl_secs() -> u32 {
    crate::github::DEFAULT_TTL_SECS
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
            day_boundary: DayBoundary::default(),
        }
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            username: None,
            token: None,
            graphql_url: default_graphql_url(),
            api_url: default_api_url(),
            first_year: default_first_year(),
            timeout_secs: default_timeout_secs(),
            repo_limit: default_repo_limit(),
            commits_per_repo: default_commits_per_repo(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, StreakError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, StreakError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            StreakError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            StreakError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Resolve the login, preferring an explicit value over the file.
    ///
    /// # Errors
    ///
    /// Returns `StreakError::MissingCredentials` if neither is set.
    pub fn username(&self, explicit: Option<&str>) -> Result<String, StreakError> {
        pick(explicit, self.github.username.as_deref())
            .ok_or(StreakError::MissingCredentials("GITHUB_USERNAME"))
    }

    /// Resolve the token, preferring an explicit value over the file.
    ///
    /// # Errors
    ///
    /// Returns `StreakError::MissingCredentials` if neither is set.
    pub fn token(&self, explicit: Option<&str>) -> Result<String, StreakError> {
        pick(explicit, self.github.token.as_deref())
            .ok_or(StreakError::MissingCredentials("GITHUB_TOKEN"))
    }
}

fn pick(explicit: Option<&str>, fallback: Option<&str>) -> Option<String> {
    explicit
        .or(fallback)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
