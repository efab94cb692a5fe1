//! Command implementations for ghstreak.
//!
//! This module contains the implementation of all CLI commands.

mod dashboard;
mod shell;

pub use dashboard::dashboard;
pub use shell::completions;

use chrono::Duration;
use std::path::PathBuf;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::core::Clock;
use crate::error::StreakError;
use crate::github::{
    ContributionHistory, ContributionSource, GitHubClient, RecentCommitsFeed, ResponseCache,
};
use crate::output::{format_commits, format_heatmap, format_summary};
use crate::report::{load_history_file, Report};

/// Everything a command needs besides its own arguments.
pub struct Context<'a> {
    pub config: &'a Config,
    pub clock: &'a dyn Clock,
    /// Login from `--user` / `GITHUB_USERNAME`.
    pub user: Option<String>,
    /// Token from `--token` / `GITHUB_TOKEN`.
    pub token: Option<String>,
    /// Offline input file.
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Context<'_> {
    /// Authenticated GitHub client.
    ///
    /// # Errors
    ///
    /// Returns `StreakError::MissingCredentials` without a token.
    pub fn github(&self) -> Result<GitHubClient, StreakError> {
        let token = self.config.token(self.token.as_deref())?;
        GitHubClient::new(&self.config.github, &token)
    }

    /// Login, if one is configured.
    #[must_use]
    pub fn login(&self) -> Option<String> {
        self.config.username(self.user.as_deref()).ok()
    }

    /// Freshness window for cached API responses.
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::seconds(i64::from(self.config.cache.ttl_secs))
    }

    /// Load the contribution history from the input file or from GitHub.
    ///
    /// # Errors
    ///
    /// Returns file, credential and API errors.
    pub fn load_history(&self) -> Result<ContributionHistory, StreakError> {
        if let Some(path) = &self.input {
            return load_history_file(path);
        }
        let login = self.config.username(self.user.as_deref())?;
        fetch_history(&self.github()?, &login, self.clock)
    }

    /// Build the report for `history` anchored on the clock's today.
    ///
    /// # Errors
    ///
    /// Returns `StreakError::MalformedInput` for unparseable dates.
    pub fn report(&self, history: &ContributionHistory) -> Result<Report, StreakError> {
        Report::build(self.login(), history, self.clock.today())
    }
}

/// Fetch a user's history up to the clock's current instant.
///
/// # Errors
///
/// Returns any error from `source`.
pub fn fetch_history<S: ContributionSource + ?Sized>(
    source: &S,
    login: &str,
    clock: &dyn Clock,
) -> Result<ContributionHistory, StreakError> {
    source.fetch_contributions(login, clock.now())
}

/// Execute summary command
///
/// # Errors
///
/// Returns an error if loading the history or formatting fails.
pub fn summary(ctx: &Context<'_>) -> Result<String, StreakError> {
    let report = ctx.report(&ctx.load_history()?)?;
    format_summary(&report, ctx.format)
}

/// Execute heatmap command
///
/// # Errors
///
/// Returns an error if loading the history or formatting fails.
pub fn heatmap(ctx: &Context<'_>) -> Result<String, StreakError> {
    let report = ctx.report(&ctx.load_history()?)?;
    format_heatmap(&report, ctx.format)
}

/// Execute commits command
///
/// # Errors
///
/// Returns an error if credentials are missing or the GitHub API call fails.
pub fn commits(ctx: &Context<'_>) -> Result<String, StreakError> {
    let cache = ResponseCache::new(ctx.clock, ctx.cache_ttl());
    let mut feed = RecentCommitsFeed::new(ctx.github()?, cache);
    format_commits(feed.recent()?, ctx.format)
}
