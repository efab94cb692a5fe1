//! GitHub API payloads and the records derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ContributionDay;

/// Longest commit message kept in a [`CommitRecord`], in characters.
pub const MESSAGE_LIMIT: usize = 80;

// ---- GraphQL ----

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserData {
    pub user: Option<UserContributions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserContributions {
    pub contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContributionsCollection {
    pub contribution_calendar: ContributionCalendar,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContributionCalendar {
    pub total_contributions: u64,
    pub weeks: Vec<ContributionWeek>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContributionWeek {
    pub contribution_days: Vec<ContributionDay>,
}

/// Full contribution history for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionHistory {
    /// Sum of GitHub's per-year `totalContributions`.
    pub total_contributions: u64,
    pub days: Vec<ContributionDay>,
}

impl ContributionHistory {
    pub(crate) fn absorb(&mut self, calendar: ContributionCalendar) {
        self.total_contributions += calendar.total_contributions;
        self.days.extend(
            calendar
                .weeks
                .into_iter()
                .flat_map(|w| w.contribution_days),
        );
    }
}

// ---- REST ----

#[derive(Debug, Deserialize)]
pub(crate) struct RepoSummary {
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitListing {
    pub commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitDetail {
    pub author: Option<CommitAuthor>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitAuthor {
    pub date: DateTime<Utc>,
}

/// A commit shown in the daily commit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub repo: String,
    pub timestamp: DateTime<Utc>,
    /// Message truncated to [`MESSAGE_LIMIT`] characters.
    pub message: String,
}

impl CommitRecord {
    pub fn new(repo: impl Into<String>, timestamp: DateTime<Utc>, message: &str) -> Self {
        Self {
            repo: repo.into(),
            timestamp,
            message: truncate_message(message),
        }
    }
}

/// Commits authored today and yesterday, each newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentCommits {
    pub today: Vec<CommitRecord>,
    pub yesterday: Vec<CommitRecord>,
}

impl RecentCommits {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.today.is_empty() && self.yesterday.is_empty()
    }

    pub(crate) fn sort(&mut self) {
        self.today.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        self.yesterday.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }
}

fn truncate_message(message: &str) -> String {
    message.chars().take(MESSAGE_LIMIT).collect()
}
