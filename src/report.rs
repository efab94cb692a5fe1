//! Streak report assembled from a fetched or loaded contribution history.

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{compute_from_calendar, Calendar, ContributionDay, StreakStats};
use crate::error::StreakError;
use crate::github::ContributionHistory;

/// Everything the renderers need for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Login the data belongs to, when known.
    pub login: Option<String>,
    /// Total contributions as reported by GitHub.
    pub total_contributions: u64,
    /// Reference date.
    pub today: NaiveDate,
    /// `None` for an account without any contribution yet.
    pub stats: Option<StreakStats>,
}

impl Report {
    /// Compute the report. An empty history yields `stats: None`.
    ///
    /// # Errors
    ///
    /// Returns `StreakError::MalformedInput` for unparseable dates.
    pub fn build(
        login: Option<String>,
        history: &ContributionHistory,
        today: NaiveDate,
    ) -> Result<Self, StreakError> {
        let calendar = Calendar::from_days(&history.days)?;
        let stats = match compute_from_calendar(&calendar, today) {
            Ok(stats) => Some(stats),
            Err(e) if e.is_empty_history() => {
                warn!("No contributions found; rendering an empty report");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            login,
            total_contributions: history.total_contributions,
            today,
            stats,
        })
    }

    #[must_use]
    pub fn current_streak(&self) -> usize {
        self.stats.as_ref().map_or(0, |s| s.current_streak.length)
    }

    #[must_use]
    pub fn longest_streak(&self) -> usize {
        self.stats.as_ref().map_or(0, |s| s.longest_streak.length)
    }
}

/// Load contribution days from a JSON file.
///
/// Accepts either a bare array of `{date, contributionCount}` records or a
/// saved [`ContributionHistory`] object. For a bare array the total is the
/// sum of the counts.
///
/// # Errors
///
/// Returns `StreakError::Io` if the file cannot be read and
/// `StreakError::MalformedInput` if it is neither shape.
pub fn load_history_file(path: &Path) -> Result<ContributionHistory, StreakError> {
    let contents = std::fs::read_to_string(path)?;
    parse_history(&contents)
        .map_err(|e| StreakError::MalformedInput(format!("{}: {e}", path.display())))
}

fn parse_history(contents: &str) -> Result<ContributionHistory, serde_json::Error> {
    if contents.trim_start().starts_with('[') {
        let days: Vec<ContributionDay> = serde_json::from_str(contents)?;
        let total_contributions = days.iter().map(|d| u64::from(d.contribution_count)).sum();
        Ok(ContributionHistory {
            total_contributions,
            days,
        })
    } else {
        serde_json::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_build_empty_history_renders_zeros() {
        let history = ContributionHistory {
            total_contributions: 0,
            days: vec![ContributionDay::new("2024-05-10", 0)],
        };
        let report = Report::build(None, &history, date(2024, 5, 10)).unwrap();
        assert!(report.stats.is_none());
        assert_eq!(report.current_streak(), 0);
        assert_eq!(report.longest_streak(), 0);
    }

    #[test]
    fn test_build_propagates_malformed_input() {
        let history = ContributionHistory {
            total_contributions: 1,
            days: vec![ContributionDay::new("yesterday", 1)],
        };
        let err = Report::build(None, &history, date(2024, 5, 10)).unwrap_err();
        assert!(matches!(err, StreakError::MalformedInput(_)));
    }

    #[test]
    fn test_build_with_activity() {
        let history = ContributionHistory {
            total_contributions: 9,
            days: vec![
                ContributionDay::new("2024-05-09", 4),
                ContributionDay::new("2024-05-10", 5),
            ],
        };
        let report = Report::build(Some("octocat".into()), &history, date(2024, 5, 10)).unwrap();
        assert_eq!(report.current_streak(), 2);
        assert_eq!(report.total_contributions, 9);
    }

    #[test]
    fn test_load_bare_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("days.json");
        std::fs::write(
            &path,
            r#"[{"date":"2024-05-09","contributionCount":4},{"date":"2024-05-10","contributionCount":1}]"#,
        )
        .unwrap();

        let history = load_history_file(&path).unwrap();
        assert_eq!(history.total_contributions, 5);
        assert_eq!(history.days.len(), 2);
    }

    #[test]
    fn test_load_saved_history() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        let saved = ContributionHistory {
            total_contributions: 42,
            days: vec![ContributionDay::new("2024-05-10", 1)],
        };
        std::fs::write(&path, serde_json::to_string(&saved).unwrap()).unwrap();

        assert_eq!(load_history_file(&path).unwrap(), saved);
    }

    #[test]
    fn test_load_garbage_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load_history_file(&path).unwrap_err();
        assert!(matches!(err, StreakError::MalformedInput(_)));
    }
}
