//! Contribution records and the date-keyed calendar built from them.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::StreakError;

/// Date format used by GitHub's contribution calendar.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One day of the contribution calendar as delivered by GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    /// Date string, `YYYY-MM-DD`.
    pub date: String,
    /// Contributions made on that day.
    pub contribution_count: u32,
}

impl ContributionDay {
    pub fn new(date: impl Into<String>, contribution_count: u32) -> Self {
        Self {
            date: date.into(),
            contribution_count,
        }
    }

    /// Parse the date string.
    ///
    /// # Errors
    ///
    /// Returns `StreakError::MalformedInput` if the date is not `YYYY-MM-DD`.
    pub fn parse_date(&self) -> Result<NaiveDate, StreakError> {
        parse_day(&self.date)
    }
}

/// Parse a `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns `StreakError::MalformedInput` when the string is not a valid date.
pub fn parse_day(s: &str) -> Result<NaiveDate, StreakError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| StreakError::MalformedInput(format!("invalid date '{s}': {e}")))
}

/// Date to contribution count mapping, ordered by date.
///
/// Dates that were never supplied read as zero through [`Calendar::count`],
/// but stay absent from [`Calendar::iter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    days: BTreeMap<NaiveDate, u32>,
}

impl Calendar {
    /// Build a calendar from raw records. A repeated date keeps the last count.
    ///
    /// # Errors
    ///
    /// Returns `StreakError::MalformedInput` on the first unparseable date.
    pub fn from_days(days: &[ContributionDay]) -> Result<Self, StreakError> {
        let mut map = BTreeMap::new();
        for day in days {
            map.insert(day.parse_date()?, day.contribution_count);
        }
        Ok(Self { days: map })
    }

    /// Count for `date`, zero when absent.
    #[must_use]
    pub fn count(&self, date: NaiveDate) -> u32 {
        self.days.get(&date).copied().unwrap_or(0)
    }

    /// Present entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.days.iter().map(|(d, c)| (*d, *c))
    }

    /// Dates with a positive count, ascending.
    pub fn active_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.iter().filter(|(_, c)| *c > 0).map(|(d, _)| d)
    }

    /// Counts for `days` consecutive dates ending at `end`, oldest first.
    #[must_use]
    pub fn window(&self, end: NaiveDate, days: usize) -> Vec<(NaiveDate, u32)> {
        (0..days)
            .rev()
            .map(|back| {
                let date = end - Duration::days(back as i64);
                (date, self.count(date))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_deserialize_github_shape() {
        let json = r#"[{"date":"2024-03-01","contributionCount":4}]"#;
        let days: Vec<ContributionDay> = serde_json::from_str(json).unwrap();
        assert_eq!(days, vec![ContributionDay::new("2024-03-01", 4)]);
    }

    #[test]
    fn test_from_days_rejects_bad_date() {
        let days = vec![
            ContributionDay::new("2024-03-01", 1),
            ContributionDay::new("2024-13-01", 1),
        ];
        let err = Calendar::from_days(&days).unwrap_err();
        assert!(matches!(err, StreakError::MalformedInput(_)));
    }

    #[test]
    fn test_missing_date_reads_zero() {
        let cal = Calendar::from_days(&[ContributionDay::new("2024-03-01", 2)]).unwrap();
        assert_eq!(cal.count(date(2024, 3, 1)), 2);
        assert_eq!(cal.count(date(2024, 3, 2)), 0);
        assert!(cal.iter().all(|(d, _)| d != date(2024, 3, 2)));
    }

    #[test]
    fn test_duplicate_date_last_wins() {
        let cal = Calendar::from_days(&[
            ContributionDay::new("2024-03-01", 2),
            ContributionDay::new("2024-03-01", 7),
        ])
        .unwrap();
        assert_eq!(cal.iter().count(), 1);
        assert_eq!(cal.count(date(2024, 3, 1)), 7);
    }

    #[test]
    fn test_window_is_oldest_first() {
        let cal = Calendar::from_days(&[ContributionDay::new("2024-03-03", 5)]).unwrap();
        let window = cal.window(date(2024, 3, 3), 3);
        assert_eq!(
            window,
            vec![(date(2024, 3, 1), 0), (date(2024, 3, 2), 0), (date(2024, 3, 3), 5)]
        );
    }

    #[test]
    fn test_active_days_skip_zero_counts() {
        let cal = Calendar::from_days(&[
            ContributionDay::new("2024-03-01", 2),
            ContributionDay::new("2024-03-02", 0),
            ContributionDay::new("2024-03-03", 3),
        ])
        .unwrap();
        let active: Vec<_> = cal.active_days().collect();
        assert_eq!(active, vec![date(2024, 3, 1), date(2024, 3, 3)]);
    }
}
