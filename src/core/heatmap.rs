//! Heatmap bucketing.
//!
//! Counts map onto five fixed intensity levels; the heatmap is the last
//! [`HEATMAP_DAYS`] days ending at the reference date, oldest first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::calendar::Calendar;

/// Number of slots in the recency heatmap.
pub const HEATMAP_DAYS: usize = 365;

/// Intensity bucket for one heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeatLevel {
    #[serde(rename = "")]
    Empty,
    #[serde(rename = "l1")]
    L1,
    #[serde(rename = "l2")]
    L2,
    #[serde(rename = "l3")]
    L3,
    #[serde(rename = "l4")]
    L4,
}

impl HeatLevel {
    /// Bucket a contribution count: 0, 1-2, 3-5, 6-9, 10+.
    #[must_use]
    pub const fn from_count(count: u32) -> Self {
        match count {
            0 => Self::Empty,
            1..=2 => Self::L1,
            3..=5 => Self::L2,
            6..=9 => Self::L3,
            _ => Self::L4,
        }
    }

    /// Label used in rendered output (`""`, `"l1"` .. `"l4"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::L1 => "l1",
            Self::L2 => "l2",
            Self::L3 => "l3",
            Self::L4 => "l4",
        }
    }
}

impl fmt::Display for HeatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One heatmap slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatCell {
    pub date: NaiveDate,
    pub count: u32,
    pub level: HeatLevel,
}

/// Build the 365-slot heatmap ending at `today`. Index 0 is 364 days ago.
#[must_use]
pub fn build_heatmap(calendar: &Calendar, today: NaiveDate) -> Vec<HeatCell> {
    calendar
        .window(today, HEATMAP_DAYS)
        .into_iter()
        .map(|(date, count)| HeatCell {
            date,
            count,
            level: HeatLevel::from_count(count),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar::ContributionDay;

    #[test]
    fn test_bucket_thresholds() {
        let counts = [0, 1, 2, 3, 5, 6, 9, 10, 100];
        let levels: Vec<HeatLevel> = counts.iter().map(|c| HeatLevel::from_count(*c)).collect();
        assert_eq!(
            levels,
            vec![
                HeatLevel::Empty,
                HeatLevel::L1,
                HeatLevel::L1,
                HeatLevel::L2,
                HeatLevel::L2,
                HeatLevel::L3,
                HeatLevel::L3,
                HeatLevel::L4,
                HeatLevel::L4,
            ]
        );
    }

    #[test]
    fn test_labels_serialize() {
        let json = serde_json::to_string(&[HeatLevel::Empty, HeatLevel::L3]).unwrap();
        assert_eq!(json, r#"["","l3"]"#);
    }

    #[test]
    fn test_heatmap_shape_and_anchor() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let cal = Calendar::from_days(&[
            ContributionDay::new("2024-06-30", 12),
            ContributionDay::new("2023-07-02", 1),
            ContributionDay::new("2023-07-01", 4),
        ])
        .unwrap();

        let cells = build_heatmap(&cal, today);
        assert_eq!(cells.len(), HEATMAP_DAYS);
        assert_eq!(cells[0].date, NaiveDate::from_ymd_opt(2023, 7, 2).unwrap());
        assert_eq!(cells[0].level, HeatLevel::L1);
        assert_eq!(cells[364].date, today);
        assert_eq!(cells[364].level, HeatLevel::L4);
        // 2023-07-01 is 365 days back, outside the window
        assert!(cells.iter().all(|c| c.level != HeatLevel::L2));
    }
}
