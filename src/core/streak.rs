//! Streak calculation.
//!
//! Longest and current runs of active days over a contribution calendar.
//! The two scans deliberately use different gap semantics:
//!
//! - the longest-run scan walks only the dates present in the calendar, so a
//!   date that was never supplied neither breaks nor extends a run;
//! - the current-run walk steps back one calendar day at a time and treats a
//!   missing date as zero.
//!
//! Callers that want both to agree must supply a dense day sequence.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::calendar::{Calendar, ContributionDay};
use super::heatmap::{build_heatmap, HeatCell, HeatLevel};
use crate::error::StreakError;

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// A run of consecutive active days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Streak {
    /// Length in days.
    pub length: usize,
    /// First and last day of the run; `None` when `length` is zero.
    pub range: Option<DateRange>,
}

impl Streak {
    const fn new(length: usize, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            length,
            range: Some(DateRange::new(start, end)),
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.length > 0
    }
}

/// Result of a streak computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakStats {
    /// Reference date the current streak and heatmap are anchored on.
    pub today: NaiveDate,
    /// Earliest and latest active day.
    pub total_range: DateRange,
    /// Number of active days.
    pub active_days: usize,
    pub current_streak: Streak,
    pub longest_streak: Streak,
    /// Last 365 days ending at `today`, oldest first.
    pub heatmap: Vec<HeatCell>,
}

impl StreakStats {
    /// Heatmap bucket labels, oldest first.
    #[must_use]
    pub fn heatmap_levels(&self) -> Vec<HeatLevel> {
        self.heatmap.iter().map(|c| c.level).collect()
    }
}

/// Compute streak statistics from raw contribution records.
///
/// # Errors
///
/// Returns `StreakError::MalformedInput` for an unparseable date and
/// `StreakError::EmptyHistory` when no record has a positive count.
pub fn compute(days: &[ContributionDay], today: NaiveDate) -> Result<StreakStats, StreakError> {
    let calendar = Calendar::from_days(days)?;
    compute_from_calendar(&calendar, today)
}

/// Compute streak statistics from an already-built calendar.
///
/// # Errors
///
/// Returns `StreakError::EmptyHistory` when the calendar has no active day.
pub fn compute_from_calendar(
    calendar: &Calendar,
    today: NaiveDate,
) -> Result<StreakStats, StreakError> {
    let mut active = calendar.active_days();
    let first = active.next().ok_or(StreakError::EmptyHistory)?;
    let (last, active_days) = active.fold((first, 1), |(_, n), d| (d, n + 1));

    Ok(StreakStats {
        today,
        total_range: DateRange::new(first, last),
        active_days,
        current_streak: current_streak(calendar, today),
        longest_streak: longest_streak(calendar),
        heatmap: build_heatmap(calendar, today),
    })
}

/// Longest run over the dates present in the calendar.
///
/// Ties keep the earliest run.
#[must_use]
pub fn longest_streak(calendar: &Calendar) -> Streak {
    let mut best = Streak::default();
    let mut run = 0usize;
    let mut run_start: Option<NaiveDate> = None;

    for (date, count) in calendar.iter() {
        if count == 0 {
            run = 0;
            continue;
        }
        run += 1;
        if run == 1 {
            run_start = Some(date);
        }
        if run > best.length {
            best = Streak::new(run, run_start.unwrap_or(date), date);
        }
    }

    best
}

/// Current run ending today, or yesterday if today has no activity yet.
///
/// The one-day grace only picks the anchor; walking back from the anchor
/// stops at the first zero or missing day.
#[must_use]
pub fn current_streak(calendar: &Calendar, today: NaiveDate) -> Streak {
    let yesterday = today - Duration::days(1);
    let anchor = if calendar.count(today) > 0 {
        today
    } else if calendar.count(yesterday) > 0 {
        yesterday
    } else {
        return Streak::default();
    };

    let mut length = 0;
    let mut start = anchor;
    let mut cursor = anchor;
    while calendar.count(cursor) > 0 {
        start = cursor;
        length += 1;
        cursor -= Duration::days(1);
    }

    Streak::new(length, start, anchor)
}
