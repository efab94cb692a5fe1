//! Core streak logic for ghstreak.
//!
//! Everything here is pure: no I/O, no ambient clock reads.

pub mod calendar;
pub mod clock;
pub mod heatmap;
pub mod streak;

pub use calendar::{parse_day, Calendar, ContributionDay, DATE_FORMAT};
pub use clock::{Clock, DayBoundary, FixedClock, SystemClock};
pub use heatmap::{build_heatmap, HeatCell, HeatLevel, HEATMAP_DAYS};
pub use streak::{
    compute, compute_from_calendar, current_streak, longest_streak, DateRange, Streak,
    StreakStats,
};
