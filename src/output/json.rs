//! JSON output formatting for ghstreak.

use serde::Serialize;
use serde_json::json;

use crate::core::{HeatLevel, StreakStats};
use crate::error::StreakError;
use crate::github::RecentCommits;
use crate::report::Report;

/// Format the streak summary as JSON (everything except the heatmap).
///
/// # Errors
///
/// Returns `StreakError::Parse` if JSON serialization fails.
pub fn format_summary_json(report: &Report) -> Result<String, StreakError> {
    let output = json!({
        "login": report.login,
        "today": report.today,
        "total_contributions": report.total_contributions,
        "total_range": report.stats.as_ref().map(|s| s.total_range),
        "active_days": report.stats.as_ref().map_or(0, |s| s.active_days),
        "current_streak": report.stats.as_ref().map(|s| s.current_streak).unwrap_or_default(),
        "longest_streak": report.stats.as_ref().map(|s| s.longest_streak).unwrap_or_default(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the heatmap as JSON: one entry per day, oldest first.
///
/// # Errors
///
/// Returns `StreakError::Parse` if JSON serialization fails.
pub fn format_heatmap_json(report: &Report) -> Result<String, StreakError> {
    let cells = report.stats.as_ref().map(|s| s.heatmap.as_slice()).unwrap_or_default();
    let levels: Vec<HeatLevel> = report
        .stats
        .as_ref()
        .map(StreakStats::heatmap_levels)
        .unwrap_or_default();
    let output = json!({
        "today": report.today,
        "days": cells,
        "levels": levels,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the full dashboard as JSON.
///
/// # Errors
///
/// Returns `StreakError::Parse` if JSON serialization fails.
pub fn format_dashboard_json(
    report: &Report,
    commits: Option<&RecentCommits>,
) -> Result<String, StreakError> {
    let output = json!({
        "report": report,
        "commits": commits,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `StreakError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, StreakError> {
    Ok(serde_json::to_string_pretty(value)?)
}
