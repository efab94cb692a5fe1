//! Output formatting for ghstreak.
//!
//! This module provides formatters for displaying streak reports in various formats.

mod json;
mod pretty;
pub mod visualization;

use crate::cli::args::OutputFormat;
use crate::error::StreakError;
use crate::github::RecentCommits;
use crate::report::Report;

pub use json::*;
pub use pretty::*;

/// Format the streak summary based on output format
///
/// # Errors
///
/// Returns `StreakError::Parse` if JSON serialization fails.
pub fn format_summary(report: &Report, format: OutputFormat) -> Result<String, StreakError> {
    match format {
        OutputFormat::Pretty => Ok(format_summary_pretty(report)),
        OutputFormat::Json => format_summary_json(report),
    }
}

/// Format the heatmap based on output format
///
/// # Errors
///
/// Returns `StreakError::Parse` if JSON serialization fails.
pub fn format_heatmap(report: &Report, format: OutputFormat) -> Result<String, StreakError> {
    match format {
        OutputFormat::Pretty => Ok(format_heatmap_pretty(report)),
        OutputFormat::Json => format_heatmap_json(report),
    }
}

/// Format the commit log based on output format
///
/// # Errors
///
/// Returns `StreakError::Parse` if JSON serialization fails.
pub fn format_commits(recent: &RecentCommits, format: OutputFormat) -> Result<String, StreakError> {
    match format {
        OutputFormat::Pretty => Ok(format_commits_pretty(recent)),
        OutputFormat::Json => to_json(recent),
    }
}

/// Format the dashboard based on output format
///
/// # Errors
///
/// Returns `StreakError::Parse` if JSON serialization fails.
pub fn format_dashboard(
    report: &Report,
    commits: Option<&RecentCommits>,
    format: OutputFormat,
) -> Result<String, StreakError> {
    match format {
        OutputFormat::Pretty => Ok(format_dashboard_pretty(report, commits)),
        OutputFormat::Json => format_dashboard_json(report, commits),
    }
}
