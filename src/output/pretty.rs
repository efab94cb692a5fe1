use colored::Colorize;

use super::visualization::{format_day, render_heatmap, render_sparkline, render_summary_box};
use crate::core::{Streak, HEATMAP_DAYS};
use crate::github::{CommitRecord, RecentCommits};
use crate::report::Report;

/// Days shown in the summary sparkline.
const SPARKLINE_DAYS: usize = 30;

fn range_text(streak: &Streak) -> String {
    streak.range.map_or_else(String::new, |r| {
        format!("{} → {}", format_day(Some(r.start)), format_day(Some(r.end)))
    })
}

fn days_text(n: usize) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{n} days")
    }
}

/// Format the streak summary
pub fn format_summary_pretty(report: &Report) -> String {
    let title = report
        .login
        .as_ref()
        .map_or_else(|| "Streaks".to_string(), |l| format!("Streaks for {l}"));

    let Some(stats) = &report.stats else {
        let items = [
            ("Total", report.total_contributions.to_string()),
            ("Current", days_text(0)),
            ("Longest", days_text(0)),
        ];
        return format!(
            "{}\n  {}",
            render_summary_box(&title, &items),
            "No contributions yet.".dimmed()
        );
    };

    let items = [
        ("Total", report.total_contributions.to_string()),
        (
            "Active",
            format!(
                "{} → {}",
                format_day(Some(stats.total_range.start)),
                format_day(Some(stats.total_range.end))
            ),
        ),
        ("Current", days_text(stats.current_streak.length)),
        ("", range_text(&stats.current_streak)),
        ("Longest", days_text(stats.longest_streak.length)),
        ("", range_text(&stats.longest_streak)),
    ];

    let recent: Vec<u32> = stats
        .heatmap
        .iter()
        .skip(HEATMAP_DAYS.saturating_sub(SPARKLINE_DAYS))
        .map(|c| c.count)
        .collect();

    let mut output = vec![render_summary_box(&title, &items)];
    output.push(format!(
        "  Last {SPARKLINE_DAYS} days: {}",
        render_sparkline(&recent).green()
    ));
    if stats.current_streak.is_active() {
        let status = if stats.current_streak.range.map(|r| r.end) == Some(stats.today) {
            "🔥 Streak extended today".green().to_string()
        } else {
            "⏳ Contribute today to keep the streak".yellow().to_string()
        };
        output.push(format!("  {status}"));
    }
    output.join("\n")
}

/// Format the yearly heatmap
pub fn format_heatmap_pretty(report: &Report) -> String {
    let Some(stats) = &report.stats else {
        return "No contributions in the last year.".dimmed().to_string();
    };

    let active = stats.heatmap.iter().filter(|c| c.count > 0).count();
    let total: u64 = stats.heatmap.iter().map(|c| u64::from(c.count)).sum();

    let mut output = Vec::new();
    output.push(
        format!("📅 {total} contributions in the last year ({active} active days)")
            .bold()
            .to_string(),
    );
    output.push("─".repeat(60));
    output.push(render_heatmap(&stats.heatmap));
    output.join("\n")
}

fn format_commit_table(title: &str, commits: &[CommitRecord]) -> Vec<String> {
    let mut lines = vec![format!("{} ({})", title.bold(), commits.len())];
    if commits.is_empty() {
        lines.push(format!("  {}", "No commits".dimmed()));
        return lines;
    }
    for commit in commits {
        let first_line = commit.message.lines().next().unwrap_or_default();
        lines.push(format!(
            "  {}  {}  {}  {}",
            commit.timestamp.format("%d %b %Y").to_string().dimmed(),
            commit.timestamp.format("%I:%M %p").to_string().yellow(),
            commit.repo.cyan(),
            first_line
        ));
    }
    lines
}

/// Format the daily commit log
pub fn format_commits_pretty(recent: &RecentCommits) -> String {
    let mut output = vec!["🗓  DAILY COMMITS".bold().to_string(), "─".repeat(60)];
    output.extend(format_commit_table("Yesterday", &recent.yesterday));
    output.push(String::new());
    output.extend(format_commit_table("Today", &recent.today));
    output.join("\n")
}

/// Format the full dashboard
pub fn format_dashboard_pretty(report: &Report, commits: Option<&RecentCommits>) -> String {
    let mut output = Vec::new();

    output.push("╔════════════════════════════════════════════════════════════════╗".to_string());
    output.push("║              🔥 GITHUB STREAK DASHBOARD                         ║".to_string());
    output.push("╚════════════════════════════════════════════════════════════════╝".to_string());
    output.push(String::new());
    output.push(format_summary_pretty(report));
    output.push(String::new());
    output.push(format_heatmap_pretty(report));

    if let Some(recent) = commits {
        output.push(String::new());
        output.push(format_commits_pretty(recent));
    }

    output.join("\n")
}
