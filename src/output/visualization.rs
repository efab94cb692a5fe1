//! Terminal visualization for streak reports.
//!
//! Provides the contribution grid, sparklines and summary boxes.

use chrono::{Datelike, NaiveDate};
use colored::{ColoredString, Colorize};

use crate::core::{HeatCell, HeatLevel};

/// Characters for sparkline rendering.
const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const CELL: &str = "■";
const EMPTY_CELL: &str = "·";

/// Color a single heatmap cell using GitHub's dark palette.
pub fn paint_level(level: HeatLevel) -> ColoredString {
    match level {
        HeatLevel::Empty => EMPTY_CELL.dimmed(),
        HeatLevel::L1 => CELL.truecolor(0x0e, 0x44, 0x29),
        HeatLevel::L2 => CELL.truecolor(0x00, 0x6d, 0x32),
        HeatLevel::L3 => CELL.truecolor(0x26, 0xa6, 0x41),
        HeatLevel::L4 => CELL.truecolor(0x39, 0xd3, 0x53),
    }
}

/// Lay cells out as a week grid: one row per weekday (Mon-Sun), one column
/// per week. Slots before the first cell or after the last are `None`.
#[must_use]
pub fn heatmap_grid(cells: &[HeatCell]) -> Vec<Vec<Option<HeatCell>>> {
    let Some(first) = cells.first() else {
        return vec![Vec::new(); 7];
    };
    let offset = first.date.weekday().num_days_from_monday() as usize;
    let columns = (cells.len() + offset).div_ceil(7);

    let mut grid = vec![vec![None; columns]; 7];
    for (i, cell) in cells.iter().enumerate() {
        let slot = i + offset;
        grid[slot % 7][slot / 7] = Some(*cell);
    }
    grid
}

/// Month labels aligned to grid columns, two characters per column.
fn month_header(grid: &[Vec<Option<HeatCell>>]) -> String {
    let columns = grid.first().map_or(0, Vec::len);
    let mut header = vec![' '; 4 + columns * 2];
    let mut last_month = None;

    for col in 0..columns {
        let Some(date) = (0..7).find_map(|row| grid[row][col].map(|c| c.date)) else {
            continue;
        };
        if last_month == Some(date.month()) {
            continue;
        }
        last_month = Some(date.month());
        let label = date.format("%b").to_string();
        let start = 4 + col * 2;
        if start + label.len() <= header.len() {
            for (k, ch) in label.chars().enumerate() {
                header[start + k] = ch;
            }
        }
    }

    header.into_iter().collect::<String>().trim_end().to_string()
}

/// Render the contribution heatmap as a colored week grid with legend.
#[must_use]
pub fn render_heatmap(cells: &[HeatCell]) -> String {
    let grid = heatmap_grid(cells);
    let day_labels = ["Mon", "   ", "Wed", "   ", "Fri", "   ", "Sun"];

    let mut lines = vec![month_header(&grid)];
    for (row, label) in grid.iter().zip(day_labels) {
        let mut line = format!("{label} ");
        for slot in row {
            match slot {
                Some(cell) => line.push_str(&paint_level(cell.level).to_string()),
                None => line.push(' '),
            }
            line.push(' ');
        }
        lines.push(line.trim_end().to_string());
    }

    lines.push(String::new());
    let legend: Vec<String> = [
        HeatLevel::Empty,
        HeatLevel::L1,
        HeatLevel::L2,
        HeatLevel::L3,
        HeatLevel::L4,
    ]
    .into_iter()
    .map(|l| paint_level(l).to_string())
    .collect();
    lines.push(format!("Less {} More", legend.join(" ")));

    lines.join("\n")
}

/// Render a sparkline (compact inline chart).
#[must_use]
pub fn render_sparkline(values: &[u32]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let max_value = values.iter().max().copied().unwrap_or(1).max(1);

    values
        .iter()
        .map(|&v| {
            if v == 0 {
                BAR_CHARS[0]
            } else {
                let normalized = (f64::from(v) / f64::from(max_value) * 7.0) as usize;
                BAR_CHARS[normalized.clamp(1, 7)]
            }
        })
        .collect()
}

/// Render a summary box with key metrics.
///
/// # Arguments
///
/// * `title` - Box title
/// * `items` - Vec of (label, value) pairs
#[must_use]
pub fn render_summary_box(title: &str, items: &[(&str, String)]) -> String {
    let max_label_len = items.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let max_value_len = items.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    let content_width = max_label_len + max_value_len + 3; // " : "
    let title_len = title.chars().count();
    let box_width = content_width.max(title_len) + 4;

    let mut lines = Vec::new();

    lines.push(format!("┌{}┐", "─".repeat(box_width)));

    let title_padding = (box_width - title_len) / 2;
    lines.push(format!(
        "│{}{}{}│",
        " ".repeat(title_padding),
        title,
        " ".repeat(box_width - title_padding - title_len)
    ));

    lines.push(format!("├{}┤", "─".repeat(box_width)));

    for (label, value) in items {
        let item_str = format!("{label:>max_label_len$} : {value}");
        let padding = box_width - item_str.chars().count();
        lines.push(format!("│ {}{} │", item_str, " ".repeat(padding - 2)));
    }

    lines.push(format!("└{}┘", "─".repeat(box_width)));

    lines.join("\n")
}

/// `05 Mar 2024`, or an empty string.
#[must_use]
pub fn format_day(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn cells_from(start: NaiveDate, n: usize) -> Vec<HeatCell> {
        (0..n)
            .map(|i| HeatCell {
                date: start + Duration::days(i as i64),
                count: (i % 12) as u32,
                level: HeatLevel::from_count((i % 12) as u32),
            })
            .collect()
    }

    #[test]
    fn test_grid_rows_match_weekdays() {
        // 2024-05-08 is a Wednesday
        let start = NaiveDate::from_ymd_opt(2024, 5, 8).unwrap();
        let cells = cells_from(start, 365);
        let grid = heatmap_grid(&cells);

        assert_eq!(grid.len(), 7);
        assert_eq!(grid[2][0].unwrap().date, start);
        assert!(grid[0][0].is_none());
        for (r, row) in grid.iter().enumerate() {
            for cell in row.iter().flatten() {
                assert_eq!(cell.date.weekday().num_days_from_monday() as usize, r);
            }
        }
        let placed: usize = grid.iter().map(|r| r.iter().flatten().count()).sum();
        assert_eq!(placed, 365);
    }

    #[test]
    fn test_render_heatmap_has_legend_and_rows() {
        colored::control::set_override(false);
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let out = render_heatmap(&cells_from(start, 365));
        assert!(out.contains("Mon"));
        assert!(out.contains("Less"));
        assert!(out.contains("Jan"));
    }

    #[test]
    fn test_render_sparkline() {
        let sparkline = render_sparkline(&[0, 2, 5, 3, 8, 4, 1]);
        assert_eq!(sparkline.chars().count(), 7);
        assert!(sparkline.starts_with(' '));
        assert!(sparkline.contains('▇'));
    }

    #[test]
    fn test_render_sparkline_empty() {
        assert!(render_sparkline(&[]).is_empty());
    }

    #[test]
    fn test_render_summary_box() {
        let items = [
            ("Current", "4 days".to_string()),
            ("Longest", "21 days".to_string()),
        ];
        let box_str = render_summary_box("Streaks", &items);
        assert!(box_str.contains("Streaks"));
        assert!(box_str.contains("21 days"));
    }

    #[test]
    fn test_format_day() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_day(Some(d)), "05 Mar 2024");
        assert_eq!(format_day(None), "");
    }
}
