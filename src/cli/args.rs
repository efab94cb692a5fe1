use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::core::DayBoundary;

#[derive(Parser)]
#[command(name = "ghstreak")]
#[command(about = "GitHub contribution streaks and heatmap in your terminal")]
#[command(long_about = "ghstreak - GitHub contribution streak dashboard

Fetches your contribution calendar from the GitHub GraphQL API and shows
your current streak, longest streak and a one-year activity heatmap.

QUICK START:
  export GITHUB_USERNAME=octocat GITHUB_TOKEN=ghp_...
  ghstreak                   Show the dashboard
  ghstreak summary           Streak numbers only
  ghstreak heatmap           Last 365 days
  ghstreak commits           Today's and yesterday's commit messages

OFFLINE:
  ghstreak --input days.json summary
  where days.json is [{\"date\": \"2024-05-10\", \"contributionCount\": 3}, ...]

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// GitHub login to report on
    #[arg(long, env = "GITHUB_USERNAME", global = true, hide_env_values = true)]
    pub user: Option<String>,

    /// GitHub personal access token
    #[arg(long, env = "GITHUB_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Reference date instead of the current day (YYYY-MM-DD), taken in the
    /// --day-boundary timezone
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Timezone that decides where "today" starts
    #[arg(long, value_enum, global = true)]
    pub day_boundary: Option<DayBoundary>,

    /// Read contribution days from a JSON file instead of GitHub
    #[arg(long, short = 'i', global = true)]
    pub input: Option<PathBuf>,

    /// Path to an alternative config.yaml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the full dashboard
    ///
    /// Total contributions, current and longest streak, the yearly heatmap
    /// and today's/yesterday's commit messages.
    ///
    /// # Examples
    ///
    ///   ghstreak dashboard              Render once
    ///   ghstreak dashboard --refresh 30 Re-render every 30 seconds
    #[command(alias = "d")]
    Dashboard(DashboardArgs),

    /// Show streak numbers only
    ///
    /// Current streak, longest streak and the active date range.
    #[command(alias = "s")]
    Summary,

    /// Show the 365-day contribution heatmap
    #[command(alias = "h")]
    Heatmap,

    /// Show commit messages from today and yesterday
    #[command(alias = "c")]
    Commits,

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   source <(ghstreak completions bash)
    ///   ghstreak completions zsh > ~/.zsh/completions/_ghstreak
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the dashboard command.
#[derive(Args, Default)]
pub struct DashboardArgs {
    /// Re-render every N seconds until interrupted
    #[arg(long, short = 'r')]
    pub refresh: Option<u64>,

    /// Skip the commit log (no REST calls)
    #[arg(long)]
    pub no_commits: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_subcommand() {
        let cli = Cli::try_parse_from(["ghstreak"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_summary_json() {
        let cli = Cli::try_parse_from(["ghstreak", "summary", "-o", "json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Summary)));
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_dashboard_refresh() {
        let cli = Cli::try_parse_from(["ghstreak", "dashboard", "--refresh", "30", "--no-commits"])
            .unwrap();
        if let Some(Commands::Dashboard(args)) = cli.command {
            assert_eq!(args.refresh, Some(30));
            assert!(args.no_commits);
        } else {
            panic!("Expected Dashboard command");
        }
    }

    #[test]
    fn test_cli_aliases() {
        let cli = Cli::try_parse_from(["ghstreak", "h"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Heatmap)));
        let cli = Cli::try_parse_from(["ghstreak", "c"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Commits)));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from([
            "ghstreak",
            "heatmap",
            "--today",
            "2024-05-10",
            "--input",
            "days.json",
            "--day-boundary",
            "local",
        ])
        .unwrap();
        assert_eq!(cli.today.as_deref(), Some("2024-05-10"));
        assert_eq!(cli.input, Some(PathBuf::from("days.json")));
        assert_eq!(cli.day_boundary, Some(DayBoundary::Local));
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["ghstreak", "completions", "fish"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Fish })
        ));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["ghstreak", "-o", "xml"]).is_err());
    }
}
