//! Dashboard command implementation.
//!
//! Renders the summary, heatmap and commit log, optionally refreshing on a
//! timer. Both API responses are held in single-slot caches so a short
//! refresh interval does not hammer GitHub.

use log::{info, warn};
use std::io::Write;

use super::Context;
use crate::cli::args::DashboardArgs;
use crate::core::Clock;
use crate::error::StreakError;
use crate::github::{
    CommitSource, ContributionHistory, GitHubClient, RecentCommitsFeed, ResponseCache,
};
use crate::output::format_dashboard;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Caches carried across dashboard refreshes.
struct DashboardState<'a, S: CommitSource> {
    history: ResponseCache<ContributionHistory, &'a dyn Clock>,
    feed: Option<RecentCommitsFeed<S, &'a dyn Clock>>,
}

impl<S: CommitSource> DashboardState<'_, S> {
    fn render(&mut self, ctx: &Context<'_>) -> Result<String, StreakError> {
        let history = self.history.get_or_try_insert_with(|| ctx.load_history())?;
        let report = ctx.report(history)?;
        let commits = self.feed.as_mut().map(RecentCommitsFeed::recent).transpose()?;
        format_dashboard(&report, commits, ctx.format)
    }
}

/// Commit feed for the dashboard, or `None` when it should be skipped.
fn commit_feed<'a>(
    ctx: &Context<'a>,
    args: &DashboardArgs,
) -> Result<Option<RecentCommitsFeed<GitHubClient, &'a dyn Clock>>, StreakError> {
    if args.no_commits {
        return Ok(None);
    }
    match ctx.github() {
        Ok(client) => Ok(Some(RecentCommitsFeed::new(
            client,
            ResponseCache::new(ctx.clock, ctx.cache_ttl()),
        ))),
        // Offline mode still works without credentials
        Err(e) if ctx.input.is_some() => {
            warn!("Skipping commit log: {e}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Execute dashboard command
///
/// With `--refresh`, redraws forever and only returns on error.
///
/// # Errors
///
/// Returns an error if loading data or formatting fails.
pub fn dashboard(ctx: &Context<'_>, args: &DashboardArgs) -> Result<String, StreakError> {
    let mut state = DashboardState {
        history: ResponseCache::new(ctx.clock, ctx.cache_ttl()),
        feed: commit_feed(ctx, args)?,
    };

    let Some(interval) = args.refresh.filter(|s| *s > 0) else {
        return state.render(ctx);
    };

    info!("Refreshing dashboard every {interval}s");
    let mut stdout = std::io::stdout();
    loop {
        let frame = state.render(ctx)?;
        writeln!(stdout, "{CLEAR_SCREEN}{frame}")?;
        stdout.flush()?;
        std::thread::sleep(std::time::Duration::from_secs(interval));
    }
}
