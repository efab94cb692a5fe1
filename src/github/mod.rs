//! GitHub API access.
//!
//! The contribution calendar comes from the GraphQL API, one request per
//! calendar year. The daily commit log comes from the REST API and is kept in
//! a short-lived [`ResponseCache`] so repeated refreshes stay cheap.

pub mod cache;
mod client;
pub mod types;

pub use cache::{ResponseCache, DEFAULT_TTL_SECS};
pub use client::{CommitSource, ContributionSource, GitHubClient};
#[cfg(test)]
pub use client::{MockCommitSource, MockContributionSource};
pub use types::{CommitRecord, ContributionHistory, RecentCommits, MESSAGE_LIMIT};

use crate::core::Clock;
use crate::error::StreakError;

/// Recent-commit feed backed by a single-slot cache.
pub struct RecentCommitsFeed<S: CommitSource, C: Clock> {
    source: S,
    cache: ResponseCache<RecentCommits, C>,
}

impl<S: CommitSource, C: Clock> RecentCommitsFeed<S, C> {
    pub const fn new(source: S, cache: ResponseCache<RecentCommits, C>) -> Self {
        Self { source, cache }
    }

    /// Today's and yesterday's commits, refetched only once the cache is stale.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying source.
    pub fn recent(&mut self) -> Result<&RecentCommits, StreakError> {
        let clock = self.cache.clock();
        let (today, boundary) = (clock.today(), clock.boundary());
        let source = &self.source;
        self.cache
            .get_or_try_insert_with(|| source.fetch_recent_commits(today, boundary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DayBoundary, FixedClock};
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    #[test]
    fn test_feed_reuses_cached_commits() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap());
        let mut source = MockCommitSource::new();
        source
            .expect_fetch_recent_commits()
            .withf(|today, boundary| {
                *today == NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
                    && *boundary == DayBoundary::Utc
            })
            .times(2)
            .returning(|_, _| Ok(RecentCommits::default()));

        let cache = ResponseCache::new(&clock, Duration::seconds(60));
        let mut feed = RecentCommitsFeed::new(source, cache);

        feed.recent().unwrap();
        clock.advance(Duration::seconds(30));
        feed.recent().unwrap();
        clock.advance(Duration::seconds(31));
        feed.recent().unwrap();
    }

    #[test]
    fn test_feed_propagates_errors() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap());
        let mut source = MockCommitSource::new();
        source
            .expect_fetch_recent_commits()
            .returning(|_, _| Err(StreakError::Api { status: 403, message: "rate limited".into() }));

        let mut feed = RecentCommitsFeed::new(source, ResponseCache::with_default_ttl(&clock));
        assert!(feed.recent().is_err());
    }

    #[test]
    fn test_feed_passes_clock_boundary() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let clock = FixedClock::at_date_in(date, DayBoundary::Local);
        let mut source = MockCommitSource::new();
        source
            .expect_fetch_recent_commits()
            .withf(move |today, boundary| *today == date && *boundary == DayBoundary::Local)
            .times(1)
            .returning(|_, _| Ok(RecentCommits::default()));

        let mut feed = RecentCommitsFeed::new(source, ResponseCache::with_default_ttl(&clock));
        assert!(feed.recent().unwrap().is_empty());
    }
}
