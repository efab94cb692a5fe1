use chrono::{DateTime, Datelike, Duration, NaiveDate, SecondsFormat, TimeZone, Utc};
use log::{debug, error, info};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::config::GitHubConfig;
use crate::core::DayBoundary;
use crate::error::StreakError;
use crate::github::types::{
    CommitListing, CommitRecord, ContributionHistory, GraphQlResponse, RecentCommits,
    RepoSummary, UserData,
};

const CONTRIBUTIONS_QUERY: &str = r"
query($login: String!, $from: DateTime!, $to: DateTime!) {
  user(login: $login) {
    contributionsCollection(from: $from, to: $to) {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            date
            contributionCount
          }
        }
      }
    }
  }
}";

/// Something that can produce a user's contribution calendar.
#[cfg_attr(test, mockall::automock)]
pub trait ContributionSource {
    /// Fetch every contribution day up to `now`.
    fn fetch_contributions(
        &self,
        login: &str,
        now: DateTime<Utc>,
    ) -> Result<ContributionHistory, StreakError>;
}

/// Something that can list the authenticated user's recent commits.
#[cfg_attr(test, mockall::automock)]
pub trait CommitSource {
    /// Commits authored on `today` and the day before, with days split at
    /// `boundary` midnights.
    fn fetch_recent_commits(
        &self,
        today: NaiveDate,
        boundary: DayBoundary,
    ) -> Result<RecentCommits, StreakError>;
}

/// Blocking GitHub API client.
pub struct GitHubClient {
    http: Client,
    graphql_url: String,
    api_url: String,
    first_year: i32,
    repo_limit: u32,
    commits_per_repo: u32,
}

impl GitHubClient {
    /// Build a client authenticated with `token`.
    ///
    /// # Errors
    ///
    /// Returns `StreakError::Config` if the token is not a valid header value
    /// and `StreakError::Http` if the HTTP client cannot be built.
    pub fn new(settings: &GitHubConfig, token: &str) -> Result<Self, StreakError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("ghstreak"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| StreakError::Config(format!("Invalid token: {e}")))?,
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            graphql_url: settings.graphql_url.clone(),
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            first_year: settings.first_year,
            repo_limit: settings.repo_limit,
            commits_per_repo: settings.commits_per_repo,
        })
    }

    /// Read a JSON body, turning non-success statuses into `Api` errors.
    fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, StreakError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            error!("GitHub API error {status}: {message}");
            return Err(StreakError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json()?)
    }

    /// Contribution calendar for one `[from, to]` window.
    fn fetch_window(
        &self,
        login: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        history: &mut ContributionHistory,
    ) -> Result<(), StreakError> {
        debug!("POST {} ({login}, {from} .. {to})", self.graphql_url);
        let body = json!({
            "query": CONTRIBUTIONS_QUERY,
            "variables": {
                "login": login,
                "from": from.to_rfc3339(),
                "to": to.to_rfc3339(),
            }
        });

        let response = self.http.post(&self.graphql_url).json(&body).send()?;
        let payload: GraphQlResponse<UserData> = Self::read_json(response)?;
        if !payload.errors.is_empty() {
            return Err(StreakError::graphql(&payload.errors));
        }

        let user = payload
            .data
            .and_then(|d| d.user)
            .ok_or_else(|| StreakError::Api {
                status: 200,
                message: format!("User '{login}' not found"),
            })?;
        history.absorb(user.contributions_collection.contribution_calendar);
        Ok(())
    }

    fn list_repos(&self) -> Result<Vec<RepoSummary>, StreakError> {
        let url = format!("{}/user/repos", self.api_url);
        debug!("GET {url}");
        let response = self
            .http
            .get(&url)
            .query(&[("per_page", self.repo_limit.to_string()), ("sort", "pushed".to_string())])
            .send()?;
        Self::read_json(response)
    }

    /// Commits in one repository; `None` when the listing is unavailable.
    fn list_commits(
        &self,
        full_name: &str,
        since: &str,
        until: &str,
    ) -> Result<Option<Vec<CommitListing>>, StreakError> {
        let url = format!("{}/repos/{full_name}/commits", self.api_url);
        debug!("GET {url}");
        let response = self
            .http
            .get(&url)
            .query(&[
                ("since", since.to_string()),
                ("until", until.to_string()),
                ("per_page", self.commits_per_repo.to_string()),
            ])
            .send()?;

        if response.status() != reqwest::StatusCode::OK {
            // Empty repositories answer 409; private forks may answer 404.
            debug!("Skipping {full_name}: {}", response.status());
            return Ok(None);
        }
        Ok(Some(response.json()?))
    }
}

impl ContributionSource for GitHubClient {
    fn fetch_contributions(
        &self,
        login: &str,
        now: DateTime<Utc>,
    ) -> Result<ContributionHistory, StreakError> {
        let mut history = ContributionHistory::default();

        for year in self.first_year..=now.year() {
            let from = Utc
                .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
                .single()
                .ok_or_else(|| StreakError::Config(format!("Invalid year {year}")))?;
            let year_end = Utc
                .with_ymd_and_hms(year, 12, 31, 23, 59, 59)
                .single()
                .ok_or_else(|| StreakError::Config(format!("Invalid year {year}")))?;
            self.fetch_window(login, from, year_end.min(now), &mut history)?;
        }

        info!(
            "Fetched {} contribution days ({} total contributions) for {login}",
            history.days.len(),
            history.total_contributions
        );
        Ok(history)
    }
}

impl CommitSource for GitHubClient {
    fn fetch_recent_commits(
        &self,
        today: NaiveDate,
        boundary: DayBoundary,
    ) -> Result<RecentCommits, StreakError> {
        let yesterday = today - Duration::days(1);
        let since = boundary.start_of(yesterday).to_rfc3339_opts(SecondsFormat::Secs, true);
        let until = (boundary.start_of(today + Duration::days(1)) - Duration::seconds(1))
            .to_rfc3339_opts(SecondsFormat::Secs, true);

        let mut recent = RecentCommits::default();
        for repo in self.list_repos()? {
            let Some(listings) = self.list_commits(&repo.full_name, &since, &until)? else {
                continue;
            };
            for listing in listings {
                let Some(author) = listing.commit.author else {
                    continue;
                };
                let record = CommitRecord::new(&repo.full_name, author.date, &listing.commit.message);
                match boundary.date_of(author.date) {
                    d if d == today => recent.today.push(record),
                    d if d == yesterday => recent.yesterday.push(record),
                    _ => {}
                }
            }
        }
        recent.sort();

        info!(
            "Fetched {} commits today, {} yesterday",
            recent.today.len(),
            recent.yesterday.len()
        );
        Ok(recent)
    }
}
