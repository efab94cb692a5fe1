//! Error types for ghstreak.

use thiserror::Error;

/// Errors produced by the streak calculator, the GitHub client and the CLI.
#[derive(Error, Debug)]
pub enum StreakError {
    /// No day in the queried window has a contribution.
    #[error("No contributions recorded in the queried window")]
    EmptyHistory,

    /// An input record could not be interpreted.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A required credential was not supplied.
    #[error("Missing {0}. Set it in the environment, .env, or config.yaml")]
    MissingCredentials(&'static str),

    /// Configuration file could not be read or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// GitHub answered with a non-success status or a GraphQL error payload.
    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization failure.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Filesystem failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StreakError {
    /// Build an `Api` error from a GraphQL `errors` array.
    pub(crate) fn graphql(errors: &[serde_json::Value]) -> Self {
        let message = errors
            .iter()
            .map(|e| {
                e.get("message")
                    .and_then(serde_json::Value::as_str)
                    .map_or_else(|| e.to_string(), str::to_string)
            })
            .collect::<Vec<_>>()
            .join("; ");
        Self::Api { status: 200, message }
    }

    /// Whether the error means "nothing to show yet" rather than a failure.
    #[must_use]
    pub const fn is_empty_history(&self) -> bool {
        matches!(self, Self::EmptyHistory)
    }
}
