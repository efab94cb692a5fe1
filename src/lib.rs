//! ghstreak - GitHub contribution streaks for the terminal
//!
//! This crate computes current and longest contribution streaks and a
//! one-year activity heatmap from a GitHub contribution calendar.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod github;
pub mod output;
pub mod report;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use crate::core::{compute, ContributionDay, StreakStats};
pub use error::StreakError;
pub use github::GitHubClient;
