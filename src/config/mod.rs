//! Configuration management for ghstreak.
//!
//! This module handles loading configuration from `~/.ghstreak/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{CacheConfig, ColorSetting, Config, GeneralConfig, GitHubConfig};
