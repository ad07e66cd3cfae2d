//! Configuration module for VoltRover analytics.
//!
//! Structured configuration loading from environment variables, with CLI
//! flags taking precedence over the environment at the binary boundary.

use crate::domain::trend::DEFAULT_HORIZON;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Days of history a synthetic series spans by default.
pub const DEFAULT_HISTORY_DAYS: usize = 30;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of future steps the forecast projects.
    pub horizon: usize,
    /// Days of history the synthetic generator spans.
    pub history_days: usize,
    /// Data directory for the on-disk history store. Defaults to
    /// `~/.voltrover` when unset.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let horizon = match env::var("VOLTROVER_HORIZON") {
            Ok(v) => v
                .parse::<usize>()
                .context("VOLTROVER_HORIZON must be a non-negative integer")?,
            Err(_) => DEFAULT_HORIZON,
        };

        let history_days = match env::var("VOLTROVER_HISTORY_DAYS") {
            Ok(v) => v
                .parse::<usize>()
                .context("VOLTROVER_HISTORY_DAYS must be a non-negative integer")?,
            Err(_) => DEFAULT_HISTORY_DAYS,
        };

        let data_dir = env::var("VOLTROVER_DATA_DIR").ok().map(PathBuf::from);

        Ok(Self {
            horizon,
            history_days,
            data_dir,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            history_days: DEFAULT_HISTORY_DAYS,
            data_dir: None,
        }
    }
}
