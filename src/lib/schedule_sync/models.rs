use std::{path::PathBuf, time::Duration};

use clap::Parser;
use serde::Deserialize;

pub mod pair_model;
pub mod teacher_model;

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, that contains the addresses of the teacher directory and the schedule backend.
/// 2. Last name (or its beginning) of the teacher to look for.
/// 3. Position of the teacher to load the schedule for, in the sorted search results.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[arg(long, value_name = "LAST_NAME")]
    pub last_name: String,
    #[arg(long, value_name = "INDEX", default_value_t = 0)]
    pub pick: usize,
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. URL of the teacher directory document (a realtime database `.json` endpoint)
/// 2. Base URL of the schedule backend
/// 3. Suffix appended to a last name to close the directory range query
/// 4. How long a single request may take before it is abandoned, in seconds
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub directory_url: String,
    pub schedule_base_url: String,
    #[serde(default = "default_range_sentinel")]
    pub range_sentinel: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_range_sentinel() -> String {
    "яяя".to_owned()
}

fn default_request_timeout_secs() -> u64 {
    10
}

/// Knobs of [`crate::schedule_sync::state::ScheduleSyncState`] that come from the config.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub range_sentinel: String,
    pub request_timeout: Duration,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            range_sentinel: default_range_sentinel(),
            request_timeout: Duration::from_secs(default_request_timeout_secs()),
        }
    }
}

impl From<&Config> for SyncOptions {
    fn from(config: &Config) -> Self {
        Self {
            range_sentinel: config.range_sentinel.to_owned(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}
