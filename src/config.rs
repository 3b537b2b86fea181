use std::{env, path::PathBuf};

use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://api.football-data.org/v4";
pub const DEFAULT_SQUADS_PATH: &str = "./data/squads.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_LATEST_SEASON: i32 = 2025;

/// Settings read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub football_data_api_key: String,
    pub football_data_base_url: String,
    pub squads_path: PathBuf,
    pub bind_addr: String,
    pub latest_season: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            football_data_api_key: String::new(),
            football_data_base_url: DEFAULT_BASE_URL.to_string(),
            squads_path: PathBuf::from(DEFAULT_SQUADS_PATH),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            latest_season: DEFAULT_LATEST_SEASON,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let football_data_api_key = value("FOOTBALL_DATA_API_KEY").unwrap_or_else(|| {
            warn!("FOOTBALL_DATA_API_KEY is not set, football-data requests will be rejected.");
            String::new()
        });

        let latest_season = match value("LATEST_SEASON") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("LATEST_SEASON '{}' is not a year, using {}", raw, defaults.latest_season);
                defaults.latest_season
            }),
            None => defaults.latest_season,
        };

        Self {
            football_data_api_key,
            football_data_base_url: value("FOOTBALL_DATA_BASE_URL").unwrap_or(defaults.football_data_base_url),
            squads_path: value("SQUADS_PATH").map(PathBuf::from).unwrap_or(defaults.squads_path),
            bind_addr: value("BIND_ADDR").unwrap_or(defaults.bind_addr),
            latest_season,
        }
    }
}
